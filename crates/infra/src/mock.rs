//! # テスト用モックリポジトリ
//!
//! ユースケーステストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! roster-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use roster_domain::employee::{Employee, EmployeeId, NewEmployee};

use crate::{error::InfraError, repository::EmployeeRepository};

// ===== MockEmployeeRepository =====

/// PostgreSQL 実装と同じ採番・該当行なしの挙動を持つインメモリ実装
///
/// ID は 1 から順に採番し、削除しても再利用しない（`BIGSERIAL` と同じ）。
#[derive(Clone)]
pub struct MockEmployeeRepository {
    employees: Arc<Mutex<Vec<Employee>>>,
    next_id:   Arc<Mutex<i64>>,
}

impl Default for MockEmployeeRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MockEmployeeRepository {
    pub fn new() -> Self {
        Self {
            employees: Arc::new(Mutex::new(Vec::new())),
            next_id:   Arc::new(Mutex::new(1)),
        }
    }

    /// 保持している従業員のスナップショットを返す
    pub fn employees(&self) -> Vec<Employee> {
        self.employees.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmployeeRepository for MockEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, InfraError> {
        Ok(self.employees())
    }

    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, InfraError> {
        Ok(self
            .employees
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id() == id)
            .cloned())
    }

    async fn insert(&self, employee: &NewEmployee) -> Result<Employee, InfraError> {
        let id = {
            let mut next_id = self.next_id.lock().unwrap();
            let id = *next_id;
            *next_id += 1;
            id
        };
        let created = Employee::new(EmployeeId::new(id), employee.clone());
        self.employees.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update(&self, employee: &Employee) -> Result<(), InfraError> {
        let mut employees = self.employees.lock().unwrap();
        let Some(pos) = employees.iter().position(|e| e.id() == employee.id()) else {
            return Err(InfraError::not_found("Employee", employee.id()));
        };
        employees[pos] = employee.clone();
        Ok(())
    }

    async fn delete(&self, id: EmployeeId) -> Result<(), InfraError> {
        let mut employees = self.employees.lock().unwrap();
        let before = employees.len();
        employees.retain(|e| e.id() != id);
        if employees.len() == before {
            return Err(InfraError::not_found("Employee", id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;

    fn new_employee(first_name: &str) -> NewEmployee {
        NewEmployee {
            first_name: first_name.to_string(),
            last_name:  "Doe".to_string(),
            email:      "johndoe@example.com".to_string(),
            hire_date:  NaiveDate::from_ymd_opt(2022, 12, 12).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_insertは1から順にidを採番する() {
        let repo = MockEmployeeRepository::new();

        let first = repo.insert(&new_employee("John")).await.unwrap();
        let second = repo.insert(&new_employee("Jane")).await.unwrap();

        assert_eq!(first.id(), EmployeeId::new(1));
        assert_eq!(second.id(), EmployeeId::new(2));
    }

    #[tokio::test]
    async fn test_削除したidは再利用されない() {
        let repo = MockEmployeeRepository::new();
        let first = repo.insert(&new_employee("John")).await.unwrap();
        repo.delete(first.id()).await.unwrap();

        let next = repo.insert(&new_employee("Jane")).await.unwrap();

        assert_eq!(next.id(), EmployeeId::new(2));
    }

    #[tokio::test]
    async fn test_存在しないidの更新と削除はnot_foundを返す() {
        let repo = MockEmployeeRepository::new();
        let ghost = Employee::new(EmployeeId::new(99), new_employee("Ghost"));

        assert!(repo.update(&ghost).await.unwrap_err().is_not_found());
        assert!(repo.delete(ghost.id()).await.unwrap_err().is_not_found());
    }
}
