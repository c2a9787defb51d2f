//! # 従業員ユースケース
//!
//! 一覧・取得・登録・削除はリポジトリへの委譲のみ。
//! 更新は「既存の取得 → 差分の重ね合わせ → 全項目の上書き保存」で行う。

use std::sync::Arc;

use roster_domain::employee::{Employee, EmployeeId, EmployeePatch, NewEmployee};
use roster_infra::repository::EmployeeRepository;

use crate::error::CoreError;

/// 従業員ユースケースの実装
pub struct EmployeeUseCaseImpl {
    employee_repository: Arc<dyn EmployeeRepository>,
}

impl EmployeeUseCaseImpl {
    /// 新しいユースケースインスタンスを作成
    pub fn new(employee_repository: Arc<dyn EmployeeRepository>) -> Self {
        Self {
            employee_repository,
        }
    }

    pub async fn list_employees(&self) -> Result<Vec<Employee>, CoreError> {
        Ok(self.employee_repository.find_all().await?)
    }

    pub async fn get_employee(&self, id: EmployeeId) -> Result<Employee, CoreError> {
        self.employee_repository
            .find_by_id(id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    pub async fn register_employee(&self, employee: NewEmployee) -> Result<Employee, CoreError> {
        let created = self.employee_repository.insert(&employee).await?;
        tracing::info!(employee_id = %created.id(), "従業員を登録しました");
        Ok(created)
    }

    /// 差分を既存の従業員に重ねて保存する
    ///
    /// 指定された項目はそれぞれ独立に反映する。
    /// 既存の取得と保存の間に他のリクエストが同じ従業員を更新した場合は
    /// 後から保存した方が勝つ。
    pub async fn update_employee(
        &self,
        id: EmployeeId,
        patch: EmployeePatch,
    ) -> Result<Employee, CoreError> {
        let existing = self.get_employee(id).await?;
        let updated = patch.apply_to(existing);

        self.employee_repository.update(&updated).await?;
        tracing::info!(employee_id = %id, "従業員を更新しました");

        Ok(updated)
    }

    pub async fn delete_employee(&self, id: EmployeeId) -> Result<(), CoreError> {
        self.employee_repository.delete(id).await?;
        tracing::info!(employee_id = %id, "従業員を削除しました");
        Ok(())
    }
}
