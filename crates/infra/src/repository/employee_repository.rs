//! # EmployeeRepository
//!
//! 従業員情報の永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **1 操作 1 クエリ**: 複数文にまたがるトランザクションは使わない
//! - **該当行なしの扱い**: ID 検索は `Option` で返し、UPDATE / DELETE の影響行数が
//!   0 の場合は [`InfraError::not_found`] を返す
//! - **キャンセル**: 各メソッドの Future をドロップすると実行中のクエリは中断され、
//!   呼び出し元には完了として報告されない
//!
//! ## テーブル
//!
//! `employees (id, first_name, last_name, email, hire_date)`

use async_trait::async_trait;
use chrono::NaiveDate;
use roster_domain::employee::{Employee, EmployeeId, NewEmployee};
use sqlx::PgPool;

use crate::error::InfraError;

const ENTITY: &str = "Employee";

/// 従業員リポジトリトレイト
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// 全従業員を取得する
    ///
    /// 並び順は保証しない。0 件の場合は空の Vec を返す。
    async fn find_all(&self) -> Result<Vec<Employee>, InfraError>;

    /// ID で従業員を検索する
    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, InfraError>;

    /// 従業員を挿入し、DB が採番した ID 付きで返す
    async fn insert(&self, employee: &NewEmployee) -> Result<Employee, InfraError>;

    /// 従業員の 4 項目（名・姓・メール・入社日）を無条件に上書きする
    ///
    /// 該当行がない場合は NotFound を返す。
    async fn update(&self, employee: &Employee) -> Result<(), InfraError>;

    /// 従業員を削除する
    ///
    /// 該当行がない場合は NotFound を返す。
    async fn delete(&self, id: EmployeeId) -> Result<(), InfraError>;
}

/// `employees` テーブルの行
#[derive(Debug, sqlx::FromRow)]
struct EmployeeRow {
    id:         i64,
    first_name: String,
    last_name:  String,
    email:      String,
    hire_date:  NaiveDate,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Employee::from_db(
            EmployeeId::new(row.id),
            row.first_name,
            row.last_name,
            row.email,
            row.hire_date,
        )
    }
}

/// PostgreSQL 実装の EmployeeRepository
#[derive(Debug, Clone)]
pub struct PostgresEmployeeRepository {
    pool: PgPool,
}

impl PostgresEmployeeRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Employee>, InfraError> {
        let rows = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, first_name, last_name, email, hire_date
            FROM employees
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Employee::from).collect())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, InfraError> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, first_name, last_name, email, hire_date
            FROM employees
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Employee::from))
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, employee: &NewEmployee) -> Result<Employee, InfraError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO employees (first_name, last_name, email, hire_date)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .bind(employee.hire_date)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(employee_id = id, "従業員を登録しました");
        Ok(Employee::new(EmployeeId::new(id), employee.clone()))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %employee.id()))]
    async fn update(&self, employee: &Employee) -> Result<(), InfraError> {
        let result = sqlx::query(
            r#"
            UPDATE employees
            SET first_name = $2, last_name = $3, email = $4, hire_date = $5
            WHERE id = $1
            "#,
        )
        .bind(employee.id().as_i64())
        .bind(employee.first_name())
        .bind(employee.last_name())
        .bind(employee.email())
        .bind(employee.hire_date())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(InfraError::not_found(ENTITY, employee.id()));
        }

        Ok(())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: EmployeeId) -> Result<(), InfraError> {
        let result = sqlx::query(
            r#"
            DELETE FROM employees
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(InfraError::not_found(ENTITY, id));
        }

        Ok(())
    }
}
