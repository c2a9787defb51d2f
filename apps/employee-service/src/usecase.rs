//! # ユースケース層
//!
//! Employee Service のビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **トレイトベースの設計**: ハンドラのテストでスタブに差し替えられるようトレイトを定義
//! - **依存性注入**: リポジトリを外部から注入
//! - **素通し**: 更新以外の操作はリポジトリへの委譲のみ

pub mod employee;

use async_trait::async_trait;
pub use employee::EmployeeUseCaseImpl;
use roster_domain::employee::{Employee, EmployeeId, EmployeePatch, NewEmployee};

use crate::error::CoreError;

/// 従業員ユースケーストレイト
#[async_trait]
pub trait EmployeeUseCase: Send + Sync {
    /// 全従業員を取得する
    async fn list_employees(&self) -> Result<Vec<Employee>, CoreError>;

    /// ID で従業員を取得する
    ///
    /// 該当なしの場合は `CoreError::NotFound` を返す。
    async fn get_employee(&self, id: EmployeeId) -> Result<Employee, CoreError>;

    /// 従業員を登録する
    async fn register_employee(&self, employee: NewEmployee) -> Result<Employee, CoreError>;

    /// 既存の従業員に差分を重ねて保存し、保存後の従業員を返す
    async fn update_employee(
        &self,
        id: EmployeeId,
        patch: EmployeePatch,
    ) -> Result<Employee, CoreError>;

    /// 従業員を削除する
    async fn delete_employee(&self, id: EmployeeId) -> Result<(), CoreError>;
}

/// EmployeeUseCaseImpl に EmployeeUseCase トレイトを実装
#[async_trait]
impl EmployeeUseCase for EmployeeUseCaseImpl {
    async fn list_employees(&self) -> Result<Vec<Employee>, CoreError> {
        self.list_employees().await
    }

    async fn get_employee(&self, id: EmployeeId) -> Result<Employee, CoreError> {
        self.get_employee(id).await
    }

    async fn register_employee(&self, employee: NewEmployee) -> Result<Employee, CoreError> {
        self.register_employee(employee).await
    }

    async fn update_employee(
        &self,
        id: EmployeeId,
        patch: EmployeePatch,
    ) -> Result<Employee, CoreError> {
        self.update_employee(id, patch).await
    }

    async fn delete_employee(&self, id: EmployeeId) -> Result<(), CoreError> {
        self.delete_employee(id).await
    }
}
