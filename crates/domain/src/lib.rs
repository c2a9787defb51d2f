//! # Roster ドメイン層
//!
//! 従業員レコードとその検証ルールを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 一意の識別子を持つ従業員レコード（[`employee::Employee`]）
//! - **値オブジェクト**: 識別子 [`employee::EmployeeId`]
//! - **ドメインエラー**: 入力検証の失敗を表現するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! employee-service → infra → domain
//!         ↘                   ↑
//!           shared            │
//!         └───────────────────┘
//! ```
//!
//! ドメイン層はインフラ層（DB、HTTP）には一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`employee`] - 従業員エンティティ、登録候補、部分更新
//! - [`error`] - ドメイン層で発生するエラーの定義
//!
//! ## 使用例
//!
//! ```rust
//! use roster_domain::employee::NewEmployee;
//!
//! let employee = NewEmployee::try_new(
//!     "John".to_string(),
//!     "Doe".to_string(),
//!     "johndoe@example.com".to_string(),
//!     "2022-12-12",
//! )
//! .unwrap();
//! assert_eq!(employee.hire_date.to_string(), "2022-12-12");
//! ```

pub mod employee;
pub mod error;

pub use error::DomainError;
