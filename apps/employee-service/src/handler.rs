//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュールで re-export し、フラットな API を提供
//! - ハンドラは入力の解釈と検証までを担い、処理は usecase 層に委譲
//!
//! ## ハンドラ一覧
//!
//! - `employee`: 従業員の CRUD
//! - `fallback`: 未定義のパス・メソッド

pub mod employee;
pub mod fallback;

pub use employee::{
    EmployeeState,
    create_employee,
    delete_employee,
    get_employee,
    list_employees,
    update_employee,
};
pub use fallback::{method_not_allowed, route_not_found};
