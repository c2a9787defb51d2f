//! # Employee Service ライブラリ
//!
//! 従業員 CRUD の設定・ユースケース・ハンドラを公開する。
//! バイナリ（`main.rs`）はこれらを組み立ててサーバーを起動する。

pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;

use std::sync::Arc;

use axum::{Router, routing::get};
use handler::{
    EmployeeState,
    create_employee,
    delete_employee,
    get_employee,
    list_employees,
    method_not_allowed,
    route_not_found,
    update_employee,
};

/// 従業員 API のルーターを構築する
///
/// 未定義のパス・メソッドにもエンベロープ形式で応答する。
pub fn router(state: Arc<EmployeeState>) -> Router {
    Router::new()
        .route("/employees", get(list_employees).post(create_employee))
        .route(
            "/employees/{id}",
            get(get_employee)
                .put(update_employee)
                .delete(delete_employee),
        )
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
}
