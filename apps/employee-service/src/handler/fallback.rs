//! # フォールバックハンドラ
//!
//! ルーティングに一致しないリクエストへの応答。

use axum::{Json, http::StatusCode};
use roster_shared::ApiResponse;

/// 未定義のパス
pub async fn route_not_found() -> (StatusCode, Json<ApiResponse<String>>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::fail("route not found")),
    )
}

/// パスは存在するがメソッドが許可されていない
pub async fn method_not_allowed() -> (StatusCode, Json<ApiResponse<String>>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ApiResponse::fail("method not allowed")),
    )
}
