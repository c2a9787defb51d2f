//! # Employee Service エラー定義
//!
//! ユースケース・ハンドラで発生するエラーと、HTTP レスポンスへの変換を定義する。
//!
//! レスポンスは成功時と同じエンベロープ（[`ApiResponse`]）で返し、
//! `data` にエラーメッセージをそのまま格納する。
//!
//! | バリアント | ステータス |
//! |-----------|-----------|
//! | `Validation` / `BadRequest` | 400 |
//! | `NotFound` | 404 |
//! | `Database` / `Timeout` | 500 |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use roster_domain::DomainError;
use roster_infra::InfraError;
use roster_shared::ApiResponse;
use thiserror::Error;

/// Employee Service で発生するエラー
#[derive(Debug, Error)]
pub enum CoreError {
    /// 入力値の検証エラー
    #[error("{0}")]
    Validation(String),

    /// パス・リクエストボディの解釈に失敗
    #[error("{0}")]
    BadRequest(String),

    /// 該当する従業員がいない
    #[error("no rows in result set")]
    NotFound,

    /// データベースエラー
    #[error(transparent)]
    Database(InfraError),

    /// リクエストの期限切れ
    #[error("request deadline exceeded")]
    Timeout,
}

impl From<InfraError> for CoreError {
    fn from(e: InfraError) -> Self {
        if e.is_not_found() {
            CoreError::NotFound
        } else {
            CoreError::Database(e)
        }
    }
}

impl From<DomainError> for CoreError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(msg) => CoreError::Validation(msg),
        }
    }
}

impl CoreError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            CoreError::Validation(_) | CoreError::BadRequest(_) => StatusCode::BAD_REQUEST,
            CoreError::NotFound => StatusCode::NOT_FOUND,
            CoreError::Database(_) | CoreError::Timeout => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        match &self {
            CoreError::Database(e) => {
                tracing::error!(
                    error = %e,
                    span_trace = %e.span_trace(),
                    "データベースエラー"
                );
            }
            CoreError::Timeout => {
                tracing::error!("リクエストがタイムアウトしました");
            }
            CoreError::Validation(_) | CoreError::BadRequest(_) | CoreError::NotFound => {}
        }

        (
            self.status_code(),
            Json(ApiResponse::<String>::fail(self.to_string())),
        )
            .into_response()
    }
}
