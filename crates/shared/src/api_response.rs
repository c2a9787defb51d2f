//! # API レスポンスエンベロープ
//!
//! すべてのレスポンスで使用する統一形式 `{ "status": "...", "data": T }` を提供する。
//!
//! - 成功時: `{"status":"success","data":<payload>}`（payload がなければ `data` を省略）
//! - 失敗時: `{"status":"fail","data":"<エラーメッセージ>"}`

use serde::{Deserialize, Serialize};

/// レスポンスの成否
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Fail,
}

/// 統一レスポンス型
///
/// ## 使用例
///
/// ```
/// use roster_shared::{ApiResponse, ResponseStatus};
///
/// let response = ApiResponse::success("hello");
/// assert_eq!(response.status, ResponseStatus::Success);
/// assert_eq!(response.data, Some("hello"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: ResponseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data:   Option<T>,
}

impl<T> ApiResponse<T> {
    /// ペイロード付きの成功レスポンスを作成する
    pub fn success(data: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            data:   Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// ペイロードなしの成功レスポンスを作成する
    pub fn ok() -> Self {
        Self {
            status: ResponseStatus::Success,
            data:   None,
        }
    }
}

impl ApiResponse<String> {
    /// エラーメッセージを `data` に載せた失敗レスポンスを作成する
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Fail,
            data:   Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_successはstatusとdataを出力する() {
        let response = ApiResponse::success(vec!["a", "b"]);
        let json = serde_json::to_string(&response).unwrap();

        assert_eq!(json, r#"{"status":"success","data":["a","b"]}"#);
    }

    #[test]
    fn test_okはdataを省略する() {
        let json = serde_json::to_string(&ApiResponse::ok()).unwrap();

        assert_eq!(json, r#"{"status":"success"}"#);
    }

    #[test]
    fn test_failはエラーメッセージをdataに載せる() {
        let response = ApiResponse::fail("missing required field: first_name");
        let json = serde_json::to_string(&response).unwrap();

        assert_eq!(
            json,
            r#"{"status":"fail","data":"missing required field: first_name"}"#
        );
    }

    #[test]
    fn test_空のvecはdataを省略しない() {
        let response = ApiResponse::success(Vec::<i32>::new());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json, serde_json::json!({ "status": "success", "data": [] }));
    }

    #[test]
    fn test_dataなしのjsonをデシリアライズできる() {
        let response: ApiResponse<String> = serde_json::from_str(r#"{"status":"success"}"#).unwrap();

        assert_eq!(response.status, ResponseStatus::Success);
        assert_eq!(response.data, None);
    }
}
