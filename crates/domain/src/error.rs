//! # ドメイン層エラー定義
//!
//! 入力値の検証失敗を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 必須項目の欠落、形式不正、日付のパース失敗 |
//!
//! メッセージはそのままレスポンスの `data` に埋め込まれるため、
//! 接頭辞を付けずに検証結果の文言だけを保持する。

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// # 例
    ///
    /// - 必須フィールドが未入力（`missing required field: first_name`）
    /// - メールアドレスの形式不正
    /// - 入社日のパース失敗
    #[error("{0}")]
    Validation(String),
}

impl DomainError {
    /// 必須フィールド欠落のバリデーションエラーを生成する
    pub fn missing_field(field: &str) -> Self {
        Self::Validation(format!("missing required field: {field}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fieldはフィールド名を含むメッセージを返す() {
        let err = DomainError::missing_field("last_name");

        assert_eq!(err.to_string(), "missing required field: last_name");
    }

    #[test]
    fn test_validationのdisplayは接頭辞を付けない() {
        let err = DomainError::Validation("please input valid email".to_string());

        assert_eq!(err.to_string(), "please input valid email");
    }
}
