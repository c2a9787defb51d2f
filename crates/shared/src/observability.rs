//! # ログ出力
//!
//! サービス起動時に一度だけ呼ぶトレーシング初期化を提供する。
//!
//! | 環境変数 | 値 | 既定 |
//! |---------|----|------|
//! | `LOG_FORMAT` | `text`（`pretty` も可）/ `json` | `text` |
//! | `RUST_LOG` | `EnvFilter` のディレクティブ | [`DEFAULT_FILTER`] |
//!
//! テキスト形式では各行の先頭に `2024-01-02 15:04:05` 形式のローカル時刻を出す。

/// `RUST_LOG` 未設定時のフィルタ
pub const DEFAULT_FILTER: &str = "info,roster=debug";

/// テキスト形式のタイムスタンプ
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// ログの出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// 1 イベント 1 行の JSON（ログ収集基盤向け）
    Json,
    /// タイムスタンプ付きのテキスト
    #[default]
    Text,
}

impl LogFormat {
    /// `LOG_FORMAT` の値から出力形式を決める
    ///
    /// 未知の値はテキスト形式として扱う。トレーシング初期化前に呼ばれるため、
    /// 警告は stderr に直接書く。
    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            Some("json") => Self::Json,
            None | Some("text" | "pretty") => Self::Text,
            Some(other) => {
                eprintln!("WARNING: LOG_FORMAT={other:?} は未対応のため text で出力します");
                Self::Text
            }
        }
    }

    pub fn from_env() -> Self {
        Self::from_value(std::env::var("LOG_FORMAT").ok().as_deref())
    }
}

/// トレーシングを初期化する
///
/// `tracing_error::ErrorLayer` も登録し、インフラ層のエラーが
/// 生成時点のスパン（`SpanTrace`）を保持できるようにする。
#[cfg(feature = "observability")]
pub fn init_tracing(format: LogFormat) {
    use tracing_subscriber::{
        EnvFilter,
        Layer as _,
        fmt::time::ChronoLocal,
        layer::SubscriberExt,
        util::SubscriberInitExt,
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = match format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
        LogFormat::Text => tracing_subscriber::fmt::layer()
            .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .with(tracing_error::ErrorLayer::default())
        .init();
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::未設定(None, LogFormat::Text)]
    #[case::json(Some("json"), LogFormat::Json)]
    #[case::text(Some("text"), LogFormat::Text)]
    #[case::pretty(Some("pretty"), LogFormat::Text)]
    #[case::大文字(Some("JSON"), LogFormat::Text)]
    #[case::空文字列(Some(""), LogFormat::Text)]
    fn test_from_valueはlog_formatの値から出力形式を決める(
        #[case] value: Option<&str>,
        #[case] expected: LogFormat,
    ) {
        assert_eq!(LogFormat::from_value(value), expected);
    }
}
