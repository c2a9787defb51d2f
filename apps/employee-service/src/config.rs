//! # Employee Service 設定
//!
//! 組み込みデフォルト → 設定ファイル（JSON）→ 環境変数 の順に読み込み、
//! 後から読んだ値で上書きする。
//!
//! ## 設定ファイル
//!
//! カレントディレクトリの `config.json`（`ROSTER_CONFIG` でパスを変更可能）。
//! ファイルが存在しない場合は読み飛ばす。
//!
//! ```json
//! {
//!   "debug": true,
//!   "server": { "address": ":9090" },
//!   "context": { "timeout": 2 },
//!   "database": { "host": "localhost", "port": 5432, "user": "postgres", "name": "roster" }
//! }
//! ```
//!
//! ## 環境変数
//!
//! プレフィックス `ROSTER`、区切り文字 `__` で各項目を上書きする。
//!
//! | 変数名 | 説明 |
//! |--------|------|
//! | `ROSTER__SERVER__ADDRESS` | バインドアドレス（`host:port` または `:port`） |
//! | `ROSTER__CONTEXT__TIMEOUT` | リクエストのタイムアウト（秒） |
//! | `ROSTER__DATABASE__HOST` | DB ホスト |
//! | `ROSTER__DATABASE__PORT` | DB ポート |
//! | `ROSTER__DATABASE__USER` | DB ユーザー |
//! | `ROSTER__DATABASE__PASSWORD` | DB パスワード（任意） |
//! | `ROSTER__DATABASE__NAME` | DB 名 |

use std::{net::SocketAddr, time::Duration};

use config::{Config, Environment, File, FileFormat};
use roster_infra::db::DbCoordinates;
use serde::Deserialize;
use sqlx::postgres::PgConnectOptions;
use thiserror::Error;

/// 設定ファイルの既定パス
const DEFAULT_CONFIG_PATH: &str = "config.json";

/// 設定ファイルのパスを上書きする環境変数
const CONFIG_PATH_ENV: &str = "ROSTER_CONFIG";

/// 設定の読み込み・検証エラー
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("設定の読み込みに失敗しました: {0}")]
    Load(#[from] config::ConfigError),

    #[error("不正な設定値です: {0}")]
    Invalid(String),
}

/// Employee Service の設定
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// デバッグモード（起動ログにのみ影響）
    #[serde(default)]
    pub debug:    bool,
    pub server:   ServerConfig,
    pub context:  ContextConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// バインドアドレス
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContextConfig {
    /// リクエストごとのタイムアウト（秒）
    pub timeout: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub host:     String,
    pub port:     u16,
    pub user:     String,
    #[serde(default)]
    pub password: Option<String>,
    pub name:     String,
}

impl AppConfig {
    /// 設定ファイルと環境変数から設定を読み込む
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
        Self::load_from(&path, Environment::with_prefix("ROSTER"))
    }

    fn load_from(path: &str, environment: Environment) -> Result<Self, ConfigError> {
        let config: Self = Config::builder()
            .set_default("debug", false)?
            .set_default("server.address", "0.0.0.0:9090")?
            .set_default("context.timeout", 2)?
            .set_default("database.host", "localhost")?
            .set_default("database.port", 5432)?
            .set_default("database.user", "postgres")?
            .set_default("database.name", "roster")?
            .add_source(File::new(path, FileFormat::Json).required(false))
            .add_source(
                environment
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.context.timeout == 0 {
            return Err(ConfigError::Invalid(
                "context.timeout は 1 秒以上である必要があります".to_string(),
            ));
        }
        self.server.socket_addr()?;
        Ok(())
    }

    /// リクエストごとのタイムアウト
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.context.timeout)
    }

    /// DB の接続オプションを組み立てる
    pub fn connect_options(&self) -> PgConnectOptions {
        roster_infra::db::connect_options(&DbCoordinates {
            host:     &self.database.host,
            port:     self.database.port,
            user:     &self.database.user,
            password: self.database.password.as_deref(),
            name:     &self.database.name,
        })
    }
}

impl ServerConfig {
    /// バインドアドレスをパースする
    ///
    /// ホストを省略した `:9090` 形式は全インターフェース（`0.0.0.0`）とみなす。
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let address = if self.address.starts_with(':') {
            format!("0.0.0.0{}", self.address)
        } else {
            self.address.clone()
        };

        address.parse().map_err(|e| {
            ConfigError::Invalid(format!("server.address={:?}: {e}", self.address))
        })
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, io::Write};

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Environment::with_prefix("ROSTER").source(Some(source))
    }

    fn write_config(json: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "roster-config-{}-{}.json",
            std::process::id(),
            json.len()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(json.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_設定ファイルがなければデフォルト値を使う() {
        let config = AppConfig::load_from("/nonexistent/config.json", env(&[])).unwrap();

        assert_eq!(config.server.address, "0.0.0.0:9090");
        assert_eq!(config.request_timeout(), Duration::from_secs(2));
        assert_eq!(config.database.host, "localhost");
        assert_eq!(config.database.port, 5432);
        assert_eq!(config.database.password, None);
        assert!(!config.debug);
    }

    #[test]
    fn test_環境変数が設定ファイルより優先される() {
        // Given
        let path = write_config(
            r#"{"debug": true, "context": {"timeout": 5}, "database": {"host": "db", "port": 6543}}"#,
        );

        // When
        let config = AppConfig::load_from(
            path.to_str().unwrap(),
            env(&[
                ("ROSTER__DATABASE__HOST", "db.internal"),
                ("ROSTER__DATABASE__PASSWORD", "secret"),
            ]),
        )
        .unwrap();
        std::fs::remove_file(&path).ok();

        // Then
        assert!(config.debug);
        assert_eq!(config.context.timeout, 5);
        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.port, 6543);
        assert_eq!(config.database.password.as_deref(), Some("secret"));
    }

    #[test]
    fn test_タイムアウトが0秒の場合はエラー() {
        let result = AppConfig::load_from(
            "/nonexistent/config.json",
            env(&[("ROSTER__CONTEXT__TIMEOUT", "0")]),
        );

        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_不正なバインドアドレスはエラー() {
        let result = AppConfig::load_from(
            "/nonexistent/config.json",
            env(&[("ROSTER__SERVER__ADDRESS", "localhost")]),
        );

        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[rstest]
    #[case(":9090", "0.0.0.0:9090")]
    #[case("127.0.0.1:8080", "127.0.0.1:8080")]
    fn test_socket_addrはホスト省略形式を受け付ける(#[case] raw: &str, #[case] expected: &str) {
        let server = ServerConfig {
            address: raw.to_string(),
        };

        assert_eq!(server.socket_addr().unwrap(), expected.parse().unwrap());
    }

    #[test]
    fn test_connect_optionsはdb設定を反映する() {
        let config = AppConfig::load_from(
            "/nonexistent/config.json",
            env(&[("ROSTER__DATABASE__NAME", "roster_test")]),
        )
        .unwrap();

        let options = config.connect_options();

        assert_eq!(options.get_host(), "localhost");
        assert_eq!(options.get_database(), Some("roster_test"));
    }
}
