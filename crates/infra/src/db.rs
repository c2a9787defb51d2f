//! # PostgreSQL データベース接続管理
//!
//! データベース接続プールの作成、疎通確認、マイグレーションを行う。
//!
//! ## 設計方針
//!
//! - **接続プール**: 毎回接続を張り直すオーバーヘッドを避け、接続を再利用
//! - **接続情報の組み立て**: 接続 URL 文字列ではなく [`PgConnectOptions`] を
//!   ホスト・ポート・ユーザー・DB 名から組み立てる
//! - **埋め込みマイグレーション**: `migrations/` を `sqlx::migrate!` でバイナリに埋め込む
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use roster_infra::db;
//!
//! async fn example() -> Result<(), sqlx::Error> {
//!     let options = db::connect_options(&db::DbCoordinates {
//!         host:     "localhost",
//!         port:     5432,
//!         user:     "postgres",
//!         password: None,
//!         name:     "roster",
//!     });
//!     let pool = db::create_pool(options).await?;
//!     db::ping(&pool).await?;
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use sqlx::{
    PgPool,
    postgres::{PgConnectOptions, PgPoolOptions, PgSslMode},
};

/// データベースの接続先
#[derive(Debug, Clone, Copy)]
pub struct DbCoordinates<'a> {
    pub host:     &'a str,
    pub port:     u16,
    pub user:     &'a str,
    pub password: Option<&'a str>,
    pub name:     &'a str,
}

/// 接続先から PostgreSQL の接続オプションを組み立てる
///
/// SSL は無効（`sslmode=disable`）で接続する。
pub fn connect_options(coordinates: &DbCoordinates<'_>) -> PgConnectOptions {
    let options = PgConnectOptions::new()
        .host(coordinates.host)
        .port(coordinates.port)
        .username(coordinates.user)
        .database(coordinates.name)
        .ssl_mode(PgSslMode::Disable);

    match coordinates.password {
        Some(password) => options.password(password),
        None => options,
    }
}

/// PostgreSQL 接続プールを作成する
///
/// アプリケーション起動時に一度だけ呼び出し、作成したプールを
/// アプリケーション全体で共有する。
///
/// # 設定値
///
/// - `max_connections(10)`: 最大接続数
/// - `acquire_timeout(5秒)`: 接続取得のタイムアウト。超過時はエラー
pub async fn create_pool(options: PgConnectOptions) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await
}

/// データベースとの疎通を確認する
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// データベースマイグレーションを実行する
///
/// `sqlx::migrate!()` マクロで埋め込まれたマイグレーションファイルを
/// 順番に適用する。適用済みのマイグレーションはスキップされる。
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_optionsは接続先を反映する() {
        let options = connect_options(&DbCoordinates {
            host:     "db.internal",
            port:     15432,
            user:     "roster",
            password: Some("secret"),
            name:     "roster_test",
        });

        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 15432);
        assert_eq!(options.get_username(), "roster");
        assert_eq!(options.get_database(), Some("roster_test"));
    }
}
