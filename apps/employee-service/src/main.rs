//! # Employee Service サーバー
//!
//! 従業員レコードの CRUD を提供する HTTP サーバー。
//!
//! ## 起動シーケンス
//!
//! 1. `.env` の読み込み
//! 2. トレーシング初期化
//! 3. 設定読み込み（[`AppConfig`]）
//! 4. DB 接続プール作成と疎通確認
//! 5. マイグレーション適用
//! 6. リポジトリ → ユースケース → ハンドラの組み立て
//! 7. 待ち受け開始（Ctrl-C / SIGTERM でグレースフルシャットダウン）
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! cargo run -p roster-employee-service
//!
//! # 設定ファイルを指定
//! ROSTER_CONFIG=/etc/roster/config.json cargo run -p roster-employee-service --release
//! ```

use std::sync::Arc;

use roster_employee_service::{
    config::AppConfig,
    handler::EmployeeState,
    router,
    usecase::EmployeeUseCaseImpl,
};
use roster_infra::{
    db,
    repository::{EmployeeRepository, PostgresEmployeeRepository},
};
use roster_shared::observability::{LogFormat, init_tracing};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Employee Service サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    init_tracing(LogFormat::from_env());
    let _tracing_guard = tracing::info_span!("app", service = "employee-service").entered();

    // 設定読み込み
    let config = AppConfig::load()?;
    if config.debug {
        tracing::info!("デバッグモードで起動します");
    }
    let addr = config.server.socket_addr()?;

    // データベース接続プールを作成
    let pool = db::create_pool(config.connect_options()).await?;
    db::ping(&pool).await?;
    tracing::info!(
        host = %config.database.host,
        database = %config.database.name,
        "データベースに接続しました"
    );

    // マイグレーション実行
    db::run_migrations(&pool).await?;
    tracing::info!("マイグレーションを適用しました");

    // 依存コンポーネントを初期化
    let employee_repo: Arc<dyn EmployeeRepository> =
        Arc::new(PostgresEmployeeRepository::new(pool.clone()));
    let employee_usecase = EmployeeUseCaseImpl::new(employee_repo);
    let employee_state = Arc::new(EmployeeState {
        usecase:         Arc::new(employee_usecase),
        request_timeout: config.request_timeout(),
    });

    // ルーター構築
    let app = router(employee_state).layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Employee Service サーバーが起動しました: {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Employee Service サーバーを停止しました");

    Ok(())
}

/// Ctrl-C または SIGTERM を待つ
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Ctrl-C ハンドラの登録に失敗しました: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("SIGTERM ハンドラの登録に失敗しました: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("シャットダウンシグナルを受信しました");
}
