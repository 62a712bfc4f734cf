use anyhow::Result;
use folio_core::application::{
    commands::users::{BootstrapAdminCommand, BootstrapOutcome},
    ports::{
        notifier::ContactNotifier,
        publisher::ArticlePublisher,
        security::{PasswordHasher, TokenManager},
        session_revocation::SessionRevocationStore,
        time::Clock,
        util::SlugGenerator,
    },
    services::{ApplicationServices, ServiceDependencies},
};
use folio_core::config::AppConfig;
use folio_core::infrastructure::{
    database,
    mail::{LogContactNotifier, SmtpContactNotifier},
    publishing::qiita::QiitaPublisher,
    repositories::{
        PostgresActivityRepository, PostgresContactRepository,
        PostgresCrosspostCredentialRepository, PostgresPostReadRepository,
        PostgresPostWriteRepository, PostgresUserRepository,
    },
    security::{
        password::Argon2PasswordHasher, redis_session_store::RedisSessionRevocationStore,
        session_store::InMemorySessionRevocationStore, token::BiscuitTokenManager,
    },
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use folio_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;
    tracing::info!("database migrations applied");

    let post_read_repo = Arc::new(PostgresPostReadRepository::new(pool.clone()));
    let token_ttl = config.token_ttl();

    let session_revocation_store: Arc<dyn SessionRevocationStore> = match config.redis_url() {
        Some(url) => {
            tracing::info!("using redis session revocation store");
            Arc::new(RedisSessionRevocationStore::from_url(url, token_ttl.as_secs())?)
        }
        None => {
            tracing::info!("using in-memory session revocation store");
            Arc::new(InMemorySessionRevocationStore::new())
        }
    };

    let notifier: Arc<dyn ContactNotifier> = match config.smtp() {
        Some(settings) => {
            tracing::info!(host = %settings.host, "contact messages delivered over smtp");
            Arc::new(SmtpContactNotifier::new(settings.clone())?)
        }
        None => {
            tracing::warn!("SMTP not configured; contact messages are only logged");
            Arc::new(LogContactNotifier)
        }
    };

    let publisher: Arc<dyn ArticlePublisher> =
        Arc::new(QiitaPublisher::new(config.qiita_api_base())?);
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let token_manager: Arc<dyn TokenManager> =
        Arc::new(BiscuitTokenManager::new(config.biscuit_private_key(), token_ttl)?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(ServiceDependencies {
        user_repo: Arc::new(PostgresUserRepository::new(pool.clone())),
        post_write_repo: Arc::new(PostgresPostWriteRepository::new(pool.clone())),
        post_read_repo,
        activity_repo: Arc::new(PostgresActivityRepository::new(pool.clone())),
        contact_repo: Arc::new(PostgresContactRepository::new(pool.clone())),
        credential_repo: Arc::new(PostgresCrosspostCredentialRepository::new(pool)),
        password_hasher,
        token_manager,
        session_revocation_store,
        notifier,
        publisher,
        clock,
        slugger,
        activity_offset_minutes: config.activity_utc_offset_minutes(),
    }));

    if let Some(admin) = config.admin() {
        let outcome = services
            .user_commands
            .bootstrap_admin(BootstrapAdminCommand {
                username: admin.username.clone(),
                password: admin.password.clone(),
            })
            .await?;
        if outcome == BootstrapOutcome::Skipped {
            tracing::info!("users already exist; admin bootstrap skipped");
        }
    }

    let state = HttpState::new(services, config.allowed_origins());
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("server stopped");
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
