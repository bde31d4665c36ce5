//! Journey HTTP server.
//!
//! Loads configuration, runs migrations, starts the notification worker and
//! serves the REST API until SIGINT/SIGTERM.

use std::error::Error;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::{error, info, warn};

use journey::adapters::http::{app_router, TripHandlers};
use journey::adapters::notifications::{MailTripNotifier, NotificationDispatcher, SmtpMailSender};
use journey::adapters::postgres::{
    PostgresActivityRepository, PostgresParticipantRepository, PostgresTripRepository, MIGRATOR,
};
use journey::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    init_logging(&config);
    config.validate()?;

    let pool = config
        .database
        .pool_options()
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        if let Err(err) = MIGRATOR.run(&pool).await {
            error!("migration failed: {err:?}");
            return Err(err.into());
        }
    }

    let trips = Arc::new(PostgresTripRepository::new(pool.clone()));
    let participants = Arc::new(PostgresParticipantRepository::new(pool.clone()));
    let activities = Arc::new(PostgresActivityRepository::new(pool.clone()));

    let mailer = Arc::new(SmtpMailSender::from_config(&config.smtp)?);
    let notifier = Arc::new(MailTripNotifier::new(
        trips.clone(),
        participants.clone(),
        mailer,
    ));
    let (dispatcher, worker) = NotificationDispatcher::new(notifier);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let worker = tokio::spawn(worker.run(shutdown_rx));

    let handlers = TripHandlers::new(trips, participants, activities, Arc::new(dispatcher));
    let app = app_router(handlers, config.server.request_timeout());

    let listener = TcpListener::bind(config.server.socket_addr()?).await?;
    info!(
        environment = ?config.server.environment,
        "listening on {}",
        listener.local_addr()?
    );
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Let queued confirmation emails go out before exiting
    let _ = shutdown_tx.send(true);
    match tokio::time::timeout(config.server.shutdown_timeout(), worker).await {
        Ok(Ok(delivered)) => info!(delivered, "notification worker stopped"),
        Ok(Err(err)) => error!("notification worker panicked: {err}"),
        Err(_) => warn!("notification worker did not drain before shutdown timeout"),
    }

    pool.close().await;
    Ok(())
}

fn init_logging(config: &AppConfig) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter_layer = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter_layer)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter_layer)
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let result = tokio::signal::ctrl_c().await;
        signal_or_pending("ctrl-c", result).await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => signal_or_pending("SIGTERM", Err(err)).await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}

/// Returns once a signal arrived; a listener that failed to install never fires.
async fn signal_or_pending(name: &str, result: std::io::Result<()>) {
    if let Err(err) = result {
        error!("failed to listen for {name}: {err}");
        std::future::pending::<()>().await;
    }
}
