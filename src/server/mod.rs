//! JSON API server for the housing resource directory.

mod error;
mod handlers;
mod routes;

pub use error::{ApiError, ErrorDetail};
pub use handlers::api_types;
pub use handlers::ApiDoc;
pub use routes::{cors_layer, create_router};

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::signal;
use tracing::info;

use crate::config::Settings;
use crate::repository::{
    AssessmentRepository, DbContext, ReportRepository, ResourceRepository, TagRepository,
    VerificationRepository,
};

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub db: DbContext,
    pub resource_repo: Arc<ResourceRepository>,
    pub report_repo: Arc<ReportRepository>,
    pub assessment_repo: Arc<AssessmentRepository>,
    pub verification_repo: Arc<VerificationRepository>,
    pub tag_repo: Arc<TagRepository>,
}

impl AppState {
    pub fn new(ctx: DbContext) -> Self {
        Self {
            resource_repo: Arc::new(ctx.resources()),
            report_repo: Arc::new(ctx.reports()),
            assessment_repo: Arc::new(ctx.assessments()),
            verification_repo: Arc::new(ctx.verifications()),
            tag_repo: Arc::new(ctx.tags()),
            db: ctx,
        }
    }
}

/// Start the web server and run until Ctrl+C or SIGTERM.
///
/// `ctx` is the context the caller already migrated with; its pool is shared
/// by every handler.
pub async fn serve(ctx: DbContext, settings: &Settings, addr: SocketAddr) -> anyhow::Result<()> {
    let app = create_router(AppState::new(ctx), cors_layer(&settings.cors_origins));

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
