//! PostgreSQL TLS connection helpers using rustls.
//!
//! Used by the pooled diesel-async connections and by the raw
//! tokio-postgres client that applies migrations. TLS is on by default;
//! `--no-tls` or `NORTHWOODS_NO_TLS=1` turns it off.

use std::sync::Arc;

use diesel::ConnectionError;
use diesel_async::AsyncPgConnection;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use rustls::ClientConfig;
use tokio_postgres_rustls::MakeRustlsConnect;
use tracing::warn;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

fn build_rustls_config() -> Result<ClientConfig, BoxError> {
    let result = rustls_native_certs::load_native_certs();
    for e in &result.errors {
        warn!("Error loading system certificates: {}", e);
    }

    let mut root_store = rustls::RootCertStore::empty();
    let (added, ignored) = root_store.add_parsable_certificates(result.certs);
    if ignored > 0 {
        warn!("Skipped {} invalid system certificate(s)", ignored);
    }
    if added == 0 {
        return Err("no valid system certificates found".into());
    }

    let provider = Arc::new(rustls::crypto::ring::default_provider());
    Ok(ClientConfig::builder_with_provider(provider)
        .with_safe_default_protocol_versions()?
        .with_root_certificates(root_store)
        .with_no_client_auth())
}

fn make_tls_connector() -> Result<MakeRustlsConnect, BoxError> {
    Ok(MakeRustlsConnect::new(build_rustls_config()?))
}

/// Connection setup hook for the diesel-async pool manager.
pub fn establish_tls_connection(
    url: &str,
) -> BoxFuture<'_, diesel::ConnectionResult<AsyncPgConnection>> {
    let fut = async {
        let tls = make_tls_connector()
            .map_err(|e| ConnectionError::BadConnection(format!("TLS setup failed: {}", e)))?;
        let (client, conn) = tokio_postgres::connect(url, tls)
            .await
            .map_err(|e| ConnectionError::BadConnection(e.to_string()))?;

        AsyncPgConnection::try_from_client_and_connection(client, conn).await
    };
    fut.boxed()
}

/// Open a plain tokio-postgres client, used for migrations.
///
/// The connection future runs on its own task; errors after the handshake
/// are only logged.
pub async fn connect_raw(url: &str, no_tls: bool) -> Result<tokio_postgres::Client, BoxError> {
    if no_tls {
        let (client, connection) = tokio_postgres::connect(url, tokio_postgres::NoTls).await?;
        drive(connection);
        return Ok(client);
    }

    let (client, connection) = tokio_postgres::connect(url, make_tls_connector()?).await?;
    drive(connection);
    Ok(client)
}

fn drive<F>(connection: F)
where
    F: std::future::Future<Output = Result<(), tokio_postgres::Error>> + Send + 'static,
{
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            tracing::error!("Migration connection closed with error: {}", e);
        }
    });
}
