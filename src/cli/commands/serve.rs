//! Web server command.

use console::style;

use crate::config::Settings;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

/// Start the web server.
pub async fn cmd_serve(settings: &Settings, bind: &str) -> anyhow::Result<()> {
    let (host, port) = parse_bind_address(bind);

    // Run database migrations first
    println!("{} Running database migrations...", style("→").cyan());
    println!("  Database: {}", settings.display_database_url());
    let ctx = settings.create_db_context()?;
    match ctx.run_migrations().await {
        Ok(applied) => {
            for version in &applied {
                println!("  {} Applied {}", style("✓").green(), version);
            }
            println!("  {} Database ready", style("✓").green());
        }
        Err(e) => {
            eprintln!("  {} Migration failed: {}", style("✗").red(), e);
            return Err(anyhow::anyhow!("Database migration failed: {}", e));
        }
    }

    let addr = tokio::net::lookup_host((host.as_str(), port))
        .await?
        .next()
        .ok_or_else(|| anyhow::anyhow!("Could not resolve bind address {}", bind))?;

    println!(
        "{} Starting Northwoods API at http://{}:{}",
        style("→").cyan(),
        host,
        port
    );
    println!("  Press Ctrl+C to stop");

    crate::server::serve(ctx, settings, addr).await
}

/// Parse a bind address that can be:
/// - Just a port: "8080" -> 0.0.0.0:8080
/// - Just a host: "127.0.0.1" -> 127.0.0.1:8000
/// - Host and port: "127.0.0.1:8080" -> 127.0.0.1:8080
fn parse_bind_address(bind: &str) -> (String, u16) {
    if let Ok(port) = bind.parse::<u16>() {
        return (DEFAULT_HOST.to_string(), port);
    }

    if let Some((host, port_str)) = bind.rsplit_once(':') {
        if let Ok(port) = port_str.parse::<u16>() {
            return (host.to_string(), port);
        }
    }

    // Must be just a host, use default port
    (bind.to_string(), DEFAULT_PORT)
}
