//! Database management commands.

use console::style;

use crate::config::Settings;

/// Apply pending migrations.
pub async fn cmd_migrate(settings: &Settings) -> anyhow::Result<()> {
    println!("{} Database migration", style("→").cyan());
    println!("  Database: {}", settings.display_database_url());

    let ctx = settings.create_db_context()?;
    match ctx.run_migrations().await {
        Ok(applied) if applied.is_empty() => {
            println!("\n{} Schema is up to date.", style("✓").green());
            Ok(())
        }
        Ok(applied) => {
            for version in &applied {
                println!("  Applied {}", version);
            }
            println!("{} Migration complete!", style("✓").green());
            Ok(())
        }
        Err(e) => {
            eprintln!("{} Migration failed: {}", style("✗").red(), e);
            Err(anyhow::anyhow!("Database migration failed: {}", e))
        }
    }
}

/// Report whether the database is reachable.
pub async fn cmd_check(settings: &Settings) -> anyhow::Result<()> {
    let ctx = settings.create_db_context()?;
    if ctx.check_connection().await {
        println!(
            "{} Connected to {}",
            style("✓").green(),
            settings.display_database_url()
        );
        Ok(())
    } else {
        eprintln!(
            "{} Cannot connect to {}",
            style("✗").red(),
            settings.display_database_url()
        );
        Err(anyhow::anyhow!("Database is disconnected"))
    }
}
