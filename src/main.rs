use anyhow::Result;
use clap::Parser;

mod cli;
mod config;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = cli::Args::parse();
    let cfg = config::Config::try_load_from_file_or_default(args.config.as_deref())?;

    let connections =
        cdb_db_sqlite::Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size.into())?;
    cdb_db_sqlite::run_embedded_database_migrations(connections.exclusive()?);

    log::info!("Starting web server");
    cdb_webserver::run(connections, cfg.webserver.enable_cors).await;
    Ok(())
}
