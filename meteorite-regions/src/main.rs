mod classify;
mod conf;
mod db;
mod helpers;
mod models;
mod partition;

use anyhow::{Context, Result};
use config::{builder::DefaultState, Config, ConfigBuilder, Environment, File, FileFormat};
use db::Database;
use env_logger::Env;
use log::{debug, error, info};
use partition::build_partitions;
use std::{io, process};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info,sqlx::query=warn"))
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
        .expect("Failed building logger");

    if let Err(err) = run().await {
        error!("Run failed: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let mut b = Config::builder();

    b = add_source_files_for_dir(b, "config");
    b = add_source_files_for_dir(b, "dev.config");
    b = b.add_source(Environment::with_prefix("METEORITES").separator("_"));

    info!("Reading config ...");
    let cfg: conf::Config = b
        .build()
        .context("Failed to build config")?
        .try_deserialize()
        .context("Failed deserializing config")?;

    let regions = cfg.regions().context("Invalid region configuration")?;
    debug!("Using regions: {:?}", regions.names().collect::<Vec<_>>());

    info!("Fetching meteorite landings from {} ...", cfg.feed.url);
    let records = meteorite_feed::get_records_from(&cfg.feed.url)
        .await
        .context("Fetching meteorite landings failed")?;
    info!("Received {} records", records.len());

    info!("Initializing database ...");
    let db = Database::new(&cfg.database.dsn)
        .await
        .context("Database initialization failed")?;

    info!("Preparing database ...");
    db.init().await.context("Database preparation failed")?;

    info!("Storing meteorite landings ...");
    db.replace_meteorites(&records).await?;
    info!("Stored {} meteorites", db.count_meteorites().await?);

    db.refresh_filtered(cfg.filter.maxid).await?;
    info!(
        "Stored {} records with id <= {}",
        db.count_filtered().await?,
        cfg.filter.maxid
    );

    info!("Partitioning records into {} regions ...", regions.len());
    let partitions = build_partitions(&records, &regions);
    db.replace_partitions(&partitions).await?;

    for name in regions.names() {
        let stored = db.get_partition(name).await?;
        info!("{name}: {} meteorites", stored.len());
        if let Some(row) = stored.first() {
            debug!("{name}: first entry {row}");
        }
    }

    let stats = partitions.stats;
    info!(
        "Classified {} of {} records ({} with geolocation, {} with unparseable coordinates)",
        stats.classified, stats.records, stats.geolocated, stats.unparseable
    );

    Ok(())
}

fn add_source_files_for_dir(
    builder: ConfigBuilder<DefaultState>,
    name: &str,
) -> ConfigBuilder<DefaultState> {
    builder
        .add_source(File::new(&format!("{name}.yaml"), FileFormat::Yaml).required(false))
        .add_source(File::new(&format!("{name}.yml"), FileFormat::Yaml).required(false))
        .add_source(File::new(&format!("{name}.toml"), FileFormat::Toml).required(false))
        .add_source(File::new(&format!("{name}.json"), FileFormat::Json5).required(false))
}
