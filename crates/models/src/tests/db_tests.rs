use std::time::Duration;

use crate::db::{connect_with_config, migrate, DatabaseConfig};
use crate::restaurant;
use anyhow::Result;
use sea_orm::{EntityTrait, PaginatorTrait};

#[test]
fn settings_map_onto_pool_options() {
    let settings = configs::DatabaseConfig {
        url: "postgres://localhost/pizza".into(),
        max_connections: 7,
        connect_timeout_secs: 5,
        idle_timeout_secs: 60,
        ..Default::default()
    };
    let cfg = DatabaseConfig::from_settings(&settings);
    assert_eq!(cfg.url, "postgres://localhost/pizza");
    assert_eq!(cfg.max_connections, 7);
    assert_eq!(cfg.connect_timeout, Duration::from_secs(5));
    assert_eq!(cfg.idle_timeout, Some(Duration::from_secs(60)));
}

#[test]
fn in_memory_pool_keeps_one_connection_alive() {
    let cfg = DatabaseConfig::in_memory();
    assert_eq!(cfg.url, "sqlite::memory:");
    assert_eq!((cfg.min_connections, cfg.max_connections), (1, 1));
    assert!(cfg.idle_timeout.is_none());
    assert!(cfg.max_lifetime.is_none());
}

#[tokio::test]
async fn settings_path_connects_and_migrates() -> Result<()> {
    let settings = configs::DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() };
    let cfg = DatabaseConfig { max_connections: 1, min_connections: 1, ..DatabaseConfig::from_settings(&settings) };
    let db = connect_with_config(&cfg).await?;
    migrate(&db).await?;
    assert_eq!(restaurant::Entity::find().count(&db).await?, 0);
    Ok(())
}
