use crate::common::state::AppState;
use crate::settings::AppSettings;
use sqlx::mysql::MySqlPoolOptions;
use std::time::Duration;

const DB_MAX_CONNECTIONS: u32 = 2;
const DB_WAIT_TIMEOUT: Duration = Duration::from_secs(3);

pub fn initialize_logging(settings: &AppSettings) {
    tracing_subscriber::fmt()
        .with_max_level(settings.level())
        .with_timer(tracing_subscriber::fmt::time())
        .with_level(true)
        .compact()
        .init();
}

pub async fn initialize_state(settings: &AppSettings) -> anyhow::Result<AppState> {
    let db = MySqlPoolOptions::new()
        .acquire_timeout(DB_WAIT_TIMEOUT)
        .max_connections(DB_MAX_CONNECTIONS)
        .connect(&settings.database_url)
        .await?;
    Ok(AppState { db })
}
