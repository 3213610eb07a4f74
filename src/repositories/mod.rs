pub mod beatmaps;
pub mod scores;

use std::time::Duration;

/// Deadline applied to every database call.
const DB_DEADLINE: Duration = Duration::from_secs(3);

async fn with_deadline<T>(fut: impl Future<Output = sqlx::Result<T>>) -> anyhow::Result<T> {
    match tokio::time::timeout(DB_DEADLINE, fut).await {
        Ok(result) => Ok(result?),
        Err(_) => anyhow::bail!(
            "database call exceeded the {}s deadline",
            DB_DEADLINE.as_secs()
        ),
    }
}
