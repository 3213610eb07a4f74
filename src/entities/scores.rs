use sqlx::FromRow;

/// Owner of a score, joined with the player's name for log output.
#[derive(Debug, Clone, FromRow)]
pub struct ScoreOwner {
    pub userid: i64,
    pub mode: i8,
    pub map_md5: String,
    pub name: String,
}
