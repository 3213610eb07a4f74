use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Beatmap {
    pub id: i32,
    pub set_id: i32,
    pub title: String,
    pub status: i8,
    pub version: String,
    pub md5: String,
}
