use crate::common::context::Context;
use crate::entities::beatmaps::Beatmap;
use crate::models::beatmaps::RankedStatus;

use super::with_deadline;

const READ_FIELDS: &str = "id, set_id, title, status, version, md5";

pub async fn fetch_by_set_id<C: Context>(ctx: &C, set_id: i32) -> anyhow::Result<Vec<Beatmap>> {
    const QUERY: &str = const_str::concat!("SELECT ", READ_FIELDS, " FROM maps WHERE set_id = ?");
    with_deadline(sqlx::query_as(QUERY).bind(set_id).fetch_all(ctx.db())).await
}

pub async fn fetch_by_status<C: Context>(
    ctx: &C,
    status: RankedStatus,
) -> anyhow::Result<Vec<Beatmap>> {
    const QUERY: &str = const_str::concat!("SELECT ", READ_FIELDS, " FROM maps WHERE status = ?");
    with_deadline(
        sqlx::query_as(QUERY)
            .bind(status.local_code())
            .fetch_all(ctx.db()),
    )
    .await
}

/// Applies a rank change as one transaction: every row sharing the beatmap id
/// is reset to pending first, then the row matching both id and md5 gets the
/// new status. The blanket reset clears stale duplicate rows that can survive
/// a rank change upstream; it is a workaround, not a schema guarantee.
pub async fn update_ranked_status<C: Context>(
    ctx: &C,
    map_id: i32,
    md5: &str,
    new_status: RankedStatus,
) -> anyhow::Result<()> {
    with_deadline(async {
        let mut tx = ctx.db().begin().await?;
        sqlx::query("UPDATE maps SET status = ? WHERE id = ?")
            .bind(RankedStatus::Pending.local_code())
            .bind(map_id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("UPDATE maps SET status = ? WHERE md5 = ? AND id = ?")
            .bind(new_status.local_code())
            .bind(md5)
            .bind(map_id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await
    })
    .await
}
