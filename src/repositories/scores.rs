use crate::common::context::Context;
use crate::entities::scores::ScoreOwner;

use super::with_deadline;

pub async fn fetch_owner<C: Context>(ctx: &C, score_id: i64) -> anyhow::Result<Option<ScoreOwner>> {
    const QUERY: &str = r#"
        SELECT s.userid, s.mode, s.map_md5, u.name
        FROM scores s
        INNER JOIN users u ON s.userid = u.id
        WHERE s.id = ?
    "#;
    with_deadline(sqlx::query_as(QUERY).bind(score_id).fetch_optional(ctx.db())).await
}

/// Promotes one score to personal best in a single transaction: every other
/// non-retired score for the (user, mode, beatmap) tuple is demoted to
/// submitted, then the target row is flagged as the best.
pub async fn mark_personal_best<C: Context>(
    ctx: &C,
    score_id: i64,
    owner: &ScoreOwner,
) -> anyhow::Result<()> {
    with_deadline(async {
        let mut tx = ctx.db().begin().await?;
        sqlx::query(
            r#"
                UPDATE scores SET status = 1
                WHERE userid = ? AND
                    mode = ?     AND
                    status != 0  AND
                    map_md5 = ?
            "#,
        )
        .bind(owner.userid)
        .bind(owner.mode)
        .bind(&owner.map_md5)
        .execute(&mut *tx)
        .await?;
        sqlx::query("UPDATE scores SET status = 2 WHERE id = ?")
            .bind(score_id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await
    })
    .await
}
