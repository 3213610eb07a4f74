use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult};
use crate::repositories::scores;
use tracing::info;

pub async fn mark_personal_best<C: Context>(ctx: &C, score_id: i64) -> ServiceResult<()> {
    let owner = scores::fetch_owner(ctx, score_id)
        .await?
        .ok_or(AppError::ScoresNotFound)?;
    info!(
        "{} | setting {}'s score <{}> as a personal best",
        owner.map_md5, owner.name, score_id
    );
    scores::mark_personal_best(ctx, score_id, &owner).await?;
    Ok(())
}
