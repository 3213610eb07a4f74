use crate::adapters::osu_api;
use crate::common::context::Context;
use crate::common::error::ServiceResult;
use crate::entities::beatmaps::Beatmap;
use crate::models::beatmaps::RankedStatus;
use crate::repositories::beatmaps;
use crate::settings::AppSettings;
use tracing::{info, warn};

#[derive(Debug, Default, Clone, Copy)]
pub struct ReconcileSummary {
    pub updated: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Reconcile every difficulty of one beatmap set.
pub async fn update_set<C: Context>(
    ctx: &C,
    settings: &AppSettings,
    set_id: i32,
) -> ServiceResult<ReconcileSummary> {
    info!(set_id, "updating beatmap set");
    let maps = beatmaps::fetch_by_set_id(ctx, set_id).await?;
    Ok(reconcile_batch(ctx, settings, maps).await)
}

/// Reconcile every beatmap currently at the given local status.
pub async fn update_by_status<C: Context>(
    ctx: &C,
    settings: &AppSettings,
    status: RankedStatus,
) -> ServiceResult<ReconcileSummary> {
    info!(status = %status, code = status.local_code(), "updating beatmaps by status");
    let maps = beatmaps::fetch_by_status(ctx, status).await?;
    Ok(reconcile_batch(ctx, settings, maps).await)
}

/// Rows are independent: a fetch or write failure for one is logged and the
/// batch moves on.
async fn reconcile_batch<C: Context>(
    ctx: &C,
    settings: &AppSettings,
    maps: Vec<Beatmap>,
) -> ReconcileSummary {
    let mut summary = ReconcileSummary::default();
    for map in maps {
        // Rows with an unknown local code never reach the remote api.
        let Some(local) = RankedStatus::from_local_code(map.status) else {
            warn!(
                "<{}> | local status {} is not a known code, ignoring",
                map.id, map.status
            );
            summary.skipped += 1;
            continue;
        };
        match reconcile_one(ctx, settings, &map, local).await {
            Ok(true) => summary.updated += 1,
            Ok(false) => summary.skipped += 1,
            Err(e) => {
                warn!("<{}> | could not reconcile: {}", map.id, e.code());
                summary.failed += 1;
            }
        }
    }
    info!(
        updated = summary.updated,
        skipped = summary.skipped,
        failed = summary.failed,
        "reconciliation finished"
    );
    summary
}

async fn reconcile_one<C: Context>(
    ctx: &C,
    settings: &AppSettings,
    map: &Beatmap,
    local: RankedStatus,
) -> ServiceResult<bool> {
    let remote = osu_api::fetch_beatmap(settings, map.id).await?;
    match plan(local, &remote.approved) {
        Reconciliation::InvalidRemote => {
            warn!(
                "<{}> | remote status {} is not a known code, ignoring",
                map.id, remote.approved
            );
            Ok(false)
        }
        Reconciliation::Unchanged => {
            warn!(
                "<{}> | beatmap is already {} ({})",
                map.id,
                local.local_code(),
                local
            );
            Ok(false)
        }
        Reconciliation::Update(new_status) => {
            info!(
                "<{}> | {} [{}] | {} -> {} | {}",
                map.id,
                map.title,
                map.version,
                local.local_code(),
                new_status.local_code(),
                new_status
            );
            beatmaps::update_ranked_status(ctx, map.id, &map.md5, new_status).await?;
            Ok(true)
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Reconciliation {
    InvalidRemote,
    Unchanged,
    Update(RankedStatus),
}

fn plan(local: RankedStatus, remote_code: &str) -> Reconciliation {
    match RankedStatus::from_api_code(remote_code) {
        None => Reconciliation::InvalidRemote,
        Some(remote) if remote == local => Reconciliation::Unchanged,
        Some(remote) => Reconciliation::Update(remote),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualified_map_ranked_upstream_gets_updated() {
        // Local 4 (qualified), remote approved="1" translates to local 2.
        let local = RankedStatus::from_local_code(4).unwrap();
        assert_eq!(plan(local, "1"), Reconciliation::Update(RankedStatus::Ranked));
    }

    #[test]
    fn matching_status_is_a_no_op() {
        // Local 2 (ranked), remote approved="1" translates to local 2.
        let local = RankedStatus::from_local_code(2).unwrap();
        assert_eq!(plan(local, "1"), Reconciliation::Unchanged);
    }

    #[test]
    fn unknown_remote_code_is_never_written() {
        let local = RankedStatus::Pending;
        assert_eq!(plan(local, "-1"), Reconciliation::InvalidRemote);
        assert_eq!(plan(local, "7"), Reconciliation::InvalidRemote);
    }

    #[test]
    fn reconciliation_is_idempotent() {
        // Once a row has been moved to the translated status, a second pass
        // over the same remote answer must not plan another write.
        let first = plan(RankedStatus::Qualified, "1");
        let Reconciliation::Update(new_status) = first else {
            panic!("expected an update");
        };
        assert_eq!(plan(new_status, "1"), Reconciliation::Unchanged);
    }

    #[test]
    fn every_valid_pair_translates() {
        for (remote, expected) in [
            ("0", RankedStatus::Pending),
            ("1", RankedStatus::Ranked),
            ("2", RankedStatus::Approved),
            ("3", RankedStatus::Qualified),
            ("4", RankedStatus::Loved),
        ] {
            match plan(RankedStatus::Pending, remote) {
                Reconciliation::Unchanged => assert_eq!(expected, RankedStatus::Pending),
                Reconciliation::Update(to) => assert_eq!(to, expected),
                Reconciliation::InvalidRemote => panic!("{remote} should be valid"),
            }
        }
    }
}
