use crate::common::error::{AppError, ServiceResult};
use crate::settings::AppSettings;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static CLIENT: LazyLock<reqwest::Client> = LazyLock::new(reqwest::Client::new);

/// Snapshot of a beatmap's approval state on the remote end. The api serves
/// every field as a string.
#[derive(Debug, Deserialize)]
pub struct OsuApiBeatmap {
    pub last_update: String,
    pub approved: String,
}

#[derive(Serialize)]
struct GetBeatmapsQuery<'a> {
    k: &'a str,
    b: i32,
}

/// One GET per beatmap id, no caching and no deadline. A network or decode
/// failure is fatal to the row being processed; there is no retry.
pub async fn fetch_beatmap(
    settings: &AppSettings,
    beatmap_id: i32,
) -> ServiceResult<OsuApiBeatmap> {
    let url = format!("{}/api/get_beatmaps", settings.osu_api_url);
    let response = CLIENT
        .get(url)
        .query(&GetBeatmapsQuery {
            k: &settings.osu_api_key,
            b: beatmap_id,
        })
        .send()
        .await?;
    let mut beatmaps: Vec<OsuApiBeatmap> = response.json().await?;
    if beatmaps.is_empty() {
        return Err(AppError::BeatmapsNotFound);
    }
    Ok(beatmaps.remove(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_api_payload() {
        let payload = r#"[{"approved":"1","last_update":"2023-06-11 01:44:40"}]"#;
        let beatmaps: Vec<OsuApiBeatmap> = serde_json::from_str(payload).unwrap();
        assert_eq!(beatmaps.len(), 1);
        assert_eq!(beatmaps[0].approved, "1");
        assert_eq!(beatmaps[0].last_update, "2023-06-11 01:44:40");
    }

    #[test]
    fn extra_fields_are_ignored() {
        let payload = r#"[{"approved":"4","last_update":"x","beatmap_id":"10","mode":"0"}]"#;
        let beatmaps: Vec<OsuApiBeatmap> = serde_json::from_str(payload).unwrap();
        assert_eq!(beatmaps[0].approved, "4");
    }
}
