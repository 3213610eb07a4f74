use crate::adapters::tmux;
use crate::common::error::{AppError, ServiceResult};
use crate::settings::AppSettings;
use std::time::Duration;
use tracing::{info, warn};

const KILL_POLL_INTERVAL: Duration = Duration::from_secs(3);

pub async fn create_session(settings: &AppSettings, attach: bool) -> ServiceResult<()> {
    let name = &settings.tmux.session_name;
    if tmux::has_session(name).await? {
        return Err(AppError::SessionsAlreadyRunning);
    }
    let Some((first, rest)) = settings.tmux.windows.split_first() else {
        return Err(anyhow::anyhow!("no tmux windows configured").into());
    };

    tmux::new_session(name, &first.name, &first.start_directory).await?;
    for window in rest {
        tmux::new_window(name, &window.name, &window.start_directory).await?;
    }
    for window in &settings.tmux.windows {
        if let Err(e) = tmux::send_keys(name, &window.name, &window.command).await {
            warn!("could not send startup command to {}: {e}", window.name);
        }
    }

    if attach {
        tmux::attach(name).await?;
    } else {
        info!("session created, connect with: tmux a -t {name}");
    }
    Ok(())
}

/// Graceful shutdown: interrupt whatever runs in each window, then exit the
/// shell. The session dies once its last window is gone.
pub async fn kill_session(settings: &AppSettings) -> ServiceResult<()> {
    let name = &settings.tmux.session_name;
    if !tmux::has_session(name).await? {
        return Err(AppError::SessionsNotRunning);
    }
    for window in &settings.tmux.windows {
        if let Err(e) = tmux::send_interrupt(name, &window.name).await {
            warn!("could not interrupt {}: {e}", window.name);
            continue;
        }
        if let Err(e) = tmux::send_keys(name, &window.name, "exit").await {
            warn!("could not exit {}: {e}", window.name);
            continue;
        }
        info!("sent shutdown commands | {}", window.name);
    }
    Ok(())
}

pub async fn restart_session(settings: &AppSettings, attach: bool) -> ServiceResult<()> {
    let name = &settings.tmux.session_name;
    if !tmux::has_session(name).await? {
        return create_session(settings, attach).await;
    }

    kill_session(settings).await?;
    while tmux::has_session(name).await? {
        info!("waiting for {name} to shut down, polling again in 3s...");
        tokio::time::sleep(KILL_POLL_INTERVAL).await;
    }
    create_session(settings, attach).await
}
