use std::process::Stdio;
use tokio::process::Command;

pub async fn has_session(name: &str) -> anyhow::Result<bool> {
    let status = Command::new("tmux")
        .args(["has-session", "-t", name])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await?;
    Ok(status.success())
}

pub async fn new_session(name: &str, window: &str, start_directory: &str) -> anyhow::Result<()> {
    run(Command::new("tmux").args([
        "new-session",
        "-d",
        "-s",
        name,
        "-n",
        window,
        "-c",
        start_directory,
    ]))
    .await
}

pub async fn new_window(session: &str, window: &str, start_directory: &str) -> anyhow::Result<()> {
    run(Command::new("tmux").args(["new-window", "-t", session, "-n", window, "-c", start_directory]))
        .await
}

pub async fn send_keys(session: &str, window: &str, keys: &str) -> anyhow::Result<()> {
    let target = target(session, window);
    run(Command::new("tmux").args(["send-keys", "-t", &target, keys, "Enter"])).await
}

/// Ctrl-C, without a trailing Enter.
pub async fn send_interrupt(session: &str, window: &str) -> anyhow::Result<()> {
    let target = target(session, window);
    run(Command::new("tmux").args(["send-keys", "-t", &target, "C-c"])).await
}

/// Takes over the caller's terminal until the session detaches.
pub async fn attach(name: &str) -> anyhow::Result<()> {
    let status = Command::new("tmux")
        .args(["attach-session", "-t", name])
        .status()
        .await?;
    anyhow::ensure!(status.success(), "tmux attach-session exited with {status}");
    Ok(())
}

fn target(session: &str, window: &str) -> String {
    format!("{session}:{window}")
}

async fn run(cmd: &mut Command) -> anyhow::Result<()> {
    let output = cmd.output().await?;
    anyhow::ensure!(
        output.status.success(),
        "tmux failed ({}): {}",
        output.status,
        String::from_utf8_lossy(&output.stderr).trim()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_addresses_window_within_session() {
        assert_eq!(target("bancho", "server"), "bancho:server");
    }
}
