use std::path::PathBuf;
use std::process::ExitCode;

use bancho_cli::common::error::{AppError, ServiceResult};
use bancho_cli::common::init;
use bancho_cli::common::state::AppState;
use bancho_cli::models::beatmaps::RankedStatus;
use bancho_cli::settings::AppSettings;
use bancho_cli::usecases::backups::{self, BackupOptions};
use bancho_cli::usecases::{beatmaps, scores, sessions};
use clap::{Args, Parser, Subcommand};

const ISSUE_TRACKER: &str = "https://github.com/bancho-cli/bancho-cli/issues";

#[derive(Parser)]
#[command(name = "bancho-cli", version, about = "Small time jobs for your bancho server")]
struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconcile beatmap ranked status against the osu! api
    Update(UpdateArgs),
    /// Write a dated tar.gz backup of the sql dump, replays and user data
    Backup(BackupArgs),
    /// Mark a score as a personal best
    Pb {
        /// Score id
        score_id: i64,
    },
    /// Supervise the server's tmux session
    Process(ProcessArgs),
}

#[derive(Args)]
struct UpdateArgs {
    /// Beatmap set id to update
    #[arg(short, long)]
    beatmap: Option<i32>,
    /// Update every beatmap at this local status
    #[arg(short, long)]
    status: Option<String>,
}

#[derive(Args)]
struct BackupArgs {
    /// Leave the sql dump out of the backup
    #[arg(short, long)]
    sql: bool,
    /// Leave replays out of the backup
    #[arg(short, long)]
    replays: bool,
    /// Leave user data (screenshots, avatars) out of the backup
    #[arg(short, long)]
    data: bool,
}

#[derive(Args)]
struct ProcessArgs {
    #[command(flatten)]
    action: ProcessAction,
    /// Attach the terminal once the session is up
    #[arg(long)]
    attach: bool,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct ProcessAction {
    /// Create the session
    #[arg(long)]
    start: bool,
    /// Gracefully shut the session down
    #[arg(long)]
    stop: bool,
    /// Shut down and recreate the session
    #[arg(long)]
    restart: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let settings = match AppSettings::load(&cli.config) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Could not load {}: {e:#}", cli.config.display());
            return ExitCode::FAILURE;
        }
    };
    init::initialize_logging(&settings);

    let state = match init::initialize_state(&settings).await {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("could not connect to the database: {e:#}");
            eprintln!("Could not run bancho-cli! Please open an issue here: {ISSUE_TRACKER}");
            return ExitCode::FAILURE;
        }
    };

    match run(cli.command, &settings, &state).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("Could not run bancho-cli! Please open an issue here: {ISSUE_TRACKER}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands, settings: &AppSettings, state: &AppState) -> ServiceResult<()> {
    match command {
        Commands::Update(args) => match (args.beatmap, args.status) {
            (Some(set_id), None) => {
                beatmaps::update_set(state, settings, set_id).await?;
            }
            (None, Some(status)) => {
                let status = status.parse::<RankedStatus>()?;
                beatmaps::update_by_status(state, settings, status).await?;
            }
            _ => {
                eprintln!(
                    "Must be a beatmap set id or a status! {{pending|ranked|approved|qualified|loved}}"
                );
                return Err(AppError::BeatmapsInvalidStatus);
            }
        },
        Commands::Backup(args) => {
            // Presence of a flag excludes that part from the backup.
            let opts = BackupOptions {
                sql: !args.sql,
                replays: !args.replays,
                user_data: !args.data,
            };
            let archive = backups::create_backup(settings, opts).await?;
            println!("Success! Backup written to {}", archive.display());
        }
        Commands::Pb { score_id } => {
            scores::mark_personal_best(state, score_id).await?;
        }
        Commands::Process(args) => {
            if args.action.start {
                sessions::create_session(settings, args.attach).await?;
            } else if args.action.stop {
                sessions::kill_session(settings).await?;
            } else {
                sessions::restart_session(settings, args.attach).await?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_accepts_a_set_id() {
        let cli = Cli::try_parse_from(["bancho-cli", "update", "-b", "320118"]).unwrap();
        match cli.command {
            Commands::Update(args) => {
                assert_eq!(args.beatmap, Some(320118));
                assert_eq!(args.status, None);
            }
            _ => panic!("expected update"),
        }
    }

    #[test]
    fn update_accepts_a_status_label() {
        let cli = Cli::try_parse_from(["bancho-cli", "update", "--status", "qualified"]).unwrap();
        match cli.command {
            Commands::Update(args) => assert_eq!(args.status.as_deref(), Some("qualified")),
            _ => panic!("expected update"),
        }
    }

    #[test]
    fn backup_flags_default_to_including_everything() {
        let cli = Cli::try_parse_from(["bancho-cli", "backup"]).unwrap();
        match cli.command {
            Commands::Backup(args) => {
                assert!(!args.sql && !args.replays && !args.data);
            }
            _ => panic!("expected backup"),
        }
    }

    #[test]
    fn process_requires_exactly_one_action() {
        assert!(Cli::try_parse_from(["bancho-cli", "process"]).is_err());
        assert!(Cli::try_parse_from(["bancho-cli", "process", "--start", "--stop"]).is_err());
        let cli =
            Cli::try_parse_from(["bancho-cli", "process", "--restart", "--attach"]).unwrap();
        match cli.command {
            Commands::Process(args) => {
                assert!(args.action.restart && args.attach);
            }
            _ => panic!("expected process"),
        }
    }

    #[test]
    fn pb_takes_a_positional_score_id() {
        let cli = Cli::try_parse_from(["bancho-cli", "pb", "42"]).unwrap();
        match cli.command {
            Commands::Pb { score_id } => assert_eq!(score_id, 42),
            _ => panic!("expected pb"),
        }
    }
}
