use std::fmt;
use tracing::error;

pub type ServiceResult<T> = Result<T, AppError>;

#[track_caller]
pub fn unexpected<T, E: Into<anyhow::Error>>(e: E) -> ServiceResult<T> {
    let caller = std::panic::Location::caller();
    error!("An unexpected error has occurred at {caller}: {}", e.into());
    Err(AppError::Unexpected)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppError {
    Unexpected,

    BeatmapsNotFound,
    BeatmapsInvalidStatus,

    ScoresNotFound,

    SessionsAlreadyRunning,
    SessionsNotRunning,
}

impl<E: Into<anyhow::Error>> From<E> for AppError {
    #[track_caller]
    fn from(e: E) -> Self {
        unexpected::<(), E>(e).unwrap_err()
    }
}

impl AppError {
    pub const fn code(&self) -> &'static str {
        match self {
            AppError::Unexpected => "unexpected",

            AppError::BeatmapsNotFound => "beatmaps.not_found",
            AppError::BeatmapsInvalidStatus => "beatmaps.invalid_status",

            AppError::ScoresNotFound => "scores.not_found",

            AppError::SessionsAlreadyRunning => "sessions.already_running",
            AppError::SessionsNotRunning => "sessions.not_running",
        }
    }

    pub const fn message(&self) -> &'static str {
        match self {
            AppError::Unexpected => "An unexpected error has occurred.",

            AppError::BeatmapsNotFound => "Beatmap could not be found.",
            AppError::BeatmapsInvalidStatus => {
                "Status must be one of pending, ranked, approved, qualified or loved."
            }

            AppError::ScoresNotFound => "Score could not be found.",

            AppError::SessionsAlreadyRunning => "The session already exists. Please kill it first.",
            AppError::SessionsNotRunning => "The session is not running.",
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}
