use std::error::Error as StdError;
use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A numeric argument is above the ceiling the endpoint accepts
    #[error("{name} is out of range: {value} (at most {max})")]
    OutOfRange {
        name: &'static str,
        value: u64,
        max: u64,
    },

    /// The argument is not acceptable for this endpoint, e.g. `PlayMode::All` for users
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("request failed: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    #[error("cannot decode the response: {0}")]
    Json(#[from] serde_json::Error),

    /// The service answered with `{"error": "..."}`
    #[error("osu! api error: {0}")]
    Api(String),

    #[error("unsupported replay encoding `{0}`")]
    ReplayEncoding(String),

    #[error("cannot decode the replay: {0}")]
    ReplayContent(#[from] base64::DecodeError),

    #[error("cannot start the runtime: {0}")]
    Runtime(#[from] io::Error),
}

impl Error {
    /// Whether this error was raised before any request has been sent
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::OutOfRange { .. } | Self::InvalidArgument(_))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(Box::new(err))
    }
}
