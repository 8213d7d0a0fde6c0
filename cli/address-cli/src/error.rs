/// CLI components error handling implementor.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("FromEnv error: {0}")]
    EnvFilter(#[from] tracing_subscriber::filter::FromEnvError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("failed to convert {input}: {source}")]
    Address {
        input: String,
        source: primitives_address::Error,
    },

    #[error("{0} is neither an SS58 nor an H160 address")]
    UnrecognizedAddress(String),
}

impl CliError {
    /// Attaches the offending input to a codec error.
    pub(crate) fn address(input: &str) -> impl FnOnce(primitives_address::Error) -> Self {
        let input = input.to_string();
        move |source| CliError::Address { input, source }
    }
}
