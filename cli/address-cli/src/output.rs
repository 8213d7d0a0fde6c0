use serde::Serialize;

/// Output format of the conversion results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// One value per line.
    #[default]
    Plain,
    /// One JSON object per line.
    Json,
}

/// A result that can be printed in every [`OutputFormat`].
pub(crate) trait Render: Serialize {
    /// Human readable form, printed by [`OutputFormat::Plain`].
    fn plain(&self) -> String;
}

impl OutputFormat {
    pub(crate) fn format<T: Render>(&self, value: &T) -> Result<String, serde_json::Error> {
        match self {
            OutputFormat::Plain => Ok(value.plain()),
            OutputFormat::Json => serde_json::to_string(value),
        }
    }
}
