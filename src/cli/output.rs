use clap::ValueEnum;

/// Output format for command results and errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text for people
    #[default]
    Human,
    /// A single JSON document
    Json,
}
