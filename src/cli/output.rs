use clap::ValueEnum;

/// How command results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Sentences and bracketed lists
    #[default]
    Human,
    /// One JSON document per result
    Json,
}
