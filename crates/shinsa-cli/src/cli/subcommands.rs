use clap::Subcommand;

/// Persisted reviewer name.
#[derive(Clone, Debug, Subcommand)]
pub enum ReviewerCommands {
    /// Print the stored reviewer name.
    Show,
    /// Store a new reviewer name.
    Set {
        /// Display name; surrounding whitespace is trimmed.
        name: String,
    },
}
