use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Mock AI gift-message suggestions
#[derive(Debug, Parser)]
#[command(name = "giftai", version, about)]
pub struct Args {
    /// Config file to use instead of ~/.config/giftai/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Message language (ja, en, vi); defaults to the config, then LC_ALL/LANG,
    /// then ja
    #[arg(long, global = true)]
    pub locale: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate three message suggestions after a simulated delay
    Suggest {
        /// emotional, funny or formal; anything else uses emotional
        #[arg(long, default_value = "emotional")]
        tone: String,

        /// Who the card is for
        #[arg(long = "to", default_value = "")]
        receiver: String,

        /// Your relationship to them
        #[arg(long, default_value = "")]
        relationship: String,

        /// What the card celebrates
        #[arg(long, default_value = "")]
        occasion: String,

        /// Print the batch as JSON
        #[arg(long)]
        json: bool,

        /// Skip simulated failures
        #[arg(long)]
        no_errors: bool,
    },
    /// Print a random simulated error message
    Error,
    /// Print the canned messages used when no AI backend is available
    Fallback {
        #[arg(long, default_value = "emotional")]
        tone: String,
    },
    /// List supported locales
    Locales,
}
