use std::process::ExitCode;

use clap::Parser;
use color_eyre::Result;
use env_logger::Env;

use giftai::Locale;
use giftai::ai::{GiftContext, SuggestionBatch, SuggestionSimulator, Tone, fallback_messages};
use giftai::config::{self, Config};

mod cli;

use cli::{Args, Commands};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = load_config(&args);
    let locale = config.effective_locale();

    match args.command {
        Commands::Suggest {
            tone,
            receiver,
            relationship,
            occasion,
            json,
            no_errors,
        } => {
            let simulator = SuggestionSimulator::from_config(&config)?;
            let tone = Tone::resolve(&tone);
            let context = GiftContext::new(receiver, relationship, occasion);

            let batch = if no_errors {
                simulator.generate_suggestions(tone, &context).await
            } else {
                // Simulated failures print as a plain banner and exit non-zero
                match simulator.request_suggestions(tone, &context).await {
                    Ok(batch) => batch,
                    Err(err) => {
                        eprintln!("{}", err);
                        return Ok(ExitCode::FAILURE);
                    }
                }
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&batch)?);
            } else {
                print_batch(&batch);
            }
        }
        Commands::Error => {
            let simulator = SuggestionSimulator::from_config(&config)?;
            println!("{}", simulator.mock_error());
        }
        Commands::Fallback { tone } => {
            for message in fallback_messages(Tone::resolve(&tone), locale) {
                println!("{}", message);
            }
        }
        Commands::Locales => {
            for candidate in Locale::ALL {
                let marker = if candidate == locale { "*" } else { " " };
                println!(
                    "{} {} {}  {}",
                    marker,
                    candidate.flag(),
                    candidate.code(),
                    candidate.display_name()
                );
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Config file plus command-line overrides
fn load_config(args: &Args) -> Config {
    let result = match &args.config {
        Some(path) => config::load_config_from_path(path),
        None => config::load_config(),
    };

    if let Some(warning) = &result.warning {
        eprintln!("Warning: {}; using default settings", warning);
    }

    let mut config = result.config;
    if let Some(tag) = &args.locale {
        config.locale = Some(Locale::resolve(tag));
    }
    config
}

fn print_batch(batch: &SuggestionBatch) {
    for (rank, suggestion) in batch.suggestions.iter().enumerate() {
        println!(
            "{}. {}  ({:.2})",
            rank + 1,
            suggestion.message,
            suggestion.confidence
        );
    }
}
