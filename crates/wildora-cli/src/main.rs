use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use wildora_core::quiz::QuizKind;

mod bootstrap;
mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "wildora")]
#[command(about = "Wildora - era-themed fan community client", long_about = None)]
struct Cli {
    /// Config file (defaults to ~/.config/wildora/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show or change your profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// Play a quiz with the given answer indices
    Quiz {
        #[arg(long, value_enum, default_value_t = QuizChoice::Mixed)]
        kind: QuizChoice,
        /// Zero-based answer index per question, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        answers: Vec<usize>,
    },
    /// Search the lyrics library
    Lyrics {
        #[arg(default_value = "")]
        term: String,
    },
    /// List era themes
    Eras,
    /// Show the fan-theory board
    Theories,
    /// List client routes
    Routes,
    /// Look for easter eggs
    Hunt {
        /// Skip the activation roll
        #[arg(long)]
        force: bool,
        /// Egg to claim once the hints are shown
        #[arg(long)]
        find: Option<String>,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Print the current profile
    Show {
        #[arg(long)]
        json: bool,
    },
    /// Add SwiftCoins
    Coins { amount: u64 },
    /// Set the favorite era
    Era { id: String },
}

#[derive(Clone, Copy, ValueEnum)]
enum QuizChoice {
    Mixed,
    Era,
}

impl From<QuizChoice> for QuizKind {
    fn from(choice: QuizChoice) -> Self {
        match choice {
            QuizChoice::Mixed => QuizKind::Mixed,
            QuizChoice::Era => QuizKind::Era,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config)?;
    logging::init(&config.debug);
    tracing::debug!("[wildora] API at {}", config.api.base_url);

    let app = bootstrap::build(config);
    match cli.command {
        Commands::Profile { action } => match action {
            ProfileAction::Show { json } => commands::profile::show(&app, json).await?,
            ProfileAction::Coins { amount } => commands::profile::add_coins(&app, amount).await?,
            ProfileAction::Era { id } => commands::profile::set_era(&app, &id).await?,
        },
        Commands::Quiz { kind, answers } => {
            commands::quiz::play(&app, kind.into(), &answers).await?
        }
        Commands::Hunt { force, find } => {
            commands::hunt::run(&app, force, find.as_deref()).await?
        }
        Commands::Lyrics { term } => commands::catalog::lyrics(&term),
        Commands::Eras => commands::catalog::eras(),
        Commands::Theories => commands::catalog::theories(),
        Commands::Routes => commands::catalog::routes(),
    }

    commands::drain_notifications(app.shutdown().await).await;

    Ok(())
}
