use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context as _, Result, anyhow};
use clap::Parser;
use hangterm::cli::{Cli, Commands};
use hangterm::config::AppConfig;
use hangterm::core::menu::{Menu, MenuResult};
use hangterm::games::{self, GameInfo, Session};
use hangterm::Vocabulary;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::DefaultTerminal;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)?;
    if cli.policy.is_some() {
        config.policy = cli.policy;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if cli.words.is_some() {
        config.vocabulary = cli.words.clone();
    }
    config.validate()?;

    let vocabulary = config.vocabulary()?;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::List => {
            println!("🎮 Available game modes:");
            println!();
            for game in games::get_all_games() {
                println!("📦 {} ({})", game.info.name, game.info.id);
                println!("   {}", game.info.description);
                println!();
            }
            Ok(())
        }
        Commands::Words => {
            for word in vocabulary.words() {
                println!("{word}");
            }
            Ok(())
        }
        Commands::Play => {
            init_logging(&config.log_file)?;
            info!(config = %cli.config.display(), words = vocabulary.len(), "starting hangterm");
            play(&config, vocabulary).await
        }
    }
}

/// The terminal belongs to the UI, so logs go to a file.
fn init_logging(path: &Path) -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

async fn play(config: &AppConfig, vocabulary: Vocabulary) -> Result<()> {
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let terminal = ratatui::init();
    let result = run_ui(config, vocabulary, rng, terminal).await;
    ratatui::restore();
    result
}

async fn run_ui(
    config: &AppConfig,
    vocabulary: Vocabulary,
    mut rng: StdRng,
    mut terminal: DefaultTerminal,
) -> Result<()> {
    // A mode given up front skips the menu and exits with the game.
    if let Some(policy) = config.policy {
        let game = games::game_for_policy(policy)
            .ok_or_else(|| anyhow!("no game registered for {:?}", policy))?;
        let session = Session {
            vocabulary,
            speech: config.speech.clone(),
            rng: StdRng::from_rng(&mut rng),
        };
        (game.initializer)(session, terminal).await?;
        return Ok(());
    }

    let infos: Vec<GameInfo> = games::get_all_games().into_iter().map(|g| g.info).collect();
    let mut menu = Menu::new();
    loop {
        let id = match menu.run(&mut terminal, &infos)? {
            MenuResult::Play(id) => id,
            MenuResult::Quit => return Ok(()),
        };
        let game = games::get_game(&id).ok_or_else(|| anyhow!("Game '{}' not found in registry!", id))?;
        info!(game = game.info.id, "launching");
        let session = Session {
            vocabulary: vocabulary.clone(),
            speech: config.speech.clone(),
            rng: StdRng::from_rng(&mut rng),
        };
        terminal = (game.initializer)(session, terminal).await?;
    }
}
