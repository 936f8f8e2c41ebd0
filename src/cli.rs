use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::games::hangman::Policy;

#[derive(Parser, Debug)]
#[command(name = "hangterm")]
#[command(about = "🎩 Hangman in your terminal")]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, default_value = "hangterm.toml")]
    pub config: PathBuf,

    /// Guess rules to play with (skips the menu)
    #[arg(short, long, value_enum)]
    pub policy: Option<Policy>,

    /// Seed for word selection, for reproducible sessions
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Word list file, one word per line
    #[arg(short, long)]
    pub words: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Play hangman (default)
    Play,
    /// List available game modes
    List,
    /// Print the word list in use
    Words,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["hangterm"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("hangterm.toml"));
        assert_eq!(cli.policy, None);
        assert_eq!(cli.command, None);
    }

    #[test]
    fn test_policy_value_names() {
        let cli = Cli::try_parse_from(["hangterm", "--policy", "sequence", "play"]).unwrap();
        assert_eq!(cli.policy, Some(Policy::PositionalSequence));
        assert_eq!(cli.command, Some(Commands::Play));

        let cli = Cli::try_parse_from(["hangterm", "-p", "set"]).unwrap();
        assert_eq!(cli.policy, Some(Policy::SetMembership));

        assert!(Cli::try_parse_from(["hangterm", "--policy", "hybrid"]).is_err());
    }

    #[test]
    fn test_subcommands() {
        let cli = Cli::try_parse_from(["hangterm", "--seed", "3", "words"]).unwrap();
        assert_eq!(cli.seed, Some(3));
        assert_eq!(cli.command, Some(Commands::Words));
        assert_eq!(
            Cli::try_parse_from(["hangterm", "list"]).unwrap().command,
            Some(Commands::List)
        );
    }
}
