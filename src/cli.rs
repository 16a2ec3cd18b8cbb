//! Command-line arguments for the native headless runner

use std::path::PathBuf;

use clap::Parser;

/// Run a headless autopilot session and print the result
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "dino-dash", version, about)]
pub struct Cli {
    /// Seed for the obstacle generator
    #[arg(default_value_t = 1)]
    pub seed: u64,

    /// Stop after this many ticks if the run has not ended
    #[arg(default_value_t = 10_000)]
    pub max_ticks: u64,

    /// File holding the best score
    #[arg(long, env = "DINO_DASH_BEST", default_value = ".dino_best_score")]
    pub best_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["dino-dash"]).unwrap();
        assert_eq!(cli.seed, 1);
        assert_eq!(cli.max_ticks, 10_000);
    }

    #[test]
    fn test_positional_values() {
        let cli = Cli::try_parse_from(["dino-dash", "7", "50", "--best-file", "/tmp/best"]).unwrap();
        assert_eq!(cli.seed, 7);
        assert_eq!(cli.max_ticks, 50);
        assert_eq!(cli.best_file, PathBuf::from("/tmp/best"));
    }

    #[test]
    fn test_non_numeric_seed_is_rejected() {
        assert!(Cli::try_parse_from(["dino-dash", "abc", "50"]).is_err());
    }

    #[test]
    fn test_negative_tick_limit_is_rejected() {
        assert!(Cli::try_parse_from(["dino-dash", "7", "-5"]).is_err());
    }

    #[test]
    fn test_extra_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["dino-dash", "7", "50", "9"]).is_err());
    }

    #[test]
    fn test_command_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
