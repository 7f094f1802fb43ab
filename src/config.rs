//! 命令行参数与运行配置

use std::path::PathBuf;

use clap::Parser;
use context::{CombatContext, GameLogger, GameRng};
use save::SCORE_FILENAME;
use tracing::Level;

/// Turn-based text combat at the crossroads
#[derive(Parser, Debug)]
#[command(name = "crossroads", version)]
pub struct Args {
    /// Score file, relative to the working directory
    #[arg(long = "score-file", value_name = "PATH", default_value = SCORE_FILENAME)]
    pub score_file: PathBuf,

    /// Seed for reproducible dice rolls
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Do not run the damage pipeline demo before the game
    #[arg(long = "skip-chain-demo")]
    pub skip_chain_demo: bool,

    /// Verbose diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// 运行配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub score_file: PathBuf,
    pub seed: Option<u64>,
    pub run_chain_demo: bool,
    pub verbose: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            score_file: PathBuf::from(SCORE_FILENAME),
            seed: None,
            run_chain_demo: true,
            verbose: false,
        }
    }
}

impl From<Args> for GameConfig {
    fn from(args: Args) -> Self {
        Self {
            score_file: args.score_file,
            seed: args.seed,
            run_chain_demo: !args.skip_chain_demo,
            verbose: args.verbose,
        }
    }
}

impl GameConfig {
    /// Diagnostics level added to the `RUST_LOG` filter.
    pub fn log_level(&self) -> Level {
        if self.verbose { Level::DEBUG } else { Level::WARN }
    }

    /// Stdout narration; seeded dice when a seed was given.
    pub fn combat_context(&self) -> CombatContext {
        let rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        tracing::debug!(seed = rng.seed(), "dice ready");
        CombatContext::new(GameLogger::stdout(), rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GameConfig::from(Args::parse_from(["crossroads"]));
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.log_level(), Level::WARN);
    }

    #[test]
    fn flags() {
        let args = Args::parse_from([
            "crossroads",
            "--score-file",
            "/tmp/s.json",
            "--seed",
            "42",
            "--skip-chain-demo",
            "-v",
        ]);
        let config = GameConfig::from(args);

        assert_eq!(config.score_file, PathBuf::from("/tmp/s.json"));
        assert_eq!(config.seed, Some(42));
        assert!(!config.run_chain_demo);
        assert_eq!(config.log_level(), Level::DEBUG);
    }
}
