//! 单局游戏的运行上下文
//!
//! Bundles the narration logger and the random source of one run. Every
//! combat operation receives it explicitly instead of reaching for globals.

pub mod logger;
pub mod rng;

pub use crate::logger::{GameLogger, LOG_PREFIX, format_line};
pub use crate::rng::{GameRng, RandomSource, ScriptedRolls};

/// Logger + dice for one run.
pub struct CombatContext {
    logger: GameLogger,
    rng: Box<dyn RandomSource>,
}

impl CombatContext {
    pub fn new(logger: GameLogger, rng: impl RandomSource + 'static) -> Self {
        Self {
            logger,
            rng: Box::new(rng),
        }
    }

    /// Stdout narration with a seeded RNG.
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameLogger::stdout(), GameRng::new(seed))
    }

    /// In-memory narration with scripted rolls (tests and replays).
    pub fn scripted(rolls: impl Into<Vec<f64>>) -> Self {
        Self::new(GameLogger::memory(), ScriptedRolls::new(rolls))
    }

    pub fn logger(&self) -> &GameLogger {
        &self.logger
    }

    pub fn log(&self, message: impl AsRef<str>) {
        self.logger.log(message);
    }

    /// Uniform roll in `[0, 1)`.
    pub fn roll(&mut self) -> f64 {
        let value = self.rng.roll();
        tracing::debug!(roll = value, "dice");
        value
    }
}
