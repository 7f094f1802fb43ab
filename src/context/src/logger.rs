// src/context/src/logger.rs

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// 叙述日志的固定前缀
pub const LOG_PREFIX: &str = "[GAME LOG]: ";

/// Formats a narration line exactly as it appears on the console.
pub fn format_line(message: &str) -> String {
    format!("{LOG_PREFIX}{message}")
}

/// A panic while holding the lock must not lose captured lines.
fn locked(lines: &Mutex<Vec<String>>) -> MutexGuard<'_, Vec<String>> {
    lines.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Clone, Debug, Default)]
enum Sink {
    #[default]
    Stdout,
    Memory(Arc<Mutex<Vec<String>>>),
}

/// 游戏叙述日志
///
/// One logger is created per run and handed to every component through the
/// [`CombatContext`](crate::CombatContext). Clones share the same sink.
#[derive(Clone, Debug, Default)]
pub struct GameLogger {
    sink: Sink,
}

impl GameLogger {
    /// Logger printing `[GAME LOG]: ` lines to stdout.
    pub fn stdout() -> Self {
        Self { sink: Sink::Stdout }
    }

    /// Logger keeping messages in memory instead of printing them.
    pub fn memory() -> Self {
        Self {
            sink: Sink::Memory(Arc::new(Mutex::new(Vec::new()))),
        }
    }

    pub fn log(&self, message: impl AsRef<str>) {
        let message = message.as_ref();
        tracing::trace!(target: "game_log", "{message}");

        match &self.sink {
            Sink::Stdout => println!("{}", format_line(message)),
            Sink::Memory(lines) => locked(lines).push(message.to_string()),
        }
    }

    /// Messages captured so far (empty for a stdout logger).
    pub fn messages(&self) -> Vec<String> {
        match &self.sink {
            Sink::Stdout => Vec::new(),
            Sink::Memory(lines) => locked(lines).clone(),
        }
    }

    pub fn contains(&self, message: &str) -> bool {
        self.messages().iter().any(|m| m == message)
    }

    /// 清空内存中的日志
    pub fn clear(&self) {
        if let Sink::Memory(lines) = &self.sink {
            locked(lines).clear();
        }
    }
}
