//! 十字路口：回合制文字战斗游戏
//!
//! The root crate wires the member crates into a playable run: console
//! input, locations, the battle loop, game events and the session itself.

pub mod chain_demo;
pub mod config;
pub mod event_bus;
pub mod game_loop;
pub mod input;
pub mod location;
pub mod session;

pub use crate::chain_demo::ChainDemo;
pub use crate::config::{Args, GameConfig};
pub use crate::event_bus::{
    ConsoleEventListener, EventPublisher, GameEvent, GameEventListener, ScoreResetListener,
    SharedRepository, wire_listeners,
};
pub use crate::game_loop::{Battle, BattleState};
pub use crate::input::{Console, ConsoleIo, ScriptedConsole};
pub use crate::location::{Location, LocationKind};
pub use crate::session::{Session, SessionOutcome};
