//! 游戏事件的发布-订阅
//!
//! Listeners register per event kind and are called in subscription order.
//! A failing listener stops delivery; effects of earlier listeners stay.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{self, Stdout, Write};
use std::rc::Rc;

use anyhow::Context;
use save::{PlayerProfile, ProfileRepository};
use strum::{Display, EnumIter};

/// Repository handle shared between the session and its listeners.
pub type SharedRepository = Rc<RefCell<dyn ProfileRepository>>;

/// 游戏事件类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum GameEvent {
    GameStart,
    GameOver,
    GameVictory,
}

/// 事件监听器
pub trait GameEventListener {
    fn update(&self, event: GameEvent, profile: &PlayerProfile) -> anyhow::Result<()>;
}

/// 事件发布者
#[derive(Default)]
pub struct EventPublisher {
    listeners: HashMap<GameEvent, Vec<Rc<dyn GameEventListener>>>,
}

impl EventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加监听器（没有退订）
    pub fn subscribe(&mut self, event: GameEvent, listener: Rc<dyn GameEventListener>) {
        self.listeners.entry(event).or_default().push(listener);
    }

    pub fn listener_count(&self, event: GameEvent) -> usize {
        self.listeners.get(&event).map_or(0, Vec::len)
    }

    pub fn notify_all(&self, event: GameEvent, profile: &PlayerProfile) -> anyhow::Result<()> {
        let Some(listeners) = self.listeners.get(&event) else {
            return Ok(());
        };

        tracing::debug!(%event, listeners = listeners.len(), player = profile.name(), "notify");
        for listener in listeners {
            listener.update(event, profile)?;
        }
        Ok(())
    }
}

/// 把事件打印到输出流
pub struct ConsoleEventListener<W: Write = Stdout> {
    out: RefCell<W>,
}

impl ConsoleEventListener<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleEventListener<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }
}

impl ConsoleEventListener<Vec<u8>> {
    /// Everything written so far.
    pub fn captured(&self) -> String {
        String::from_utf8_lossy(&self.out.borrow()).into_owned()
    }
}

impl<W: Write> GameEventListener for ConsoleEventListener<W> {
    fn update(&self, event: GameEvent, profile: &PlayerProfile) -> anyhow::Result<()> {
        let mut out = self.out.borrow_mut();
        writeln!(out, "В игре произошло событие: {event}, для игрока {profile}")
            .context("failed to print game event")?;
        Ok(())
    }
}

/// GAME_OVER 时把玩家积分清零
pub struct ScoreResetListener {
    repository: SharedRepository,
}

impl ScoreResetListener {
    pub fn new(repository: SharedRepository) -> Self {
        Self { repository }
    }
}

impl GameEventListener for ScoreResetListener {
    fn update(&self, event: GameEvent, profile: &PlayerProfile) -> anyhow::Result<()> {
        if event == GameEvent::GameOver {
            self.repository
                .borrow_mut()
                .update_high_score(profile.name(), 0)
                .with_context(|| format!("failed to reset score of {}", profile.name()))?;
        }
        Ok(())
    }
}

/// Console listener on every event, score reset on GAME_OVER.
pub fn wire_listeners(
    publisher: &mut EventPublisher,
    console: Rc<dyn GameEventListener>,
    repository: SharedRepository,
) {
    use strum::IntoEnumIterator;

    for event in GameEvent::iter() {
        publisher.subscribe(event, Rc::clone(&console));
    }
    publisher.subscribe(
        GameEvent::GameOver,
        Rc::new(ScoreResetListener::new(repository)),
    );
}
