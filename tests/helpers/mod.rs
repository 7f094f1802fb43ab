//! Builders for scripted runs against a temporary score file.
#![allow(dead_code)]

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use context::CombatContext;
use crossroads::{
    ConsoleEventListener, EventPublisher, ScriptedConsole, Session, SharedRepository,
    wire_listeners,
};
use save::{CachedProfileRepository, JsonProfileRepository, SCORE_FILENAME};
use tempfile::TempDir;

pub struct ScriptedRun {
    // keeps the directory alive for the duration of the test
    _dir: TempDir,
    pub score_path: PathBuf,
    pub events: Rc<ConsoleEventListener<Vec<u8>>>,
    pub session: Session<ScriptedConsole>,
}

impl ScriptedRun {
    pub fn score_file(&self) -> serde_json::Value {
        let text = fs::read_to_string(&self.score_path).expect("score file");
        serde_json::from_str(&text).expect("score json")
    }

    pub fn events(&self) -> Vec<String> {
        self.events.captured().lines().map(str::to_string).collect()
    }

    pub fn narration(&self) -> Vec<String> {
        self.session.context().logger().messages()
    }

    pub fn transcript(&self) -> &[String] {
        self.session.console().transcript()
    }
}

/// A session fed by `answers`, with dice taken from `rolls` (cycled) and an
/// optional pre-existing score file.
pub fn scripted_run(answers: &[&str], rolls: Vec<f64>, existing: Option<&str>) -> ScriptedRun {
    let dir = TempDir::new().expect("tempdir");
    let score_path = dir.path().join(SCORE_FILENAME);
    if let Some(contents) = existing {
        fs::write(&score_path, contents).expect("seed score file");
    }

    let store = JsonProfileRepository::new(&score_path).expect("score store");
    let repository: SharedRepository = Rc::new(RefCell::new(CachedProfileRepository::new(store)));

    let events = Rc::new(ConsoleEventListener::new(Vec::new()));
    let mut publisher = EventPublisher::new();
    wire_listeners(&mut publisher, events.clone(), Rc::clone(&repository));

    let session = Session::new(
        ScriptedConsole::new(answers.iter().copied()),
        CombatContext::scripted(rolls),
        repository,
        publisher,
    );

    ScriptedRun {
        _dir: dir,
        score_path,
        events,
        session,
    }
}
