use std::cell::RefCell;
use std::process::ExitCode;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use crossroads::{
    Args, ChainDemo, ConsoleEventListener, ConsoleIo, EventPublisher, GameConfig, Session,
    SharedRepository, wire_listeners,
};
use error::{GameError, handle_error};
use save::{CachedProfileRepository, JsonProfileRepository};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let config = GameConfig::from(Args::parse());

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(config.log_level().into()))
        .with_writer(std::io::stderr)
        .init();

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("run aborted: {err:#}");
            match err.downcast_ref::<GameError>() {
                Some(game_error) => eprintln!("{}", handle_error(game_error)),
                None => eprintln!("Ошибка: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(config: GameConfig) -> Result<()> {
    let ctx = config.combat_context();
    ctx.log("Игра началась!");

    let mut console = ConsoleIo::stdio();
    if config.run_chain_demo {
        ChainDemo::default().run(&mut console, ctx.logger());
    }

    let store = JsonProfileRepository::new(&config.score_file).with_context(|| {
        format!("cannot open score file {}", config.score_file.display())
    })?;
    let repository: SharedRepository = Rc::new(RefCell::new(CachedProfileRepository::new(store)));

    let mut publisher = EventPublisher::new();
    wire_listeners(
        &mut publisher,
        Rc::new(ConsoleEventListener::stdout()),
        Rc::clone(&repository),
    );

    let outcome = Session::new(console, ctx, repository, publisher).run()?;
    tracing::debug!(?outcome, "game over");
    Ok(())
}
