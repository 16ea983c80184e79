//! snapit - interactive snapshot review
//!
//! Binary entry point.

use std::io::{self, IsTerminal};

use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use snapit::cli::Cli;
use snapit::session::EndReason;
use snapit::terminal::{self, CookedRunner};
use snapit::ui::{ColorMode, CrlfWriter, Painter};
use snapit::watch::WatchSession;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if cli.paths.is_empty() {
        println!("No failing snapshot tests to review.");
        return Ok(());
    }

    let runner = CookedRunner::new(cli.test_runner()?);
    let painter = Painter::new(ColorMode::from(cli.color).enabled(io::stdout().is_terminal()));
    let mut session = WatchSession::new(runner, CrlfWriter::new(io::stdout()), painter);

    let reason = {
        let _raw = terminal::enter_raw_mode()?;
        session.start(cli.paths.iter().cloned());
        run(&mut session)?
    };

    match reason {
        Some(EndReason::Completed) => println!("All snapshot failures resolved."),
        Some(EndReason::Aborted) | None => println!("Interactive snapshot mode stopped."),
    }
    Ok(())
}

/// Run the session's main loop.
fn run<R, W>(session: &mut WatchSession<R, W>) -> color_eyre::Result<Option<EndReason>>
where
    R: snapit::runner::RunTests,
    W: io::Write,
{
    session.run_pending()?;
    while !session.is_finished() {
        handle_events(session)?;
        session.run_pending()?;
    }
    Ok(session.end_reason())
}

/// Handle crossterm events (blocks until the next one).
fn handle_events<R, W>(session: &mut WatchSession<R, W>) -> color_eyre::Result<()>
where
    R: snapit::runner::RunTests,
    W: io::Write,
{
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            session.on_key(key);
        }
        _ => {}
    }
    Ok(())
}
