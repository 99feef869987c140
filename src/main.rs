use clap::Parser;
use lotto::application::session::LottoSession;
use lotto::config::LottoConfig;
use lotto::infrastructure::random::RandomPicker;
use lotto::interfaces::console::Console;
use miette::{IntoDiagnostic, Result};
use std::io;

/// Buy lotto tickets, enter the draw, and see how they did.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();
    init_logging();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    let mut session = LottoSession::new(LottoConfig::default(), RandomPicker::default());
    session.run(&mut console).into_diagnostic()?;

    Ok(())
}

// Logs go to stderr; stdout carries only the game transcript.
fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lotto=warn"));

    fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
