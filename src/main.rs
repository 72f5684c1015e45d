use std::io;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use mybank::app::App;
use mybank::console::ConsolePrompt;
use mybank::domain::Bank;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut app = App::new(Bank::new(), ConsolePrompt::new(), stdout.lock());
    app.run()?;

    Ok(())
}
