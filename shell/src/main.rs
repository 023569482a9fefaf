use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tender_core::{Catalog, Session, SessionConfig};
use tender_shell::{Flow, Shell, HELP};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "tender-shell")]
#[command(about = "Describe what you want, get ranked offers, fill a cart", long_about = None)]
struct Args {
    /// Number of offers shown per search
    #[arg(long, default_value_t = 6)]
    top: usize,
    /// Number of past searches kept for `history`
    #[arg(long, default_value_t = 50)]
    history: usize,
    /// Print results as JSON lines instead of cards
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Run a single search and exit
    #[arg(long)]
    query: Option<String>,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let args = Args::parse();

    let catalog = Arc::new(Catalog::seeded());
    tracing::info!(products = catalog.len(), "catalog loaded");
    let session = Session::new(catalog, SessionConfig { top_n: args.top, history_limit: args.history });
    let mut shell = Shell::new(session, args.json);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(query) = args.query {
        shell.handle_line(&format!("search {query}"), &mut out)?;
        return Ok(());
    }

    if !args.json {
        writeln!(out, "BUYERS ARE KINGS - tender system\n{HELP}")?;
    }
    let stdin = io::stdin();
    loop {
        if !args.json {
            write!(out, "> ")?;
            out.flush()?;
        }
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if shell.handle_line(&line, &mut out)? == Flow::Quit {
            break;
        }
    }
    Ok(())
}
