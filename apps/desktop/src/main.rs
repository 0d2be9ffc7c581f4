use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{bail, Context, Result};
use clap::Parser;
use client_core::{
    load_directory, load_settings, text, view, DirectoryClient, DirectoryEvent, DirectoryState,
    LoadStatus,
};
use tracing_subscriber::EnvFilter;
use url::Url;

mod shell;

use shell::{parse_command, ShellCommand, HELP};

#[derive(Parser, Debug)]
#[command(name = "employee-directory", about = "Browse a randomly generated employee directory")]
struct Args {
    /// Number of employees to fetch.
    #[arg(long)]
    count: Option<usize>,
    /// Base URL of the random user API.
    #[arg(long)]
    api_url: Option<String>,
    /// Filter by first or last name before showing the gallery.
    #[arg(long)]
    search: Option<String>,
    /// Open the detail view for this card number (1-based, as listed).
    #[arg(long)]
    show: Option<usize>,
    /// Write a standalone HTML page instead of printing.
    #[arg(long)]
    html: Option<PathBuf>,
    /// Keep reading commands from stdin after the first render.
    #[arg(long)]
    interactive: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(api_url) = args.api_url.clone() {
        settings.api_url = api_url;
    }
    if let Some(count) = args.count {
        settings.result_count = count;
    }
    Url::parse(&settings.api_url)
        .with_context(|| format!("invalid api url '{}'", settings.api_url))?;

    let client = DirectoryClient::from_settings(&settings)?;
    let mut state = load_directory(&client, settings.result_count).await;
    if let LoadStatus::Failed(reason) = &state.load {
        bail!("could not load employees: {reason}");
    }

    if let Some(query) = args.search {
        state = state.apply(DirectoryEvent::SearchSubmitted(query));
    }
    if let Some(number) = args.show {
        if let Some(index) = number.checked_sub(1) {
            state = state.apply(DirectoryEvent::CardClicked(index));
        }
        if state.current().is_none() {
            bail!(
                "card {number} does not exist; {} card(s) are shown",
                state.active_list().len()
            );
        }
    }

    if let Some(path) = &args.html {
        std::fs::write(path, view::render_page(&state))
            .with_context(|| format!("failed to write page to '{}'", path.display()))?;
        tracing::info!(path = %path.display(), cards = state.active_list().len(), "wrote page");
    } else {
        println!("{}", text::state_text(&state));
    }

    if args.interactive {
        run_shell(state)?;
    }

    Ok(())
}

fn run_shell(mut state: DirectoryState) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    println!("{HELP}");

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }

        match parse_command(&line) {
            Ok(ShellCommand::Quit) => return Ok(()),
            Ok(ShellCommand::Help) => println!("{HELP}"),
            Ok(ShellCommand::List) => println!("{}", text::state_text(&state)),
            Ok(ShellCommand::Event(event)) => {
                tracing::debug!(event = event.name(), "applying shell event");
                state = state.apply(event);
                println!("{}", text::state_text(&state));
            }
            Err(err) => println!("{err}"),
        }
    }
}
