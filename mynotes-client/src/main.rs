//! `mynotes` command-line client.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use mynotes_client::render::render_board;
use mynotes_client::{ClientConfig, ClientError, NoteBoard, NotesClient};
use mynotes_core::{NoteId, NotePayload};
use tracing_subscriber::EnvFilter;

/// Command-line client for the My Notes API.
#[derive(Parser)]
#[command(name = "mynotes", version)]
struct Cli {
    /// API base URL (overrides MYNOTES_API_BASE)
    #[arg(long)]
    api_base: Option<String>,
    /// Request timeout in milliseconds (overrides MYNOTES_TIMEOUT_MS)
    #[arg(long)]
    timeout_ms: Option<u64>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List notes, most recently updated first
    List {
        /// Only show notes whose title or description contains this text
        #[arg(long, short)]
        search: Option<String>,
    },
    /// Create a note
    Add {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Replace a note's title and description
    Edit {
        id: String,
        #[arg(long)]
        title: String,
        /// Defaults to the note's current description
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a note
    Rm { id: String },
}

#[tokio::main]
async fn main() -> Result<ExitCode, ClientError> {
    init_logging()?;

    let cli = Cli::parse();
    let mut config = ClientConfig::from_env()?;
    if let Some(api_base) = cli.api_base {
        config.api_base_url = api_base;
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config.request_timeout_ms = timeout_ms;
    }
    config.validate()?;

    let client = NotesClient::new(&config)?;
    tracing::debug!(base_url = %client.base_url(), "Using API");
    let mut board = NoteBoard::new(client);

    let ok = match cli.command {
        Command::List { search } => {
            board.set_search(search.unwrap_or_default());
            board.refresh().await.is_ok()
        }
        Command::Add { title, description } => board
            .create(&NotePayload::new(title, description))
            .await
            .is_ok(),
        Command::Edit {
            id,
            title,
            description,
        } => board
            .edit(&NoteId::from(id), title, description)
            .await
            .is_ok(),
        Command::Rm { id } => board.delete(&NoteId::from(id)).await.is_ok(),
    };

    print!("{}", render_board(&board));

    if ok && board.error().is_none() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn init_logging() -> Result<(), ClientError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| ClientError::Logging(e.to_string()))
}
