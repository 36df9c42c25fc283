//! notes: command-line front end for the notes API.

use std::io::{BufRead, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use notes_client::{NotesApi, NotesView, DEFAULT_API_URL};

#[derive(Parser)]
#[command(name = "notes")]
#[command(author, version, about = "Command-line client for the notes API")]
#[command(propagate_version = true)]
struct Cli {
    /// Base URL of the notes API
    #[arg(long, env = "NOTES_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every note
    List,

    /// Add a new note
    Add {
        /// Note title
        title: String,
        /// Note content
        content: String,
    },

    /// Replace the title and content of a note
    Edit {
        /// Id of the note to edit
        id: i64,
        /// New title
        title: String,
        /// New content
        content: String,
    },

    /// Delete a note
    Delete {
        /// Id of the note to delete
        id: i64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Ask on stdin; anything other than y/yes declines.
fn confirm_delete() -> bool {
    print!("Are you sure you want to delete this note? [y/N] ");
    if std::io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    if std::io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

async fn run(cli: Cli) -> NotesView {
    let api = NotesApi::new(cli.api_url);
    let mut view = NotesView::new();
    view.load(&api).await;
    if view.error.is_some() {
        return view;
    }

    match cli.command {
        Commands::List => {}
        Commands::Add { title, content } => {
            view.set_title(title);
            view.set_content(content);
            view.submit(&api).await;
        }
        Commands::Edit { id, title, content } => {
            match view.notes.iter().find(|n| n.id == id).cloned() {
                Some(note) => view.begin_edit(&note),
                None => {
                    // Not in the loaded list; let the server decide.
                    view.editing = Some(id);
                }
            }
            view.set_title(title);
            view.set_content(content);
            view.submit(&api).await;
        }
        Commands::Delete { id, yes } => {
            view.delete(&api, id, || yes || confirm_delete()).await;
        }
    }
    view
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let view = run(cli).await;

    print!("{}", view.render());
    if view.error.is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
