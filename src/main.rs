use clap::Parser;
use eyre::Result;
use std::io;
use std::path::PathBuf;
use tasklist::shell::Shell;
use tasklist::{Settings, TaskStore};
use tracing::Level;

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(about = "TaskList - Manage a prioritized task list from the terminal")]
#[command(version = env!("GIT_DESCRIBE"))]
struct Cli {
    /// Path to a YAML settings file (default: ~/.config/tasklist/tasklist.yml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the maximum task length
    #[arg(long)]
    max_task_length: Option<usize>,

    /// Accept tasks with empty text
    #[arg(long)]
    allow_empty: bool,

    /// Start with an empty list instead of the demo tasks
    #[arg(long)]
    no_seed: bool,

    /// Answer yes to every confirmation
    #[arg(short, long)]
    yes: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(max) = cli.max_task_length {
        settings.max_task_length = max;
    }
    if cli.allow_empty {
        settings.allow_empty_tasks = true;
    }
    settings.validate()?;

    let store = if cli.no_seed {
        TaskStore::new(settings)
    } else {
        TaskStore::with_seed_tasks(settings)
    };

    println!("TaskList - type 'help' for commands");

    let stdin = io::stdin();
    let mut shell = Shell::new(store, stdin.lock(), io::stdout()).assume_yes(cli.yes);
    shell.run()
}
