// Interactive line-oriented front end for the task store

use crate::filter::FilterType;
use crate::priority::Priority;
use crate::prompt::{Confirmation, Notice, Prompt};
use crate::render;
use crate::store::{AddOutcome, ClearOutcome, DeleteOutcome, TaskStore};
use crate::task::TaskId;
use eyre::{Context, Result, eyre};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

const HELP: &str = "\
Commands:
  add [high|medium|low] <text>   Add a task (priority defaults to medium)
  toggle <id>                    Mark a task complete / undo
  delete <id>                    Delete a task
  clear                          Delete all completed tasks
  filter <all|completed|pending> Change the current view
  all | completed | pending      Shortcuts for filter
  sort                           Sort tasks by priority (high first)
  list                           Show the current view
  stats                          Show counts by status and priority
  export                         Print the current view as JSON
  help                           Show this help
  quit                           Exit";

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { priority: Priority, text: String },
    Toggle(TaskId),
    Delete(TaskId),
    Clear,
    Filter(FilterType),
    Sort,
    List,
    Stats,
    Export,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "add" => Self::parse_add(rest),
            "toggle" | "done" | "undo" => Command::Toggle(Self::parse_id(rest)?),
            "delete" | "rm" => Command::Delete(Self::parse_id(rest)?),
            "clear" => Command::Clear,
            "filter" => Command::Filter(FilterType::parse(rest)),
            "all" | "completed" | "pending" => Command::Filter(FilterType::parse(word)),
            "sort" => Command::Sort,
            "list" | "ls" => Command::List,
            "stats" => Command::Stats,
            "export" => Command::Export,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(eyre!("Unknown command: {} (try 'help')", other)),
        };

        Ok(Some(command))
    }

    fn parse_add(rest: &str) -> Self {
        // A leading priority word is taken as the priority
        if let Some((first, text)) = rest.split_once(char::is_whitespace) {
            if let Ok(priority) = first.parse::<Priority>() {
                return Command::Add {
                    priority,
                    text: text.to_string(),
                };
            }
        }

        match rest.parse::<Priority>() {
            Ok(priority) => Command::Add {
                priority,
                text: String::new(),
            },
            Err(_) => Command::Add {
                priority: Priority::Medium,
                text: rest.to_string(),
            },
        }
    }

    fn parse_id(rest: &str) -> Result<TaskId> {
        if rest.is_empty() {
            return Err(eyre!("Missing task id"));
        }
        rest.parse::<TaskId>()
            .with_context(|| format!("Invalid task id: {}", rest))
    }

    /// Whether the command changes the store or the current view
    pub fn mutates(&self) -> bool {
        matches!(
            self,
            Command::Add { .. }
                | Command::Toggle(_)
                | Command::Delete(_)
                | Command::Clear
                | Command::Filter(_)
                | Command::Sort
        )
    }
}

/// Prompt answered from the shell's own input stream
pub struct ConsolePrompt<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
    assume_yes: bool,
}

impl<'a, R: BufRead, W: Write> ConsolePrompt<'a, R, W> {
    pub fn new(input: &'a mut R, output: &'a mut W, assume_yes: bool) -> Self {
        Self {
            input,
            output,
            assume_yes,
        }
    }
}

impl<R: BufRead, W: Write> Prompt for ConsolePrompt<'_, R, W> {
    fn confirm(&mut self, request: &Confirmation) -> bool {
        if self.assume_yes {
            let _ = writeln!(self.output, "{} [y/N] y", request);
            return true;
        }

        let _ = write!(self.output, "{} [y/N] ", request);
        let _ = self.output.flush();

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Err(e) => {
                warn!(error = ?e, "Failed to read confirmation, declining");
                false
            }
        }
    }

    fn notify(&mut self, notice: &Notice) {
        let _ = writeln!(self.output, "{}", notice);
    }
}

/// Owns the store and drives it from a line-based input
pub struct Shell<R, W> {
    store: TaskStore,
    input: R,
    output: W,
    assume_yes: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(store: TaskStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
            assume_yes: false,
        }
    }

    /// Answer every confirmation with yes
    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Consume the shell, returning the store and the output sink
    pub fn into_parts(self) -> (TaskStore, W) {
        (self.store, self.output)
    }

    /// Read and execute commands until `quit` or end of input
    pub fn run(&mut self) -> Result<()> {
        self.render()?;

        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line).context("Failed to read command")? == 0 {
                writeln!(self.output)?;
                return Ok(());
            }

            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    writeln!(self.output, "{}", e)?;
                    continue;
                }
            };

            debug!(?command, "shell: executing");
            if command == Command::Quit {
                return Ok(());
            }
            self.execute(command)?;
        }
    }

    /// Execute a single command, re-rendering after any change
    pub fn execute(&mut self, command: Command) -> Result<()> {
        let mutates = command.mutates();
        let mut prompt = ConsolePrompt::new(&mut self.input, &mut self.output, self.assume_yes);

        match command {
            Command::Add { priority, text } => {
                if let AddOutcome::Created(id) = self.store.add_task(&text, priority, &mut prompt) {
                    writeln!(self.output, "Added task #{}", id)?;
                }
            }
            Command::Toggle(id) => {
                if self.store.toggle_task(id).is_none() {
                    debug!(%id, "shell: toggle ignored, no such task");
                }
            }
            Command::Delete(id) => match self.store.delete_task(id, &mut prompt) {
                DeleteOutcome::Removed(task) => writeln!(self.output, "Deleted task #{}", task.id)?,
                DeleteOutcome::NotFound => debug!(%id, "shell: delete ignored, no such task"),
                DeleteOutcome::Declined => {}
            },
            Command::Clear => {
                if let ClearOutcome::Cleared(count) = self.store.clear_completed_tasks(&mut prompt) {
                    writeln!(self.output, "Cleared {} completed task(s)", count)?;
                }
            }
            Command::Filter(filter) => self.store.set_filter(filter),
            Command::Sort => self.store.sort_by_priority(),
            Command::List => self.render()?,
            Command::Stats => {
                writeln!(self.output, "{}", render::render_stats(&self.store.calculate_stats()))?;
            }
            Command::Export => {
                let json = serde_json::to_string_pretty(&self.store.visible_tasks())
                    .context("Failed to serialize tasks")?;
                writeln!(self.output, "{}", json)?;
            }
            Command::Help => writeln!(self.output, "{}", HELP)?,
            Command::Quit => {}
        }

        if mutates {
            self.render()?;
        }
        Ok(())
    }

    /// Print the current view followed by the summary line
    fn render(&mut self) -> Result<()> {
        let filter = self.store.current_filter();
        writeln!(self.output, "-- {} tasks --", filter)?;
        writeln!(self.output, "{}", render::render_list(&self.store.visible_tasks(), filter))?;
        writeln!(self.output, "{}", render::render_summary(&self.store.calculate_stats()))?;
        Ok(())
    }
}
