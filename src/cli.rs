//! Command-line interface.

use crate::config::Config;
use crate::error::Result;
use crate::server::StaticServer;
use crate::storage::SqliteStore;
use crate::tasks::calendar::{day_start_ms, month_grid, MonthGrid};
use crate::tasks::models::Filter;
use crate::tasks::timefmt::{format_date_time, now_ms, relative_time};
use crate::tasks::views::{filtered, remaining};
use crate::tasks::{Mutation, Task, TaskBook};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// A local to-do list with a calendar view and a static file server.
#[derive(Parser)]
#[command(name = "tarefas", version, about)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add a task
    Add {
        /// Task text
        text: String,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,
    },
    /// List tasks
    List {
        /// Filter: all, active, or completed
        #[arg(long, default_value = "all")]
        filter: String,
        /// Only tasks due on this day (YYYY-MM-DD)
        #[arg(long)]
        on: Option<String>,
    },
    /// Toggle a task's completion
    Toggle {
        /// Task id
        id: String,
    },
    /// Replace a task's text
    Edit {
        /// Task id
        id: String,
        /// New text
        text: String,
    },
    /// Delete a task
    Delete {
        /// Task id
        id: String,
    },
    /// Remove all completed tasks
    ClearCompleted,
    /// Show a month of due dates
    Calendar {
        /// Month to show (YYYY-MM), defaults to the current month
        #[arg(long)]
        month: Option<String>,
    },
    /// Serve static files over HTTP
    Serve {
        /// Port to listen on
        #[arg(long)]
        port: Option<u16>,
        /// Directory to serve
        #[arg(long)]
        root: Option<PathBuf>,
    },
}

/// Run the parsed command.
///
/// # Errors
///
/// Returns an error on storage, configuration, date parsing, or bind
/// failures.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Serve { port, root } => serve(port, root),
        command => run_task_command(command),
    }
}

fn run_task_command(command: Command) -> Result<()> {
    let store = SqliteStore::open_default()?;
    let now = now_ms();
    let mut book = TaskBook::open(store, now);

    match command {
        Command::Add { text, due } => {
            let due_at = due.as_deref().map(parse_day).transpose()?;
            match book.add(&text, due_at, now) {
                Mutation::Applied => {
                    let task = &book.list().items()[0];
                    println!("Added {}: {}", task.id, task.text);
                }
                Mutation::Unchanged => println!("Nothing to add"),
            }
        }
        Command::List { filter, on } => {
            let filter = Filter::from_str(&filter)?;
            let selected_day = on.as_deref().map(parse_day).transpose()?;
            print_list(book.list().items(), filter, selected_day, now);
        }
        Command::Toggle { id } => report(book.toggle(&id, now), &id),
        Command::Edit { id, text } => report(book.edit(&id, &text, now), &id),
        Command::Delete { id } => report(book.delete(&id), &id),
        Command::ClearCompleted => match book.clear_completed() {
            Mutation::Applied => println!("Cleared completed tasks"),
            Mutation::Unchanged => println!("No completed tasks"),
        },
        Command::Calendar { month } => {
            let first = match month.as_deref() {
                Some(m) => parse_month(m)?,
                None => crate::tasks::timefmt::local_date(now),
            };
            print_calendar(&month_grid(first, book.list().items(), now));
        }
        Command::Serve { .. } => unreachable!("handled by run"),
    }
    Ok(())
}

fn report(outcome: Mutation, id: &str) {
    match outcome {
        Mutation::Applied => println!("Updated {id}"),
        Mutation::Unchanged => println!("No change to {id}"),
    }
}

fn print_list(items: &[Task], filter: Filter, selected_day: Option<i64>, now: i64) {
    let shown = filtered(items, filter, selected_day);
    for task in &shown {
        let mark = if task.completed { "x" } else { " " };
        println!("[{mark}] {}  {}", task.id, task.text);
        println!(
            "      created {} ({})",
            relative_time(task.created_at, now),
            format_date_time(task.created_at)
        );
        if let Some(at) = task.completed_at {
            println!("      done {} ({})", relative_time(at, now), format_date_time(at));
        }
        if let Some(at) = task.edited_at {
            println!("      edited {} ({})", relative_time(at, now), format_date_time(at));
        }
        if let Some(at) = task.due_at {
            println!("      due {} ({})", relative_time(at, now), format_date_time(at));
        }
    }
    println!("{} remaining, {} total ({} shown)", remaining(items), items.len(), shown.len());
}

fn print_calendar(grid: &MonthGrid) {
    println!("{}", grid.first.format("%B %Y"));
    println!(" Su  Mo  Tu  We  Th  Fr  Sa");
    for week in grid.cells.chunks(7) {
        let row: Vec<String> = week
            .iter()
            .map(|cell| {
                let marker = if cell.overdue {
                    '!'
                } else if cell.pending > 0 {
                    '*'
                } else if cell.in_month {
                    ' '
                } else {
                    '.'
                };
                format!("{:>2}{marker}", cell.date.format("%d"))
            })
            .collect();
        println!("{}", row.join(" "));
    }
}

fn serve(port: Option<u16>, root: Option<PathBuf>) -> Result<()> {
    let config = Config::load()?.unwrap_or_default();
    let port = port.or_else(Config::port_from_env).unwrap_or(config.port);
    let root = root.unwrap_or_else(|| config.root.clone());

    let server = StaticServer::bind(
        &format!("0.0.0.0:{port}"),
        root.clone(),
        config.request_logging,
    )?;
    println!("Serving {} at http://localhost:{port}/", root.display());
    server.run();
    Ok(())
}

fn parse_day(raw: &str) -> Result<i64> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")?;
    Ok(day_start_ms(date))
}

fn parse_month(raw: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d")?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_subcommands() {
        Cli::try_parse_from(["tarefas", "add", "buy milk", "--due", "2026-09-01"]).unwrap();
        Cli::try_parse_from(["tarefas", "list", "--filter", "active"]).unwrap();
        Cli::try_parse_from(["tarefas", "toggle", "abc123"]).unwrap();
        Cli::try_parse_from(["tarefas", "edit", "abc123", "new text"]).unwrap();
        Cli::try_parse_from(["tarefas", "delete", "abc123"]).unwrap();
        Cli::try_parse_from(["tarefas", "clear-completed"]).unwrap();
        Cli::try_parse_from(["tarefas", "calendar", "--month", "2026-08"]).unwrap();
        Cli::try_parse_from(["tarefas", "serve", "--port", "8080", "--root", "public"]).unwrap();
    }

    #[test]
    fn test_parse_day_accepts_iso_dates() {
        assert!(parse_day("2026-08-30").is_ok());
        assert!(parse_day("30/08/2026").is_err());
        assert!(parse_day("not a date").is_err());
    }

    #[test]
    fn test_parse_month() {
        let first = parse_month("2026-08").unwrap();
        assert_eq!(first, NaiveDate::from_ymd_opt(2026, 8, 1).unwrap());
        assert!(parse_month("August").is_err());
    }
}
