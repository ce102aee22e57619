//! taskdeck - Main Entry Point
//!
//! Thin command-line front end over the `taskdeck` library. Each invocation
//! opens the file-backed store, applies one operation, and exits; persistence
//! happens synchronously inside the store before any output is printed.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use taskdeck::formatting::{format_filters, format_statistics, format_tasks};
use taskdeck::{
    FileStore, FilterOptions, Priority, PriorityFilter, SortKey, StatusFilter, TaskFormData,
    TaskStatus, TaskStore, filter_tasks, sort_tasks,
};

/// taskdeck - persistent task tracker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the persisted state
    #[arg(long, default_value = ".taskdeck")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a new task
    Add {
        /// Task title
        #[arg(long)]
        title: String,
        /// Task description
        #[arg(long)]
        description: String,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: String,
        /// Priority: low, medium, high
        #[arg(long, default_value = "medium")]
        priority: Priority,
        /// Initial status: pending, in-progress, completed
        #[arg(long, default_value = "pending")]
        status: TaskStatus,
    },
    /// List tasks using the persisted filters, with optional one-shot overrides
    List {
        /// Override the status filter: all, pending, in-progress, completed
        #[arg(long)]
        status: Option<StatusFilter>,
        /// Override the priority filter: all, low, medium, high
        #[arg(long)]
        priority: Option<PriorityFilter>,
        /// Override the title search
        #[arg(long)]
        search: Option<String>,
        /// Override the sort key: none, dueDate, priority, status
        #[arg(long)]
        sort: Option<SortKey>,
    },
    /// Remove a task by id
    Remove {
        /// Id of the task to remove
        id: String,
    },
    /// Change the status of a task
    Status {
        /// Id of the task to change
        id: String,
        /// New status: pending, in-progress, completed
        status: TaskStatus,
    },
    /// Edit fields of an existing task
    Edit {
        /// Id of the task to edit
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,
        #[arg(long)]
        priority: Option<Priority>,
        #[arg(long)]
        status: Option<TaskStatus>,
    },
    /// Set the persisted filters
    Filter {
        #[arg(long, default_value = "all")]
        status: StatusFilter,
        #[arg(long, default_value = "all")]
        priority: PriorityFilter,
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "none")]
        sort: SortKey,
    },
    /// Show counts over the whole collection
    Stats,
    /// Show the current theme, or toggle it
    Theme {
        /// Flip between light and dark
        #[arg(long)]
        toggle: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let storage = FileStore::open(&args.data_dir)?;
    let mut store = TaskStore::open(storage);

    match args.command {
        Command::Add {
            title,
            description,
            due,
            priority,
            status,
        } => {
            let task = store.add_task(TaskFormData {
                title,
                description,
                due_date: due,
                priority,
                status,
            })?;
            println!("Task created with ID: {}", task.id);
        }
        Command::List {
            status,
            priority,
            search,
            sort,
        } => {
            let mut filters = store.filters().clone();
            if let Some(status) = status {
                filters.status = status;
            }
            if let Some(priority) = priority {
                filters.priority = priority;
            }
            if let Some(search) = search {
                filters.search = search;
            }
            if let Some(sort) = sort {
                filters.sort_by = sort;
            }
            let visible = sort_tasks(filter_tasks(store.tasks(), &filters), filters.sort_by);
            print!("{}", format_tasks(&visible));
        }
        Command::Remove { id } => {
            store.delete_task(&id)?;
            println!("Removed task {} (if it existed)", id);
        }
        Command::Status { id, status } => {
            store.set_status(&id, status)?;
            println!("Task {} -> {}", id, status);
        }
        Command::Edit {
            id,
            title,
            description,
            due,
            priority,
            status,
        } => {
            let Some(existing) = store.tasks().iter().find(|t| t.id == id).cloned() else {
                println!("No task with ID: {}", id);
                return Ok(());
            };
            let mut task = existing;
            if let Some(title) = title {
                task.title = title;
            }
            if let Some(description) = description {
                task.description = description;
            }
            if let Some(due) = due {
                task.due_date = due;
            }
            if let Some(priority) = priority {
                task.priority = priority;
            }
            if let Some(status) = status {
                task.status = status;
            }
            store.update_task(task)?;
            println!("Updated task {}", id);
        }
        Command::Filter {
            status,
            priority,
            search,
            sort,
        } => {
            let filters = FilterOptions {
                status,
                priority,
                search,
                sort_by: sort,
            };
            store.set_filters(filters)?;
            println!("Filters set: {}", format_filters(store.filters()));
        }
        Command::Stats => {
            println!("{}", format_statistics(&store.statistics()));
        }
        Command::Theme { toggle } => {
            if toggle {
                let theme = store.toggle_theme()?;
                println!("Theme: {}", theme);
            } else {
                println!("Theme: {}", store.theme());
            }
        }
    }

    Ok(())
}
