//! Todo Panes - Main Entry Point
//!
//! Command-line front end for the `todo_panes` library.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use todo_panes::todo::local_date_today;
use todo_panes::{Storage, TodoView, formatting, validation};

/// Show todo items from a TOML file by pane
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the todo data file
    file: String,

    /// Pane to show: today, scheduled, inbox, someday, stakeholder
    #[arg(long, default_value = "today")]
    pane: String,

    /// Filter on person or project
    #[arg(long, default_value = "")]
    filter: String,

    /// Reference date (YYYY-MM-DD), defaults to the local date
    #[arg(long)]
    today: Option<String>,

    /// Toggle the status of the item at this position
    #[arg(long)]
    toggle: Option<usize>,

    /// Print the source file of the item at this position
    #[arg(long)]
    open: Option<usize>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!();
        std::process::exit(2);
    }

    let args = Args::parse();
    let pane = validation::parse_pane(&args.pane)?;
    let today = match args.today {
        Some(ref date) => validation::parse_date(date)?,
        None => local_date_today(),
    };

    let mut storage = Storage::new(&args.file);
    let mut view = TodoView::new(storage.load()?);
    view.set_active_pane(pane);
    view.set_filter(args.filter);

    if let Some(position) = args.toggle {
        let items = view.items(today);
        let todo = validation::select_item(&items, position)?;
        view.toggle(todo, &mut storage)?;
        let reloaded = storage.load()?;
        view.set_records(|_| reloaded);
    }

    if let Some(position) = args.open {
        let items = view.items(today);
        let todo = validation::select_item(&items, position)?;
        view.open_file(todo, &mut storage)?;
        if let Some(path) = storage.last_opened() {
            println!("{}", path);
        }
        return Ok(());
    }

    println!("{}", formatting::format_toolbar(view.active_pane()));
    println!();
    println!("{}", formatting::format_todos(&view.items(today)));
    Ok(())
}
