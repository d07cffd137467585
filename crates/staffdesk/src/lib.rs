//! # staffdesk
//!
//! Staff dashboard tables for the terminal. Three record types ship with
//! demo data: the company asset inventory, employee leave requests and the
//! employee directory. Every table supports the same pipeline, provided by
//! [`staffdesk_seeker`]:
//!
//! ```text
//! records ─▶ filter (search + column filters) ─▶ sort ─▶ paginate ─▶ render
//! ```
//!
//! The [`list`](cli::InventoryCommand::List) commands run the pipeline once
//! and print one page. [`browse`] runs it on every keystroke, with the search
//! box debounced so a burst of typing triggers one recomputation.
//!
//! ## Output
//!
//! `--output` picks between a styled table (`auto` on a terminal, `term`),
//! a plain table (`text`, or `auto` when piped) and structured data
//! (`json`, `yaml`, `csv`). Exports always write CSV.
//!
//! ## Settings
//!
//! View settings come from built-in defaults, then an optional YAML file
//! (`--config` or `$STAFFDESK_CONFIG`), then flags:
//!
//! ```yaml
//! view:
//!   page_size: 10
//!   search_debounce_ms: 300
//!   page_window: 5
//! export_dir: exports
//! ```

pub mod browse;
pub mod cli;
pub mod commands;
pub mod export;
pub mod fixtures;
pub mod logging;
pub mod notify;
pub mod output;
pub mod records;
pub mod session;
pub mod settings;
pub mod stats;
pub mod table;

use anyhow::Context;
use chrono::{Local, NaiveDate};

use crate::cli::{Cli, Command, EmployeeCommand, InventoryCommand, LeaveCommand, Table};
use crate::commands::App;
use crate::notify::{NotificationSink, StderrSink};
use crate::settings::{Overrides, Settings};

/// Entry point for the binary: sets up logging, runs the command and prints
/// its output.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let interactive = matches!(cli.command, Command::Browse { .. });
    logging::init(cli.verbose, cli.log_file.as_deref(), interactive)?;

    let today = Local::now().date_naive();
    if let Some(text) = execute(&cli, &StderrSink, today)? {
        output::emit(std::io::stdout().lock(), &text).context("cannot write output")?;
    }
    Ok(())
}

/// Runs a parsed command and returns what it would print.
///
/// `browse` draws its own screen and returns `None`.
pub fn execute(
    cli: &Cli,
    sink: &dyn NotificationSink,
    today: NaiveDate,
) -> anyhow::Result<Option<String>> {
    let settings = Settings::load(cli.config.as_deref())?.with_overrides(Overrides {
        page_size: cli.page_size,
    });
    let app = App {
        mode: cli.output,
        view: settings.view()?,
        export_dir: settings.export_dir.clone(),
        sink,
        today,
    };

    let output = match &cli.command {
        Command::Inventory(cmd) => {
            let items = fixtures::inventory();
            match cmd {
                InventoryCommand::List(args) => app.list(&items, &args.request()?)?,
                InventoryCommand::Export { view, out } => app
                    .export(&items, &view.request()?, out.out.as_deref())?
                    .display()
                    .to_string(),
                InventoryCommand::Stats => app.inventory_stats(&items)?,
                InventoryCommand::Show { id } => app.show_inventory(&items, *id)?,
            }
        }
        Command::Leave(cmd) => {
            let requests = fixtures::leave_requests();
            match cmd {
                LeaveCommand::List(args) => app.list(&requests, &args.request()?)?,
                LeaveCommand::Export { view, out } => app
                    .export(&requests, &view.request()?, out.out.as_deref())?
                    .display()
                    .to_string(),
                LeaveCommand::Summary => app.leave_summary(&requests)?,
                LeaveCommand::Balance => app.leave_balance(&fixtures::leave_balances())?,
            }
        }
        Command::Employees(cmd) => {
            let employees = fixtures::employees();
            match cmd {
                EmployeeCommand::List(args) => app.list(&employees, &args.request()?)?,
                EmployeeCommand::Export { view, out } => app
                    .export(&employees, &view.request()?, out.out.as_deref())?
                    .display()
                    .to_string(),
                EmployeeCommand::Stats => app.employee_stats(&employees)?,
            }
        }
        Command::Dashboard => app.dashboard(
            &fixtures::employees(),
            &fixtures::leave_requests(),
            &fixtures::inventory(),
        )?,
        Command::Browse { table } => {
            match table {
                Table::Inventory => browse::run(&fixtures::inventory(), &app.view)?,
                Table::Leave => browse::run(&fixtures::leave_requests(), &app.view)?,
                Table::Employees => browse::run(&fixtures::employees(), &app.view)?,
            }
            return Ok(None);
        }
    };

    Ok(Some(output))
}
