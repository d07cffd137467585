//! Command-line interface definition.

use std::collections::BTreeMap;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use staffdesk_seeker::{ClauseValue, FilterValue, QueryState, SortSpec};

use crate::output::OutputMode;

#[derive(Debug, Parser)]
#[command(name = "staffdesk", version, about = "Browse, filter and export staff dashboard tables")]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'o', global = true, value_enum, default_value_t = OutputMode::Auto)]
    pub output: OutputMode,

    /// Settings file (YAML). Defaults to $STAFFDESK_CONFIG when set.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Rows per page, overriding the settings file
    #[arg(long, global = true, value_name = "N")]
    pub page_size: Option<usize>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Company assets
    #[command(subcommand)]
    Inventory(InventoryCommand),

    /// Leave requests and balances
    #[command(subcommand)]
    Leave(LeaveCommand),

    /// Employee directory
    #[command(subcommand)]
    Employees(EmployeeCommand),

    /// Headline figures: headcount, presence, pending leave, active assets
    Dashboard,

    /// Interactive table with live search
    Browse {
        #[arg(value_enum)]
        table: Table,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Table {
    Inventory,
    Leave,
    Employees,
}

#[derive(Debug, Subcommand)]
pub enum InventoryCommand {
    /// List assets, one page at a time
    List(InventoryArgs),
    /// Write the filtered assets (all pages) to CSV
    Export {
        #[command(flatten)]
        view: InventoryArgs,
        #[command(flatten)]
        out: ExportArgs,
    },
    /// Asset totals, utilisation and value
    Stats,
    /// One asset with all its details
    Show { id: u32 },
}

#[derive(Debug, Subcommand)]
pub enum LeaveCommand {
    /// List leave requests, one page at a time
    List(LeaveArgs),
    /// Write the filtered requests (all pages) to CSV
    Export {
        #[command(flatten)]
        view: LeaveArgs,
        #[command(flatten)]
        out: ExportArgs,
    },
    /// Request counts by status and type
    Summary,
    /// Days left per leave type
    Balance,
}

#[derive(Debug, Subcommand)]
pub enum EmployeeCommand {
    /// List employees, one page at a time
    List(EmployeeArgs),
    /// Write the filtered employees (all pages) to CSV
    Export {
        #[command(flatten)]
        view: EmployeeArgs,
        #[command(flatten)]
        out: ExportArgs,
    },
    /// Headcount by status and department
    Stats,
}

/// Flags every table understands.
#[derive(Debug, Clone, Default, Args)]
pub struct ViewArgs {
    /// Case-insensitive text to look for in the searchable columns
    #[arg(long, short = 's', default_value = "")]
    pub search: String,

    /// Column to sort by
    #[arg(long, value_name = "FIELD")]
    pub sort: Option<String>,

    /// Sort descending
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Page to show (clamped to the last page)
    #[arg(long, short = 'p', default_value_t = 1)]
    pub page: usize,

    /// Only rows dated on or after this day (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub since: Option<String>,

    /// Only rows dated on or before this day (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub until: Option<String>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct InventoryArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    /// active, returned, maintenance, lost, damaged or all
    #[arg(long, default_value = FilterValue::ALL)]
    pub status: String,

    /// excellent, good, fair, poor or all
    #[arg(long, default_value = FilterValue::ALL)]
    pub condition: String,
}

#[derive(Debug, Clone, Default, Args)]
pub struct LeaveArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    /// pending, approved, rejected or all
    #[arg(long, default_value = FilterValue::ALL)]
    pub status: String,

    /// Vacation, Sick, Personal, "Annual Leave" or all
    #[arg(long = "type", default_value = FilterValue::ALL)]
    pub leave_type: String,
}

#[derive(Debug, Clone, Default, Args)]
pub struct EmployeeArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    /// Engineering, Design, Marketing, Sales, HR, ... or all
    #[arg(long, default_value = FilterValue::ALL)]
    pub department: String,

    /// active, on-leave, inactive or all
    #[arg(long, default_value = FilterValue::ALL)]
    pub status: String,
}

#[derive(Debug, Clone, Default, Args)]
pub struct ExportArgs {
    /// Output file. Defaults to <table>-export-<today>.csv
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,
}

/// A table request in pipeline terms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListRequest {
    pub search: String,
    pub filters: BTreeMap<String, FilterValue>,
    pub sort: Option<SortSpec>,
    pub page: usize,
    pub since: Option<ClauseValue>,
    pub until: Option<ClauseValue>,
}

impl ListRequest {
    /// The query inputs this request restores, with the requested page last
    /// so the search, filter and sort resets don't override it.
    pub fn query_state(&self, page_size: NonZeroUsize) -> QueryState {
        let mut state = QueryState::new(page_size);
        state.set_search_text(self.search.as_str());
        for (field, value) in &self.filters {
            state.set_filter(field.as_str(), value.clone());
        }
        state.set_sort_spec(self.sort.clone());
        state.set_page(self.page);
        state
    }
}

impl ViewArgs {
    fn request(&self, filters: &[(&str, &str)]) -> staffdesk_seeker::Result<ListRequest> {
        let date = |raw: &Option<String>| raw.as_deref().map(ClauseValue::parse_date).transpose();

        Ok(ListRequest {
            search: self.search.clone(),
            filters: filters
                .iter()
                .map(|(field, value)| (field.to_string(), FilterValue::parse(value)))
                .filter(|(_, value)| !value.is_all())
                .collect(),
            sort: self.sort.as_ref().map(|field| {
                if self.desc {
                    SortSpec::desc(field.as_str())
                } else {
                    SortSpec::asc(field.as_str())
                }
            }),
            page: self.page,
            since: date(&self.since)?,
            until: date(&self.until)?,
        })
    }
}

impl InventoryArgs {
    pub fn request(&self) -> staffdesk_seeker::Result<ListRequest> {
        self.view
            .request(&[("status", self.status.as_str()), ("condition", self.condition.as_str())])
    }
}

impl LeaveArgs {
    pub fn request(&self) -> staffdesk_seeker::Result<ListRequest> {
        self.view
            .request(&[("status", self.status.as_str()), ("leave_type", self.leave_type.as_str())])
    }
}

impl EmployeeArgs {
    pub fn request(&self) -> staffdesk_seeker::Result<ListRequest> {
        self.view
            .request(&[("department", self.department.as_str()), ("status", self.status.as_str())])
    }
}
