//! Command handlers.
//!
//! Handlers take records and a parsed request and return the text to print,
//! so they can be exercised without a terminal. Side effects are limited to
//! export files and notices.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use chrono::NaiveDate;
use serde::Serialize;
use staffdesk_seeker::{compute_view, view_query, Page, Query, SortSpec, ValidatedConfig, View};

use crate::cli::ListRequest;
use crate::export::{self, ExportError};
use crate::notify::{Notice, NotificationSink};
use crate::output::OutputMode;
use crate::records::{Employee, InventoryItem, LeaveBalance, LeaveRequest, Record};
use crate::stats::{BalanceTotals, DashboardStats, EmployeeStats, InventoryStats, LeaveSummary};
use crate::table;

/// Runs the filter and sort stages for a request, including date bounds.
pub fn select<'a, R: Record>(records: &'a [R], req: &ListRequest) -> View<'a, R> {
    let bounded = req.since.is_some() || req.until.is_some();
    let date_field = match R::DATE_FIELD {
        Some(field) if bounded => field,
        _ => return compute_view(records, &req.search, &req.filters, req.sort.as_ref()),
    };

    let mut query: Query = view_query::<R>(&req.search, &req.filters, req.sort.as_ref());
    if let Some(since) = &req.since {
        query = query.and_gte(date_field, since.clone());
    }
    if let Some(until) = &req.until {
        query = query.and_lte(date_field, until.clone());
    }

    let rows = query.filter(records);
    log::debug!("{} {} rows within date bounds", rows.len(), R::KIND);
    View {
        match_count: rows.len(),
        rows,
    }
}

/// Structured form of one listed page.
#[derive(Debug, Serialize)]
struct ListOutput<'a, R: Serialize> {
    rows: &'a [&'a R],
    page: Page,
    sort: Option<&'a SortSpec>,
}

/// Structured form of the leave balance screen.
#[derive(Debug, Serialize)]
struct BalanceOutput<'a> {
    balances: &'a [LeaveBalance],
    totals: BalanceTotals,
}

pub struct App<'s> {
    pub mode: OutputMode,
    pub view: ValidatedConfig,
    pub export_dir: Option<PathBuf>,
    pub sink: &'s dyn NotificationSink,
    pub today: NaiveDate,
}

impl App<'_> {
    /// One page of a table.
    pub fn list<R: Record>(&self, records: &[R], req: &ListRequest) -> anyhow::Result<String> {
        let view = select(records, req);
        let page = self.view.paginator().paginate(view.match_count, req.page);
        if page.page != req.page.max(1) {
            log::info!("page {} out of range, showing page {}", req.page, page.page);
        }
        let rows = page.slice(&view.rows);

        match self.mode {
            OutputMode::Csv => Ok(export::to_csv(rows)?),
            mode if mode.is_structured() => {
                let data = ListOutput {
                    rows,
                    page,
                    sort: req.sort.as_ref(),
                };
                Ok(export::serialize_structured(&data, mode)?)
            }
            mode => {
                let styled = mode.is_styled();
                let state = req.query_state(self.view.page_size);

                let mut out = Vec::new();
                let filter_line =
                    table::render_filter_line(state.search_text(), state.active_filters());
                if let Some(line) = filter_line {
                    out.push(line);
                }
                out.push(table::render_table(rows, state.sort(), styled));
                out.push(String::new());
                out.push(table::render_footer(&page, styled));
                Ok(out.join("\n"))
            }
        }
    }

    /// Where an export goes when `--out` isn't given.
    pub fn default_export_path(&self, kind: &str) -> PathBuf {
        let name = export::default_file_name(kind, self.today);
        match &self.export_dir {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        }
    }

    /// Writes every matching row (not just one page) to CSV.
    pub fn export<R: Record>(
        &self,
        records: &[R],
        req: &ListRequest,
        out: Option<&Path>,
    ) -> anyhow::Result<PathBuf> {
        let path = out
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.default_export_path(R::KIND));

        self.sink
            .notify(Notice::info(format!("Exporting {} data...", R::KIND)));

        let view = select(records, req);
        match export::write_csv(&view.rows, &path) {
            Ok(count) => {
                self.sink.notify(Notice::success(format!(
                    "{} data exported successfully!",
                    capitalize(R::KIND)
                )));
                log::info!("{} rows written", count);
                Ok(path)
            }
            Err(err) => {
                self.sink.notify(Notice::error(format!("Export failed: {}", err)));
                Err(err).context("export failed")
            }
        }
    }

    pub fn inventory_stats(&self, items: &[InventoryItem]) -> anyhow::Result<String> {
        let stats = InventoryStats::compute(items);
        if self.mode.is_structured() {
            return Ok(self.structured(&stats)?);
        }

        Ok([
            format!("Total assets        {}", stats.total),
            format!("Active              {} ({}%)", stats.active, stats.active_pct),
            format!("Maintenance         {} ({}%)", stats.maintenance, stats.maintenance_pct),
            format!("Returned            {}", stats.returned),
            format!("Damaged or lost     {}", stats.damaged),
            format!("Utilisation         {}%", stats.utilization_pct),
            format!(
                "Asset value         {} ({} active)",
                money(stats.total_value),
                money(stats.active_value)
            ),
            format!(
                "Active assignments  {} assigned, {} unassigned",
                stats.assigned, stats.unassigned
            ),
        ]
        .join("\n"))
    }

    pub fn leave_summary(&self, requests: &[LeaveRequest]) -> anyhow::Result<String> {
        let summary = LeaveSummary::compute(requests);
        if self.mode.is_structured() {
            return Ok(self.structured(&summary)?);
        }

        let mut lines = vec![format!(
            "{} requests, {} awaiting a decision",
            summary.total, summary.awaiting_decision
        )];
        lines.push(String::new());
        lines.push("By status".to_string());
        lines.extend(summary.by_status.iter().map(|(k, v)| format!("  {:<14}{}", k, v)));
        lines.push("By type".to_string());
        lines.extend(summary.by_type.iter().map(|(k, v)| format!("  {:<14}{}", k, v)));
        Ok(lines.join("\n"))
    }

    /// Entitlements per leave type, with totals and expiry notes.
    pub fn leave_balance(&self, balances: &[LeaveBalance]) -> anyhow::Result<String> {
        let totals = BalanceTotals::compute(balances, self.today);
        let rows: Vec<&LeaveBalance> = balances.iter().collect();

        match self.mode {
            OutputMode::Csv => return Ok(export::to_csv(&rows)?),
            mode if mode.is_structured() => {
                return Ok(self.structured(&BalanceOutput { balances, totals })?);
            }
            _ => {}
        }

        let mut lines = vec![
            format!(
                "{} days available, {} used, {} pending",
                totals.available, totals.used, totals.pending
            ),
            String::new(),
            table::render_table(&rows, None, self.mode.is_styled()),
            String::new(),
        ];
        for balance in balances {
            let Some(expires) = balance.expires else {
                continue;
            };
            let verb = if balance.is_expired(self.today) { "expired" } else { "expires" };
            lines.push(format!("{} {} {}", balance.leave_type, verb, expires));
        }
        lines.push(format!(
            "{} days used this year, about {} by year end",
            totals.used, totals.projected_year_end
        ));
        Ok(lines.join("\n"))
    }

    pub fn employee_stats(&self, employees: &[Employee]) -> anyhow::Result<String> {
        let stats = EmployeeStats::compute(employees);
        if self.mode.is_structured() {
            return Ok(self.structured(&stats)?);
        }

        let mut lines = vec![
            format!("Employees           {}", stats.total),
            format!("Active              {}", stats.present),
            format!("On leave            {}", stats.on_leave),
            format!("Inactive            {}", stats.inactive),
            String::new(),
            "By department".to_string(),
        ];
        lines.extend(
            stats
                .by_department
                .iter()
                .map(|(k, v)| format!("  {:<18}{}", k, v)),
        );
        Ok(lines.join("\n"))
    }

    pub fn dashboard(
        &self,
        employees: &[Employee],
        requests: &[LeaveRequest],
        items: &[InventoryItem],
    ) -> anyhow::Result<String> {
        let stats = DashboardStats::compute(employees, requests, items);
        if self.mode.is_structured() {
            return Ok(self.structured(&stats)?);
        }

        Ok([
            format!("Total Employees     {}", stats.total_employees),
            format!("Present Today       {}", stats.present_today),
            format!("Pending Leaves      {}", stats.pending_leaves),
            format!("Active Assets       {}", stats.active_assets),
        ]
        .join("\n"))
    }

    pub fn show_inventory(&self, items: &[InventoryItem], id: u32) -> anyhow::Result<String> {
        let Some(item) = Query::new().and_eq("id", id).find(items) else {
            bail!("no asset with id {}", id);
        };
        if self.mode.is_structured() {
            return Ok(self.structured(item)?);
        }

        let mut lines = vec![format!("#{} {}", item.id, item.item)];
        let mut field = |label: &str, value: Option<String>| {
            if let Some(value) = value {
                lines.push(format!("  {:<14}{}", label, value));
            }
        };
        field("Status", Some(item.status.to_string()));
        field("Condition", Some(item.condition.to_string()));
        field("Assigned to", item.assigned_to.clone());
        field("Assigned on", item.assigned_date.map(|d| d.to_string()));
        field("Serial", item.serial_number.clone());
        field("Cost", item.cost.map(money));
        field("Notes", item.notes.clone());
        Ok(lines.join("\n"))
    }

    /// Structured output for single values. CSV only applies to row lists.
    fn structured<T: Serialize + ?Sized>(&self, data: &T) -> anyhow::Result<String> {
        match export::serialize_structured(&data, self.mode) {
            Err(ExportError::NotStructured) => {
                bail!("--output {:?} is only available for row listings", self.mode)
            }
            other => Ok(other?),
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `$12,345` style amounts, rounded to whole units.
fn money(amount: f64) -> String {
    let whole = amount.round() as i64;
    let digits = whole.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if whole < 0 { "-" } else { "" };
    format!("{}${}", sign, grouped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::notify::{Level, Recorder};
    use staffdesk_seeker::{ClauseValue, FilterValue, ViewConfig};

    fn app(sink: &Recorder, mode: OutputMode) -> App<'_> {
        App {
            mode,
            view: ViewConfig::default().validate().unwrap(),
            export_dir: None,
            sink,
            today: NaiveDate::from_ymd_opt(2024, 3, 7).unwrap(),
        }
    }

    fn request() -> ListRequest {
        ListRequest {
            page: 1,
            ..ListRequest::default()
        }
    }

    #[test]
    fn money_grouping() {
        assert_eq!(money(0.0), "$0");
        assert_eq!(money(999.4), "$999");
        assert_eq!(money(28750.0), "$28,750");
        assert_eq!(money(1234567.0), "$1,234,567");
    }

    #[test]
    fn capitalize_kind() {
        assert_eq!(capitalize("inventory"), "Inventory");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn select_applies_date_bounds() {
        let items = fixtures::inventory();
        let req = ListRequest {
            since: Some(ClauseValue::parse_date("2024-01-05").unwrap()),
            until: Some(ClauseValue::parse_date("2024-01-07").unwrap()),
            ..request()
        };
        let ids: Vec<u32> = select(&items, &req).rows.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![5, 6, 7]);
    }

    #[test]
    fn select_without_bounds_matches_compute_view() {
        let items = fixtures::inventory();
        let mut req = request();
        req.search = "mac".into();
        let view = select(&items, &req);
        assert_eq!(view.match_count, compute_view(&items, "mac", &req.filters, None).match_count);
    }

    #[test]
    fn list_clamps_and_shows_last_page() {
        let rec = Recorder::new();
        let items = fixtures::inventory();
        let req = ListRequest {
            page: 9,
            ..request()
        };
        let text = app(&rec, OutputMode::Text).list(&items, &req).unwrap();
        assert!(text.ends_with("Showing 21 to 23 of 23 results   ‹ 1 2 [3] ›"));
        assert!(text.contains("Drawing Tablet"));
    }

    #[test]
    fn sorting_by_assignee_orders_assigned_items() {
        let items = fixtures::inventory();
        for sort in [SortSpec::asc("assigned_to"), SortSpec::desc("assigned_to")] {
            let req = ListRequest {
                sort: Some(sort.clone()),
                ..request()
            };
            let view = select(&items, &req);
            assert_eq!(view.match_count, 23);

            let unassigned: Vec<usize> = view
                .rows
                .iter()
                .enumerate()
                .filter(|(_, item)| item.assigned_to.is_none())
                .map(|(slot, _)| slot)
                .collect();
            assert_eq!(unassigned, vec![14, 19, 21]);

            let names: Vec<String> = view
                .rows
                .iter()
                .filter_map(|item| item.assigned_to.as_deref())
                .map(staffdesk_seeker::collation_key)
                .collect();
            let mut expected = names.clone();
            expected.sort();
            if !sort.dir.is_asc() {
                expected.reverse();
            }
            assert_eq!(names, expected, "{}", sort.dir);
        }
    }

    #[test]
    fn list_text_describes_active_filters() {
        let rec = Recorder::new();
        let items = fixtures::inventory();
        let mut req = request();
        req.search = "mac".into();
        req.filters.insert("status".into(), FilterValue::parse("active"));
        let text = app(&rec, OutputMode::Text).list(&items, &req).unwrap();
        assert_eq!(
            text.lines().next(),
            Some("Filtered by search \"mac\", status = active")
        );
    }

    #[test]
    fn list_json_includes_page() {
        let rec = Recorder::new();
        let items = fixtures::inventory();
        let mut req = request();
        req.filters
            .insert("status".into(), FilterValue::parse("maintenance"));
        let text = app(&rec, OutputMode::Json).list(&items, &req).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["rows"].as_array().unwrap().len(), 3);
        assert_eq!(json["page"]["total_pages"], 1);
    }

    #[test]
    fn export_writes_all_pages_and_notifies() {
        let rec = Recorder::new();
        let dir = tempfile::tempdir().unwrap();
        let mut desk = app(&rec, OutputMode::Text);
        desk.export_dir = Some(dir.path().to_path_buf());

        let items = fixtures::inventory();
        let path = desk.export(&items, &request(), None).unwrap();

        assert_eq!(path, dir.path().join("inventory-export-2024-03-07.csv"));
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 24);

        let notices = rec.notices();
        assert_eq!(notices[0], Notice::info("Exporting inventory data..."));
        assert_eq!(notices[1], Notice::success("Inventory data exported successfully!"));
    }

    #[test]
    fn failed_export_sends_error_notice() {
        let rec = Recorder::new();
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("missing").join("x.csv");
        let result = app(&rec, OutputMode::Text).export(
            &fixtures::leave_requests(),
            &request(),
            Some(out.as_path()),
        );
        assert!(result.is_err());
        assert_eq!(rec.notices().last().unwrap().level, Level::Error);
    }

    #[test]
    fn stats_text_and_csv_refusal() {
        let rec = Recorder::new();
        let items = fixtures::inventory();
        let text = app(&rec, OutputMode::Text).inventory_stats(&items).unwrap();
        assert!(text.contains("Total assets        23"));
        assert!(app(&rec, OutputMode::Csv).inventory_stats(&items).is_err());
    }

    #[test]
    fn show_finds_by_id() {
        let rec = Recorder::new();
        let items = fixtures::inventory();
        let text = app(&rec, OutputMode::Text).show_inventory(&items, 12).unwrap();
        assert!(text.starts_with("#12 ThinkPad X1 Carbon"));
        assert!(text.contains("Battery swelling"));
        assert!(app(&rec, OutputMode::Text).show_inventory(&items, 999).is_err());
    }

    #[test]
    fn leave_summary_text() {
        let rec = Recorder::new();
        let text = app(&rec, OutputMode::Text)
            .leave_summary(&fixtures::leave_requests())
            .unwrap();
        assert!(text.starts_with("7 requests, 3 awaiting a decision"));
        assert!(text.contains("  Annual Leave  1"));
    }

    #[test]
    fn leave_balance_text_notes_expiry() {
        let rec = Recorder::new();
        let text = app(&rec, OutputMode::Text)
            .leave_balance(&fixtures::leave_balances())
            .unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "118 days available, 11 used, 3 pending");
        assert!(lines[2].starts_with("Type"));
        assert!(text.contains("Annual Leave expires 2024-12-31"));
        assert!(text.ends_with("11 days used this year, about 44 by year end"));

        let mut late = app(&rec, OutputMode::Text);
        late.today = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        let text = late.leave_balance(&fixtures::leave_balances()).unwrap();
        assert!(text.contains("Annual Leave expired 2024-12-31"));
    }

    #[test]
    fn leave_balance_structured_modes() {
        let rec = Recorder::new();
        let balances = fixtures::leave_balances();

        let csv = app(&rec, OutputMode::Csv).leave_balance(&balances).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("Type,Total,Used,Pending,Remaining,Standing,Expires")
        );
        assert_eq!(lines.next(), Some("Annual Leave,25,8,3,14,good,2024-12-31"));

        let json = app(&rec, OutputMode::Json).leave_balance(&balances).unwrap();
        let json: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(json["totals"]["available"], 118);
        assert_eq!(json["balances"][1]["standing"], "excellent");
    }

    #[test]
    fn employee_stats_and_dashboard() {
        let rec = Recorder::new();
        let text = app(&rec, OutputMode::Text)
            .employee_stats(&fixtures::employees())
            .unwrap();
        assert!(text.starts_with("Employees           9"));
        assert!(text.contains("  Engineering       2"));

        let text = app(&rec, OutputMode::Text)
            .dashboard(
                &fixtures::employees(),
                &fixtures::leave_requests(),
                &fixtures::inventory(),
            )
            .unwrap();
        assert_eq!(
            text,
            "Total Employees     9\nPresent Today       7\nPending Leaves      3\nActive Assets       15"
        );
        assert!(app(&rec, OutputMode::Csv).employee_stats(&fixtures::employees()).is_err());
    }
}
