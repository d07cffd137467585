//! Dashboard figures for the inventory, leave and employee screens.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use staffdesk_seeker::{Query, SeekerEnum};

use crate::records::{
    AssetStatus, Department, Employee, EmployeeStatus, InventoryItem, LeaveBalance, LeaveRequest,
    LeaveStatus, LeaveType,
};

/// Assumed value of an asset whose cost isn't recorded.
pub const AVERAGE_ASSET_VALUE: f64 = 1250.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryStats {
    pub total: usize,
    pub active: usize,
    pub active_pct: u32,
    pub maintenance: usize,
    pub maintenance_pct: u32,
    pub returned: usize,
    /// Damaged or lost.
    pub damaged: usize,
    /// Active share of the assets still out, as a percentage.
    pub utilization_pct: u32,
    pub total_value: f64,
    pub active_value: f64,
    /// Active assets with an assignee.
    pub assigned: usize,
    pub unassigned: usize,
}

fn percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as u32
}

fn value_of<'a>(items: impl Iterator<Item = &'a InventoryItem>) -> f64 {
    items.map(|i| i.cost.unwrap_or(AVERAGE_ASSET_VALUE)).sum()
}

impl InventoryStats {
    pub fn compute(items: &[InventoryItem]) -> Self {
        let status = |s: AssetStatus| Query::new().and_eq("status", s.seeker_token());

        let active_query = status(AssetStatus::Active);
        let total = items.len();
        let active = active_query.count(items);
        let maintenance = status(AssetStatus::Maintenance).count(items);
        let returned = status(AssetStatus::Returned).count(items);
        let damaged = Query::new()
            .or_eq("status", AssetStatus::Damaged.seeker_token())
            .or_eq("status", AssetStatus::Lost.seeker_token())
            .count(items);

        // Missing fields never match, so `ne ""` means "has an assignee".
        let assigned = active_query.clone().and_ne("assigned_to", "").count(items);

        let stats = InventoryStats {
            total,
            active,
            active_pct: percent(active, total),
            maintenance,
            maintenance_pct: percent(maintenance, total),
            returned,
            damaged,
            utilization_pct: percent(active, total - returned),
            total_value: value_of(items.iter()),
            active_value: value_of(active_query.filter(items).into_iter()),
            assigned,
            unassigned: active - assigned,
        };
        log::debug!("inventory stats: {:?}", stats);
        stats
    }
}

/// Request counts by status and by type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaveSummary {
    pub total: usize,
    pub by_status: BTreeMap<String, usize>,
    pub by_type: BTreeMap<String, usize>,
    /// Pending requests, the ones waiting on someone.
    pub awaiting_decision: usize,
}

impl LeaveSummary {
    pub fn compute(requests: &[LeaveRequest]) -> Self {
        let count_by = |field: &str, tokens: &[&str]| -> BTreeMap<String, usize> {
            tokens
                .iter()
                .map(|t| (t.to_string(), Query::new().and_eq(field, *t).count(requests)))
                .collect()
        };

        let by_status = count_by("status", LeaveStatus::TOKENS);
        let awaiting_decision = by_status
            .get(LeaveStatus::Pending.seeker_token())
            .copied()
            .unwrap_or(0);

        LeaveSummary {
            total: requests.len(),
            by_type: count_by("leave_type", LeaveType::TOKENS),
            by_status,
            awaiting_decision,
        }
    }
}

/// Headcount by status and department.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeStats {
    pub total: usize,
    /// Active employees, the dashboard's "present today".
    pub present: usize,
    pub on_leave: usize,
    pub inactive: usize,
    /// Departments with at least one employee.
    pub by_department: BTreeMap<String, usize>,
}

impl EmployeeStats {
    pub fn compute(employees: &[Employee]) -> Self {
        let status = |s: EmployeeStatus| {
            Query::new()
                .and_eq("status", s.seeker_token())
                .count(employees)
        };

        let by_department = Department::TOKENS
            .iter()
            .map(|d| (d.to_string(), Query::new().and_eq("department", *d).count(employees)))
            .filter(|(_, n)| *n > 0)
            .collect();

        EmployeeStats {
            total: employees.len(),
            present: status(EmployeeStatus::Active),
            on_leave: status(EmployeeStatus::OnLeave),
            inactive: status(EmployeeStatus::Inactive),
            by_department,
        }
    }
}

/// The four headline cards on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_employees: usize,
    pub present_today: usize,
    pub pending_leaves: usize,
    pub active_assets: usize,
}

impl DashboardStats {
    pub fn compute(
        employees: &[Employee],
        requests: &[LeaveRequest],
        items: &[InventoryItem],
    ) -> Self {
        DashboardStats {
            total_employees: employees.len(),
            present_today: Query::new()
                .and_eq("status", EmployeeStatus::Active.seeker_token())
                .count(employees),
            pending_leaves: Query::new()
                .and_eq("status", LeaveStatus::Pending.seeker_token())
                .count(requests),
            active_assets: Query::new()
                .and_eq("status", AssetStatus::Active.seeker_token())
                .count(items),
        }
    }
}

/// Days across every leave type, plus a year-end projection of days taken.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceTotals {
    pub available: u32,
    pub used: u32,
    pub pending: u32,
    /// Days used so far, extrapolated to twelve months from the current one.
    pub projected_year_end: u32,
}

impl BalanceTotals {
    pub fn compute(balances: &[LeaveBalance], today: NaiveDate) -> Self {
        let used = balances.iter().map(|b| b.used).sum();
        let months_elapsed = f64::from(today.month());
        BalanceTotals {
            available: balances.iter().map(|b| b.remaining).sum(),
            used,
            pending: balances.iter().map(|b| b.pending).sum(),
            projected_year_end: (f64::from(used) / months_elapsed * 12.0).round() as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::records::Condition;

    #[test]
    fn seed_inventory_figures() {
        let items: Vec<InventoryItem> = fixtures::inventory().into_iter().take(10).collect();
        let stats = InventoryStats::compute(&items);

        assert_eq!(stats.total, 10);
        assert_eq!(stats.active, 7);
        assert_eq!(stats.active_pct, 70);
        assert_eq!(stats.maintenance, 1);
        assert_eq!(stats.maintenance_pct, 10);
        assert_eq!(stats.returned, 2);
        assert_eq!(stats.damaged, 0);
        // 7 / (10 - 2) = 87.5
        assert_eq!(stats.utilization_pct, 88);
        assert_eq!(stats.assigned, 7);
        assert_eq!(stats.unassigned, 0);
    }

    #[test]
    fn value_uses_cost_when_known() {
        let items = vec![
            InventoryItem::new(1, "A", AssetStatus::Active, Condition::Good).with_cost(100.0),
            InventoryItem::new(2, "B", AssetStatus::Returned, Condition::Good),
        ];
        let stats = InventoryStats::compute(&items);
        assert_eq!(stats.total_value, 100.0 + AVERAGE_ASSET_VALUE);
        assert_eq!(stats.active_value, 100.0);
    }

    #[test]
    fn damaged_counts_lost_too() {
        let stats = InventoryStats::compute(&fixtures::inventory());
        assert_eq!(stats.damaged, 2);
        assert_eq!(stats.unassigned, 1);
    }

    #[test]
    fn empty_inventory_has_zero_rates() {
        let stats = InventoryStats::compute(&[]);
        assert_eq!(stats.active_pct, 0);
        assert_eq!(stats.utilization_pct, 0);
    }

    #[test]
    fn everything_returned_has_zero_utilization() {
        let items = vec![InventoryItem::new(1, "A", AssetStatus::Returned, Condition::Good)];
        assert_eq!(InventoryStats::compute(&items).utilization_pct, 0);
    }

    #[test]
    fn leave_summary_counts() {
        let summary = LeaveSummary::compute(&fixtures::leave_requests());
        assert_eq!(summary.total, 7);
        assert_eq!(summary.by_status["approved"], 3);
        assert_eq!(summary.by_status["pending"], 3);
        assert_eq!(summary.by_status["rejected"], 1);
        assert_eq!(summary.by_type["Sick"], 2);
        assert_eq!(summary.by_type["Annual Leave"], 1);
        assert_eq!(summary.awaiting_decision, 3);
    }

    #[test]
    fn employee_headcount() {
        let stats = EmployeeStats::compute(&fixtures::employees());
        assert_eq!(stats.total, 9);
        assert_eq!(stats.present, 7);
        assert_eq!(stats.on_leave, 1);
        assert_eq!(stats.inactive, 1);
        assert_eq!(stats.by_department["Engineering"], 2);
        assert!(!stats.by_department.contains_key("Legal"));
    }

    #[test]
    fn dashboard_cards() {
        let stats = DashboardStats::compute(
            &fixtures::employees(),
            &fixtures::leave_requests(),
            &fixtures::inventory(),
        );
        assert_eq!(
            stats,
            DashboardStats {
                total_employees: 9,
                present_today: 7,
                pending_leaves: 3,
                active_assets: 15,
            }
        );
    }

    #[test]
    fn balance_totals_and_projection() {
        let march = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        let totals = BalanceTotals::compute(&fixtures::leave_balances(), march);
        assert_eq!(totals.available, 14 + 10 + 4 + 90);
        assert_eq!(totals.used, 11);
        assert_eq!(totals.pending, 3);
        // 11 days over 3 months, times 12.
        assert_eq!(totals.projected_year_end, 44);
    }

    #[test]
    fn no_balances_project_nothing() {
        let jan = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(BalanceTotals::compute(&[], jan).projected_year_end, 0);
    }
}
