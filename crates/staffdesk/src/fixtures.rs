//! Built-in demo data.
//!
//! The first ten assets, the first five leave requests, the first seven
//! employees and the leave balances mirror the dashboard's seed data; the
//! rest fill out a few more pages and cover the statuses and conditions the
//! seed set lacks.

use chrono::{NaiveDate, NaiveDateTime};

use crate::records::{
    AssetStatus, Condition, Department, Employee, EmployeeStatus, InventoryItem, LeaveBalance,
    LeaveRequest, LeaveStatus, LeaveType,
};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap_or_default()
}

fn feb(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, d).unwrap_or_default()
}

/// Demo inventory, in insertion order.
pub fn inventory() -> Vec<InventoryItem> {
    use AssetStatus::*;
    use Condition::*;

    vec![
        InventoryItem::new(1, "MacBook Pro 16\"", Active, Excellent)
            .assigned("Sarah Johnson", day(1))
            .with_serial("C02XG2JHJG5H")
            .with_cost(2499.0),
        InventoryItem::new(2, "iPhone 14 Pro", Active, Good)
            .assigned("John Doe", day(2))
            .with_cost(999.0),
        InventoryItem::new(3, "Dell Monitor 27\"", Returned, Fair).assigned("Jane Smith", day(3)),
        InventoryItem::new(4, "Wireless Mouse", Active, Excellent)
            .assigned("Mike Wilson", day(4))
            .with_cost(79.0),
        InventoryItem::new(5, "Mechanical Keyboard", Maintenance, Good)
            .assigned("Emily Brown", day(5))
            .with_notes("Sticky space bar"),
        InventoryItem::new(6, "iPad Pro 12.9\"", Active, Excellent).assigned("David Lee", day(6)),
        InventoryItem::new(7, "Surface Laptop", Active, Good).assigned("Lisa Chen", day(7)),
        InventoryItem::new(8, "Webcam HD", Active, Excellent).assigned("Robert Garcia", day(8)),
        InventoryItem::new(9, "Noise-Cancelling Headphones", Active, Good)
            .assigned("Sarah Johnson", day(9)),
        InventoryItem::new(10, "External Hard Drive 1TB", Returned, Fair)
            .assigned("John Doe", day(10)),
        InventoryItem::new(11, "iMac 24\"", Active, Excellent)
            .assigned("Emily Brown", day(11))
            .with_cost(1499.0),
        InventoryItem::new(12, "ThinkPad X1 Carbon", Maintenance, Fair)
            .assigned("Robert Garcia", day(12))
            .with_notes("Battery swelling, sent to vendor"),
        InventoryItem::new(13, "USB-C Dock", Active, Good).assigned("Lisa Chen", day(13)),
        InventoryItem::new(14, "Standing Desk", Active, Excellent).assigned("Mike Wilson", day(15)),
        InventoryItem::new(15, "Conference Speakerphone", Active, Good),
        InventoryItem::new(16, "Galaxy Tab S9", Lost, Good)
            .assigned("David Lee", day(17))
            .with_notes("Reported lost while travelling"),
        InventoryItem::new(17, "Ergonomic Chair", Active, Fair).assigned("Jane Smith", day(18)),
        InventoryItem::new(18, "Magic Keyboard", Damaged, Poor)
            .assigned("John Doe", day(19))
            .with_notes("Liquid damage"),
        InventoryItem::new(19, "LG UltraFine 5K", Active, Excellent)
            .assigned("Sarah Johnson", day(22))
            .with_cost(1299.0),
        InventoryItem::new(20, "Label Printer", Returned, Poor),
        InventoryItem::new(21, "MacBook Air 13\"", Active, Good)
            .assigned("Émilie Laurent", day(24))
            .with_serial("FVFHC1ZNQ6L4"),
        InventoryItem::new(22, "Portable Projector", Maintenance, Fair),
        InventoryItem::new(23, "Drawing Tablet", Active, Good).assigned("Lisa Chen", feb(1)),
    ]
}

/// Demo leave requests, in insertion order.
pub fn leave_requests() -> Vec<LeaveRequest> {
    fn request(
        id: u32,
        employee: &str,
        leave_type: LeaveType,
        dates: &str,
        status: LeaveStatus,
        start: NaiveDate,
        reason: &str,
    ) -> LeaveRequest {
        LeaveRequest {
            id,
            employee: employee.to_string(),
            leave_type,
            dates: dates.to_string(),
            status,
            start_date: Some(start),
            reason: Some(reason.to_string()),
        }
    }

    use LeaveStatus::*;
    use LeaveType::*;

    vec![
        request(1, "John Doe", Vacation, "Jan 20-22", Pending, day(20), "Family vacation to visit relatives"),
        request(2, "Jane Smith", Sick, "Jan 15-16", Approved, day(15), "Medical appointment and recovery"),
        request(3, "Mike Wilson", Personal, "Jan 18", Approved, day(18), "Personal matters requiring attention"),
        request(4, "Emily Brown", Annual, "Jan 25-29", Pending, day(25), "Annual holiday break"),
        request(5, "David Lee", Sick, "Jan 12", Approved, day(12), "Flu symptoms"),
        request(6, "Lisa Chen", Vacation, "Feb 5-9", Rejected, feb(5), "Overlaps with quarter close"),
        LeaveRequest {
            id: 7,
            employee: "Robert Garcia".to_string(),
            leave_type: Personal,
            dates: "TBD".to_string(),
            status: Pending,
            start_date: None,
            reason: None,
        },
    ]
}

/// Demo employee directory, in insertion order.
pub fn employees() -> Vec<Employee> {
    fn login(date: NaiveDate, h: u32, m: u32) -> NaiveDateTime {
        date.and_hms_opt(h, m, 0).unwrap_or_default()
    }

    fn employee(
        id: u32,
        name: &str,
        department: Department,
        status: EmployeeStatus,
        last_login: NaiveDateTime,
    ) -> Employee {
        let email = format!("{}@company.com", name.to_lowercase().replace(' ', "."));
        Employee {
            id,
            name: name.to_string(),
            department,
            status,
            email,
            last_login,
        }
    }

    use Department::*;
    use EmployeeStatus::*;

    vec![
        employee(1, "John Doe", Engineering, Active, login(day(15), 9, 30)),
        employee(2, "Jane Smith", Design, OnLeave, login(day(14), 17, 45)),
        employee(3, "Mike Wilson", Marketing, Active, login(day(15), 8, 15)),
        employee(4, "Emily Brown", Hr, Active, login(day(15), 9, 0)),
        employee(5, "David Lee", Sales, Active, login(day(15), 8, 45)),
        employee(6, "Lisa Chen", Finance, Active, login(day(15), 9, 15)),
        employee(7, "Robert Garcia", Operations, Active, login(day(15), 8, 30)),
        employee(8, "Sarah Johnson", Engineering, Active, login(day(15), 10, 5)),
        employee(9, "Tom Becker", Product, Inactive, login(day(2), 16, 20)),
    ]
}

/// Leave entitlements of the signed-in employee.
pub fn leave_balances() -> Vec<LeaveBalance> {
    vec![
        LeaveBalance::new("Annual Leave", 25, 8, 3)
            .expiring(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap_or_default()),
        LeaveBalance::new("Sick Leave", 12, 2, 0),
        LeaveBalance::new("Personal Leave", 5, 1, 0),
        LeaveBalance::new("Maternity Leave", 90, 0, 0),
    ]
}
