//! Employee directory.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use staffdesk_seeker::{FieldDef, FieldKind, Number, Schema, SeekerEnum, Seekable, Value};

use super::{token_enum, Badge, Record};

token_enum! {
    /// Whether an employee is working, away or gone.
    pub enum EmployeeStatus {
        Active => "active",
        OnLeave => "on-leave",
        Inactive => "inactive",
    }
}

token_enum! {
    pub enum Department {
        Engineering => "Engineering",
        Design => "Design",
        Marketing => "Marketing",
        Sales => "Sales",
        Hr => "HR",
        Finance => "Finance",
        Operations => "Operations",
        Product => "Product",
        CustomerSupport => "Customer Support",
        Legal => "Legal",
    }
}

impl EmployeeStatus {
    pub fn badge(self) -> Badge {
        match self {
            EmployeeStatus::Active => Badge::Success,
            EmployeeStatus::OnLeave => Badge::Warning,
            EmployeeStatus::Inactive => Badge::Neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: u32,
    pub name: String,
    pub department: Department,
    pub status: EmployeeStatus,
    pub email: String,
    pub last_login: NaiveDateTime,
}

static EMPLOYEE: Schema = Schema::new(&[
    FieldDef::new("id", "ID", FieldKind::Number),
    FieldDef::new("name", "Name", FieldKind::Text).searchable(),
    FieldDef::new("department", "Department", FieldKind::Enum(Department::TOKENS)),
    FieldDef::new("status", "Status", FieldKind::Enum(EmployeeStatus::TOKENS)),
    FieldDef::new("email", "Email", FieldKind::Text).searchable(),
    FieldDef::new("last_login", "Last Login", FieldKind::Date),
]);

impl Seekable for Employee {
    fn schema() -> &'static Schema {
        &EMPLOYEE
    }

    /// `last_login` compares by day; the time of day only shows in the cell.
    fn seeker_field_value(&self, field: &str) -> Value<'_> {
        match field {
            "id" => Value::Number(Number::from(self.id)),
            "name" => Value::String(&self.name),
            "department" => self.department.seeker_value(),
            "status" => self.status.seeker_value(),
            "email" => Value::String(&self.email),
            "last_login" => Value::Date(self.last_login.date()),
            _ => Value::None,
        }
    }
}

impl Record for Employee {
    const KIND: &'static str = "employees";
    const DATE_FIELD: Option<&'static str> = Some("last_login");

    fn badge(&self, field: &str) -> Option<Badge> {
        (field == "status").then(|| self.status.badge())
    }

    fn cell(&self, field: &str) -> String {
        match field {
            "last_login" => self.last_login.format("%Y-%m-%d %H:%M").to_string(),
            _ => self.seeker_field_value(field).to_string(),
        }
    }
}
