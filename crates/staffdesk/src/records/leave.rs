//! Leave requests.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use staffdesk_seeker::{FieldDef, FieldKind, Number, Schema, SeekerEnum, Seekable, Value};

use super::{token_enum, Badge, Record};

token_enum! {
    /// Approval state of a request.
    pub enum LeaveStatus {
        Pending => "pending",
        Approved => "approved",
        Rejected => "rejected",
    }
}

token_enum! {
    /// Kind of leave requested.
    pub enum LeaveType {
        Vacation => "Vacation",
        Sick => "Sick",
        Personal => "Personal",
        Annual => "Annual Leave",
    }
}

impl LeaveStatus {
    pub fn badge(self) -> Badge {
        match self {
            LeaveStatus::Pending => Badge::Warning,
            LeaveStatus::Approved => Badge::Success,
            LeaveStatus::Rejected => Badge::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: u32,
    pub employee: String,
    pub leave_type: LeaveType,
    /// Human-readable date span, e.g. "Jan 20-22".
    pub dates: String,
    pub status: LeaveStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

static LEAVE: Schema = Schema::new(&[
    FieldDef::new("id", "ID", FieldKind::Number),
    FieldDef::new("employee", "Employee", FieldKind::Text).searchable(),
    FieldDef::new("leave_type", "Type", FieldKind::Enum(LeaveType::TOKENS)),
    FieldDef::new("dates", "Dates", FieldKind::Text),
    FieldDef::new("status", "Status", FieldKind::Enum(LeaveStatus::TOKENS)),
    FieldDef::new("start_date", "Start Date", FieldKind::Date),
    FieldDef::new("reason", "Reason", FieldKind::Text).searchable(),
]);

impl Seekable for LeaveRequest {
    fn schema() -> &'static Schema {
        &LEAVE
    }

    fn seeker_field_value(&self, field: &str) -> Value<'_> {
        match field {
            "id" => Value::Number(Number::from(self.id)),
            "employee" => Value::String(&self.employee),
            "leave_type" => self.leave_type.seeker_value(),
            "dates" => Value::String(&self.dates),
            "status" => self.status.seeker_value(),
            "start_date" => self.start_date.map(Value::Date).unwrap_or(Value::None),
            "reason" => self.reason.as_deref().map(Value::String).unwrap_or(Value::None),
            _ => Value::None,
        }
    }
}

impl Record for LeaveRequest {
    const KIND: &'static str = "leave";
    const DATE_FIELD: Option<&'static str> = Some("start_date");

    fn badge(&self, field: &str) -> Option<Badge> {
        (field == "status").then(|| self.status.badge())
    }
}
