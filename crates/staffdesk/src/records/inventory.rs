//! Company assets and who holds them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use staffdesk_seeker::{FieldDef, FieldKind, Number, Schema, SeekerEnum, Seekable, Value};

use super::{token_enum, Badge, Record};

token_enum! {
    /// Lifecycle state of an asset.
    pub enum AssetStatus {
        Active => "active",
        Returned => "returned",
        Maintenance => "maintenance",
        Lost => "lost",
        Damaged => "damaged",
    }
}

token_enum! {
    /// Physical condition of an asset.
    pub enum Condition {
        Excellent => "excellent",
        Good => "good",
        Fair => "fair",
        Poor => "poor",
    }
}

impl AssetStatus {
    pub fn badge(self) -> Badge {
        match self {
            AssetStatus::Active => Badge::Success,
            AssetStatus::Maintenance => Badge::Warning,
            AssetStatus::Returned => Badge::Neutral,
            AssetStatus::Lost | AssetStatus::Damaged => Badge::Error,
        }
    }
}

impl Condition {
    pub fn badge(self) -> Badge {
        match self {
            Condition::Excellent => Badge::Success,
            Condition::Good => Badge::Info,
            Condition::Fair => Badge::Warning,
            Condition::Poor => Badge::Error,
        }
    }
}

/// One tracked asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: u32,
    pub item: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    pub status: AssetStatus,
    pub condition: Condition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

static INVENTORY: Schema = Schema::new(&[
    FieldDef::new("id", "ID", FieldKind::Number),
    FieldDef::new("item", "Item", FieldKind::Text).searchable(),
    FieldDef::new("assigned_to", "Assigned To", FieldKind::Text).searchable(),
    FieldDef::new("status", "Status", FieldKind::Enum(AssetStatus::TOKENS)),
    FieldDef::new("condition", "Condition", FieldKind::Enum(Condition::TOKENS)),
    FieldDef::new("assigned_date", "Assigned Date", FieldKind::Date),
]);

impl Seekable for InventoryItem {
    fn schema() -> &'static Schema {
        &INVENTORY
    }

    fn seeker_field_value(&self, field: &str) -> Value<'_> {
        match field {
            "id" => Value::Number(Number::from(self.id)),
            "item" => Value::String(&self.item),
            "assigned_to" => self
                .assigned_to
                .as_deref()
                .map(Value::String)
                .unwrap_or(Value::None),
            "status" => self.status.seeker_value(),
            "condition" => self.condition.seeker_value(),
            "assigned_date" => self.assigned_date.map(Value::Date).unwrap_or(Value::None),
            _ => Value::None,
        }
    }
}

impl Record for InventoryItem {
    const KIND: &'static str = "inventory";
    const DATE_FIELD: Option<&'static str> = Some("assigned_date");

    fn badge(&self, field: &str) -> Option<Badge> {
        match field {
            "status" => Some(self.status.badge()),
            "condition" => Some(self.condition.badge()),
            _ => None,
        }
    }
}

impl InventoryItem {
    /// A minimal asset; optional details start unset.
    pub fn new(id: u32, item: &str, status: AssetStatus, condition: Condition) -> Self {
        InventoryItem {
            id,
            item: item.to_string(),
            assigned_to: None,
            status,
            condition,
            assigned_date: None,
            serial_number: None,
            cost: None,
            notes: None,
        }
    }

    pub fn assigned(mut self, to: &str, on: NaiveDate) -> Self {
        self.assigned_to = Some(to.to_string());
        self.assigned_date = Some(on);
        self
    }

    pub fn with_serial(mut self, serial: &str) -> Self {
        self.serial_number = Some(serial.to_string());
        self
    }

    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = Some(cost);
        self
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = Some(notes.to_string());
        self
    }
}
