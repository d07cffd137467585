//! Leave entitlements and what is left of them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use staffdesk_seeker::{FieldDef, FieldKind, Number, Schema, SeekerEnum, Seekable, Value};

use super::{token_enum, Badge, Record};

token_enum! {
    /// How much of an entitlement is left, by remaining share:
    /// over 75% excellent, over 50% good, over 25% limited, else critical.
    pub enum Standing {
        Excellent => "excellent",
        Good => "good",
        Limited => "limited",
        Critical => "critical",
    }
}

impl Standing {
    pub fn of(remaining: u32, total: u32) -> Standing {
        if total == 0 {
            return Standing::Critical;
        }
        let pct = f64::from(remaining) / f64::from(total) * 100.0;
        if pct > 75.0 {
            Standing::Excellent
        } else if pct > 50.0 {
            Standing::Good
        } else if pct > 25.0 {
            Standing::Limited
        } else {
            Standing::Critical
        }
    }

    pub fn badge(self) -> Badge {
        match self {
            Standing::Excellent => Badge::Success,
            Standing::Good => Badge::Info,
            Standing::Limited => Badge::Warning,
            Standing::Critical => Badge::Error,
        }
    }
}

/// Days allowed, taken and booked for one leave type.
///
/// Pending days are requested but not yet approved. They count against the
/// remaining balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveBalance {
    pub leave_type: String,
    pub total: u32,
    pub used: u32,
    pub pending: u32,
    pub remaining: u32,
    pub standing: Standing,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<NaiveDate>,
}

impl LeaveBalance {
    pub fn new(leave_type: &str, total: u32, used: u32, pending: u32) -> Self {
        let remaining = total.saturating_sub(used).saturating_sub(pending);
        LeaveBalance {
            leave_type: leave_type.to_string(),
            total,
            used,
            pending,
            remaining,
            standing: Standing::of(remaining, total),
            expires: None,
        }
    }

    pub fn expiring(mut self, on: NaiveDate) -> Self {
        self.expires = Some(on);
        self
    }

    /// Used and pending days as a share of the entitlement, capped at 100.
    pub fn usage_pct(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let pct = f64::from(self.used + self.pending) / f64::from(self.total) * 100.0;
        pct.min(100.0).round() as u32
    }

    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expires.is_some_and(|d| d < today)
    }
}

static BALANCE: Schema = Schema::new(&[
    FieldDef::new("leave_type", "Type", FieldKind::Text).searchable(),
    FieldDef::new("total", "Total", FieldKind::Number),
    FieldDef::new("used", "Used", FieldKind::Number),
    FieldDef::new("pending", "Pending", FieldKind::Number),
    FieldDef::new("remaining", "Remaining", FieldKind::Number),
    FieldDef::new("standing", "Standing", FieldKind::Enum(Standing::TOKENS)),
    FieldDef::new("expires", "Expires", FieldKind::Date),
]);

impl Seekable for LeaveBalance {
    fn schema() -> &'static Schema {
        &BALANCE
    }

    fn seeker_field_value(&self, field: &str) -> Value<'_> {
        match field {
            "leave_type" => Value::String(&self.leave_type),
            "total" => Value::Number(Number::from(self.total)),
            "used" => Value::Number(Number::from(self.used)),
            "pending" => Value::Number(Number::from(self.pending)),
            "remaining" => Value::Number(Number::from(self.remaining)),
            "standing" => self.standing.seeker_value(),
            "expires" => self.expires.map(Value::Date).unwrap_or(Value::None),
            _ => Value::None,
        }
    }
}

impl Record for LeaveBalance {
    const KIND: &'static str = "leave-balance";
    const DATE_FIELD: Option<&'static str> = Some("expires");

    fn badge(&self, field: &str) -> Option<Badge> {
        (field == "standing").then(|| self.standing.badge())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_deducts_pending() {
        let annual = LeaveBalance::new("Annual Leave", 25, 8, 3);
        assert_eq!(annual.remaining, 14);
        assert_eq!(annual.standing, Standing::Good);
        assert_eq!(annual.usage_pct(), 44);
    }

    #[test]
    fn overbooked_balance_bottoms_out() {
        let b = LeaveBalance::new("Personal Leave", 5, 4, 3);
        assert_eq!(b.remaining, 0);
        assert_eq!(b.standing, Standing::Critical);
        assert_eq!(b.usage_pct(), 100);
    }

    #[test]
    fn standing_thresholds_are_exclusive() {
        assert_eq!(Standing::of(76, 100), Standing::Excellent);
        assert_eq!(Standing::of(75, 100), Standing::Good);
        assert_eq!(Standing::of(50, 100), Standing::Limited);
        assert_eq!(Standing::of(25, 100), Standing::Critical);
        assert_eq!(Standing::of(0, 0), Standing::Critical);
    }

    #[test]
    fn expiry() {
        let end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        let b = LeaveBalance::new("Annual Leave", 25, 8, 3).expiring(end);
        assert!(!b.is_expired(end));
        assert!(b.is_expired(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()));
        assert!(!LeaveBalance::new("Sick Leave", 12, 2, 0).is_expired(end));
        assert_eq!(b.cell("expires"), "2024-12-31");
        assert_eq!(b.badge("standing"), Some(Badge::Info));
    }
}
