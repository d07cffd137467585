//! Record types shown in staffdesk tables.
//!
//! Each table row type implements [`Seekable`] for the view pipeline and
//! [`Record`] for everything the command layer needs on top: cell text,
//! badge colouring and a date column for range filters.

use serde::Serialize;
use staffdesk_seeker::Seekable;

/// Defines a token enum: a plain Rust enum whose variants map one-to-one to
/// the stable tokens filters compare against.
macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $token)] $variant ),+
        }

        impl staffdesk_seeker::SeekerEnum for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];
            const TOKENS: &'static [&'static str] = &[$($token),+];

            fn seeker_token(&self) -> &'static str {
                match self {
                    $($name::$variant => $token),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(staffdesk_seeker::SeekerEnum::seeker_token(self))
            }
        }
    };
}

pub(crate) use token_enum;

mod balance;
mod employee;
mod inventory;
mod leave;

pub use balance::{LeaveBalance, Standing};
pub use employee::{Department, Employee, EmployeeStatus};
pub use inventory::{AssetStatus, Condition, InventoryItem};
pub use leave::{LeaveRequest, LeaveStatus, LeaveType};

/// Colour class of a badge cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Badge {
    Success,
    Warning,
    Error,
    Info,
    Neutral,
}

/// What the command layer needs from a table record.
pub trait Record: Seekable + Serialize + Sized + 'static {
    /// Lowercase name used in file names and messages, e.g. `"inventory"`.
    const KIND: &'static str;

    /// Date column that `--since`/`--until` bound, if the record has one.
    const DATE_FIELD: Option<&'static str>;

    /// Badge class for a cell, or `None` for plain text cells.
    fn badge(&self, _field: &str) -> Option<Badge> {
        None
    }

    /// Display text of one cell. Missing values render empty.
    fn cell(&self, field: &str) -> String {
        self.seeker_field_value(field).to_string()
    }

    /// All cells in column order.
    fn cells(&self) -> Vec<String> {
        Self::schema()
            .fields()
            .iter()
            .map(|f| self.cell(f.name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use staffdesk_seeker::SeekerEnum;

    token_enum! {
        /// Test enum.
        pub enum Shade {
            Light => "light",
            Dark => "dark mode",
        }
    }

    #[test]
    fn token_enum_round_trip() {
        assert_eq!(Shade::TOKENS, &["light", "dark mode"]);
        assert_eq!(Shade::from_token("dark mode"), Some(Shade::Dark));
        assert_eq!(Shade::Light.to_string(), "light");
        assert_eq!(serde_json::to_string(&Shade::Dark).unwrap(), "\"dark mode\"");
    }
}
