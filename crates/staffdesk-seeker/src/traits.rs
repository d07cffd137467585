//! Record traits.
//!
//! [`Seekable`] is what the view pipeline needs from a record type: a static
//! schema and field access by name. [`SeekerEnum`] maps enumerated field types
//! to the stable tokens that filters compare against.

use crate::schema::Schema;
use crate::value::Value;

/// Trait for record types that can be filtered, sorted and paginated.
///
/// # Example
///
/// ```
/// use staffdesk_seeker::{FieldDef, FieldKind, Schema, Seekable, Value};
///
/// struct Employee {
///     name: String,
///     department: String,
/// }
///
/// static EMPLOYEE: Schema = Schema::new(&[
///     FieldDef::new("name", "Name", FieldKind::Text).searchable(),
///     FieldDef::new("department", "Department", FieldKind::Text),
/// ]);
///
/// impl Seekable for Employee {
///     fn schema() -> &'static Schema {
///         &EMPLOYEE
///     }
///
///     fn seeker_field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "name" => Value::String(&self.name),
///             "department" => Value::String(&self.department),
///             _ => Value::None,
///         }
///     }
/// }
/// ```
pub trait Seekable {
    /// The declared schema of this record type.
    fn schema() -> &'static Schema
    where
        Self: Sized;

    /// Returns the value of a field, or [`Value::None`] if the field is
    /// unknown or an optional field is unset.
    fn seeker_field_value(&self, field: &str) -> Value<'_>;

    /// Function-pointer form of [`Seekable::seeker_field_value`], for use with
    /// [`Query::filter`](crate::Query::filter).
    fn accessor<'a>(item: &'a Self, field: &str) -> Value<'a>
    where
        Self: Sized,
    {
        item.seeker_field_value(field)
    }
}

/// Enumerated field types.
///
/// # Example
///
/// ```
/// use staffdesk_seeker::{SeekerEnum, Value};
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Condition {
///     Good,
///     Poor,
/// }
///
/// impl SeekerEnum for Condition {
///     const ALL: &'static [Self] = &[Condition::Good, Condition::Poor];
///     const TOKENS: &'static [&'static str] = &["good", "poor"];
///
///     fn seeker_token(&self) -> &'static str {
///         match self {
///             Condition::Good => "good",
///             Condition::Poor => "poor",
///         }
///     }
/// }
///
/// assert_eq!(Condition::Poor.seeker_value(), Value::Enum("poor"));
/// assert_eq!(Condition::from_token("good"), Some(Condition::Good));
/// ```
pub trait SeekerEnum: Copy + 'static {
    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// Every token, in the same order as [`SeekerEnum::ALL`]. Used as the
    /// field's filter domain.
    const TOKENS: &'static [&'static str];

    /// The stable token for this variant.
    fn seeker_token(&self) -> &'static str;

    /// Wraps the token in a [`Value`].
    fn seeker_value(&self) -> Value<'static> {
        Value::Enum(self.seeker_token())
    }

    /// Parses a token back into a variant. Matching is exact.
    fn from_token(token: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|variant| variant.seeker_token() == token)
    }
}
