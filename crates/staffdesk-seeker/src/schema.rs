//! Declared record schemas.
//!
//! A [`Schema`] lists the fields of a record type in column order together
//! with their [`FieldKind`]. The kind is fixed when the data model is defined,
//! so the sort comparator for a column is known statically instead of being
//! guessed from whatever value a record happens to hold.

/// The declared type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text. Sorted with case-insensitive collation.
    Text,
    /// Numeric. Sorted numerically.
    Number,
    /// Calendar date. Sorted chronologically.
    Date,
    /// One of a fixed set of tokens. Filtered by exact token, sorted like text.
    Enum(&'static [&'static str]),
}

impl FieldKind {
    /// Returns the enumerated domain for `Enum` fields.
    pub fn choices(&self) -> Option<&'static [&'static str]> {
        match self {
            FieldKind::Enum(choices) => Some(choices),
            _ => None,
        }
    }

    /// Returns the display name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::Date => "date",
            FieldKind::Enum(_) => "enum",
        }
    }
}

/// A single field of a record schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    /// Field name, as passed to [`Seekable::seeker_field_value`](crate::Seekable::seeker_field_value).
    pub name: &'static str,
    /// Human-readable column label.
    pub label: &'static str,
    /// Declared type.
    pub kind: FieldKind,
    /// Whether free-text search looks at this field.
    pub searchable: bool,
}

impl FieldDef {
    /// Creates a non-searchable field.
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        FieldDef {
            name,
            label,
            kind,
            searchable: false,
        }
    }

    /// Marks the field as a free-text search target.
    pub const fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }
}

/// Ordered field list of a record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    fields: &'static [FieldDef],
}

impl Schema {
    /// Creates a schema from a static field list.
    pub const fn new(fields: &'static [FieldDef]) -> Self {
        Schema { fields }
    }

    /// All fields in column order.
    pub fn fields(&self) -> &'static [FieldDef] {
        self.fields
    }

    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&'static FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Fields that free-text search runs against.
    pub fn searchable(&self) -> impl Iterator<Item = &'static FieldDef> {
        self.fields.iter().filter(|f| f.searchable)
    }

    /// Enumerated fields, i.e. the ones offered as column filters.
    pub fn filterable(&self) -> impl Iterator<Item = &'static FieldDef> {
        self.fields.iter().filter(|f| f.kind.choices().is_some())
    }

    /// Column labels in order, e.g. for a table or CSV header.
    pub fn labels(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.label).collect()
    }
}
