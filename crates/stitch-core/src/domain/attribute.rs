//! User-declared attributes and the set they are collected into.
//!
//! An attribute arrives on the command line as `name[:type]` and ends up as a
//! field on the generated model, a column in the generated migration and an
//! input row in the registration form.

use std::fmt;

use heck::{ToPascalCase, ToSnakeCase};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::domain::error::DomainError;

/// Names the generated code already declares. User attributes whose
/// normalized name matches one of these are dropped.
pub const RESERVED_NAMES: [&str; 5] = [
    "email",
    "password",
    "id",
    "recovery_code",
    "recovery_expiration",
];

/// Type tag used when an attribute is declared without one.
pub const DEFAULT_TYPE: &str = "string";

/// A named, typed field woven into the generated templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    name: String,
    type_tag: String,
    reserved: bool,
}

impl Attribute {
    /// Parse a single `name[:type]` specification.
    pub fn parse(spec: &str) -> Result<Self, DomainError> {
        let invalid = |reason: &str| DomainError::InvalidAttribute {
            spec: spec.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = spec.trim();
        if trimmed.is_empty() {
            return Err(invalid("attribute is empty"));
        }

        let mut parts = trimmed.split(':');
        let name = parts.next().unwrap_or_default().trim();
        let type_tag = parts.next().map(str::trim);

        if parts.next().is_some() {
            return Err(invalid("expected name:type with a single ':'"));
        }
        if name.is_empty() {
            return Err(invalid("name is missing"));
        }
        if !name.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return Err(invalid("name must start with a letter"));
        }
        if let Some(bad) = name
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-'))
        {
            return Err(invalid(&format!("name contains '{bad}'")));
        }

        let type_tag = match type_tag {
            None => DEFAULT_TYPE,
            Some("") => return Err(invalid("type is missing after ':'")),
            Some(t) => t,
        };

        let normalized = name.to_snake_case();
        Ok(Self {
            name: name.to_string(),
            type_tag: type_tag.to_string(),
            reserved: RESERVED_NAMES.contains(&normalized.as_str()),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_tag(&self) -> &str {
        &self.type_tag
    }

    pub fn is_reserved(&self) -> bool {
        self.reserved
    }

    /// snake_case form, used for comparison and column names.
    pub fn normalized(&self) -> String {
        self.name.to_snake_case()
    }

    /// PascalCase form, used for Go identifiers and form fields.
    pub fn display_name(&self) -> String {
        self.name.to_pascal_case()
    }

    /// True for `nulls.*` tags and tags ending with `?`.
    pub fn is_nullable(&self) -> bool {
        is_nullable_type(&self.type_tag)
    }

    /// Go field type for the generated model.
    pub fn go_type(&self) -> String {
        let (base, nullable) = split_nullable(&self.type_tag);
        let go = match base.to_ascii_lowercase().as_str() {
            "string" | "text" => "String",
            "int" | "integer" => "Int",
            "int64" => "Int64",
            "float" | "float64" | "decimal" => "Float64",
            "bool" | "boolean" => "Bool",
            "time" | "timestamp" | "datetime" | "date" => "Time",
            "uuid" => return "uuid.UUID".to_string(),
            _ => return base.to_string(),
        };

        if nullable {
            format!("nulls.{go}")
        } else {
            match go {
                "Time" => "time.Time".to_string(),
                other => other.to_ascii_lowercase(),
            }
        }
    }

    /// Column type for the generated migration.
    pub fn column_type(&self) -> String {
        let (base, _) = split_nullable(&self.type_tag);
        match base.to_ascii_lowercase().as_str() {
            "int" | "int64" | "integer" => "integer",
            "float" | "float64" | "decimal" => "decimal",
            "bool" | "boolean" => "bool",
            "time" | "timestamp" | "datetime" => "timestamp",
            "date" => "date",
            "uuid" => "uuid",
            "text" => "text",
            _ => "string",
        }
        .to_string()
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.type_tag)
    }
}

impl Serialize for Attribute {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Attribute", 7)?;
        s.serialize_field("name", &self.name)?;
        s.serialize_field("display_name", &self.display_name())?;
        s.serialize_field("normalized", &self.normalized())?;
        s.serialize_field("type_tag", &self.type_tag)?;
        s.serialize_field("go_type", &self.go_type())?;
        s.serialize_field("column_type", &self.column_type())?;
        s.serialize_field("nullable", &self.is_nullable())?;
        s.end()
    }
}

/// Whether a raw type tag denotes an optional value.
pub fn is_nullable_type(type_tag: &str) -> bool {
    split_nullable(type_tag).1
}

/// The fragment the `option` template helper emits for a type tag.
pub fn option_fragment(type_tag: &str) -> &'static str {
    if is_nullable_type(type_tag) {
        "\"null\": true"
    } else {
        ""
    }
}

fn split_nullable(type_tag: &str) -> (&str, bool) {
    let lower = type_tag.to_ascii_lowercase();
    if lower.starts_with("nulls.") {
        (&type_tag["nulls.".len()..], true)
    } else if let Some(base) = type_tag.strip_suffix('?') {
        (base, true)
    } else {
        (type_tag, false)
    }
}

/// Ordered attributes, unique by normalized name.
///
/// Reserved names are always considered present but never stored, so
/// iteration only yields what the user added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSet {
    attributes: Vec<Attribute>,
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from raw command line arguments.
    ///
    /// Keeps the first occurrence of each normalized name and silently drops
    /// reserved names.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, DomainError> {
        let mut set = Self::new();
        for arg in args {
            set.insert(Attribute::parse(arg.as_ref())?);
        }
        Ok(set)
    }

    /// Add an attribute. Returns `false` if it was dropped as a duplicate or
    /// reserved name.
    pub fn insert(&mut self, attribute: Attribute) -> bool {
        if attribute.is_reserved() || self.contains(attribute.name()) {
            return false;
        }
        self.attributes.push(attribute);
        true
    }

    /// True for reserved names and for any attribute already in the set.
    pub fn contains(&self, name: &str) -> bool {
        let normalized = name.to_snake_case();
        RESERVED_NAMES.contains(&normalized.as_str())
            || self.attributes.iter().any(|a| a.normalized() == normalized)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.attributes.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.attributes.iter().map(Attribute::name).collect()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl<'a> IntoIterator for &'a AttributeSet {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for AttributeSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.attributes.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_name_and_type() {
        let attr = Attribute::parse("age:int").unwrap();
        assert_eq!(attr.name(), "age");
        assert_eq!(attr.type_tag(), "int");
        assert!(!attr.is_reserved());
    }

    #[test]
    fn missing_type_defaults_to_string() {
        let attr = Attribute::parse("nickname").unwrap();
        assert_eq!(attr.type_tag(), "string");
    }

    #[test]
    fn malformed_specs_name_the_offending_string() {
        for spec in ["", ":int", "age:", "a:b:c", "9lives:int", "first name:string"] {
            match Attribute::parse(spec) {
                Err(DomainError::InvalidAttribute { spec: s, .. }) => assert_eq!(s, spec),
                other => panic!("expected parse error for {spec:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn duplicate_names_keep_first_occurrence() {
        let set = AttributeSet::from_args(&["age:int", "age:int", "nickname:string"]).unwrap();
        assert_eq!(set.names(), vec!["age", "nickname"]);
    }

    #[test]
    fn duplicates_compare_by_normalized_name() {
        let set = AttributeSet::from_args(&["FirstName:string", "first_name:text"]).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.iter().next().unwrap().type_tag(), "string");
    }

    #[test]
    fn reserved_names_are_dropped_without_error() {
        let set = AttributeSet::from_args(&[
            "email:string",
            "Email:string",
            "password",
            "id:uuid",
            "RecoveryCode:string",
            "recovery_expiration:time",
            "age:int",
        ])
        .unwrap();

        assert_eq!(set.names(), vec!["age"]);
        for name in RESERVED_NAMES {
            assert!(set.contains(name));
            assert_eq!(set.iter().filter(|a| a.normalized() == name).count(), 0);
        }
    }

    #[test]
    fn parse_error_aborts_whole_set() {
        assert!(AttributeSet::from_args(&["age:int", "bad:"]).is_err());
    }

    #[test]
    fn display_and_normalized_forms() {
        let attr = Attribute::parse("favorite_color").unwrap();
        assert_eq!(attr.display_name(), "FavoriteColor");
        assert_eq!(attr.normalized(), "favorite_color");
    }

    #[test]
    fn nullable_types() {
        assert!(is_nullable_type("nulls.string"));
        assert!(is_nullable_type("int?"));
        assert!(!is_nullable_type("string"));
        assert_eq!(option_fragment("nulls.String"), "\"null\": true");
        assert_eq!(option_fragment("int"), "");
    }

    #[test]
    fn go_and_column_types() {
        let cases = [
            ("age:int", "int", "integer"),
            ("bio:text", "string", "text"),
            ("nickname:nulls.string", "nulls.String", "string"),
            ("born:time", "time.Time", "timestamp"),
            ("score:float?", "nulls.Float64", "decimal"),
            ("token:uuid", "uuid.UUID", "uuid"),
        ];
        for (spec, go, column) in cases {
            let attr = Attribute::parse(spec).unwrap();
            assert_eq!(attr.go_type(), go, "{spec}");
            assert_eq!(attr.column_type(), column, "{spec}");
        }
    }
}
