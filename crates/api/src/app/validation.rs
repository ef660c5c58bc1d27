//! Request binding and validation.
//!
//! Binding turns raw transport input (JSON bodies, query strings, path
//! segments) into domain values. Every failure is reported as a [`BindError`]
//! built directly by the binding step; turning it into client-facing text is a
//! pure lookup on `(field, constraint)`.

use serde_json::{Map, Value};
use thiserror::Error;

use stockroom_inventory::{ItemName, NameError, NewItem, PageRequest};

/// Input fields that can fail validation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Quantity,
    UnitPrice,
    Page,
    Size,
    Id,
}

impl Field {
    /// Name used as the key in validation error responses.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Quantity => "Quantity",
            Field::UnitPrice => "UnitPrice",
            Field::Page => "Page",
            Field::Size => "Size",
            Field::Id => "ID",
        }
    }

    /// Key of the field on the wire (JSON body or query string).
    pub fn wire_name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Quantity => "quantity",
            Field::UnitPrice => "unitPrice",
            Field::Page => "page",
            Field::Size => "size",
            Field::Id => "id",
        }
    }
}

/// Rule a field value has to satisfy.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Constraint {
    Required,
    Alpha,
    Min,
}

impl Constraint {
    pub fn as_str(self) -> &'static str {
        match self {
            Constraint::Required => "required",
            Constraint::Alpha => "alpha",
            Constraint::Min => "min",
        }
    }
}

/// One failed `(field, constraint)` check, with the offending value if there was one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: Field,
    pub constraint: Constraint,
    pub value: Option<String>,
}

impl FieldViolation {
    pub fn new(field: Field, constraint: Constraint, value: Option<String>) -> Self {
        Self {
            field,
            constraint,
            value,
        }
    }

    pub fn message(&self) -> String {
        match message_for(self.field, self.constraint) {
            Some(msg) => msg.to_string(),
            None => format!(
                "custom message is not available: {}",
                self.constraint.as_str()
            ),
        }
    }
}

/// Client-facing text for a `(field, constraint)` pair, if one is defined.
pub fn message_for(field: Field, constraint: Constraint) -> Option<&'static str> {
    use Constraint::*;
    use Field::*;

    match (field, constraint) {
        (Name, Required) => Some("is required"),
        (Name, Alpha) => Some("should only contain alphabets"),
        (Quantity, Required) => Some("is required"),
        (UnitPrice, Required) => Some("is required"),
        (Page, Min) => Some("should not be less than 1"),
        (Size, Min) => Some("should not be less than 1"),
        (Id, Required) => Some("is required"),
        _ => None,
    }
}

/// Why a request could not be bound.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    /// One or more constraint checks failed, in evaluation order.
    #[error("validation failed for {} field(s)", .0.len())]
    Invalid(Vec<FieldViolation>),

    /// A JSON value had the wrong type for its field.
    #[error("{} can not be a {value}", .field.wire_name())]
    TypeMismatch { field: Field, value: String },

    /// Input that could not be interpreted at all.
    #[error("unsupported custom error for: {0}")]
    Unsupported(String),
}

impl BindError {
    pub fn invalid(field: Field, constraint: Constraint, value: Option<String>) -> Self {
        Self::Invalid(vec![FieldViolation::new(field, constraint, value)])
    }

    /// Ordered list of single-key `{field: message}` objects.
    pub fn to_messages(&self) -> Vec<Value> {
        match self {
            BindError::Invalid(violations) => violations
                .iter()
                .map(|v| single_entry(v.field.label(), v.message()))
                .collect(),
            BindError::TypeMismatch { field, .. } => {
                vec![single_entry(field.wire_name(), self.to_string())]
            }
            BindError::Unsupported(_) => vec![single_entry("unknown", self.to_string())],
        }
    }
}

fn single_entry(key: &str, message: String) -> Value {
    let mut map = Map::new();
    map.insert(key.to_string(), Value::String(message));
    Value::Object(map)
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// Exact key first, then a case-insensitive match.
fn lookup<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    obj.get(key)
        .or_else(|| {
            obj.iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(key))
                .map(|(_, v)| v)
        })
        .filter(|v| !v.is_null())
}

/// Bind a JSON item payload (`{name, quantity, unitPrice}`).
///
/// Type errors are reported first and stop binding; otherwise all constraint
/// violations are collected in field order.
pub fn bind_item(body: &[u8]) -> Result<NewItem, BindError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| BindError::Unsupported(e.to_string()))?;
    let obj = match value {
        Value::Object(obj) => obj,
        other => {
            return Err(BindError::Unsupported(format!(
                "expected a JSON object, found {}",
                describe(&other)
            )));
        }
    };

    let name = match lookup(&obj, Field::Name.wire_name()) {
        None => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            return Err(BindError::TypeMismatch {
                field: Field::Name,
                value: describe(other).to_string(),
            });
        }
    };

    let quantity = match lookup(&obj, Field::Quantity.wire_name()) {
        None => None,
        Some(Value::Number(n)) => match n.as_i64() {
            Some(q) => Some(q),
            None => {
                return Err(BindError::TypeMismatch {
                    field: Field::Quantity,
                    value: format!("number {n}"),
                });
            }
        },
        Some(other) => {
            return Err(BindError::TypeMismatch {
                field: Field::Quantity,
                value: describe(other).to_string(),
            });
        }
    };

    let unit_price = match lookup(&obj, Field::UnitPrice.wire_name()) {
        None => None,
        Some(Value::Number(n)) => n.as_f64(),
        Some(other) => {
            return Err(BindError::TypeMismatch {
                field: Field::UnitPrice,
                value: describe(other).to_string(),
            });
        }
    };

    let mut violations = Vec::new();

    let name = match name.map(ItemName::parse) {
        None => {
            violations.push(FieldViolation::new(Field::Name, Constraint::Required, None));
            None
        }
        Some(Err(NameError::Empty)) => {
            violations.push(FieldViolation::new(
                Field::Name,
                Constraint::Required,
                Some(String::new()),
            ));
            None
        }
        Some(Err(NameError::NotAlphabetic)) => {
            let raw = lookup(&obj, Field::Name.wire_name())
                .and_then(Value::as_str)
                .map(str::to_string);
            violations.push(FieldViolation::new(Field::Name, Constraint::Alpha, raw));
            None
        }
        Some(Ok(name)) => Some(name),
    };

    if quantity.is_none() {
        violations.push(FieldViolation::new(
            Field::Quantity,
            Constraint::Required,
            None,
        ));
    }
    if unit_price.is_none() {
        violations.push(FieldViolation::new(
            Field::UnitPrice,
            Constraint::Required,
            None,
        ));
    }

    match (name, quantity, unit_price) {
        (Some(name), Some(quantity), Some(unit_price)) if violations.is_empty() => {
            Ok(NewItem::new(name, quantity, unit_price))
        }
        _ => Err(BindError::Invalid(violations)),
    }
}

fn parse_query_int(field: Field, raw: Option<&str>) -> Result<i64, BindError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(0),
        Some(s) => s.parse::<i64>().map_err(|e| {
            BindError::Unsupported(format!(
                "invalid {} query value {s:?}: {e}",
                field.wire_name()
            ))
        }),
    }
}

/// Bind the optional `page` / `size` query parameters.
///
/// Absent or empty values mean "not supplied" (0). Negative values fail the
/// `min` constraint.
pub fn bind_pagination(page: Option<&str>, size: Option<&str>) -> Result<PageRequest, BindError> {
    let page = parse_query_int(Field::Page, page)?;
    let size = parse_query_int(Field::Size, size)?;

    let violations: Vec<FieldViolation> = [(Field::Page, page), (Field::Size, size)]
        .into_iter()
        .filter(|(_, v)| *v < 0)
        .map(|(f, v)| FieldViolation::new(f, Constraint::Min, Some(v.to_string())))
        .collect();
    if !violations.is_empty() {
        return Err(BindError::Invalid(violations));
    }

    // Both values are non-negative here.
    Ok(PageRequest::new(page.unsigned_abs(), size.unsigned_abs()))
}

/// Bind the `:id` path segment as a signed integer.
///
/// Unparsable segments and `0` fail `required`. Any other integer binds;
/// negative values can never match an item and surface as not found on lookup.
pub fn bind_id(raw: &str) -> Result<i64, BindError> {
    match raw.trim().parse::<i64>() {
        Ok(id) if id != 0 => Ok(id),
        _ => Err(BindError::invalid(
            Field::Id,
            Constraint::Required,
            Some(raw.to_string()),
        )),
    }
}
