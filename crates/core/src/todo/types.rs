use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::storage::{Record, StoreValue, FIELD_DATE, FIELD_ID, FIELD_NAME};

use super::error::{RecordError, ValidationError};
use super::generate::{new_id, now_timestamp};
use super::validation::{validate_date, validate_name, validate_uuid};

/// Composite key identifying one ToDo: its identifier and creation timestamp.
///
/// Both fields are fixed at construction; there are no setters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ToDoPrimaryKey {
    id: String,
    date: String,
}

impl ToDoPrimaryKey {
    /// Validates both key fields from untrusted input.
    pub fn parse(id: Option<&Value>, date: Option<&Value>) -> Result<Self, ValidationError> {
        Ok(Self {
            id: validate_uuid(id)?,
            date: validate_date(date)?,
        })
    }

    /// Generates a fresh key: a random identifier stamped with the current instant.
    pub fn generate() -> Self {
        Self {
            id: new_id(),
            date: now_timestamp(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    /// Returns true when both `id` and `date` match exactly.
    pub fn is_equals(&self, other: &Self) -> bool {
        self == other
    }
}

/// The mutable payload of a ToDo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToDoAttributes {
    name: String,
}

impl ToDoAttributes {
    /// Validates the name from untrusted input.
    pub fn parse(name: Option<&Value>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: validate_name(name)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_equals(&self, other: &Self) -> bool {
        self == other
    }
}

/// A ToDo item: an immutable primary key plus replaceable attributes.
///
/// Serializes to the flat JSON object `{"id", "date", "name"}`. Deserializing
/// runs the same validation as [`ToDo::from_key_and_name`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedToDo")]
pub struct ToDo {
    #[serde(flatten)]
    primary_key: ToDoPrimaryKey,
    #[serde(flatten)]
    attributes: ToDoAttributes,
}

impl ToDo {
    /// Creates a brand new ToDo, generating its key and validating only the name.
    pub fn from_name(name: Option<&Value>) -> Result<Self, ValidationError> {
        let attributes = ToDoAttributes::parse(name)?;
        Ok(Self::from_parts(ToDoPrimaryKey::generate(), attributes))
    }

    /// Builds a ToDo from caller-supplied key fields and name, validating all three.
    pub fn from_key_and_name(
        id: Option<&Value>,
        date: Option<&Value>,
        name: Option<&Value>,
    ) -> Result<Self, ValidationError> {
        let primary_key = ToDoPrimaryKey::parse(id, date)?;
        let attributes = ToDoAttributes::parse(name)?;
        Ok(Self::from_parts(primary_key, attributes))
    }

    /// Recombines parts that were validated on their own.
    pub fn from_parts(primary_key: ToDoPrimaryKey, attributes: ToDoAttributes) -> Self {
        Self {
            primary_key,
            attributes,
        }
    }

    pub fn primary_key(&self) -> &ToDoPrimaryKey {
        &self.primary_key
    }

    pub fn attributes(&self) -> &ToDoAttributes {
        &self.attributes
    }

    pub fn id(&self) -> &str {
        self.primary_key.id()
    }

    pub fn date(&self) -> &str {
        self.primary_key.date()
    }

    pub fn name(&self) -> &str {
        self.attributes.name()
    }

    /// Returns true when both the primary key and the attributes are equal.
    pub fn is_equals(&self, other: &Self) -> bool {
        self.primary_key.is_equals(&other.primary_key)
            && self.attributes.is_equals(&other.attributes)
    }

    /// Flattens the key and attributes into a storage record.
    pub fn serialize(&self) -> Record {
        Record::from([
            (
                FIELD_ID.to_string(),
                StoreValue::S(self.primary_key.id.clone()),
            ),
            (
                FIELD_DATE.to_string(),
                StoreValue::S(self.primary_key.date.clone()),
            ),
            (
                FIELD_NAME.to_string(),
                StoreValue::S(self.attributes.name.clone()),
            ),
        ])
    }

    /// Rebuilds a ToDo from a storage record.
    ///
    /// Fails with [`RecordError::TypeMismatch`] when any field is missing or
    /// not a string, and with [`RecordError::Invalid`] when a stored value does
    /// not pass validation.
    pub fn deserialize(record: &Record) -> Result<Self, RecordError> {
        let id = string_field(record, FIELD_ID)?;
        let date = string_field(record, FIELD_DATE)?;
        let name = string_field(record, FIELD_NAME)?;

        Ok(Self::from_key_and_name(
            Some(&Value::from(id)),
            Some(&Value::from(date)),
            Some(&Value::from(name)),
        )?)
    }
}

fn string_field<'a>(record: &'a Record, field: &str) -> Result<&'a str, RecordError> {
    record
        .get(field)
        .and_then(StoreValue::as_s)
        .ok_or(RecordError::TypeMismatch)
}

/// Wire form of a ToDo before validation.
#[derive(Deserialize)]
struct UncheckedToDo {
    id: Option<Value>,
    date: Option<Value>,
    name: Option<Value>,
}

impl TryFrom<UncheckedToDo> for ToDo {
    type Error = ValidationError;

    fn try_from(raw: UncheckedToDo) -> Result<Self, Self::Error> {
        ToDo::from_key_and_name(raw.id.as_ref(), raw.date.as_ref(), raw.name.as_ref())
    }
}
