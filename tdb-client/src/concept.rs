//! Result records returned by queries
//!
//! A [`ConceptMap`] binds each query variable to one [`Concept`]. Only the
//! fields needed to identify and display a concept are modelled.

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// One result record: variable name to concept
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct ConceptMap {
    map: BTreeMap<String, Concept>,
}

impl ConceptMap {
    pub fn new(map: BTreeMap<String, Concept>) -> Self {
        Self { map }
    }

    /// Concept bound to `variable` (without the `$` sigil)
    pub fn get(&self, variable: &str) -> Option<&Concept> {
        self.map.get(variable)
    }

    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Concept)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Concept {
    Thing(Thing),
    Type(Type),
}

impl Concept {
    /// The type of a thing, or the type itself
    pub fn type_of(&self) -> Option<&Type> {
        match self {
            Concept::Thing(thing) => thing.thing_type.as_ref(),
            Concept::Type(t) => Some(t),
        }
    }
}

impl fmt::Display for Concept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Concept::Type(t) => write!(f, "{}", t.label),
            Concept::Thing(thing) => {
                let label = thing.thing_type.as_ref().map(|t| t.label.as_str()).unwrap_or("thing");
                match &thing.value {
                    Some(value) => write!(f, "{}:{}", label, value),
                    None => write!(f, "{}:0x{}", label, hex::encode(&thing.iid)),
                }
            }
        }
    }
}

/// A data instance: entity, relation or attribute
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Thing {
    #[serde(serialize_with = "serialize_iid")]
    pub iid: Vec<u8>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub thing_type: Option<Type>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    pub inferred: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Type {
    pub label: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub scope: String,
    pub encoding: Encoding,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_type: Option<ValueType>,
    pub root: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    ThingType,
    EntityType,
    RelationType,
    AttributeType,
    RoleType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    Boolean,
    Long,
    Double,
    String,
    DateTime,
}

/// Attribute value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Boolean(bool),
    Long(i64),
    Double(f64),
    /// Milliseconds since the Unix epoch
    DateTime(i64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{:?}", s),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Long(n) => write!(f, "{}", n),
            Value::Double(n) => write!(f, "{}", n),
            Value::DateTime(ms) => write!(f, "{}ms", ms),
        }
    }
}

fn serialize_iid<S: Serializer>(iid: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("0x{}", hex::encode(iid)))
}
