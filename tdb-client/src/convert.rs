/// Conversions from protocol messages to result records
///
/// Conversion functions rather than `TryFrom` impls, since the protocol types
/// live in another crate and most conversions need a context-specific error.

use crate::concept::{Concept, ConceptMap, Encoding, Thing, Type, Value, ValueType};
use crate::error::{ClientError, Result};
use tdb_proto::{self as proto, attribute::value::Value as ProtoValue};

// ============================================================================
// Records
// ============================================================================

/// Convert a protocol concept map to a result record
pub fn proto_concept_map(map: proto::ConceptMap) -> Result<ConceptMap> {
    let mut record = std::collections::BTreeMap::new();
    for (variable, concept) in map.map {
        record.insert(variable, proto_concept(concept)?);
    }
    Ok(ConceptMap::new(record))
}

pub fn proto_concept(concept: proto::Concept) -> Result<Concept> {
    let concept = concept
        .concept
        .ok_or_else(|| malformed("concept carries neither a thing nor a type"))?;

    match concept {
        proto::concept::Concept::Thing(thing) => Ok(Concept::Thing(proto_thing(thing)?)),
        proto::concept::Concept::Type(t) => Ok(Concept::Type(proto_type(t))),
    }
}

// ============================================================================
// Things and types
// ============================================================================

fn proto_thing(thing: proto::Thing) -> Result<Thing> {
    let value = match thing.value {
        Some(value) => Some(proto_value(value)?),
        None => None,
    };

    Ok(Thing {
        iid: thing.iid,
        thing_type: thing.r#type.map(proto_type),
        value,
        inferred: thing.inferred,
    })
}

fn proto_type(t: proto::Type) -> Type {
    let encoding = match t.encoding() {
        proto::r#type::Encoding::ThingType => Encoding::ThingType,
        proto::r#type::Encoding::EntityType => Encoding::EntityType,
        proto::r#type::Encoding::RelationType => Encoding::RelationType,
        proto::r#type::Encoding::AttributeType => Encoding::AttributeType,
        proto::r#type::Encoding::RoleType => Encoding::RoleType,
    };

    // OBJECT is the wire default and means "no value type"
    let value_type = match t.value_type() {
        proto::attribute_type::ValueType::Object => None,
        proto::attribute_type::ValueType::Boolean => Some(ValueType::Boolean),
        proto::attribute_type::ValueType::Long => Some(ValueType::Long),
        proto::attribute_type::ValueType::Double => Some(ValueType::Double),
        proto::attribute_type::ValueType::String => Some(ValueType::String),
        proto::attribute_type::ValueType::Datetime => Some(ValueType::DateTime),
    };

    Type {
        label: t.label,
        scope: t.scope,
        encoding,
        value_type,
        root: t.root,
    }
}

// ============================================================================
// Values
// ============================================================================

fn proto_value(value: proto::attribute::Value) -> Result<Value> {
    let value = value
        .value
        .ok_or_else(|| malformed("attribute value field is missing"))?;

    Ok(match value {
        ProtoValue::String(s) => Value::String(s),
        ProtoValue::Boolean(b) => Value::Boolean(b),
        ProtoValue::Long(n) => Value::Long(n),
        ProtoValue::Double(n) => Value::Double(n),
        ProtoValue::DateTime(ms) => Value::DateTime(ms),
    })
}

fn malformed(message: &str) -> ClientError {
    ClientError::ProtocolError(format!("malformed answer: {}", message))
}
