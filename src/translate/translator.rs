use serde_json::{Map, Value as Json};

use super::TranslateError;
use crate::condition::Registry;
use crate::fulfillable::{ConditionLeaf, Fulfillable, FulfillableCollection, Relation};
use crate::types::{CompareOp, Value};

fn json_type(value: &Json) -> &'static str {
    match value {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}

pub(crate) fn translate_value(
    spec: &Json,
    registry: &Registry,
) -> Result<Fulfillable, TranslateError> {
    let Some(map) = spec.as_object() else {
        return Err(TranslateError::NotAnObject {
            found: json_type(spec),
        });
    };
    if map.contains_key("relation") {
        explicit_node(map, registry)
    } else {
        flat_map(map, registry)
    }
}

/// Flat-map shorthand: one equality leaf per entry under an implicit AND.
fn flat_map(map: &Map<String, Json>, registry: &Registry) -> Result<Fulfillable, TranslateError> {
    let mut collection = FulfillableCollection::new(Relation::And);
    for (kind_name, value) in map {
        collection.push(leaf(kind_name, CompareOp::DEFAULT, value, registry)?);
    }
    Ok(collection.into())
}

fn explicit_node(
    map: &Map<String, Json>,
    registry: &Registry,
) -> Result<Fulfillable, TranslateError> {
    let relation_json = &map["relation"];
    let Some(relation_text) = relation_json.as_str() else {
        return Err(TranslateError::UnknownRelation {
            found: json_type(relation_json).to_owned(),
        });
    };
    let relation: Relation = relation_text
        .parse()
        .map_err(|err: crate::fulfillable::UnknownRelation| TranslateError::UnknownRelation {
            found: err.0,
        })?;

    let negated = match map.get("not") {
        None => false,
        Some(flag) => flag.as_bool().ok_or(TranslateError::NegationNotBool)?,
    };

    let children = map
        .get("children")
        .ok_or(TranslateError::MissingChildren)?
        .as_array()
        .ok_or(TranslateError::ChildrenNotArray)?;

    let mut collection = FulfillableCollection::new(relation);
    if negated {
        collection = collection.negated();
    }
    for child in children {
        collection.push(child_node(child, registry)?);
    }
    Ok(collection.into())
}

/// Children are always a Leaf (`type` key) or a nested ExplicitNode
/// (`relation` key). The flat-map shorthand is only legal at the top
/// level, so anything else here is malformed rather than guessed at.
fn child_node(child: &Json, registry: &Registry) -> Result<Fulfillable, TranslateError> {
    let Some(map) = child.as_object() else {
        return Err(TranslateError::NotAnObject {
            found: json_type(child),
        });
    };
    if map.contains_key("relation") {
        return explicit_node(map, registry);
    }
    let Some(type_json) = map.get("type") else {
        return Err(TranslateError::MalformedChild);
    };
    let Some(kind_name) = type_json.as_str() else {
        return Err(TranslateError::MalformedChild);
    };

    let op = match map.get("compare") {
        None => CompareOp::DEFAULT,
        Some(compare_json) => {
            let Some(token) = compare_json.as_str() else {
                return Err(TranslateError::UnknownOperator {
                    kind: kind_name.to_owned(),
                    found: json_type(compare_json).to_owned(),
                });
            };
            token
                .parse()
                .map_err(
                    |err: crate::types::UnknownOperator| TranslateError::UnknownOperator {
                        kind: kind_name.to_owned(),
                        found: err.0,
                    },
                )?
        }
    };

    let value = map.get("value").ok_or_else(|| TranslateError::MissingValue {
        kind: kind_name.to_owned(),
    })?;
    leaf(kind_name, op, value, registry)
}

fn leaf(
    kind_name: &str,
    op: CompareOp,
    value: &Json,
    registry: &Registry,
) -> Result<Fulfillable, TranslateError> {
    // Registry lookup first: an unknown kind is the clearest error.
    let kind = registry.create(kind_name)?;

    let expected = Value::from_json(value).ok_or_else(|| TranslateError::InvalidValue {
        kind: kind_name.to_owned(),
    })?;

    match op {
        CompareOp::In | CompareOp::NotIn if !expected.is_list() => {
            return Err(TranslateError::ExpectedList {
                kind: kind_name.to_owned(),
                operator: op,
            });
        }
        CompareOp::Regex => match &expected {
            Value::String(pattern) => {
                regex::Regex::new(pattern).map_err(|source| TranslateError::InvalidPattern {
                    kind: kind_name.to_owned(),
                    source,
                })?;
            }
            _ => {
                return Err(TranslateError::PatternNotString {
                    kind: kind_name.to_owned(),
                });
            }
        },
        _ => {}
    }

    Ok(ConditionLeaf::new(kind, op, expected)?.into())
}
