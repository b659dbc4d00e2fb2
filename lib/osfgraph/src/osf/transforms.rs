//! Transforms used by the OSF tags.

use crate::describe::{Describable, Value};
use crate::error::DataError;
use crate::transform::{IdentityTransform, IdentityTransformRef, Transform, TransformRef};
use oxrdf::Literal;
use oxrdf::vocab::xsd;
use oxsdatatypes::DateTime;
use std::borrow::Cow;
use std::str::FromStr;
use std::sync::Arc;

/// Parses OSF timestamps into `xsd:dateTime` literals.
pub const DATE_TIME: TransformRef = TransformRef::new("osf::DateTimeLiteral", date_time);
/// Writes enumeration values with their wire name.
pub const ENUM_LABEL: TransformRef = TransformRef::new("osf::EnumLabel", enum_label);
/// Computes the full name of a user from the whole user.
pub const FULL_NAME: TransformRef = TransformRef::new("osf::FullName", full_name);
/// Identifies a contributor by its node and its user.
pub const CONTRIBUTOR_ID: IdentityTransformRef =
    IdentityTransformRef::new("osf::ContributorId", contributor_id);

fn date_time() -> Arc<dyn Transform> {
    Arc::new(DateTimeLiteral)
}

fn enum_label() -> Arc<dyn Transform> {
    Arc::new(EnumLabel)
}

fn full_name() -> Arc<dyn Transform> {
    Arc::new(FullName)
}

fn contributor_id() -> Arc<dyn IdentityTransform> {
    Arc::new(ContributorId)
}

pub struct DateTimeLiteral;

impl Transform for DateTimeLiteral {
    fn apply<'a>(&self, input: Value<'a>) -> Result<Value<'a>, DataError> {
        let Some(lexical) = input.lexical() else {
            return Err(DataError::transform(
                DATE_TIME.name(),
                format!("expected a timestamp, found {}", input.kind_name()),
            ));
        };
        let value = DateTime::from_str(lexical.trim()).map_err(|e| {
            DataError::transform(
                DATE_TIME.name(),
                format!("'{lexical}' is not a valid xsd:dateTime: {e}"),
            )
        })?;
        Ok(Literal::new_typed_literal(value.to_string(), xsd::DATE_TIME).into())
    }
}

pub struct EnumLabel;

impl Transform for EnumLabel {
    fn apply<'a>(&self, input: Value<'a>) -> Result<Value<'a>, DataError> {
        match input {
            Value::Enum(value) => Ok(Literal::new_simple_literal(value.variant()).into()),
            Value::Literal(_) => Ok(input),
            other => Err(DataError::transform(
                ENUM_LABEL.name(),
                format!("expected an enumeration value, found {}", other.kind_name()),
            )),
        }
    }
}

pub struct FullName;

impl Transform for FullName {
    fn apply<'a>(&self, input: Value<'a>) -> Result<Value<'a>, DataError> {
        let Value::Object(user) = input else {
            return Err(DataError::transform(
                FULL_NAME.name(),
                format!("expected a user, found {}", input.kind_name()),
            ));
        };
        let parts: Vec<String> = ["given_name", "family_name"]
            .into_iter()
            .filter_map(|name| user.member(name))
            .filter_map(|value| value.lexical().map(|part| part.trim().to_owned()))
            .filter(|part| !part.is_empty())
            .collect();
        if parts.is_empty() {
            return Ok(Value::Null);
        }
        Ok(Value::from(parts.join(" ").as_str()))
    }
}

pub struct ContributorId;

impl IdentityTransform for ContributorId {
    fn apply(
        &self,
        outer: Option<&dyn Describable>,
        identifier: &Value<'_>,
    ) -> Result<String, DataError> {
        let node = outer
            .and_then(|outer| outer.member("id"))
            .and_then(|id| id.lexical().map(Cow::into_owned))
            .ok_or_else(|| {
                DataError::transform(
                    CONTRIBUTOR_ID.name(),
                    "a contributor is only identified within the node it contributes to",
                )
            })?;
        let user = identifier.lexical().ok_or_else(|| {
            DataError::transform(
                CONTRIBUTOR_ID.name(),
                format!("expected a user identifier, found {}", identifier.kind_name()),
            )
        })?;
        Ok(format!("{node}-{user}"))
    }
}
