mod error;
mod translator;

pub use error::TranslateError;

use crate::condition::Registry;
use crate::fulfillable::Fulfillable;

/// Translate a declarative rule specification into a [`Fulfillable`] tree.
///
/// Two top-level forms are accepted:
///
/// - a flat map of condition-kind name to expected value, which becomes an
///   implicit `AND` of equality leaves:
///   `{"item_type": "page", "item_level": 1}`
/// - an explicit node with a `relation` (`"AND"`/`"OR"`), an optional
///   `not`, and a `children` array of leaves
///   (`{"type": ..., "value": ..., "compare": ...}`) or nested explicit
///   nodes, recursively.
///
/// The flat-map shorthand is only legal at the top level; children of an
/// explicit node must carry a `type` or a `relation` key. Child order is
/// preserved exactly — evaluation short-circuits left to right.
///
/// All validation happens here: unknown kinds, relations, and operators,
/// operators outside a kind's comparer surface, `IN` without a list, and
/// regex patterns that do not compile are all rejected up front, so the
/// returned tree can always be evaluated.
///
/// # Errors
///
/// Returns [`TranslateError`] describing the first offending node.
pub fn translate(
    spec: &serde_json::Value,
    registry: &Registry,
) -> Result<Fulfillable, TranslateError> {
    translator::translate_value(spec, registry)
}

/// Parse JSON text and translate it.
///
/// A convenience wrapper combining [`serde_json::from_str`] and
/// [`translate`].
///
/// # Errors
///
/// Returns [`TranslateError`] on invalid JSON or any translation failure.
pub fn translate_str(input: &str, registry: &Registry) -> Result<Fulfillable, TranslateError> {
    let spec: serde_json::Value = serde_json::from_str(input)?;
    translate(&spec, registry)
}
