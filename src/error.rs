use thiserror::Error;

use crate::translate::TranslateError;
use crate::types::ConditionError;

/// Unified error type covering condition wiring and rule translation.
///
/// Both underlying errors are configuration mistakes by the integrator and
/// surface before any evaluation happens; a successfully built tree never
/// fails at evaluation time.
#[derive(Debug, Error)]
pub enum GatecheckError {
    #[error(transparent)]
    Translate(#[from] TranslateError),

    #[error(transparent)]
    Condition(#[from] ConditionError),
}
