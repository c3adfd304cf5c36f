use thiserror::Error;

use crate::validate::AttributeError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("patient record rejected: {} attribute(s) out of range", .0.len())]
    Validation(Vec<AttributeError>),
}
