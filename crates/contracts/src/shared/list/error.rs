use thiserror::Error;

/// Ошибки строгой проверки набора фильтров
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ListError {
    #[error("Unknown filter operator: {0}")]
    UnknownOperator(String),

    #[error("Unknown field: {field}")]
    UnknownField { field: String },

    #[error("Operator '{operator}' is not applicable to {kind} column '{field}'")]
    OperatorKindMismatch {
        field: String,
        operator: String,
        kind: &'static str,
    },
}
