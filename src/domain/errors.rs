use thiserror::Error;

/// Failure of a ledger operation. Every variant means nothing was committed.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("amount must be a positive integer, got {0}")]
    InvalidAmount(i64),

    #[error("{field} must be a positive identifier, got {value}")]
    InvalidIdentifier { field: &'static str, value: i64 },

    #[error("debt balance would overflow")]
    BalanceOverflow,

    #[error("photographer or client does not exist")]
    UnknownPair,

    #[error("concurrent update on the same photographer/client pair, retry the request")]
    Conflict,

    #[error("operation cancelled before commit")]
    Cancelled,

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

impl LedgerError {
    /// Validation failures are raised before the store is touched.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            LedgerError::InvalidAmount(_) | LedgerError::InvalidIdentifier { .. }
        )
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, LedgerError::Conflict)
    }
}

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("name must not be empty")]
    InvalidName,

    #[error("{0} must be a positive identifier")]
    InvalidIdentifier(&'static str),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub(crate) fn validate_name(name: &str) -> Result<(), DirectoryError> {
    if name.trim().is_empty() {
        return Err(DirectoryError::InvalidName);
    }
    Ok(())
}

pub(crate) fn validate_id(field: &'static str, id: i64) -> Result<(), DirectoryError> {
    if id <= 0 {
        return Err(DirectoryError::InvalidIdentifier(field));
    }
    Ok(())
}
