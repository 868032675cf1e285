use diesel::{
    r2d2::PoolError,
    result::{DatabaseErrorKind, Error as DieselError},
};
use tokio::task::JoinError;

use crate::domain::errors::LedgerError;

impl From<DieselError> for LedgerError {
    fn from(err: DieselError) -> Self {
        match &err {
            DieselError::DatabaseError(
                DatabaseErrorKind::SerializationFailure | DatabaseErrorKind::UniqueViolation,
                _,
            ) => LedgerError::Conflict,
            DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                LedgerError::UnknownPair
            }
            // Postgres reports 40P01 without a dedicated diesel kind.
            DieselError::DatabaseError(DatabaseErrorKind::Unknown, info)
                if info.message().contains("deadlock detected") =>
            {
                LedgerError::Conflict
            }
            _ => LedgerError::Store(err.into()),
        }
    }
}

impl From<PoolError> for LedgerError {
    fn from(err: PoolError) -> Self {
        LedgerError::Store(err.into())
    }
}

impl From<JoinError> for LedgerError {
    fn from(err: JoinError) -> Self {
        LedgerError::Store(err.into())
    }
}
