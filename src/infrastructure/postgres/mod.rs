pub mod ledger_errors;
pub mod postgres_connection;
pub mod repositories;
pub mod schema;
