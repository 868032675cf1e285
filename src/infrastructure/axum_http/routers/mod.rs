pub mod clients;
pub mod ledger_queries;
pub mod photographers;
pub mod reconciliation;
