pub mod clients;
pub mod ledger;
pub mod ledger_queries;
pub mod photographers;
