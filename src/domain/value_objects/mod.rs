pub mod clients;
pub mod ledger;
pub mod photographers;
