pub mod clients;
pub mod debts;
pub mod payments;
pub mod photographers;
