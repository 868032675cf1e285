pub mod reconciliation_engine;
pub mod usecases;
