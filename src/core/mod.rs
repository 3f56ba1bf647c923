pub mod audit;
pub mod backup;
pub mod config;
pub mod ledger;
pub mod report;
