pub mod audit;
pub mod backup;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod init;
pub mod log;
pub mod report;
pub mod table;

use crate::config::Config;
use crate::db::Engine;
use crate::errors::AppResult;

/// Open the ledger configured in `cfg`.
pub(crate) fn open_engine(cfg: &Config) -> AppResult<Engine> {
    Engine::open(cfg.database_path())
}
