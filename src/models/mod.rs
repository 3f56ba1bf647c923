pub mod outcome;
pub mod project;
pub mod stats;

pub use outcome::WriteOutcome;
pub use project::ProjectSummary;
pub use stats::{BlockInfo, DailyStat};
