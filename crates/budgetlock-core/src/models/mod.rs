pub mod budget;
pub mod budget_status;
pub mod degradation_event;
pub mod file_size;
pub mod source_file;
pub mod source_type;
pub mod token_count;

pub use budget::{BudgetPreset, TaskMode};
pub use budget_status::BudgetStatus;
pub use degradation_event::DegradationEvent;
pub use file_size::FileSize;
pub use source_file::{SourceFile, SourceId};
pub use source_type::SourceType;
pub use token_count::{CountMethod, TokenCount};
