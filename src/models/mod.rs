pub mod column;
pub mod task;

// Export the Task type and column name helpers for use throughout the app
pub use column::{color_hint, is_default_column, DEFAULT_COLUMNS};
pub use task::Task;
