pub mod column_operations;
pub mod drag;
pub mod task_operations;

pub use column_operations::{add_column, remove_column};
pub use drag::{decide_reorder, reorder, DragPayload, ReorderAction};
pub use task_operations::{accept_task, add_task, apply_edit, delete_task, EditOutcome};
