pub mod use_board_columns;
pub mod use_column_tasks;

pub use use_board_columns::{use_board_columns, BoardColumnsHook};
pub use use_column_tasks::{use_column_tasks, ColumnTasksHook};
