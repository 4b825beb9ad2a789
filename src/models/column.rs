/// The three columns every board starts with. They can never be removed and
/// are re-inserted in this order if a stored membership list lacks them.
pub const DEFAULT_COLUMNS: [&str; 3] = ["Not started", "In progress", "Completed"];

const FALLBACK_COLOR: &str = "#9E9E9E";

pub fn is_default_column(name: &str) -> bool {
    DEFAULT_COLUMNS.contains(&name)
}

/// Display color for a column's header chip.
pub fn color_hint(name: &str) -> &'static str {
    match name {
        "Not started" => "#FFA500",
        "In progress" => "#FFD700",
        "Completed" => "#00BFFF",
        _ => FALLBACK_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::{color_hint, is_default_column, DEFAULT_COLUMNS};

    #[test]
    fn defaults_are_recognized() {
        for name in DEFAULT_COLUMNS {
            assert!(is_default_column(name));
        }
        assert!(!is_default_column("Backlog"));
    }

    #[test]
    fn custom_columns_fall_back_to_neutral_color() {
        assert_eq!(color_hint("In progress"), "#FFD700");
        assert_eq!(color_hint("Backlog"), "#9E9E9E");
    }
}
