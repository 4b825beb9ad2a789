use crate::models::Task;

/// One drag gesture's payload: the task, the column it started in, and its
/// current index there. The index is kept up to date as hover reorders
/// splice the list, so a later drop never works from a stale position.
#[derive(Clone, Debug, PartialEq)]
pub struct DragPayload {
    pub task: Task,
    pub from_column: String,
    pub from_index: usize,
}

/// Outcome of hovering a dragged card over the card at `hover_index`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ReorderAction {
    Keep,
    Move { to: usize },
}

/// Midpoint rule for in-column hover reordering, pure so it is testable
/// without a pointer or DOM. Dragging downward only moves once the pointer
/// passes below the hovered card's vertical midpoint; dragging upward only
/// once it passes above it; equal indices never move.
pub fn decide_reorder(
    drag_index: usize,
    hover_index: usize,
    pointer_y: f64,
    hover_midpoint_y: f64,
) -> ReorderAction {
    if drag_index == hover_index {
        return ReorderAction::Keep;
    }
    if drag_index < hover_index && pointer_y < hover_midpoint_y {
        return ReorderAction::Keep;
    }
    if drag_index > hover_index && pointer_y > hover_midpoint_y {
        return ReorderAction::Keep;
    }
    ReorderAction::Move { to: hover_index }
}

/// Splice the task at `from` out and reinsert it at `to`. Out-of-range
/// indices leave the list untouched.
pub fn reorder(tasks: &[Task], from: usize, to: usize) -> Vec<Task> {
    let mut next = tasks.to_vec();
    if from >= next.len() || to >= next.len() {
        return next;
    }
    let task = next.remove(from);
    next.insert(to, task);
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hovering_the_dragged_card_itself_never_moves() {
        assert_eq!(decide_reorder(2, 2, 0.0, 100.0), ReorderAction::Keep);
        assert_eq!(decide_reorder(2, 2, 200.0, 100.0), ReorderAction::Keep);
    }

    #[test]
    fn dragging_down_moves_only_past_the_midpoint() {
        assert_eq!(decide_reorder(0, 2, 90.0, 100.0), ReorderAction::Keep);
        assert_eq!(decide_reorder(0, 2, 110.0, 100.0), ReorderAction::Move { to: 2 });
    }

    #[test]
    fn dragging_up_moves_only_above_the_midpoint() {
        assert_eq!(decide_reorder(3, 1, 110.0, 100.0), ReorderAction::Keep);
        assert_eq!(decide_reorder(3, 1, 90.0, 100.0), ReorderAction::Move { to: 1 });
    }

    fn named(names: &[&str]) -> Vec<Task> {
        names
            .iter()
            .map(|n| Task::new(n.to_string(), String::new(), "Not started".to_string()))
            .collect()
    }

    #[test]
    fn reorder_is_a_permutation() {
        let tasks = named(&["a", "b", "c", "d"]);
        let next = reorder(&tasks, 3, 0);

        let order: Vec<&str> = next.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(order, ["d", "a", "b", "c"]);

        let mut before: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        let mut after: Vec<&str> = next.iter().map(|t| t.id.as_str()).collect();
        before.sort();
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn reorder_out_of_range_is_a_no_op() {
        let tasks = named(&["a", "b"]);
        assert_eq!(reorder(&tasks, 5, 0), tasks);
        assert_eq!(reorder(&tasks, 0, 5), tasks);
    }
}
