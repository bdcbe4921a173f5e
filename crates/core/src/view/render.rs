use std::fmt;

use crate::task::{Task, TaskListState};

const PLACEHOLDER: &str = "Create task";
const COMBINING_LONG_STROKE: char = '\u{0336}';

/// Visual treatment of a row, derived only from `done`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStyle {
    Normal,
    /// Muted and struck through
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: String,
    pub title: String,
    pub style: RowStyle,
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            style: if task.done {
                RowStyle::Completed
            } else {
                RowStyle::Normal
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputForm {
    pub value: String,
    pub placeholder: &'static str,
}

/// Everything a frontend needs to draw the task list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListView {
    pub form: InputForm,
    pub rows: Vec<TaskRow>,
}

impl TaskListView {
    /// Look up a row by its 1-based position
    pub fn row(&self, number: usize) -> Option<&TaskRow> {
        number.checked_sub(1).and_then(|index| self.rows.get(index))
    }
}

pub fn render(state: &TaskListState) -> TaskListView {
    TaskListView {
        form: InputForm {
            value: state.draft_title.clone(),
            placeholder: PLACEHOLDER,
        },
        rows: state.tasks.iter().map(TaskRow::from).collect(),
    }
}

fn strike(text: &str) -> String {
    text.chars()
        .flat_map(|c| [c, COMBINING_LONG_STROKE])
        .collect()
}

impl fmt::Display for TaskRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.style {
            RowStyle::Normal => write!(f, "[ ] {}", self.title),
            RowStyle::Completed => write!(f, "[x] {}", strike(&self.title)),
        }
    }
}

impl fmt::Display for TaskListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "TO DO LIST")?;
        if self.rows.is_empty() {
            writeln!(f, "  (no tasks)")?;
        }
        for (index, row) in self.rows.iter().enumerate() {
            writeln!(f, "{:>3}. {}", index + 1, row)?;
        }
        if self.form.value.is_empty() {
            write!(f, "> <{}>", self.form.placeholder)
        } else {
            write!(f, "> {}", self.form.value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(tasks: Vec<Task>, draft: &str) -> TaskListState {
        TaskListState {
            draft_title: draft.to_string(),
            tasks,
        }
    }

    #[test]
    fn test_rows_follow_task_order() {
        let view = render(&state(
            vec![Task::new("b", "second"), Task::new("a", "first")],
            "",
        ));
        let ids: Vec<_> = view.rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_style_depends_only_on_done() {
        let view = render(&state(
            vec![Task::new("1", "open"), Task::new("2", "closed").completed()],
            "",
        ));
        assert_eq!(view.rows[0].style, RowStyle::Normal);
        assert_eq!(view.rows[1].style, RowStyle::Completed);
    }

    #[test]
    fn test_form_shows_draft() {
        let view = render(&state(vec![], "buy mi"));
        assert_eq!(view.form.value, "buy mi");
        assert_eq!(view.form.placeholder, "Create task");
    }

    #[test]
    fn test_row_lookup_is_one_based() {
        let view = render(&state(vec![Task::new("1", "a"), Task::new("2", "b")], ""));
        assert_eq!(view.row(1).map(|r| r.id.as_str()), Some("1"));
        assert_eq!(view.row(2).map(|r| r.id.as_str()), Some("2"));
        assert!(view.row(0).is_none());
        assert!(view.row(3).is_none());
    }

    #[test]
    fn test_text_rendering() {
        let view = render(&state(
            vec![Task::new("1", "milk"), Task::new("2", "ok").completed()],
            "",
        ));
        let text = view.to_string();

        assert!(text.contains("  1. [ ] milk"));
        assert!(text.contains("  2. [x] o\u{0336}k\u{0336}"));
        assert!(text.ends_with("> <Create task>"));
    }

    #[test]
    fn test_empty_list_text() {
        let text = render(&TaskListState::default()).to_string();
        assert!(text.contains("(no tasks)"));
    }
}
