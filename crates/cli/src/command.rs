//! Line commands typed at the prompt

use todo_core::view::{Intent, TaskListView};

pub const HELP: &str = "\
Commands:
  type <text>   set the input text
  submit        create a task from the input text
  add <text>    type and submit in one step
  done <n>      mark row n as done
  undo <n>      mark row n as not done
  rm <n>        delete row n
  clear         delete all tasks
  refresh       reload the list
  help          show this message
  quit          exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Type(String),
    Submit,
    Add(String),
    Done(usize),
    Undo(usize),
    Remove(usize),
    Clear,
    Refresh,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word {
            "type" => Ok(Self::Type(rest.to_string())),
            "submit" => Ok(Self::Submit),
            "add" => Ok(Self::Add(rest.to_string())),
            "done" => row_number(rest).map(Self::Done),
            "undo" => row_number(rest).map(Self::Undo),
            "rm" | "delete" => row_number(rest).map(Self::Remove),
            "clear" => Ok(Self::Clear),
            "refresh" => Ok(Self::Refresh),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            "" => Err("empty command".to_string()),
            other => Err(format!("unknown command '{}', try 'help'", other)),
        }
    }

    /// Translate into intents, resolving row numbers against the current view
    pub fn into_intents(self, view: &TaskListView) -> Result<Vec<Intent>, String> {
        let row_id = |n: usize| {
            view.row(n)
                .map(|row| row.id.clone())
                .ok_or_else(|| format!("no task at row {}", n))
        };

        match self {
            Self::Type(text) => Ok(vec![Intent::EditDraft(text)]),
            Self::Submit => Ok(vec![Intent::Submit]),
            Self::Add(text) => Ok(vec![Intent::EditDraft(text), Intent::Submit]),
            Self::Done(n) => Ok(vec![Intent::Complete(row_id(n)?)]),
            Self::Undo(n) => Ok(vec![Intent::Undo(row_id(n)?)]),
            Self::Remove(n) => Ok(vec![Intent::Delete(row_id(n)?)]),
            Self::Clear => Ok(vec![Intent::ClearAll]),
            Self::Refresh => Ok(vec![Intent::Refresh]),
            Self::Help | Self::Quit => Ok(Vec::new()),
        }
    }
}

fn row_number(raw: &str) -> Result<usize, String> {
    raw.parse()
        .map_err(|_| format!("expected a row number, got '{}'", raw))
}
