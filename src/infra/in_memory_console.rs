use std::cell::RefCell;

use crate::domain::{Console, ConsoleError};

/// Keeps every printed line so callers can inspect what a run produced.
#[derive(Debug, Default)]
pub struct InMemoryConsole {
    lines: RefCell<Vec<String>>,
}

impl InMemoryConsole {
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// The recorded lines as they would appear on a terminal, newline terminated.
    pub fn output(&self) -> String {
        self.lines
            .borrow()
            .iter()
            .map(|line| format!("{line}\n"))
            .collect()
    }

    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}

impl Console for InMemoryConsole {
    fn print_line(&self, line: &str) -> Result<(), ConsoleError> {
        self.lines.borrow_mut().push(line.to_owned());
        Ok(())
    }
}
