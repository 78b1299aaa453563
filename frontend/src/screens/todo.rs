//! Local to-do notes.
//!
//! A small in-memory scratch list, unrelated to the registry. Nothing here
//! touches the network or the credential slot.

use std::io;

use crate::ui;

use super::Route;

/// One note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: u64,
    pub text: String,
}

/// In-memory task list with locally assigned, increasing ids.
#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a note and returns its id. Blank input after trimming is
    /// rejected.
    pub fn add(&mut self, text: &str) -> Option<u64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.tasks.push(Task {
            id,
            text: text.to_owned(),
        });
        Some(id)
    }

    /// Removes the note with the given id, reporting whether it existed.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}

/// Runs the interactive notes loop and returns the next route.
pub fn run() -> io::Result<Route> {
    let mut list = TaskList::new();

    loop {
        ui::heading("To-do notes");
        if list.tasks().is_empty() {
            println!("Nothing noted yet.");
        } else {
            for task in list.tasks() {
                println!("{:>3}) {}", task.id, task.text);
            }
        }

        match ui::prompt("[a]dd  [r]emove  [b]ack: ")?.as_str() {
            "a" => {
                let text = ui::prompt("Note: ")?;
                if list.add(&text).is_none() {
                    println!("Empty notes are not kept.");
                }
            }
            "r" => {
                let raw = ui::prompt("Id to remove: ")?;
                match raw.parse::<u64>() {
                    Ok(id) => {
                        if !list.remove(id) {
                            println!("No note with id {id}.");
                        }
                    }
                    Err(_) => println!("Ids are numbers."),
                }
            }
            "b" => return Ok(Route::Home),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_notes_with_increasing_ids() {
        let mut list = TaskList::new();

        assert_eq!(list.add("call the lab"), Some(0));
        assert_eq!(list.add("order supplies"), Some(1));
        assert_eq!(list.tasks().len(), 2);
        assert_eq!(list.tasks()[0].text, "call the lab");
    }

    #[test]
    fn trims_input_and_rejects_blank_notes() {
        let mut list = TaskList::new();

        assert_eq!(list.add("  restock gloves  "), Some(0));
        assert_eq!(list.tasks()[0].text, "restock gloves");
        assert_eq!(list.add("   "), None);
        assert_eq!(list.tasks().len(), 1);
    }

    #[test]
    fn removes_by_id_and_reports_missing_ids() {
        let mut list = TaskList::new();
        let id = list.add("call the lab").unwrap();
        list.add("order supplies").unwrap();

        assert!(list.remove(id));
        assert!(!list.remove(id));
        assert_eq!(list.tasks().len(), 1);
        assert_eq!(list.tasks()[0].text, "order supplies");
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut list = TaskList::new();
        let first = list.add("one").unwrap();
        list.remove(first);

        assert_eq!(list.add("two"), Some(first + 1));
    }
}
