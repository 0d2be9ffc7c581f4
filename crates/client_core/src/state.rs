//! Directory view state and its transitions.
//!
//! `DirectoryState::apply` is pure: it consumes the current state and an
//! event and returns the next state. Rendering happens elsewhere, from the
//! resulting state.

use shared::{domain::EmployeeRecord, filter::filter_by_name};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Browsing,
    Detail {
        index: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Pending,
    Loaded,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryEvent {
    Loaded(Vec<EmployeeRecord>),
    LoadFailed(String),
    CardClicked(usize),
    Next,
    Prev,
    Close,
    BackdropClicked,
    SearchSubmitted(String),
}

impl DirectoryEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Loaded(_) => "loaded",
            Self::LoadFailed(_) => "load_failed",
            Self::CardClicked(_) => "card_clicked",
            Self::Next => "next",
            Self::Prev => "prev",
            Self::Close => "close",
            Self::BackdropClicked => "backdrop_clicked",
            Self::SearchSubmitted(_) => "search_submitted",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DirectoryState {
    pub employees: Vec<EmployeeRecord>,
    /// `Some` while a non-empty search is active, even when nothing matched.
    pub filtered: Option<Vec<EmployeeRecord>>,
    pub query: String,
    pub mode: Mode,
    pub load: LoadStatus,
}

impl DirectoryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_employees(employees: Vec<EmployeeRecord>) -> Self {
        Self::new().apply(DirectoryEvent::Loaded(employees))
    }

    /// The list the gallery currently shows.
    pub fn active_list(&self) -> &[EmployeeRecord] {
        self.filtered.as_deref().unwrap_or(&self.employees)
    }

    /// The employee shown in the detail overlay, if any.
    pub fn current(&self) -> Option<&EmployeeRecord> {
        match self.mode {
            Mode::Browsing => None,
            Mode::Detail { index } => self.active_list().get(index),
        }
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.mode {
            Mode::Browsing => None,
            Mode::Detail { index } => Some(index),
        }
    }

    /// True when a search is active and matched nobody.
    pub fn is_empty_result(&self) -> bool {
        self.filtered.as_ref().is_some_and(Vec::is_empty)
    }

    pub fn is_search_active(&self) -> bool {
        self.filtered.is_some()
    }

    pub fn apply(mut self, event: DirectoryEvent) -> Self {
        match event {
            DirectoryEvent::Loaded(employees) => {
                self.employees = employees;
                self.filtered = None;
                self.query.clear();
                self.mode = Mode::Browsing;
                self.load = LoadStatus::Loaded;
            }
            DirectoryEvent::LoadFailed(reason) => {
                self.load = LoadStatus::Failed(reason);
            }
            DirectoryEvent::CardClicked(index) => {
                if index < self.active_list().len() {
                    self.mode = Mode::Detail { index };
                }
            }
            DirectoryEvent::Next => {
                if let Mode::Detail { index } = self.mode {
                    let len = self.active_list().len();
                    if len > 0 {
                        self.mode = Mode::Detail {
                            index: (index + 1) % len,
                        };
                    }
                }
            }
            DirectoryEvent::Prev => {
                if let Mode::Detail { index } = self.mode {
                    let len = self.active_list().len();
                    if len > 0 {
                        let prev = if index == 0 || index >= len {
                            len - 1
                        } else {
                            index - 1
                        };
                        self.mode = Mode::Detail { index: prev };
                    }
                }
            }
            DirectoryEvent::Close | DirectoryEvent::BackdropClicked => {
                self.mode = Mode::Browsing;
            }
            DirectoryEvent::SearchSubmitted(query) => {
                let query = query.trim().to_string();
                self.filtered = if query.is_empty() {
                    None
                } else {
                    Some(filter_by_name(&self.employees, &query))
                };
                self.query = query;
                self.mode = Mode::Browsing;
            }
        }
        self
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
