//! Backend-to-UI events and error modeling for the directory GUI.

use client_core::FetchError;
use shared::domain::EmployeeRecord;

use crate::backend_bridge::portrait::PortraitImage;

pub enum UiEvent {
    EmployeesLoaded(Vec<EmployeeRecord>),
    Error(UiError),
    PortraitLoaded { url: String, image: PortraitImage },
    PortraitFailed { url: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Server,
    Decode,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    LoadEmployees,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_fetch(context: UiErrorContext, err: &FetchError) -> Self {
        let category = match err {
            FetchError::Client(_) | FetchError::Transport { .. } => UiErrorCategory::Transport,
            FetchError::Status { .. } => UiErrorCategory::Server,
            FetchError::Decode { .. } => UiErrorCategory::Decode,
        };
        Self {
            category,
            context,
            message: err.to_string(),
        }
    }

    /// The backend worker could not start; nothing was requested yet.
    pub fn startup(message: impl Into<String>) -> Self {
        Self {
            category: UiErrorCategory::Unknown,
            context: UiErrorContext::BackendStartup,
            message: message.into(),
        }
    }

    /// Load failures can be fetched again; a worker that never started cannot.
    pub fn is_retryable(&self) -> bool {
        self.context != UiErrorContext::BackendStartup
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// One-line text for the error banner.
    pub fn banner_text(&self) -> String {
        let what = match self.context {
            UiErrorContext::BackendStartup => "Backend worker failed to start",
            UiErrorContext::LoadEmployees => "Couldn't load employees",
        };
        let hint = match self.category {
            UiErrorCategory::Transport => "check your network connection",
            UiErrorCategory::Server => "the directory service is having trouble",
            UiErrorCategory::Decode => "the directory service sent an unexpected response",
            UiErrorCategory::Unknown => "see logs for details",
        };
        format!("{what}: {hint} ({})", self.message)
    }
}
