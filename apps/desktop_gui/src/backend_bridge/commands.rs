//! Backend commands queued from UI to backend worker.

pub enum BackendCommand {
    FetchEmployees { count: usize },
    FetchPortrait { url: String },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::FetchEmployees { .. } => "fetch_employees",
            BackendCommand::FetchPortrait { .. } => "fetch_portrait",
        }
    }
}
