//! UI layer for the directory GUI.

pub mod app;

pub use app::DirectoryGuiApp;
