// Library for testable modules
pub mod config;
pub mod data;
pub mod error;
pub mod key_handler;
pub mod loader;
pub mod logging;
pub mod pages;
pub mod palette;
pub mod render_context;
pub mod screen;
pub mod state;
pub mod ui_utils;

// Re-export main types used in tests
pub use config::{Settings, Theme};
pub use data::{BlogPost, Catalog, Category, WorkItem};
pub use error::{FolioError, Result};
pub use state::{SectionScrollSpy, WorkListController};
