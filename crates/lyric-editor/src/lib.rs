pub mod board;
pub mod clock;
pub mod config;
pub mod drawing;
pub mod files;
pub mod input;
pub mod panel;
pub mod random;
pub mod workspace;

pub use config::WorkspaceConfig;
pub use workspace::{Tab, ViewState, Workspace};
