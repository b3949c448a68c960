// halalscreen/src/commands/mod.rs

pub mod context;
pub mod news;
pub mod portfolio;
pub mod render;
pub mod report;
pub mod screen;
pub mod search;
pub mod session;

pub use context::ProjectContext;
