pub mod app;
pub mod courses;
pub mod dashboard;
pub mod events;
pub mod fetcher;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod roster;
pub mod roster_dialog;
mod runtime;
pub mod terminal_guard;
pub mod text;
pub mod theme;

pub use runtime::run;
