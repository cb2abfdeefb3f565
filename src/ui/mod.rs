//! Interactive terminal front end.

pub mod app;
pub mod cards;
pub mod detail;
pub mod directory;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
