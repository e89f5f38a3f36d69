//! Library entry for pricegrid exposing the catalog pipeline, state, and rendering for
//! the binary and for integration tests.

pub mod app;
pub mod args;
pub mod events;
pub mod logic;
pub mod sources;
pub mod state;
pub mod theme;
pub mod ui;
pub mod util;
