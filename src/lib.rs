//! Matchday is a terminal-first dashboard for following live football scores.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns runtime state: the application controller, the animation
//!   tick chain, and configuration loading.
//! - [`ui`] renders the terminal interface — adaptive gradient styling, the
//!   glyph-wave spinner, panel layout, and the interactive event loop.
//! - [`api`] defines the match data model and the read-only feed client.
//! - [`utils`] carries terminal color-depth handling shared by the UI.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::main`], which parses arguments and dispatches into
//! [`ui::dashboard_loop`] for interactive sessions.

pub mod api;
pub mod cli;
pub mod core;
pub mod ui;
pub mod utils;
