//! CLI layer
//!
//! Argument definitions live in `app`, command implementations in
//! `commands`.

mod app;
mod commands;

pub use app::run;
