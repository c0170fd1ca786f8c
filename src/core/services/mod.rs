//! Classification and gating services
//!
//! Pure logic only: matchers and resolution are entirely I/O-free, the
//! checker reaches the outside world through port traits.

pub mod checker;
pub mod gate;
pub mod matcher;
pub mod resolver;
pub mod wip;
