//! Core domain logic for testkeeper
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (CommitRef, AffectedFile, Verdict, StatusDecision)
//! - `services/` - Classification and gating logic
//! - `ports/` - Trait definitions for external collaborators

pub mod models;
pub mod ports;
pub mod services;
