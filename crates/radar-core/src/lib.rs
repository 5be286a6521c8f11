//! Core types and definitions for the radar sweep visualization.
//!
//! This crate defines the vocabulary shared across all other crates:
//! ping data, sweep and spawn state, per-tick snapshots, events, and
//! constants. It has no dependency on any drawing backend or runtime.

pub mod constants;
pub mod events;
pub mod state;
pub mod types;
