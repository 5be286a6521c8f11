//! Systems that operate on the simulation state each tick.
//!
//! Systems are plain functions over the state they need. They do not own
//! state; all state lives in `SimulationEngine`.

pub mod aging;
pub mod detection;
pub mod snapshot;
pub mod spawner;
