//! Use Cases Layer - Application Business Logic
//!
//! Orchestrates domain logic with port interfaces.
//!
//! Use cases:
//! - `SavingsSweep`: Redeem savings, move funds to trading, sweep a
//!   residual balance back to funding

pub mod savings_sweep;

pub use savings_sweep::{SavingsSweep, SweepPlan, SweepReport};
