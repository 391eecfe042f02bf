//! # pz-engine
//!
//! The deadline calculator for prazo-rs: computes the final due date of a
//! procedural deadline from a start date, a day count, a counting mode, and
//! a holiday registry, producing an auditable narration log and a
//! day-by-day simulation trace.
//!
//! The engine is synchronous, side-effect-free, and deterministic: every
//! computation is a pure function of its explicit inputs. Off-by-one errors
//! here have real-world consequences, so the trace exists precisely so a
//! human can audit every day the algorithm examined.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// The counting/extension algorithm.
pub mod calculator;

/// Request types (`DeadlineRequest`, `CountingMode`).
pub mod request;

/// Result types (`DeadlineResult`, `SimulationStep`, `StepReason`).
pub mod simulation;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calculator::{compute_deadline, compute_from_form, MAX_ITERATIONS};
pub use request::{CountingMode, DeadlineRequest};
pub use simulation::{DeadlineResult, SimulationStep, StepReason};
