//! # pz-narrative
//!
//! Timeliness-statement formatting for prazo-rs.
//!
//! A thin consumer of the calculator's output: given the computed date
//! range, the governing legal framework, and the act being filed, it
//! assembles the Portuguese "tempestividade" statement, citing the
//! applicable rule and narrating the suspensions found in the holiday
//! registry.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Frameworks, act types, and the citation table.
pub mod framework;

/// Statement assembly.
pub mod statement;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use framework::{act_label, citation, ActType, LegalFramework};
pub use statement::{overlaps_forensic_recess, TimelinessStatement};
