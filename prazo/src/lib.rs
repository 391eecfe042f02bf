//! # prazo
//!
//! Legal-deadline ("prazo processual") calculation engine for Brazilian
//! procedural law.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `pz-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! prazo = "0.1"
//! ```
//!
//! ```rust
//! use prazo::engine::{compute_deadline, CountingMode, DeadlineRequest};
//! use prazo::time::{Date, HolidayCalendar};
//!
//! # fn main() -> prazo::core::errors::Result<()> {
//! let holidays = HolidayCalendar::new()
//!     .with(Date::from_ymd(2026, 9, 7)?, "Independência do Brasil");
//!
//! // Two business days counted from Friday 2026-09-04: the weekend and the
//! // holiday Monday are skipped, so the deadline falls on Wednesday.
//! let request = DeadlineRequest::new(
//!     Date::from_ymd(2026, 9, 4)?,
//!     2,
//!     CountingMode::Business,
//!     holidays,
//! );
//! let result = compute_deadline(&request)?;
//! assert_eq!(result.final_date, Some(Date::from_ymd(2026, 9, 9)?));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and shared macros.
pub use pz_core as core;

/// Dates, weekdays, holiday registries, and the day classifier.
pub use pz_time as time;

/// The deadline calculator.
pub use pz_engine as engine;

/// Timeliness-statement formatting.
pub use pz_narrative as narrative;
