//! # pz-time
//!
//! Pure calendar dates, weekdays, holiday registries, and the day
//! classifier for prazo-rs.
//!
//! Everything here is a value: a [`Date`] is a plain calendar date with no
//! time-of-day or timezone, and a [`HolidayCalendar`] is an immutable
//! snapshot a caller passes into each computation.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` — pure calendar date.
pub mod date;

/// Day classification (`DayKind`, `classify`).
pub mod day_kind;

/// Holiday registry types.
pub mod holiday;

/// Brazilian national holiday table (explicit opt-in).
pub mod national;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use day_kind::{classify, DayKind};
pub use holiday::{Holiday, HolidayCalendar};
pub use national::brazil_national;
pub use weekday::Weekday;
