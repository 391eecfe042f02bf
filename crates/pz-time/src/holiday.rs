//! Holiday registry — the set of non-working dates a computation runs under.
//!
//! The registry is a plain value: callers build one (by hand, from imported
//! court tables, or from [`crate::national::brazil_national`]), then pass a
//! snapshot into each computation. Nothing in this workspace mutates a
//! registry behind a caller's back or falls back to a hidden default list.

use crate::date::Date;
use pz_core::errors::Result;
use pz_core::ensure;

/// A single registry entry: a dated exception to the working calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Holiday {
    /// The calendar date of the exception.
    pub date: Date,
    /// Human-readable label (e.g. `"Independência do Brasil"`).
    pub name: String,
}

impl Holiday {
    /// Create a registry entry.
    pub fn new(date: Date, name: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
        }
    }
}

/// An ordered set of holiday exceptions.
///
/// Duplicate dates are permitted; lookups resolve to the **first** entry in
/// registry order, so results stay deterministic whatever the caller feeds in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HolidayCalendar {
    entries: Vec<Holiday>,
}

impl HolidayCalendar {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry from an ordered list of entries.
    pub fn from_entries(entries: Vec<Holiday>) -> Self {
        Self { entries }
    }

    /// Add an entry, returning the registry (builder style).
    pub fn with(mut self, date: Date, name: impl Into<String>) -> Self {
        self.add(date, name);
        self
    }

    /// Append an entry.
    pub fn add(&mut self, date: Date, name: impl Into<String>) {
        self.entries.push(Holiday::new(date, name));
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` if the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the entries in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &Holiday> {
        self.entries.iter()
    }

    /// Look up a date by exact calendar-date match.
    ///
    /// Returns the name of the first matching entry in registry order, or
    /// `None` if the date is not in the registry.
    pub fn holiday_name(&self, date: Date) -> Option<&str> {
        self.entries
            .iter()
            .find(|h| h.date == date)
            .map(|h| h.name.as_str())
    }

    /// Return `true` if the date is in the registry.
    pub fn contains(&self, date: Date) -> bool {
        self.holiday_name(date).is_some()
    }

    /// Return `true` if the date is neither a weekend nor a registry entry.
    pub fn is_business_day(&self, date: Date) -> bool {
        !date.weekday().is_weekend() && !self.contains(date)
    }

    /// Collect the entries falling inside the inclusive range `[from, to]`,
    /// in registry order.
    pub fn holidays_between(&self, from: Date, to: Date) -> Result<Vec<&Holiday>> {
        ensure!(from <= to, "range start {from} is after range end {to}");
        Ok(self
            .entries
            .iter()
            .filter(|h| h.date >= from && h.date <= to)
            .collect())
    }
}

impl FromIterator<Holiday> for HolidayCalendar {
    fn from_iter<I: IntoIterator<Item = Holiday>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
