//! Day classification — the predicate layer under the deadline calculator.
//!
//! Every calendar day is exactly one of three things: a registry holiday, a
//! weekend day, or a countable business day. The holiday check runs before
//! the weekend check, so a holiday that happens to fall on a Saturday
//! narrates under its own name; the outcome of a computation is the same
//! either way, since both classes suspend counting.

use crate::date::Date;
use crate::holiday::HolidayCalendar;

/// The classification of a single calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind<'a> {
    /// A registry holiday, with the registry name.
    Holiday(&'a str),
    /// Saturday or Sunday.
    Weekend,
    /// A countable working day.
    Business,
}

impl DayKind<'_> {
    /// Return `true` if the day suspends business-day counting.
    pub fn suspends_counting(&self) -> bool {
        !matches!(self, DayKind::Business)
    }
}

/// Classify a single day against a holiday registry.
///
/// Pure and stateless: the result depends only on the date's calendar
/// components and the registry contents.
pub fn classify(date: Date, holidays: &HolidayCalendar) -> DayKind<'_> {
    if let Some(name) = holidays.holiday_name(date) {
        return DayKind::Holiday(name);
    }
    if date.weekday().is_weekend() {
        return DayKind::Weekend;
    }
    DayKind::Business
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn plain_weekday_is_business() {
        let cal = HolidayCalendar::new();
        assert_eq!(classify(date(2026, 8, 5), &cal), DayKind::Business);
        assert!(!classify(date(2026, 8, 5), &cal).suspends_counting());
    }

    #[test]
    fn saturday_and_sunday_are_weekend() {
        let cal = HolidayCalendar::new();
        assert_eq!(classify(date(2026, 8, 8), &cal), DayKind::Weekend);
        assert_eq!(classify(date(2026, 8, 9), &cal), DayKind::Weekend);
    }

    #[test]
    fn holiday_wins_over_weekend() {
        // 2026-08-08 is a Saturday with a registry entry on the same date.
        let cal = HolidayCalendar::new().with(date(2026, 8, 8), "Feriado municipal");
        assert_eq!(
            classify(date(2026, 8, 8), &cal),
            DayKind::Holiday("Feriado municipal")
        );
    }

    #[test]
    fn both_non_business_kinds_suspend_counting() {
        let cal = HolidayCalendar::new().with(date(2026, 8, 7), "Ponto facultativo");
        assert!(classify(date(2026, 8, 7), &cal).suspends_counting());
        assert!(classify(date(2026, 8, 8), &cal).suspends_counting());
    }
}
