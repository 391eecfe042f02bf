//! Brazilian national holiday table.
//!
//! An explicit, opt-in registry builder. The engine itself never reaches for
//! this list: a caller that wants the national holidays constructs the
//! registry here and passes it in like any other, and a caller with its own
//! court tables ignores this module entirely.
//!
//! Fixed-date entries cover the national holidays of Lei 662/1949 and
//! Lei 6.802/1980; the movable feasts (Carnival, Good Friday, Corpus
//! Christi) are derived from the Gregorian Easter computus. State and
//! municipal holidays and court-specific suspensions are the caller's to
//! append.

use crate::date::Date;
use crate::holiday::HolidayCalendar;
use pz_core::errors::Result;
use pz_core::ensure;

/// Fixed-date national holidays, as (month, day, name).
const FIXED: [(u8, u8, &str); 8] = [
    (1, 1, "Confraternização Universal"),
    (4, 21, "Tiradentes"),
    (5, 1, "Dia do Trabalho"),
    (9, 7, "Independência do Brasil"),
    (10, 12, "Nossa Senhora Aparecida"),
    (11, 2, "Finados"),
    (11, 15, "Proclamação da República"),
    (12, 25, "Natal"),
];

/// Build a registry with the Brazilian national holidays for every year in
/// the inclusive range `[first_year, last_year]`.
///
/// Entries are pushed year by year in rule order (fixed dates first, then
/// the movable feasts), matching how the table above reads.
pub fn brazil_national(first_year: u16, last_year: u16) -> Result<HolidayCalendar> {
    ensure!(
        first_year <= last_year,
        "first_year {first_year} is after last_year {last_year}"
    );
    let mut calendar = HolidayCalendar::new();
    for year in first_year..=last_year {
        for (month, day, name) in FIXED {
            calendar.add(Date::from_ymd(year, month, day)?, name);
        }
        let easter = easter_sunday(year)?;
        calendar.add(easter.add_days(-48)?, "Carnaval");
        calendar.add(easter.add_days(-47)?, "Carnaval");
        calendar.add(easter.add_days(-2)?, "Sexta-feira Santa");
        calendar.add(easter.add_days(60)?, "Corpus Christi");
    }
    Ok(calendar)
}

/// Gregorian Easter Sunday for a given year (anonymous/Meeus computus).
pub fn easter_sunday(year: u16) -> Result<Date> {
    let y = year as i32;
    let a = y % 19;
    let b = y / 100;
    let c = y % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    Date::from_ymd(year, month as u8, day as u8)
}
