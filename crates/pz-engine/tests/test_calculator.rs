//! Integration tests for the deadline calculator.
//!
//! The concrete scenarios here are the ones practitioners actually hit:
//! deadlines triggered on Fridays, windows ending on holidays, half-filled
//! forms, and duplicate registry imports.

use pz_core::errors::Error;
use pz_engine::{
    compute_deadline, compute_from_form, CountingMode, DeadlineRequest, StepReason,
};
use pz_time::{brazil_national, Date, HolidayCalendar};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn five_business_days_from_a_friday() {
    // 2026-08-07 is a Friday. The start day is excluded, the weekend is
    // skipped, and counting runs Monday through Friday.
    let req = DeadlineRequest::new(
        date(2026, 8, 7),
        5,
        CountingMode::Business,
        HolidayCalendar::new(),
    );
    let result = compute_deadline(&req).unwrap();

    assert_eq!(result.final_date, Some(date(2026, 8, 14)));

    let reasons: Vec<StepReason> = result.simulation.iter().map(|s| s.reason).collect();
    assert_eq!(
        reasons,
        vec![
            StepReason::Start,
            StepReason::Weekend,
            StepReason::Weekend,
            StepReason::Business,
            StepReason::Business,
            StepReason::Business,
            StepReason::Business,
            StepReason::Business,
        ]
    );
}

#[test]
fn fifteen_calendar_days_ending_on_a_holiday() {
    // 15 calendar days from 2026-12-10 land exactly on Natal (Friday,
    // 2026-12-25); the extension walks past the holiday and the weekend
    // behind it to Monday 2026-12-28.
    let holidays = HolidayCalendar::new().with(date(2026, 12, 25), "Natal");
    let req = DeadlineRequest::new(date(2026, 12, 10), 15, CountingMode::Calendar, holidays);
    let result = compute_deadline(&req).unwrap();

    assert_eq!(result.final_date, Some(date(2026, 12, 28)));
    assert!(result
        .log
        .iter()
        .any(|l| l.contains("feriado (Natal)") && l.contains("prorrogado")));

    // Extension steps carry their specific reason.
    let tail: Vec<StepReason> = result
        .simulation
        .iter()
        .rev()
        .take(3)
        .map(|s| s.reason)
        .collect();
    assert_eq!(
        tail,
        vec![StepReason::Weekend, StepReason::Weekend, StepReason::Holiday]
    );
}

#[test]
fn invalid_day_count_reports_without_panicking() {
    let result = compute_from_form(
        "2026-08-07",
        "abc",
        CountingMode::Business,
        &HolidayCalendar::new(),
    )
    .unwrap();
    assert_eq!(result.final_date, None);
    assert!(result.simulation.is_empty());
    assert_eq!(result.log.len(), 1);

    let result = compute_from_form("", "15", CountingMode::Business, &HolidayCalendar::new())
        .unwrap();
    assert_eq!(result.final_date, None);
    assert!(result.log[0].contains("data inicial"));
}

#[test]
fn duplicate_registry_dates_narrate_the_first_entry() {
    // Two entries for the same Monday; the first in registry order wins.
    let holidays = HolidayCalendar::new()
        .with(date(2026, 9, 7), "Independência do Brasil")
        .with(date(2026, 9, 7), "Feriado duplicado");
    let req = DeadlineRequest::new(date(2026, 9, 4), 1, CountingMode::Business, holidays);
    let result = compute_deadline(&req).unwrap();

    assert_eq!(result.final_date, Some(date(2026, 9, 8)));
    let holiday_step = result
        .simulation
        .iter()
        .find(|s| s.reason == StepReason::Holiday)
        .unwrap();
    assert_eq!(holiday_step.label, "Independência do Brasil");
    assert!(!result.log.iter().any(|l| l.contains("Feriado duplicado")));
}

#[test]
fn business_mode_never_finishes_earlier_than_calendar_mode() {
    // The span from Wednesday 2026-08-05 contains one weekend.
    let start = date(2026, 8, 5);
    let business = compute_deadline(&DeadlineRequest::new(
        start,
        5,
        CountingMode::Business,
        HolidayCalendar::new(),
    ))
    .unwrap();
    let calendar = compute_deadline(&DeadlineRequest::new(
        start,
        5,
        CountingMode::Calendar,
        HolidayCalendar::new(),
    ))
    .unwrap();

    assert_eq!(calendar.final_date, Some(date(2026, 8, 10)));
    assert_eq!(business.final_date, Some(date(2026, 8, 12)));
    assert!(business.final_date >= calendar.final_date);
}

#[test]
fn final_date_is_business_day_under_national_registry() {
    let holidays = brazil_national(2026, 2027).unwrap();
    for day_count in [1, 5, 10, 15, 30] {
        for mode in [CountingMode::Business, CountingMode::Calendar] {
            let req = DeadlineRequest::new(
                date(2026, 12, 18), // deep in the December holiday cluster
                day_count,
                mode,
                holidays.clone(),
            );
            let result = compute_deadline(&req).unwrap();
            let final_date = result.final_date.unwrap();
            assert!(
                holidays.is_business_day(final_date),
                "{final_date:?} ({day_count} days, {mode:?}) is not a business day"
            );
        }
    }
}

#[test]
fn identical_inputs_yield_identical_results() {
    let holidays = brazil_national(2026, 2026).unwrap();
    let req = DeadlineRequest::new(date(2026, 4, 17), 15, CountingMode::Business, holidays);
    let first = compute_deadline(&req).unwrap();
    let second = compute_deadline(&req).unwrap();
    assert_eq!(first, second);
}

#[test]
fn counting_past_the_calendar_range_is_an_error() {
    let req = DeadlineRequest::new(
        date(2199, 12, 1),
        60,
        CountingMode::Calendar,
        HolidayCalendar::new(),
    );
    let err = compute_deadline(&req).unwrap_err();
    assert!(matches!(err, Error::Date(_)));
}

#[test]
fn log_narrates_every_phase() {
    let holidays = HolidayCalendar::new().with(date(2026, 9, 7), "Independência do Brasil");
    let req = DeadlineRequest::new(date(2026, 9, 4), 2, CountingMode::Business, holidays);
    let result = compute_deadline(&req).unwrap();

    assert!(result.log[0].starts_with("Data inicial: 04/09/2026"));
    assert!(result.log[1].contains("Exclui-se o dia do começo"));
    assert!(result.log.iter().any(|l| l.contains("fim de semana")));
    assert!(result
        .log
        .iter()
        .any(|l| l.contains("Independência do Brasil")));
    assert!(result
        .log
        .last()
        .unwrap()
        .starts_with("Termo final do prazo: 09/09/2026"));
}
