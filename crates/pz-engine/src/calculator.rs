//! The deadline calculator.
//!
//! Walks the calendar day by day from the start date, applying the counting
//! rules of Brazilian procedural practice:
//!
//! 1. the triggering day itself is excluded from the count;
//! 2. under business-day counting, weekends and registry holidays suspend
//!    the count; under calendar-day counting every day counts;
//! 3. a deadline landing on a non-business day rolls forward to the next
//!    business day.
//!
//! The computation is a pure function of the request: identical inputs
//! produce identical final dates, logs, and traces, byte for byte.

use crate::request::{CountingMode, DeadlineRequest};
use crate::simulation::{DeadlineResult, SimulationStep, StepReason};
use pz_core::errors::{Error, Result};
use pz_time::{classify, DayKind, HolidayCalendar};

/// Hard ceiling on calendar days examined per computation.
///
/// Far beyond any realistic deadline span (about 27 years of consecutive
/// days). Hitting it means the holiday registry is pathological, and the
/// computation aborts with [`Error::Overflow`] instead of looping.
pub const MAX_ITERATIONS: u32 = 10_000;

fn guard(visited: &mut u32) -> Result<()> {
    *visited += 1;
    if *visited > MAX_ITERATIONS {
        return Err(Error::Overflow(format!(
            "a contagem examinou mais de {MAX_ITERATIONS} dias; verifique o cadastro de feriados"
        )));
    }
    Ok(())
}

/// Compute the final date of a deadline, with full narration and trace.
///
/// Never fails on user input (the request is already well-typed); the only
/// error paths are the iteration ceiling ([`Error::Overflow`]) and date
/// arithmetic leaving the supported calendar range ([`Error::Date`]).
pub fn compute_deadline(request: &DeadlineRequest) -> Result<DeadlineResult> {
    let start = request.start_date;
    let total = request.day_count;
    let holidays = &request.holidays;

    let mut log: Vec<String> = Vec::new();
    let mut simulation: Vec<SimulationStep> = Vec::new();

    simulation.push(SimulationStep::skipped(
        start,
        "termo inicial",
        StepReason::Start,
    ));
    log.push(format!(
        "Data inicial: {start} ({}).",
        start.weekday().name_br()
    ));

    if total == 0 {
        log.push("Prazo de 0 dias: o termo final coincide com a data inicial.".into());
        return Ok(DeadlineResult {
            final_date: Some(start),
            log,
            simulation,
        });
    }

    log.push("Exclui-se o dia do começo do prazo; a contagem inicia no dia seguinte.".into());

    let mut cursor = start.add_days(1)?;
    let mut count: u32 = 0;
    let mut visited: u32 = 0;

    // Counting phase. The cursor rests on the day that satisfied the last
    // count; the extension phase below decides whether it stands.
    while count < total {
        guard(&mut visited)?;
        match request.mode {
            CountingMode::Business => match classify(cursor, holidays) {
                DayKind::Holiday(name) => {
                    log.push(format!(
                        "{cursor} ({}): feriado ({name}), não computado.",
                        cursor.weekday().name_br()
                    ));
                    simulation.push(SimulationStep::skipped(cursor, name, StepReason::Holiday));
                    cursor = cursor.add_days(1)?;
                }
                DayKind::Weekend => {
                    log.push(format!(
                        "{cursor} ({}): fim de semana, não computado.",
                        cursor.weekday().name_br()
                    ));
                    simulation.push(SimulationStep::skipped(
                        cursor,
                        "fim de semana",
                        StepReason::Weekend,
                    ));
                    cursor = cursor.add_days(1)?;
                }
                DayKind::Business => {
                    count += 1;
                    log.push(format!(
                        "{cursor} ({}): dia útil computado ({count}/{total}).",
                        cursor.weekday().name_br()
                    ));
                    simulation.push(SimulationStep::counted(
                        cursor,
                        cursor.weekday().name_br(),
                        count,
                        StepReason::Business,
                    ));
                    if count < total {
                        cursor = cursor.add_days(1)?;
                    }
                }
            },
            CountingMode::Calendar => {
                count += 1;
                log.push(format!(
                    "{cursor} ({}): dia corrido computado ({count}/{total}).",
                    cursor.weekday().name_br()
                ));
                simulation.push(SimulationStep::counted(
                    cursor,
                    cursor.weekday().name_br(),
                    count,
                    StepReason::Calendar,
                ));
                if count < total {
                    cursor = cursor.add_days(1)?;
                }
            }
        }
    }

    // Extension phase: a deadline may not end on a non-business day, in
    // either counting mode.
    loop {
        match classify(cursor, holidays) {
            DayKind::Business => break,
            DayKind::Holiday(name) => {
                guard(&mut visited)?;
                log.push(format!(
                    "Termo final recairia em {cursor} ({}), feriado ({name}): prorrogado para o dia seguinte.",
                    cursor.weekday().name_br()
                ));
                simulation.push(SimulationStep::skipped(cursor, name, StepReason::Holiday));
                cursor = cursor.add_days(1)?;
            }
            DayKind::Weekend => {
                guard(&mut visited)?;
                log.push(format!(
                    "Termo final recairia em {cursor} ({}), fim de semana: prorrogado para o dia seguinte.",
                    cursor.weekday().name_br()
                ));
                simulation.push(SimulationStep::skipped(
                    cursor,
                    "fim de semana",
                    StepReason::Weekend,
                ));
                cursor = cursor.add_days(1)?;
            }
        }
    }

    log.push(format!(
        "Termo final do prazo: {cursor} ({}).",
        cursor.weekday().name_br()
    ));
    Ok(DeadlineResult {
        final_date: Some(cursor),
        log,
        simulation,
    })
}

/// Compute a deadline straight from raw form input.
///
/// Parse failures come back as an ordinary [`DeadlineResult`] whose single
/// log line explains the problem; interactive callers render the log either
/// way, so incomplete form state never crashes anything.
pub fn compute_from_form(
    start_date: &str,
    day_count: &str,
    mode: CountingMode,
    holidays: &HolidayCalendar,
) -> Result<DeadlineResult> {
    match DeadlineRequest::from_form(start_date, day_count, mode, holidays) {
        Ok(request) => compute_deadline(&request),
        Err(Error::InvalidInput(reason)) => Ok(DeadlineResult::invalid_input(reason)),
        Err(other) => Err(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pz_time::Date;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn request(start: Date, days: u32, mode: CountingMode) -> DeadlineRequest {
        DeadlineRequest::new(start, days, mode, HolidayCalendar::new())
    }

    #[test]
    fn zero_days_returns_start_date() {
        let start = date(2026, 8, 7);
        let result = compute_deadline(&request(start, 0, CountingMode::Business)).unwrap();
        assert_eq!(result.final_date, Some(start));
        assert_eq!(result.simulation.len(), 1);
        assert_eq!(result.simulation[0].reason, StepReason::Start);
        assert!(!result.simulation[0].counted);
        // Start line plus the clarifying line, nothing about exclusion.
        assert_eq!(result.log.len(), 2);
        assert!(result.log[1].contains("coincide com a data inicial"));
    }

    #[test]
    fn five_business_days_from_a_friday() {
        // 2026-08-07 is a Friday.
        let start = date(2026, 8, 7);
        let result = compute_deadline(&request(start, 5, CountingMode::Business)).unwrap();
        // Sat/Sun skipped, Mon-Fri counted.
        assert_eq!(result.final_date, Some(date(2026, 8, 14)));
        // start + 2 weekend skips + 5 counted
        assert_eq!(result.simulation.len(), 8);
    }

    #[test]
    fn first_counted_day_is_after_start() {
        let start = date(2026, 8, 4); // Tuesday
        let result = compute_deadline(&request(start, 3, CountingMode::Business)).unwrap();
        let first_counted = result.simulation.iter().find(|s| s.counted).unwrap();
        assert!(first_counted.date > start);
        assert_eq!(first_counted.date, date(2026, 8, 5));
    }

    #[test]
    fn holiday_suspends_business_count() {
        // 2026-09-07 (Independência) is a Monday.
        let holidays =
            HolidayCalendar::new().with(date(2026, 9, 7), "Independência do Brasil");
        let req = DeadlineRequest::new(
            date(2026, 9, 4), // Friday
            2,
            CountingMode::Business,
            holidays,
        );
        let result = compute_deadline(&req).unwrap();
        // Sat, Sun, holiday Monday all skipped; Tue and Wed counted.
        assert_eq!(result.final_date, Some(date(2026, 9, 9)));
        let skipped: Vec<StepReason> = result
            .simulation
            .iter()
            .filter(|s| !s.counted)
            .map(|s| s.reason)
            .collect();
        assert_eq!(
            skipped,
            vec![
                StepReason::Start,
                StepReason::Weekend,
                StepReason::Weekend,
                StepReason::Holiday
            ]
        );
        assert!(result
            .log
            .iter()
            .any(|l| l.contains("Independência do Brasil")));
    }

    #[test]
    fn calendar_mode_counts_weekends_but_still_extends() {
        // 2026-08-03 is a Monday; 5 calendar days end on Saturday 08-08.
        let start = date(2026, 8, 3);
        let result = compute_deadline(&request(start, 5, CountingMode::Calendar)).unwrap();
        // Extended past Sat and Sun to Monday 08-10.
        assert_eq!(result.final_date, Some(date(2026, 8, 10)));
        let counted: Vec<u32> = result
            .simulation
            .iter()
            .filter(|s| s.counted)
            .map(|s| s.count)
            .collect();
        assert_eq!(counted, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn day_count_beyond_ceiling_overflows() {
        let start = date(2026, 1, 1);
        let err =
            compute_deadline(&request(start, MAX_ITERATIONS + 1, CountingMode::Calendar))
                .unwrap_err();
        assert!(matches!(err, Error::Overflow(_)));
    }

    #[test]
    fn form_boundary_reports_invalid_input_as_log() {
        let result = compute_from_form(
            "2026-08-07",
            "quinze",
            CountingMode::Business,
            &HolidayCalendar::new(),
        )
        .unwrap();
        assert_eq!(result.final_date, None);
        assert!(result.simulation.is_empty());
        assert_eq!(result.log.len(), 1);
        assert!(result.log[0].contains("Quantidade de dias inválida"));
    }
}
