//! Computation request — the explicit inputs of a deadline calculation.

use pz_core::errors::{Error, Result};
use pz_time::{Date, HolidayCalendar};

/// How days are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CountingMode {
    /// Count business days only: weekends and registry holidays suspend the
    /// count (CPC/2015 style).
    Business,
    /// Count every calendar day (CLT and pre-2015 style). The final date
    /// still rolls forward past a non-business landing day.
    Calendar,
}

impl CountingMode {
    /// Portuguese narration label for the counted unit.
    pub fn unit_br(&self) -> &'static str {
        match self {
            CountingMode::Business => "dia útil",
            CountingMode::Calendar => "dia corrido",
        }
    }
}

/// The explicit inputs of one deadline computation.
///
/// A request owns its holiday registry: the computation is a pure function
/// of this value, with no hidden state anywhere else.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeadlineRequest {
    /// The date the countable clock is triggered (publication/notice).
    pub start_date: Date,
    /// Number of days to count.
    pub day_count: u32,
    /// Counting mode.
    pub mode: CountingMode,
    /// Snapshot of the holiday registry in effect for this computation.
    pub holidays: HolidayCalendar,
}

impl DeadlineRequest {
    /// Create a request from already-typed values.
    pub fn new(
        start_date: Date,
        day_count: u32,
        mode: CountingMode,
        holidays: HolidayCalendar,
    ) -> Self {
        Self {
            start_date,
            day_count,
            mode,
            holidays,
        }
    }

    /// Build a request from raw form input.
    ///
    /// `start_date` must be an ISO `YYYY-MM-DD` string and `day_count` a
    /// non-negative integer. On failure returns [`Error::InvalidInput`] with
    /// a message in the narration language, ready to be shown in place of a
    /// result.
    pub fn from_form(
        start_date: &str,
        day_count: &str,
        mode: CountingMode,
        holidays: &HolidayCalendar,
    ) -> Result<Self> {
        let start_text = start_date.trim();
        if start_text.is_empty() {
            return Err(Error::InvalidInput(
                "Informe a data inicial para calcular o prazo.".into(),
            ));
        }
        let start = Date::from_iso(start_text).map_err(|_| {
            Error::InvalidInput(format!(
                "Data inicial inválida: \"{start_text}\". Use o formato AAAA-MM-DD."
            ))
        })?;

        let count_text = day_count.trim();
        if count_text.is_empty() {
            return Err(Error::InvalidInput(
                "Informe a quantidade de dias do prazo.".into(),
            ));
        }
        let count: u32 = count_text.parse().map_err(|_| {
            Error::InvalidInput(format!(
                "Quantidade de dias inválida: \"{count_text}\". Informe um número inteiro não negativo."
            ))
        })?;

        Ok(Self::new(start, count, mode, holidays.clone()))
    }
}
