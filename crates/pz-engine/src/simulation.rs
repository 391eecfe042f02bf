//! Computation output — final date, narration log, and day-by-day trace.

use pz_time::Date;

/// Why a simulation step was (or was not) counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StepReason {
    /// The triggering day itself, never counted.
    Start,
    /// A registry holiday: suspends business-day counting and extends a
    /// landing day.
    Holiday,
    /// Saturday or Sunday: suspends business-day counting and extends a
    /// landing day.
    Weekend,
    /// A counted business day.
    Business,
    /// A counted calendar day.
    Calendar,
}

/// One entry per calendar day visited during a computation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationStep {
    /// The day being evaluated.
    pub date: Date,
    /// Descriptive text: the holiday name, `"fim de semana"`, the weekday
    /// name, or `"termo inicial"`.
    pub label: String,
    /// Whether this day incremented the running count.
    pub counted: bool,
    /// The running count at this step. Only meaningful when `counted`.
    pub count: u32,
    /// Classification tag for this step.
    pub reason: StepReason,
}

impl SimulationStep {
    /// A non-counted step.
    pub(crate) fn skipped(date: Date, label: impl Into<String>, reason: StepReason) -> Self {
        Self {
            date,
            label: label.into(),
            counted: false,
            count: 0,
            reason,
        }
    }

    /// A counted step carrying the running count.
    pub(crate) fn counted(
        date: Date,
        label: impl Into<String>,
        count: u32,
        reason: StepReason,
    ) -> Self {
        Self {
            date,
            label: label.into(),
            counted: true,
            count,
            reason,
        }
    }
}

/// The outcome of one deadline computation.
///
/// The `log` doubles as the error channel: for invalid input, `final_date`
/// is `None`, `simulation` is empty, and the single log line explains what
/// was wrong. Callers render the log either way.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeadlineResult {
    /// The computed due date, already extended past any non-business
    /// landing day. `None` when the input never entered computation.
    pub final_date: Option<Date>,
    /// Ordered narration lines, one per meaningful event.
    pub log: Vec<String>,
    /// Ordered trace, one entry per calendar day visited.
    pub simulation: Vec<SimulationStep>,
}

impl DeadlineResult {
    /// A result that carries only an explanation of rejected input.
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self {
            final_date: None,
            log: vec![reason.into()],
            simulation: Vec::new(),
        }
    }
}
