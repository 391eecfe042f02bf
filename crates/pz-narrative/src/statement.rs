//! Timeliness statement assembly.
//!
//! Turns a computed date range plus a holiday registry into the formatted
//! "tempestividade" paragraph filed with a petition. This is template
//! filling over the calculator's *output*: the statement consults the
//! registry directly for suspensions inside the range, never the
//! calculator's internal trace.

use crate::framework::{act_label, citation, ActType, LegalFramework};
use pz_core::errors::Result;
use pz_core::ensure;
use pz_time::{Date, HolidayCalendar};

/// Forensic recess window: December 20 through January 20 (art. 220 do CPC).
const RECESS_START: (u8, u8) = (12, 20);
const RECESS_END: (u8, u8) = (1, 20);

/// Return `true` if any day of the inclusive range `[from, to]` falls inside
/// the forensic recess window.
pub fn overlaps_forensic_recess(from: Date, to: Date) -> bool {
    if to - from >= 365 {
        // A full year necessarily crosses the window.
        return true;
    }
    let mut d = from;
    while d <= to {
        let (month, day) = (d.month(), d.day_of_month());
        if (month == RECESS_START.0 && day >= RECESS_START.1)
            || (month == RECESS_END.0 && day <= RECESS_END.1)
        {
            return true;
        }
        d += 1;
    }
    false
}

/// Inputs of one timeliness statement.
#[derive(Debug, Clone)]
pub struct TimelinessStatement<'a> {
    framework: LegalFramework,
    act: ActType,
    start_date: Date,
    final_date: Date,
    reference: Option<&'a str>,
}

impl<'a> TimelinessStatement<'a> {
    /// Create a statement for a computed date range.
    ///
    /// `start_date` is the publication/notice date and `final_date` the due
    /// date the calculator produced.
    pub fn new(
        framework: LegalFramework,
        act: ActType,
        start_date: Date,
        final_date: Date,
    ) -> Self {
        Self {
            framework,
            act,
            start_date,
            final_date,
            reference: None,
        }
    }

    /// Attach a free-text case reference (e.g. the docket number).
    pub fn reference(mut self, reference: &'a str) -> Self {
        self.reference = Some(reference);
        self
    }

    /// Assemble the statement text.
    ///
    /// Suspensions are narrated by querying `holidays` for entries inside
    /// the range; the recess paragraph appears only when the range overlaps
    /// the forensic recess window.
    pub fn render(&self, holidays: &HolidayCalendar) -> Result<String> {
        ensure!(
            self.start_date <= self.final_date,
            "start date {} is after final date {}",
            self.start_date,
            self.final_date
        );

        let label = act_label(self.framework, self.act);
        let mut out = String::from("DA TEMPESTIVIDADE\n");

        if let Some(reference) = self.reference {
            out.push_str(&format!("\nReferência: {reference}.\n"));
        }

        out.push_str(&format!(
            "\nA intimação considera-se realizada em {} ({}), iniciando-se a contagem \
             do prazo no primeiro dia subsequente, na forma do {}.\n",
            self.start_date,
            self.start_date.weekday().name_br(),
            citation(self.framework, self.act),
        ));

        let suspensions = holidays.holidays_between(self.start_date, self.final_date)?;
        if !suspensions.is_empty() {
            out.push_str(
                "\nNo curso do prazo houve suspensão do expediente forense nas seguintes datas: ",
            );
            let listed: Vec<String> = suspensions
                .iter()
                .map(|h| format!("{} ({})", h.date, h.name))
                .collect();
            out.push_str(&format!("{}.\n", listed.join("; ")));
        }

        if overlaps_forensic_recess(self.start_date, self.final_date) {
            out.push_str(
                "\nO período abrange o recesso forense (20 de dezembro a 20 de janeiro), \
                 durante o qual os prazos processuais ficam suspensos, na forma do \
                 art. 220 do Código de Processo Civil.\n",
            );
        }

        out.push_str(&format!(
            "\nO termo final do prazo recaiu em {} ({}). Dessa forma, a presente {}, \
             protocolada até essa data, é tempestiva.\n",
            self.final_date,
            self.final_date.weekday().name_br(),
            label,
        ));

        Ok(out)
    }
}
