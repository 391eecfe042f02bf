//! Legal frameworks, act types, and the citation table.

/// The procedural rule framework governing a deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LegalFramework {
    /// General civil procedure (CPC/2015): business-day counting.
    CivilProcedure,
    /// Labor procedure (CLT).
    LaborProcedure,
    /// Small-claims procedure (Lei nº 9.099/1995).
    SmallClaims,
}

impl LegalFramework {
    /// Portuguese name of the governing statute.
    pub fn statute_br(&self) -> &'static str {
        match self {
            LegalFramework::CivilProcedure => "Código de Processo Civil",
            LegalFramework::LaborProcedure => "Consolidação das Leis do Trabalho",
            LegalFramework::SmallClaims => "Lei nº 9.099/1995",
        }
    }
}

/// The procedural act whose timeliness is being asserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ActType {
    /// Defensive response to the initial claim.
    Answer,
    /// Appeal against a final decision.
    Appeal,
    /// Motion for clarification of a decision.
    ClarificationMotion,
    /// Claim brought back against the plaintiff in the same suit.
    Counterclaim,
}

/// The Portuguese name of an act under a given framework.
///
/// The same act type reads differently per framework: an appeal is an
/// "apelação" under the CPC, a "recurso ordinário" under the CLT, and a
/// "recurso inominado" in small claims.
pub fn act_label(framework: LegalFramework, act: ActType) -> &'static str {
    match (framework, act) {
        (LegalFramework::CivilProcedure, ActType::Answer) => "contestação",
        (LegalFramework::CivilProcedure, ActType::Appeal) => "apelação",
        (LegalFramework::CivilProcedure, ActType::ClarificationMotion) => {
            "embargos de declaração"
        }
        (LegalFramework::CivilProcedure, ActType::Counterclaim) => "reconvenção",
        (LegalFramework::LaborProcedure, ActType::Answer) => "defesa",
        (LegalFramework::LaborProcedure, ActType::Appeal) => "recurso ordinário",
        (LegalFramework::LaborProcedure, ActType::ClarificationMotion) => {
            "embargos de declaração"
        }
        (LegalFramework::LaborProcedure, ActType::Counterclaim) => "reconvenção",
        (LegalFramework::SmallClaims, ActType::Answer) => "contestação",
        (LegalFramework::SmallClaims, ActType::Appeal) => "recurso inominado",
        (LegalFramework::SmallClaims, ActType::ClarificationMotion) => {
            "embargos de declaração"
        }
        (LegalFramework::SmallClaims, ActType::Counterclaim) => "pedido contraposto",
    }
}

/// The rule citation supporting a given framework/act combination.
pub fn citation(framework: LegalFramework, act: ActType) -> &'static str {
    match (framework, act) {
        (LegalFramework::CivilProcedure, ActType::Answer) => {
            "arts. 219 e 335 do Código de Processo Civil"
        }
        (LegalFramework::CivilProcedure, ActType::Appeal) => {
            "arts. 219 e 1.003, § 5º, do Código de Processo Civil"
        }
        (LegalFramework::CivilProcedure, ActType::ClarificationMotion) => {
            "arts. 219 e 1.023 do Código de Processo Civil"
        }
        (LegalFramework::CivilProcedure, ActType::Counterclaim) => {
            "arts. 219 e 343 do Código de Processo Civil"
        }
        (LegalFramework::LaborProcedure, ActType::Answer) => "art. 847 da CLT",
        (LegalFramework::LaborProcedure, ActType::Appeal) => {
            "arts. 775 e 895, I, da CLT"
        }
        (LegalFramework::LaborProcedure, ActType::ClarificationMotion) => {
            "arts. 775 e 897-A da CLT"
        }
        (LegalFramework::LaborProcedure, ActType::Counterclaim) => "art. 775 da CLT",
        (LegalFramework::SmallClaims, ActType::Answer) => "art. 30 da Lei nº 9.099/1995",
        (LegalFramework::SmallClaims, ActType::Appeal) => "art. 42 da Lei nº 9.099/1995",
        (LegalFramework::SmallClaims, ActType::ClarificationMotion) => {
            "art. 49 da Lei nº 9.099/1995"
        }
        (LegalFramework::SmallClaims, ActType::Counterclaim) => {
            "art. 31 da Lei nº 9.099/1995"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAMEWORKS: [LegalFramework; 3] = [
        LegalFramework::CivilProcedure,
        LegalFramework::LaborProcedure,
        LegalFramework::SmallClaims,
    ];

    const ACTS: [ActType; 4] = [
        ActType::Answer,
        ActType::Appeal,
        ActType::ClarificationMotion,
        ActType::Counterclaim,
    ];

    #[test]
    fn every_combination_has_a_citation_and_label() {
        for framework in FRAMEWORKS {
            for act in ACTS {
                assert!(!citation(framework, act).is_empty());
                assert!(!act_label(framework, act).is_empty());
            }
        }
    }

    #[test]
    fn appeal_names_differ_per_framework() {
        assert_eq!(
            act_label(LegalFramework::CivilProcedure, ActType::Appeal),
            "apelação"
        );
        assert_eq!(
            act_label(LegalFramework::LaborProcedure, ActType::Appeal),
            "recurso ordinário"
        );
        assert_eq!(
            act_label(LegalFramework::SmallClaims, ActType::Appeal),
            "recurso inominado"
        );
    }

    #[test]
    fn civil_citations_carry_the_business_day_rule() {
        for act in ACTS {
            assert!(citation(LegalFramework::CivilProcedure, act).contains("art"));
        }
        assert!(citation(LegalFramework::CivilProcedure, ActType::Answer).contains("219"));
    }
}
