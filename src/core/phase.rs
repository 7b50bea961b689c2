use crate::domain::model::{PhaseRule, PregnancyPhase, Trimester};

const FIRST_TRIMESTER_END: i64 = 12;

pub const FIRST_TRIMESTER: PregnancyPhase = PregnancyPhase {
    trimester: Trimester::First,
    name: "First Trimester",
    color_token: "rose",
    description: "Formation of major organs",
};

pub const SECOND_TRIMESTER: PregnancyPhase = PregnancyPhase {
    trimester: Trimester::Second,
    name: "Second Trimester",
    color_token: "violet",
    description: "Growth and development",
};

pub const THIRD_TRIMESTER: PregnancyPhase = PregnancyPhase {
    trimester: Trimester::Third,
    name: "Third Trimester",
    color_token: "sky",
    description: "Preparation for birth",
};

/// `<=12` first, `13..=27` second, everything after third.
pub fn classify(week: i64) -> PregnancyPhase {
    classify_with(PhaseRule::Standard, week)
}

/// `<=12` first, `13..=24` second, everything after third.
pub fn classify_compact(week: i64) -> PregnancyPhase {
    classify_with(PhaseRule::Compact, week)
}

pub fn classify_with(rule: PhaseRule, week: i64) -> PregnancyPhase {
    if week <= FIRST_TRIMESTER_END {
        FIRST_TRIMESTER
    } else if week <= rule.second_trimester_end() {
        SECOND_TRIMESTER
    } else {
        THIRD_TRIMESTER
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(12, Trimester::First)]
    #[case(13, Trimester::Second)]
    #[case(27, Trimester::Second)]
    #[case(28, Trimester::Third)]
    #[case(-5, Trimester::First)]
    #[case(i64::MAX, Trimester::Third)]
    fn test_standard_boundaries(#[case] week: i64, #[case] expected: Trimester) {
        assert_eq!(classify(week).trimester, expected);
    }

    #[rstest]
    #[case(12, Trimester::First)]
    #[case(24, Trimester::Second)]
    #[case(25, Trimester::Third)]
    #[case(27, Trimester::Third)]
    fn test_compact_boundaries(#[case] week: i64, #[case] expected: Trimester) {
        assert_eq!(classify_compact(week).trimester, expected);
    }

    #[test]
    fn test_rules_only_disagree_on_weeks_25_to_27() {
        let disagreements: Vec<i64> = (-2..=45)
            .filter(|&w| classify(w) != classify_compact(w))
            .collect();
        assert_eq!(disagreements, vec![25, 26, 27]);
    }

    #[test]
    fn test_phase_metadata() {
        let phase = classify(20);
        assert_eq!(phase.name, "Second Trimester");
        assert_eq!(phase.color_token, "violet");
        assert_eq!(phase.description, "Growth and development");
    }
}
