//! Weighted score, grade, and summary calculation
//!
//! Pure functions over the evaluated check set. The score is the rounded
//! share of earned importance weight, the grade is a fixed banding of the
//! score, and `can_help` gates on at least half of the critical checks
//! passing.

use crate::models::{Check, Importance};

/// Aggregated verdict over one check set
#[derive(Debug, Clone)]
pub struct Scorecard {
    pub score: u32,
    pub grade: String,
    pub summary: String,
    pub can_help: bool,
}

/// Round-half-up percentage of earned importance weight
pub fn calculate_score(checks: &[Check]) -> u32 {
    let total: u32 = checks.iter().map(|c| c.importance.weight()).sum();
    if total == 0 {
        return 0;
    }
    let earned: u32 = checks
        .iter()
        .filter(|c| c.passed)
        .map(|c| c.importance.weight())
        .sum();
    ((earned as f64 / total as f64) * 100.0).round() as u32
}

/// Letter grade from score
pub fn grade_from_score(score: u32) -> String {
    match score {
        s if s >= 90 => "A".to_string(),
        s if s >= 80 => "B".to_string(),
        s if s >= 70 => "C".to_string(),
        s if s >= 60 => "D".to_string(),
        _ => "F".to_string(),
    }
}

/// At least half of the critical checks pass (integer floor)
pub fn can_help(checks: &[Check]) -> bool {
    let critical_total = checks
        .iter()
        .filter(|c| c.importance == Importance::Critical)
        .count();
    let critical_passed = checks
        .iter()
        .filter(|c| c.importance == Importance::Critical && c.passed)
        .count();
    critical_passed >= critical_total / 2
}

fn summary(checks: &[Check], score: u32) -> String {
    let passed_count = checks.iter().filter(|c| c.passed).count();
    let failed_critical = checks
        .iter()
        .filter(|c| !c.passed && c.importance == Importance::Critical)
        .count();

    if score >= 80 {
        format!(
            "Good foundation! {}/{} checks passed. Ready for Local SEO.",
            passed_count,
            checks.len()
        )
    } else if score >= 60 {
        format!(
            "Decent site with room for improvement. {failed_critical} critical issues to address."
        )
    } else {
        format!("Site needs work. {failed_critical} critical SEO issues found.")
    }
}

/// Compute the full scorecard for an evaluated check set
pub fn calculate(checks: &[Check]) -> Scorecard {
    let score = calculate_score(checks);
    Scorecard {
        score,
        grade: grade_from_score(score),
        summary: summary(checks, score),
        can_help: can_help(checks),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(importance: Importance, passed: bool) -> Check {
        Check {
            name: "test".into(),
            passed,
            value: String::new(),
            recommendation: None,
            importance,
        }
    }

    /// The real distribution: 5 critical, 4 important, 1 minor
    fn full_set(passed: impl Fn(usize) -> bool) -> Vec<Check> {
        let tiers = [
            Importance::Critical,
            Importance::Important,
            Importance::Critical,
            Importance::Critical,
            Importance::Critical,
            Importance::Critical,
            Importance::Important,
            Importance::Minor,
            Importance::Important,
            Importance::Important,
        ];
        tiers
            .iter()
            .enumerate()
            .map(|(i, &t)| check(t, passed(i)))
            .collect()
    }

    #[test]
    fn test_all_passing_is_perfect() {
        let checks = full_set(|_| true);
        let card = calculate(&checks);
        assert_eq!(card.score, 100);
        assert_eq!(card.grade, "A");
        assert!(card.can_help);
        assert_eq!(
            card.summary,
            "Good foundation! 10/10 checks passed. Ready for Local SEO."
        );
    }

    #[test]
    fn test_all_failing_is_zero() {
        let checks = full_set(|_| false);
        let card = calculate(&checks);
        assert_eq!(card.score, 0);
        assert_eq!(card.grade, "F");
        assert!(!card.can_help);
        assert_eq!(card.summary, "Site needs work. 5 critical SEO issues found.");
    }

    #[test]
    fn test_score_rounds_half_up() {
        // 3 passed critical of total weight 24 = 37.5 -> 38
        let checks = full_set(|i| matches!(i, 0 | 2 | 3));
        assert_eq!(calculate_score(&checks), 38);
    }

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(grade_from_score(100), "A");
        assert_eq!(grade_from_score(90), "A");
        assert_eq!(grade_from_score(89), "B");
        assert_eq!(grade_from_score(80), "B");
        assert_eq!(grade_from_score(79), "C");
        assert_eq!(grade_from_score(70), "C");
        assert_eq!(grade_from_score(69), "D");
        assert_eq!(grade_from_score(60), "D");
        assert_eq!(grade_from_score(59), "F");
        assert_eq!(grade_from_score(0), "F");
    }

    #[test]
    fn test_can_help_floor_division() {
        // 5 critical checks; floor(5/2) = 2 must pass
        let two_critical = full_set(|i| matches!(i, 0 | 2));
        assert!(can_help(&two_critical));
        let one_critical = full_set(|i| i == 0);
        assert!(!can_help(&one_critical));
    }

    #[test]
    fn test_summary_middle_band() {
        // Fail one critical (weight 3 of 24): score 88 -> B band summary;
        // fail two criticals: 75 -> middle band
        let checks = full_set(|i| !matches!(i, 0 | 2));
        let card = calculate(&checks);
        assert_eq!(card.score, 75);
        assert_eq!(
            card.summary,
            "Decent site with room for improvement. 2 critical issues to address."
        );
    }

    #[test]
    fn test_empty_checks_score_zero() {
        assert_eq!(calculate_score(&[]), 0);
    }
}
