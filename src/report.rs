//! Solution quality relative to a reference value.

use crate::instance::Time;
use std::fmt;

/// Which reference a gap was measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GapKind {
    /// Against a proven optimum.
    OptimalityGap,
    /// Relative percentage deviation from the lower bound.
    Rpd,
}

impl fmt::Display for GapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GapKind::OptimalityGap => f.write_str("OPT_GAP"),
            GapKind::Rpd => f.write_str("RPD"),
        }
    }
}

/// `(objective - reference) / reference * 100`; 0 for a zero reference.
pub fn gap_percent(objective: Time, reference: Time) -> f64 {
    if reference == 0 {
        return 0.0;
    }
    (objective as f64 - reference as f64) / reference as f64 * 100.0
}

/// Gap of `objective` against the optimum when one is known, otherwise
/// against the lower bound.
///
/// # Examples
///
/// ```
/// use u_rcmax::report::{assess, GapKind};
///
/// assert_eq!(assess(110, Some(100), 90), (GapKind::OptimalityGap, 10.0));
/// assert_eq!(assess(100, None, 80), (GapKind::Rpd, 25.0));
/// ```
pub fn assess(objective: Time, optimum: Option<Time>, lower_bound: Time) -> (GapKind, f64) {
    match optimum {
        Some(opt) => (GapKind::OptimalityGap, gap_percent(objective, opt)),
        None => (GapKind::Rpd, gap_percent(objective, lower_bound)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gap_percent() {
        assert!((gap_percent(120, 100) - 20.0).abs() < 1e-12);
        assert_eq!(gap_percent(100, 100), 0.0);
        assert_eq!(gap_percent(5, 0), 0.0);
    }

    #[test]
    fn test_assess_prefers_optimum() {
        let (kind, gap) = assess(33, Some(30), 20);
        assert_eq!(kind, GapKind::OptimalityGap);
        assert!((gap - 10.0).abs() < 1e-12);

        let (kind, gap) = assess(30, None, 20);
        assert_eq!(kind, GapKind::Rpd);
        assert!((gap - 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(GapKind::OptimalityGap.to_string(), "OPT_GAP");
        assert_eq!(GapKind::Rpd.to_string(), "RPD");
    }
}
