//! Quality-check milestone classification
//!
//! The engine never matches milestone names itself; it asks a
//! [`MilestoneClassifier`] which state machine applies.

use regex::Regex;

use crate::errors::{Result, TrackerError};
use crate::schemas::{Milestone, MilestoneKind};

/// Decides the [`MilestoneKind`] of a milestone.
pub trait MilestoneClassifier {
    fn classify(&self, milestone: &Milestone) -> MilestoneKind;
}

impl<F> MilestoneClassifier for F
where
    F: Fn(&Milestone) -> MilestoneKind,
{
    fn classify(&self, milestone: &Milestone) -> MilestoneKind {
        self(milestone)
    }
}

/// Classifies a milestone as quality-check when its name contains any of the
/// configured markers, ignoring case.
#[derive(Debug, Clone)]
pub struct NameMarkerClassifier {
    pattern: Option<Regex>,
}

impl NameMarkerClassifier {
    /// Build a classifier from literal markers. Blank markers are ignored;
    /// with no markers left every milestone is standard.
    pub fn new<S: AsRef<str>>(markers: &[S]) -> Result<Self> {
        let alternatives: Vec<String> = markers
            .iter()
            .map(|m| m.as_ref().trim())
            .filter(|m| !m.is_empty())
            .map(regex::escape)
            .collect();

        if alternatives.is_empty() {
            return Ok(NameMarkerClassifier { pattern: None });
        }

        let pattern = Regex::new(&format!("(?i){}", alternatives.join("|"))).map_err(|e| {
            TrackerError::ConfigError(format!("Invalid quality-check marker: {}", e))
        })?;

        Ok(NameMarkerClassifier {
            pattern: Some(pattern),
        })
    }
}

impl Default for NameMarkerClassifier {
    fn default() -> Self {
        NameMarkerClassifier {
            pattern: Regex::new("(?i)quality").ok(),
        }
    }
}

impl MilestoneClassifier for NameMarkerClassifier {
    fn classify(&self, milestone: &Milestone) -> MilestoneKind {
        match &self.pattern {
            Some(re) if re.is_match(&milestone.name) => MilestoneKind::QualityCheck,
            _ => MilestoneKind::Standard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_marker_is_case_insensitive() {
        let classifier = NameMarkerClassifier::default();
        assert_eq!(
            classifier.classify(&Milestone::new("Final QUALITY inspection", 3)),
            MilestoneKind::QualityCheck
        );
        assert_eq!(
            classifier.classify(&Milestone::new("Sewing", 2)),
            MilestoneKind::Standard
        );
    }

    #[test]
    fn test_localized_markers() {
        let classifier = NameMarkerClassifier::new(&["quality", "Kiểm tra chất lượng"]).unwrap();
        assert_eq!(
            classifier.classify(&Milestone::new("Bước kiểm tra chất lượng", 4)),
            MilestoneKind::QualityCheck
        );
    }

    #[test]
    fn test_markers_are_literal() {
        let classifier = NameMarkerClassifier::new(&["q.c"]).unwrap();
        assert_eq!(
            classifier.classify(&Milestone::new("qxc review", 1)),
            MilestoneKind::Standard
        );
        assert_eq!(
            classifier.classify(&Milestone::new("Q.C review", 1)),
            MilestoneKind::QualityCheck
        );
    }

    #[test]
    fn test_no_markers_means_all_standard() {
        let classifier = NameMarkerClassifier::new(&["", "  "]).unwrap();
        assert_eq!(
            classifier.classify(&Milestone::new("Quality check", 1)),
            MilestoneKind::Standard
        );
    }

    #[test]
    fn test_closure_classifier() {
        let by_order = |m: &Milestone| {
            if m.sequence_order == 9 {
                MilestoneKind::QualityCheck
            } else {
                MilestoneKind::Standard
            }
        };
        assert_eq!(by_order.classify(&Milestone::new("Anything", 9)), MilestoneKind::QualityCheck);
        assert_eq!(by_order.classify(&Milestone::new("Quality", 1)), MilestoneKind::Standard);
    }
}
