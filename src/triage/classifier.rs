// SPDX-License-Identifier: MIT

//! Keyword classifier that picks the routing branch for a ticket

use serde::{Deserialize, Serialize};
use std::fmt;

/// Keywords that mark a ticket as urgent
pub const URGENT_KEYWORDS: [&str; 5] = ["payment", "crash", "down", "security", "failed"];

/// Outcome of classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteLabel {
    Senior,
    Junior,
}

impl RouteLabel {
    /// Id of the workflow node this label routes to
    pub fn node(&self) -> &'static str {
        match self {
            RouteLabel::Senior => "senior",
            RouteLabel::Junior => "junior",
        }
    }
}

impl fmt::Display for RouteLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.node())
    }
}

/// Classify an issue description.
///
/// Case-insensitive substring match against [`URGENT_KEYWORDS`], so
/// "Crashes" fires on "crash". Total over every input, including `""`.
pub fn classify(issue: &str) -> RouteLabel {
    let lowered = issue.to_lowercase();
    if URGENT_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
        RouteLabel::Senior
    } else {
        RouteLabel::Junior
    }
}

/// Keywords found in `issue`, in keyword-list order
pub fn matched_keywords(issue: &str) -> Vec<&'static str> {
    let lowered = issue.to_lowercase();
    URGENT_KEYWORDS
        .iter()
        .copied()
        .filter(|kw| lowered.contains(kw))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_keyword_routes_senior() {
        for kw in URGENT_KEYWORDS {
            assert_eq!(classify(kw), RouteLabel::Senior, "keyword {}", kw);
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("SECURITY breach suspected"), RouteLabel::Senior);
        assert_eq!(classify("Site is DoWn"), RouteLabel::Senior);
    }

    #[test]
    fn test_substring_match() {
        assert_eq!(classify("crashing crashed crashes"), RouteLabel::Senior);
        // "download" contains "down"
        assert_eq!(classify("where is the download link"), RouteLabel::Senior);
    }

    #[test]
    fn test_routine_routes_junior() {
        assert_eq!(
            classify("How do I change my display name?"),
            RouteLabel::Junior
        );
    }

    #[test]
    fn test_empty_is_junior() {
        assert_eq!(classify(""), RouteLabel::Junior);
    }

    #[test]
    fn test_matched_keywords_order() {
        assert_eq!(
            matched_keywords("Payment failed and app crashed"),
            vec!["payment", "crash", "failed"]
        );
        assert!(matched_keywords("hello").is_empty());
    }

    #[test]
    fn test_label_node_names() {
        assert_eq!(RouteLabel::Senior.node(), "senior");
        assert_eq!(RouteLabel::Junior.to_string(), "junior");
    }
}
