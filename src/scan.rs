// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Results of checking many candidates against a filter.
use serde::Serialize;

/// Outcome for a single candidate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Verdict {
    /// The candidate as it was checked.
    pub item: String,
    /// Whether the filter reported it as possibly present.
    pub matched: bool,
}

/// Ordered verdicts for a batch of candidates, see [`crate::BloomFilter::scan`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    verdicts: Vec<Verdict>,
    positives: usize,
    negatives: usize,
}

impl ScanReport {
    /// All verdicts, in the order the candidates were given.
    pub fn verdicts(&self) -> &[Verdict] {
        &self.verdicts
    }

    /// Candidates reported as possibly present.
    pub fn matched(&self) -> impl Iterator<Item = &str> {
        self.verdicts
            .iter()
            .filter(|v| v.matched)
            .map(|v| v.item.as_str())
    }

    /// Candidates that are definitely absent.
    pub fn unmatched(&self) -> impl Iterator<Item = &str> {
        self.verdicts
            .iter()
            .filter(|v| !v.matched)
            .map(|v| v.item.as_str())
    }

    /// Number of matched candidates.
    pub fn positives(&self) -> usize {
        self.positives
    }

    /// Number of unmatched candidates.
    pub fn negatives(&self) -> usize {
        self.negatives
    }

    /// Number of candidates checked.
    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    /// Whether no candidates were checked.
    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }
}

impl Extend<Verdict> for ScanReport {
    fn extend<I: IntoIterator<Item = Verdict>>(&mut self, iter: I) {
        for verdict in iter {
            if verdict.matched {
                self.positives += 1;
            } else {
                self.negatives += 1;
            }
            self.verdicts.push(verdict);
        }
    }
}

impl FromIterator<Verdict> for ScanReport {
    fn from_iter<I: IntoIterator<Item = Verdict>>(iter: I) -> Self {
        let mut report = Self::default();
        report.extend(iter);
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(item: &str, matched: bool) -> Verdict {
        Verdict {
            item: item.to_owned(),
            matched,
        }
    }

    #[test]
    fn test_partition() {
        let report: ScanReport = [
            verdict("a", true),
            verdict("x", false),
            verdict("b", true),
            verdict("y", false),
            verdict("z", false),
        ]
        .into_iter()
        .collect();

        assert_eq!(report.len(), 5);
        assert_eq!(report.positives(), 2);
        assert_eq!(report.negatives(), 3);
        assert_eq!(report.matched().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(report.unmatched().collect::<Vec<_>>(), vec!["x", "y", "z"]);
        assert_eq!(report.verdicts()[1], verdict("x", false));
    }

    #[test]
    fn test_empty() {
        let report = ScanReport::default();

        assert!(report.is_empty());
        assert_eq!(report.positives(), 0);
        assert_eq!(report.negatives(), 0);
        assert_eq!(report.matched().next(), None);
    }

    #[test]
    fn test_serialize() {
        let report: ScanReport = vec![verdict("evil.com", true)].into_iter().collect();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "verdicts": [{ "item": "evil.com", "matched": true }],
                "positives": 1,
                "negatives": 0,
            })
        );
    }
}
