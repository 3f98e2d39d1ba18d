//! Fuzzy matching implementation for contact search.
//!
//! This module provides contact matching with:
//! - Exact and partial matching on phone numbers
//! - Fuzzy name matching (substring and Levenshtein distance)
//! - Confidence scoring (0-100 scale)

use crate::models::{AddressBook, Record};

/// A match result containing a record and its confidence score.
#[derive(Debug, Clone)]
pub struct MatchResult<'a> {
    /// The matched record
    pub record: &'a Record,

    /// Confidence score (0-100, where 100 is an exact match)
    pub confidence: u8,

    /// Type of match that produced this result
    pub match_type: MatchType,
}

/// The type of match that was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    /// Phone number equal to the query
    ExactPhone,

    /// Phone number containing the query
    PartialPhone,

    /// Fuzzy name match
    FuzzyName,
}

/// Contact matcher with fuzzy and exact matching capabilities.
#[derive(Debug, Default)]
pub struct ContactMatcher;

impl ContactMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Find records in `book` matching `query`.
    ///
    /// A query made only of digits is matched against phone numbers;
    /// anything else is matched against names.
    ///
    /// # Returns
    /// Matches sorted by confidence (highest first), then by name, at most
    /// `max_results` of them.
    pub fn find_matches<'a>(
        &self,
        query: &str,
        book: &'a AddressBook,
        max_results: usize,
        min_confidence: u8,
    ) -> Vec<MatchResult<'a>> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }
        let is_phone_query = query.chars().all(|c| c.is_ascii_digit());

        let mut results: Vec<MatchResult<'a>> = book
            .iter()
            .filter_map(|record| {
                let (confidence, match_type) = if is_phone_query {
                    Self::match_phone(query, record)?
                } else {
                    (
                        Self::fuzzy_match_name(query, record.name().as_str())?,
                        MatchType::FuzzyName,
                    )
                };
                (confidence >= min_confidence).then_some(MatchResult {
                    record,
                    confidence,
                    match_type,
                })
            })
            .collect();

        results.sort_by(|a, b| {
            b.confidence
                .cmp(&a.confidence)
                .then_with(|| a.record.name().as_str().cmp(b.record.name().as_str()))
        });
        results.truncate(max_results);

        results
    }

    /// Match phone numbers: 100 for an equal number, 90 for a number that
    /// contains the query.
    fn match_phone(query: &str, record: &Record) -> Option<(u8, MatchType)> {
        if record.find_phone(query).is_some() {
            return Some((100, MatchType::ExactPhone));
        }
        record
            .phones()
            .iter()
            .any(|phone| phone.as_str().contains(query))
            .then_some((90, MatchType::PartialPhone))
    }

    /// Fuzzy match names.
    ///
    /// Returns confidence score (0-95) if matched, None otherwise.
    fn fuzzy_match_name(query: &str, name: &str) -> Option<u8> {
        let score = Self::calculate_fuzzy_score(&Self::normalize(query), &Self::normalize(name));
        (score > 0).then_some(score)
    }

    /// Calculate fuzzy match score using Levenshtein distance and substring matching.
    ///
    /// Returns a confidence score from 0-95 (95 max to reserve 100 for exact phone matches).
    fn calculate_fuzzy_score(query: &str, target: &str) -> u8 {
        if query.is_empty() || target.is_empty() {
            return 0;
        }

        if query == target {
            return 95;
        }

        let query_len = query.chars().count();
        let target_len = target.chars().count();

        // Contains match (substring)
        if target.contains(query) {
            let ratio = query_len as f64 / target_len as f64;
            return (85.0 * ratio + 10.0) as u8;
        }

        let distance = Self::levenshtein_distance(query, target);
        let max_len = query_len.max(target_len);

        if distance as f64 / max_len as f64 > 0.5 {
            // Too many differences
            return 0;
        }

        let similarity = 1.0 - (distance as f64 / max_len as f64);
        (similarity * 85.0) as u8
    }

    /// Calculate Levenshtein distance between two strings.
    fn levenshtein_distance(s1: &str, s2: &str) -> usize {
        let s1_chars: Vec<char> = s1.chars().collect();
        let s2_chars: Vec<char> = s2.chars().collect();

        if s1_chars.is_empty() {
            return s2_chars.len();
        }
        if s2_chars.is_empty() {
            return s1_chars.len();
        }

        // Single-row dynamic programming
        let mut previous: Vec<usize> = (0..=s2_chars.len()).collect();
        let mut current = vec![0; s2_chars.len() + 1];

        for (i, c1) in s1_chars.iter().enumerate() {
            current[0] = i + 1;
            for (j, c2) in s2_chars.iter().enumerate() {
                let cost = usize::from(c1 != c2);
                current[j + 1] = (previous[j + 1] + 1)
                    .min(current[j] + 1)
                    .min(previous[j] + cost);
            }
            std::mem::swap(&mut previous, &mut current);
        }

        previous[s2_chars.len()]
    }

    /// Normalize a name for fuzzy matching.
    pub fn normalize(name: &str) -> String {
        name.trim().to_lowercase()
    }
}
