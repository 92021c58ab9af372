//! Wire types for the sentiment services

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};
use serde::Deserialize;

/// One autocomplete candidate
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Suggestion {
    pub symbol: String,
    /// Display value shown for the candidate
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub company_name: String,
}

impl Suggestion {
    pub fn new(symbol: &str, value: &str, company_name: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            value: value.to_string(),
            company_name: company_name.to_string(),
        }
    }
}

/// An entry of the recent-searches list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RecentSearch {
    pub symbol: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub timestamp: String,
}

impl RecentSearch {
    /// Time elapsed since the search, if the timestamp can be parsed
    ///
    /// Accepts RFC 3339 and naive ISO 8601 timestamps (taken as UTC).
    pub fn age(&self, now: DateTime<Utc>) -> Option<TimeDelta> {
        let at = parse_timestamp(&self.timestamp)?;
        Some((now - at).max(TimeDelta::zero()))
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}

/// Compact relative age: "just now", "5m ago", "3h ago", "2d ago"
pub fn format_age(age: TimeDelta) -> String {
    let minutes = age.num_minutes();
    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{}m ago", minutes)
    } else if age.num_hours() < 24 {
        format!("{}h ago", age.num_hours())
    } else {
        format!("{}d ago", age.num_days())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Company {
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
}

/// Aggregate sentiment across all analysed articles
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct SentimentSummary {
    /// "bullish", "bearish" or "neutral"
    pub sentiment_label: String,
    /// Signed score, roughly -10..=10
    pub overall_score: f64,
    pub bullish: u32,
    pub neutral: u32,
    pub bearish: u32,
    /// Model confidence in 0..=1
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct Article {
    pub title: String,
    pub url: String,
    pub source: String,
    pub published: String,
    pub sentiment: String,
}

impl Article {
    /// Publication date as "Jan 5, 2025", or the raw string if unparsable
    pub fn published_date(&self) -> String {
        match parse_timestamp(&self.published) {
            Some(dt) => dt.format("%b %-d, %Y").to_string(),
            None => self.published.clone(),
        }
    }
}

/// Result of the sentiment pipeline for one symbol
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PipelineResponse {
    pub company: Company,
    #[serde(default)]
    pub article_count: u32,
    #[serde(default)]
    pub sentiment_summary: SentimentSummary,
    #[serde(default)]
    pub articles: Vec<Article>,
}
