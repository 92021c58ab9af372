use ratatui::style::Color;

use crate::theme;

/// Market sentiment bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentLabel {
    Bullish,
    Bearish,
    Neutral,
}

impl SentimentLabel {
    /// Parse a label reported by the pipeline; unknown labels are neutral
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "bullish" => SentimentLabel::Bullish,
            "bearish" => SentimentLabel::Bearish,
            _ => SentimentLabel::Neutral,
        }
    }

    /// Loose classification of free text by keyword
    pub fn classify_hint(text: &str) -> Self {
        let lower = text.to_lowercase();
        if lower.contains("bull") || lower.contains("positive") {
            SentimentLabel::Bullish
        } else if lower.contains("bear") || lower.contains("negative") {
            SentimentLabel::Bearish
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SentimentLabel::Bullish => "Bullish",
            SentimentLabel::Bearish => "Bearish",
            SentimentLabel::Neutral => "Neutral",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            SentimentLabel::Bullish => theme::sentiment::BULLISH,
            SentimentLabel::Bearish => theme::sentiment::BEARISH,
            SentimentLabel::Neutral => theme::sentiment::NEUTRAL,
        }
    }
}
