use std::fmt;

// ---------------------------------------------------------------------------
// Tone – a named colour band
// ---------------------------------------------------------------------------

/// Colour band returned by the classifiers. The UI maps each tone to a
/// concrete colour (see `color::tone_color`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Green,
    Blue,
    Yellow,
    Orange,
    Red,
}

impl Tone {
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Green => "green",
            Tone::Blue => "blue",
            Tone::Yellow => "yellow",
            Tone::Orange => "orange",
            Tone::Red => "red",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RatingLabel – textual quality label
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RatingLabel {
    Poor,
    Average,
    Good,
    Great,
    Excellent,
}

impl fmt::Display for RatingLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RatingLabel::Excellent => "Excellent",
            RatingLabel::Great => "Great",
            RatingLabel::Good => "Good",
            RatingLabel::Average => "Average",
            RatingLabel::Poor => "Poor",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// Classifiers
// ---------------------------------------------------------------------------

/// Confidence band, lower bounds inclusive: `[0.8, ∞)`, `[0.6, 0.8)`,
/// `[0.4, 0.6)`, everything else.
pub fn confidence_color(confidence: f64) -> Tone {
    if confidence >= 0.8 {
        Tone::Green
    } else if confidence >= 0.6 {
        Tone::Blue
    } else if confidence >= 0.4 {
        Tone::Yellow
    } else {
        Tone::Red
    }
}

/// Badge colour for a 0–10 rating.
///
/// Thresholds are independent of [`rating_label`]; a 6.5 rating is "Good"
/// but gets an orange badge.
pub fn rating_badge_color(rating: f64) -> Tone {
    if rating >= 7.0 {
        Tone::Yellow
    } else if rating >= 6.0 {
        Tone::Orange
    } else {
        Tone::Red
    }
}

/// Quality label for a 0–10 rating.
pub fn rating_label(rating: f64) -> RatingLabel {
    if rating >= 8.5 {
        RatingLabel::Excellent
    } else if rating >= 7.5 {
        RatingLabel::Great
    } else if rating >= 6.5 {
        RatingLabel::Good
    } else if rating >= 5.0 {
        RatingLabel::Average
    } else {
        RatingLabel::Poor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_bands_are_lower_inclusive() {
        assert_eq!(confidence_color(0.8), Tone::Green);
        assert_eq!(confidence_color(0.79999), Tone::Blue);
        assert_eq!(confidence_color(0.6), Tone::Blue);
        assert_eq!(confidence_color(0.4), Tone::Yellow);
        assert_eq!(confidence_color(0.39), Tone::Red);
        assert_eq!(confidence_color(1.5), Tone::Green);
        assert_eq!(confidence_color(-1.0), Tone::Red);
    }

    #[test]
    fn test_rating_badge() {
        assert_eq!(rating_badge_color(9.0), Tone::Yellow);
        assert_eq!(rating_badge_color(7.0), Tone::Yellow);
        assert_eq!(rating_badge_color(6.5), Tone::Orange);
        assert_eq!(rating_badge_color(5.9), Tone::Red);
    }

    #[test]
    fn test_rating_label() {
        assert_eq!(rating_label(8.8), RatingLabel::Excellent);
        assert_eq!(rating_label(8.5), RatingLabel::Excellent);
        assert_eq!(rating_label(7.5), RatingLabel::Great);
        assert_eq!(rating_label(6.5), RatingLabel::Good);
        assert_eq!(rating_label(5.0), RatingLabel::Average);
        assert_eq!(rating_label(4.99), RatingLabel::Poor);
        assert_eq!(RatingLabel::Great.to_string(), "Great");
    }

    #[test]
    fn test_badge_and_label_disagree_between_thresholds() {
        // 6.5 is "Good" but below the yellow badge threshold
        assert_eq!(rating_label(6.5), RatingLabel::Good);
        assert_eq!(rating_badge_color(6.5), Tone::Orange);
    }
}
