use serde::{Deserialize, Serialize};

/// Per-side split of a `"N-M"` score text (home-away tally)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreLine {
    pub home: Option<String>,
    pub away: Option<String>,
}

impl ScoreLine {
    /// Splits score text on its first `-`.
    ///
    /// Text without a `-` has no per-side values. With several dashes the
    /// away side keeps the remainder, so `"3-2-1"` is home `3`, away `2-1`.
    /// Sides are trimmed and an empty side reads as absent.
    pub fn parse(score_text: Option<&str>) -> Self {
        let Some((home, away)) = score_text.and_then(|text| text.split_once('-')) else {
            return Self::default();
        };

        Self {
            home: side(home),
            away: side(away),
        }
    }

    pub fn home_points(&self) -> Option<u32> {
        self.home.as_deref().and_then(|side| side.parse().ok())
    }

    pub fn away_points(&self) -> Option<u32> {
        self.away.as_deref().and_then(|side| side.parse().ok())
    }

    /// True when neither side could be read
    pub fn is_empty(&self) -> bool {
        self.home.is_none() && self.away.is_none()
    }
}

fn side(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}
