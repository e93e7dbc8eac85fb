//! Difficulty presets.
//!
//! Each preset bundles the tick interval, the score multiplier, the key its high score is
//! stored under and the label shown on the game-over overlay.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// Points for one food before the difficulty multiplier is applied.
pub const BASE_FOOD_POINTS: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

/// Tuning record carried by a [`Difficulty`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    pub interval: Duration,
    pub multiplier: f32,
    pub key: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty `{0}` (expected easy, normal or hard)")]
pub struct UnknownDifficulty(pub String);

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub const fn tuning(self) -> Tuning {
        match self {
            Difficulty::Easy => Tuning {
                interval: Duration::from_millis(200),
                multiplier: 1.0,
                key: "easy",
                label: "Easy",
            },
            Difficulty::Normal => Tuning {
                interval: Duration::from_millis(150),
                multiplier: 1.5,
                key: "normal",
                label: "Normal",
            },
            Difficulty::Hard => Tuning {
                interval: Duration::from_millis(100),
                multiplier: 2.0,
                key: "hard",
                label: "Hard",
            },
        }
    }

    pub fn interval(self) -> Duration {
        self.tuning().interval
    }

    pub fn multiplier(self) -> f32 {
        self.tuning().multiplier
    }

    /// Persistence key for this difficulty's high score.
    pub fn key(self) -> &'static str {
        self.tuning().key
    }

    pub fn label(self) -> &'static str {
        self.tuning().label
    }

    /// Score awarded per food: `round(10 * multiplier)`.
    pub fn points_per_food(self) -> u32 {
        (BASE_FOOD_POINTS * self.multiplier()).round() as u32
    }

    /// Parses a difficulty name, falling back to [`Difficulty::Normal`] for anything
    /// unrecognised.
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    /// Reads the `difficulty` parameter from a URL-style query such as
    /// `?difficulty=hard&lang=en`. Absent or unknown values give Normal.
    pub fn from_query(query: &str) -> Self {
        query
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(name, _)| *name == "difficulty")
            .map(|(_, value)| Self::parse_lenient(value))
            .unwrap_or_default()
    }
}

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownDifficulty(wanted.to_owned()))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_match_published_tuning() {
        assert_eq!(Difficulty::Easy.interval(), Duration::from_millis(200));
        assert_eq!(Difficulty::Normal.interval(), Duration::from_millis(150));
        assert_eq!(Difficulty::Hard.interval(), Duration::from_millis(100));

        assert_eq!(Difficulty::Easy.points_per_food(), 10);
        assert_eq!(Difficulty::Normal.points_per_food(), 15);
        assert_eq!(Difficulty::Hard.points_per_food(), 20);
    }

    #[test]
    fn parsing_is_case_insensitive_and_lenient() {
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(" easy ".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!(
            "nightmare".parse::<Difficulty>(),
            Err(UnknownDifficulty("nightmare".to_owned()))
        );
        assert_eq!(Difficulty::parse_lenient("nightmare"), Difficulty::Normal);
        assert_eq!(Difficulty::parse_lenient(""), Difficulty::Normal);
    }

    #[test]
    fn query_string_selects_difficulty() {
        assert_eq!(Difficulty::from_query("?difficulty=hard"), Difficulty::Hard);
        assert_eq!(Difficulty::from_query("lang=en&difficulty=easy"), Difficulty::Easy);
        assert_eq!(Difficulty::from_query("?lang=en"), Difficulty::Normal);
        assert_eq!(Difficulty::from_query("?difficulty=extreme"), Difficulty::Normal);
        assert_eq!(Difficulty::from_query(""), Difficulty::Normal);
    }

    #[test]
    fn keys_are_distinct() {
        let keys: Vec<_> = Difficulty::ALL.iter().map(|d| d.key()).collect();
        assert_eq!(keys, ["easy", "normal", "hard"]);
        assert_eq!(Difficulty::Hard.to_string(), "hard");
    }
}
