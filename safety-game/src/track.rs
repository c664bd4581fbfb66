use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TrackParseError;

/// Themed sequence of scenarios a player can pick from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Track {
    Flood,
    Fire,
}

impl Track {
    /// Every track, in menu order.
    pub const ALL: [Self; 2] = [Self::Flood, Self::Fire];

    /// Stable lowercase key used in assets, URLs, and CLI flags.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Flood => "flood",
            Self::Fire => "fire",
        }
    }

    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Flood => "🌊",
            Self::Fire => "🔥",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Flood => "Наводнение",
            Self::Fire => "Пожар",
        }
    }

    #[must_use]
    pub const fn blurb(self) -> &'static str {
        match self {
            Self::Flood => "Узнай, как вести себя во время наводнения и спастись от большой воды",
            Self::Fire => "Научись действовать при пожаре и помогать другим в безопасности",
        }
    }

    /// Colour family used by the renderer for backgrounds and borders.
    #[must_use]
    pub const fn theme(self) -> TrackTheme {
        match self {
            Self::Flood => TrackTheme::Blue,
            Self::Fire => TrackTheme::Orange,
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Track {
    type Err = TrackParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flood" => Ok(Self::Flood),
            "fire" => Ok(Self::Fire),
            other => Err(TrackParseError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackTheme {
    Blue,
    Orange,
}

impl TrackTheme {
    /// Tailwind colour name for this theme.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Orange => "orange",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_from_str() {
        for track in Track::ALL {
            assert_eq!(track.key().parse::<Track>().unwrap(), track);
        }
        assert_eq!(" FIRE ".parse::<Track>().unwrap(), Track::Fire);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = "earthquake".parse::<Track>().unwrap_err();
        assert_eq!(err.to_string(), "unknown track 'earthquake'");
    }

    #[test]
    fn serde_uses_lowercase_keys() {
        let json = serde_json::to_string(&Track::Flood).unwrap();
        assert_eq!(json, "\"flood\"");
        let parsed: Track = serde_json::from_str("\"fire\"").unwrap();
        assert_eq!(parsed, Track::Fire);
    }

    #[test]
    fn metadata_differs_per_track() {
        assert_ne!(Track::Flood.emoji(), Track::Fire.emoji());
        assert_eq!(Track::Flood.theme().color(), "blue");
        assert_eq!(Track::Fire.theme().color(), "orange");
    }
}
