//! Cosmetic anger levels derived from the session delta

use serde::{Deserialize, Serialize};

use crate::consts::{ANGRY_THRESHOLD, ANNOYED_THRESHOLD};

/// How upset a player's character looks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AngerLevel {
    #[default]
    Neutral,
    Annoyed,
    Angry,
}

impl AngerLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AngerLevel::Neutral => "neutral",
            AngerLevel::Annoyed => "annoyed",
            AngerLevel::Angry => "angry",
        }
    }
}

/// Deficits at which a losing player becomes annoyed / angry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AngerThresholds {
    pub annoyed: u64,
    pub angry: u64,
}

impl Default for AngerThresholds {
    fn default() -> Self {
        Self {
            annoyed: ANNOYED_THRESHOLD,
            angry: ANGRY_THRESHOLD,
        }
    }
}

impl AngerThresholds {
    /// Level for a player who is behind by `deficit` points
    pub fn level(&self, deficit: u64) -> AngerLevel {
        if deficit >= self.angry {
            AngerLevel::Angry
        } else if deficit >= self.annoyed {
            AngerLevel::Annoyed
        } else {
            AngerLevel::Neutral
        }
    }
}

/// Anger level of each player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AngerLevels {
    pub mike_anger: AngerLevel,
    pub preeta_anger: AngerLevel,
}

impl AngerLevels {
    /// Higher score loses, so a positive delta can only upset Mike and a
    /// negative one only Preeta.
    pub fn from_delta(delta: i64, thresholds: &AngerThresholds) -> Self {
        let level = thresholds.level(delta.unsigned_abs());
        match delta.signum() {
            1 => Self {
                mike_anger: level,
                preeta_anger: AngerLevel::Neutral,
            },
            -1 => Self {
                mike_anger: AngerLevel::Neutral,
                preeta_anger: level,
            },
            _ => Self::default(),
        }
    }
}
