//! Catalogue of models the widget can talk to.
//!
//! The set is closed: four Claude models, two Sonnet tiers, one Opus and one
//! Haiku. Display names are used for UI only; the wire id is what the
//! backend receives.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ModelId {
    #[serde(rename = "claude-sonnet-4-20250514")]
    Sonnet4,
    #[serde(rename = "claude-3-7-sonnet-20250219")]
    Sonnet37,
    #[serde(rename = "claude-opus-4-20250514")]
    Opus4,
    #[default]
    #[serde(rename = "claude-3-haiku-20240307")]
    Haiku3,
}

impl ModelId {
    pub const ALL: [ModelId; 4] = [
        ModelId::Sonnet4,
        ModelId::Sonnet37,
        ModelId::Opus4,
        ModelId::Haiku3,
    ];

    /// Identifier sent in the `model` field of a request.
    pub fn wire_id(self) -> &'static str {
        match self {
            ModelId::Sonnet4 => "claude-sonnet-4-20250514",
            ModelId::Sonnet37 => "claude-3-7-sonnet-20250219",
            ModelId::Opus4 => "claude-opus-4-20250514",
            ModelId::Haiku3 => "claude-3-haiku-20240307",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ModelId::Sonnet4 => "Claude Sonnet 4",
            ModelId::Sonnet37 => "Claude Sonnet 3.7",
            ModelId::Opus4 => "Claude Opus 4",
            ModelId::Haiku3 => "Claude Haiku 3",
        }
    }

    /// Short label for the panel header badge.
    pub fn badge(self) -> &'static str {
        match self {
            ModelId::Sonnet4 => "Sonnet 4",
            ModelId::Sonnet37 => "Sonnet 3.7",
            ModelId::Opus4 => "Opus 4",
            ModelId::Haiku3 => "Haiku",
        }
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown model id: {0}")]
pub struct UnknownModel(pub String);

impl FromStr for ModelId {
    type Err = UnknownModel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ModelId::ALL
            .into_iter()
            .find(|m| m.wire_id() == s)
            .ok_or_else(|| UnknownModel(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_haiku() {
        assert_eq!(ModelId::default(), ModelId::Haiku3);
    }

    #[test]
    fn parses_every_wire_id() {
        for model in ModelId::ALL {
            assert_eq!(model.wire_id().parse::<ModelId>().unwrap(), model);
        }
    }

    #[test]
    fn rejects_unknown_id() {
        let err = "gpt-4o".parse::<ModelId>().unwrap_err();
        assert_eq!(err.to_string(), "unknown model id: gpt-4o");
    }

    #[test]
    fn serde_uses_wire_id() {
        let json = serde_json::to_string(&ModelId::Opus4).unwrap();
        assert_eq!(json, "\"claude-opus-4-20250514\"");
    }

    #[test]
    fn two_sonnet_tiers() {
        let sonnets = ModelId::ALL
            .iter()
            .filter(|m| m.wire_id().contains("sonnet"))
            .count();
        assert_eq!(sonnets, 2);
    }
}
