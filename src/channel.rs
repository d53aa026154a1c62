// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: (C) 2025 Cranky Kernel <crankykernel@proton.me>

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// What a channel entry actually is. Only live channels get a guide, but the
/// kind also feeds genre classification (movie entries map to the cinema pool).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    Live,
    Movie,
    Series,
}

impl ChannelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Movie => "movie",
            Self::Series => "series",
        }
    }

    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "live" => Ok(Self::Live),
            "movie" | "movies" | "vod" => Ok(Self::Movie),
            "series" | "tv" => Ok(Self::Series),
            _ => anyhow::bail!("Invalid kind: {}. Use 'live', 'movie', or 'series'", s),
        }
    }
}

impl std::fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub category_id: Option<String>,
    pub kind: ChannelKind,
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub category_id: String,
    pub category_name: String,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.category_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ChannelKind::Live).unwrap(),
            "\"live\""
        );
        assert_eq!(
            serde_json::from_str::<ChannelKind>("\"series\"").unwrap(),
            ChannelKind::Series
        );
    }

    #[test]
    fn kind_parses_aliases() {
        assert_eq!(ChannelKind::from_str("VOD").unwrap(), ChannelKind::Movie);
        assert_eq!(ChannelKind::from_str("tv").unwrap(), ChannelKind::Series);
        assert!(ChannelKind::from_str("radio").is_err());
    }

    #[test]
    fn channel_accepts_missing_category() {
        let channel: Channel =
            serde_json::from_str(r#"{"id": 7, "name": "Local TV", "kind": "live"}"#).unwrap();
        assert_eq!(channel.category_id, None);
    }
}
