use std::fmt;

use serde::{Deserialize, Serialize};

/// Video quality tag, serialized in its canonical casing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    /// 4K marketing tag
    #[serde(rename = "4K")]
    FourK,
    /// 2160p (Ultra HD)
    #[serde(rename = "2160p")]
    UHD2160,
    /// 1080p (Full HD)
    #[serde(rename = "1080p")]
    FHD1080,
    /// 720p (High Definition)
    #[serde(rename = "720p")]
    HD720,
    /// 480p (Standard Definition)
    #[serde(rename = "480p")]
    SD480,
}

impl Quality {
    /// Maps a raw token such as `"1080P"` or `"4k"` to its quality tag.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "4k" => Some(Self::FourK),
            "2160p" => Some(Self::UHD2160),
            "1080p" => Some(Self::FHD1080),
            "720p" => Some(Self::HD720),
            "480p" => Some(Self::SD480),
            _ => None,
        }
    }

    /// The canonical display form: digits plus a lowercase `p`, or `4K`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FourK => "4K",
            Self::UHD2160 => "2160p",
            Self::FHD1080 => "1080p",
            Self::HD720 => "720p",
            Self::SD480 => "480p",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_token_is_case_insensitive() {
        assert_eq!(Quality::from_token("4k"), Some(Quality::FourK));
        assert_eq!(Quality::from_token("4K"), Some(Quality::FourK));
        assert_eq!(Quality::from_token("1080P"), Some(Quality::FHD1080));
        assert_eq!(Quality::from_token("720p"), Some(Quality::HD720));
        assert_eq!(Quality::from_token("576p"), None);
    }

    #[test]
    fn quality_display_is_canonical() {
        assert_eq!(Quality::FourK.to_string(), "4K");
        assert_eq!(Quality::UHD2160.to_string(), "2160p");
        assert_eq!(Quality::FHD1080.to_string(), "1080p");
        assert_eq!(Quality::SD480.to_string(), "480p");
    }

    #[test]
    fn quality_serializes_as_canonical_string() {
        assert_eq!(serde_json::to_string(&Quality::FourK).unwrap(), "\"4K\"");
        assert_eq!(serde_json::to_string(&Quality::HD720).unwrap(), "\"720p\"");
        let back: Quality = serde_json::from_str("\"1080p\"").unwrap();
        assert_eq!(back, Quality::FHD1080);
    }
}
