//! Reporting granularity of a forecast

use crate::error::{Result, WindowError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Time frequency a forecast is reported at.
///
/// Each variant has a single-letter code (`H`, `D`, `W`, `M`) and a
/// display name (`hourly`, `daily`, `weekly`, `monthly`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeGranularity {
    /// Hourly data
    Hourly,
    /// Daily data
    Daily,
    /// Weekly data
    Weekly,
    /// Monthly data
    Monthly,
}

impl TimeGranularity {
    /// Every granularity, in code order H, D, W, M
    pub const ALL: [TimeGranularity; 4] = [
        TimeGranularity::Hourly,
        TimeGranularity::Daily,
        TimeGranularity::Weekly,
        TimeGranularity::Monthly,
    ];

    /// Canonical code of the granularity
    pub fn code(&self) -> &'static str {
        match self {
            TimeGranularity::Hourly => "H",
            TimeGranularity::Daily => "D",
            TimeGranularity::Weekly => "W",
            TimeGranularity::Monthly => "M",
        }
    }

    /// Display name of the granularity
    pub fn name(&self) -> &'static str {
        match self {
            TimeGranularity::Hourly => "hourly",
            TimeGranularity::Daily => "daily",
            TimeGranularity::Weekly => "weekly",
            TimeGranularity::Monthly => "monthly",
        }
    }

    /// Resolve a canonical code. Codes are case-sensitive and there is no
    /// fallback granularity.
    pub fn from_code(code: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|granularity| granularity.code() == code)
            .ok_or_else(|| {
                let codes: Vec<&str> = Self::ALL.iter().map(|g| g.code()).collect();
                WindowError::InvalidConfiguration(format!(
                    "Bad time granularity passed:{}, Possible values are: {:?}",
                    code, codes
                ))
            })
    }
}

impl FromStr for TimeGranularity {
    type Err = WindowError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s)
    }
}

impl fmt::Display for TimeGranularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for TimeGranularity {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for TimeGranularity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Self::from_code(&code).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_and_names() {
        assert_eq!(TimeGranularity::Hourly.code(), "H");
        assert_eq!(TimeGranularity::Monthly.name(), "monthly");
        assert_eq!(TimeGranularity::Weekly.to_string(), "weekly");
    }

    #[test]
    fn test_from_code() {
        for granularity in TimeGranularity::ALL {
            assert_eq!(
                TimeGranularity::from_code(granularity.code()).unwrap(),
                granularity
            );
        }
        assert_eq!("D".parse::<TimeGranularity>().unwrap(), TimeGranularity::Daily);
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        for code in ["m", "Y", "", "daily"] {
            let err = TimeGranularity::from_code(code).unwrap_err();
            assert!(matches!(err, WindowError::InvalidConfiguration(_)));
        }

        let message = TimeGranularity::from_code("Q").unwrap_err().to_string();
        assert!(message.contains("Q"));
        assert!(message.contains("[\"H\", \"D\", \"W\", \"M\"]"));
    }

    #[test]
    fn test_serde_uses_code() {
        let json = serde_json::to_string(&TimeGranularity::Weekly).unwrap();
        assert_eq!(json, "\"W\"");

        let parsed: TimeGranularity = serde_json::from_str("\"H\"").unwrap();
        assert_eq!(parsed, TimeGranularity::Hourly);

        assert!(serde_json::from_str::<TimeGranularity>("\"X\"").is_err());
    }
}
