//! Traditional-color source regions.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A traditional-color locale. The short code doubles as the bucket key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Chinese traditional colors, served pre-structured upstream.
    Cn,
    /// Japanese traditional colors, scraped from HTML + CSS.
    Jp,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Cn, Locale::Jp];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Cn => "cn",
            Locale::Jp => "jp",
        }
    }

    /// Bucket key the palette of this locale is cached under.
    pub fn bucket_key(&self) -> &'static str {
        self.as_str()
    }
}

impl FromStr for Locale {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cn" => Ok(Locale::Cn),
            "jp" => Ok(Locale::Jp),
            other => Err(CoreError::UnknownLocale(other.to_string())),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_as_str() {
        assert_eq!(Locale::Cn.as_str(), "cn");
        assert_eq!(Locale::Jp.as_str(), "jp");
        assert_eq!(Locale::Jp.bucket_key(), "jp");
    }

    #[test]
    fn test_locale_from_str() {
        assert_eq!("cn".parse::<Locale>().unwrap(), Locale::Cn);
        assert_eq!(" JP ".parse::<Locale>().unwrap(), Locale::Jp);
        assert!("kr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_locale_serde() {
        assert_eq!(serde_json::to_string(&Locale::Cn).unwrap(), "\"cn\"");
        let jp: Locale = serde_json::from_str("\"jp\"").unwrap();
        assert_eq!(jp, Locale::Jp);
    }
}
