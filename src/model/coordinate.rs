use std::{fmt::Display, str::FromStr, sync::OnceLock};

use regex_lite::Regex;
use serde::{de::Visitor, Deserialize, Deserializer, Serialize, Serializer};

use crate::model::ParseError;

/// Identifies one resolved dependency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct Coordinate {
    pub group: String,
    pub artifact: String,
    pub version: String,
}

impl Coordinate {
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Coordinate {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
        }
    }

    pub fn from_gav(gav: &str) -> Result<Coordinate, ParseError> {
        static RE: OnceLock<Regex> = OnceLock::new();
        let re = RE.get_or_init(|| {
            Regex::new(r"^(?P<group>[^:\s]+):(?P<artifact>[^:\s]+):(?P<version>[^:\s]+)$")
                .unwrap()
        });
        let captures = re
            .captures(gav.trim())
            .ok_or_else(|| ParseError::InvalidCoordinate(gav.to_string()))?;

        Ok(Coordinate::new(
            &captures["group"],
            &captures["artifact"],
            &captures["version"],
        ))
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)
    }
}

impl FromStr for Coordinate {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Coordinate::from_gav(value)
    }
}

impl Serialize for Coordinate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CoordinateVisitor;

        impl<'de> Visitor<'de> for CoordinateVisitor {
            type Value = Coordinate;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a `group:artifact:version` string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Coordinate::from_gav(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(CoordinateVisitor)
    }
}

/// A coordinate template of the form `group[:artifact[:version]]`.
///
/// Any segment may be `*`, and omitted trailing segments match anything.
/// Patterns are kept as written; there is no validation step.
#[derive(Clone, Hash, Deserialize, Serialize, Debug, PartialEq, Eq, Ord, PartialOrd)]
#[serde(transparent)]
pub struct Pattern(String);

impl Pattern {
    pub fn new(s: impl Into<String>) -> Self {
        Pattern(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Pattern {
    fn from(s: String) -> Self {
        Pattern(s)
    }
}

impl From<&str> for Pattern {
    fn from(s: &str) -> Self {
        Pattern(s.to_string())
    }
}
