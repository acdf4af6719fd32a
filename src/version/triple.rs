//! `MAJOR.MINOR.PATCH` version triples
//!
//! Manifests store versions as `[major, minor, patch]` arrays while the
//! registry and `package.json` use the dotted form; this type bridges both.
//! Components are unbounded digit runs, so any well-formed registry string
//! parses; only components that fit a `u64` can be written to a manifest.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, ser};

use crate::version::error::VersionError;

/// A non-negative integer of any size, kept as its digits without leading zeros
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionComponent(String);

impl VersionComponent {
    /// `None` unless `digits` is a non-empty run of ASCII digits
    pub fn from_digits(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let trimmed = digits.trim_start_matches('0');
        Some(Self(if trimmed.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        }))
    }

    pub fn as_u64(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl From<u64> for VersionComponent {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl Ord for VersionComponent {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for VersionComponent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for VersionComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for VersionComponent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_u64() {
            Some(value) => serializer.serialize_u64(value),
            None => Err(<S::Error as ser::Error>::custom(format!(
                "version component {} does not fit a manifest integer",
                self.0
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for VersionComponent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u64::deserialize(deserializer).map(Self::from)
    }
}

/// Three non-negative version components
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "[VersionComponent; 3]", into = "[VersionComponent; 3]")]
pub struct VersionTriple {
    pub major: VersionComponent,
    pub minor: VersionComponent,
    pub patch: VersionComponent,
}

impl VersionTriple {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major: major.into(),
            minor: minor.into(),
            patch: patch.into(),
        }
    }

    /// Returns true if `input` is a well-formed `MAJOR.MINOR.PATCH` string
    pub fn is_valid(input: &str) -> bool {
        input.parse::<Self>().is_ok()
    }
}

impl FromStr for VersionTriple {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || VersionError::InvalidTriple(s.to_string());

        let mut parts = s.split('.');
        let mut next = || -> Result<VersionComponent, VersionError> {
            parts
                .next()
                .and_then(VersionComponent::from_digits)
                .ok_or_else(invalid)
        };

        let triple = Self {
            major: next()?,
            minor: next()?,
            patch: next()?,
        };
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(triple)
    }
}

impl fmt::Display for VersionTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl From<[VersionComponent; 3]> for VersionTriple {
    fn from([major, minor, patch]: [VersionComponent; 3]) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl From<VersionTriple> for [VersionComponent; 3] {
    fn from(triple: VersionTriple) -> Self {
        [triple.major, triple.minor, triple.patch]
    }
}
