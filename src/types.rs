//! Shared identifiers, lane numbers and storage key names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Default key holding the serialized meet list.
pub const MEETS_KEY: &str = "meets";
/// Default key holding the team name text.
pub const TEAM_NAME_KEY: &str = "teamName";
/// Default key holding the ordered team member list.
pub const TEAM_MEMBERS_KEY: &str = "teamMembers";

/// Number of lanes in a pool.
pub const LANE_COUNT: u8 = 4;

/// Random 128-bit meet identifier, rendered as a hyphenated v4 UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeetId(u128);

impl MeetId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        let raw: u128 = rand::random();
        // Version nibble 4, RFC 4122 variant bits 10.
        let raw = (raw & !(0xFu128 << 76)) | (0x4u128 << 76);
        let raw = (raw & !(0x3u128 << 62)) | (0x2u128 << 62);
        Self(raw)
    }

    /// Wraps a raw value. Mostly useful for fixtures.
    pub const fn from_u128(raw: u128) -> Self {
        Self(raw)
    }

    /// Raw 128-bit value.
    pub const fn as_u128(self) -> u128 {
        self.0
    }
}

impl fmt::Display for MeetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex = format!("{:032x}", self.0);
        write!(
            f,
            "{}-{}-{}-{}-{}",
            &hex[0..8],
            &hex[8..12],
            &hex[12..16],
            &hex[16..20],
            &hex[20..32]
        )
    }
}

/// Error returned when meet id text is not a hyphenated 128-bit hex value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetIdParseError(pub String);

impl fmt::Display for MeetIdParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid meet id '{}'", self.0)
    }
}

impl std::error::Error for MeetIdParseError {}

impl FromStr for MeetId {
    type Err = MeetIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || MeetIdParseError(s.to_string());
        let groups: Vec<&str> = s.split('-').collect();
        let lens: Vec<usize> = groups.iter().map(|g| g.len()).collect();
        if lens != [8, 4, 4, 4, 12] {
            return Err(err());
        }
        let hex: String = groups.concat();
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }
        u128::from_str_radix(&hex, 16).map(Self).map_err(|_| err())
    }
}

impl Serialize for MeetId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MeetId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Pool lane number, always within `1..=LANE_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Lane(u8);

impl Lane {
    /// Returns the lane for `n`, or `None` when out of range.
    pub fn new(n: u8) -> Option<Self> {
        (1..=LANE_COUNT).contains(&n).then_some(Self(n))
    }

    /// Lane number.
    pub fn get(self) -> u8 {
        self.0
    }

    /// All lanes in ascending order.
    pub fn all() -> impl Iterator<Item = Lane> {
        (1..=LANE_COUNT).map(Lane)
    }
}

/// Lane number outside `1..=LANE_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidLane(pub u8);

impl fmt::Display for InvalidLane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lane {} is outside 1..={}", self.0, LANE_COUNT)
    }
}

impl std::error::Error for InvalidLane {}

impl TryFrom<u8> for Lane {
    type Error = InvalidLane;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Lane::new(value).ok_or(InvalidLane(value))
    }
}

impl From<Lane> for u8 {
    fn from(lane: Lane) -> Self {
        lane.0
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
