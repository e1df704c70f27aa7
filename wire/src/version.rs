//! Protocol versions that carry STREAM frames.

use std::fmt;
use std::str::FromStr;

use crate::error::VersionError;

/// A supported protocol version.
///
/// Discriminants index the dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Version {
    Q035 = 0,
    Q037 = 1,
    Q038 = 2,
    Q039 = 3,
    Q041 = 4,
}

impl Version {
    /// Every supported version, oldest first.
    pub const ALL: [Self; 5] = [Self::Q035, Self::Q037, Self::Q038, Self::Q039, Self::Q041];

    /// Number of supported versions.
    pub const COUNT: usize = Self::ALL.len();

    /// Returns the 4-character version string, e.g. `"Q039"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Q035 => "Q035",
            Self::Q037 => "Q037",
            Self::Q038 => "Q038",
            Self::Q039 => "Q039",
            Self::Q041 => "Q041",
        }
    }

    /// Returns the version tag as sent on the wire: the ASCII string read
    /// as a big-endian `u32`.
    #[must_use]
    pub const fn tag(self) -> u32 {
        let b = self.as_str().as_bytes();
        u32::from_be_bytes([b[0], b[1], b[2], b[3]])
    }

    /// Looks up a wire version tag.
    pub fn from_tag(tag: u32) -> Result<Self, VersionError> {
        Self::ALL
            .into_iter()
            .find(|version| version.tag() == tag)
            .ok_or(VersionError::Unsupported { tag })
    }

    /// Returns the dispatch table index.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let bytes: [u8; 4] = token
            .as_bytes()
            .try_into()
            .map_err(|_| VersionError::Malformed {
                token: token.to_string(),
            })?;
        Self::from_tag(u32::from_be_bytes(bytes))
    }
}
