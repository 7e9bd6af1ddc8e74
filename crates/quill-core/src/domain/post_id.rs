use std::fmt;
use std::str::FromStr;

use bson::oid::ObjectId;
use thiserror::Error;

/// Store-assigned post identifier, rendered as 24 hex characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PostId(ObjectId);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {} hexadecimal characters", PostId::HEX_LEN)]
pub struct ParsePostIdError;

impl PostId {
    pub const HEX_LEN: usize = 24;

    /// Mint a fresh identifier the way the document store does.
    pub fn generate() -> Self {
        Self(ObjectId::new())
    }

    pub const fn object_id(&self) -> ObjectId {
        self.0
    }
}

impl From<ObjectId> for PostId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl FromStr for PostId {
    type Err = ParsePostIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectId::parse_str(s).map(Self).map_err(|_| ParsePostIdError)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_hex())
    }
}
