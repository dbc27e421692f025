use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};

use crate::Error;

/// Identifiers arrive from the data service either as JSON numbers or as
/// numeric strings. Both shapes collapse into one canonical value here so the
/// rest of the crate can compare ids with plain `==`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

impl RawId {
    fn canonical(self) -> Result<u64, Error> {
        match self {
            RawId::Number(n) => Ok(n),
            RawId::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| Error::InvalidId(text)),
        }
    }
}

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                RawId::deserialize(deserializer)?
                    .canonical()
                    .map($name)
                    .map_err(serde::de::Error::custom)
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                RawId::Text(s.to_string()).canonical().map($name)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                $name(value)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_type!(
    /// Identifier of a listed game server.
    ServerId
);
id_type!(ReviewId);
id_type!(PostId);
id_type!(UserId);
