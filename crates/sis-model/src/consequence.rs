use std::fmt;

use serde::{Deserialize, Serialize};

/// Approved consequence codes. Anything else is excluded at validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConsequenceType {
    /// In-school suspension.
    Iss,
    /// Out-of-school suspension.
    Oss,
    /// Disciplinary alternative education program.
    Daep,
    /// Juvenile justice alternative education program.
    Jjaep,
    Expulsion,
    LocalOnly,
}

impl ConsequenceType {
    pub const ALL: [ConsequenceType; 6] = [
        ConsequenceType::Iss,
        ConsequenceType::Oss,
        ConsequenceType::Daep,
        ConsequenceType::Jjaep,
        ConsequenceType::Expulsion,
        ConsequenceType::LocalOnly,
    ];

    pub const fn code(self) -> &'static str {
        match self {
            ConsequenceType::Iss => "ISS",
            ConsequenceType::Oss => "OSS",
            ConsequenceType::Daep => "DAEP",
            ConsequenceType::Jjaep => "JJAEP",
            ConsequenceType::Expulsion => "EXPULSION",
            ConsequenceType::LocalOnly => "LOCAL_ONLY",
        }
    }

    /// Matches a raw cell after trimming and upper-casing it.
    pub fn parse_normalized(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_uppercase();
        ConsequenceType::ALL
            .into_iter()
            .find(|kind| kind.code() == normalized)
    }

    /// Comma-separated list of approved codes in fixed order.
    pub fn approved_codes() -> String {
        ConsequenceType::ALL
            .iter()
            .map(|kind| kind.code())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ConsequenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
