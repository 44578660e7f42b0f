// ABOUTME: Domain identifiers for per-user storage locations
// ABOUTME: Fixed enumeration with snake_case display, parse, and serde names

use serde::{Deserialize, Serialize};

/// A category of per-user storage, resolved to one directory per platform.
///
/// Which variants actually resolve depends on the OS family: XDG systems
/// define all eleven, registry-based systems the first eight, generic
/// systems a minimal six. Asking for an unresolved domain is an expected,
/// recoverable outcome, not a programming error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Config,
    Data,
    Cache,
    Runtime,
    Documents,
    Pictures,
    Music,
    Videos,
    Downloads,
    Public,
    Templates,
}

impl Domain {
    /// Every identifier, in declaration order. Useful for stable iteration
    /// over an otherwise unordered mapping.
    pub const ALL: [Domain; 11] = [
        Domain::Config,
        Domain::Data,
        Domain::Cache,
        Domain::Runtime,
        Domain::Documents,
        Domain::Pictures,
        Domain::Music,
        Domain::Videos,
        Domain::Downloads,
        Domain::Public,
        Domain::Templates,
    ];
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config => write!(f, "config"),
            Self::Data => write!(f, "data"),
            Self::Cache => write!(f, "cache"),
            Self::Runtime => write!(f, "runtime"),
            Self::Documents => write!(f, "documents"),
            Self::Pictures => write!(f, "pictures"),
            Self::Music => write!(f, "music"),
            Self::Videos => write!(f, "videos"),
            Self::Downloads => write!(f, "downloads"),
            Self::Public => write!(f, "public"),
            Self::Templates => write!(f, "templates"),
        }
    }
}

impl std::str::FromStr for Domain {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "config" => Ok(Self::Config),
            "data" => Ok(Self::Data),
            "cache" => Ok(Self::Cache),
            "runtime" => Ok(Self::Runtime),
            "documents" => Ok(Self::Documents),
            "pictures" => Ok(Self::Pictures),
            "music" => Ok(Self::Music),
            "videos" => Ok(Self::Videos),
            "downloads" => Ok(Self::Downloads),
            "public" => Ok(Self::Public),
            "templates" => Ok(Self::Templates),
            _ => anyhow::bail!("Unknown domain: {}", s),
        }
    }
}
