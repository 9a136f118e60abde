use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Thumbnail store backend types
///
/// Defined in core because configuration selects it and the storage crate builds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThumbnailBackend {
    Memory,
    Local,
}

impl FromStr for ThumbnailBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "memory" => Ok(ThumbnailBackend::Memory),
            "local" => Ok(ThumbnailBackend::Local),
            _ => Err(anyhow::anyhow!("Invalid thumbnail store backend: {}", s)),
        }
    }
}

impl Display for ThumbnailBackend {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ThumbnailBackend::Memory => write!(f, "memory"),
            ThumbnailBackend::Local => write!(f, "local"),
        }
    }
}
