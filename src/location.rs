use std::fmt;
use std::path::PathBuf;

/// Where a JSON resource lives. Anything that does not carry an HTTP scheme
/// is treated as a filesystem path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceLocation {
    Url(String),
    File(PathBuf),
}

impl ResourceLocation {
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            ResourceLocation::Url(raw.to_string())
        } else {
            ResourceLocation::File(PathBuf::from(raw))
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, ResourceLocation::Url(_))
    }
}

impl fmt::Display for ResourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceLocation::Url(url) => f.write_str(url),
            ResourceLocation::File(path) => write!(f, "{}", path.display()),
        }
    }
}
