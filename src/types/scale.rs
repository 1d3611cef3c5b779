use serde::Serialize;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Usage-intensity tier controlling the magnitude of generated token counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    Light,
    #[default]
    Medium,
    Heavy,
}

impl Scale {
    pub const ALL: [Scale; 3] = [Scale::Light, Scale::Medium, Scale::Heavy];

    /// Unrecognized names degrade to `Medium` instead of failing
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" => Scale::Light,
            "heavy" => Scale::Heavy,
            _ => Scale::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Scale::Light => "light",
            Scale::Medium => "medium",
            Scale::Heavy => "heavy",
        }
    }
}

impl FromStr for Scale {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Scale::from_name(s))
    }
}

impl From<&str> for Scale {
    fn from(s: &str) -> Self {
        Scale::from_name(s)
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
