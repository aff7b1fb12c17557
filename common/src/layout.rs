use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

pub const WEB_HOSTED_MODIFIER: &str = "/..";
pub const PROJECT_MODIFIER: &str = "/../..";

/// Where static content lives relative to the executable directory.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Layout {
    /// Next to the binary.
    #[default]
    SelfHosted,
    /// Parent of the binary directory.
    WebHosted,
    /// Two levels above the binary.
    Project,
    Custom {
        name: String,
        upward_modifier: String,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown layout {0}")]
pub struct UnknownLayout(pub String);

impl Layout {
    pub fn name(&self) -> &str {
        match self {
            Layout::SelfHosted => "self-hosted",
            Layout::WebHosted => "web-hosted",
            Layout::Project => "project",
            Layout::Custom { name, .. } => name.as_str(),
        }
    }

    pub fn upward_modifier(&self) -> Option<&str> {
        match self {
            Layout::SelfHosted => None,
            Layout::WebHosted => Some(WEB_HOSTED_MODIFIER),
            Layout::Project => Some(PROJECT_MODIFIER),
            Layout::Custom {
                upward_modifier, ..
            } => Some(upward_modifier.as_str()),
        }
    }
}

impl Display for Layout {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Layout {
    type Err = UnknownLayout;

    /// Built-in layouts only, custom ones come from the configuration.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "self-hosted" | "bin" => Ok(Layout::SelfHosted),
            "web-hosted" | "host" => Ok(Layout::WebHosted),
            "project" => Ok(Layout::Project),
            other => Err(UnknownLayout(other.into())),
        }
    }
}
