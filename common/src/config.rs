use crate::base_dir::{BaseDirectory, ExecutableDirectory, FixedDirectory};
use crate::file_utils::parse_yaml_from_file;
use crate::layout::{Layout, UnknownLayout};
use crate::path_builder::combine_with;
use anyhow::Error;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "pathmap.yml";

const DEFAULT_CONFIG_LOCATION: &[&str] = &["~/.pathkit/", "/etc/pathkit/"];

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct PathmapConfig {
    /// Overrides the directory of the running executable as the mapping anchor.
    #[serde(default)]
    pub base_directory: Option<String>,
    /// Layout used when none is requested explicitly.
    ///
    /// Either a built-in layout name or a key of `layouts`.
    #[serde(default)]
    pub default_layout: Option<String>,
    /// Custom layouts: map of <name, upward modifier>
    #[serde(default)]
    pub layouts: BTreeMap<String, String>,
}

impl PathmapConfig {
    pub fn layout(&self, name: &str) -> Result<Layout, UnknownLayout> {
        match self.layouts.get(name) {
            Some(upward_modifier) => Ok(Layout::Custom {
                name: name.to_string(),
                upward_modifier: upward_modifier.clone(),
            }),
            None => name.parse(),
        }
    }

    pub fn default_layout(&self) -> Result<Layout, UnknownLayout> {
        match &self.default_layout {
            Some(name) => self.layout(name),
            None => Ok(Layout::default()),
        }
    }

    pub fn base_directory_provider(&self) -> Box<dyn BaseDirectory> {
        match &self.base_directory {
            Some(dir) => Box::new(FixedDirectory::new(dir.as_str())),
            None => Box::new(ExecutableDirectory::default()),
        }
    }
}

#[derive(Error, Debug)]
#[error("Config file not found: {0}")]
pub struct NoConfigFileError(String);

/// First existing config file: the provided one, then the default locations.
pub fn resolve_config_path<P: AsRef<Path>>(
    provided_config: &Option<P>,
    name: &str,
) -> Option<PathBuf> {
    provided_config
        .as_ref()
        .map(|path| PathBuf::from(path.as_ref()))
        .into_iter()
        .chain(
            DEFAULT_CONFIG_LOCATION
                .iter()
                .map(|loc| shellexpand::tilde(*loc))
                .map(|loc| PathBuf::from(combine_with(&loc, [name]))),
        )
        .find(|loc| loc.exists())
}

pub fn parse<P: AsRef<Path>, D: DeserializeOwned>(
    provided_config: &Option<P>,
    name: &str,
) -> Result<(D, PathBuf), Error> {
    match resolve_config_path(provided_config, name) {
        Some(path) => {
            debug!("Loading config from {}", path.display());
            Ok((parse_yaml_from_file(&path)?, path))
        }
        None => Err(NoConfigFileError(name.into()).into()),
    }
}

/// Like [`parse`] but a missing file yields `None`.
///
/// An explicitly provided file must exist.
pub fn parse_optional<P: AsRef<Path>, D: DeserializeOwned>(
    provided_config: &Option<P>,
    name: &str,
) -> Result<Option<D>, Error> {
    if let Some(provided) = provided_config {
        if !provided.as_ref().exists() {
            return Err(NoConfigFileError(provided.as_ref().to_string_lossy().into()).into());
        }
    }
    match parse(provided_config, name) {
        Ok((config, _)) => Ok(Some(config)),
        Err(e) if e.is::<NoConfigFileError>() => Ok(None),
        Err(e) => Err(e),
    }
}
