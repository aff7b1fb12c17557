use std::sync::OnceLock;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BaseDirError {
    #[error("Unable to locate the current executable")]
    CurrentExe {
        #[from]
        source: std::io::Error,
    },
    #[error("{0} has no parent directory")]
    NoParent(String),
}

/// Supplies the directory relative paths are anchored to.
pub trait BaseDirectory {
    fn base_directory(&self) -> Result<String, BaseDirError>;
}

/// Directory containing the running executable, looked up once.
#[derive(Debug, Default)]
pub struct ExecutableDirectory {
    cached: OnceLock<String>,
}

impl BaseDirectory for ExecutableDirectory {
    fn base_directory(&self) -> Result<String, BaseDirError> {
        if let Some(dir) = self.cached.get() {
            return Ok(dir.clone());
        }
        let exe = std::env::current_exe()?;
        let dir = exe
            .parent()
            .ok_or_else(|| BaseDirError::NoParent(exe.to_string_lossy().into()))?
            .to_string_lossy()
            .into_owned();
        debug!("Executable directory resolved to {}", dir);
        Ok(self.cached.get_or_init(|| dir).clone())
    }
}

/// A directory known in advance, e.g. from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedDirectory(String);

impl FixedDirectory {
    pub fn new<S: Into<String>>(dir: S) -> Self {
        Self(dir.into())
    }
}

impl BaseDirectory for FixedDirectory {
    fn base_directory(&self) -> Result<String, BaseDirError> {
        Ok(self.0.clone())
    }
}

impl<T: BaseDirectory + ?Sized> BaseDirectory for &T {
    fn base_directory(&self) -> Result<String, BaseDirError> {
        (**self).base_directory()
    }
}

impl<T: BaseDirectory + ?Sized> BaseDirectory for Box<T> {
    fn base_directory(&self) -> Result<String, BaseDirError> {
        (**self).base_directory()
    }
}
