use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;
use thiserror::Error;

pub fn parse_yaml_from_file<P: AsRef<Path>, D: DeserializeOwned>(
    file: P,
) -> Result<D, anyhow::Error> {
    let file = open_file(&file)?;
    let parsed = serde_yaml::from_reader(file)?;
    Ok(parsed)
}

#[derive(Error, Debug)]
#[error("Unable to open {filename}")]
pub struct FileError {
    filename: String,
    source: std::io::Error,
}

pub fn open_file<P: AsRef<Path>>(path: P) -> Result<File, FileError> {
    File::open(shellexpand::tilde(&path.as_ref().to_string_lossy()).into_owned()).map_err(|e| {
        FileError {
            filename: path.as_ref().to_string_lossy().into(),
            source: e,
        }
    })
}

#[derive(Error, Debug)]
pub enum DirCreationError {
    #[error("Unable to create directory {path}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("{0} path is not a directory")]
    PathIsNotADirectory(String),
}

/// Creates `dir` and its missing parents, then hands `dir` back for chaining.
///
/// Calling it on an existing directory is a no-op.
pub fn ensure_dir<P: AsRef<Path>>(dir: P) -> Result<P, DirCreationError> {
    let path = dir.as_ref();
    let io_error = |source: std::io::Error| DirCreationError::Io {
        path: path.to_string_lossy().into(),
        source,
    };
    if !path.is_dir() {
        debug!("Creating directory {}", path.display());
    }
    if let Err(e) = std::fs::create_dir_all(path) {
        match e.kind() {
            ErrorKind::AlreadyExists => {
                // something exists: it must be a directory
                let meta = std::fs::metadata(path).map_err(io_error)?;
                if !meta.is_dir() {
                    return Err(DirCreationError::PathIsNotADirectory(
                        path.to_string_lossy().into(),
                    ));
                }
            }
            _ => return Err(io_error(e)),
        }
    }
    Ok(dir)
}
