/// File relocation into category subfolders.
///
/// This module moves files into category-specific subdirectories within a
/// given base directory, creating the subdirectory on demand, and defines the
/// error type shared by the whole organization pass.
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::ConfigError;

/// Errors that abort an organization run.
#[derive(Debug)]
pub enum OrganizeError {
    /// The target directory could not be listed.
    DirectoryReadFailed { path: PathBuf, source: io::Error },
    /// Metadata for a directory entry could not be read.
    EntryStatFailed { path: PathBuf, source: io::Error },
    /// A category subfolder could not be created.
    DirectoryCreationFailed { path: PathBuf, source: io::Error },
    /// A file could not be moved into its category subfolder.
    FileMoveFailed {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },
    /// The ignore configuration could not be loaded or compiled.
    Config { source: ConfigError },
}

impl OrganizeError {
    /// Extra guidance printed under the error message, when available.
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::DirectoryReadFailed { path, source }
                if source.kind() == io::ErrorKind::NotFound =>
            {
                Some(format!(
                    "Check that '{}' exists and points to a directory.",
                    path.display()
                ))
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for OrganizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DirectoryReadFailed { path, source } => {
                write!(f, "Cannot read directory {}: {}", path.display(), source)
            }
            Self::EntryStatFailed { path, source } => {
                write!(f, "Cannot stat {}: {}", path.display(), source)
            }
            Self::DirectoryCreationFailed { path, source } => {
                write!(
                    f,
                    "Failed to create directory {}: {}",
                    path.display(),
                    source
                )
            }
            Self::FileMoveFailed { from, to, source } => {
                write!(
                    f,
                    "Failed to move {} to {}: {}",
                    from.display(),
                    to.display(),
                    source
                )
            }
            Self::Config { source } => write!(f, "Configuration error: {}", source),
        }
    }
}

impl std::error::Error for OrganizeError {}

impl From<ConfigError> for OrganizeError {
    fn from(source: ConfigError) -> Self {
        Self::Config { source }
    }
}

/// Result type for organization operations.
pub type OrganizeResult<T> = Result<T, OrganizeError>;

/// Moves files into category subfolders within a base directory.
pub struct FileOrganizer;

impl FileOrganizer {
    /// Moves `file_path` into `<base_path>/<category_dir_name>/`.
    ///
    /// The category subfolder is created when absent; creating it again is not
    /// an error. The move is a same-filesystem rename, so a file of the same
    /// name already present at the destination is silently replaced.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use dirsort::organizer::FileOrganizer;
    /// use std::path::Path;
    ///
    /// let result = FileOrganizer::move_to_category(
    ///     Path::new("/home/user/downloads"),
    ///     Path::new("/home/user/downloads/photo.jpg"),
    ///     "images",
    /// );
    ///
    /// match result {
    ///     Ok(()) => println!("File organized"),
    ///     Err(e) => eprintln!("Organization failed: {}", e),
    /// }
    /// ```
    pub fn move_to_category(
        base_path: &Path,
        file_path: &Path,
        category_dir_name: &str,
    ) -> OrganizeResult<()> {
        let category_path = base_path.join(category_dir_name);

        if !category_path.exists() {
            fs::create_dir(&category_path).map_err(|e| OrganizeError::DirectoryCreationFailed {
                path: category_path.clone(),
                source: e,
            })?;
        }

        let file_name = file_path
            .file_name()
            .ok_or_else(|| OrganizeError::FileMoveFailed {
                from: file_path.to_path_buf(),
                to: category_path.clone(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "file has no name component"),
            })?;

        let destination = category_path.join(file_name);

        fs::rename(file_path, &destination).map_err(|e| OrganizeError::FileMoveFailed {
            from: file_path.to_path_buf(),
            to: destination.clone(),
            source: e,
        })?;

        Ok(())
    }
}
