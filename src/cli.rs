//! Orchestration of the scan-classify-move sequence.
//!
//! Walks the immediate entries of a target directory, classifies each file by
//! its extension and moves it into the matching category subfolder.
//! Directories, the running executable, ignored entries and files without an
//! extension are left in place. Entries are processed strictly in listing
//! order, one at a time; the first filesystem error aborts the run.

use crate::category::CategoryTable;
use crate::config::{CompiledIgnore, OrganizeConfig};
use crate::organizer::{FileOrganizer, OrganizeError, OrganizeResult};
use crate::output::OutputFormatter;
use std::env;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::Path;

/// Runs a full organization pass over `dir_path` with the default
/// configuration lookup.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
///
/// match dirsort::run(Path::new("/home/user/downloads")) {
///     Ok(()) => println!("done"),
///     Err(e) => eprintln!("Error: {}", e),
/// }
/// ```
pub fn run(dir_path: &Path) -> OrganizeResult<()> {
    run_with_config(dir_path, None)
}

/// Runs a full organization pass, loading ignore rules from `config_path`
/// when one is given.
pub fn run_with_config(dir_path: &Path, config_path: Option<&Path>) -> OrganizeResult<()> {
    let config = OrganizeConfig::load(config_path)?;
    let ignore = config.compile()?;
    let table = CategoryTable::new();
    let self_name = self_file_name();

    organize_directory(dir_path, &table, &ignore, self_name.as_deref())
}

/// Moves every eligible file directly inside `base_path` into its category
/// subfolder.
///
/// `self_name` is the file name of the running executable; an entry with that
/// exact name is never moved, so the tool cannot relocate itself when it sits
/// inside the directory it is organizing.
pub fn organize_directory(
    base_path: &Path,
    table: &CategoryTable,
    ignore: &CompiledIgnore,
    self_name: Option<&OsStr>,
) -> OrganizeResult<()> {
    OutputFormatter::info(&format!("Organizing contents of: {}", base_path.display()));

    let entries = fs::read_dir(base_path).map_err(|e| OrganizeError::DirectoryReadFailed {
        path: base_path.to_path_buf(),
        source: e,
    })?;

    let mut moved = 0usize;
    for entry in entries {
        let entry = entry.map_err(|e| OrganizeError::DirectoryReadFailed {
            path: base_path.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();

        let file_type = entry
            .file_type()
            .map_err(|e| OrganizeError::EntryStatFailed {
                path: path.clone(),
                source: e,
            })?;

        // Category folders created by an earlier run fall under this rule.
        if file_type.is_dir() {
            continue;
        }

        let name = entry.file_name();
        if self_name == Some(name.as_os_str()) {
            continue;
        }
        if ignore.is_ignored(&path) {
            continue;
        }
        let Some(extension) = extension_of(&path) else {
            continue;
        };

        let category = table.classify(&extension);
        FileOrganizer::move_to_category(base_path, &path, category.dir_name())?;
        OutputFormatter::plain(&format!(
            "Moved: {} -> {}/",
            name.to_string_lossy(),
            category.dir_name()
        ));
        moved += 1;
    }

    OutputFormatter::success(&format!(
        "Organization complete. {} {} moved.",
        moved,
        if moved == 1 { "file" } else { "files" }
    ));

    Ok(())
}

/// Derives the lower-cased extension of `path`, including the leading dot.
///
/// Returns `None` when the file name carries no extension (no dot, or a pure
/// dotfile such as `.gitignore`), which excludes the entry from organization.
fn extension_of(path: &Path) -> Option<String> {
    let extension = path.extension()?.to_str()?;
    Some(format!(".{}", extension.to_lowercase()))
}

/// File name of the running executable.
fn self_file_name() -> Option<OsString> {
    env::current_exe()
        .ok()
        .and_then(|path| path.file_name().map(OsStr::to_os_string))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_extension_of_lowercases() {
        assert_eq!(extension_of(Path::new("photo.JPG")), Some(".jpg".into()));
        assert_eq!(extension_of(Path::new("notes.txt")), Some(".txt".into()));
    }

    #[test]
    fn test_extension_of_takes_last_component() {
        assert_eq!(
            extension_of(Path::new("backup.tar.gz")),
            Some(".gz".into())
        );
    }

    #[test]
    fn test_extension_of_none_without_dot() {
        assert_eq!(extension_of(Path::new("README")), None);
        assert_eq!(extension_of(Path::new("run")), None);
    }

    #[test]
    fn test_extension_of_none_for_pure_dotfile() {
        assert_eq!(extension_of(Path::new(".gitignore")), None);
    }

    #[test]
    fn test_extension_of_hidden_file_with_extension() {
        assert_eq!(
            extension_of(Path::new(".hidden.txt")),
            Some(".txt".into())
        );
    }

    #[test]
    fn test_extension_of_trailing_dot() {
        // "file." carries an empty extension, which classifies as fallback.
        assert_eq!(extension_of(Path::new("file.")), Some(".".into()));
    }
}
