//! Ignore rules loaded from TOML configuration files.
//!
//! The organizer leaves any entry matching an ignore rule in place. Rules can
//! name files exactly, match file names by glob or regex, or exclude whole
//! extensions; `keep` globs override every other rule. The built-in defaults
//! ignore nothing beyond the tool's own configuration file, so without a
//! config file every eligible file is organized.
//!
//! # Configuration File Format
//!
//! ```toml
//! [ignore]
//! skip_hidden = false
//! filenames = [".dirsortrc.toml", "Thumbs.db"]
//! globs = ["*.tmp"]
//! extensions = ["bak"]
//! regex = []
//! keep = []
//! ```

use glob::Pattern;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the per-directory configuration file.
pub const CONFIG_FILE_NAME: &str = ".dirsortrc.toml";

/// Errors that can occur while loading or compiling ignore rules.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// Configuration file not found at the specified path.
    NotFound(PathBuf),
    /// Invalid TOML syntax or structure.
    Invalid(String),
    /// Invalid glob pattern.
    BadGlob(String),
    /// Invalid regex pattern with the reason it failed to compile.
    BadRegex { pattern: String, reason: String },
    /// IO error while reading the configuration file.
    Io(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NotFound(path) => {
                write!(f, "Configuration file not found: {}", path.display())
            }
            ConfigError::Invalid(msg) => write!(f, "Invalid configuration: {}", msg),
            ConfigError::BadGlob(pattern) => write!(f, "Invalid glob pattern '{}'", pattern),
            ConfigError::BadRegex { pattern, reason } => {
                write!(f, "Invalid regex pattern '{}': {}", pattern, reason)
            }
            ConfigError::Io(msg) => write!(f, "IO error reading configuration: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Top-level configuration, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrganizeConfig {
    #[serde(default)]
    pub ignore: IgnoreRules,
}

/// Rules describing which entries are left in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IgnoreRules {
    /// Skip hidden files (names starting with "."). Defaults to false: a
    /// hidden file that carries an extension is organized like any other.
    #[serde(default)]
    pub skip_hidden: bool,

    /// Exact file names to leave in place.
    #[serde(default = "default_ignored_filenames")]
    pub filenames: Vec<String>,

    /// Glob patterns matched against the file name (e.g. "*.tmp").
    #[serde(default)]
    pub globs: Vec<String>,

    /// Extensions to leave in place, without the leading dot (e.g. "bak").
    #[serde(default)]
    pub extensions: Vec<String>,

    /// Regex patterns matched against the file name.
    #[serde(default)]
    pub regex: Vec<String>,

    /// Glob patterns that override every ignore rule.
    #[serde(default)]
    pub keep: Vec<String>,
}

/// The tool's own artifacts are never relocated.
fn default_ignored_filenames() -> Vec<String> {
    vec![CONFIG_FILE_NAME.to_string()]
}

impl Default for IgnoreRules {
    fn default() -> Self {
        Self {
            skip_hidden: false,
            filenames: default_ignored_filenames(),
            globs: Vec::new(),
            extensions: Vec::new(),
            regex: Vec::new(),
            keep: Vec::new(),
        }
    }
}

impl OrganizeConfig {
    /// Load configuration, falling back to the built-in defaults.
    ///
    /// Lookup order:
    /// 1. `config_path`, when explicitly provided
    /// 2. `.dirsortrc.toml` in the current directory
    /// 3. `~/.config/dirsort/config.toml`
    /// 4. built-in defaults
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be read
    /// or parsed.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            return Self::load_from_file(path);
        }

        let local_config = PathBuf::from(CONFIG_FILE_NAME);
        if local_config.exists() {
            return Self::load_from_file(&local_config);
        }

        if let Ok(home) = std::env::var("HOME") {
            let home_config = PathBuf::from(home)
                .join(".config")
                .join("dirsort")
                .join("config.toml");
            if home_config.exists() {
                return Self::load_from_file(&home_config);
            }
        }

        Ok(Self::default())
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Compile the rules into matcher structures, validating every pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if any glob or regex pattern is invalid.
    pub fn compile(self) -> Result<CompiledIgnore, ConfigError> {
        CompiledIgnore::new(self.ignore)
    }
}

/// Pre-compiled ignore rules, ready for per-entry matching.
pub struct CompiledIgnore {
    skip_hidden: bool,
    filenames: HashSet<String>,
    extensions: HashSet<String>,
    globs: Vec<Pattern>,
    regexes: Vec<Regex>,
    keep: Vec<Pattern>,
}

impl CompiledIgnore {
    fn new(rules: IgnoreRules) -> Result<Self, ConfigError> {
        let globs = compile_globs(&rules.globs)?;
        let keep = compile_globs(&rules.keep)?;

        let regexes = rules
            .regex
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|e| ConfigError::BadRegex {
                    pattern: pattern.clone(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            skip_hidden: rules.skip_hidden,
            filenames: rules.filenames.into_iter().collect(),
            extensions: rules
                .extensions
                .iter()
                .map(|ext| ext.to_lowercase())
                .collect(),
            globs,
            regexes,
            keep,
        })
    }

    /// Whether the entry at `path` must be left in place.
    ///
    /// Checks run in order with early termination: keep globs (override),
    /// hidden-file rule, exact file name, extension, globs, regexes.
    pub fn is_ignored(&self, path: &Path) -> bool {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();

        if self.keep.iter().any(|pattern| pattern.matches(&file_name)) {
            return false;
        }

        if self.skip_hidden && file_name.starts_with('.') {
            return true;
        }

        if self.filenames.contains(file_name.as_ref()) {
            return true;
        }

        if let Some(ext) = path.extension()
            && let Some(ext) = ext.to_str()
            && self.extensions.contains(&ext.to_lowercase())
        {
            return true;
        }

        if self.globs.iter().any(|pattern| pattern.matches(&file_name)) {
            return true;
        }

        self.regexes.iter().any(|regex| regex.is_match(&file_name))
    }
}

fn compile_globs(patterns: &[String]) -> Result<Vec<Pattern>, ConfigError> {
    patterns
        .iter()
        .map(|pattern| Pattern::new(pattern).map_err(|_| ConfigError::BadGlob(pattern.clone())))
        .collect()
}
