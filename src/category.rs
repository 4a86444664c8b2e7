/// Static mapping from file extensions to category folders.
///
/// The table is fixed at compile time and searched in declared order, so an
/// extension accidentally listed under two categories resolves to the first.
///
/// # Examples
///
/// ```
/// use dirsort::category::{Category, CategoryTable};
///
/// let table = CategoryTable::new();
/// assert_eq!(table.classify(".jpg"), Category::Images);
/// assert_eq!(table.classify(".pdf"), Category::Documents);
/// assert_eq!(table.classify(".xyz"), Category::Other);
/// ```
use std::collections::HashMap;

/// A named bucket of file extensions sharing a destination subfolder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Image files (JPG, PNG, SVG, ...)
    Images,
    /// Document files (PDF, DOCX, TXT, ...)
    Documents,
    /// Video files (MP4, MKV, AVI, ...)
    Videos,
    /// Audio files (MP3, WAV, FLAC, ...)
    Audio,
    /// Archive files (ZIP, RAR, 7Z, ...)
    Archives,
    /// Source code and markup files (PY, JS, JSON, ...)
    Code,
    /// Catch-all for extensions outside the table.
    Other,
}

impl Category {
    /// Name of the subfolder files of this category are moved into.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirsort::category::Category;
    ///
    /// assert_eq!(Category::Images.dir_name(), "images");
    /// assert_eq!(Category::Other.dir_name(), "outros");
    /// ```
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Images => "images",
            Category::Documents => "documents",
            Category::Videos => "videos",
            Category::Audio => "audio",
            Category::Archives => "archives",
            Category::Code => "code",
            Category::Other => "outros",
        }
    }
}

/// Extensions per category, in lookup order. Lower-case, leading dot included.
const CATEGORY_EXTENSIONS: &[(Category, &[&str])] = &[
    (
        Category::Images,
        &[".jpg", ".jpeg", ".png", ".gif", ".bmp", ".svg", ".webp"],
    ),
    (
        Category::Documents,
        &[
            ".pdf", ".doc", ".docx", ".xls", ".xlsx", ".ppt", ".pptx", ".txt", ".csv", ".rtf",
        ],
    ),
    (
        Category::Videos,
        &[".mp4", ".mkv", ".avi", ".mov", ".wmv"],
    ),
    (Category::Audio, &[".mp3", ".wav", ".aac", ".flac"]),
    (
        Category::Archives,
        &[".zip", ".rar", ".7z", ".tar", ".gz"],
    ),
    (
        Category::Code,
        &[
            ".js", ".html", ".css", ".py", ".java", ".c", ".cpp", ".json", ".xml",
        ],
    ),
];

/// Classifies file extensions against the static category table.
#[derive(Debug, Clone)]
pub struct CategoryTable {
    by_extension: HashMap<&'static str, Category>,
}

impl CategoryTable {
    /// Builds the lookup table from the declared category order.
    pub fn new() -> Self {
        let mut by_extension = HashMap::new();
        for (category, extensions) in CATEGORY_EXTENSIONS {
            for extension in *extensions {
                // First declaration wins when an extension is listed twice.
                by_extension.entry(*extension).or_insert(*category);
            }
        }
        Self { by_extension }
    }

    /// Maps an extension (including the leading dot) to its category.
    ///
    /// Unknown extensions fall back to [`Category::Other`]. Lookup is
    /// case-insensitive and never fails.
    pub fn classify(&self, extension: &str) -> Category {
        self.by_extension
            .get(extension.to_lowercase().as_str())
            .copied()
            .unwrap_or(Category::Other)
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_dir_names() {
        assert_eq!(Category::Images.dir_name(), "images");
        assert_eq!(Category::Documents.dir_name(), "documents");
        assert_eq!(Category::Videos.dir_name(), "videos");
        assert_eq!(Category::Audio.dir_name(), "audio");
        assert_eq!(Category::Archives.dir_name(), "archives");
        assert_eq!(Category::Code.dir_name(), "code");
        assert_eq!(Category::Other.dir_name(), "outros");
    }

    #[test]
    fn test_every_listed_extension_maps_to_its_category() {
        let table = CategoryTable::new();
        for (category, extensions) in CATEGORY_EXTENSIONS {
            for extension in *extensions {
                assert_eq!(
                    table.classify(extension),
                    *category,
                    "wrong category for {}",
                    extension
                );
            }
        }
    }

    #[test]
    fn test_classify_images() {
        let table = CategoryTable::new();
        assert_eq!(table.classify(".jpg"), Category::Images);
        assert_eq!(table.classify(".webp"), Category::Images);
    }

    #[test]
    fn test_classify_unknown_falls_back() {
        let table = CategoryTable::new();
        assert_eq!(table.classify(".xyz"), Category::Other);
        assert_eq!(table.classify(".exe"), Category::Other);
        assert_eq!(table.classify("."), Category::Other);
    }

    #[test]
    fn test_classify_empty_string_falls_back() {
        let table = CategoryTable::new();
        assert_eq!(table.classify(""), Category::Other);
    }

    #[test]
    fn test_classify_case_insensitive() {
        let table = CategoryTable::new();
        assert_eq!(table.classify(".JPG"), Category::Images);
        assert_eq!(table.classify(".Pdf"), Category::Documents);
    }

    #[test]
    fn test_classify_requires_leading_dot() {
        let table = CategoryTable::new();
        assert_eq!(table.classify("jpg"), Category::Other);
    }

    #[test]
    fn test_table_extensions_are_unique() {
        let table = CategoryTable::new();
        let declared: usize = CATEGORY_EXTENSIONS.iter().map(|(_, exts)| exts.len()).sum();
        assert_eq!(table.by_extension.len(), declared);
    }
}
