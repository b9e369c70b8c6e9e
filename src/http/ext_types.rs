//! File-extension category table
//!
//! The registry of extensions a front webserver would normally serve
//! directly, grouped by category. Requests for these that reach the
//! application at all are misses by definition.

/// Extension categories with their known extensions
///
/// # Examples
/// ```
/// use fast404::http::ext_types;
/// assert!(ext_types::flatten().any(|ext| ext == "png"));
/// assert!(ext_types::flatten().any(|ext| ext == "zip"));
/// ```
pub const EXT_TYPES: &[(&str, &[&str])] = &[
    (
        "image",
        &[
            "jpg", "jpeg", "jpe", "gif", "png", "bmp", "tiff", "tif", "webp", "avif", "ico",
            "heic",
        ],
    ),
    (
        "audio",
        &[
            "aac", "ac3", "aif", "aiff", "flac", "m3a", "m4a", "m4b", "mka", "mp1", "mp2", "mp3",
            "ogg", "oga", "ram", "wav", "wma",
        ],
    ),
    (
        "video",
        &[
            "3g2", "3gp", "3gpp", "asf", "avi", "divx", "dv", "flv", "m4v", "mkv", "mov", "mp4",
            "mpeg", "mpg", "mpv", "ogm", "ogv", "qt", "rm", "vob", "wmv",
        ],
    ),
    (
        "document",
        &[
            "doc", "docx", "docm", "dotm", "odt", "pages", "pdf", "xps", "oxps", "rtf", "wp",
            "wpd", "psd", "xcf",
        ],
    ),
    ("spreadsheet", &["numbers", "ods", "xls", "xlsx", "xlsm", "xlsb"]),
    (
        "interactive",
        &[
            "swf", "key", "ppt", "pptx", "pptm", "pps", "ppsx", "ppsm", "sldx", "sldm", "odp",
        ],
    ),
    ("text", &["asc", "csv", "tsv", "txt"]),
    (
        "archive",
        &[
            "bz2", "cab", "dmg", "gz", "rar", "sea", "sit", "sqx", "tar", "tgz", "zip", "7z",
        ],
    ),
    ("code", &["css", "htm", "html", "php", "asp", "js"]),
];

/// Flatten the category table into a single stream of extensions
pub fn flatten() -> impl Iterator<Item = &'static str> {
    EXT_TYPES.iter().flat_map(|(_, exts)| exts.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_covers_all_categories() {
        let all: Vec<&str> = flatten().collect();
        // One representative per category
        for ext in ["png", "mp3", "mp4", "pdf", "xlsx", "ppt", "csv", "zip", "js"] {
            assert!(all.contains(&ext), "missing {ext}");
        }
    }

    #[test]
    fn test_page_extensions_present_in_raw_table() {
        // The raw table contains them; removal happens at allow-list
        // derivation, not here.
        let all: Vec<&str> = flatten().collect();
        assert!(all.contains(&"html"));
        assert!(all.contains(&"htm"));
        assert!(all.contains(&"php"));
    }

    #[test]
    fn test_extensions_are_lowercase() {
        assert!(flatten().all(|ext| ext.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())));
    }

    #[test]
    fn test_no_duplicate_extensions() {
        let all: Vec<&str> = flatten().collect();
        let unique: std::collections::HashSet<&str> = all.iter().copied().collect();
        assert_eq!(all.len(), unique.len());
    }
}
