//! Layered resolution of the effective custom media table.
//!
//! Three layers are applied in a fixed order, each overriding the keys of
//! the ones before it:
//!
//! 1. the builtin breakpoints, unless disabled
//! 2. declarations loaded from a custom media file
//! 3. an explicit table supplied by the caller
//!
//! # Example
//!
//! ```rust
//! use vaultcss::{resolve_custom_media, CustomMediaTable, MediaLayers};
//!
//! let resolved = resolve_custom_media(&MediaLayers {
//!     builtin: true,
//!     path: None,
//!     explicit: Some(CustomMediaTable::new().with("--md", "(width >= 50rem)")),
//! });
//!
//! assert_eq!(resolved.table.len(), 7);
//! assert_eq!(resolved.table.get("--md"), Some("(width >= 50rem)"));
//! ```

use std::path::PathBuf;

use super::source::load_custom_media;
use super::table::CustomMediaTable;
use crate::error::ConfigWarning;

/// The builtin breakpoints, smallest first.
pub const BUILTIN_BREAKPOINTS: &[(&str, &str)] = &[
    ("--xxs", "(width >= 23.4375rem)"),
    ("--xs", "(width >= 25rem)"),
    ("--sm", "(width >= 36rem)"),
    ("--md", "(width >= 48rem)"),
    ("--lg", "(width >= 64rem)"),
    ("--xl", "(width >= 80rem)"),
    ("--xxl", "(width >= 96rem)"),
];

/// Returns the builtin breakpoints as a table.
pub fn builtin_media() -> CustomMediaTable {
    BUILTIN_BREAKPOINTS.iter().copied().collect()
}

/// Inputs to custom media resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaLayers {
    /// Seed the table with [`BUILTIN_BREAKPOINTS`].
    pub builtin: bool,
    /// File to load declarations from.
    pub path: Option<PathBuf>,
    /// Caller-supplied declarations, applied last.
    pub explicit: Option<CustomMediaTable>,
}

impl Default for MediaLayers {
    fn default() -> Self {
        Self {
            builtin: true,
            path: None,
            explicit: None,
        }
    }
}

/// The effective table plus anything that degraded along the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedMedia {
    pub table: CustomMediaTable,
    pub warnings: Vec<ConfigWarning>,
}

/// Merges the configured layers into a single table.
///
/// The result depends only on the inputs and the file content, so resolving
/// the same layers twice yields identical tables in identical order.
pub fn resolve_custom_media(layers: &MediaLayers) -> ResolvedMedia {
    let mut resolved = ResolvedMedia::default();

    if layers.builtin {
        resolved.table.overlay(&builtin_media());
    }

    if let Some(path) = &layers.path {
        let (loaded, warning) = load_custom_media(path);
        resolved.table.overlay(&loaded);
        resolved.warnings.extend(warning);
    }

    if let Some(explicit) = &layers.explicit {
        resolved.table.overlay(explicit);
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn media_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    #[test]
    fn test_builtin_only() {
        let resolved = resolve_custom_media(&MediaLayers::default());

        assert!(resolved.warnings.is_empty());
        assert_eq!(resolved.table.len(), 7);
        assert_eq!(
            resolved.table.names().collect::<Vec<_>>(),
            vec!["--xxs", "--xs", "--sm", "--md", "--lg", "--xl", "--xxl"]
        );
        assert_eq!(resolved.table.get("--xxs"), Some("(width >= 23.4375rem)"));
        assert_eq!(resolved.table.get("--md"), Some("(width >= 48rem)"));
        assert_eq!(resolved.table.get("--xxl"), Some("(width >= 96rem)"));
    }

    #[test]
    fn test_nothing_enabled_is_empty() {
        let resolved = resolve_custom_media(&MediaLayers {
            builtin: false,
            path: None,
            explicit: None,
        });
        assert!(resolved.table.is_empty());
    }

    #[test]
    fn test_explicit_overrides_builtin() {
        let resolved = resolve_custom_media(&MediaLayers {
            explicit: Some(CustomMediaTable::new().with("--md", "(width >= 50rem)")),
            ..MediaLayers::default()
        });

        assert_eq!(resolved.table.get("--md"), Some("(width >= 50rem)"));
        assert_eq!(resolved.table.len(), 7);
    }

    #[test]
    fn test_file_overrides_builtin_and_adds_keys() {
        let file = media_file(
            "@custom-media --sm (width >= 30rem);\n@custom-media --print print;",
        );
        let resolved = resolve_custom_media(&MediaLayers {
            path: Some(file.path().to_path_buf()),
            ..MediaLayers::default()
        });

        assert!(resolved.warnings.is_empty());
        assert_eq!(resolved.table.get("--sm"), Some("(width >= 30rem)"));
        assert_eq!(resolved.table.get("--print"), Some("print"));
        assert_eq!(resolved.table.len(), 8);
    }

    #[test]
    fn test_explicit_overrides_file() {
        let file = media_file("@custom-media --sm (width >= 30rem);");
        let resolved = resolve_custom_media(&MediaLayers {
            builtin: false,
            path: Some(file.path().to_path_buf()),
            explicit: Some(CustomMediaTable::new().with("--sm", "(width >= 31rem)")),
        });

        assert_eq!(resolved.table.len(), 1);
        assert_eq!(resolved.table.get("--sm"), Some("(width >= 31rem)"));
    }

    #[test]
    fn test_missing_file_keeps_other_layers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.css");
        let resolved = resolve_custom_media(&MediaLayers {
            builtin: true,
            path: Some(path.clone()),
            explicit: Some(CustomMediaTable::new().with("--hover", "(hover: hover)")),
        });

        assert_eq!(resolved.warnings, vec![ConfigWarning::MissingFile { path }]);
        assert_eq!(resolved.table.len(), 8);
        assert_eq!(resolved.table.get("--hover"), Some("(hover: hover)"));
    }
}
