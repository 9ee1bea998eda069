//! Loading custom media declarations from a file.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::parse::parse_custom_media;
use super::table::CustomMediaTable;
use crate::error::ConfigWarning;

/// Reads `path` and extracts its `@custom-media` declarations.
///
/// This never fails. A missing or unreadable file yields an empty table
/// together with a [`ConfigWarning`] describing what went wrong; the warning
/// is also logged.
pub fn load_custom_media(path: &Path) -> (CustomMediaTable, Option<ConfigWarning>) {
    match fs::read_to_string(path) {
        Ok(css) => {
            let table = parse_custom_media(&css);
            log::debug!(
                "loaded {} custom media from {}",
                table.len(),
                path.display()
            );
            (table, None)
        }
        Err(e) => {
            let warning = if e.kind() == ErrorKind::NotFound {
                ConfigWarning::MissingFile {
                    path: path.to_path_buf(),
                }
            } else {
                ConfigWarning::Unreadable {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                }
            };
            log::warn!("{}", warning);
            (CustomMediaTable::new(), Some(warning))
        }
    }
}
