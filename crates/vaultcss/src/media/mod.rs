//! Custom media aliases.
//!
//! - [`CustomMediaTable`]: ordered alias → query mapping
//! - [`parse_custom_media`]: extracts declarations from stylesheet text
//! - [`is_custom_media_name`]: the alias naming rule
//! - [`load_custom_media`]: reads declarations from a file, degrading to empty
//! - [`resolve_custom_media`]: merges builtin, file and explicit layers

mod parse;
mod resolve;
mod source;
mod table;

pub use parse::{is_custom_media_name, parse_custom_media};
pub use resolve::{
    builtin_media, resolve_custom_media, MediaLayers, ResolvedMedia, BUILTIN_BREAKPOINTS,
};
pub use source::load_custom_media;
pub use table::CustomMediaTable;
