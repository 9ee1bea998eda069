//! Module id filtering.

use once_cell::sync::Lazy;
use regex::Regex;

static STYLESHEET_EXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(css|scss|sass|less)$").expect("valid extension pattern"));

static LANG_QUERY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)[?&]lang\.(css|scss|sass|less)").expect("valid lang pattern"));

/// Extension of the path part of a module id, without the dot.
///
/// Anything after the first `?` is a query and ignored. Dotfiles without a
/// further extension have none.
fn extension(id: &str) -> &str {
    let path = id.split('?').next().unwrap_or(id);
    let name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    match name.rfind('.') {
        Some(0) | None => "",
        Some(dot) => &name[dot + 1..],
    }
}

/// Whether a module id names a stylesheet the hooks should process.
///
/// Ids under the bundler's `/.vite/` cache are never stylesheets. Otherwise
/// the extension must end in `css`, `scss`, `sass` or `less` (so `.pcss`
/// matches too), or the id carries a `lang.<ext>` query.
///
/// # Example
///
/// ```rust
/// use vaultcss_vite::is_stylesheet;
///
/// assert!(is_stylesheet("/src/app.css"));
/// assert!(is_stylesheet("/src/App.vue?vue&type=style&index=0&lang.scss"));
/// assert!(!is_stylesheet("/src/main.ts"));
/// assert!(!is_stylesheet("/node_modules/.vite/deps/chunk.css"));
/// ```
pub fn is_stylesheet(id: &str) -> bool {
    if id.contains("/.vite/") {
        return false;
    }
    STYLESHEET_EXT.is_match(extension(id)) || LANG_QUERY.is_match(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension() {
        assert_eq!(extension("/a/b/style.css"), "css");
        assert_eq!(extension("/a/b/style.module.scss?inline"), "scss");
        assert_eq!(extension("/a/b.dir/file"), "");
        assert_eq!(extension("/a/.env"), "");
        assert_eq!(extension("C:\\styles\\main.LESS"), "LESS");
    }

    #[test]
    fn test_stylesheet_extensions() {
        for id in [
            "/src/a.css",
            "/src/a.scss",
            "/src/a.sass",
            "/src/a.less",
            "/src/a.pcss",
            "/src/a.postcss",
            "/src/A.CSS",
            "/src/a.css?direct",
        ] {
            assert!(is_stylesheet(id), "{} should be a stylesheet", id);
        }
    }

    #[test]
    fn test_non_stylesheets() {
        for id in ["/src/a.ts", "/src/a.js", "/src/a.vue", "/src/a.css.map", "/src/css"] {
            assert!(!is_stylesheet(id), "{} should not be a stylesheet", id);
        }
    }

    #[test]
    fn test_lang_query() {
        assert!(is_stylesheet("/src/App.vue?vue&type=style&lang.css"));
        assert!(is_stylesheet("/src/App.svelte?svelte&type=style&lang.LESS"));
        assert!(is_stylesheet("/src/App.vue?lang.sass"));
        assert!(!is_stylesheet("/src/App.vue?vue&type=script&lang.ts"));
    }

    #[test]
    fn test_vite_cache_excluded() {
        assert!(!is_stylesheet("/project/node_modules/.vite/deps/x.css"));
        assert!(!is_stylesheet("/project/node_modules/.vite/x.vue?lang.css"));
    }
}
