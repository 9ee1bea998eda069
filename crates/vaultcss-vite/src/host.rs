//! What the plugin exchanges with the host bundler's configuration.

use serde::{Deserialize, Serialize};

/// The parts of the host's resolved build configuration the plugin reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HostBuildConfig {
    /// Building for server-side rendering.
    pub ssr: bool,
    /// The host's `build.cssMinify` setting; `None` when unset.
    pub css_minify: Option<bool>,
}

impl HostBuildConfig {
    /// See [`derive_minify`].
    pub fn minify(&self) -> bool {
        derive_minify(self)
    }
}

/// Minify only client builds, unless CSS minification was switched off.
pub fn derive_minify(config: &HostBuildConfig) -> bool {
    !config.ssr && config.css_minify != Some(false)
}

/// Configuration the plugin contributes to the host before it resolves.
///
/// Serializes to `{"css":{"lightningcss":{"drafts":{"customMedia":true}}}}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HostCssConfig {
    pub css: CssSection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CssSection {
    pub lightningcss: LightningSection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LightningSection {
    pub drafts: DraftsSection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftsSection {
    pub custom_media: bool,
}

/// Enables the custom media draft in the host's own CSS pipeline.
pub fn host_css_config() -> HostCssConfig {
    HostCssConfig {
        css: CssSection {
            lightningcss: LightningSection {
                drafts: DraftsSection { custom_media: true },
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_minify() {
        let cases = [
            (false, None, true),
            (false, Some(true), true),
            (false, Some(false), false),
            (true, None, false),
            (true, Some(true), false),
            (true, Some(false), false),
        ];
        for (ssr, css_minify, expected) in cases {
            let config = HostBuildConfig { ssr, css_minify };
            assert_eq!(derive_minify(&config), expected, "{:?}", config);
            assert_eq!(config.minify(), expected);
        }
    }

    #[test]
    fn test_host_build_config_from_json() {
        let config: HostBuildConfig =
            serde_json::from_str(r#"{"ssr": false, "cssMinify": false}"#).unwrap();
        assert_eq!(
            config,
            HostBuildConfig {
                ssr: false,
                css_minify: Some(false)
            }
        );

        let empty: HostBuildConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, HostBuildConfig::default());
        assert!(empty.minify());
    }

    #[test]
    fn test_host_css_config_shape() {
        let json = serde_json::to_string(&host_css_config()).unwrap();
        assert_eq!(json, r#"{"css":{"lightningcss":{"drafts":{"customMedia":true}}}}"#);
    }
}
