//! Configuration file support.
//!
//! Loads an optional `storefront.toml`. Every key is optional; anything left
//! out keeps the built-in sample value.
//!
//! ```toml
//! brand = "電商平台"
//!
//! [assets]
//! tailwind_script = "https://cdn.tailwindcss.com"
//! stylesheets = []
//!
//! [[products]]
//! id = 1
//! name = "時尚手機"
//! price = 12999
//! original_price = 15999
//! image = "https://via.placeholder.com/300x300/3B82F6/FFFFFF?text=Phone"
//! badge = "熱銷"
//! rating = 4.8
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use storefront_leptos::types::ProductEntry;
use storefront_leptos::{Site, SiteAssets};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "storefront.toml";

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorefrontConfig {
    /// Brand name override
    pub brand: Option<String>,
    pub assets: SiteAssets,
    /// Replaces the sample catalog when present
    pub products: Option<Vec<ProductEntry>>,
}

impl StorefrontConfig {
    /// Load `storefront.toml` from `root`.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from_path(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("ignoring {}: {:#}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load config from a specific path. Missing or malformed files are errors.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Apply the overrides on top of the built-in site.
    pub fn into_site(self) -> Site {
        let mut site = Site::default();
        if let Some(brand) = self.brand {
            site.brand = brand;
        }
        site.assets = self.assets;
        if let Some(products) = self.products {
            site.products = products;
        }
        site
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use storefront_leptos::DEFAULT_TAILWIND_SCRIPT;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, body: &str) -> std::path::PathBuf {
        let path = dir.path().join(CONFIG_FILE);
        let mut file = std::fs::File::create(&path).expect("create config");
        writeln!(file, "{}", body).expect("write config");
        path
    }

    #[test]
    fn test_default_config_is_the_sample_site() {
        let site = StorefrontConfig::default().into_site();
        assert_eq!(site, Site::default());
        assert_eq!(site.assets.tailwind_script, DEFAULT_TAILWIND_SCRIPT);
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = StorefrontConfig::load(temp.path());
        assert_eq!(config, StorefrontConfig::default());
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        write_config(
            &temp,
            r#"
brand = "夜市小舖"

[assets]
tailwind_script = ""
stylesheets = ["/css/site.css"]

[[products]]
id = 7
name = "竹編提籃"
price = 680
original_price = 880
image = "/img/basket.png"
badge = "手作"
rating = 4.4
"#,
        );

        let site = StorefrontConfig::load(temp.path()).into_site();
        assert_eq!(site.brand, "夜市小舖");
        assert!(site.assets.tailwind_script.is_empty());
        assert_eq!(site.assets.stylesheets, vec!["/css/site.css".to_string()]);
        assert_eq!(site.products.len(), 1);
        assert_eq!(site.products[0].price_label(), "NT$ 680");
    }

    #[test]
    fn test_partial_assets_keep_defaults() {
        let temp = TempDir::new().expect("temp dir");
        write_config(&temp, "[assets]\nstylesheets = [\"/a.css\"]");

        let site = StorefrontConfig::load(temp.path()).into_site();
        assert_eq!(site.assets.tailwind_script, DEFAULT_TAILWIND_SCRIPT);
        assert_eq!(site.products, Site::default().products);
    }

    #[test]
    fn test_load_invalid_config_falls_back_to_default() {
        let temp = TempDir::new().expect("temp dir");
        write_config(&temp, "brand = [not toml");

        let config = StorefrontConfig::load(temp.path());
        assert_eq!(config, StorefrontConfig::default());
    }

    #[test]
    fn test_misspelled_asset_key_is_rejected() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_config(&temp, "[assets]\ntailwind_scirpt = \"\"");

        let err = StorefrontConfig::load_from_path(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("tailwind_scirpt"));

        let config = StorefrontConfig::load(temp.path());
        assert_eq!(config, StorefrontConfig::default());
    }

    #[test]
    fn test_explicit_path_reports_errors() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_config(&temp, "unknown_key = true");

        let err = StorefrontConfig::load_from_path(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("failed to parse"));

        let missing = temp.path().join("nope.toml");
        assert!(StorefrontConfig::load_from_path(&missing).is_err());
    }
}
