//! # storefront-leptos
//!
//! Leptos SSR renderer for a static e-commerce storefront.
//!
//! Pages are composed from stateless components with fixed sample data and
//! rendered to complete HTML documents. Styling is Tailwind utility classes;
//! the only real decision logic is the button style resolver in [`styles`].
//!
//! ## Quick Start
//!
//! ```rust
//! use storefront_leptos::{render_page, Route, Site};
//!
//! let site = Site::default();
//! let html = render_page(Route::Home, &site);
//!
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("data-route=\"home\""));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - sample catalog and static copy
//! - [`styles`] - button style resolution
//! - [`routes`] - the fixed navigation map
//! - [`composer`] - which sections each route renders
//! - [`components`] - Leptos UI components
//!
//! ## Leptos 0.8 SSR
//!
//! Rendering goes through Leptos 0.8's `RenderHtml` trait. There is no
//! reactive runtime and no hydration; output is plain static HTML.

pub mod components;
pub mod composer;
pub mod routes;
pub mod styles;
pub mod types;

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use serde::{Deserialize, Serialize};

use components::SiteDocument;
use composer::{NotFoundPage, Page};
use types::{ProductEntry, sample_products};

pub use routes::{NOT_FOUND_FILE, Route, navigation_map};
pub use styles::{ButtonConfig, Size, StyleError, Variant};

/// Tailwind's Play CDN build, which compiles utility classes in the browser.
pub const DEFAULT_TAILWIND_SCRIPT: &str = "https://cdn.tailwindcss.com";

/// External assets referenced from `<head>`.
///
/// An empty `tailwind_script` leaves the tag out, e.g. when a prebuilt
/// stylesheet is listed in `stylesheets` instead.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteAssets {
    pub tailwind_script: String,
    pub stylesheets: Vec<String>,
}

impl Default for SiteAssets {
    fn default() -> Self {
        Self {
            tailwind_script: DEFAULT_TAILWIND_SCRIPT.to_string(),
            stylesheets: Vec::new(),
        }
    }
}

/// Everything a page render needs besides the route.
#[derive(Clone, Debug, PartialEq)]
pub struct Site {
    /// Brand name shown in the navbar, footer and `<title>`
    pub brand: String,
    pub assets: SiteAssets,
    /// Cards in the featured grid
    pub products: Vec<ProductEntry>,
}

impl Default for Site {
    fn default() -> Self {
        Self {
            brand: "電商平台".to_string(),
            assets: SiteAssets::default(),
            products: sample_products(),
        }
    }
}

impl Site {
    fn page_title(&self, heading: &str) -> String {
        format!("{} | {}", heading, self.brand)
    }
}

/// Render one route to a complete HTML document.
///
/// # Example
///
/// ```rust
/// use storefront_leptos::{render_page, Route, Site};
///
/// let html = render_page(Route::About, &Site::default());
/// assert!(html.contains("<title>關於我們 | 電商平台</title>"));
/// ```
pub fn render_page(route: Route, site: &Site) -> String {
    // Children must be 'static, so nothing borrowed from `site` goes inside
    let products = site.products.clone();
    let doc = view! {
        <SiteDocument
            title=site.page_title(route.title())
            brand=site.brand.clone()
            assets=site.assets.clone()
            active=route
        >
            <Page route=route products=products />
        </SiteDocument>
    };

    let html = with_doctype(doc.to_html());
    tracing::debug!(route = route.key(), bytes = html.len(), "rendered page");
    html
}

/// Render a request path, or `None` when it is not in the navigation map.
pub fn render_path(path: &str, site: &Site) -> Option<String> {
    Route::from_path(path).map(|route| render_page(route, site))
}

/// Render the 404 document.
pub fn render_not_found(site: &Site) -> String {
    let doc = view! {
        <SiteDocument
            title=site.page_title("404")
            brand=site.brand.clone()
            assets=site.assets.clone()
        >
            <NotFoundPage />
        </SiteDocument>
    };

    with_doctype(doc.to_html())
}

// Leptos doesn't include DOCTYPE, so we add it
fn with_doctype(html: String) -> String {
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section_marker(key: &str) -> String {
        format!("data-section=\"{}\"", key)
    }

    #[test]
    fn renders_complete_document() {
        let html = render_page(Route::Home, &Site::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("<title>首頁 | 電商平台</title>"));
        assert!(html.contains(DEFAULT_TAILWIND_SCRIPT));
        assert!(html.contains("<nav"));
        assert!(html.contains("<footer"));
    }

    #[test]
    fn every_path_renders_exactly_one_matching_route() {
        let site = Site::default();
        for (path, route) in navigation_map() {
            let html = render_path(path, &site).expect("known path renders");
            let marker = format!("data-route=\"{}\"", route.key());

            assert_eq!(html.matches("data-route=").count(), 1, "{path}");
            assert_eq!(html.matches(&marker).count(), 1, "{path}");
        }
    }

    #[test]
    fn unknown_path_renders_nothing() {
        assert!(render_path("/cart", &Site::default()).is_none());
    }

    #[test]
    fn home_sections_render_in_order() {
        let html = render_page(Route::Home, &Site::default());
        let positions: Vec<usize> = composer::sections(Route::Home)
            .iter()
            .map(|key| html.find(&section_marker(key)).expect("section rendered"))
            .collect();

        assert_eq!(positions.len(), 3);
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(html.contains("專業電商平台"));
        assert!(html.contains("特色商品"));
        assert!(html.contains("響應式設計展示"));
    }

    #[test]
    fn each_route_renders_its_listed_sections() {
        let site = Site::default();
        for route in Route::ALL {
            let html = render_page(route, &site);
            for key in composer::sections(route) {
                assert_eq!(html.matches(&section_marker(key)).count(), 1, "{route} {key}");
            }
        }
    }

    #[test]
    fn navbar_marks_only_the_active_route() {
        let html = render_page(Route::Contact, &Site::default());

        assert_eq!(html.matches("aria-current=\"page\"").count(), 1);
        for (path, _) in navigation_map() {
            assert!(html.contains(&format!("href=\"{}\"", path)));
        }
    }

    #[test]
    fn product_cards_show_prices_ratings_and_badges() {
        let html = render_page(Route::Products, &Site::default());

        assert!(html.contains("id=\"product-1\""));
        assert!(html.contains("NT$ 12,999"));
        assert!(html.contains("NT$ 15,999"));
        assert!(html.contains("(4.9)"));
        assert!(html.contains("限時優惠"));
        assert!(html.contains("data-log=\"加入購物車: 無線耳機\""));
        // 4 + 4 + 4 filled stars across the three sample products
        assert_eq!(html.matches("text-yellow-300").count(), 12);
    }

    #[test]
    fn custom_catalog_replaces_sample_products() {
        let site = Site {
            products: vec![ProductEntry {
                id: 42,
                name: "測試商品".into(),
                price: 1_500,
                original_price: 2_000,
                badge: "試用".into(),
                rating: 3.2,
                ..Default::default()
            }],
            ..Default::default()
        };
        let html = render_page(Route::Products, &site);

        assert!(html.contains("id=\"product-42\""));
        assert!(html.contains("NT$ 1,500"));
        assert!(!html.contains("時尚手機"));
        assert_eq!(html.matches("text-yellow-300").count(), 3);
    }

    #[test]
    fn buttons_carry_resolved_classes() {
        let html = render_page(Route::Home, &Site::default());

        let responsive_lg = ButtonConfig::new(Variant::Primary, Size::Lg)
            .responsive(true)
            .resolve();
        assert!(html.contains(&format!("class=\"{}\"", responsive_lg)));
        assert!(html.contains("data-log=\"開始購物\""));
        assert!(html.contains("data-variant=\"success\""));
    }

    #[test]
    fn empty_tailwind_script_is_omitted() {
        let site = Site {
            assets: SiteAssets {
                tailwind_script: String::new(),
                stylesheets: vec!["/assets/site.css".into()],
            },
            ..Default::default()
        };
        let html = render_page(Route::About, &site);

        assert!(!html.contains(DEFAULT_TAILWIND_SCRIPT));
        assert!(html.contains("href=\"/assets/site.css\""));
    }

    #[test]
    fn not_found_page_has_no_active_link() {
        let html = render_not_found(&Site::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("data-route=\"not-found\""));
        assert!(html.contains("找不到這個頁面"));
        assert!(!html.contains("aria-current"));
    }

    #[test]
    fn brand_flows_into_navbar_footer_and_title() {
        let site = Site {
            brand: "Night Market".into(),
            ..Default::default()
        };
        let html = render_page(Route::Categories, &site);

        assert!(html.contains("<title>商品分類 | Night Market</title>"));
        assert!(html.matches("Night Market").count() >= 3);
        assert!(html.contains("電子產品"));
    }
}
