//! The fixed navigation map.
//!
//! Five static paths, nothing dynamic: no parameters, no guards, no query
//! strings. [`navigation_map`] is the single source of truth for navbar
//! order and for the files written by the site builder.

use std::fmt;

/// A navigable page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Products,
    Categories,
    About,
    Contact,
}

impl Route {
    /// All routes in navbar order.
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::Products,
        Route::Categories,
        Route::About,
        Route::Contact,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Products => "/products",
            Route::Categories => "/categories",
            Route::About => "/about",
            Route::Contact => "/contact",
        }
    }

    /// Stable identifier, rendered as `data-route` on the page's `<main>`.
    pub fn key(self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Products => "products",
            Route::Categories => "categories",
            Route::About => "about",
            Route::Contact => "contact",
        }
    }

    /// Navbar link text.
    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Products => "Products",
            Route::Categories => "Categories",
            Route::About => "About",
            Route::Contact => "Contact",
        }
    }

    /// Page heading and `<title>` prefix.
    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "首頁",
            Route::Products => "全部商品",
            Route::Categories => "商品分類",
            Route::About => "關於我們",
            Route::Contact => "聯絡我們",
        }
    }

    /// Where the static builder writes this page, relative to the out dir.
    pub fn output_file(self) -> &'static str {
        match self {
            Route::Home => "index.html",
            Route::Products => "products/index.html",
            Route::Categories => "categories/index.html",
            Route::About => "about/index.html",
            Route::Contact => "contact/index.html",
        }
    }

    /// Match a request path.
    ///
    /// Leading/trailing slashes and a trailing `index.html` are ignored, so
    /// `/about`, `/about/`, `about` and `/about/index.html` all match.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim();
        let path = match path {
            "index.html" => "",
            _ => path.strip_suffix("/index.html").unwrap_or(path),
        };
        let key = path.trim_matches('/');
        if key.is_empty() {
            return Some(Route::Home);
        }
        Self::ALL
            .into_iter()
            .find(|route| route != &Route::Home && route.key() == key)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// `(path, route)` pairs in navbar order.
pub fn navigation_map() -> [(&'static str, Route); 5] {
    Route::ALL.map(|route| (route.path(), route))
}

/// Output file for the not-found page.
pub const NOT_FOUND_FILE: &str = "404.html";
