//! Leptos UI components for the storefront pages.
//!
//! Every component is stateless and renders from its props alone. They are
//! rendered server-side into static HTML; nothing hydrates.
//!
//! # Component Hierarchy
//!
//! ```text
//! SiteDocument
//! ├── Navbar
//! ├── <main data-route=...>        (see crate::composer)
//! │   ├── Hero
//! │   ├── FeaturedProducts
//! │   │   └── ProductCard (per product)
//! │   ├── ResponsiveDemo
//! │   │   └── DeviceCard (per breakpoint)
//! │   ├── PageHeader
//! │   ├── CategoryGrid / AboutSection / ContactSection
//! │   └── NotFoundSection
//! └── Footer
//! ```
//!
//! Buttons everywhere go through [`Button`], which resolves its classes with
//! [`crate::styles::ButtonConfig`].

mod button;
mod document;
mod featured_products;
mod footer;
mod hero;
mod icons;
mod navbar;
mod pages;
mod responsive_demo;

pub use button::Button;
pub use document::SiteDocument;
pub use featured_products::FeaturedProducts;
pub use footer::Footer;
pub use hero::Hero;
pub use icons::*;
pub use navbar::Navbar;
pub use pages::{AboutSection, CategoryGrid, ContactSection, NotFoundSection, PageHeader};
pub use responsive_demo::ResponsiveDemo;
