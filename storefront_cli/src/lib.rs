//! # storefront
//!
//! Command-line front end for [`storefront_leptos`]: loads `storefront.toml`,
//! writes the static site, renders single pages and resolves button classes.

pub mod cli;
pub mod config;
pub mod site;

pub use config::StorefrontConfig;
pub use site::build_site;
