//! Page composition: which sections each route renders, and in what order.
//!
//! The layout is fixed at compile time. Every page is `<main
//! data-route=KEY>` holding its sections; the document shell adds the navbar
//! and footer around it.

use leptos::prelude::*;

use crate::components::{
    AboutSection, CategoryGrid, ContactSection, FeaturedProducts, Hero, NotFoundSection,
    PageHeader, ResponsiveDemo,
};
use crate::routes::Route;
use crate::types::ProductEntry;

/// `data-route` value of the not-found page.
pub const NOT_FOUND_KEY: &str = "not-found";

/// `data-section` keys rendered for a route, in render order.
pub fn sections(route: Route) -> &'static [&'static str] {
    match route {
        Route::Home => &["hero", "featured-products", "responsive-demo"],
        Route::Products => &["page-header", "featured-products"],
        Route::Categories => &["page-header", "categories"],
        Route::About => &["page-header", "about"],
        Route::Contact => &["page-header", "contact"],
    }
}

/// The `<main>` content of one route.
#[component]
pub fn Page(route: Route, products: Vec<ProductEntry>) -> impl IntoView {
    let content = match route {
        Route::Home => view! {
            <Hero />
            <FeaturedProducts products=products />
            <ResponsiveDemo />
        }
        .into_any(),
        Route::Products => view! {
            <PageHeader title=route.title() description="所有精選商品，一次瀏覽" />
            <FeaturedProducts products=products />
        }
        .into_any(),
        Route::Categories => view! {
            <PageHeader title=route.title() description="依分類探索您喜愛的商品" />
            <CategoryGrid />
        }
        .into_any(),
        Route::About => view! {
            <PageHeader title=route.title() description="認識我們的團隊與理念" />
            <AboutSection />
        }
        .into_any(),
        Route::Contact => view! {
            <PageHeader title=route.title() description="有任何問題，歡迎與我們聯繫" />
            <ContactSection />
        }
        .into_any(),
    };

    view! { <main data-route=route.key()>{content}</main> }
}

/// The `<main>` content of the 404 page.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <main data-route=NOT_FOUND_KEY>
            <NotFoundSection />
        </main>
    }
}
