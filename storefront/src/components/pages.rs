//! Sections used by the secondary pages.
//!
//! These pages reuse the storefront copy that already exists in the footer
//! and hero rather than introducing new content.

use leptos::prelude::*;

use super::button::Button;
use crate::routes::Route;
use crate::styles::{ButtonConfig, Size, Variant};
use crate::types::{COMPANY_BLURB, CUSTOMER_SERVICE, HERO_STATS, PRODUCT_CATEGORIES};

/// Title band at the top of a secondary page.
#[component]
pub fn PageHeader(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <section data-section="page-header" class="bg-white dark:bg-gray-900">
            <div class="py-8 px-4 mx-auto max-w-screen-xl text-center sm:py-12 md:py-16">
                <h1 class="mb-3 text-3xl font-extrabold tracking-tight text-gray-900 sm:text-4xl md:text-5xl dark:text-white sm:mb-4">
                    {title}
                </h1>
                <p class="text-base font-normal text-gray-500 sm:text-lg md:text-xl dark:text-gray-400">
                    {description}
                </p>
            </div>
        </section>
    }
}

#[component]
pub fn CategoryGrid() -> impl IntoView {
    let cards = PRODUCT_CATEGORIES
        .iter()
        .map(|category| {
            let log = format!("瀏覽分類: {}", category.label);
            view! {
                <div class="bg-white border border-gray-200 rounded-lg shadow p-4 sm:p-6 text-center dark:bg-gray-900 dark:border-gray-700">
                    <h3 class="mb-4 text-lg font-bold text-gray-900 sm:text-xl dark:text-white">
                        <a href=category.href class="hover:underline">{category.label}</a>
                    </h3>
                    <Button variant=Variant::Outline size=Size::Sm full_width=true log=log>
                        "瀏覽商品"
                    </Button>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section data-section="categories" class="bg-gray-50 dark:bg-gray-800 py-8 sm:py-12 md:py-16">
            <div class="px-4 mx-auto max-w-screen-xl">
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4 sm:gap-6 md:gap-8">
                    {cards}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn AboutSection() -> impl IntoView {
    let stats = HERO_STATS
        .iter()
        .map(|stat| {
            let value_class = format!("text-2xl lg:text-3xl font-bold {}", stat.color);
            view! {
                <div class="bg-white dark:bg-gray-900 p-4 sm:p-6 rounded-lg text-center">
                    <div class=value_class>{stat.value}</div>
                    <div class="text-sm lg:text-base text-gray-500 dark:text-gray-400">{stat.label}</div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section data-section="about" class="bg-gray-50 dark:bg-gray-800 py-8 sm:py-12 md:py-16">
            <div class="px-4 mx-auto max-w-screen-md text-center">
                <p class="mb-8 text-base text-gray-600 sm:text-lg dark:text-gray-400">{COMPANY_BLURB}</p>
                <div class="grid grid-cols-1 sm:grid-cols-3 gap-4 sm:gap-6">{stats}</div>
            </div>
        </section>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let links = CUSTOMER_SERVICE
        .iter()
        .filter(|link| link.href != Route::Contact.path())
        .map(|link| {
            view! {
                <li>
                    <a href=link.href class="text-sm hover:underline sm:text-base hover:text-gray-700 dark:hover:text-gray-300">
                        {link.label}
                    </a>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section data-section="contact" class="bg-gray-50 dark:bg-gray-800 py-8 sm:py-12 md:py-16">
            <div class="px-4 mx-auto max-w-screen-md text-center">
                <p class="mb-6 text-base text-gray-600 sm:text-lg dark:text-gray-400">
                    "客服團隊全年無休，24/7 為您服務。"
                </p>
                <ul class="mb-8 text-gray-500 dark:text-gray-400 font-medium space-y-2 sm:space-y-3">
                    {links}
                </ul>
                <Button variant=Variant::Primary size=Size::Lg responsive=true log="聯絡客服">
                    "聯絡客服"
                </Button>
            </div>
        </section>
    }
}

/// Body of the 404 page.
#[component]
pub fn NotFoundSection() -> impl IntoView {
    // A link dressed as a primary button
    let home_class = ButtonConfig::new(Variant::Primary, Size::Md).resolve();

    view! {
        <section data-section="not-found" class="bg-white dark:bg-gray-900">
            <div class="py-16 px-4 mx-auto max-w-screen-md text-center sm:py-24">
                <h1 class="mb-4 text-5xl font-extrabold tracking-tight text-blue-700 sm:text-7xl dark:text-blue-500">
                    "404"
                </h1>
                <p class="mb-8 text-lg text-gray-500 sm:text-xl dark:text-gray-400">"找不到這個頁面"</p>
                <a href=Route::Home.path() class=home_class>
                    "回到首頁"
                </a>
            </div>
        </section>
    }
}
