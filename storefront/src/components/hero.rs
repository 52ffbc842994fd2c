//! Hero banner: headline, pitch, two calls to action, stats row.
//!
//! Type and spacing scale up at every breakpoint. Buttons stack full-width
//! on phones and sit side by side from `sm`. The stats row only shows from
//! `md` up.

use leptos::prelude::*;

use super::button::Button;
use super::icons::{ICON_ARROW_RIGHT, Icon};
use crate::styles::{Size, Variant};
use crate::types::HERO_STATS;

const CTA_CLASS: &str = "w-full sm:w-auto px-6 py-3 sm:px-8 sm:py-4 text-sm sm:text-base";

#[component]
pub fn Hero() -> impl IntoView {
    let stats = HERO_STATS
        .iter()
        .map(|stat| {
            let value_class = format!("text-2xl lg:text-3xl font-bold {}", stat.color);
            view! {
                <div class="text-center">
                    <div class=value_class>{stat.value}</div>
                    <div class="text-sm lg:text-base text-gray-500 dark:text-gray-400">
                        {stat.label}
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section data-section="hero" class="bg-white dark:bg-gray-900">
            <div class="py-8 px-4 mx-auto max-w-screen-xl text-center sm:py-12 md:py-16 lg:py-20 xl:py-24">
                <h1 class="mb-4 text-3xl font-extrabold tracking-tight leading-tight text-gray-900 sm:text-4xl md:text-5xl lg:text-6xl xl:text-7xl dark:text-white sm:mb-6 md:mb-8">
                    "專業電商平台"
                </h1>
                <p class="mb-6 text-base font-normal text-gray-500 sm:text-lg md:text-xl lg:text-xl sm:px-8 md:px-16 lg:px-32 xl:px-48 dark:text-gray-400 sm:mb-8 md:mb-10">
                    "探索最新的產品系列，享受優質的購物體驗。我們提供高品質的商品和專業的客戶服務，讓您的購物之旅更加愉快。"
                </p>
                <div class="flex flex-col space-y-3 sm:flex-row sm:justify-center sm:space-y-0 sm:space-x-3 md:space-x-4 lg:space-x-6">
                    <Button variant=Variant::Primary size=Size::Lg class=CTA_CLASS log="開始購物">
                        "立即購物"
                        <Icon shape=ICON_ARROW_RIGHT class="w-3 h-3 ml-2 sm:w-3.5 sm:h-3.5 sm:ml-3" />
                    </Button>
                    <Button variant=Variant::Outline size=Size::Lg class=CTA_CLASS log="了解更多">
                        "了解更多"
                    </Button>
                </div>
                <div class="hidden md:flex justify-center mt-12 lg:mt-16 xl:mt-20 space-x-8 lg:space-x-12">
                    {stats}
                </div>
            </div>
        </section>
    }
}
