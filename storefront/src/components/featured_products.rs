//! Featured product grid.
//!
//! One column on phones, two from `sm`, three from `lg`. Each card shows the
//! badge over the image, a five-star rating, the discounted price next to the
//! struck-through original, and two small buttons.

use leptos::prelude::*;

use super::button::Button;
use super::icons::{ICON_STAR, Icon};
use crate::styles::{Size, Variant};
use crate::types::{MAX_STARS, ProductEntry};

#[component]
pub fn FeaturedProducts(products: Vec<ProductEntry>) -> impl IntoView {
    view! {
        <section data-section="featured-products" class="bg-gray-50 dark:bg-gray-800 py-8 sm:py-12 md:py-16 lg:py-20">
            <div class="py-4 px-4 mx-auto max-w-screen-xl sm:py-6 md:py-8">
                <div class="text-center mb-8 sm:mb-10 md:mb-12 lg:mb-16">
                    <h2 class="mb-3 text-2xl font-extrabold tracking-tight leading-tight text-gray-900 sm:text-3xl md:text-4xl lg:text-5xl dark:text-white sm:mb-4 md:mb-6">
                        "特色商品"
                    </h2>
                    <p class="text-base font-normal text-gray-500 sm:text-lg md:text-xl dark:text-gray-400">
                        "精選優質商品，為您帶來最佳購物體驗"
                    </p>
                </div>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4 sm:gap-6 md:gap-8">
                    {products
                        .into_iter()
                        .map(|product| view! { <ProductCard product=product /> })
                        .collect::<Vec<_>>()}
                </div>
                <div class="text-center mt-8 sm:mt-10 md:mt-12 lg:mt-16">
                    <Button
                        variant=Variant::Secondary
                        size=Size::Lg
                        class="w-full sm:w-auto px-6 py-3 sm:px-8 sm:py-4 text-sm sm:text-base"
                        log="查看所有商品"
                    >
                        "查看所有商品"
                    </Button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProductCard(product: ProductEntry) -> impl IntoView {
    let filled = product.filled_stars();
    let price = product.price_label();
    let original_price = product.original_price_label();
    let rating = format!("({:.1})", product.rating);
    let card_id = format!("product-{}", product.id);
    let cart_log = format!("加入購物車: {}", product.name);
    let detail_log = format!("查看詳情: {}", product.name);
    let ProductEntry {
        name, image, badge, ..
    } = product;
    let alt = name.clone();

    let stars = (0..MAX_STARS)
        .map(|i| {
            let tone = if i < filled { "text-yellow-300" } else { "text-gray-300" };
            let class = format!("w-3 h-3 sm:w-4 sm:h-4 {} mr-1", tone);
            view! { <Icon shape=ICON_STAR class=class /> }
        })
        .collect::<Vec<_>>();

    view! {
        <div
            id=card_id
            class="w-full bg-white border border-gray-200 rounded-lg shadow dark:bg-gray-900 dark:border-gray-700 hover:shadow-lg transition-all duration-300 transform hover:-translate-y-1"
        >
            <div class="relative">
                <img
                    class="rounded-t-lg w-full h-48 sm:h-56 md:h-64 lg:h-56 xl:h-64 object-cover"
                    src=image
                    alt=alt
                />
                <span class="absolute top-2 left-2 bg-red-500 text-white text-xs font-bold px-2 py-1 rounded sm:text-sm">
                    {badge}
                </span>
            </div>
            <div class="p-4 sm:p-5 md:p-6">
                <h5 class="mb-2 text-lg font-bold tracking-tight text-gray-900 sm:text-xl dark:text-white">
                    {name}
                </h5>
                <div class="flex items-center mb-3">
                    <div class="flex items-center">
                        {stars}
                        <span class="ml-1 text-xs sm:text-sm text-gray-500">{rating}</span>
                    </div>
                </div>
                <div class="flex items-center justify-between mb-4">
                    <div class="flex flex-col sm:flex-row sm:items-center">
                        <span class="text-xl sm:text-2xl font-bold text-gray-900 dark:text-white">
                            {price}
                        </span>
                        <span class="text-sm text-gray-500 line-through sm:ml-2">
                            {original_price}
                        </span>
                    </div>
                </div>
                <div class="flex flex-col space-y-2 sm:flex-row sm:space-y-0 sm:space-x-2">
                    <Button
                        variant=Variant::Primary
                        size=Size::Sm
                        class="flex-1 text-xs sm:text-sm px-3 py-2 sm:px-4 sm:py-2"
                        log=cart_log
                    >
                        "加入購物車"
                    </Button>
                    <Button
                        variant=Variant::Outline
                        size=Size::Sm
                        class="flex-1 sm:flex-none text-xs sm:text-sm px-3 py-2 sm:px-4 sm:py-2"
                        log=detail_log
                    >
                        "詳情"
                    </Button>
                </div>
            </div>
        </div>
    }
}
