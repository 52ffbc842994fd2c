use leptos::prelude::*;

use super::icons::{ICON_HOME, Icon, SOCIAL_LINKS};
use crate::types::{COMPANY_BLURB, FOOTER_COLUMNS, FooterColumn};

const FOOTER_LINK_CLASS: &str = "text-sm hover:underline sm:text-base hover:text-gray-700 dark:hover:text-gray-300 transition-colors";

#[component]
pub fn Footer(#[prop(into)] brand: String) -> impl IntoView {
    let copyright_brand = brand.clone();

    let columns = FOOTER_COLUMNS
        .iter()
        .map(|column| view! { <LinkColumn column=*column /> })
        .collect::<Vec<_>>();

    let socials = SOCIAL_LINKS
        .iter()
        .map(|(shape, label)| {
            view! {
                <a href="#" class="text-gray-400 hover:text-gray-500 dark:hover:text-white transition-colors">
                    <Icon shape=*shape class="w-4 h-4 sm:w-5 sm:h-5" />
                    <span class="sr-only">{*label}</span>
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <footer class="bg-white dark:bg-gray-900 border-t">
            <div class="mx-auto w-full max-w-screen-xl p-4 py-6 lg:py-8">
                <div class="md:flex md:justify-between">
                    <div class="mb-6 md:mb-0 md:w-1/3 lg:w-auto">
                        <a href="/" class="flex items-center mb-4">
                            <Icon shape=ICON_HOME class="w-6 h-6 mr-2 text-blue-600 sm:w-8 sm:h-8" />
                            <span class="self-center text-xl font-semibold whitespace-nowrap dark:text-white sm:text-2xl">
                                {brand}
                            </span>
                        </a>
                        <p class="text-sm text-gray-500 dark:text-gray-400 max-w-sm sm:text-base lg:max-w-xs xl:max-w-sm">
                            {COMPANY_BLURB}
                        </p>
                    </div>
                    <div class="grid grid-cols-1 gap-6 sm:grid-cols-3 sm:gap-6 md:gap-8 lg:gap-6 xl:gap-8">
                        {columns}
                    </div>
                </div>
                <hr class="my-6 border-gray-200 sm:mx-auto dark:border-gray-700 sm:my-8" />
                <div class="flex flex-col items-center space-y-4 sm:flex-row sm:items-center sm:justify-between sm:space-y-0">
                    <span class="text-xs text-gray-500 text-center dark:text-gray-400 sm:text-sm sm:text-left">
                        "© 2024 "
                        <a href="/" class="hover:underline hover:text-gray-700 dark:hover:text-gray-300 transition-colors">
                            {copyright_brand}
                        </a>
                        ". 版權所有."
                    </span>
                    <div class="flex space-x-4 sm:space-x-5">{socials}</div>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn LinkColumn(column: FooterColumn) -> impl IntoView {
    view! {
        <div>
            <h2 class="mb-4 text-sm font-semibold text-gray-900 uppercase dark:text-white sm:text-base sm:mb-6">
                {column.title}
            </h2>
            <ul class="text-gray-500 dark:text-gray-400 font-medium space-y-2 sm:space-y-3">
                {column
                    .links
                    .iter()
                    .map(|link| {
                        view! {
                            <li>
                                <a href=link.href class=FOOTER_LINK_CLASS>{link.label}</a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
