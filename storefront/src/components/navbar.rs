//! Top navigation bar.
//!
//! Collapses behind a hamburger toggle below `md`. The toggle carries
//! `data-collapse-toggle` with the id of the menu it opens; the page script
//! flips the menu's `hidden` class.

use leptos::prelude::*;

use super::icons::{ICON_HOME, ICON_MENU, Icon};
use crate::routes::{Route, navigation_map};

const MENU_ID: &str = "navbar-menu";

const LINK_CLASS: &str = "block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 md:hover:bg-transparent md:border-0 md:hover:text-blue-700 md:p-0 dark:text-white md:dark:hover:text-blue-500 dark:hover:bg-gray-700 dark:hover:text-white md:dark:hover:bg-transparent";
const ACTIVE_LINK_CLASS: &str = "block py-2 px-3 text-white bg-blue-700 rounded md:bg-transparent md:text-blue-700 md:p-0 dark:text-white md:dark:text-blue-500";

#[component]
pub fn Navbar(
    #[prop(into)] brand: String,
    /// Highlighted link; `None` on pages outside the map
    #[prop(optional)]
    active: Option<Route>,
) -> impl IntoView {
    let links = navigation_map()
        .into_iter()
        .map(|(path, route)| {
            let is_active = active == Some(route);
            let class = if is_active { ACTIVE_LINK_CLASS } else { LINK_CLASS };
            let current = is_active.then_some("page");
            view! {
                <li>
                    <a href=path class=class aria-current=current>
                        {route.label()}
                    </a>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <nav class="bg-white border-gray-200 rounded dark:bg-gray-900">
            <div class="flex flex-wrap items-center justify-between mx-auto p-4">
                <a href="/" class="flex items-center space-x-3">
                    <Icon shape=ICON_HOME class="w-6 h-6 text-blue-600 sm:w-8 sm:h-8" />
                    <span class="self-center text-xl font-semibold whitespace-nowrap dark:text-white">
                        {brand}
                    </span>
                </a>
                <button
                    type="button"
                    data-collapse-toggle=MENU_ID
                    aria-controls=MENU_ID
                    aria-expanded="false"
                    class="inline-flex items-center p-2 w-10 h-10 justify-center text-sm text-gray-500 rounded-lg md:hidden hover:bg-gray-100 focus:outline-none focus:ring-2 focus:ring-gray-200 dark:text-gray-400 dark:hover:bg-gray-700 dark:focus:ring-gray-600"
                >
                    <span class="sr-only">"Open main menu"</span>
                    <Icon shape=ICON_MENU class="w-5 h-5" />
                </button>
                <div class="hidden w-full md:block md:w-auto" id=MENU_ID>
                    <ul class="font-medium flex flex-col p-4 md:p-0 mt-4 border border-gray-100 rounded-lg bg-gray-50 md:flex-row md:space-x-8 md:mt-0 md:border-0 md:bg-white dark:bg-gray-800 md:dark:bg-gray-900 dark:border-gray-700">
                        {links}
                    </ul>
                </div>
            </div>
        </nav>
    }
}
