//! Root document component - the complete HTML page around a route's content.

use leptos::prelude::*;

use super::{Footer, Navbar};
use crate::SiteAssets;
use crate::routes::Route;
use crate::styles::SITE_CSS;

/// The complete HTML document: head, navbar, content, footer, page script.
#[component]
pub fn SiteDocument(
    #[prop(into)] title: String,
    #[prop(into)] brand: String,
    assets: SiteAssets,
    /// Route highlighted in the navbar
    #[prop(optional)]
    active: Option<Route>,
    children: Children,
) -> impl IntoView {
    let footer_brand = brand.clone();
    let SiteAssets {
        tailwind_script,
        stylesheets,
    } = assets;

    let tailwind = (!tailwind_script.is_empty()).then(|| view! { <script src=tailwind_script></script> });
    let stylesheets = stylesheets
        .into_iter()
        .filter(|href| !href.is_empty())
        .map(|href| view! { <link rel="stylesheet" href=href /> })
        .collect::<Vec<_>>();

    let navbar = match active {
        Some(route) => view! { <Navbar brand=brand active=route /> }.into_any(),
        None => view! { <Navbar brand=brand /> }.into_any(),
    };

    view! {
        <html lang="zh-Hant">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1.0" />
                <title>{title}</title>
                {tailwind}
                {stylesheets}
                <style inner_html=SITE_CSS></style>
            </head>
            <body class="bg-white dark:bg-gray-900">
                {navbar}
                {children()}
                <Footer brand=footer_brand />
                <script inner_html=SITE_SCRIPT></script>
            </body>
        </html>
    }
}

/// Click logging for `data-log` buttons and the navbar collapse toggle.
const SITE_SCRIPT: &str = r#"
(function () {
  document.addEventListener('click', function (event) {
    var source = event.target.closest('[data-log]');
    if (source && !source.disabled) {
      console.log(source.getAttribute('data-log'));
    }
  });

  document.querySelectorAll('[data-collapse-toggle]').forEach(function (toggle) {
    toggle.addEventListener('click', function () {
      var menu = document.getElementById(toggle.getAttribute('data-collapse-toggle'));
      if (!menu) {
        return;
      }
      var hidden = menu.classList.toggle('hidden');
      toggle.setAttribute('aria-expanded', String(!hidden));
    });
  });
})();
"#;
