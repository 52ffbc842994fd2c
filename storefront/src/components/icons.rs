//! Inline SVG icons.
//!
//! Every icon is a single `<path>` with its own view box. Filled icons use
//! `currentColor` as fill, stroked icons draw a 2px `currentColor` outline,
//! so color always comes from the Tailwind `text-*` class on the element.

use leptos::prelude::*;

/// Path data plus the geometry needed to draw it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconShape {
    /// SVG path data (the `d` attribute value)
    pub path: &'static str,
    /// The `viewBox` the path was drawn in
    pub view_box: &'static str,
    /// Outline instead of fill
    pub stroke: bool,
}

impl IconShape {
    pub const fn filled(path: &'static str, view_box: &'static str) -> Self {
        Self {
            path,
            view_box,
            stroke: false,
        }
    }

    pub const fn stroked(path: &'static str, view_box: &'static str) -> Self {
        Self {
            path,
            view_box,
            stroke: true,
        }
    }
}

/// Renders an [`IconShape`] as an inline, decorative SVG.
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon shape=ICON_STAR class="w-4 h-4 text-yellow-300" /> }
/// ```
#[component]
pub fn Icon(
    shape: IconShape,
    /// Tailwind classes for size and color
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    if shape.stroke {
        view! {
            <svg
                class=class
                aria-hidden="true"
                xmlns="http://www.w3.org/2000/svg"
                fill="none"
                viewBox=shape.view_box
            >
                <path
                    stroke="currentColor"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    stroke-width="2"
                    d=shape.path
                ></path>
            </svg>
        }
        .into_any()
    } else {
        view! {
            <svg
                class=class
                aria-hidden="true"
                xmlns="http://www.w3.org/2000/svg"
                fill="currentColor"
                viewBox=shape.view_box
            >
                <path fill-rule="evenodd" clip-rule="evenodd" d=shape.path></path>
            </svg>
        }
        .into_any()
    }
}

// =============================================================================
// Storefront icons
// =============================================================================

/// Right arrow for call-to-action buttons
pub const ICON_ARROW_RIGHT: IconShape = IconShape::stroked("M1 5h12m0 0L9 1m4 4L9 9", "0 0 14 10");

/// Rating star
pub const ICON_STAR: IconShape = IconShape::filled(
    "M20.924 7.625a1.523 1.523 0 0 0-1.238-1.044l-5.051-.734-2.259-4.577a1.534 1.534 0 0 0-2.752 0L7.365 5.847l-5.051.734A1.535 1.535 0 0 0 1.463 9.2l3.656 3.563-.863 5.031a1.532 1.532 0 0 0 2.226 1.616L11 17.033l4.518 2.375a1.534 1.534 0 0 0 2.226-1.617l-.863-5.03L20.537 9.2a1.523 1.523 0 0 0 .387-1.575Z",
    "0 0 22 20",
);

/// Hamburger for the collapsed navbar
pub const ICON_MENU: IconShape = IconShape::stroked("M1 1h15M1 7h15M1 13h15", "0 0 17 14");

/// House outline used as the brand mark
pub const ICON_HOME: IconShape = IconShape::filled(
    "M10 2L3 7v11a1 1 0 001 1h3a1 1 0 001-1v-4a1 1 0 011-1h2a1 1 0 011 1v4a1 1 0 001 1h3a1 1 0 001-1V7l-7-5z",
    "0 0 20 20",
);

/// Facebook logo
pub const ICON_FACEBOOK: IconShape = IconShape::filled(
    "M6.135 3H8V0H6.135a4.147 4.147 0 0 0-4.142 4.142V6H0v3h2v9.938h3V9h2.021l.592-3H5V3.591A.6.6 0 0 1 5.592 3h.543Z",
    "0 0 8 19",
);

/// Discord logo
pub const ICON_DISCORD: IconShape = IconShape::filled(
    "M16.942 1.556a16.3 16.3 0 0 0-4.126-1.3 12.04 12.04 0 0 0-.529 1.1 15.175 15.175 0 0 0-4.573 0 11.585 11.585 0 0 0-.535-1.1 16.274 16.274 0 0 0-4.129 1.3A17.392 17.392 0 0 0 .182 13.218a15.785 15.785 0 0 0 4.963 2.521c.41-.564.773-1.16 1.084-1.785a10.63 10.63 0 0 1-1.706-.83c.143-.106.283-.217.418-.33a11.664 11.664 0 0 0 10.118 0c.137.113.277.224.418.33-.544.328-1.116.606-1.71.832a12.52 12.52 0 0 0 1.084 1.785 16.46 16.46 0 0 0 5.064-2.595 17.286 17.286 0 0 0-2.973-11.59ZM6.678 10.813a1.941 1.941 0 0 1-1.8-2.045 1.93 1.93 0 0 1 1.8-2.047 1.919 1.919 0 0 1 1.8 2.047 1.93 1.93 0 0 1-1.8 2.045Zm6.644 0a1.94 1.94 0 0 1-1.8-2.045 1.93 1.93 0 0 1 1.8-2.047 1.918 1.918 0 0 1 1.8 2.047 1.93 1.93 0 0 1-1.8 2.045Z",
    "0 0 21 16",
);

/// Twitter logo
pub const ICON_TWITTER: IconShape = IconShape::filled(
    "M20 1.892a8.178 8.178 0 0 1-2.355.635 4.074 4.074 0 0 0 1.8-2.235 8.344 8.344 0 0 1-2.605.98A4.13 4.13 0 0 0 13.85 0a4.068 4.068 0 0 0-4.1 4.038 4 4 0 0 0 .105.919A11.705 11.705 0 0 1 1.4.734a4.006 4.006 0 0 0 1.268 5.392 4.165 4.165 0 0 1-1.859-.5v.05A4.057 4.057 0 0 0 4.1 9.635a4.19 4.19 0 0 1-1.856.07 4.108 4.108 0 0 0 3.831 2.807A8.36 8.36 0 0 1 0 14.184 11.732 11.732 0 0 0 6.291 16 11.502 11.502 0 0 0 17.964 4.5c0-.177 0-.35-.012-.523A8.143 8.143 0 0 0 20 1.892Z",
    "0 0 20 17",
);

/// GitHub mark
pub const ICON_GITHUB: IconShape = IconShape::filled(
    "M10 .333A9.911 9.911 0 0 0 6.866 19.65c.5.092.678-.215.678-.477 0-.237-.01-1.017-.014-1.845-2.757.6-3.338-1.169-3.338-1.169a2.627 2.627 0 0 0-1.1-1.451c-.9-.615.07-.6.07-.6a2.084 2.084 0 0 1 1.518 1.021 2.11 2.11 0 0 0 2.884.823c.044-.503.268-.973.63-1.325-2.2-.25-4.516-1.1-4.516-4.9A3.832 3.832 0 0 1 4.7 7.068a3.56 3.56 0 0 1 .095-2.623s.832-.266 2.726 1.016a9.409 9.409 0 0 1 4.962 0c1.89-1.282 2.717-1.016 2.717-1.016.366.83.402 1.768.1 2.623a3.827 3.827 0 0 1 1.02 2.659c0 3.807-2.319 4.644-4.525 4.889a2.366 2.366 0 0 1 .673 1.834c0 1.326-.012 2.394-.012 2.72 0 .263.18.572.681.475A9.911 9.911 0 0 0 10 .333Z",
    "0 0 20 20",
);

/// Social links shown in the footer, in display order.
pub const SOCIAL_LINKS: [(IconShape, &str); 4] = [
    (ICON_FACEBOOK, "Facebook page"),
    (ICON_DISCORD, "Discord community"),
    (ICON_TWITTER, "Twitter page"),
    (ICON_GITHUB, "GitHub account"),
];
