//! The shared button component.

use leptos::prelude::*;

use crate::styles::{ButtonConfig, Size, Variant};

/// A `<button>` styled by [`ButtonConfig::resolve`].
///
/// Clicking only logs: when `log` is set it is rendered as `data-log` and the
/// page script writes it to the browser console.
///
/// ```rust,ignore
/// view! {
///     <Button variant=Variant::Outline size=Size::Sm log="查看詳情">
///         "詳情"
///     </Button>
/// }
/// ```
#[component]
pub fn Button(
    #[prop(default = Variant::Primary)] variant: Variant,
    #[prop(default = Size::Md)] size: Size,
    /// Use the breakpoint-aware size table
    #[prop(optional)]
    responsive: bool,
    #[prop(optional)] disabled: bool,
    /// Stretch to the container width
    #[prop(optional)]
    full_width: bool,
    /// Extra classes, applied after the resolved ones
    #[prop(optional, into)]
    class: String,
    /// Console message for clicks
    #[prop(optional, into)]
    log: Option<String>,
    children: Children,
) -> impl IntoView {
    let classes = ButtonConfig::new(variant, size)
        .responsive(responsive)
        .disabled(disabled)
        .full_width(full_width)
        .class(class)
        .resolve();

    view! {
        <button
            type="button"
            class=classes
            disabled=disabled
            data-variant=variant.as_str()
            data-log=log
        >
            {children()}
        </button>
    }
}
