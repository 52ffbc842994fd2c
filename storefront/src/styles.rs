//! Button style resolution.
//!
//! Buttons are styled with Tailwind utility classes. A [`ButtonConfig`] is
//! resolved into one class string made of six segments, always in this
//! order:
//!
//! 1. base tokens shared by every button
//! 2. variant tokens (color scheme)
//! 3. size tokens, fixed or responsive
//! 4. interaction tokens (disabled or clickable)
//! 5. `w-full` when the button spans its container
//! 6. caller-supplied classes, last so they win in the cascade
//!
//! Resolution never fails. A variant or size that could not be looked up
//! contributes an empty segment and the rest of the string is unchanged.
//!
//! ```rust
//! use storefront_leptos::styles::{ButtonConfig, Size, Variant};
//!
//! let classes = ButtonConfig::new(Variant::Outline, Size::Sm)
//!     .full_width(true)
//!     .resolve();
//!
//! assert!(classes.contains("border-blue-700"));
//! assert!(classes.contains("px-3 py-2 text-sm"));
//! assert!(classes.ends_with("w-full"));
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Tokens present on every button.
pub const BASE_TOKENS: &str = "inline-flex items-center justify-center font-medium rounded-lg transition-all duration-200 focus:ring-4 focus:outline-none active:scale-95 touch-manipulation";

/// Tokens for a disabled button.
pub const DISABLED_TOKENS: &str = "opacity-50 cursor-not-allowed transform-none";

/// Tokens for an enabled button.
pub const ENABLED_TOKENS: &str = "cursor-pointer";

/// Token for a button that fills its container.
pub const FULL_WIDTH_TOKEN: &str = "w-full";

/// Error returned by the strict key parsers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error("unknown button {kind} '{key}' (expected one of: {expected})")]
    UnknownKey {
        kind: &'static str,
        key: String,
        expected: String,
    },
}

/// Visual style of a button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Blue fill, main call to action
    #[default]
    Primary,
    /// White with a gray border
    Secondary,
    /// Green fill, confirming actions
    Success,
    /// Red fill, destructive actions
    Danger,
    /// Transparent with a blue border
    Outline,
}

impl Variant {
    pub const ALL: [Variant; 5] = [
        Variant::Primary,
        Variant::Secondary,
        Variant::Success,
        Variant::Danger,
        Variant::Outline,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Primary => "primary",
            Variant::Secondary => "secondary",
            Variant::Success => "success",
            Variant::Danger => "danger",
            Variant::Outline => "outline",
        }
    }

    /// Color and shadow tokens for this variant.
    pub fn tokens(self) -> &'static str {
        match self {
            Variant::Primary => {
                "text-white bg-blue-700 hover:bg-blue-800 focus:ring-blue-300 dark:bg-blue-600 dark:hover:bg-blue-700 dark:focus:ring-blue-800 shadow-md hover:shadow-lg"
            }
            Variant::Secondary => {
                "text-gray-900 bg-white border border-gray-300 hover:bg-gray-100 focus:ring-gray-200 dark:bg-gray-800 dark:text-white dark:border-gray-600 dark:hover:bg-gray-700 dark:focus:ring-gray-700 shadow-sm hover:shadow-md"
            }
            Variant::Success => {
                "text-white bg-green-700 hover:bg-green-800 focus:ring-green-300 dark:bg-green-600 dark:hover:bg-green-700 dark:focus:ring-green-800 shadow-md hover:shadow-lg"
            }
            Variant::Danger => {
                "text-white bg-red-700 hover:bg-red-800 focus:ring-red-300 dark:bg-red-600 dark:hover:bg-red-700 dark:focus:ring-red-900 shadow-md hover:shadow-lg"
            }
            Variant::Outline => {
                "text-blue-700 border border-blue-700 hover:bg-blue-700 hover:text-white focus:ring-blue-300 dark:border-blue-500 dark:text-blue-500 dark:hover:text-white dark:hover:bg-blue-500 hover:shadow-md"
            }
        }
    }

    /// Lenient lookup: `None` for an unknown key, with a warning.
    pub fn lookup(key: &str) -> Option<Self> {
        let found = Self::ALL.into_iter().find(|v| v.as_str() == key.trim());
        if found.is_none() {
            tracing::warn!(key, "unknown button variant, color tokens omitted");
        }
        found
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s.trim())
            .ok_or_else(|| unknown_key("variant", s, Self::ALL.map(Self::as_str)))
    }
}

/// Button size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Size {
    Xs,
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl Size {
    pub const ALL: [Size; 5] = [Size::Xs, Size::Sm, Size::Md, Size::Lg, Size::Xl];

    pub fn as_str(self) -> &'static str {
        match self {
            Size::Xs => "xs",
            Size::Sm => "sm",
            Size::Md => "md",
            Size::Lg => "lg",
            Size::Xl => "xl",
        }
    }

    /// Padding and text-size tokens that stay the same at every breakpoint.
    pub fn fixed_tokens(self) -> &'static str {
        match self {
            Size::Xs => "px-2 py-1.5 text-xs",
            Size::Sm => "px-3 py-2 text-sm",
            Size::Md => "px-5 py-2.5 text-sm",
            Size::Lg => "px-5 py-3 text-base",
            Size::Xl => "px-6 py-3.5 text-base",
        }
    }

    /// Tokens that grow at the `sm:` and `md:` breakpoints.
    pub fn responsive_tokens(self) -> &'static str {
        match self {
            Size::Xs => "px-2 py-1.5 text-xs sm:px-3 sm:py-2 sm:text-sm",
            Size::Sm => "px-3 py-2 text-xs sm:px-4 sm:py-2.5 sm:text-sm",
            Size::Md => "px-4 py-2.5 text-sm sm:px-5 sm:py-3 sm:text-base",
            Size::Lg => "px-5 py-3 text-sm sm:px-6 sm:py-3.5 sm:text-base md:px-8 md:py-4",
            Size::Xl => "px-6 py-3.5 text-base sm:px-8 sm:py-4 sm:text-lg md:px-10 md:py-5",
        }
    }

    pub fn tokens(self, responsive: bool) -> &'static str {
        if responsive {
            self.responsive_tokens()
        } else {
            self.fixed_tokens()
        }
    }

    /// Lenient lookup: `None` for an unknown key, with a warning.
    pub fn lookup(key: &str) -> Option<Self> {
        let found = Self::ALL.into_iter().find(|s| s.as_str() == key.trim());
        if found.is_none() {
            tracing::warn!(key, "unknown button size, size tokens omitted");
        }
        found
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.as_str() == s.trim())
            .ok_or_else(|| unknown_key("size", s, Self::ALL.map(Self::as_str)))
    }
}

fn unknown_key(kind: &'static str, key: &str, expected: [&str; 5]) -> StyleError {
    StyleError::UnknownKey {
        kind,
        key: key.to_string(),
        expected: expected.join(", "),
    }
}

/// Everything that decides a button's class string.
///
/// `variant` and `size` are `None` when they came from an unknown string key;
/// that dimension then resolves to nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonConfig {
    pub variant: Option<Variant>,
    pub size: Option<Size>,
    pub responsive: bool,
    pub disabled: bool,
    pub full_width: bool,
    /// Extra classes appended after everything else
    pub class: String,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            variant: Some(Variant::default()),
            size: Some(Size::default()),
            responsive: false,
            disabled: false,
            full_width: false,
            class: String::new(),
        }
    }
}

impl ButtonConfig {
    pub fn new(variant: Variant, size: Size) -> Self {
        Self {
            variant: Some(variant),
            size: Some(size),
            ..Default::default()
        }
    }

    /// Build from string keys, degrading unknown keys to empty segments.
    pub fn from_keys(variant: &str, size: &str) -> Self {
        Self {
            variant: Variant::lookup(variant),
            size: Size::lookup(size),
            ..Default::default()
        }
    }

    pub fn responsive(mut self, responsive: bool) -> Self {
        self.responsive = responsive;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Resolve to the final class string.
    pub fn resolve(&self) -> String {
        let segments = [
            BASE_TOKENS,
            self.variant.map(Variant::tokens).unwrap_or_default(),
            self.size
                .map(|size| size.tokens(self.responsive))
                .unwrap_or_default(),
            if self.disabled {
                DISABLED_TOKENS
            } else {
                ENABLED_TOKENS
            },
            if self.full_width { FULL_WIDTH_TOKEN } else { "" },
            self.class.trim(),
        ];

        segments
            .into_iter()
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Small additions on top of the Tailwind CDN build.
pub const SITE_CSS: &str = r#"
html {
    scroll-behavior: smooth;
}

body {
    font-family: ui-sans-serif, system-ui, "PingFang TC", "Noto Sans TC", "Microsoft JhengHei", sans-serif;
    -webkit-font-smoothing: antialiased;
}

button[disabled] {
    pointer-events: none;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn primary_small_fixed_button() {
        let classes = ButtonConfig::new(Variant::Primary, Size::Sm).resolve();

        assert_eq!(
            classes,
            format!(
                "{} {} px-3 py-2 text-sm cursor-pointer",
                BASE_TOKENS,
                Variant::Primary.tokens()
            )
        );
        assert!(!classes.contains(FULL_WIDTH_TOKEN));
    }

    #[test]
    fn defaults_are_primary_medium() {
        let config = ButtonConfig::default();
        assert_eq!(config.variant, Some(Variant::Primary));
        assert_eq!(config.size, Some(Size::Md));
        assert!(config.resolve().contains("px-5 py-2.5 text-sm"));
    }

    #[test]
    fn every_combination_has_one_segment_per_dimension() {
        for variant in Variant::ALL {
            for size in Size::ALL {
                for responsive in [false, true] {
                    for disabled in [false, true] {
                        for full_width in [false, true] {
                            let config = ButtonConfig::new(variant, size)
                                .responsive(responsive)
                                .disabled(disabled)
                                .full_width(full_width);
                            let classes = config.resolve();

                            assert_eq!(classes, config.resolve(), "resolution is stable");
                            assert_eq!(count(&classes, BASE_TOKENS), 1);
                            assert_eq!(count(&classes, variant.tokens()), 1);
                            assert_eq!(count(&classes, size.tokens(responsive)), 1);
                            assert_eq!(count(&classes, DISABLED_TOKENS), usize::from(disabled));
                            assert_eq!(count(&classes, ENABLED_TOKENS), usize::from(!disabled));
                            assert_eq!(
                                classes.split(' ').filter(|t| *t == FULL_WIDTH_TOKEN).count(),
                                usize::from(full_width)
                            );
                            assert!(!classes.contains("  "));
                            assert!(!classes.ends_with(' '));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn segments_keep_their_order() {
        let classes = ButtonConfig::new(Variant::Danger, Size::Xl)
            .responsive(true)
            .disabled(true)
            .full_width(true)
            .class("mt-4")
            .resolve();

        let base = classes.find(BASE_TOKENS).expect("base");
        let variant = classes.find(Variant::Danger.tokens()).expect("variant");
        let size = classes.find(Size::Xl.responsive_tokens()).expect("size");
        let state = classes.find(DISABLED_TOKENS).expect("state");
        let width = classes.rfind(" w-full").expect("width");
        let extra = classes.rfind("mt-4").expect("extra");

        assert!(base < variant && variant < size && size < state && state < width && width < extra);
        assert!(classes.ends_with("mt-4"));
    }

    #[test]
    fn unknown_variant_leaves_other_segments_alone() {
        let unknown = ButtonConfig::from_keys("ghost", "lg").resolve();
        let known = ButtonConfig::new(Variant::Primary, Size::Lg).resolve();

        for variant in Variant::ALL {
            assert!(!unknown.contains(variant.tokens()));
        }
        assert_eq!(
            unknown,
            format!("{} px-5 py-3 text-base cursor-pointer", BASE_TOKENS)
        );
        assert_eq!(known.replace(Variant::Primary.tokens(), "").replace("  ", " "), unknown);
    }

    #[test]
    fn unknown_size_drops_only_the_size_segment() {
        let classes = ButtonConfig::from_keys("success", "huge")
            .responsive(true)
            .resolve();

        assert_eq!(
            classes,
            format!(
                "{} {} cursor-pointer",
                BASE_TOKENS,
                Variant::Success.tokens()
            )
        );
    }

    #[test]
    fn disabled_swaps_interaction_tokens() {
        let classes = ButtonConfig::default().disabled(true).resolve();
        assert!(classes.contains("opacity-50 cursor-not-allowed transform-none"));
        assert!(!classes.contains("cursor-pointer"));
    }

    #[test]
    fn responsive_flag_selects_breakpoint_table() {
        let fixed = ButtonConfig::new(Variant::Primary, Size::Lg).resolve();
        let responsive = ButtonConfig::new(Variant::Primary, Size::Lg)
            .responsive(true)
            .resolve();

        assert!(fixed.contains("px-5 py-3 text-base"));
        assert!(!fixed.contains("md:px-8"));
        assert!(responsive.contains("px-5 py-3 text-sm sm:px-6 sm:py-3.5 sm:text-base md:px-8 md:py-4"));
    }

    #[test]
    fn blank_extra_class_adds_nothing() {
        let plain = ButtonConfig::default().resolve();
        let blank = ButtonConfig::default().class("   ").resolve();
        assert_eq!(plain, blank);
    }

    #[test]
    fn strict_parsing_rejects_unknown_keys() {
        assert_eq!("outline".parse::<Variant>(), Ok(Variant::Outline));
        assert_eq!(" xl ".parse::<Size>(), Ok(Size::Xl));

        let err = "ghost".parse::<Variant>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown button variant 'ghost' (expected one of: primary, secondary, success, danger, outline)"
        );
        assert!("2xl".parse::<Size>().is_err());
    }

    #[test]
    fn keys_round_trip_through_display() {
        for variant in Variant::ALL {
            assert_eq!(variant.to_string().parse::<Variant>(), Ok(variant));
        }
        for size in Size::ALL {
            assert_eq!(size.to_string().parse::<Size>(), Ok(size));
        }
    }
}
