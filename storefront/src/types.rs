//! Storefront data types.
//!
//! These types carry the static sample content rendered by the components.
//! They are:
//!
//! - **Serializable** - the catalog can be replaced from a config file via serde
//! - **Clone-friendly** - components take owned data, no borrowing across views
//! - **Default-able** - build partial entries with `..Default::default()`
//!
//! # Example
//!
//! ```rust
//! use storefront_leptos::types::ProductEntry;
//!
//! let product = ProductEntry {
//!     id: 7,
//!     name: "藍牙喇叭".into(),
//!     price: 1490,
//!     original_price: 1990,
//!     rating: 4.2,
//!     ..Default::default()
//! };
//!
//! assert_eq!(product.price_label(), "NT$ 1,490");
//! assert_eq!(product.filled_stars(), 4);
//! ```

use serde::{Deserialize, Serialize};

/// Number of stars in a product rating row.
pub const MAX_STARS: usize = 5;

/// A product card in the featured grid.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductEntry {
    /// Stable identifier, used as the card's DOM id suffix
    pub id: u32,
    /// Display name
    pub name: String,
    /// Current price in whole New Taiwan dollars
    pub price: u32,
    /// Price before discount, rendered struck through
    pub original_price: u32,
    /// Image URL
    pub image: String,
    /// Badge label shown over the image (e.g. 熱銷)
    pub badge: String,
    /// Rating between 0.0 and 5.0
    pub rating: f32,
}

impl ProductEntry {
    /// Formatted current price, e.g. `NT$ 12,999`.
    pub fn price_label(&self) -> String {
        format_price(self.price)
    }

    /// Formatted original price.
    pub fn original_price_label(&self) -> String {
        format_price(self.original_price)
    }

    /// How many of the five stars render filled: `floor(rating)`, clamped.
    pub fn filled_stars(&self) -> usize {
        // NaN casts to 0
        (self.rating.floor() as i64).clamp(0, MAX_STARS as i64) as usize
    }
}

/// Format whole dollars as `NT$ 12,999`.
pub fn format_price(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("NT$ {}", grouped)
}

/// The built-in featured catalog.
pub fn sample_products() -> Vec<ProductEntry> {
    vec![
        ProductEntry {
            id: 1,
            name: "時尚手機".into(),
            price: 12_999,
            original_price: 15_999,
            image: "https://via.placeholder.com/300x300/3B82F6/FFFFFF?text=Phone".into(),
            badge: "熱銷".into(),
            rating: 4.8,
        },
        ProductEntry {
            id: 2,
            name: "無線耳機".into(),
            price: 2_999,
            original_price: 3_999,
            image: "https://via.placeholder.com/300x300/10B981/FFFFFF?text=Earbuds".into(),
            badge: "新品".into(),
            rating: 4.6,
        },
        ProductEntry {
            id: 3,
            name: "智能手錶".into(),
            price: 8_999,
            original_price: 10_999,
            image: "https://via.placeholder.com/300x300/F59E0B/FFFFFF?text=Watch".into(),
            badge: "限時優惠".into(),
            rating: 4.9,
        },
    ]
}

/// A headline number in the hero stats row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeroStat {
    pub value: &'static str,
    pub label: &'static str,
    /// Tailwind color tokens for the value
    pub color: &'static str,
}

pub const HERO_STATS: [HeroStat; 3] = [
    HeroStat {
        value: "1000+",
        label: "商品種類",
        color: "text-blue-600 dark:text-blue-400",
    },
    HeroStat {
        value: "50K+",
        label: "滿意顧客",
        color: "text-green-600 dark:text-green-400",
    },
    HeroStat {
        value: "24/7",
        label: "客戶服務",
        color: "text-purple-600 dark:text-purple-400",
    },
];

/// A breakpoint card in the responsive demo.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeviceClass {
    pub name: &'static str,
    pub range: &'static str,
    pub layout: &'static str,
    /// Icon tile size and color tokens
    pub tile: &'static str,
    /// SVG path data for the device outline
    pub icon: &'static str,
}

const ICON_MONITOR: &str = "M9.75 17L9 20l-1 1h8l-1-1-.75-3M3 13h18M5 17h14a2 2 0 002-2V5a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z";

pub const DEVICE_CLASSES: [DeviceClass; 4] = [
    DeviceClass {
        name: "手機",
        range: "< 640px",
        layout: "單欄布局",
        tile: "w-12 h-16 bg-blue-600",
        icon: "M12 18h.01M8 21h8a2 2 0 002-2V5a2 2 0 00-2-2H8a2 2 0 00-2 2v14a2 2 0 002 2z",
    },
    DeviceClass {
        name: "平板",
        range: "640px - 1024px",
        layout: "兩欄布局",
        tile: "w-16 h-12 bg-green-600",
        icon: "M9 17V7m0 10a2 2 0 01-2 2H5a2 2 0 01-2-2V7a2 2 0 012-2h2a2 2 0 012 2m0 10a2 2 0 002 2h2a2 2 0 002-2M9 7a2 2 0 012-2h2a2 2 0 012 2m0 10V7m0 10a2 2 0 002 2h2a2 2 0 002-2V7a2 2 0 00-2-2h-2a2 2 0 00-2 2",
    },
    DeviceClass {
        name: "筆電",
        range: "1024px - 1280px",
        layout: "三欄布局",
        tile: "w-16 h-10 bg-purple-600",
        icon: ICON_MONITOR,
    },
    DeviceClass {
        name: "桌機",
        range: "> 1280px",
        layout: "完整布局",
        tile: "w-16 h-12 bg-orange-600",
        icon: ICON_MONITOR,
    },
];

/// A link in a footer column or on the contact page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// A titled column of footer links.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [FooterLink],
}

pub const PRODUCT_CATEGORIES: &[FooterLink] = &[
    FooterLink { label: "電子產品", href: "/products" },
    FooterLink { label: "時尚服飾", href: "/products" },
    FooterLink { label: "家居用品", href: "/products" },
    FooterLink { label: "運動休閒", href: "/products" },
];

pub const CUSTOMER_SERVICE: &[FooterLink] = &[
    FooterLink { label: "聯絡我們", href: "/contact" },
    FooterLink { label: "退換貨政策", href: "#" },
    FooterLink { label: "運送資訊", href: "#" },
    FooterLink { label: "常見問題", href: "#" },
];

pub const ABOUT_US: &[FooterLink] = &[
    FooterLink { label: "公司簡介", href: "/about" },
    FooterLink { label: "隱私政策", href: "#" },
    FooterLink { label: "服務條款", href: "#" },
    FooterLink { label: "工作機會", href: "#" },
];

pub const FOOTER_COLUMNS: [FooterColumn; 3] = [
    FooterColumn { title: "商品分類", links: PRODUCT_CATEGORIES },
    FooterColumn { title: "客戶服務", links: CUSTOMER_SERVICE },
    FooterColumn { title: "關於我們", links: ABOUT_US },
];

/// Company blurb shared by the footer and the about page.
pub const COMPANY_BLURB: &str =
    "我們致力於提供最優質的商品和服務，讓每一位顧客都能享受愉快的購物體驗。";
