//! Responsive design showcase.
//!
//! Breakpoint cards, buttons using the responsive size table, text and
//! spacing that scale, blocks that show on exactly one device class, and a
//! short testing guide.

use leptos::prelude::*;

use super::button::Button;
use super::icons::{Icon, IconShape};
use crate::styles::{Size, Variant};
use crate::types::{DEVICE_CLASSES, DeviceClass};

const SUBHEADING_CLASS: &str =
    "text-xl font-bold text-gray-900 dark:text-white mb-6 text-center sm:text-2xl";

/// Blocks that are visible on exactly one device class.
const VISIBILITY_BLOCKS: [(&str, &str, &str); 4] = [
    (
        "block sm:hidden bg-blue-100 dark:bg-blue-900 p-4 rounded-lg",
        "text-blue-800 dark:text-blue-200",
        "📱 只在手機顯示",
    ),
    (
        "hidden sm:block md:hidden bg-green-100 dark:bg-green-900 p-4 rounded-lg",
        "text-green-800 dark:text-green-200",
        "📟 只在平板顯示",
    ),
    (
        "hidden md:block lg:hidden bg-purple-100 dark:bg-purple-900 p-4 rounded-lg",
        "text-purple-800 dark:text-purple-200",
        "💻 只在中等螢幕顯示",
    ),
    (
        "hidden lg:block bg-orange-100 dark:bg-orange-900 p-4 rounded-lg",
        "text-orange-800 dark:text-orange-200",
        "🖥️ 只在大螢幕顯示",
    ),
];

#[component]
pub fn ResponsiveDemo() -> impl IntoView {
    let devices = DEVICE_CLASSES
        .iter()
        .map(|device| view! { <DeviceCard device=*device /> })
        .collect::<Vec<_>>();

    let visibility = VISIBILITY_BLOCKS
        .iter()
        .map(|(block, text, label)| {
            view! {
                <div class=*block>
                    <p class=*text>{*label}</p>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section data-section="responsive-demo" class="bg-white dark:bg-gray-900 py-8 sm:py-12 md:py-16 lg:py-20">
            <div class="py-4 px-4 mx-auto max-w-screen-xl sm:py-6 md:py-8">
                <div class="text-center mb-8 sm:mb-12 md:mb-16">
                    <h2 class="mb-3 text-2xl font-extrabold tracking-tight leading-tight text-gray-900 sm:text-3xl md:text-4xl lg:text-5xl dark:text-white sm:mb-4 md:mb-6">
                        "響應式設計展示"
                    </h2>
                    <p class="text-base font-normal text-gray-500 sm:text-lg md:text-xl dark:text-gray-400">
                        "體驗在不同設備上的完美適配"
                    </p>
                </div>

                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4 sm:gap-6 md:gap-8 mb-12">
                    {devices}
                </div>

                <div class="mb-12">
                    <h3 class=SUBHEADING_CLASS>"響應式按鈕"</h3>
                    <div class="flex flex-col space-y-4 sm:flex-row sm:flex-wrap sm:justify-center sm:space-y-0 sm:space-x-4 items-center">
                        <Button variant=Variant::Primary size=Size::Lg responsive=true>
                            "響應式主按鈕"
                        </Button>
                        <Button variant=Variant::Outline size=Size::Md responsive=true>
                            "響應式輪廓按鈕"
                        </Button>
                        <Button variant=Variant::Success size=Size::Sm responsive=true>
                            "響應式成功按鈕"
                        </Button>
                    </div>
                </div>

                <div class="mb-12">
                    <h3 class=SUBHEADING_CLASS>"響應式文字"</h3>
                    <div class="space-y-4 text-center">
                        <p class="text-xs sm:text-sm md:text-base lg:text-lg xl:text-xl text-gray-600 dark:text-gray-400">
                            "這段文字會根據螢幕尺寸調整大小"
                        </p>
                        <p class="text-sm sm:text-base md:text-lg lg:text-xl xl:text-2xl font-semibold text-gray-800 dark:text-gray-200">
                            "這是較大的響應式文字"
                        </p>
                    </div>
                </div>

                <div class="bg-gradient-to-r from-blue-50 to-purple-50 dark:from-gray-800 dark:to-gray-700 p-4 sm:p-6 md:p-8 lg:p-12 rounded-lg">
                    <h3 class="text-xl font-bold text-gray-900 dark:text-white mb-4 sm:mb-6 md:mb-8 text-center sm:text-2xl">
                        "響應式間距"
                    </h3>
                    <p class="text-center text-gray-600 dark:text-gray-400 text-sm sm:text-base md:text-lg">
                        "這個區塊的內外間距會根據螢幕尺寸自動調整，確保在所有設備上都有最佳的視覺效果。"
                    </p>
                </div>

                <div class="mt-12 text-center">
                    <h3 class=SUBHEADING_CLASS>"設備可見性控制"</h3>
                    <div class="space-y-2">{visibility}</div>
                </div>

                <div class="mt-12 text-center">
                    <div class="bg-yellow-50 dark:bg-yellow-900 p-4 sm:p-6 rounded-lg">
                        <h4 class="text-lg font-semibold text-yellow-800 dark:text-yellow-200 mb-2">
                            "📐 測試響應式設計"
                        </h4>
                        <p class="text-sm sm:text-base text-yellow-700 dark:text-yellow-300">
                            "請調整瀏覽器窗口大小或使用開發者工具的設備模擬器，觀察頁面在不同尺寸下的變化"
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn DeviceCard(device: DeviceClass) -> impl IntoView {
    let tile = format!(
        "{} mx-auto mb-4 rounded-md flex items-center justify-center",
        device.tile
    );
    let icon = IconShape::stroked(device.icon, "0 0 24 24");

    view! {
        <div class="bg-gray-50 dark:bg-gray-800 p-4 sm:p-6 rounded-lg text-center">
            <div class=tile>
                <Icon shape=icon class="w-6 h-6 text-white" />
            </div>
            <h3 class="text-lg font-semibold text-gray-900 dark:text-white mb-2">{device.name}</h3>
            <p class="text-sm text-gray-500 dark:text-gray-400">{device.range}</p>
            <p class="text-xs text-gray-400 dark:text-gray-500 mt-2">{device.layout}</p>
        </div>
    }
}
