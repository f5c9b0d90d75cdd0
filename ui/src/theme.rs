//! Colors shared by the tab host and list widgets.

/// Background of the tab bar; also used for row dividers and search box accents.
pub const TAB_BACKGROUND_COLOR: &str = "#2c3e50";

/// Tint of the active tab's icon and label.
pub const TAB_ACTIVE_TINT: &str = "#f39c12";

/// Tint of inactive tabs.
pub const TAB_INACTIVE_TINT: &str = "#95a5a6";

pub const PRICE_UP_COLOR: &str = "#27ae60";
pub const PRICE_DOWN_COLOR: &str = "#c0392b";

/// Top offset of screen content, clearing the iOS status bar.
pub const CONTAINER_MARGIN_TOP_PX: u32 = if cfg!(target_os = "ios") { 64 } else { 0 };
