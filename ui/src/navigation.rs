//! Per-screen options consumed by the tab host.

/// An icon drawn in the tab bar. The tint is supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabIcon {
    /// Font Awesome style icon name.
    pub name: &'static str,
    /// Size in px.
    pub size: u32,
}

impl TabIcon {
    /// The glyph rendered for this icon name.
    pub fn glyph(&self) -> &'static str {
        match self.name {
            "bank" => "🏦",
            _ => "•",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationOptions {
    pub tab_bar_icon: TabIcon,
    /// When `false` the host draws no header chrome and the screen renders its own.
    pub header_shown: bool,
}
