//! Shared color constants for the UI.

use egui::Color32;

/// Red used for fetch errors.
pub const COLOR_ERROR: Color32 = Color32::from_rgb(220, 53, 69);

/// Text on colored badges.
pub const COLOR_BADGE_TEXT: Color32 = Color32::WHITE;

/// Stat card values, in card order.
pub const COLOR_STAT_TOTAL: Color32 = Color32::from_rgb(37, 99, 235);
pub const COLOR_STAT_NEW: Color32 = Color32::from_rgb(217, 119, 6);
pub const COLOR_STAT_CONVERTED: Color32 = Color32::from_rgb(22, 163, 74);
pub const COLOR_STAT_RATE: Color32 = Color32::from_rgb(147, 51, 234);

/// Bars of the leads-by-source chart.
pub const COLOR_CHART_SOURCE: Color32 = Color32::from_rgb(59, 130, 246);
