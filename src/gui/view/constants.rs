//! View constants (layout/sizing/colours).

use iced::Color;

pub(crate) const WINDOW_W: f32 = 1200.0;
pub(crate) const WINDOW_H: f32 = 680.0;

pub(crate) const DROP_ZONE_H: f32 = 80.0;
pub(crate) const COVER_COLUMN_W: f32 = 300.0;
pub(crate) const COVER_BIG: f32 = 280.0;
pub(crate) const LABEL_W: f32 = 90.0;
pub(crate) const BUTTON_W: f32 = 180.0;
pub(crate) const DEBUG_H: f32 = 180.0;

pub(crate) const PANEL: Color = Color::from_rgb8(28, 28, 28);
pub(crate) const PANEL_HOVER: Color = Color::from_rgb8(40, 40, 40);
pub(crate) const BORDER: Color = Color::from_rgb8(70, 70, 70);
pub(crate) const DIM: Color = Color::from_rgb8(120, 120, 120);
pub(crate) const LABEL: Color = Color::from_rgb8(150, 150, 150);

pub(crate) const DEBUG_BG: Color = Color::from_rgb8(20, 20, 20);
pub(crate) const DEBUG_TEXT: Color = Color::from_rgb8(50, 205, 50);
