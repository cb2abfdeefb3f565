use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x38, 0xbd, 0xf8);
pub const CARD_BORDER: Color = Color::Rgb(0x47, 0x55, 0x69);
pub const PRIMARY_TEXT: Color = Color::Rgb(0xf1, 0xf5, 0xf9);
pub const DIVIDER: Color = Color::Rgb(0x64, 0x74, 0x8b);
pub const MUTED_TEXT: Color = Color::Rgb(0x94, 0xa3, 0xb8);
pub const POPUP_BORDER: Color = Color::Rgb(0xe2, 0xe8, 0xf0);
pub const ERROR_TEXT: Color = Color::Rgb(0xf8, 0x71, 0x71);
pub const SELECTED_BACKGROUND: Color = Color::Rgb(0x1e, 0x29, 0x3b);
