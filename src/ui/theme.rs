use ratatui::style::Color;

pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const COUNT_TEXT: Color = Color::Rgb(0xda, 0x77, 0x56);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const FIELD_ACTIVE: Color = Color::Rgb(0xfb, 0xbf, 0x24);
pub const HISTORY_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
