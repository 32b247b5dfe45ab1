use ratatui::style::Color;

pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const READOUT_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const READOUT_DIM: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const OPERATOR_TEXT: Color = Color::Rgb(0xda, 0x77, 0x56);
pub const KEY_BORDER: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const KEY_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const KEY_CLEAR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const KEY_EQUALS: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
