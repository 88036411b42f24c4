/// 24-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLUE:  Self = Self { r: 0x89, g: 0xb4, b: 0xfa }; // #89b4fa
    pub const RED:   Self = Self { r: 0xf3, g: 0x8b, b: 0xa8 }; // #f38ba8
    pub const WHITE: Self = Self { r: 0xcd, g: 0xd6, b: 0xf4 }; // #cdd6f4

    /// ANSI sequence resetting all attributes.
    pub const RESET: &'static str = "\x1b[0m";

    /// Parse a CSS-style hex color string (`#RRGGBB`, or `#RRGGBBAA` with the
    /// alpha channel ignored).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');

        let byte = |s: &str| -> Option<u8> { u8::from_str_radix(s, 16).ok() };

        match hex.len() {
            6 | 8 => Some(Self {
                r: byte(hex.get(0..2)?)?,
                g: byte(hex.get(2..4)?)?,
                b: byte(hex.get(4..6)?)?,
            }),
            _ => None,
        }
    }

    /// Truecolor foreground escape for this colour.
    pub fn ansi_fg(self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }

    /// Wrap `text` in this colour's escape and a reset.
    pub fn paint(self, text: &str) -> String {
        format!("{}{text}{}", self.ansi_fg(), Self::RESET)
    }
}
