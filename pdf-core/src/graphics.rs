/// RGB color for PDF graphics operations.
///
/// Each component is in the range 0.0 (none) to 1.0 (full intensity).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0 };

    /// Create a color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Color {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    /// Parse `#RRGGBB`, `#RGB` or a basic CSS color name.
    pub fn parse(value: &str) -> Option<Color> {
        let value = value.trim();
        if let Some(hex) = value.strip_prefix('#') {
            return parse_hex(hex);
        }
        let (r, g, b) = match value.to_ascii_lowercase().as_str() {
            "black" => (0, 0, 0),
            "white" => (255, 255, 255),
            "gray" | "grey" => (128, 128, 128),
            "silver" => (192, 192, 192),
            "red" => (255, 0, 0),
            "maroon" => (128, 0, 0),
            "green" => (0, 128, 0),
            "lime" => (0, 255, 0),
            "blue" => (0, 0, 255),
            "navy" => (0, 0, 128),
            "teal" => (0, 128, 128),
            "yellow" => (255, 255, 0),
            "olive" => (128, 128, 0),
            "purple" => (128, 0, 128),
            "fuchsia" => (255, 0, 255),
            "aqua" => (0, 255, 255),
            _ => return None,
        };
        Some(Color::from_rgb8(r, g, b))
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 => Some(Color::from_rgb8(
            channel(hex.get(0..2)?)?,
            channel(hex.get(2..4)?)?,
            channel(hex.get(4..6)?)?,
        )),
        3 => {
            let expand = |i: usize| channel(hex.get(i..i + 1)?).map(|v| v * 17);
            Some(Color::from_rgb8(expand(0)?, expand(1)?, expand(2)?))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_form_color() {
        let c = Color::parse("#005F69").unwrap();
        assert_eq!(c, Color::from_rgb8(0x00, 0x5F, 0x69));
    }

    #[test]
    fn parses_short_hex_and_names() {
        assert_eq!(Color::parse("#fff"), Some(Color::from_rgb8(255, 255, 255)));
        assert_eq!(Color::parse("black"), Some(Color::BLACK));
        assert_eq!(Color::parse("Teal"), Some(Color::from_rgb8(0, 128, 128)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(Color::parse("#12345"), None);
        assert_eq!(Color::parse("#gg0000"), None);
        assert_eq!(Color::parse("ultraviolet"), None);
    }
}
