//! Rgba color type — the canonical value the picker synchronizes around.
//!
//! Stores red/green/blue as 0–255 integers and alpha as a 0–100 integer
//! percentage. Hex text never carries alpha; parsing is deliberately
//! forgiving (clamp, repair) everywhere except the hex commit, which is the
//! one validated failure path.

use thiserror::Error;

/// Error returned when a hex commit is not a parseable color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// Not six hex digits (after `normalize_hex_input` repair).
    #[error("invalid hex color format")]
    InvalidFormat,
}

/// One of the four picker channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl Channel {
    /// All channels, in the order the picker lays them out.
    pub const ALL: [Channel; 4] = [Channel::Red, Channel::Green, Channel::Blue, Channel::Alpha];

    /// Upper bound of the channel's displayed value. Alpha displays as a
    /// percentage; the other channels display their raw byte value.
    pub fn max_value(self) -> u8 {
        match self {
            Channel::Alpha => 100,
            _ => 255,
        }
    }

    /// Single-letter textbox label.
    pub fn label(self) -> &'static str {
        match self {
            Channel::Red => "R:",
            Channel::Green => "G:",
            Channel::Blue => "B:",
            Channel::Alpha => "A:",
        }
    }

    pub fn is_alpha(self) -> bool {
        matches!(self, Channel::Alpha)
    }
}

/// RGBA color with 0–255 channels and a 0–100 integer alpha percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    red: u8,
    green: u8,
    blue: u8,
    alpha: u8,
}

impl Default for Rgba {
    /// Opaque white, the picker's startup color.
    fn default() -> Self {
        Self {
            red: 255,
            green: 255,
            blue: 255,
            alpha: 100,
        }
    }
}

impl Rgba {
    /// Create a color, clamping `alpha` to the 0–100 percentage domain.
    pub fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: alpha.min(100),
        }
    }

    /// Fully-opaque color from RGB bytes.
    pub fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, 100)
    }

    /// Red component (0–255).
    pub fn red(&self) -> u8 {
        self.red
    }
    /// Green component (0–255).
    pub fn green(&self) -> u8 {
        self.green
    }
    /// Blue component (0–255).
    pub fn blue(&self) -> u8 {
        self.blue
    }
    /// Alpha as an integer percentage (0–100).
    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    /// Same color with a different alpha percentage (clamped).
    pub fn with_alpha(self, alpha: u8) -> Self {
        Self {
            alpha: alpha.min(100),
            ..self
        }
    }

    /// Format as exactly six uppercase hex characters, no `#`, no alpha.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// Parse a hex string: optional leading `#`, then exactly six hex digits.
    ///
    /// The resulting alpha is always 0 — hex input never carries alpha; the
    /// caller decides what opacity to apply.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let stripped = hex.strip_prefix('#').unwrap_or(hex);
        if stripped.len() != 6 || !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidFormat);
        }
        let byte = |range| u8::from_str_radix(&stripped[range], 16);
        let red = byte(0..2).map_err(|_| ColorParseError::InvalidFormat)?;
        let green = byte(2..4).map_err(|_| ColorParseError::InvalidFormat)?;
        let blue = byte(4..6).map_err(|_| ColorParseError::InvalidFormat)?;
        Ok(Self {
            red,
            green,
            blue,
            alpha: 0,
        })
    }
}

/// Best-effort repair of raw hex textbox input before parsing.
///
/// Truncates to six characters (paste overflow), expands three characters to
/// doubled pairs (`abc` → `aabbcc`), and right-pads anything else to six with
/// `'0'`. This repairs the shape only; non-hex characters survive and make
/// the subsequent [`Rgba::from_hex`] fail.
pub fn normalize_hex_input(input: &str) -> String {
    let mut text: String = input.chars().take(6).collect();
    if text.chars().count() == 3 {
        text = text.chars().flat_map(|c| [c, c]).collect();
    } else {
        while text.chars().count() < 6 {
            text.push('0');
        }
    }
    text
}

/// Parse a decimal channel textbox: keep digits only, take at most three,
/// clamp to the channel's domain. `None` when the input holds no digits.
pub fn parse_channel_text(channel: Channel, raw: &str) -> Option<u8> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).take(3).collect();
    if digits.is_empty() {
        return None;
    }
    // Three digits cap the value at 999, which fits in u16.
    let value: u16 = digits.parse().ok()?;
    Some(value.min(channel.max_value() as u16) as u8)
}

/// Alpha slider position (0–255) → displayed percentage (0–100).
pub fn alpha_percent_from_position(position: u8) -> u8 {
    (position as u16 * 100 / 255) as u8
}

/// Displayed percentage (0–100) → alpha slider position (0–255).
///
/// Picks the smallest position that maps back to the same percentage, so a
/// committed percentage survives the position round-trip unchanged.
pub fn alpha_position_from_percent(percent: u8) -> u8 {
    let percent = percent.min(100);
    ((percent as f64 / 100.0) * 255.0).ceil() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_formats_six_uppercase_chars() {
        assert_eq!(Rgba::from_rgb(0, 0, 0).to_hex(), "000000");
        assert_eq!(Rgba::from_rgb(255, 0, 255).to_hex(), "FF00FF");
        assert_eq!(Rgba::from_rgb(1, 2, 3).to_hex(), "010203");
    }

    #[test]
    fn hex_round_trip() {
        for r in (0..=255u16).step_by(15) {
            for g in (0..=255u16).step_by(15) {
                for b in (0..=255u16).step_by(15) {
                    let color = Rgba::from_rgb(r as u8, g as u8, b as u8);
                    let parsed = Rgba::from_hex(&color.to_hex()).unwrap();
                    assert_eq!(
                        (parsed.red(), parsed.green(), parsed.blue()),
                        (r as u8, g as u8, b as u8)
                    );
                }
            }
        }
    }

    #[test]
    fn from_hex_resets_alpha() {
        let parsed = Rgba::from_hex("#FF00FF").unwrap();
        assert_eq!(parsed.red(), 255);
        assert_eq!(parsed.green(), 0);
        assert_eq!(parsed.blue(), 255);
        assert_eq!(parsed.alpha(), 0);
    }

    #[test]
    fn from_hex_rejects_malformed_input() {
        assert_eq!(Rgba::from_hex("FF00F"), Err(ColorParseError::InvalidFormat));
        assert_eq!(Rgba::from_hex("FF00FF0"), Err(ColorParseError::InvalidFormat));
        assert_eq!(Rgba::from_hex("GG0000"), Err(ColorParseError::InvalidFormat));
        assert_eq!(Rgba::from_hex(""), Err(ColorParseError::InvalidFormat));
    }

    #[test]
    fn normalize_expands_three_char_shorthand() {
        assert_eq!(normalize_hex_input("abc"), "aabbcc");
    }

    #[test]
    fn normalize_pads_and_truncates() {
        assert_eq!(normalize_hex_input("ab"), "ab0000");
        assert_eq!(normalize_hex_input("abcd"), "abcd00");
        assert_eq!(normalize_hex_input("0123456789"), "012345");
        assert_eq!(normalize_hex_input(""), "000000");
    }

    #[test]
    fn normalize_is_idempotent() {
        for input in ["", "a", "ab", "abc", "abcd", "abcde", "abcdef", "zzz", "12x"] {
            let once = normalize_hex_input(input);
            assert_eq!(normalize_hex_input(&once), once);
        }
    }

    #[test]
    fn normalize_passes_malformed_middles_through() {
        // Repair is shape-only; the bad digit is left for from_hex to reject.
        assert_eq!(normalize_hex_input("12x"), "1122xx");
        assert!(Rgba::from_hex(&normalize_hex_input("12x")).is_err());
    }

    #[test]
    fn channel_text_clamps_to_domain() {
        assert_eq!(parse_channel_text(Channel::Red, "999"), Some(255));
        assert_eq!(parse_channel_text(Channel::Alpha, "150"), Some(100));
        assert_eq!(parse_channel_text(Channel::Blue, "42"), Some(42));
        assert_eq!(parse_channel_text(Channel::Alpha, "100"), Some(100));
    }

    #[test]
    fn channel_text_strips_non_digits() {
        assert_eq!(parse_channel_text(Channel::Green, " 1a2b3c4 "), Some(123));
        assert_eq!(parse_channel_text(Channel::Red, "abc"), None);
        assert_eq!(parse_channel_text(Channel::Red, ""), None);
    }

    #[test]
    fn alpha_percent_is_floor_of_scaled_position() {
        assert_eq!(alpha_percent_from_position(0), 0);
        assert_eq!(alpha_percent_from_position(255), 100);
        for pos in 0..=255u16 {
            assert_eq!(alpha_percent_from_position(pos as u8), (pos * 100 / 255) as u8);
        }
    }

    #[test]
    fn alpha_percent_survives_position_round_trip() {
        for percent in 0..=100 {
            let pos = alpha_position_from_percent(percent);
            assert_eq!(alpha_percent_from_position(pos), percent);
        }
    }

    #[test]
    fn alpha_is_clamped_on_construction() {
        assert_eq!(Rgba::new(0, 0, 0, 255).alpha(), 100);
        assert_eq!(Rgba::from_rgb(0, 0, 0).with_alpha(130).alpha(), 100);
    }
}
