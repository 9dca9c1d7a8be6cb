//! Gradient colors for the channel slider tracks.

use floem::peniko::Color;

use crate::color::{Channel, Rgba};

/// Start and stop colors of a channel's gradient track.
///
/// The red/green/blue tracks are fixed black → pure-channel ramps and never
/// change. The alpha track ramps from fully transparent to fully opaque at
/// the current RGB, so it must be recomputed whenever the base color changes.
pub(crate) fn gradient_stops(channel: Channel, base: Rgba) -> (Color, Color) {
    match channel {
        Channel::Red => (Color::BLACK, Color::rgb8(255, 0, 0)),
        Channel::Green => (Color::BLACK, Color::rgb8(0, 255, 0)),
        Channel::Blue => (Color::BLACK, Color::rgb8(0, 0, 255)),
        Channel::Alpha => (
            Color::rgba8(base.red(), base.green(), base.blue(), 0),
            Color::rgba8(base.red(), base.green(), base.blue(), 255),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_tracks_ignore_the_base_color() {
        let a = gradient_stops(Channel::Red, Rgba::from_rgb(10, 20, 30));
        let b = gradient_stops(Channel::Red, Rgba::from_rgb(200, 100, 0));
        assert_eq!(a, b);
        assert_eq!(a.0, Color::BLACK);
        assert_eq!(a.1, Color::rgb8(255, 0, 0));
    }

    #[test]
    fn alpha_track_follows_the_base_color() {
        let base = Rgba::from_rgb(12, 34, 56);
        let (start, stop) = gradient_stops(Channel::Alpha, base);
        assert_eq!(start, Color::rgba8(12, 34, 56, 0));
        assert_eq!(stop, Color::rgba8(12, 34, 56, 255));
    }
}
