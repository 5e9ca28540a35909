use super::track::Track;
use crate::config::HERO_SCROLL_RANGE;

// Hero layers are driven by raw scroll pixels. Positive offsets counteract
// the scroll and read as far away; negative offsets outrun it and read as near.
const HERO_FAR: Track = Track::new((0.0, HERO_SCROLL_RANGE), (0.0, 400.0));
const HERO_MID: Track = Track::new((0.0, HERO_SCROLL_RANGE), (0.0, 150.0));
const HERO_NEAR: Track = Track::new((0.0, HERO_SCROLL_RANGE), (0.0, -150.0));
const HERO_VERY_NEAR: Track = Track::new((0.0, HERO_SCROLL_RANGE), (0.0, -400.0));
const HERO_ROTATE: Track = Track::new((0.0, HERO_SCROLL_RANGE), (0.0, 15.0));

// Sticker layers are driven by whole-page progress.
const CITY_FAR: Track = Track::unit((0.0, -150.0));
const CITY_MID: Track = Track::unit((0.0, -350.0));
const CITY_CLOSE: Track = Track::unit((0.0, -700.0));
const SPEED_LINES: Track = Track::unit((0.0, 1200.0));
const ROTATE_SLOW: Track = Track::unit((0.0, 45.0));
const ROTATE_FAST: Track = Track::unit((0.0, -90.0));

/// Vertical offset in pixels and rotation in degrees for one layer.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct LayerTransform {
    pub y: f64,
    pub rotate: f64,
}

impl LayerTransform {
    fn offset(track: Track, input: f64) -> Self {
        Self { y: track.sample(input), rotate: 0.0 }
    }

    fn turning(track: Track, spin: Track, input: f64) -> Self {
        Self { y: track.sample(input), rotate: spin.sample(input) }
    }

    pub fn style(&self) -> String {
        format!(
            "transform: translate3d(0, {:.2}px, 0) rotate({:.2}deg);",
            self.y, self.rotate
        )
    }
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct HeroLayers {
    pub far: LayerTransform,
    pub mid: LayerTransform,
    pub near: LayerTransform,
    pub very_near: LayerTransform,
}

impl HeroLayers {
    pub fn at(scroll_y: f64) -> Self {
        Self {
            far: LayerTransform::offset(HERO_FAR, scroll_y),
            mid: LayerTransform::turning(HERO_MID, HERO_ROTATE, scroll_y),
            near: LayerTransform::offset(HERO_NEAR, scroll_y),
            very_near: LayerTransform::offset(HERO_VERY_NEAR, scroll_y),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct StickerLayers {
    pub city_far: LayerTransform,
    pub city_mid: LayerTransform,
    pub city_mid_slow: LayerTransform,
    pub city_mid_fast: LayerTransform,
    pub speed_lines: LayerTransform,
    pub close_slow: LayerTransform,
    pub close_fast: LayerTransform,
}

impl StickerLayers {
    pub fn at(progress: f64) -> Self {
        Self {
            city_far: LayerTransform::offset(CITY_FAR, progress),
            city_mid: LayerTransform::offset(CITY_MID, progress),
            city_mid_slow: LayerTransform::turning(CITY_MID, ROTATE_SLOW, progress),
            city_mid_fast: LayerTransform::turning(CITY_MID, ROTATE_FAST, progress),
            speed_lines: LayerTransform::offset(SPEED_LINES, progress),
            close_slow: LayerTransform::turning(CITY_CLOSE, ROTATE_SLOW, progress),
            close_fast: LayerTransform::turning(CITY_CLOSE, ROTATE_FAST, progress),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_of_page_is_the_static_layout() {
        assert_eq!(HeroLayers::at(0.0), HeroLayers::default());
        assert_eq!(StickerLayers::at(0.0), StickerLayers::default());
    }

    #[test]
    fn hero_layers_reach_their_constants_at_range_end() {
        let layers = HeroLayers::at(HERO_SCROLL_RANGE);
        assert_eq!(layers.far.y, 400.0);
        assert_eq!(layers.mid.y, 150.0);
        assert_eq!(layers.mid.rotate, 15.0);
        assert_eq!(layers.near.y, -150.0);
        assert_eq!(layers.very_near.y, -400.0);
    }

    #[test]
    fn hero_layers_hold_still_past_the_range() {
        assert_eq!(HeroLayers::at(5_000.0), HeroLayers::at(HERO_SCROLL_RANGE));
        assert_eq!(HeroLayers::at(-120.0), HeroLayers::at(0.0));
    }

    #[test]
    fn nearer_layers_travel_further() {
        let layers = HeroLayers::at(400.0);
        assert!(layers.very_near.y.abs() > layers.near.y.abs());
        assert!(layers.far.y.abs() > layers.mid.y.abs());

        let stickers = StickerLayers::at(0.5);
        assert!(stickers.close_slow.y < stickers.city_mid.y);
        assert!(stickers.city_mid.y < stickers.city_far.y);
    }

    #[test]
    fn sticker_layers_at_full_progress() {
        let layers = StickerLayers::at(1.0);
        assert_eq!(layers.city_far.y, -150.0);
        assert_eq!(layers.city_mid.y, -350.0);
        assert_eq!(layers.city_mid_slow.rotate, 45.0);
        assert_eq!(layers.city_mid_fast.rotate, -90.0);
        assert_eq!(layers.speed_lines.y, 1200.0);
        assert_eq!(layers.close_fast.y, -700.0);
        assert_eq!(layers.close_fast.rotate, -90.0);
    }

    #[test]
    fn overscroll_progress_is_clamped() {
        assert_eq!(StickerLayers::at(1.4), StickerLayers::at(1.0));
        assert_eq!(StickerLayers::at(-0.2), StickerLayers::at(0.0));
    }

    #[test]
    fn style_renders_translate_and_rotate() {
        let t = LayerTransform { y: -12.5, rotate: 3.0 };
        assert_eq!(
            t.style(),
            "transform: translate3d(0, -12.50px, 0) rotate(3.00deg);"
        );
    }
}
