//! Tile module - numbered 2048 tiles and their color table

use rand::Rng;

use crate::types::Rgb;

/// Outline color drawn around every tile.
pub const BOX_COLOR: Rgb = Rgb::new(141, 131, 121);

const BASE_BACKGROUND: Rgb = Rgb::new(238, 228, 218);
const DARK_TEXT: Rgb = Rgb::new(0, 0, 0);
const LIGHT_TEXT: Rgb = Rgb::new(255, 255, 255);

/// Background/foreground pair for a tile value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileColors {
    pub background: Rgb,
    pub foreground: Rgb,
}

/// A single numbered tile.
///
/// The value is always a power of two >= 2 and only grows by doubling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    value: u32,
}

impl Tile {
    /// Create a tile with an explicit value.
    pub fn new(value: u32) -> Self {
        debug_assert!(value >= 2 && value.is_power_of_two(), "bad tile value {value}");
        Self { value }
    }

    /// Create a tile holding 2 or 4, chosen uniformly.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let value = if rng.gen_bool(0.5) { 2 } else { 4 };
        Self { value }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Double the value (merge) and return the new value.
    pub fn double(&mut self) -> u32 {
        self.value = self.value.saturating_mul(2);
        self.value
    }

    /// Colors for the current value.
    pub fn colors(&self) -> TileColors {
        colors_for(self.value)
    }
}

/// Color table keyed by tile value.
///
/// Values of 4096 and above share the darkest entry; anything else outside the
/// table (including 2) uses the base colors.
pub fn colors_for(value: u32) -> TileColors {
    let light = |r, g, b| TileColors {
        background: Rgb::new(r, g, b),
        foreground: LIGHT_TEXT,
    };

    match value {
        4 => TileColors {
            background: Rgb::new(236, 224, 200),
            foreground: DARK_TEXT,
        },
        8 => light(243, 177, 121),
        16 => light(245, 149, 99),
        32 => light(249, 123, 98),
        64 => light(246, 93, 59),
        128 => light(238, 203, 102),
        256 => light(237, 204, 99),
        512 => light(239, 202, 88),
        1024 | 2048 => light(237, 198, 67),
        v if v >= 4096 => light(61, 58, 51),
        _ => TileColors {
            background: BASE_BACKGROUND,
            foreground: DARK_TEXT,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_tiles_are_two_or_four() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 2];
        for _ in 0..200 {
            match Tile::random(&mut rng).value() {
                2 => seen[0] = true,
                4 => seen[1] = true,
                other => panic!("unexpected value {other}"),
            }
        }
        assert_eq!(seen, [true, true]);
    }

    #[test]
    fn double_recolors() {
        let mut tile = Tile::new(4);
        assert_eq!(tile.colors().foreground, DARK_TEXT);
        assert_eq!(tile.double(), 8);
        assert_eq!(tile.colors().background, Rgb::new(243, 177, 121));
        assert_eq!(tile.colors().foreground, LIGHT_TEXT);
    }

    #[test]
    fn light_text_table() {
        let table = [
            (16, Rgb::new(245, 149, 99)),
            (32, Rgb::new(249, 123, 98)),
            (64, Rgb::new(246, 93, 59)),
            (128, Rgb::new(238, 203, 102)),
            (256, Rgb::new(237, 204, 99)),
            (512, Rgb::new(239, 202, 88)),
            (1024, Rgb::new(237, 198, 67)),
            (2048, Rgb::new(237, 198, 67)),
        ];
        for (value, background) in table {
            let colors = colors_for(value);
            assert_eq!(colors.background, background, "{value}");
            assert_eq!(colors.foreground, LIGHT_TEXT, "{value}");
        }
    }

    #[test]
    fn values_outside_table_fall_back() {
        assert_eq!(colors_for(2).background, BASE_BACKGROUND);
        assert_eq!(colors_for(8192), colors_for(4096));
        assert_eq!(colors_for(4096).background, Rgb::new(61, 58, 51));
    }
}
