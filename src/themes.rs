/*
 * Color Themes Module
 *
 * This module defines the selectable color themes for the swarm. A theme is
 * a sampling recipe over HSL space: every call to `sample` draws a fresh
 * random color inside the theme's hue/saturation/lightness bands, so no two
 * particles share an exact color. Changing the theme recolors the whole
 * store at once (see ParticleStore::recolor).
 */

use nannou::prelude::*;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Rainbow,
    Fire,
    Ocean,
    Matrix,
    Sunset,
    Monochrome,
}

impl Theme {
    pub const ALL: [Theme; 6] = [
        Theme::Rainbow,
        Theme::Fire,
        Theme::Ocean,
        Theme::Matrix,
        Theme::Sunset,
        Theme::Monochrome,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Theme::Rainbow => "Rainbow",
            Theme::Fire => "Fire",
            Theme::Ocean => "Ocean",
            Theme::Matrix => "Matrix",
            Theme::Sunset => "Sunset",
            Theme::Monochrome => "Monochrome",
        }
    }

    // The theme following this one, for the cycle-theme intent
    pub fn next(self) -> Theme {
        let i = Theme::ALL.iter().position(|&t| t == self).unwrap_or(0);
        Theme::ALL[(i + 1) % Theme::ALL.len()]
    }

    // Draw a fresh color from the theme's band
    pub fn sample(self, rng: &mut impl Rng) -> Rgb {
        match self {
            Theme::Rainbow => {
                let hue = rng.gen_range(0.0..1.0);
                let saturation = rng.gen_range(0.75..1.0);
                let lightness = rng.gen_range(0.55..0.80);
                Rgb::from(hsl(hue, saturation, lightness))
            }
            Theme::Fire => {
                // Red through yellow
                let hue = rng.gen_range(0.0..0.15);
                let saturation = rng.gen_range(0.85..1.0);
                let lightness = rng.gen_range(0.50..0.80);
                Rgb::from(hsl(hue, saturation, lightness))
            }
            Theme::Ocean => {
                // Cyan through blue
                let hue = rng.gen_range(0.50..0.70);
                let saturation = rng.gen_range(0.70..1.0);
                let lightness = rng.gen_range(0.50..0.80);
                Rgb::from(hsl(hue, saturation, lightness))
            }
            Theme::Matrix => {
                let hue = 0.33;
                let saturation = rng.gen_range(0.70..1.0);
                let lightness = rng.gen_range(0.40..0.80);
                Rgb::from(hsl(hue, saturation, lightness))
            }
            Theme::Sunset => {
                // Pink/red, orange, or purple, each band equally likely
                let (min, max) = match rng.gen_range(0..3) {
                    0 => (0.85, 1.0),
                    1 => (0.05, 0.15),
                    _ => (0.75, 0.85),
                };
                let hue = rng.gen_range(min..max);
                let saturation = rng.gen_range(0.75..1.0);
                let lightness = rng.gen_range(0.55..0.80);
                Rgb::from(hsl(hue, saturation, lightness))
            }
            Theme::Monochrome => {
                // Light grays to white, no hue
                let value = rng.gen_range(0.70..1.0);
                rgb(value, value, value)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn monochrome_is_a_single_gray_value() {
        let mut rng = rng();
        for _ in 0..50 {
            let c = Theme::Monochrome.sample(&mut rng);
            assert_eq!(c.red, c.green);
            assert_eq!(c.green, c.blue);
            assert!(c.red >= 0.70 && c.red < 1.0);
        }
    }

    #[test]
    fn fire_is_red_dominant() {
        // Hues below 0.15 keep red as the strongest channel
        let mut rng = rng();
        for _ in 0..50 {
            let c = Theme::Fire.sample(&mut rng);
            assert!(c.red >= c.green && c.red > c.blue, "not fiery: {:?}", c);
        }
    }

    #[test]
    fn ocean_has_no_red_dominance() {
        let mut rng = rng();
        for _ in 0..50 {
            let c = Theme::Ocean.sample(&mut rng);
            assert!(c.blue > c.red, "not oceanic: {:?}", c);
        }
    }

    #[test]
    fn matrix_is_green_dominant() {
        let mut rng = rng();
        for _ in 0..50 {
            let c = Theme::Matrix.sample(&mut rng);
            assert!(c.green > c.red && c.green > c.blue, "not green: {:?}", c);
        }
    }

    #[test]
    fn samples_are_fresh_each_call() {
        let mut rng = rng();
        let a = Theme::Rainbow.sample(&mut rng);
        let b = Theme::Rainbow.sample(&mut rng);
        assert_ne!((a.red, a.green, a.blue), (b.red, b.green, b.blue));
    }

    #[test]
    fn theme_cycle_wraps() {
        let mut theme = Theme::Rainbow;
        for _ in 0..Theme::ALL.len() {
            theme = theme.next();
        }
        assert_eq!(theme, Theme::Rainbow);
    }
}
