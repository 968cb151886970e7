//! Static 3D scene: ground plane, the wall cube and the random columns
//!
//! Everything here is generated once at startup and never changes.

use macroquad::prelude::*;

use crate::ui::theme;

/// Integer random source, inclusive on both ends
pub trait RandomSource {
    fn range_inclusive(&mut self, low: i32, high: i32) -> i32;
}

/// Macroquad's global generator
pub struct MacroquadRandom;

impl MacroquadRandom {
    pub fn seeded(seed: u64) -> Self {
        macroquad::rand::srand(seed);
        Self
    }
}

impl RandomSource for MacroquadRandom {
    fn range_inclusive(&mut self, low: i32, high: i32) -> i32 {
        // gen_range truncates towards zero and excludes `high`, so draw an
        // offset from a non-negative range
        low + macroquad::rand::gen_range(0, high - low + 1)
    }
}

/// A randomly placed column standing on the ground
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    pub height: f32,
    /// Center of the column; y is half the height so it sits on the ground
    pub position: Vec3,
    /// RGBA bytes
    pub color: [u8; 4],
}

impl Column {
    pub const HEIGHT_RANGE: (i32, i32) = (1, 12);
    pub const SPREAD: i32 = 15;
    pub const RED_RANGE: (i32, i32) = (20, 255);
    pub const GREEN_RANGE: (i32, i32) = (10, 55);
    pub const BLUE: u8 = 30;

    pub fn random(rng: &mut impl RandomSource) -> Self {
        let height = rng.range_inclusive(Self::HEIGHT_RANGE.0, Self::HEIGHT_RANGE.1) as f32;
        let x = rng.range_inclusive(-Self::SPREAD, Self::SPREAD) as f32;
        let z = rng.range_inclusive(-Self::SPREAD, Self::SPREAD) as f32;
        let r = rng.range_inclusive(Self::RED_RANGE.0, Self::RED_RANGE.1) as u8;
        let g = rng.range_inclusive(Self::GREEN_RANGE.0, Self::GREEN_RANGE.1) as u8;
        Self {
            height,
            position: vec3(x, height / 2.0, z),
            color: [r, g, Self::BLUE, 255],
        }
    }

    /// 2 x height x 2 box
    pub fn size(&self) -> Vec3 {
        vec3(2.0, self.height, 2.0)
    }

    pub fn rgba(&self) -> Color {
        let [r, g, b, a] = self.color;
        Color::from_rgba(r, g, b, a)
    }
}

/// Fixed solid cube
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wall {
    pub center: Vec3,
    pub size: Vec3,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ground {
    pub center: Vec3,
    pub size: Vec2,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub ground: Ground,
    pub walls: Vec<Wall>,
    pub columns: Vec<Column>,
}

impl Scene {
    pub fn generate(column_count: usize, rng: &mut impl RandomSource) -> Self {
        let columns = (0..column_count).map(|_| Column::random(rng)).collect();
        Self {
            ground: Ground {
                center: Vec3::ZERO,
                size: vec2(48.0, 48.0),
                color: theme::GROUND,
            },
            walls: vec![Wall {
                center: vec3(8.0, 2.5, 4.0),
                size: vec3(2.0, 2.0, 2.0),
                color: theme::WALL,
            }],
            columns,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Deterministic LCG so tests don't touch macroquad's global state
    pub(crate) struct Lcg(pub u64);

    impl RandomSource for Lcg {
        fn range_inclusive(&mut self, low: i32, high: i32) -> i32 {
            self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let span = (high - low + 1) as u64;
            low + ((self.0 >> 33) % span) as i32
        }
    }

    /// Always returns one end of the range
    struct Extreme {
        high: bool,
    }

    impl RandomSource for Extreme {
        fn range_inclusive(&mut self, low: i32, high: i32) -> i32 {
            if self.high { high } else { low }
        }
    }

    fn assert_column_in_range(c: &Column) {
        assert!((1.0..=12.0).contains(&c.height));
        assert_eq!(c.height.fract(), 0.0);
        assert!((-15.0..=15.0).contains(&c.position.x));
        assert!((-15.0..=15.0).contains(&c.position.z));
        assert_eq!(c.position.y, c.height / 2.0);
        assert!(c.color[0] >= 20);
        assert!((10..=55).contains(&c.color[1]));
        assert_eq!(c.color[2], 30);
        assert_eq!(c.color[3], 255);
    }

    #[test]
    fn test_generated_columns_in_range() {
        for seed in 0..10 {
            let scene = Scene::generate(20, &mut Lcg(seed));
            assert_eq!(scene.columns.len(), 20);
            scene.columns.iter().for_each(assert_column_in_range);
        }
    }

    #[test]
    fn test_range_extremes() {
        let low = Column::random(&mut Extreme { high: false });
        let high = Column::random(&mut Extreme { high: true });
        assert_column_in_range(&low);
        assert_column_in_range(&high);
        assert_eq!(low.height, 1.0);
        assert_eq!(high.height, 12.0);
        assert_eq!(low.position, vec3(-15.0, 0.5, -15.0));
        assert_eq!(high.color, [255, 55, 30, 255]);
    }

    #[test]
    fn test_single_wall_and_ground() {
        let scene = Scene::generate(20, &mut Lcg(7));
        assert_eq!(scene.walls.len(), 1);
        assert_eq!(scene.walls[0].center, vec3(8.0, 2.5, 4.0));
        assert_eq!(scene.walls[0].size, vec3(2.0, 2.0, 2.0));
        assert_eq!(scene.ground.size, vec2(48.0, 48.0));
    }

    #[test]
    fn test_macroquad_random_is_inclusive() {
        let mut rng = MacroquadRandom::seeded(1234);
        let mut saw_high = false;
        for _ in 0..2000 {
            let v = rng.range_inclusive(1, 3);
            assert!((1..=3).contains(&v));
            saw_high |= v == 3;
        }
        assert!(saw_high);
    }
}
