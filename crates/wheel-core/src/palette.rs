use glam::Vec3;

/// Straight (non-linearised) RGB colour with components in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb(pub Vec3);

impl Rgb {
    /// Builds a colour from a packed `0xRRGGBB` value.
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self(Vec3::new(r, g, b))
    }

    /// Component-wise blend; `t` is clamped to `[0, 1]`.
    #[inline]
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        Rgb(self.0.lerp(other.0, t.clamp(0.0, 1.0)))
    }

    /// 8-bit channels, rounded.
    pub fn to_u8(self) -> [u8; 3] {
        let c = (self.0.clamp(Vec3::ZERO, Vec3::ONE) * 255.0).round();
        [c.x as u8, c.y as u8, c.z as u8]
    }

    /// CSS `rgb(r, g, b)` string for canvas fill styles.
    pub fn css(self) -> String {
        let [r, g, b] = self.to_u8();
        format!("rgb({r}, {g}, {b})")
    }
}

/// Ordered pair of colours; cells pick one by `ColorSlot`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette(pub [Rgb; 2]);

impl Palette {
    pub fn from_hex(a: u32, b: u32) -> Self {
        Self([Rgb::from_hex(a), Rgb::from_hex(b)])
    }

    #[inline]
    pub fn colors(&self) -> [Rgb; 2] {
        self.0
    }

    pub fn lerp(&self, other: &Palette, t: f32) -> Palette {
        Palette([self.0[0].lerp(other.0[0], t), self.0[1].lerp(other.0[1], t)])
    }
}
