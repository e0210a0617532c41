//! Color type and coverage blending.
//!
//! The rasterizers never touch color: the anti-aliased path exposes raw
//! coverage weights and leaves compositing to the caller. This module
//! carries the one formula a caller needs for that: blending an ink color
//! toward a background by a coverage fraction.

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::new(255, 0, 0, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Blend this ink color toward a background by a coverage fraction.
    ///
    /// Coverage 1.0 yields the ink unchanged, 0.0 yields the background.
    /// Coverage outside `[0, 1]` is clamped. The alpha channel stays at
    /// the background's alpha so a fully uncovered pixel is untouched.
    #[must_use]
    pub fn blend_coverage(self, background: Self, coverage: f64) -> Self {
        let t = coverage.clamp(0.0, 1.0);

        let channel = |bg: u8, ink: u8| -> u8 {
            (f64::from(bg) + (f64::from(ink) - f64::from(bg)) * t).round() as u8
        };

        Self::new(
            channel(background.r, self.r),
            channel(background.g, self.g),
            channel(background.b, self.b),
            background.a,
        )
    }
}
