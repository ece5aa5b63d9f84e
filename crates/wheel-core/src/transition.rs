use crate::palette::{Palette, Rgb};

/// Per-frame blend from one artist palette to the next.
#[derive(Clone, Debug)]
pub struct ColorTransition {
    from: Palette,
    to: Palette,
    progress: f32,
    step: f32,
}

impl ColorTransition {
    /// Starts settled on `palette`.
    pub fn new(palette: Palette, step: f32) -> Self {
        Self {
            from: palette,
            to: palette,
            progress: 1.0,
            step,
        }
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }

    #[inline]
    pub fn from(&self) -> Palette {
        self.from
    }

    #[inline]
    pub fn to(&self) -> Palette {
        self.to
    }

    /// One frame step. The last step may overshoot 1; `from` collapses into
    /// `to` as soon as it does.
    pub fn advance(&mut self) {
        if self.progress < 1.0 {
            self.progress += self.step;
        }
        if self.progress >= 1.0 {
            self.from = self.to;
        }
    }

    /// Colours to draw with this frame.
    pub fn colors(&self) -> [Rgb; 2] {
        if self.is_complete() {
            return self.to.colors();
        }
        self.from.lerp(&self.to, self.progress).colors()
    }

    /// Heads for `palette`, starting from whatever is on screen right now.
    pub fn retarget(&mut self, palette: Palette) {
        self.from = Palette(self.colors());
        self.to = palette;
        self.progress = 0.0;
    }
}
