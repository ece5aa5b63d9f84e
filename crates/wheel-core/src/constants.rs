use std::time::Duration;

// Shared tuning constants for the background engine. `EngineConfig::default`
// is built from these.

// Grid geometry
pub const CELL_SIZE: f32 = 20.0; // px per cell side

// Scroll -> wheel angle
pub const ROTATION_RATE: f64 = 0.0006; // radians per scrolled px
pub const ARTIST_COUNT: usize = 4;

// Timing
pub const SCROLL_DEBOUNCE: Duration = Duration::from_millis(150); // quiet period before idle
pub const MUTATION_INTERVAL: Duration = Duration::from_millis(1200); // min gap between mutations

// Colour transition advance per rendered frame
pub const COLOR_STEP: f32 = 0.12;

// Randomized pattern parameters, half-open [lo, hi)
pub const STRIPE_WIDTH_RANGE: (u32, u32) = (3, 6);
pub const BLOCK_SIZE_RANGE: (u32, u32) = (6, 12);
pub const RING_THICKNESS_RANGE: (u32, u32) = (3, 6);
pub const WAVE_PERIOD_RANGE: (u32, u32) = (3, 7);
