//! Scroll-driven grid mutation engine behind the artist-wheel background.
//!
//! Platform-free: the browser front-end feeds scroll offsets and viewport
//! sizes into a [`BackgroundEngine`] and hands it a [`Surface`] to draw on.

pub mod artist;
pub mod clock;
pub mod config;
pub mod constants;
pub mod engine;
pub mod grid;
pub mod palette;
pub mod pattern;
pub mod render;
pub mod scheduler;
pub mod transition;

pub use artist::{Artist, ArtistSelector, PatternRule, ARTIST_TABLE};
pub use clock::{Clock, InstantClock, ManualClock};
pub use config::{ConfigError, EngineConfig, ParamRange, PatternParams};
pub use engine::{BackgroundEngine, EngineEvent, Events, Frame, MutationCause};
pub use grid::{Cell, CellGrid, ColorSlot, GridDims, Orientation, Shape, Viewport};
pub use palette::{Palette, Rgb};
pub use pattern::Pattern;
pub use render::{CommandBuffer, DrawCommand, Surface};
pub use scheduler::{DebounceTimer, MutationScheduler, ScrollPhase, ScrollState};
pub use transition::ColorTransition;
