use crate::artist::{Artist, ArtistSelector};
use crate::clock::{Clock, InstantClock};
use crate::config::{ConfigError, EngineConfig};
use crate::grid::{CellGrid, Viewport};
use crate::palette::Rgb;
use crate::pattern::Pattern;
use crate::render::{self, Surface};
use crate::scheduler::{MutationScheduler, ScrollPhase};
use crate::transition::ColorTransition;
use rand::rngs::StdRng;
use rand::SeedableRng;
use smallvec::SmallVec;

/// Why a pattern was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MutationCause {
    /// Immediately after the front artist changed.
    Entrance,
    /// Interval timer fired while scrolling.
    Scheduled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineEvent {
    ArtistChanged { from: Artist, to: Artist },
    PatternApplied { pattern: Pattern, cause: MutationCause },
    ScrollSettled,
}

pub type Events = SmallVec<[EngineEvent; 4]>;

/// Result of one `tick`.
#[derive(Clone, Debug)]
pub struct Frame {
    pub colors: [Rgb; 2],
    pub events: Events,
}

/// Owns every piece of background state: grid, artist, scroll tracking,
/// colour transition and the pattern RNG.
pub struct BackgroundEngine<C: Clock = InstantClock> {
    config: EngineConfig,
    clock: C,
    rng: StdRng,
    viewport: Viewport,
    grid: CellGrid,
    selector: ArtistSelector,
    scheduler: MutationScheduler,
    transition: ColorTransition,
}

impl<C: Clock> BackgroundEngine<C> {
    pub fn new(config: EngineConfig, viewport: Viewport, clock: C) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let selector = ArtistSelector::new(config.rotation_rate);
        let transition = ColorTransition::new(selector.current().palette(), config.color_step);
        let scheduler = MutationScheduler::new(
            config.scroll_debounce,
            config.mutation_interval,
            clock.now(),
        );
        let grid = CellGrid::new(viewport, config.cell_size);
        log::info!(
            "[background] grid {}x{} cell={} artist={}",
            grid.rows(),
            grid.cols(),
            config.cell_size,
            selector.current().name()
        );
        Ok(Self {
            config,
            clock,
            rng,
            viewport,
            grid,
            selector,
            scheduler,
            transition,
        })
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn current_artist(&self) -> Artist {
        self.selector.current()
    }

    #[inline]
    pub fn bucket(&self) -> usize {
        self.selector.bucket()
    }

    #[inline]
    pub fn transition(&self) -> &ColorTransition {
        &self.transition
    }

    #[inline]
    pub fn scroll_phase(&self) -> ScrollPhase {
        self.scheduler.phase()
    }

    /// Handles a scroll event. An artist change applies that artist's
    /// entrance pattern right away and starts a colour transition.
    pub fn on_scroll(&mut self, offset: f64) -> Events {
        let now = self.clock.now();
        let mut events = Events::new();
        if self.scheduler.settle(now) {
            log::debug!("[background] scroll settled");
            events.push(EngineEvent::ScrollSettled);
        }
        self.scheduler.on_scroll(offset, now);

        let previous = self.selector.current();
        if let Some(artist) = self.selector.on_scroll(offset) {
            log::info!(
                "[background] artist {} -> {} (bucket {})",
                previous.name(),
                artist.name(),
                self.selector.bucket()
            );
            events.push(EngineEvent::ArtistChanged {
                from: previous,
                to: artist,
            });
            self.transition.retarget(artist.palette());
            let pattern = artist.rule().entrance(&mut self.rng, &self.config.patterns);
            events.push(self.apply(pattern, MutationCause::Entrance));
        }
        events
    }

    /// Rebuilds the grid for a new viewport. Content resets to the
    /// checkerboard; artist and colours carry over.
    pub fn on_resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.grid.resize(viewport, self.config.cell_size);
        log::info!(
            "[background] resize {}x{} -> grid {}x{}",
            viewport.width,
            viewport.height,
            self.grid.rows(),
            self.grid.cols()
        );
    }

    /// Per-frame update: advances the colour blend, ends a finished scroll
    /// burst and applies a scheduled mutation when one is due.
    pub fn tick(&mut self) -> Frame {
        let now = self.clock.now();
        let mut events = Events::new();

        self.transition.advance();
        let colors = self.transition.colors();

        if self.scheduler.settle(now) {
            log::debug!("[background] scroll settled");
            events.push(EngineEvent::ScrollSettled);
        }
        if self.scheduler.poll(now) {
            let rule = self.selector.current().rule();
            let pattern = rule.mutation(&mut self.rng, &self.config.patterns);
            events.push(self.apply(pattern, MutationCause::Scheduled));
        }

        Frame { colors, events }
    }

    /// Draws the current grid with `colors`, normally the ones returned by
    /// the preceding `tick`.
    pub fn render<S: Surface + ?Sized>(&self, colors: [Rgb; 2], surface: &mut S) {
        render::render(&self.grid, colors, self.config.cell_size, surface);
    }

    /// `tick` followed by `render`.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Events {
        let frame = self.tick();
        self.render(frame.colors, surface);
        frame.events
    }

    fn apply(&mut self, pattern: Pattern, cause: MutationCause) -> EngineEvent {
        log::debug!("[background] apply {} ({:?})", pattern.name(), cause);
        pattern.apply(&mut self.grid);
        EngineEvent::PatternApplied { pattern, cause }
    }
}
