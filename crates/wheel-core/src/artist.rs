use crate::config::PatternParams;
use crate::constants::ARTIST_COUNT;
use crate::palette::Palette;
use crate::pattern::Pattern;
use rand::Rng;
use std::f64::consts::{FRAC_PI_2, TAU};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Artist {
    Laura,
    Agnes,
    Kayak,
    Rosa,
}

/// Bucket index -> artist, in wheel order.
pub const ARTIST_TABLE: [Artist; ARTIST_COUNT] =
    [Artist::Laura, Artist::Agnes, Artist::Kayak, Artist::Rosa];

/// Which patterns an artist may apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternRule {
    /// Always the same 50/50 vertical split.
    FixedVerticalSplit,
    /// Vertical stripes of random width.
    RandomStripes,
    /// Any of the global layouts; entrance is one of the two-block splits.
    GlobalShift,
}

impl PatternRule {
    /// Pattern applied immediately when this artist comes to the front.
    pub fn entrance<R: Rng + ?Sized>(self, rng: &mut R, params: &PatternParams) -> Pattern {
        match self {
            PatternRule::FixedVerticalSplit => Pattern::HalfSplitVertical,
            PatternRule::RandomStripes => Pattern::stripes(rng, params),
            PatternRule::GlobalShift => Pattern::entrance_split(rng),
        }
    }

    /// Pattern applied by the interval scheduler while scrolling.
    pub fn mutation<R: Rng + ?Sized>(self, rng: &mut R, params: &PatternParams) -> Pattern {
        match self {
            PatternRule::FixedVerticalSplit => Pattern::HalfSplitVertical,
            PatternRule::RandomStripes => Pattern::stripes(rng, params),
            PatternRule::GlobalShift => Pattern::global_shift(rng, params),
        }
    }
}

impl Artist {
    pub fn name(self) -> &'static str {
        match self {
            Artist::Laura => "laura",
            Artist::Agnes => "agnes",
            Artist::Kayak => "kayak",
            Artist::Rosa => "rosa",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Artist::Laura => Palette::from_hex(0xF13D05, 0x6DBBBF),
            Artist::Agnes => Palette::from_hex(0x9EC7A9, 0xF4A9C8),
            Artist::Kayak => Palette::from_hex(0xF4A9C8, 0xFA9405),
            Artist::Rosa => Palette::from_hex(0xA4BB1A, 0xDDDDE2),
        }
    }

    pub fn rule(self) -> PatternRule {
        match self {
            Artist::Kayak => PatternRule::FixedVerticalSplit,
            Artist::Agnes => PatternRule::RandomStripes,
            Artist::Laura | Artist::Rosa => PatternRule::GlobalShift,
        }
    }

    #[inline]
    pub fn from_bucket(bucket: usize) -> Self {
        ARTIST_TABLE[bucket % ARTIST_COUNT]
    }
}

/// Wheel angle for a scroll offset, normalised into `[0, 2π)`.
#[inline]
pub fn angle_for_scroll(offset: f64, rotation_rate: f64) -> f64 {
    let a = (offset * rotation_rate).rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if a >= TAU {
        0.0
    } else {
        a
    }
}

/// Nearest quarter turn, wrapped so that angles close to 2π land on 0.
#[inline]
pub fn bucket_for_angle(angle: f64) -> usize {
    (angle / FRAC_PI_2).round() as usize % ARTIST_COUNT
}

/// Tracks which artist faces the viewer as the page scrolls.
#[derive(Clone, Debug)]
pub struct ArtistSelector {
    rotation_rate: f64,
    bucket: usize,
}

impl ArtistSelector {
    pub fn new(rotation_rate: f64) -> Self {
        Self {
            rotation_rate,
            bucket: 0,
        }
    }

    /// Scroll distance after which the wheel has made a full turn.
    pub fn period(&self) -> f64 {
        TAU / self.rotation_rate
    }

    pub fn bucket_for_scroll(&self, offset: f64) -> usize {
        bucket_for_angle(angle_for_scroll(offset, self.rotation_rate))
    }

    /// Returns the new artist when `offset` moves the wheel into a different
    /// bucket; repeated offsets in the same bucket return `None`.
    pub fn on_scroll(&mut self, offset: f64) -> Option<Artist> {
        let bucket = self.bucket_for_scroll(offset);
        if bucket == self.bucket {
            return None;
        }
        self.bucket = bucket;
        Some(Artist::from_bucket(bucket))
    }

    #[inline]
    pub fn bucket(&self) -> usize {
        self.bucket
    }

    #[inline]
    pub fn current(&self) -> Artist {
        Artist::from_bucket(self.bucket)
    }
}
