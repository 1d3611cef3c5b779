use crate::types::{Scale, TokenCounts};
use rand::Rng;
use std::ops::RangeInclusive;

/// How a single token field is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenRange {
    /// `lower + [0, span)`
    FromLower { lower: u32, span: u32 },
    /// `upper - (margin + [0, jitter))`, anchored just under a fixed ceiling
    BelowUpper { upper: u32, margin: u32, jitter: u32 },
}

impl TokenRange {
    const fn from_lower(lower: u32, span: u32) -> Self {
        TokenRange::FromLower { lower, span }
    }

    const fn below_upper(upper: u32) -> Self {
        TokenRange::BelowUpper {
            upper,
            margin: 1000,
            jitter: 20,
        }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        match *self {
            TokenRange::FromLower { lower, span } => lower + rng.random_range(0..span),
            TokenRange::BelowUpper {
                upper,
                margin,
                jitter,
            } => upper - margin - rng.random_range(0..jitter),
        }
    }

    /// Every value `sample` can return
    pub fn bounds(&self) -> RangeInclusive<u32> {
        match *self {
            TokenRange::FromLower { lower, span } => lower..=lower + span - 1,
            TokenRange::BelowUpper {
                upper,
                margin,
                jitter,
            } => upper - margin - (jitter - 1)..=upper - margin,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleProfile {
    pub input: TokenRange,
    pub output: TokenRange,
    pub cache_creation: TokenRange,
    pub cache_read: TokenRange,
}

impl ScaleProfile {
    /// Draws each field independently
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> TokenCounts {
        TokenCounts {
            input: self.input.sample(rng),
            output: self.output.sample(rng),
            cache_creation: self.cache_creation.sample(rng),
            cache_read: self.cache_read.sample(rng),
        }
    }

    pub fn contains(&self, tokens: &TokenCounts) -> bool {
        self.input.bounds().contains(&tokens.input)
            && self.output.bounds().contains(&tokens.output)
            && self.cache_creation.bounds().contains(&tokens.cache_creation)
            && self.cache_read.bounds().contains(&tokens.cache_read)
    }
}

const LIGHT: ScaleProfile = ScaleProfile {
    input: TokenRange::from_lower(1_000, 3_000),
    output: TokenRange::from_lower(500, 1_500),
    cache_creation: TokenRange::from_lower(0, 200),
    cache_read: TokenRange::from_lower(200, 800),
};

const MEDIUM: ScaleProfile = ScaleProfile {
    input: TokenRange::from_lower(8_000, 15_000),
    output: TokenRange::from_lower(5_000, 10_000),
    cache_creation: TokenRange::from_lower(500, 2_000),
    cache_read: TokenRange::from_lower(1_000, 5_000),
};

const HEAVY: ScaleProfile = ScaleProfile {
    input: TokenRange::below_upper(100_000),
    output: TokenRange::below_upper(32_000),
    cache_creation: TokenRange::below_upper(300_000),
    cache_read: TokenRange::below_upper(300_000),
};

pub fn profile(scale: Scale) -> &'static ScaleProfile {
    match scale {
        Scale::Light => &LIGHT,
        Scale::Medium => &MEDIUM,
        Scale::Heavy => &HEAVY,
    }
}
