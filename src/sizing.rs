//! File size generation
//!
//! Files receive a size when they are created. The policy is injected into the
//! namespace so tests can use deterministic sizes.

use crate::types::Size;
use rand::Rng;
use std::ops::Range;

/// Lower bound of the default size range (inclusive)
pub const DEFAULT_MIN_SIZE: Size = 1000;
/// Upper bound of the default size range (exclusive)
pub const DEFAULT_MAX_SIZE: Size = 11000;

/// Produces the size assigned to each newly created file
pub trait SizeGenerator: Send + Sync {
    fn next_size(&self) -> Size;
}

impl<F> SizeGenerator for F
where
    F: Fn() -> Size + Send + Sync,
{
    fn next_size(&self) -> Size {
        self()
    }
}

/// Draws sizes uniformly from a half-open range
#[derive(Debug, Clone)]
pub struct RandomSize {
    range: Range<Size>,
}

impl RandomSize {
    /// Returns `None` for an empty range
    pub fn new(range: Range<Size>) -> Option<Self> {
        if range.is_empty() {
            None
        } else {
            Some(Self { range })
        }
    }

    pub fn range(&self) -> &Range<Size> {
        &self.range
    }
}

impl Default for RandomSize {
    fn default() -> Self {
        Self {
            range: DEFAULT_MIN_SIZE..DEFAULT_MAX_SIZE,
        }
    }
}

impl SizeGenerator for RandomSize {
    fn next_size(&self) -> Size {
        rand::thread_rng().gen_range(self.range.clone())
    }
}

/// Assigns the same size to every file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSize(pub Size);

impl SizeGenerator for FixedSize {
    fn next_size(&self) -> Size {
        self.0
    }
}
