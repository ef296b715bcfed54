//! Identifier allocation for cross-referenced chart elements.
//!
//! A chart and its axes refer to each other through numeric `axId` values.
//! Those values must be distinct within a document, so one allocator is
//! shared by every chart written into the same package.

use crate::ooxml::error::{OoxmlError, Result};
use rand::Rng;
use std::collections::HashSet;

/// Exclusive upper bound of randomly drawn axis identifiers (`8^8`).
pub const RANDOM_AXIS_ID_RANGE: u32 = 8u32.pow(8);

#[derive(Debug, Clone)]
enum Strategy {
    /// `None` once `u32::MAX` has been handed out.
    Sequential { next: Option<u32> },
    Random { range: u32, issued: HashSet<u32> },
}

/// Document-scoped source of axis identifiers.
///
/// # Examples
///
/// ```
/// use sheetdraw::common::id::AxisIdAllocator;
///
/// let mut ids = AxisIdAllocator::sequential();
/// assert_eq!(ids.allocate()?, 1);
/// assert_eq!(ids.allocate_pair()?, (2, 3));
/// # Ok::<(), sheetdraw::ooxml::error::OoxmlError>(())
/// ```
#[derive(Debug, Clone)]
pub struct AxisIdAllocator {
    strategy: Strategy,
}

impl AxisIdAllocator {
    /// Monotonically increasing identifiers starting at 1.
    pub fn sequential() -> Self {
        Self::sequential_from(1)
    }

    /// Monotonically increasing identifiers starting at `first`, for
    /// documents that already use the identifiers below it.
    pub fn sequential_from(first: u32) -> Self {
        Self {
            strategy: Strategy::Sequential { next: Some(first) },
        }
    }

    /// Identifiers drawn uniformly from `0..8^8`, never repeating one this
    /// allocator has already handed out.
    pub fn random() -> Self {
        Self::random_below(RANDOM_AXIS_ID_RANGE)
    }

    fn random_below(range: u32) -> Self {
        Self {
            strategy: Strategy::Random {
                range,
                issued: HashSet::new(),
            },
        }
    }

    /// Hand out the next identifier.
    ///
    /// Fails with [`OoxmlError::AxisIdsExhausted`] once every identifier the
    /// strategy can produce has been issued; no identifier is ever repeated.
    pub fn allocate(&mut self) -> Result<u32> {
        match &mut self.strategy {
            Strategy::Sequential { next } => {
                let id = next.ok_or(OoxmlError::AxisIdsExhausted)?;
                *next = id.checked_add(1);
                Ok(id)
            },
            Strategy::Random { range, issued } => {
                if issued.len() as u64 >= u64::from(*range) {
                    tracing::warn!(range = *range, "random axis id range exhausted");
                    return Err(OoxmlError::AxisIdsExhausted);
                }
                let mut rng = rand::rng();
                loop {
                    let id = rng.random_range(0..*range);
                    if issued.insert(id) {
                        return Ok(id);
                    }
                }
            },
        }
    }

    /// Hand out two distinct identifiers, for a pair of crossing axes.
    pub fn allocate_pair(&mut self) -> Result<(u32, u32)> {
        let first = self.allocate()?;
        let second = self.allocate()?;
        tracing::debug!(first, second, "allocated axis id pair");
        Ok((first, second))
    }
}

impl Default for AxisIdAllocator {
    fn default() -> Self {
        Self::sequential()
    }
}
