//! Sequence builders: arrays, shuffles, strings, pairs, and raw streams.
//!
//! Every builder threads an advancing seed explicitly: at each step it
//! constructs a generator from the current seed, derives one element
//! through a scalar adapter, then re-seeds from that generator's raw value
//! for the next element. Reusing one seed for N draws would return N
//! identical values, so each element's seed is the previous element's full
//! mixed output.
//!
//! Elements are produced in index order; apart from that, builders are pure
//! functions of the starting seed and need no synchronization.

use crate::error::{Error, Result};
use crate::generator::{bounded, Generator};
use crate::tracing_compat::trace;

impl Generator {
    /// Builds `len` integers in `[min, max]`, seed-chained per element.
    ///
    /// `len == 0` yields an empty vector. Rejects `max < min`.
    pub fn int_array(&self, len: usize, min: u32, max: u32) -> Result<Vec<u32>> {
        let mut out = vec![0; len];
        self.fill_ints(&mut out, min, max)?;
        Ok(out)
    }

    /// Fills a caller-provided slice with integers in `[min, max]`, using
    /// the same per-element seed chain as [`int_array`](Self::int_array).
    pub fn fill_ints(&self, out: &mut [u32], min: u32, max: u32) -> Result<()> {
        if max < min {
            return Err(Error::EmptyIntRange { min, max });
        }
        let mut cursor = *self;
        for slot in out.iter_mut() {
            *slot = bounded(cursor.raw_value(), min, max);
            cursor = cursor.advance();
        }
        Ok(())
    }

    /// Shuffles a slice in place.
    ///
    /// At each index `i` a swap target `j` is drawn from the FULL index
    /// range `[0, n-1]`, not the remaining suffix. This deviates from
    /// Fisher–Yates and does not produce uniformly distributed
    /// permutations; the bias is part of the pinned output contract, so it
    /// is preserved rather than corrected. The result is always a
    /// permutation of the input. Slices of length 0 or 1 are left
    /// unchanged.
    pub fn shuffle<T>(&self, items: &mut [T]) {
        let n = items.len();
        if n <= 1 {
            return;
        }
        let mut cursor = *self;
        for i in 0..n {
            let j = cursor.raw_value() as usize % n;
            items.swap(i, j);
            cursor = cursor.advance();
        }
    }

    /// Shuffles a slice in place, redrawing any swap target equal to the
    /// current index.
    ///
    /// Each redraw advances the seed chain before drawing again, so the
    /// redraw loop terminates. This guarantees no swap is a self-swap; it
    /// does NOT guarantee every element ends in a different position.
    /// Slices of length 0 or 1 are returned unchanged (a singleton can
    /// never satisfy `j != i`).
    pub fn shuffle_no_repetition<T>(&self, items: &mut [T]) {
        let n = items.len();
        if n <= 1 {
            return;
        }
        let mut cursor = *self;
        for i in 0..n {
            let mut j = cursor.raw_value() as usize % n;
            while j == i {
                cursor = cursor.advance();
                j = cursor.raw_value() as usize % n;
                trace!(index = i, "redrew self-swap candidate");
            }
            items.swap(i, j);
            cursor = cursor.advance();
        }
    }

    /// Builds a terminated character buffer of length `max(len, 1)`.
    ///
    /// The first `len - 1` slots hold characters in `[min, max]`,
    /// seed-chained per element; the final slot is the `'\0'` terminator.
    /// `len == 0` is defined as a buffer containing only the terminator.
    /// Rejects `max < min`.
    pub fn char_buffer(&self, len: usize, min: char, max: char) -> Result<Vec<char>> {
        if max < min {
            return Err(Error::EmptyCharRange { min, max });
        }
        let mut out = Vec::with_capacity(len.max(1));
        let mut cursor = *self;
        for _ in 0..len.saturating_sub(1) {
            let ordinal = bounded(cursor.raw_value(), u32::from(min), u32::from(max));
            let c =
                char::from_u32(ordinal).ok_or(Error::UnassignedCodePoint { value: ordinal })?;
            out.push(c);
            cursor = cursor.advance();
        }
        out.push('\0');
        Ok(out)
    }

    /// Builds the `len - 1` characters of [`char_buffer`](Self::char_buffer)
    /// as an owned string, terminator dropped.
    pub fn string_of_length(&self, len: usize, min: char, max: char) -> Result<String> {
        let mut buffer = self.char_buffer(len, min, max)?;
        buffer.pop();
        Ok(buffer.into_iter().collect())
    }

    /// Derives an integer in `[min1, max1]` and a float in `[min2, max2)`
    /// from the SAME raw value.
    ///
    /// The two components share one `raw_value` call with no advance
    /// between them, so they are correlated, not independent.
    pub fn pair(&self, min1: u32, max1: u32, min2: f32, max2: f32) -> Result<(u32, f32)> {
        Ok((
            self.int_in_range(min1, max1)?,
            self.float_in_range(min2, max2)?,
        ))
    }

    /// Returns an infinite iterator over the chained raw values starting
    /// at this generator.
    #[must_use]
    pub const fn stream(&self) -> RawStream {
        RawStream { cursor: *self }
    }
}

/// Infinite iterator over chained raw values.
///
/// Yields `raw_value(seed)`, then re-seeds from that value and repeats.
/// This is the explicit form of the seed chain the sequence builders use
/// internally.
#[derive(Debug, Clone)]
pub struct RawStream {
    cursor: Generator,
}

impl Iterator for RawStream {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let raw = self.cursor.raw_value();
        self.cursor = self.cursor.advance();
        Some(raw)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
