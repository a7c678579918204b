//! Raster module - owns a named height x width grid of pixels
//!
//! Uses a single flat vector in row-major order (y * width + x) so the whole
//! grid is one allocation with one lifetime.
//! Coordinates: (x, y) where x is the column (0..width) and y is the row
//! (0..height), origin at the top-left.

use std::fmt;

use crate::error::RasterError;
use crate::types::{Channel, Pixel, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// A named, resizable grid of pixels
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RasterBuffer {
    name: String,
    height: usize,
    width: usize,
    /// Flat array of pixels, row-major order (y * width + x)
    cells: Vec<Pixel>,
}

impl RasterBuffer {
    /// Create a raster of default pixels.
    ///
    /// Zero dimensions are allowed and produce an empty grid.
    ///
    /// # Panics
    ///
    /// Panics if the storage for `height * width` pixels exceeds `isize::MAX`
    /// bytes, the same way a failed allocation aborts. Use [`RasterBuffer::try_new`] to handle that case.
    pub fn new(name: impl Into<String>, height: usize, width: usize) -> Self {
        match Self::try_new(name, height, width) {
            Ok(raster) => raster,
            Err(err) => panic!("{err}"),
        }
    }

    /// Create a raster of default pixels, reporting unrepresentable dimensions
    pub fn try_new(
        name: impl Into<String>,
        height: usize,
        width: usize,
    ) -> Result<Self, RasterError> {
        let len = Self::cell_count(height, width)?;
        Ok(Self {
            name: name.into(),
            height,
            width,
            cells: vec![Pixel::default(); len],
        })
    }

    /// Number of cells for `height` x `width`, rejecting grids whose storage
    /// would exceed `isize::MAX` bytes (the most a `Vec` can hold).
    fn cell_count(height: usize, width: usize) -> Result<usize, RasterError> {
        let overflow = RasterError::CapacityOverflow { height, width };
        let len = height.checked_mul(width).ok_or(overflow)?;
        let bytes = len
            .checked_mul(std::mem::size_of::<Pixel>())
            .ok_or(overflow)?;
        if bytes > isize::MAX as usize {
            return Err(overflow);
        }
        Ok(len)
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Check whether the raster is labelled `name`
    pub fn matches_name(&self, name: &str) -> bool {
        self.name == name
    }

    /// Check if position is inside the grid
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        self.index(x, y).is_some()
    }

    /// Get pixel at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<Pixel> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Get pixel at position (x, y)
    /// Returns the default pixel if out of bounds
    pub fn get_pixel(&self, x: usize, y: usize) -> Pixel {
        self.get(x, y).unwrap_or_default()
    }

    /// Set pixel at position (x, y)
    /// Returns false if out of bounds
    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: Pixel) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = pixel;
                true
            }
            None => false,
        }
    }

    /// Add `delta` to one channel of the pixel at (x, y)
    /// Returns false if out of bounds
    pub fn increment(&mut self, x: usize, y: usize, delta: i32, channel: Channel) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx].increment(channel, delta);
                true
            }
            None => false,
        }
    }

    /// Add `delta` to the channel named by `selector` ('r', 'g' or 'b', any case).
    ///
    /// An unknown selector or an out-of-bounds position leaves the raster
    /// untouched and returns false.
    pub fn increment_channel(&mut self, x: usize, y: usize, delta: i32, selector: char) -> bool {
        match Channel::from_char(selector) {
            Some(channel) => self.increment(x, y, delta, channel),
            None => false,
        }
    }

    /// Reallocate the grid to `new_height` x `new_width`.
    ///
    /// The overlapping top-left region keeps its pixels, newly exposed cells
    /// are default, and anything outside the new bounds is dropped.
    ///
    /// # Panics
    ///
    /// Panics if the storage for `new_height * new_width` pixels exceeds
    /// `isize::MAX` bytes.
    pub fn resize(&mut self, new_height: usize, new_width: usize) {
        if let Err(err) = self.try_resize(new_height, new_width) {
            panic!("{err}");
        }
    }

    /// Reallocate the grid, leaving the raster unchanged if the new size is unrepresentable
    pub fn try_resize(&mut self, new_height: usize, new_width: usize) -> Result<(), RasterError> {
        let len = Self::cell_count(new_height, new_width)?;
        let mut resized = vec![Pixel::default(); len];

        let copy_rows = self.height.min(new_height);
        let copy_cols = self.width.min(new_width);
        for y in 0..copy_rows {
            let src_start = y * self.width;
            let dst_start = y * new_width;
            resized[dst_start..dst_start + copy_cols]
                .copy_from_slice(&self.cells[src_start..src_start + copy_cols]);
        }

        self.cells = resized;
        self.height = new_height;
        self.width = new_width;
        debug_assert_eq!(self.cells.len(), self.height * self.width);
        Ok(())
    }

    /// Resize to twice the current height, keeping the width
    pub fn double_height(&mut self) {
        match self.height.checked_mul(2) {
            Some(height) => self.resize(height, self.width),
            None => overflow_panic(usize::MAX, self.width),
        }
    }

    /// Resize to twice the current width, keeping the height
    pub fn double_width(&mut self) {
        match self.width.checked_mul(2) {
            Some(width) => self.resize(self.height, width),
            None => overflow_panic(self.height, usize::MAX),
        }
    }

    /// Get a reference to the internal pixel array (row-major)
    pub fn pixels(&self) -> &[Pixel] {
        &self.cells
    }

    /// Borrow row `y`, or None if out of bounds
    pub fn row(&self, y: usize) -> Option<&[Pixel]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Iterate rows top to bottom.
    ///
    /// Yields exactly `height` rows, even when the width is zero.
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> + '_ {
        (0..self.height).map(move |y| {
            let start = y * self.width;
            &self.cells[start..start + self.width]
        })
    }

    /// Reset every pixel to the default value, keeping the dimensions
    pub fn clear(&mut self) {
        self.cells.fill(Pixel::default());
    }
}

/// A doubled dimension that overflows `usize` is reported saturated at `usize::MAX`.
fn overflow_panic(height: usize, width: usize) -> ! {
    panic!("{}", RasterError::CapacityOverflow { height, width })
}

impl Default for RasterBuffer {
    fn default() -> Self {
        Self::new("", DEFAULT_HEIGHT, DEFAULT_WIDTH)
    }
}

impl fmt::Display for RasterBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.name)?;
        for row in self.rows() {
            for (x, pixel) in row.iter().enumerate() {
                if x > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{pixel}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
