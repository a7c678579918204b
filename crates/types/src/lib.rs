//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (raster storage, terminal preview, tests).
//!
//! # Default Dimensions
//!
//! A raster created without explicit dimensions is 3x3:
//!
//! - **Height**: 3 rows (indexed 0-2)
//! - **Width**: 3 columns (indexed 0-2)
//!
//! # Pixels
//!
//! A [`Pixel`] holds three signed integer channels. Channel values are not
//! clamped: increments wrap on `i32` overflow and renderers decide how to map
//! out-of-range values.
//!
//! # Examples
//!
//! ```
//! use raster_buffer_types::{Channel, Pixel, DEFAULT_HEIGHT, DEFAULT_WIDTH};
//!
//! let mut px = Pixel::new(10, 20, 30);
//!
//! // Parse a channel selector (case-insensitive)
//! let channel = Channel::from_char('R').unwrap();
//! assert_eq!(channel, Channel::Red);
//!
//! px.increment(channel, 5);
//! assert_eq!(px, Pixel::new(15, 20, 30));
//! assert_eq!(px.to_string(), "(15,20,30)");
//!
//! assert_eq!(DEFAULT_HEIGHT, 3);
//! assert_eq!(DEFAULT_WIDTH, 3);
//! ```

use std::fmt;

/// Height of a default-constructed raster (3 rows)
pub const DEFAULT_HEIGHT: usize = 3;

/// Width of a default-constructed raster (3 columns)
pub const DEFAULT_WIDTH: usize = 3;

/// One of the three color components of a pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels in RGB order
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Parse a single-letter channel selector (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use raster_buffer_types::Channel;
    ///
    /// assert_eq!(Channel::from_char('r'), Some(Channel::Red));
    /// assert_eq!(Channel::from_char('G'), Some(Channel::Green));
    /// assert_eq!(Channel::from_char('x'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'r' => Some(Channel::Red),
            'g' => Some(Channel::Green),
            'b' => Some(Channel::Blue),
            _ => None,
        }
    }

    /// Parse channel from string (case-insensitive), accepting the letter or the full name
    ///
    /// # Examples
    ///
    /// ```
    /// use raster_buffer_types::Channel;
    ///
    /// assert_eq!(Channel::from_str("blue"), Some(Channel::Blue));
    /// assert_eq!(Channel::from_str("R"), Some(Channel::Red));
    /// assert_eq!(Channel::from_str("alpha"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "r" | "red" => Some(Channel::Red),
            "g" | "green" => Some(Channel::Green),
            "b" | "blue" => Some(Channel::Blue),
            _ => None,
        }
    }

    /// Convert to lowercase selector letter
    pub fn as_char(&self) -> char {
        match self {
            Channel::Red => 'r',
            Channel::Green => 'g',
            Channel::Blue => 'b',
        }
    }
}

/// RGB pixel with signed integer channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl Pixel {
    /// The zero-valued pixel, same as `Pixel::default()`
    pub const BLACK: Pixel = Pixel::new(0, 0, 0);

    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    /// Read a single channel
    pub fn channel(&self, channel: Channel) -> i32 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    /// Add `delta` to one channel (wrapping on overflow)
    pub fn increment(&mut self, channel: Channel, delta: i32) {
        let slot = match channel {
            Channel::Red => &mut self.r,
            Channel::Green => &mut self.g,
            Channel::Blue => &mut self.b,
        };
        *slot = slot.wrapping_add(delta);
    }

    pub fn increment_red(&mut self, delta: i32) {
        self.increment(Channel::Red, delta);
    }

    pub fn increment_green(&mut self, delta: i32) {
        self.increment(Channel::Green, delta);
    }

    pub fn increment_blue(&mut self, delta: i32) {
        self.increment(Channel::Blue, delta);
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pixel_is_black() {
        assert_eq!(Pixel::default(), Pixel::BLACK);
        assert_eq!(Pixel::default(), Pixel::new(0, 0, 0));
    }

    #[test]
    fn channel_selectors_are_case_insensitive() {
        for channel in Channel::ALL {
            let lower = channel.as_char();
            assert_eq!(Channel::from_char(lower), Some(channel));
            assert_eq!(Channel::from_char(lower.to_ascii_uppercase()), Some(channel));
        }
        assert_eq!(Channel::from_char('a'), None);
        assert_eq!(Channel::from_str("GREEN"), Some(Channel::Green));
        assert_eq!(Channel::from_str(""), None);
    }

    #[test]
    fn increment_touches_only_the_selected_channel() {
        let mut px = Pixel::new(1, 2, 3);
        px.increment_green(-5);
        assert_eq!(px, Pixel::new(1, -3, 3));
        px.increment_blue(7);
        assert_eq!(px.channel(Channel::Blue), 10);
        px.increment_red(0);
        assert_eq!(px, Pixel::new(1, -3, 10));
    }

    #[test]
    fn increment_wraps_instead_of_panicking() {
        let mut px = Pixel::new(i32::MAX, 0, 0);
        px.increment(Channel::Red, 1);
        assert_eq!(px.r, i32::MIN);
    }

    #[test]
    fn display_is_compact_tuple() {
        assert_eq!(Pixel::new(-1, 0, 255).to_string(), "(-1,0,255)");
    }
}
