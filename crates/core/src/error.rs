use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RasterError {
    /// Storage for `height * width` pixels exceeds `isize::MAX` bytes.
    CapacityOverflow { height: usize, width: usize },
}

impl RasterError {
    pub fn code(self) -> &'static str {
        match self {
            RasterError::CapacityOverflow { .. } => "capacity_overflow",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            RasterError::CapacityOverflow { .. } => "pixel count exceeds addressable memory",
        }
    }
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            RasterError::CapacityOverflow { height, width } => write!(
                f,
                "raster of {height}x{width} cannot hold its pixels: {}",
                self.message()
            ),
        }
    }
}

impl std::error::Error for RasterError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_dimensions() {
        let err = RasterError::CapacityOverflow {
            height: 7,
            width: 11,
        };
        assert_eq!(err.code(), "capacity_overflow");
        assert!(err.to_string().starts_with("raster of 7x11 cannot hold"));
    }
}
