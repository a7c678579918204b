//! Demo runner configuration, read from environment variables.
//!
//! - `RASTER_NAME`: raster label (default "img")
//! - `RASTER_HEIGHT` / `RASTER_WIDTH`: starting dimensions (default 2x2)
//! - `RASTER_PREVIEW`: "1" or "true" to print the color preview after each step
//! - `RASTER_QUIET`: "1" or "true" to silence the step log on stderr

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub name: String,
    pub height: usize,
    pub width: usize,
    pub preview: bool,
    pub quiet: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            name: "img".to_string(),
            height: 2,
            width: 2,
            preview: false,
            quiet: false,
        }
    }
}

impl DemoConfig {
    /// Create from process environment variables
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup; missing or unparsable values fall back to defaults.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let name = lookup("RASTER_NAME")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.name);

        let height = lookup("RASTER_HEIGHT")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.height);

        let width = lookup("RASTER_WIDTH")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.width);

        Self {
            name,
            height,
            width,
            preview: lookup("RASTER_PREVIEW").map(is_truthy).unwrap_or(defaults.preview),
            quiet: lookup("RASTER_QUIET").map(is_truthy).unwrap_or(defaults.quiet),
        }
    }
}

fn is_truthy(v: String) -> bool {
    let v = v.trim();
    v == "1" || v.eq_ignore_ascii_case("true")
}
