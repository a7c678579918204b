//! Raster demo runner (default binary).
//!
//! Walks a raster through create, write, increment, resize and copy, printing
//! the text form after each step on stdout. Step notes go to stderr.
//! Set `RASTER_PREVIEW=1` to also print a color preview rendered with crossterm.

use anyhow::{Context, Result};

use raster_buffer::config::DemoConfig;
use raster_buffer::core::RasterBuffer;
use raster_buffer::term::{RasterView, TerminalRenderer};
use raster_buffer::types::Pixel;

struct Demo {
    config: DemoConfig,
    view: RasterView,
    term: TerminalRenderer,
}

impl Demo {
    fn new(config: DemoConfig) -> Self {
        Self {
            config,
            view: RasterView::default(),
            term: TerminalRenderer::new(),
        }
    }

    fn step(&mut self, label: &str, raster: &RasterBuffer) -> Result<()> {
        if !self.config.quiet {
            eprintln!(
                "[raster] {}: {} is {}x{}",
                label,
                raster.name(),
                raster.height(),
                raster.width()
            );
        }
        print!("{raster}");
        if self.config.preview {
            let fb = self.view.render(raster);
            self.term.print(&fb)?;
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    let config = DemoConfig::from_env();
    let mut raster = RasterBuffer::try_new(config.name.clone(), config.height, config.width)
        .context("failed to allocate raster")?;

    let mut demo = Demo::new(config);
    demo.step("created", &raster)?;

    if !raster.set_pixel(0, 0, Pixel::new(10, 20, 30)) {
        eprintln!("[raster] set (0, 0) skipped: out of bounds");
    }
    raster.increment_channel(0, 0, 5, 'r');
    demo.step("wrote (0, 0) and bumped red", &raster)?;

    let (h, w) = (
        raster.height().saturating_add(1),
        raster.width().saturating_add(1),
    );
    raster.try_resize(h, w).context("failed to grow raster")?;
    demo.step("grew by one row and column", &raster)?;

    let mut copy = raster.clone();
    copy.double_width();
    copy.set_name(format!("{}-wide", raster.name()));
    demo.step("doubled width of a copy", &copy)?;

    if !demo.config.quiet {
        eprintln!(
            "[raster] {} (0, 0) is still {}, copy equals original: {}",
            raster.name(),
            raster.get_pixel(0, 0),
            copy == raster
        );
    }

    Ok(())
}
