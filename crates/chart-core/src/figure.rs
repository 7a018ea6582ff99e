// File: crates/chart-core/src/figure.rs
// Summary: Scoped raster surface sized from figure inches and dpi.

use skia_safe as skia;
use tracing::debug;

use crate::error::ChartError;
use crate::types::{FigureSize, BASE_DPI};

/// One open drawing surface. The canvas is pre-scaled so callers lay out in
/// logical units (1/100 inch); the surface is released when the figure drops.
pub struct Figure {
    surface: skia::Surface,
    width_px: i32,
    height_px: i32,
}

impl Figure {
    pub fn open(size: FigureSize, dpi: f32) -> Result<Self, ChartError> {
        if !dpi.is_finite() || dpi <= 0.0 {
            return Err(ChartError::InvalidDpi(dpi));
        }
        let (width, height) = size.pixels(dpi);
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidFigureSize { width, height });
        }
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(ChartError::Surface { width, height })?;
        let k = dpi / BASE_DPI;
        surface.canvas().scale((k, k));
        debug!(width, height, dpi, "figure opened");
        Ok(Self { surface, width_px: width, height_px: height })
    }

    pub fn canvas(&mut self) -> &skia::Canvas {
        self.surface.canvas()
    }

    pub fn pixel_size(&self) -> (i32, i32) {
        (self.width_px, self.height_px)
    }

    /// Snapshot the surface and encode it as PNG.
    pub fn encode_png(&mut self) -> Result<Vec<u8>, ChartError> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }
}

impl Drop for Figure {
    fn drop(&mut self) {
        debug!(width = self.width_px, height = self.height_px, "figure closed");
    }
}
