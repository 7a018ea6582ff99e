// File: crates/chart-core/src/theme.rs
// Summary: Light "paper" theme used for publication-style figures.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub background: skia::Color,
    pub plot_background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub legend_frame: skia::Color,
    pub legend_background: skia::Color,
    /// Categorical colors assigned to series without an explicit color.
    pub cycle: [skia::Color; 10],
}

impl Theme {
    pub fn paper() -> Self {
        Self {
            background: skia::Color::WHITE,
            plot_background: skia::Color::WHITE,
            grid: skia::Color::from_argb(255, 0xb0, 0xb0, 0xb0),
            axis_line: skia::Color::BLACK,
            axis_label: skia::Color::BLACK,
            tick: skia::Color::BLACK,
            legend_frame: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            legend_background: skia::Color::from_argb(204, 255, 255, 255),
            cycle: [
                skia::Color::from_rgb(0x1f, 0x77, 0xb4), // blue
                skia::Color::from_rgb(0xff, 0x7f, 0x0e), // orange
                skia::Color::from_rgb(0x2c, 0xa0, 0x2c), // green
                skia::Color::from_rgb(0xd6, 0x27, 0x28), // red
                skia::Color::from_rgb(0x94, 0x67, 0xbd), // purple
                skia::Color::from_rgb(0x8c, 0x56, 0x4b), // brown
                skia::Color::from_rgb(0xe3, 0x77, 0xc2), // pink
                skia::Color::from_rgb(0x7f, 0x7f, 0x7f), // gray
                skia::Color::from_rgb(0xbc, 0xbd, 0x22), // olive
                skia::Color::from_rgb(0x17, 0xbe, 0xcf), // cyan
            ],
        }
    }

    /// Color for the `index`-th series, wrapping around the cycle.
    pub fn cycle_color(&self, index: usize) -> skia::Color {
        self.cycle[index % self.cycle.len()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::paper()
    }
}
