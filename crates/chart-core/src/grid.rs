// File: crates/chart-core/src/grid.rs
// Summary: Tick layout helpers: "nice" tick steps, positions and labels.

/// Round `span / target` up to 1, 2, 2.5 or 5 times a power of ten.
pub fn nice_step(span: f64, target: usize) -> f64 {
    let raw = span / target.max(1) as f64;
    if !(raw > 0.0) || !raw.is_finite() {
        return 1.0;
    }
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 2.5 {
        2.5
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Tick positions inside `[min, max]` on multiples of a nice step.
/// Returns an empty list for an empty or non-finite range, including
/// finite bounds whose span overflows.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max <= min || !(max - min).is_finite() {
        return Vec::new();
    }
    let step = nice_step(max - min, target);
    let first = (min / step - 1e-9).ceil() as i64;
    let last = (max / step + 1e-9).floor() as i64;
    (first..=last)
        .map(|k| {
            let v = k as f64 * step;
            // avoid "-0.0" labels
            if v == 0.0 { 0.0 } else { v }
        })
        .collect()
}

/// Number of decimals needed to print every multiple of `step` exactly.
pub fn tick_decimals(step: f64) -> usize {
    if !(step > 0.0) || !step.is_finite() {
        return 0;
    }
    let mut decimals = (-(step.log10() + 1e-9).floor()).max(0.0) as usize;
    let scaled = step * 10f64.powi(decimals as i32);
    if (scaled - scaled.round()).abs() > 1e-6 {
        decimals += 1;
    }
    decimals
}

pub fn format_tick(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

/// Ticks and their formatted labels for an axis range.
pub fn tick_labels(min: f64, max: f64, target: usize) -> Vec<(f64, String)> {
    let ticks = nice_ticks(min, max, target);
    let decimals = tick_decimals(nice_step(max - min, target));
    ticks
        .into_iter()
        .map(|v| (v, format_tick(v, decimals)))
        .collect()
}
