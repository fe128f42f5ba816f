// Renderer module - colour and label helpers
// Layout lives in layout.rs; this module maps pipeline values to styles

use {
    crate::{rows::AmountSign, rows::StatusGlyph, series::ChartPoint, stats::CardTone},
    ratatui::style::Color,
};

/// Scale factor from SOL to bar height units (4 decimal places)
const BAR_SCALE: f64 = 10_000.0;

pub fn amount_color(sign: AmountSign) -> Color {
    match sign {
        AmountSign::Positive => Color::Green,
        AmountSign::Negative => Color::Red,
        AmountSign::Neutral => Color::Gray,
    }
}

pub fn status_color(glyph: StatusGlyph) -> Color {
    match glyph {
        StatusGlyph::Check => Color::Green,
        StatusGlyph::Cross => Color::Red,
    }
}

pub fn tone_color(tone: CardTone) -> Color {
    match tone {
        CardTone::Positive => Color::Green,
        CardTone::Negative => Color::Red,
        CardTone::Fees => Color::Magenta,
        CardTone::Neutral => Color::Blue,
    }
}

pub fn bar_color(point: &ChartPoint) -> Color {
    if point.is_inflow() {
        Color::Green
    } else {
        Color::Red
    }
}

/// Bar height for a chart point; bars show magnitude, colour shows sign
pub fn bar_height(point: &ChartPoint) -> u64 {
    (point.value.abs() * BAR_SCALE).round() as u64
}

/// Fit a chart label under a bar, keeping the most specific (trailing) part
pub fn bar_label(label: &str, width: usize) -> String {
    let label = label.trim_end_matches(" UTC");
    let count = label.chars().count();
    if count <= width {
        label.to_string()
    } else {
        label.chars().skip(count - width).collect()
    }
}
