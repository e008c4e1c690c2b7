//! Chart-ready series derived from the per-category breakdown.
//!
//! Both series keep the backend's category order; nothing here sorts.

use serde::{Deserialize, Serialize};

use crate::{CategoryTotal, Summary};

/// Fill colours for pie slices, cycled by index.
pub const PALETTE: [&str; 7] = [
    "#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#A78BFA", "#FB7185", "#60A5FA",
];

/// Fill colour for every bar.
pub const BAR_COLOR: &str = "#0ea5a4";

/// One slice of the proportion (pie) series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub name: String,
    pub value: f64,
}

/// One bar of the magnitude (bar) series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarPoint {
    pub category: String,
    pub total: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub proportions: Vec<PieSlice>,
    pub magnitudes: Vec<BarPoint>,
}

impl ChartSeries {
    pub fn from_categories(by_category: &[CategoryTotal]) -> Self {
        Self {
            proportions: by_category
                .iter()
                .map(|c| PieSlice {
                    name: c.category.clone(),
                    value: c.total,
                })
                .collect(),
            magnitudes: by_category
                .iter()
                .map(|c| BarPoint {
                    category: c.category.clone(),
                    total: c.total,
                })
                .collect(),
        }
    }

    pub fn from_summary(summary: &Summary) -> Self {
        Self::from_categories(&summary.by_category)
    }

    pub fn is_empty(&self) -> bool {
        self.proportions.is_empty()
    }

    /// Largest bar total, never below zero.
    pub fn max_total(&self) -> f64 {
        self.magnitudes
            .iter()
            .map(|point| point.total)
            .fold(0.0, f64::max)
    }
}

/// Palette colour for the slice at `index`, wrapping around.
pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Parses `#RRGGBB` into its components.
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
