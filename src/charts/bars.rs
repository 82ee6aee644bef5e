//! Bar series preparation shared by the interactive and static charts.

use crate::data::SalesRecord;

/// One bar: a category with its summed `Sales%` and `Sales`.
#[derive(Debug, Clone, PartialEq)]
pub struct BarDatum {
    pub label: String,
    pub value: f64,
    pub sales: f64,
}

/// Which field the bars are grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarCategory {
    Salesperson,
    City,
}

impl BarCategory {
    pub fn axis_title(&self) -> &'static str {
        match self {
            BarCategory::Salesperson => "Salesperson",
            BarCategory::City => "City",
        }
    }

    pub fn chart_title(&self) -> &'static str {
        match self {
            BarCategory::Salesperson => "Sales Rate by Salesperson",
            BarCategory::City => "Sales Rate by City",
        }
    }

    /// Color scheme used for this chart's bars.
    pub fn scheme(&self) -> ColorScheme {
        match self {
            BarCategory::Salesperson => ColorScheme::Greens,
            BarCategory::City => ColorScheme::Blues,
        }
    }

    fn key<'a>(&self, record: &'a SalesRecord) -> Option<&'a str> {
        match self {
            BarCategory::Salesperson => Some(record.name.as_str()),
            BarCategory::City => record.city.as_deref(),
        }
    }
}

/// Build bars for one category, sorted by value descending.
///
/// Rows without a `Sales%` or without a category are skipped. Rows sharing a
/// category stack into one bar. Ties keep first-appearance order.
pub fn bar_series(records: &[SalesRecord], category: BarCategory) -> Vec<BarDatum> {
    let mut bars: Vec<BarDatum> = Vec::new();

    for record in records {
        let (Some(label), Some(rate)) = (category.key(record), record.sales_percent) else {
            continue;
        };
        let sales = record.sales.unwrap_or(0.0);

        match bars.iter_mut().find(|bar| bar.label == label) {
            Some(bar) => {
                bar.value += rate;
                bar.sales += sales;
            }
            None => bars.push(BarDatum {
                label: label.to_string(),
                value: rate,
                sales,
            }),
        }
    }

    // Stable sort keeps ties in insertion order
    bars.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(std::cmp::Ordering::Equal));
    bars
}

/// Sequential color schemes for bar fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    Greens,
    Blues,
}

impl ColorScheme {
    /// Interpolate the scheme at `t` in `[0, 1]` (clamped), light to dark.
    pub fn rgb(&self, t: f64) -> (u8, u8, u8) {
        let (light, dark): ((u8, u8, u8), (u8, u8, u8)) = match self {
            ColorScheme::Greens => ((199, 233, 192), (0, 109, 44)),
            ColorScheme::Blues => ((198, 219, 239), (8, 81, 156)),
        };
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;

        (
            mix(light.0, dark.0),
            mix(light.1, dark.1),
            mix(light.2, dark.2),
        )
    }

    /// Color for `value` relative to the range of `bars`.
    pub fn rgb_for(&self, value: f64, bars: &[BarDatum]) -> (u8, u8, u8) {
        let (min, max) = value_range(bars);
        let t = if max > min { (value - min) / (max - min) } else { 1.0 };
        self.rgb(t)
    }
}

/// Minimum and maximum bar values; `(0, 0)` for no bars.
pub fn value_range(bars: &[BarDatum]) -> (f64, f64) {
    if bars.is_empty() {
        return (0.0, 0.0);
    }
    bars.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), bar| {
        (lo.min(bar.value), hi.max(bar.value))
    })
}
