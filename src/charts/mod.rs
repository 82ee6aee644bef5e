//! Charts module - Bar series, interactive plots and static export

mod bars;
mod plotter;
mod renderer;

pub use bars::{bar_series, BarCategory, BarDatum};
pub use plotter::ChartPlotter;
pub use renderer::StaticChartRenderer;
