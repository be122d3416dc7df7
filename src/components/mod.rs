pub mod app;
pub mod chart_header;
pub mod controls_panel;
pub mod legend;
pub mod legend_panel;
pub mod tooltip;
pub mod treemap_view;

pub use app::{App, AppProps};
