pub mod reporter;
pub mod session;
pub mod tooltip;

pub use reporter::BrowserReporter;
pub use session::{ChartSession, Settled};
pub use tooltip::TooltipState;
