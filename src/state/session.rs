//! Selection/render lifecycle.
//!
//! Two states: nothing rendered, or one chart rendered. Every selection tears
//! the current chart down and issues a ticket; only the ticket from the most
//! recent selection may install a result.

use std::rc::Rc;

use super::reporter::Reporter;
use crate::config::{ChartConfig, DatasetDescriptor, DatasetTable};
use crate::error::Result;
use crate::model::RawNode;
use crate::view::{ChartView, build_chart};

#[derive(Clone, Debug, PartialEq)]
pub struct FetchTicket {
    pub generation: u64,
    pub descriptor: DatasetDescriptor,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum ChartState {
    #[default]
    Idle,
    Rendered(Rc<ChartView>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settled {
    Rendered { tiles: usize },
    Failed,
    /// A newer selection was made while this one was in flight.
    Stale,
}

#[derive(Debug, Default)]
pub struct ChartSession {
    generation: u64,
    selected: Option<DatasetDescriptor>,
    state: ChartState,
}

impl ChartSession {
    pub fn begin(&mut self, key: &str, table: &DatasetTable) -> FetchTicket {
        self.generation += 1;
        let descriptor = table.select(key).clone();
        self.selected = Some(descriptor.clone());
        self.state = ChartState::Idle;
        FetchTicket {
            generation: self.generation,
            descriptor,
        }
    }

    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Applies a finished fetch. Failures are logged and surfaced through
    /// `reporter`; stale results are dropped without reporting.
    pub fn settle(
        &mut self,
        ticket: &FetchTicket,
        outcome: Result<RawNode>,
        cfg: &ChartConfig,
        reporter: &dyn Reporter,
    ) -> Settled {
        if !self.is_current(ticket) {
            reporter.log(&format!(
                "dropping stale result for \"{}\" (generation {} < {})",
                ticket.descriptor.key, ticket.generation, self.generation
            ));
            return Settled::Stale;
        }
        match outcome.and_then(|raw| build_chart(&ticket.descriptor, &raw, cfg)) {
            Ok(view) => {
                for w in &view.warnings {
                    reporter.warn(w);
                }
                let tiles = view.tiles.len();
                self.state = ChartState::Rendered(Rc::new(view));
                Settled::Rendered { tiles }
            }
            Err(err) => {
                let msg = err.to_string();
                reporter.log_error(&msg);
                reporter.notify(&msg);
                self.state = ChartState::Idle;
                Settled::Failed
            }
        }
    }

    pub fn selected(&self) -> Option<&DatasetDescriptor> {
        self.selected.as_ref()
    }

    pub fn view(&self) -> Option<Rc<ChartView>> {
        match &self.state {
            ChartState::Idle => None,
            ChartState::Rendered(v) => Some(v.clone()),
        }
    }
}
