use crate::core::report::render_tickets;
use crate::core::sorter::TicketSorter;
use crate::core::{SortPlanProvider, TicketSource};
use crate::utils::error::Result;

pub struct ScannerEngine<S: TicketSource, P: SortPlanProvider> {
    source: S,
    plan: P,
}

impl<S: TicketSource, P: SortPlanProvider> ScannerEngine<S, P> {
    pub fn new(source: S, plan: P) -> Self {
        Self { source, plan }
    }

    /// Loads, sorts and renders the tickets.
    pub fn run(&self) -> Result<String> {
        tracing::info!("Loading tickets...");
        let mut tickets = self.source.load()?;
        tracing::info!("Loaded {} tickets", tickets.len());

        let sorter = TicketSorter::new(self.plan.sort_keys().to_vec());
        if sorter.keys().is_empty() {
            tracing::warn!("No sort keys given, keeping input order");
        } else {
            let keys: Vec<&str> = sorter.keys().iter().map(|k| k.name()).collect();
            tracing::info!("Sorting by {}", keys.join(" -> "));
        }
        sorter.sort(&mut tickets);

        let format = self.plan.output_format();
        tracing::debug!("Rendering {} tickets as {:?}", tickets.len(), format);
        render_tickets(&tickets, format)
    }
}
