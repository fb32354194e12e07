use crate::core::report::OutputFormat;
use crate::core::sorter::TicketField;
use crate::domain::model::AirlineTicket;
use crate::utils::error::Result;

pub trait TicketSource {
    fn load(&self) -> Result<Vec<AirlineTicket>>;
}

pub trait SortPlanProvider {
    /// Keys in the order the stable sorts are applied; the last one ends up primary.
    fn sort_keys(&self) -> &[TicketField];
    fn output_format(&self) -> OutputFormat;
}
