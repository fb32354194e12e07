pub mod comparator;
pub mod report;
pub mod scanner;
pub mod sorter;

pub use crate::domain::model::{AirlineTicket, Date, Time};
pub use crate::domain::ports::{SortPlanProvider, TicketSource};
pub use crate::utils::error::Result;
