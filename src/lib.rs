pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::TicketBook;
pub use crate::core::{
    report::OutputFormat,
    scanner::ScannerEngine,
    sorter::{SortPlan, TicketField, TicketSorter},
};
pub use domain::model::{AirlineTicket, Date, Time};
pub use utils::error::{AviaError, Result};
