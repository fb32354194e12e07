use crate::core::comparator::stable_sort;
use crate::core::report::OutputFormat;
use crate::core::SortPlanProvider;
use crate::domain::model::AirlineTicket;
use crate::utils::error::AviaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type TicketComparator = Box<dyn Fn(&AirlineTicket, &AirlineTicket) -> bool + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketField {
    From,
    To,
    Airline,
    DepartureDate,
    DepartureTime,
    ArrivalDate,
    ArrivalTime,
    Price,
}

impl TicketField {
    pub const ALL: [TicketField; 8] = [
        TicketField::From,
        TicketField::To,
        TicketField::Airline,
        TicketField::DepartureDate,
        TicketField::DepartureTime,
        TicketField::ArrivalDate,
        TicketField::ArrivalTime,
        TicketField::Price,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TicketField::From => "from",
            TicketField::To => "to",
            TicketField::Airline => "airline",
            TicketField::DepartureDate => "departure_date",
            TicketField::DepartureTime => "departure_time",
            TicketField::ArrivalDate => "arrival_date",
            TicketField::ArrivalTime => "arrival_time",
            TicketField::Price => "price",
        }
    }

    pub fn comparator(self) -> TicketComparator {
        match self {
            TicketField::From => Box::new(crate::sort_by!(from)),
            TicketField::To => Box::new(crate::sort_by!(to)),
            TicketField::Airline => Box::new(crate::sort_by!(airline)),
            TicketField::DepartureDate => Box::new(crate::sort_by!(departure_date)),
            TicketField::DepartureTime => Box::new(crate::sort_by!(departure_time)),
            TicketField::ArrivalDate => Box::new(crate::sort_by!(arrival_date)),
            TicketField::ArrivalTime => Box::new(crate::sort_by!(arrival_time)),
            TicketField::Price => Box::new(crate::sort_by!(price)),
        }
    }
}

impl fmt::Display for TicketField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TicketField {
    type Err = AviaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        TicketField::ALL
            .into_iter()
            .find(|field| field.name() == normalized)
            .ok_or_else(|| AviaError::UnknownFieldError {
                name: s.to_string(),
            })
    }
}

/// Applies one stable sort per key, in order. The last key becomes the
/// primary key of the result and earlier keys break its ties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketSorter {
    keys: Vec<TicketField>,
}

impl TicketSorter {
    pub fn new(keys: Vec<TicketField>) -> Self {
        Self { keys }
    }

    pub fn keys(&self) -> &[TicketField] {
        &self.keys
    }

    pub fn sort(&self, tickets: &mut [AirlineTicket]) {
        for key in &self.keys {
            tracing::debug!("Sorting {} tickets by {}", tickets.len(), key);
            stable_sort(tickets, key.comparator());
        }
    }
}

/// A resolved sort plan: keys plus output format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortPlan {
    pub keys: Vec<TicketField>,
    pub format: OutputFormat,
}

impl SortPlan {
    pub fn new(keys: Vec<TicketField>, format: OutputFormat) -> Self {
        Self { keys, format }
    }
}

impl SortPlanProvider for SortPlan {
    fn sort_keys(&self) -> &[TicketField] {
        &self.keys
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }
}
