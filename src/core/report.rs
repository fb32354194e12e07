use crate::domain::model::AirlineTicket;
use crate::utils::error::{AviaError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

pub const COLUMNS: [&str; 8] = [
    "from",
    "to",
    "airline",
    "departure_date",
    "departure_time",
    "arrival_date",
    "arrival_time",
    "price",
];

/// Flat view of a ticket with dates and times already rendered.
#[derive(Debug, Serialize)]
struct TicketRow<'a> {
    from: &'a str,
    to: &'a str,
    airline: &'a str,
    departure_date: String,
    departure_time: String,
    arrival_date: String,
    arrival_time: String,
    price: i32,
}

impl<'a> From<&'a AirlineTicket> for TicketRow<'a> {
    fn from(ticket: &'a AirlineTicket) -> Self {
        Self {
            from: &ticket.from,
            to: &ticket.to,
            airline: &ticket.airline,
            departure_date: ticket.departure_date.render(),
            departure_time: ticket.departure_time.render(),
            arrival_date: ticket.arrival_date.render(),
            arrival_time: ticket.arrival_time.render(),
            price: ticket.price,
        }
    }
}

pub fn render_tickets(tickets: &[AirlineTicket], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(tickets)),
        OutputFormat::Csv => render_csv(tickets),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(tickets)?),
    }
}

fn render_table(tickets: &[AirlineTicket]) -> String {
    let mut output = String::new();
    for ticket in tickets {
        output.push_str(&format!(
            "{}  {}  {}  {}  {}  {}  {}  {}\n",
            ticket.from,
            ticket.to,
            ticket.airline,
            ticket.departure_date,
            ticket.departure_time,
            ticket.arrival_date,
            ticket.arrival_time,
            ticket.price
        ));
    }
    output
}

fn render_csv(tickets: &[AirlineTicket]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    if tickets.is_empty() {
        writer.write_record(COLUMNS)?;
    }
    for ticket in tickets {
        writer.serialize(TicketRow::from(ticket))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AviaError::RenderError {
            message: format!("Failed to flush CSV output: {}", e),
        })?;

    String::from_utf8(bytes).map_err(|e| AviaError::RenderError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}
