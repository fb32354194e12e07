use crate::config::ticket_book::{TicketBook, SUPPORTED_EXTENSIONS};
use crate::core::report::OutputFormat;
use crate::core::sorter::{SortPlan, TicketField};
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extension, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "avia-scanner")]
#[command(about = "Sort airline tickets with chained stable sorts")]
pub struct CliConfig {
    /// Ticket book to read (.toml or .json)
    #[arg(short, long)]
    pub input: String,

    /// Sort keys applied in order; the last one is the primary key
    #[arg(long, value_delimiter = ',')]
    pub sort_by: Vec<TicketField>,

    /// Output format, overrides the ticket book's [sort] format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    /// Command line keys and format win over the ones in the ticket book.
    pub fn resolve(&self, book: &TicketBook) -> Result<SortPlan> {
        let keys = if self.sort_by.is_empty() {
            book.sort_keys()?
        } else {
            self.sort_by.clone()
        };
        let format = self
            .format
            .or_else(|| book.output_format())
            .unwrap_or_default();

        Ok(SortPlan::new(keys, format))
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        validate_file_extension("input", &self.input, &SUPPORTED_EXTENSIONS)?;
        Ok(())
    }
}
