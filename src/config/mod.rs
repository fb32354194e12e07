#[cfg(feature = "cli")]
pub mod cli;
pub mod ticket_book;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use ticket_book::TicketBook;
