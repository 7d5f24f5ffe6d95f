pub mod driven;
pub mod driver;
pub mod ticket_config;

pub use ticket_config::TicketConfig;
