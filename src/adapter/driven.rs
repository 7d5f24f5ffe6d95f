// 駆動される側アダプター（外部サービスとロガーの実装）

mod console_logger;
mod console_payment_gateway;
mod console_seat_reservation;

pub use console_logger::{ConsoleLogger, LogEntry};
pub use console_payment_gateway::ConsolePaymentGateway;
pub use console_seat_reservation::ConsoleSeatReservation;
