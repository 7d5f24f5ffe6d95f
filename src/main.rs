use cinema_ticket_service::adapter::driven::{
    ConsoleLogger, ConsolePaymentGateway, ConsoleSeatReservation,
};
use cinema_ticket_service::adapter::driver::CommandLineDriver;
use cinema_ticket_service::adapter::TicketConfig;
use cinema_ticket_service::application::service::TicketApplicationService;
use cinema_ticket_service::domain::port::Logger;

use std::io::Read;
use std::process::ExitCode;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // .envファイルから環境変数を読み込む
    dotenvy::dotenv().ok();

    let config = TicketConfig::from_env()?;
    let logger: Arc<dyn Logger> = Arc::new(ConsoleLogger::with_min_level(config.log_level));
    logger.debug(
        "main",
        &format!(
            "Configuration loaded: max_tickets={}, adult_price={}, child_price={}",
            config.max_tickets, config.adult_price, config.child_price
        ),
        None,
        None,
    );

    // 外部サービスのアダプターを作成
    let payment_gateway = ConsolePaymentGateway::new(logger.clone());
    let seat_reservation = ConsoleSeatReservation::new(logger.clone());

    let ticket_service = TicketApplicationService::new(
        payment_gateway,
        seat_reservation,
        config.policy(),
        logger.clone(),
    );
    let driver = CommandLineDriver::new(ticket_service);

    // 第1引数があればそれを、なければ標準入力をリクエストとして読む
    let input = match std::env::args().nth(1) {
        Some(arg) => arg,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    match driver.handle(&input).await {
        Ok(response) => {
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            eprintln!("{}", serde_json::to_string_pretty(&error)?);
            Ok(ExitCode::FAILURE)
        }
    }
}
