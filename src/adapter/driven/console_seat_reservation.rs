use crate::domain::model::AccountId;
use crate::domain::port::{GatewayError, Logger, SeatReservationService};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

/// コンソール座席予約
/// 実際の予約は行わず、予約内容をログに出力する
pub struct ConsoleSeatReservation {
    logger: Arc<dyn Logger>,
}

impl ConsoleSeatReservation {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self { logger }
    }
}

#[async_trait]
impl SeatReservationService for ConsoleSeatReservation {
    async fn reserve_seat(
        &self,
        account_id: AccountId,
        seat_count: u32,
    ) -> Result<(), GatewayError> {
        self.logger.info(
            "ConsoleSeatReservation",
            "🎬 Seats reserved",
            None,
            Some(HashMap::from([
                ("account_id".to_string(), account_id.to_string()),
                ("seats".to_string(), seat_count.to_string()),
            ])),
        );
        Ok(())
    }
}
