use crate::domain::model::{AccountId, Money};
use crate::domain::port::{GatewayError, Logger, TicketPaymentService};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

/// コンソール決済ゲートウェイ
/// 実際の決済は行わず、請求内容をログに出力する
pub struct ConsolePaymentGateway {
    logger: Arc<dyn Logger>,
}

impl ConsolePaymentGateway {
    /// 新しいコンソール決済ゲートウェイを作成
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self { logger }
    }
}

#[async_trait]
impl TicketPaymentService for ConsolePaymentGateway {
    async fn make_payment(&self, account_id: AccountId, amount: Money) -> Result<(), GatewayError> {
        self.logger.info(
            "ConsolePaymentGateway",
            "💳 Payment charged",
            None,
            Some(HashMap::from([
                ("account_id".to_string(), account_id.to_string()),
                ("amount".to_string(), amount.to_string()),
            ])),
        );
        Ok(())
    }
}
