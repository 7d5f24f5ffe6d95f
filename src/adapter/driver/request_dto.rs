use crate::domain::error::DomainError;
use crate::domain::model::{TicketType, TicketTypeRequest};
use serde::{Deserialize, Serialize};

/// チケット購入用のリクエストDTO
/// account_id は省略可能（省略時は購入が拒否される）
#[derive(Debug, Serialize, Deserialize)]
pub struct PurchaseTicketsRequest {
    #[serde(default)]
    pub account_id: Option<i64>,
    #[serde(default)]
    pub tickets: Vec<TicketRequestDto>,
}

/// チケット種別ごとのリクエストDTO
#[derive(Debug, Serialize, Deserialize)]
pub struct TicketRequestDto {
    pub ticket_type: String,
    pub quantity: i64,
}

impl TicketRequestDto {
    /// ドメインの値オブジェクトに変換
    pub fn to_domain(&self) -> Result<TicketTypeRequest, DomainError> {
        let ticket_type: TicketType = self.ticket_type.parse()?;
        Ok(TicketTypeRequest::new(ticket_type, self.quantity))
    }
}

impl PurchaseTicketsRequest {
    /// 全チケットリクエストをドメインの値オブジェクトに変換
    /// 未知のチケット種別が含まれる場合は失敗する
    pub fn ticket_type_requests(&self) -> Result<Vec<TicketTypeRequest>, DomainError> {
        self.tickets.iter().map(TicketRequestDto::to_domain).collect()
    }
}
