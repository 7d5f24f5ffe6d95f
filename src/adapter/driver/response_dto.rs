use crate::application::service::PurchaseSummary;
use crate::application::ApplicationError;
use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};

/// チケット購入成功時のレスポンスDTO
#[derive(Debug, Serialize, Deserialize)]
pub struct PurchaseResponse {
    pub purchase_id: String,
    pub account_id: i64,
    pub adult_tickets: u32,
    pub child_tickets: u32,
    pub infant_tickets: u32,
    pub total_amount: i64,
    pub total_currency: String,
    pub total_seats: u32,
}

/// エラーレスポンスDTO
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl PurchaseResponse {
    /// 購入結果からPurchaseResponseを作成
    pub fn from_summary(summary: &PurchaseSummary) -> Self {
        Self {
            purchase_id: summary.purchase_id.to_string(),
            account_id: summary.account_id.value(),
            adult_tickets: summary.adult_tickets,
            child_tickets: summary.child_tickets,
            infant_tickets: summary.infant_tickets,
            total_amount: summary.total_amount.amount(),
            total_currency: summary.total_amount.currency(),
            total_seats: summary.total_seats,
        }
    }
}

impl ApiError {
    /// アプリケーションエラーをエラーコード付きのレスポンスにマッピング
    /// 検証エラーは全て INVALID_PURCHASE として返す
    pub fn from_application_error(err: &ApplicationError) -> Self {
        let code = match err {
            ApplicationError::DomainError(DomainError::InvalidPurchase(_)) => "INVALID_PURCHASE",
            ApplicationError::DomainError(DomainError::InvalidValue(_)) => "INVALID_VALUE",
            ApplicationError::DomainError(DomainError::AmountOverflow) => "AMOUNT_OVERFLOW",
            ApplicationError::PaymentFailed(_) => "PAYMENT_FAILED",
            ApplicationError::SeatReservationFailed(_) => "SEAT_RESERVATION_FAILED",
        };
        Self {
            error: err.to_string(),
            code: code.to_string(),
        }
    }
}
