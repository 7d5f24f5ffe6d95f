use crate::domain::error::DomainError;
use crate::domain::port::GatewayError;

/// アプリケーション層のエラー型
/// ドメインエラーと外部サービスの呼び出しエラーをラップする
#[derive(Debug)]
pub enum ApplicationError {
    /// ドメインエラー（ビジネスルール違反）
    DomainError(DomainError),
    /// 支払いに失敗（座席予約は行われない）
    PaymentFailed(GatewayError),
    /// 座席予約に失敗（支払いは完了済み）
    SeatReservationFailed(GatewayError),
}

impl ApplicationError {
    /// 無効な購入として拒否されたかどうか
    pub fn is_invalid_purchase(&self) -> bool {
        matches!(self, ApplicationError::DomainError(err) if err.is_invalid_purchase())
    }
}

impl std::fmt::Display for ApplicationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplicationError::DomainError(err) => write!(f, "Domain error: {}", err),
            ApplicationError::PaymentFailed(err) => write!(f, "Payment failed: {}", err),
            ApplicationError::SeatReservationFailed(err) => {
                write!(f, "Seat reservation failed: {}", err)
            }
        }
    }
}

impl std::error::Error for ApplicationError {}

// From実装でエラー変換を簡潔に
impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        ApplicationError::DomainError(err)
    }
}
