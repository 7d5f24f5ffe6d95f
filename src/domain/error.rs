/// 購入が拒否された理由
/// 呼び出し側は InvalidPurchase だけを見ればよいが、ログや診断のために理由を保持する
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseRejection {
    /// アカウントIDが未指定、または0以下
    InvalidAccountId,
    /// チケットリクエストが1件もない
    NoTicketRequests,
    /// 負の枚数を含むリクエストがある
    NegativeQuantity,
    /// 合計枚数が上限を超えている
    TooManyTickets,
    /// 合計枚数が0
    NoTicketsRequested,
    /// 大人チケットなしで子供・幼児チケットを購入しようとした
    AdultRequired,
    /// 幼児の枚数が大人の枚数を超えている（幼児は大人の膝上に座る）
    InfantsExceedAdults,
}

impl PurchaseRejection {
    /// ログ出力用の識別子
    pub fn code(&self) -> &'static str {
        match self {
            PurchaseRejection::InvalidAccountId => "INVALID_ACCOUNT_ID",
            PurchaseRejection::NoTicketRequests => "NO_TICKET_REQUESTS",
            PurchaseRejection::NegativeQuantity => "NEGATIVE_QUANTITY",
            PurchaseRejection::TooManyTickets => "TOO_MANY_TICKETS",
            PurchaseRejection::NoTicketsRequested => "NO_TICKETS_REQUESTED",
            PurchaseRejection::AdultRequired => "ADULT_REQUIRED",
            PurchaseRejection::InfantsExceedAdults => "INFANTS_EXCEED_ADULTS",
        }
    }
}

impl std::fmt::Display for PurchaseRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PurchaseRejection::InvalidAccountId => write!(f, "account id must be positive"),
            PurchaseRejection::NoTicketRequests => write!(f, "no ticket requests given"),
            PurchaseRejection::NegativeQuantity => {
                write!(f, "ticket quantity must not be negative")
            }
            PurchaseRejection::TooManyTickets => write!(f, "too many tickets in one purchase"),
            PurchaseRejection::NoTicketsRequested => write!(f, "at least one ticket is required"),
            PurchaseRejection::AdultRequired => {
                write!(f, "child and infant tickets require an adult ticket")
            }
            PurchaseRejection::InfantsExceedAdults => {
                write!(f, "infant tickets must not exceed adult tickets")
            }
        }
    }
}

/// ドメイン層のエラー型
/// ビジネスルール違反を表現する
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// 無効な購入（どの検証ルールに違反したかを保持する）
    InvalidPurchase(PurchaseRejection),
    /// 無効な値（例: 未知のチケット種別）
    InvalidValue(String),
    /// 金額の計算が桁あふれした（単価の設定が大きすぎる）
    AmountOverflow,
}

impl DomainError {
    /// 無効な購入エラーかどうか
    pub fn is_invalid_purchase(&self) -> bool {
        matches!(self, DomainError::InvalidPurchase(_))
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::InvalidPurchase(reason) => write!(f, "Invalid purchase: {}", reason),
            DomainError::InvalidValue(msg) => write!(f, "Invalid value: {}", msg),
            DomainError::AmountOverflow => write!(f, "Amount overflow"),
        }
    }
}

impl std::error::Error for DomainError {}

impl From<PurchaseRejection> for DomainError {
    fn from(reason: PurchaseRejection) -> Self {
        DomainError::InvalidPurchase(reason)
    }
}
