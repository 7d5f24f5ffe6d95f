use crate::domain::error::{DomainError, PurchaseRejection};
use crate::domain::model::{AccountId, Money, TicketPolicy, TicketType, TicketTypeRequest};

/// TicketPurchase集約
/// 1回の購入リクエストを検証し、支払金額と座席数を算出する
/// 生成に成功した時点で全てのビジネスルールを満たしている
#[derive(Debug, Clone, PartialEq)]
pub struct TicketPurchase {
    account_id: AccountId,
    adult_tickets: u32,
    child_tickets: u32,
    infant_tickets: u32,
    total_amount: Money,
}

/// 種別ごとの枚数集計
/// 負数を除いた後に数えるので、飽和加算で上限超過として扱える
#[derive(Debug, Default)]
struct Tally {
    adult: i64,
    child: i64,
    infant: i64,
}

impl Tally {
    fn add(&mut self, ticket_type: TicketType, quantity: i64) {
        let count = match ticket_type {
            TicketType::Adult => &mut self.adult,
            TicketType::Child => &mut self.child,
            TicketType::Infant => &mut self.infant,
        };
        *count = count.saturating_add(quantity);
    }

    fn total(&self) -> i64 {
        self.adult
            .saturating_add(self.child)
            .saturating_add(self.infant)
    }
}

impl TicketPurchase {
    /// チケットリクエストを検証して購入を作成
    ///
    /// 検証は次の順に行い、最初に違反したルールで失敗する:
    /// 1. リクエストが1件以上ある
    /// 2. 全リクエストの枚数が0以上
    /// 3. 合計枚数が上限以下、かつ1枚以上
    /// 4. 子供・幼児がいる場合は大人が1枚以上
    /// 5. 幼児の枚数が大人の枚数以下
    ///
    /// # Arguments
    /// * `account_id` - 検証済みのアカウントID
    /// * `requests` - チケットリクエストのリスト
    /// * `policy` - 上限枚数と単価
    ///
    /// # Returns
    /// * `Ok(TicketPurchase)` - 検証成功
    /// * `Err(DomainError::InvalidPurchase)` - いずれかのルールに違反
    /// * `Err(DomainError::AmountOverflow)` - 単価が大きすぎて金額を計算できない
    pub fn new(
        account_id: AccountId,
        requests: &[TicketTypeRequest],
        policy: &TicketPolicy,
    ) -> Result<Self, DomainError> {
        if requests.is_empty() {
            return Err(PurchaseRejection::NoTicketRequests.into());
        }

        let mut tally = Tally::default();
        for request in requests {
            let quantity = request.quantity();
            if quantity < 0 {
                return Err(PurchaseRejection::NegativeQuantity.into());
            }
            tally.add(request.ticket_type(), quantity);
        }

        let total = tally.total();
        if total > i64::from(policy.max_tickets) {
            return Err(PurchaseRejection::TooManyTickets.into());
        }
        if total == 0 {
            return Err(PurchaseRejection::NoTicketsRequested.into());
        }

        if tally.adult == 0 && (tally.child > 0 || tally.infant > 0) {
            return Err(PurchaseRejection::AdultRequired.into());
        }

        if tally.infant > tally.adult {
            return Err(PurchaseRejection::InfantsExceedAdults.into());
        }

        // ここまでで各枚数は max_tickets 以下
        let adult_tickets = tally.adult as u32;
        let child_tickets = tally.child as u32;
        let infant_tickets = tally.infant as u32;
        let total_amount = Self::calculate_amount(
            policy,
            &[
                (TicketType::Adult, adult_tickets),
                (TicketType::Child, child_tickets),
                (TicketType::Infant, infant_tickets),
            ],
        )?;

        Ok(Self {
            account_id,
            adult_tickets,
            child_tickets,
            infant_tickets,
            total_amount,
        })
    }

    /// 単価 × 枚数 を合算する
    fn calculate_amount(
        policy: &TicketPolicy,
        counts: &[(TicketType, u32)],
    ) -> Result<Money, DomainError> {
        counts
            .iter()
            .try_fold(Money::gbp(0), |total, (ticket_type, count)| {
                let subtotal = policy.unit_price(*ticket_type).checked_multiply(*count)?;
                total.checked_add(&subtotal)
            })
    }

    /// アカウントIDを取得
    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    pub fn adult_tickets(&self) -> u32 {
        self.adult_tickets
    }

    pub fn child_tickets(&self) -> u32 {
        self.child_tickets
    }

    pub fn infant_tickets(&self) -> u32 {
        self.infant_tickets
    }

    /// 合計枚数
    pub fn total_tickets(&self) -> u32 {
        self.adult_tickets + self.child_tickets + self.infant_tickets
    }

    /// 支払金額
    /// 大人 × 大人単価 + 子供 × 子供単価（幼児は無料）
    pub fn total_amount(&self) -> Money {
        self.total_amount
    }

    /// 予約する座席数（幼児は座席を使わない）
    pub fn total_seats(&self) -> u32 {
        [
            (TicketType::Adult, self.adult_tickets),
            (TicketType::Child, self.child_tickets),
            (TicketType::Infant, self.infant_tickets),
        ]
        .iter()
        .filter(|(ticket_type, _)| ticket_type.occupies_seat())
        .map(|(_, count)| count)
        .sum()
    }
}
