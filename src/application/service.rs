use crate::application::ApplicationError;
use crate::domain::error::DomainError;
use crate::domain::model::{AccountId, Money, TicketPolicy, TicketPurchase, TicketTypeRequest};
use crate::domain::port::{Logger, SeatReservationService, TicketPaymentService};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

const COMPONENT: &str = "TicketApplicationService";

/// 購入処理の結果
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseSummary {
    /// 購入ごとに採番される識別子（ログの相関IDを兼ねる）
    pub purchase_id: Uuid,
    pub account_id: AccountId,
    pub adult_tickets: u32,
    pub child_tickets: u32,
    pub infant_tickets: u32,
    pub total_amount: Money,
    pub total_seats: u32,
}

impl PurchaseSummary {
    fn new(purchase_id: Uuid, purchase: &TicketPurchase) -> Self {
        Self {
            purchase_id,
            account_id: purchase.account_id(),
            adult_tickets: purchase.adult_tickets(),
            child_tickets: purchase.child_tickets(),
            infant_tickets: purchase.infant_tickets(),
            total_amount: purchase.total_amount(),
            total_seats: purchase.total_seats(),
        }
    }
}

/// チケットアプリケーションサービス
/// 購入リクエストを検証し、支払い → 座席予約の順に外部サービスを呼び出す
pub struct TicketApplicationService<P, S>
where
    P: TicketPaymentService,
    S: SeatReservationService,
{
    payment_service: P,
    seat_reservation_service: S,
    policy: TicketPolicy,
    logger: Arc<dyn Logger>,
}

impl<P, S> TicketApplicationService<P, S>
where
    P: TicketPaymentService,
    S: SeatReservationService,
{
    /// 新しいアプリケーションサービスを作成
    ///
    /// # Arguments
    /// * `payment_service` - 支払いサービス
    /// * `seat_reservation_service` - 座席予約サービス
    /// * `policy` - 購入ルール
    /// * `logger` - ロガー
    pub fn new(
        payment_service: P,
        seat_reservation_service: S,
        policy: TicketPolicy,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            payment_service,
            seat_reservation_service,
            policy,
            logger,
        }
    }

    /// チケットを購入する
    ///
    /// 検証に失敗した場合、外部サービスは一切呼び出さない。
    /// 支払いに失敗した場合、座席予約は行わない。
    ///
    /// # Arguments
    /// * `account_id` - アカウントID（未指定の場合は None）
    /// * `ticket_type_requests` - チケットリクエストのリスト
    ///
    /// # Returns
    /// * `Ok(PurchaseSummary)` - 購入成功
    /// * `Err(ApplicationError)` - 検証失敗、または外部サービスの呼び出し失敗
    pub async fn purchase_tickets(
        &self,
        account_id: Option<i64>,
        ticket_type_requests: &[TicketTypeRequest],
    ) -> Result<PurchaseSummary, ApplicationError> {
        let purchase_id = Uuid::new_v4();
        self.logger.info(
            COMPONENT,
            "Ticket purchase requested",
            Some(purchase_id),
            Some(HashMap::from([(
                "request_count".to_string(),
                ticket_type_requests.len().to_string(),
            )])),
        );

        let purchase = self
            .validate(account_id, ticket_type_requests)
            .map_err(|err| {
                self.log_rejection(purchase_id, &err);
                err
            })?;

        let account_id = purchase.account_id();
        let total_amount = purchase.total_amount();
        let total_seats = purchase.total_seats();

        self.payment_service
            .make_payment(account_id, total_amount)
            .await
            .map_err(|err| {
                self.logger.error(
                    COMPONENT,
                    &format!("Payment failed: {}", err),
                    Some(purchase_id),
                    Some(HashMap::from([(
                        "account_id".to_string(),
                        account_id.to_string(),
                    )])),
                );
                ApplicationError::PaymentFailed(err)
            })?;

        self.seat_reservation_service
            .reserve_seat(account_id, total_seats)
            .await
            .map_err(|err| {
                self.logger.error(
                    COMPONENT,
                    &format!("Seat reservation failed after payment: {}", err),
                    Some(purchase_id),
                    Some(HashMap::from([
                        ("account_id".to_string(), account_id.to_string()),
                        ("amount".to_string(), total_amount.to_string()),
                    ])),
                );
                ApplicationError::SeatReservationFailed(err)
            })?;

        self.logger.info(
            COMPONENT,
            "Ticket purchase completed",
            Some(purchase_id),
            Some(HashMap::from([
                ("account_id".to_string(), account_id.to_string()),
                ("amount".to_string(), total_amount.to_string()),
                ("seats".to_string(), total_seats.to_string()),
            ])),
        );

        Ok(PurchaseSummary::new(purchase_id, &purchase))
    }

    /// アカウントIDとチケットリクエストを検証する
    fn validate(
        &self,
        account_id: Option<i64>,
        ticket_type_requests: &[TicketTypeRequest],
    ) -> Result<TicketPurchase, DomainError> {
        let account_id = AccountId::from_optional(account_id)?;
        TicketPurchase::new(account_id, ticket_type_requests, &self.policy)
    }

    fn log_rejection(&self, purchase_id: Uuid, err: &DomainError) {
        let mut context = HashMap::new();
        if let DomainError::InvalidPurchase(reason) = err {
            context.insert("reason".to_string(), reason.code().to_string());
        }
        self.logger.warn(
            COMPONENT,
            &format!("Ticket purchase rejected: {}", err),
            Some(purchase_id),
            Some(context),
        );
    }
}
