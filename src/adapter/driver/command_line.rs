use crate::adapter::driver::request_dto::PurchaseTicketsRequest;
use crate::adapter::driver::response_dto::{ApiError, PurchaseResponse};
use crate::application::service::TicketApplicationService;
use crate::application::ApplicationError;
use crate::domain::model::AccountId;
use crate::domain::port::{SeatReservationService, TicketPaymentService};

/// コマンドラインドライバー
/// JSON形式の購入リクエストを受け取り、JSON形式の結果を返す
pub struct CommandLineDriver<P, S>
where
    P: TicketPaymentService,
    S: SeatReservationService,
{
    ticket_service: TicketApplicationService<P, S>,
}

impl<P, S> CommandLineDriver<P, S>
where
    P: TicketPaymentService,
    S: SeatReservationService,
{
    pub fn new(ticket_service: TicketApplicationService<P, S>) -> Self {
        Self { ticket_service }
    }

    /// JSON文字列の購入リクエストを処理する
    ///
    /// # Arguments
    /// * `input` - `PurchaseTicketsRequest` のJSON表現
    ///
    /// # Returns
    /// * `Ok(PurchaseResponse)` - 購入成功
    /// * `Err(ApiError)` - JSONの解析失敗、または購入失敗
    ///
    /// アカウントIDはチケット種別の変換より前に検証する
    pub async fn handle(&self, input: &str) -> Result<PurchaseResponse, ApiError> {
        let request: PurchaseTicketsRequest =
            serde_json::from_str(input).map_err(|e| ApiError {
                error: format!("Malformed purchase request: {}", e),
                code: "INVALID_REQUEST".to_string(),
            })?;

        // アカウントIDの不備はチケット種別の不備より先に購入エラーとして返す
        AccountId::from_optional(request.account_id)
            .map_err(|e| ApiError::from_application_error(&ApplicationError::from(e)))?;

        let ticket_type_requests = request
            .ticket_type_requests()
            .map_err(|e| ApiError::from_application_error(&ApplicationError::from(e)))?;

        self.ticket_service
            .purchase_tickets(request.account_id, &ticket_type_requests)
            .await
            .map(|summary| PurchaseResponse::from_summary(&summary))
            .map_err(|e| ApiError::from_application_error(&e))
    }
}
