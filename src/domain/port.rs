// 出力ポート
// ドメイン層が外部に依存する機能をトレイトとして定義
// アダプター層でこれらのトレイトを実装する

use crate::domain::model::{AccountId, Money};
use async_trait::async_trait;
use std::collections::HashMap;
use uuid::Uuid;

/// ログレベル
/// 宣言順に重要度が高くなる
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

/// ロガートレイト
/// ログ出力を抽象化するポート
pub trait Logger: Send + Sync {
    /// デバッグレベルのログを出力
    fn debug(
        &self,
        component: &str,
        message: &str,
        correlation_id: Option<Uuid>,
        context: Option<HashMap<String, String>>,
    );

    /// 情報レベルのログを出力
    fn info(
        &self,
        component: &str,
        message: &str,
        correlation_id: Option<Uuid>,
        context: Option<HashMap<String, String>>,
    );

    /// 警告レベルのログを出力
    fn warn(
        &self,
        component: &str,
        message: &str,
        correlation_id: Option<Uuid>,
        context: Option<HashMap<String, String>>,
    );

    /// エラーレベルのログを出力
    fn error(
        &self,
        component: &str,
        message: &str,
        correlation_id: Option<Uuid>,
        context: Option<HashMap<String, String>>,
    );
}

/// 外部サービス呼び出しのエラー
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GatewayError {
    /// サービスに到達できない
    #[error("Service unavailable: {0}")]
    Unavailable(String),
    /// サービスが要求を拒否した
    #[error("Request rejected: {0}")]
    Rejected(String),
}

/// チケット支払いサービス
/// 外部の決済ゲートウェイを抽象化する
#[async_trait]
pub trait TicketPaymentService: Send + Sync {
    /// 指定アカウントに金額を請求する
    ///
    /// # Arguments
    /// * `account_id` - 請求先アカウント
    /// * `amount` - 請求金額
    ///
    /// # Returns
    /// * `Ok(())` - 請求成功
    /// * `Err(GatewayError)` - 請求失敗
    async fn make_payment(&self, account_id: AccountId, amount: Money) -> Result<(), GatewayError>;
}

/// 座席予約サービス
/// 外部の座席予約システムを抽象化する
#[async_trait]
pub trait SeatReservationService: Send + Sync {
    /// 指定アカウントのために座席を予約する
    ///
    /// # Arguments
    /// * `account_id` - 予約するアカウント
    /// * `seat_count` - 予約する座席数
    ///
    /// # Returns
    /// * `Ok(())` - 予約成功
    /// * `Err(GatewayError)` - 予約失敗
    async fn reserve_seat(&self, account_id: AccountId, seat_count: u32)
        -> Result<(), GatewayError>;
}
