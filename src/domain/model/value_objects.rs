use crate::domain::error::{DomainError, PurchaseRejection};
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// 購入アカウントの識別子
/// 0以下の値は存在しない
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(i64);

impl AccountId {
    /// 生の整数からAccountIdを作成
    /// 0以下の場合は無効な購入として扱う
    pub fn new(raw: i64) -> Result<Self, DomainError> {
        if raw <= 0 {
            return Err(PurchaseRejection::InvalidAccountId.into());
        }
        Ok(Self(raw))
    }

    /// 未指定かもしれないアカウントIDを検証する
    pub fn from_optional(raw: Option<i64>) -> Result<Self, DomainError> {
        match raw {
            Some(value) => Self::new(value),
            None => Err(PurchaseRejection::InvalidAccountId.into()),
        }
    }

    /// 内部の整数値を取得
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 通貨
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum Currency {
    GBP,
}

/// 金額を表す値オブジェクト
/// チケット料金はポンド単位の整数で扱う
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    amount: i64,
    currency: Currency,
}

impl Money {
    /// ポンド建ての金額を作成
    pub fn gbp(amount: i64) -> Self {
        Self {
            amount,
            currency: Currency::GBP,
        }
    }

    /// 金額を取得
    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// 通貨を文字列として取得
    pub fn currency(&self) -> String {
        match self.currency {
            Currency::GBP => "GBP".to_string(),
        }
    }

    /// 金額を加算
    /// 桁あふれする場合は失敗する
    pub fn checked_add(&self, other: &Money) -> Result<Money, DomainError> {
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or(DomainError::AmountOverflow)?;
        Ok(Money {
            amount,
            currency: self.currency,
        })
    }

    /// 金額を乗算
    /// 桁あふれする場合は失敗する
    pub fn checked_multiply(&self, factor: u32) -> Result<Money, DomainError> {
        let amount = self
            .amount
            .checked_mul(i64::from(factor))
            .ok_or(DomainError::AmountOverflow)?;
        Ok(Money {
            amount,
            currency: self.currency,
        })
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency())
    }
}

/// チケット種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketType {
    /// 大人
    Adult,
    /// 子供
    Child,
    /// 幼児（大人の膝上に座るため座席を使わない）
    Infant,
}

impl TicketType {
    /// 座席を必要とするか
    pub fn occupies_seat(&self) -> bool {
        !matches!(self, TicketType::Infant)
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let type_str = match self {
            TicketType::Adult => "ADULT",
            TicketType::Child => "CHILD",
            TicketType::Infant => "INFANT",
        };
        write!(f, "{}", type_str)
    }
}

impl FromStr for TicketType {
    type Err = DomainError;

    /// 大文字小文字を区別せずにチケット種別を解析する
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ADULT" => Ok(TicketType::Adult),
            "CHILD" => Ok(TicketType::Child),
            "INFANT" => Ok(TicketType::Infant),
            _ => Err(DomainError::InvalidValue(format!(
                "無効なチケット種別: {}",
                s
            ))),
        }
    }
}

/// チケット種別と枚数の組
/// 枚数は呼び出し側から渡された値をそのまま保持し、負数や過大な値は購入時の検証で弾く
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketTypeRequest {
    ticket_type: TicketType,
    quantity: i64,
}

impl TicketTypeRequest {
    pub fn new(ticket_type: TicketType, quantity: i64) -> Self {
        Self {
            ticket_type,
            quantity,
        }
    }

    /// チケット種別を取得
    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    /// 枚数を取得
    pub fn quantity(&self) -> i64 {
        self.quantity
    }
}

/// 購入ルールの設定値
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketPolicy {
    /// 1回の購入で買えるチケットの上限
    pub max_tickets: u32,
    /// 大人チケットの単価
    pub adult_price: Money,
    /// 子供チケットの単価
    pub child_price: Money,
}

impl TicketPolicy {
    pub const DEFAULT_MAX_TICKETS: u32 = 25;
    pub const DEFAULT_ADULT_PRICE: i64 = 25;
    pub const DEFAULT_CHILD_PRICE: i64 = 15;

    /// チケット種別ごとの単価（幼児は無料）
    pub fn unit_price(&self, ticket_type: TicketType) -> Money {
        match ticket_type {
            TicketType::Adult => self.adult_price,
            TicketType::Child => self.child_price,
            TicketType::Infant => Money::gbp(0),
        }
    }
}

impl Default for TicketPolicy {
    fn default() -> Self {
        Self {
            max_tickets: Self::DEFAULT_MAX_TICKETS,
            adult_price: Money::gbp(Self::DEFAULT_ADULT_PRICE),
            child_price: Money::gbp(Self::DEFAULT_CHILD_PRICE),
        }
    }
}
