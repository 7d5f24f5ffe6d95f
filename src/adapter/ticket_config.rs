use crate::domain::model::{Money, TicketPolicy};
use crate::domain::port::LogLevel;
use std::env;

/// チケット購入サービスの設定を管理する構造体
#[derive(Debug, Clone, PartialEq)]
pub struct TicketConfig {
    pub max_tickets: u32,
    pub adult_price: i64,
    pub child_price: i64,
    pub log_level: LogLevel,
}

/// 設定エラー
#[derive(Debug)]
pub enum ConfigError {
    InvalidValue(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue(msg) => write!(f, "Invalid configuration value: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl TicketConfig {
    /// 環境変数から設定を読み取る
    /// 環境変数が設定されていない場合はデフォルト値を使用
    pub fn from_env() -> Result<Self, ConfigError> {
        let max_tickets = env::var("TICKET_MAX_PER_PURCHASE")
            .unwrap_or_else(|_| TicketPolicy::DEFAULT_MAX_TICKETS.to_string())
            .parse::<u32>()
            .map_err(|e| {
                ConfigError::InvalidValue(format!("Invalid TICKET_MAX_PER_PURCHASE: {}", e))
            })?;

        let adult_price = Self::price_from_env(
            "TICKET_ADULT_PRICE",
            TicketPolicy::DEFAULT_ADULT_PRICE,
            max_tickets,
        )?;
        let child_price = Self::price_from_env(
            "TICKET_CHILD_PRICE",
            TicketPolicy::DEFAULT_CHILD_PRICE,
            max_tickets,
        )?;

        let log_level = match env::var("TICKET_LOG_LEVEL") {
            Ok(value) => Self::parse_log_level(&value)?,
            Err(_) => LogLevel::Info,
        };

        Ok(Self {
            max_tickets,
            adult_price,
            child_price,
            log_level,
        })
    }

    /// 単価を読み取る
    /// 負の値と、上限枚数を掛けると i64 に収まらない値は不可
    fn price_from_env(key: &str, default: i64, max_tickets: u32) -> Result<i64, ConfigError> {
        let price = env::var(key)
            .unwrap_or_else(|_| default.to_string())
            .parse::<i64>()
            .map_err(|e| ConfigError::InvalidValue(format!("Invalid {}: {}", key, e)))?;

        if price < 0 {
            return Err(ConfigError::InvalidValue(format!(
                "{} must not be negative: {}",
                key, price
            )));
        }
        if price.checked_mul(i64::from(max_tickets)).is_none() {
            return Err(ConfigError::InvalidValue(format!(
                "{} is too large for {} tickets: {}",
                key, max_tickets, price
            )));
        }
        Ok(price)
    }

    fn parse_log_level(value: &str) -> Result<LogLevel, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            other => Err(ConfigError::InvalidValue(format!(
                "Invalid TICKET_LOG_LEVEL: {}",
                other
            ))),
        }
    }

    /// 購入ルールを生成
    pub fn policy(&self) -> TicketPolicy {
        TicketPolicy {
            max_tickets: self.max_tickets,
            adult_price: Money::gbp(self.adult_price),
            child_price: Money::gbp(self.child_price),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // テスト間の環境変数の競合を防ぐためのロック
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const KEYS: [&str; 4] = [
        "TICKET_MAX_PER_PURCHASE",
        "TICKET_ADULT_PRICE",
        "TICKET_CHILD_PRICE",
        "TICKET_LOG_LEVEL",
    ];

    fn clear_env() {
        for key in KEYS {
            env::remove_var(key);
        }
    }

    #[test]
    fn test_from_env_with_all_variables() {
        let _lock = ENV_LOCK.lock().unwrap();

        env::set_var("TICKET_MAX_PER_PURCHASE", "10");
        env::set_var("TICKET_ADULT_PRICE", "30");
        env::set_var("TICKET_CHILD_PRICE", "12");
        env::set_var("TICKET_LOG_LEVEL", "debug");

        let config = TicketConfig::from_env().unwrap();

        assert_eq!(config.max_tickets, 10);
        assert_eq!(config.adult_price, 30);
        assert_eq!(config.child_price, 12);
        assert_eq!(config.log_level, LogLevel::Debug);

        // クリーンアップ
        clear_env();
    }

    #[test]
    fn test_from_env_with_defaults() {
        let _lock = ENV_LOCK.lock().unwrap();
        clear_env();

        let config = TicketConfig::from_env().unwrap();

        assert_eq!(config.max_tickets, 25);
        assert_eq!(config.adult_price, 25);
        assert_eq!(config.child_price, 15);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.policy(), TicketPolicy::default());
    }

    #[test]
    fn test_invalid_max_tickets() {
        let _lock = ENV_LOCK.lock().unwrap();
        clear_env();

        env::set_var("TICKET_MAX_PER_PURCHASE", "many");
        assert!(TicketConfig::from_env().is_err());

        clear_env();
    }

    #[test]
    fn test_negative_price_rejected() {
        let _lock = ENV_LOCK.lock().unwrap();
        clear_env();

        env::set_var("TICKET_CHILD_PRICE", "-5");
        assert!(TicketConfig::from_env().is_err());

        clear_env();
    }

    #[test]
    fn test_price_too_large_for_max_tickets_rejected() {
        let _lock = ENV_LOCK.lock().unwrap();
        clear_env();

        // 25枚 × 単価 が i64 に収まる最大値は通る
        env::set_var("TICKET_ADULT_PRICE", (i64::MAX / 25).to_string());
        let config = TicketConfig::from_env().unwrap();
        assert_eq!(config.adult_price, i64::MAX / 25);

        env::set_var("TICKET_ADULT_PRICE", (i64::MAX / 25 + 1).to_string());
        assert!(TicketConfig::from_env().is_err());

        // 上限枚数を下げれば同じ単価でも通る
        env::set_var("TICKET_MAX_PER_PURCHASE", "2");
        env::set_var("TICKET_ADULT_PRICE", (i64::MAX / 25 + 1).to_string());
        assert!(TicketConfig::from_env().is_ok());

        clear_env();
    }

    #[test]
    fn test_invalid_log_level() {
        let _lock = ENV_LOCK.lock().unwrap();
        clear_env();

        env::set_var("TICKET_LOG_LEVEL", "loud");
        assert!(TicketConfig::from_env().is_err());

        clear_env();
    }

    #[test]
    fn test_policy_from_config() {
        let config = TicketConfig {
            max_tickets: 5,
            adult_price: 20,
            child_price: 10,
            log_level: LogLevel::Info,
        };

        let policy = config.policy();
        assert_eq!(policy.max_tickets, 5);
        assert_eq!(policy.adult_price.amount(), 20);
        assert_eq!(policy.child_price.amount(), 10);
    }
}
