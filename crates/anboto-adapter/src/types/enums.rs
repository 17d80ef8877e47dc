/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization and string parsing
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new labels added
*/

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error parsing an enum label
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} value: {value}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

// Wire labels, `Display` and case-insensitive `FromStr` for closed label sets.
macro_rules! wire_labels {
    ($name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                let trimmed = value.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|candidate| candidate.as_str().eq_ignore_ascii_case(trimmed))
                    .ok_or_else(|| ParseEnumError {
                        kind: stringify!($name),
                        value: value.to_string(),
                    })
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Side {
    Buy,
    Sell,
    ShortSell,
}

wire_labels!(Side {
    Buy => "BUY",
    Sell => "SELL",
    ShortSell => "SHORT_SELL",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetCategory {
    Spot,
    Future,
    Option,
}

wire_labels!(AssetCategory {
    Spot => "SPOT",
    Future => "FUTURE",
    Option => "OPTION",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Exchange {
    Binance,
    Huobi,
    Gateio,
    Kraken,
    Kucoin,
    Okx,
    Bybit,
    Bitget,
}

wire_labels!(Exchange {
    Binance => "BINANCE",
    Huobi => "HUOBI",
    Gateio => "GATEIO",
    Kraken => "KRAKEN",
    Kucoin => "KUCOIN",
    Okx => "OKX",
    Bybit => "BYBIT",
    Bitget => "BITGET",
});

/// Execution algorithm the service runs for a parent order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecutionStrategy {
    Twap,
    Vwap,
    Iceberg,
    Market,
    Limit,
    StopLoss,
}

wire_labels!(ExecutionStrategy {
    Twap => "TWAP",
    Vwap => "VWAP",
    Iceberg => "ICEBERG",
    Market => "MARKET",
    Limit => "LIMIT",
    StopLoss => "STOP_LOSS",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    PendingNew,
    Accepted,
    Rejected,
    PartiallyFilled,
    Filled,
    PendingCancel,
    Cancelled,
    PendingPause,
    Paused,
    PendingUnpause,
    Expired,
    CancelRejected,
}

wire_labels!(OrderStatus {
    PendingNew => "PENDING_NEW",
    Accepted => "ACCEPTED",
    Rejected => "REJECTED",
    PartiallyFilled => "PARTIALLY_FILLED",
    Filled => "FILLED",
    PendingCancel => "PENDING_CANCEL",
    Cancelled => "CANCELLED",
    PendingPause => "PENDING_PAUSE",
    Paused => "PAUSED",
    PendingUnpause => "PENDING_UNPAUSE",
    Expired => "EXPIRED",
    CancelRejected => "CANCEL_REJECTED",
});

/// Error codes the service embeds in JSON error bodies.
///
/// The client never branches on these; they are exposed for callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiErrorCode {
    Other,
    QuantityExceed,
    AuthenticationError,
    InsufficientFunds,
    RateLimitExceeded,
    DdosProtection,
    ExchangeNotAvailable,
    NetworkError,
    InvalidOrder,
    ExchangeError,
    EmsInstancesDown,
    SlippageExceeded,
    ExpiryReached,
    MaxFeePerGasIsTooLow,
    ParentOrderWasTerminated,
    MaxPriorityFeePerGasIsTooLow,
    InvalidSignature,
    InvalidApiKey,
    InvalidTimestamp,
    SystemError,
    InvalidRequest,
}

wire_labels!(ApiErrorCode {
    Other => "OTHER",
    QuantityExceed => "QUANTITY_EXCEED",
    AuthenticationError => "AUTHENTICATION_ERROR",
    InsufficientFunds => "INSUFFICIENT_FUNDS",
    RateLimitExceeded => "RATE_LIMIT_EXCEEDED",
    DdosProtection => "DDOS_PROTECTION",
    ExchangeNotAvailable => "EXCHANGE_NOT_AVAILABLE",
    NetworkError => "NETWORK_ERROR",
    InvalidOrder => "INVALID_ORDER",
    ExchangeError => "EXCHANGE_ERROR",
    EmsInstancesDown => "EMS_INSTANCES_DOWN",
    SlippageExceeded => "SLIPPAGE_EXCEEDED",
    ExpiryReached => "EXPIRY_REACHED",
    MaxFeePerGasIsTooLow => "MAX_FEE_PER_GAS_IS_TOO_LOW",
    ParentOrderWasTerminated => "PARENT_ORDER_WAS_TERMINATED",
    MaxPriorityFeePerGasIsTooLow => "MAX_PRIORITY_FEE_PER_GAS_IS_TOO_LOW",
    InvalidSignature => "INVALID_SIGNATURE",
    InvalidApiKey => "INVALID_API_KEY",
    InvalidTimestamp => "INVALID_TIMESTAMP",
    SystemError => "SYSTEM_ERROR",
    InvalidRequest => "INVALID_REQUEST",
});
