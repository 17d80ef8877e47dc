/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request payloads and formatting helpers
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new payload fields added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::enums::{AssetCategory, ExecutionStrategy, Exchange, Side};
use crate::http::{AnbotoError, Result};

/// Payload for `order/create`.
///
/// Field order is wire order and takes part in the request signature.
///
/// `quantity`, `limitPrice` and `clipSizeVal` go out as JSON numbers, so each
/// value is rounded to the nearest `f64` when serialized. Digits beyond what
/// an `f64` holds (about 17 significant) are lost on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub client_order_id: String,
    pub exchange: Exchange,
    pub symbol: String,
    pub asset_category: AssetCategory,
    pub side: Side,
    #[serde(with = "rust_decimal::serde::float")]
    pub quantity: Decimal,
    pub strategy: ExecutionStrategy,
    #[serde(rename = "limitPrice")]
    #[serde(with = "rust_decimal::serde::float_option")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit_price: Option<Decimal>,
    #[serde(rename = "startTime")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,
    #[serde(rename = "endTime")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,
    #[serde(rename = "clipSizeType")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clip_size_type: Option<String>,
    #[serde(rename = "clipSizeVal")]
    #[serde(with = "rust_decimal::serde::float_option")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clip_size_val: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Map<String, Value>>,
}

impl CreateOrderRequest {
    /// Start an order payload from its required fields.
    ///
    /// Optional fields stay unset, and are left out of the JSON, until one
    /// of the `with_*` setters is called.
    pub fn new(
        client_order_id: impl Into<String>,
        exchange: Exchange,
        symbol: impl Into<String>,
        asset_category: AssetCategory,
        side: Side,
        quantity: Decimal,
        strategy: ExecutionStrategy,
    ) -> Self {
        Self {
            client_order_id: client_order_id.into(),
            exchange,
            symbol: symbol.into(),
            asset_category,
            side,
            quantity,
            strategy,
            limit_price: None,
            start_time: None,
            end_time: None,
            clip_size_type: None,
            clip_size_val: None,
            params: None,
        }
    }

    pub fn with_limit_price(mut self, limit_price: Decimal) -> Self {
        self.limit_price = Some(limit_price);
        self
    }

    /// Start of the execution window, epoch milliseconds
    pub fn with_start_time(mut self, start_time: i64) -> Self {
        self.start_time = Some(start_time);
        self
    }

    /// End of the execution window, epoch milliseconds
    pub fn with_end_time(mut self, end_time: i64) -> Self {
        self.end_time = Some(end_time);
        self
    }

    pub fn with_clip_size_type(mut self, clip_size_type: impl Into<String>) -> Self {
        self.clip_size_type = Some(clip_size_type.into());
        self
    }

    pub fn with_clip_size_val(mut self, clip_size_val: Decimal) -> Self {
        self.clip_size_val = Some(clip_size_val);
        self
    }

    /// Strategy-specific parameters, e.g. `{"duration_seconds": 300}`
    pub fn with_params(mut self, params: Map<String, Value>) -> Self {
        self.params = Some(params);
        self
    }
}

/// Payload for `order/createMany`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateManyOrdersRequest<'a> {
    pub orders: &'a [CreateOrderRequest],
    #[serde(rename = "allOrNone")]
    pub all_or_none: bool,
}

/// Payload for `order/cancel`: exactly one identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CancelOrderRequest {
    OrderId {
        #[serde(rename = "orderId")]
        order_id: String,
    },
    ClientOrderId {
        #[serde(rename = "clientOrderId")]
        client_order_id: String,
    },
}

/// Payload for `order/cancelMany`: exactly one id list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CancelManyOrdersRequest {
    OrderIds {
        #[serde(rename = "orderIds")]
        order_ids: Vec<String>,
    },
    ClientOrderIds {
        #[serde(rename = "clientOrderIds")]
        client_order_ids: Vec<String>,
    },
}

/// Build a cancel payload. `order_id` takes precedence when both are given.
///
/// # Errors
/// Returns `AnbotoError::InvalidArgument` when neither id is provided.
pub fn format_cancel_order_data(
    order_id: Option<&str>,
    client_order_id: Option<&str>,
) -> Result<CancelOrderRequest> {
    match (order_id, client_order_id) {
        (Some(id), _) => Ok(CancelOrderRequest::OrderId {
            order_id: id.to_string(),
        }),
        (None, Some(id)) => Ok(CancelOrderRequest::ClientOrderId {
            client_order_id: id.to_string(),
        }),
        (None, None) => Err(AnbotoError::invalid_argument(
            "either order_id or client_order_id must be provided",
        )),
    }
}

/// Build a cancel-many payload. `order_ids` takes precedence when both are given.
///
/// # Errors
/// Returns `AnbotoError::InvalidArgument` when neither list is provided.
pub fn format_cancel_many_orders_data(
    order_ids: Option<Vec<String>>,
    client_order_ids: Option<Vec<String>>,
) -> Result<CancelManyOrdersRequest> {
    match (order_ids, client_order_ids) {
        (Some(order_ids), _) => Ok(CancelManyOrdersRequest::OrderIds { order_ids }),
        (None, Some(client_order_ids)) => {
            Ok(CancelManyOrdersRequest::ClientOrderIds { client_order_ids })
        }
        (None, None) => Err(AnbotoError::invalid_argument(
            "either order_ids or client_order_ids must be provided",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn twap_order() -> CreateOrderRequest {
        CreateOrderRequest::new(
            "cid-1",
            Exchange::Binance,
            "ETH/USDT",
            AssetCategory::Spot,
            Side::Buy,
            Decimal::new(15, 1),
            ExecutionStrategy::Twap,
        )
    }

    #[test]
    fn test_create_order_omits_unset_optionals() {
        let body = serde_json::to_string(&twap_order()).unwrap();
        assert_eq!(
            body,
            r#"{"client_order_id":"cid-1","exchange":"BINANCE","symbol":"ETH/USDT","asset_category":"SPOT","side":"BUY","quantity":1.5,"strategy":"TWAP"}"#
        );
    }

    #[test]
    fn test_create_order_includes_supplied_optionals() {
        let mut params = Map::new();
        params.insert("duration_seconds".to_string(), json!(300));

        let order = twap_order()
            .with_limit_price(Decimal::new(250_025, 2))
            .with_clip_size_type("PERCENTAGE")
            .with_params(params);
        let value = serde_json::to_value(&order).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.get("limitPrice"), Some(&json!(2500.25)));
        assert_eq!(object.get("clipSizeType"), Some(&json!("PERCENTAGE")));
        assert_eq!(object.get("params"), Some(&json!({ "duration_seconds": 300 })));
        assert!(!object.contains_key("startTime"));
        assert!(!object.contains_key("endTime"));
        assert!(!object.contains_key("clipSizeVal"));
        assert_eq!(object.len(), 10);
    }

    #[test]
    fn test_create_order_optional_keys_follow_required() {
        let order = twap_order()
            .with_end_time(1_700_000_300_000)
            .with_start_time(1_700_000_000_000);
        let body = serde_json::to_string(&order).unwrap();
        assert!(body.ends_with(
            r#""strategy":"TWAP","startTime":1700000000000,"endTime":1700000300000}"#
        ));
    }

    #[test]
    fn test_decimal_fields_round_to_f64() {
        let quantity: Decimal = "0.123456789012345678901".parse().unwrap();
        let mut order = twap_order().with_clip_size_val(Decimal::new(1, 1));
        order.quantity = quantity;

        let body = serde_json::to_string(&order).unwrap();
        assert!(body.contains(r#""quantity":0.12345678901234568,"#));
        assert!(body.contains(r#""clipSizeVal":0.1"#));

        let parsed: CreateOrderRequest = serde_json::from_str(&body).unwrap();
        assert_ne!(parsed.quantity, quantity);
    }

    #[test]
    fn test_create_many_body_shape() {
        let orders = vec![twap_order()];
        let req = CreateManyOrdersRequest {
            orders: &orders,
            all_or_none: true,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["allOrNone"], json!(true));
        assert_eq!(value["orders"][0]["client_order_id"], json!("cid-1"));
    }

    #[test]
    fn test_cancel_order_by_order_id() {
        let req = format_cancel_order_data(Some("X"), None).unwrap();
        assert_eq!(serde_json::to_value(&req).unwrap(), json!({ "orderId": "X" }));
    }

    #[test]
    fn test_cancel_order_by_client_order_id() {
        let req = format_cancel_order_data(None, Some("Y")).unwrap();
        assert_eq!(serde_json::to_value(&req).unwrap(), json!({ "clientOrderId": "Y" }));
    }

    #[test]
    fn test_cancel_order_prefers_order_id() {
        let req = format_cancel_order_data(Some("X"), Some("Y")).unwrap();
        assert_eq!(
            req,
            CancelOrderRequest::OrderId {
                order_id: "X".to_string()
            }
        );
    }

    #[test]
    fn test_cancel_order_requires_an_id() {
        let err = format_cancel_order_data(None, None).unwrap_err();
        assert!(matches!(err, AnbotoError::InvalidArgument(_)));
    }

    #[test]
    fn test_cancel_many_orders() {
        let ids = vec!["1".to_string(), "2".to_string()];
        let by_order = format_cancel_many_orders_data(Some(ids), None).unwrap();
        assert_eq!(
            serde_json::to_value(&by_order).unwrap(),
            json!({ "orderIds": ["1", "2"] })
        );

        let by_client = format_cancel_many_orders_data(None, Some(vec!["a".into()])).unwrap();
        assert_eq!(
            serde_json::to_value(&by_client).unwrap(),
            json!({ "clientOrderIds": ["a"] })
        );

        let err = format_cancel_many_orders_data(None, None).unwrap_err();
        assert!(matches!(err, AnbotoError::InvalidArgument(_)));
    }
}
