/*
[INPUT]:  Parsed subcommand arguments and an authenticated client
[OUTPUT]: API responses rendered for stdout
[POS]:    Command layer - maps CLI subcommands to order endpoints
[UPDATE]: When adding subcommands or order endpoint parameters
*/

use anboto_adapter::{
    AnbotoClient, ApiResponse, AssetCategory, CreateOrderRequest, Exchange, ExecutionStrategy,
    Side, format_cancel_many_orders_data, format_cancel_order_data,
};
use anyhow::{Context, Result};
use clap::{ArgAction, Args, Subcommand};
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use tracing::{debug, warn};

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create a single order
    CreateOrder(CreateOrderArgs),
    /// Create several orders in one request
    CreateMany {
        /// Order as a JSON object; repeat for each order
        #[arg(long = "order", value_name = "JSON", required = true, value_parser = parse_order)]
        orders: Vec<CreateOrderRequest>,
        /// Reject the whole batch if any order fails
        #[arg(long, value_name = "BOOL", default_value_t = true, action = ArgAction::Set)]
        all_or_none: bool,
    },
    /// Look up orders by id
    GetOrders {
        #[arg(long = "order-id", value_name = "ID")]
        order_ids: Vec<String>,
        #[arg(long = "client-order-id", value_name = "ID")]
        client_order_ids: Vec<String>,
    },
    /// List currently open orders
    OpenOrders,
    /// Query historical orders
    FindOrders {
        #[arg(long, value_name = "MS")]
        start_ms: Option<i64>,
        #[arg(long, value_name = "MS")]
        end_ms: Option<i64>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Cancel one order; --order-id wins when both ids are given
    CancelOrder {
        #[arg(long, value_name = "ID")]
        order_id: Option<String>,
        #[arg(long, value_name = "ID")]
        client_order_id: Option<String>,
    },
    /// Cancel several orders by order ids or client order ids
    CancelMany {
        #[arg(long = "order-id", value_name = "ID")]
        order_ids: Vec<String>,
        #[arg(long = "client-order-id", value_name = "ID")]
        client_order_ids: Vec<String>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct CreateOrderArgs {
    /// Defaults to a random UUID
    #[arg(long, value_name = "ID")]
    pub client_order_id: Option<String>,
    #[arg(long)]
    pub exchange: Exchange,
    #[arg(long)]
    pub symbol: String,
    #[arg(long)]
    pub asset_category: AssetCategory,
    #[arg(long)]
    pub side: Side,
    #[arg(long)]
    pub quantity: Decimal,
    #[arg(long)]
    pub strategy: ExecutionStrategy,
    #[arg(long, value_name = "PRICE")]
    pub limit_price: Option<Decimal>,
    #[arg(long, value_name = "MS")]
    pub start_time: Option<i64>,
    #[arg(long, value_name = "MS")]
    pub end_time: Option<i64>,
    #[arg(long, value_name = "TYPE")]
    pub clip_size_type: Option<String>,
    #[arg(long, value_name = "VALUE")]
    pub clip_size_val: Option<Decimal>,
    /// Strategy parameter as key=value; the value is parsed as JSON when possible
    #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
    pub params: Vec<(String, Value)>,
}

impl CreateOrderArgs {
    pub fn into_request(self) -> CreateOrderRequest {
        let client_order_id = self
            .client_order_id
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        let mut req = CreateOrderRequest::new(
            client_order_id,
            self.exchange,
            self.symbol,
            self.asset_category,
            self.side,
            self.quantity,
            self.strategy,
        );
        if let Some(price) = self.limit_price {
            req = req.with_limit_price(price);
        }
        if let Some(start) = self.start_time {
            req = req.with_start_time(start);
        }
        if let Some(end) = self.end_time {
            req = req.with_end_time(end);
        }
        if let Some(clip_type) = self.clip_size_type {
            req = req.with_clip_size_type(clip_type);
        }
        if let Some(clip_val) = self.clip_size_val {
            req = req.with_clip_size_val(clip_val);
        }
        if !self.params.is_empty() {
            let params: Map<String, Value> = self.params.into_iter().collect();
            req = req.with_params(params);
        }
        req
    }
}

/// Parse `key=value`. Values that are not valid JSON are kept as strings.
pub fn parse_param(raw: &str) -> std::result::Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{raw}`"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in `{raw}`"));
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

/// Parse one `--order` value into a create payload
pub fn parse_order(raw: &str) -> std::result::Result<CreateOrderRequest, String> {
    serde_json::from_str(raw).map_err(|err| format!("invalid order JSON: {err}"))
}

fn non_empty(ids: Vec<String>) -> Option<Vec<String>> {
    if ids.is_empty() { None } else { Some(ids) }
}

/// Run one subcommand against the API
pub async fn execute(client: &AnbotoClient, command: Command) -> Result<ApiResponse> {
    debug!(?command, "executing command");
    let response = match command {
        Command::CreateOrder(args) => {
            let req = args.into_request();
            client
                .create_order(&req)
                .await
                .with_context(|| format!("create order {}", req.client_order_id))?
        }
        Command::CreateMany {
            orders,
            all_or_none,
        } => client
            .create_many_orders(&orders, all_or_none)
            .await
            .with_context(|| format!("create {} orders", orders.len()))?,
        Command::GetOrders {
            order_ids,
            client_order_ids,
        } => {
            let order_ids: Vec<&str> = order_ids.iter().map(String::as_str).collect();
            let client_order_ids: Vec<&str> = client_order_ids.iter().map(String::as_str).collect();
            client
                .get_orders(&order_ids, &client_order_ids)
                .await
                .context("get orders")?
        }
        Command::OpenOrders => client.get_open_orders().await.context("get open orders")?,
        Command::FindOrders {
            start_ms,
            end_ms,
            limit,
        } => client
            .find_orders(start_ms, end_ms, limit)
            .await
            .context("find orders")?,
        Command::CancelOrder {
            order_id,
            client_order_id,
        } => {
            let req = format_cancel_order_data(order_id.as_deref(), client_order_id.as_deref())?;
            client.cancel_order(&req).await.context("cancel order")?
        }
        Command::CancelMany {
            order_ids,
            client_order_ids,
        } => {
            let req =
                format_cancel_many_orders_data(non_empty(order_ids), non_empty(client_order_ids))?;
            client
                .cancel_many_orders(&req)
                .await
                .context("cancel orders")?
        }
    };

    if !response.status().is_success() {
        warn!(status = %response.status(), "API returned non-success status");
    }
    Ok(response)
}

/// Pretty JSON for JSON bodies, status line plus text otherwise
pub fn render(response: &ApiResponse) -> Result<String> {
    match response {
        ApiResponse::Json { body, .. } => {
            serde_json::to_string_pretty(body).context("render JSON response")
        }
        ApiResponse::Raw(raw) => Ok(format!("HTTP {}\n{}", raw.status, raw.text())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_args() -> CreateOrderArgs {
        CreateOrderArgs {
            client_order_id: None,
            exchange: Exchange::Binance,
            symbol: "BTC/USDT".to_string(),
            asset_category: AssetCategory::Spot,
            side: Side::Sell,
            quantity: Decimal::new(25, 2),
            strategy: ExecutionStrategy::Twap,
            limit_price: None,
            start_time: None,
            end_time: None,
            clip_size_type: None,
            clip_size_val: None,
            params: Vec::new(),
        }
    }

    #[test]
    fn test_parse_param_json_value() {
        assert_eq!(
            parse_param("duration_seconds=300").unwrap(),
            ("duration_seconds".to_string(), json!(300))
        );
        assert_eq!(
            parse_param("reduce_only=true").unwrap(),
            ("reduce_only".to_string(), json!(true))
        );
    }

    #[test]
    fn test_parse_param_falls_back_to_string() {
        assert_eq!(
            parse_param("urgency=high").unwrap(),
            ("urgency".to_string(), json!("high"))
        );
        assert_eq!(parse_param("note=").unwrap(), ("note".to_string(), json!("")));
    }

    #[test]
    fn test_parse_param_rejects_malformed() {
        assert!(parse_param("no-separator").is_err());
        assert!(parse_param("=5").is_err());
    }

    #[test]
    fn test_into_request_generates_client_order_id() {
        let req = create_args().into_request();
        assert!(uuid::Uuid::parse_str(&req.client_order_id).is_ok());
        assert!(req.params.is_none());
        assert!(req.limit_price.is_none());
    }

    #[test]
    fn test_into_request_copies_optionals() {
        let mut args = create_args();
        args.client_order_id = Some("cid-9".to_string());
        args.limit_price = Some(Decimal::new(65_000, 0));
        args.start_time = Some(1_700_000_000_000);
        args.clip_size_type = Some("PERCENTAGE".to_string());
        args.params = vec![("duration_seconds".to_string(), json!(600))];

        let req = args.into_request();
        assert_eq!(req.client_order_id, "cid-9");
        assert_eq!(req.limit_price, Some(Decimal::new(65_000, 0)));
        assert_eq!(req.start_time, Some(1_700_000_000_000));
        assert!(req.end_time.is_none());
        assert_eq!(req.clip_size_type.as_deref(), Some("PERCENTAGE"));
        assert_eq!(
            req.params.unwrap().get("duration_seconds"),
            Some(&json!(600))
        );
    }

    #[test]
    fn test_parse_order_reads_wire_json() {
        let order = parse_order(
            r#"{"client_order_id":"cid-7","exchange":"OKX","symbol":"BTC/USDT","asset_category":"FUTURE","side":"SHORT_SELL","quantity":2.5,"strategy":"VWAP","limitPrice":60000}"#,
        )
        .unwrap();
        assert_eq!(order.client_order_id, "cid-7");
        assert_eq!(order.exchange, Exchange::Okx);
        assert_eq!(order.side, Side::ShortSell);
        assert_eq!(order.quantity, Decimal::new(25, 1));
        assert_eq!(order.limit_price, Some(Decimal::new(60_000, 0)));
        assert!(order.params.is_none());
    }

    #[test]
    fn test_parse_order_rejects_incomplete_json() {
        let err = parse_order(r#"{"client_order_id":"cid-7"}"#).unwrap_err();
        assert!(err.starts_with("invalid order JSON"));
    }

    #[test]
    fn test_render_raw_response() {
        let response = ApiResponse::from_parts(
            anboto_adapter::StatusCode::SERVICE_UNAVAILABLE,
            Some("text/plain".to_string()),
            b"maintenance".to_vec(),
        );
        assert_eq!(render(&response).unwrap(), "HTTP 503 Service Unavailable\nmaintenance");
    }

    #[test]
    fn test_render_json_response() {
        let response = ApiResponse::from_parts(
            anboto_adapter::StatusCode::OK,
            Some("application/json".to_string()),
            br#"{"success":true}"#.to_vec(),
        );
        assert_eq!(render(&response).unwrap(), "{\n  \"success\": true\n}");
    }
}
