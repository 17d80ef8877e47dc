/*
[INPUT]:  Order payloads and query filters
[OUTPUT]: Signed order requests and API responses
[POS]:    HTTP layer - trading endpoints (require X-SIGN auth)
[UPDATE]: When adding new order endpoints or changing parameters
*/

use crate::http::{AnbotoClient, ApiResponse, Result};
use crate::types::{
    CancelManyOrdersRequest, CancelOrderRequest, CreateManyOrdersRequest, CreateOrderRequest,
};

pub const ORDER_BY_ID_PATH: &str = "/api/v2/trading/order/byId";
pub const ORDER_CANCEL_PATH: &str = "/api/v2/trading/order/cancel";
pub const ORDER_CANCEL_MANY_PATH: &str = "/api/v2/trading/order/cancelMany";
pub const ORDER_CREATE_PATH: &str = "/api/v2/trading/order/create";
pub const ORDER_CREATE_MANY_PATH: &str = "/api/v2/trading/order/createMany";
pub const ORDER_FIND_PATH: &str = "/api/v2/trading/order/find";
pub const ORDER_OPEN_PATH: &str = "/api/v2/trading/order/open";

impl AnbotoClient {
    /// Look up orders by exchange-assigned or client-assigned ids
    ///
    /// GET /api/v2/trading/order/byId?orderIds={..}&clientOrderIds={..}
    /// Empty id lists are left out of the query.
    pub async fn get_orders(
        &self,
        order_ids: &[&str],
        client_order_ids: &[&str],
    ) -> Result<ApiResponse> {
        let mut params = Vec::new();
        if !order_ids.is_empty() {
            params.push(("orderIds", order_ids.join(",")));
        }
        if !client_order_ids.is_empty() {
            params.push(("clientOrderIds", client_order_ids.join(",")));
        }

        self.signed_get(ORDER_BY_ID_PATH, &params).await
    }

    /// Cancel a single order
    ///
    /// POST /api/v2/trading/order/cancel
    pub async fn cancel_order(&self, req: &CancelOrderRequest) -> Result<ApiResponse> {
        self.signed_post(ORDER_CANCEL_PATH, req).await
    }

    /// Cancel several orders at once
    ///
    /// POST /api/v2/trading/order/cancelMany
    pub async fn cancel_many_orders(&self, req: &CancelManyOrdersRequest) -> Result<ApiResponse> {
        self.signed_post(ORDER_CANCEL_MANY_PATH, req).await
    }

    /// Create a new parent order
    ///
    /// POST /api/v2/trading/order/create
    pub async fn create_order(&self, req: &CreateOrderRequest) -> Result<ApiResponse> {
        self.signed_post(ORDER_CREATE_PATH, req).await
    }

    /// Create several orders in one request
    ///
    /// POST /api/v2/trading/order/createMany
    /// With `all_or_none` the service rejects the batch if any order fails.
    pub async fn create_many_orders(
        &self,
        orders: &[CreateOrderRequest],
        all_or_none: bool,
    ) -> Result<ApiResponse> {
        let req = CreateManyOrdersRequest {
            orders,
            all_or_none,
        };
        self.signed_post(ORDER_CREATE_MANY_PATH, &req).await
    }

    /// Query historical orders with optional filters
    ///
    /// GET /api/v2/trading/order/find?startMs={start}&endMs={end}&limit={limit}
    pub async fn find_orders(
        &self,
        start_ms: Option<i64>,
        end_ms: Option<i64>,
        limit: Option<u32>,
    ) -> Result<ApiResponse> {
        let mut params = Vec::new();
        if let Some(start) = start_ms {
            params.push(("startMs", start.to_string()));
        }
        if let Some(end) = end_ms {
            params.push(("endMs", end.to_string()));
        }
        if let Some(l) = limit {
            params.push(("limit", l.to_string()));
        }

        self.signed_get(ORDER_FIND_PATH, &params).await
    }

    /// Query currently open orders
    ///
    /// GET /api/v2/trading/order/open
    pub async fn get_open_orders(&self) -> Result<ApiResponse> {
        self.signed_get(ORDER_OPEN_PATH, &[]).await
    }
}
