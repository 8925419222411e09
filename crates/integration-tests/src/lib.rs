//! Test harness for the Counterline client crates.
//!
//! [`StubBackend`] is an in-process axum server speaking the backend's
//! wire contract: bearer-token auth with one seeded account per role, a
//! stock-limited cart, and the admin product/order endpoints the flows
//! exercise. Every request is recorded so tests can assert not just on
//! results but on which requests were (or were not) made.
//!
//! [`TestContext`] wires a [`counterline_client::ApiClient`] to a fresh
//! backend; each test gets its own server on an ephemeral port.

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::indexing_slicing)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard};

use axum::extract::{Path, Request, State};
use axum::http::{HeaderMap, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use counterline_client::{ApiClient, ClientConfig, SessionStore};
use serde::Deserialize;
use serde_json::{Value, json};

/// Install a test-friendly tracing subscriber, honoring `RUST_LOG`.
/// Safe to call from every test; only the first call wins.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub const CUSTOMER_USERNAME: &str = "customer1";
pub const ADMIN_USERNAME: &str = "admin001";
pub const EMPLOYEE_USERNAME: &str = "cashier1";
pub const PASSWORD: &str = "hunter22";

const CUSTOMER_TOKEN: &str = "stub-customer-token";
const ADMIN_TOKEN: &str = "stub-admin-token";
const EMPLOYEE_TOKEN: &str = "stub-employee-token";

/// The stock-limited variation every cart test leans on.
pub const LIMITED_VARIATION: i32 = 42;
pub const LIMITED_STOCK: i32 = 3;
/// A second variation with plenty of stock.
pub const DEEP_VARIATION: i32 = 7;

/// One request the backend saw, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
}

#[derive(Debug)]
struct CartLine {
    id: i32,
    variation_id: i32,
    quantity: i32,
}

#[derive(Debug)]
struct Inner {
    stock: HashMap<i32, i32>,
    prices: HashMap<i32, f64>,
    cart: Vec<CartLine>,
    next_cart_id: i32,
    products: Vec<Value>,
    next_product_id: i32,
    next_order_id: i32,
    registered: HashMap<String, String>,
    next_customer_id: i32,
    requests: Vec<RecordedRequest>,
}

impl Inner {
    fn new() -> Self {
        Self {
            stock: HashMap::from([(LIMITED_VARIATION, LIMITED_STOCK), (DEEP_VARIATION, 100)]),
            prices: HashMap::from([(LIMITED_VARIATION, 19.99), (DEEP_VARIATION, 4.5)]),
            cart: Vec::new(),
            next_cart_id: 1,
            products: Vec::new(),
            next_product_id: 1,
            next_order_id: 1,
            registered: HashMap::new(),
            next_customer_id: 2,
            requests: Vec::new(),
        }
    }

    fn cart_line_json(&self, line: &CartLine) -> Value {
        json!({
            "PK_CartItem": line.id,
            "Customer_id": 1,
            "Quantity": line.quantity,
            "Status": "active",
            "VariationID": line.variation_id,
            "variation_name": format!("Variation {}", line.variation_id),
            "Price": self.prices.get(&line.variation_id).copied(),
        })
    }

    fn order_json(&mut self, order_type: &str, total: f64) -> Value {
        let id = self.next_order_id;
        self.next_order_id += 1;
        json!({
            "PK_POSOrder": id,
            "Total_Amount": total,
            "Total_Payment": total,
            "PaymentMethodID": 5,
            "Status": "pending",
            "Type_Order": order_type,
        })
    }
}

#[derive(Clone)]
struct StubState {
    inner: Arc<Mutex<Inner>>,
}

impl StubState {
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("stub state mutex poisoned")
    }
}

/// In-process backend bound to an ephemeral port.
pub struct StubBackend {
    addr: SocketAddr,
    state: StubState,
    server: tokio::task::JoinHandle<()>,
}

impl StubBackend {
    /// Bind and start serving. The server runs until the backend is
    /// dropped.
    ///
    /// # Panics
    ///
    /// Panics if no ephemeral port can be bound.
    pub async fn start() -> Self {
        let state = StubState {
            inner: Arc::new(Mutex::new(Inner::new())),
        };
        let app = router(state.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub backend");
        let addr = listener.local_addr().expect("stub backend local addr");
        let server = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve stub backend");
        });
        Self {
            addr,
            state,
            server,
        }
    }

    #[must_use]
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Every request seen so far, in order.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().requests.clone()
    }

    /// How many requests hit paths starting with `prefix`.
    #[must_use]
    pub fn requests_under(&self, prefix: &str) -> usize {
        self.state
            .lock()
            .requests
            .iter()
            .filter(|r| r.path.starts_with(prefix))
            .count()
    }

    /// Remaining stock for a variation.
    #[must_use]
    pub fn stock(&self, variation_id: i32) -> i32 {
        self.state
            .lock()
            .stock
            .get(&variation_id)
            .copied()
            .unwrap_or(0)
    }

    /// The server-side cart quantity for a variation, zero if absent.
    #[must_use]
    pub fn cart_quantity(&self, variation_id: i32) -> i32 {
        self.state
            .lock()
            .cart
            .iter()
            .find(|line| line.variation_id == variation_id)
            .map_or(0, |line| line.quantity)
    }
}

impl Drop for StubBackend {
    fn drop(&mut self) {
        self.server.abort();
    }
}

/// A fresh backend plus a client pointed at it.
pub struct TestContext {
    pub backend: StubBackend,
    pub client: ApiClient,
}

impl TestContext {
    /// # Panics
    ///
    /// Panics if the backend cannot start or its URL is rejected.
    pub async fn start() -> Self {
        init_tracing();
        let backend = StubBackend::start().await;
        let config = ClientConfig::new(backend.url()).expect("stub backend url");
        let client = ApiClient::new(&config, SessionStore::new());
        Self { backend, client }
    }
}

fn router(state: StubState) -> Router {
    Router::new()
        .route("/auth/login", post(login))
        .route("/cart", get(get_cart))
        .route("/cart/", post(add_to_cart))
        .route("/cart/clear", delete(clear_cart))
        .route(
            "/cart/{id}",
            axum::routing::put(update_cart_item).delete(remove_cart_item),
        )
        .route("/user/register", post(register_user))
        .route("/user/orders", post(place_user_order))
        .route("/admin/products/", get(list_products).post(create_product))
        .route("/admin/products/{id}", delete(delete_product))
        .route("/admin/orders/", post(create_admin_order))
        .layer(middleware::from_fn_with_state(state.clone(), record))
        .with_state(state)
}

async fn record(State(state): State<StubState>, request: Request, next: Next) -> Response {
    state.lock().requests.push(RecordedRequest {
        method: request.method().to_string(),
        path: request.uri().path().to_string(),
        query: request.uri().query().map(ToOwned::to_owned),
    });
    next.run(request).await
}

fn error(status: StatusCode, detail: &str) -> Response {
    (status, Json(json!({ "detail": detail }))).into_response()
}

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

fn require_customer(headers: &HeaderMap) -> Result<(), Response> {
    if bearer(headers) == Some(CUSTOMER_TOKEN) {
        Ok(())
    } else {
        Err(error(StatusCode::UNAUTHORIZED, "Not authenticated"))
    }
}

fn require_back_office(headers: &HeaderMap) -> Result<(), Response> {
    match bearer(headers) {
        Some(ADMIN_TOKEN | EMPLOYEE_TOKEN) => Ok(()),
        _ => Err(error(StatusCode::UNAUTHORIZED, "Not authenticated")),
    }
}

#[derive(Deserialize)]
struct LoginBody {
    username: String,
    password: String,
}

async fn login(State(state): State<StubState>, Json(body): Json<LoginBody>) -> Response {
    let seeded = match body.username.as_str() {
        CUSTOMER_USERNAME => Some((CUSTOMER_TOKEN, 2, PASSWORD)),
        ADMIN_USERNAME => Some((ADMIN_TOKEN, 1, PASSWORD)),
        EMPLOYEE_USERNAME => Some((EMPLOYEE_TOKEN, 18, PASSWORD)),
        _ => None,
    };
    if let Some((token, role_id, expected)) = seeded {
        if body.password == expected {
            return login_response(token, role_id);
        }
        return error(StatusCode::UNAUTHORIZED, "Incorrect username or password");
    }

    // Registered accounts are always customers and share the customer
    // token.
    let inner = state.lock();
    match inner.registered.get(&body.username) {
        Some(expected) if *expected == body.password => login_response(CUSTOMER_TOKEN, 2),
        _ => error(StatusCode::UNAUTHORIZED, "Incorrect username or password"),
    }
}

fn login_response(token: &str, role_id: i32) -> Response {
    Json(json!({
        "access_token": token,
        "token_type": "bearer",
        "role_id": role_id,
        "account_status": "ACTIVE",
    }))
    .into_response()
}

#[derive(Deserialize)]
struct RegisterBody {
    username: String,
    password: String,
    name: String,
}

async fn register_user(State(state): State<StubState>, Json(body): Json<RegisterBody>) -> Response {
    let mut inner = state.lock();
    let taken = matches!(
        body.username.as_str(),
        CUSTOMER_USERNAME | ADMIN_USERNAME | EMPLOYEE_USERNAME
    ) || inner.registered.contains_key(&body.username);
    if taken {
        return error(StatusCode::BAD_REQUEST, "Username already registered");
    }

    inner.registered.insert(body.username, body.password);
    let id = inner.next_customer_id;
    inner.next_customer_id += 1;
    Json(json!({
        "PK_Customer": id,
        "AccountID": id + 100,
        "Name": body.name,
        "Status": "active",
    }))
    .into_response()
}

async fn get_cart(State(state): State<StubState>, headers: HeaderMap) -> Response {
    if let Err(denied) = require_customer(&headers) {
        return denied;
    }
    let inner = state.lock();
    let lines: Vec<Value> = inner
        .cart
        .iter()
        .map(|line| inner.cart_line_json(line))
        .collect();
    Json(lines).into_response()
}

#[derive(Deserialize)]
struct CartAddBody {
    variation_id: i32,
    quantity: i32,
}

async fn add_to_cart(
    State(state): State<StubState>,
    headers: HeaderMap,
    Json(body): Json<CartAddBody>,
) -> Response {
    if let Err(denied) = require_customer(&headers) {
        return denied;
    }
    let mut inner = state.lock();
    let available = inner.stock.get(&body.variation_id).copied().unwrap_or(0);
    let held = inner
        .cart
        .iter()
        .find(|line| line.variation_id == body.variation_id)
        .map_or(0, |line| line.quantity);
    if held + body.quantity > available {
        return error(StatusCode::BAD_REQUEST, "Not enough stock");
    }

    if let Some(position) = inner
        .cart
        .iter()
        .position(|line| line.variation_id == body.variation_id)
    {
        inner.cart[position].quantity += body.quantity;
        let response = inner.cart_line_json(&inner.cart[position]);
        return Json(response).into_response();
    }

    let id = inner.next_cart_id;
    inner.next_cart_id += 1;
    inner.cart.push(CartLine {
        id,
        variation_id: body.variation_id,
        quantity: body.quantity,
    });
    let response = inner.cart_line_json(&inner.cart[inner.cart.len() - 1]);
    Json(response).into_response()
}

#[derive(Deserialize)]
struct QuantityBody {
    quantity: i32,
}

async fn update_cart_item(
    State(state): State<StubState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
    Json(body): Json<QuantityBody>,
) -> Response {
    if let Err(denied) = require_customer(&headers) {
        return denied;
    }
    let mut inner = state.lock();
    let Some(position) = inner.cart.iter().position(|line| line.id == id) else {
        return error(StatusCode::NOT_FOUND, "Cart item not found");
    };
    let available = inner
        .stock
        .get(&inner.cart[position].variation_id)
        .copied()
        .unwrap_or(0);
    if body.quantity > available {
        return error(StatusCode::BAD_REQUEST, "Not enough stock");
    }
    inner.cart[position].quantity = body.quantity;
    let response = inner.cart_line_json(&inner.cart[position]);
    Json(response).into_response()
}

async fn remove_cart_item(
    State(state): State<StubState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
) -> Response {
    if let Err(denied) = require_customer(&headers) {
        return denied;
    }
    let mut inner = state.lock();
    let before = inner.cart.len();
    inner.cart.retain(|line| line.id != id);
    if inner.cart.len() == before {
        return error(StatusCode::NOT_FOUND, "Cart item not found");
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn clear_cart(State(state): State<StubState>, headers: HeaderMap) -> Response {
    if let Err(denied) = require_customer(&headers) {
        return denied;
    }
    state.lock().cart.clear();
    StatusCode::NO_CONTENT.into_response()
}

async fn place_user_order(State(state): State<StubState>, headers: HeaderMap) -> Response {
    if let Err(denied) = require_customer(&headers) {
        return denied;
    }
    let mut inner = state.lock();
    if inner.cart.is_empty() {
        return error(StatusCode::BAD_REQUEST, "Cart is empty");
    }
    let total: f64 = inner
        .cart
        .iter()
        .map(|line| {
            inner.prices.get(&line.variation_id).copied().unwrap_or(0.0)
                * f64::from(line.quantity)
        })
        .sum();
    for index in 0..inner.cart.len() {
        let (variation_id, quantity) =
            (inner.cart[index].variation_id, inner.cart[index].quantity);
        if let Some(stock) = inner.stock.get_mut(&variation_id) {
            *stock -= quantity;
        }
    }
    inner.cart.clear();
    let order = inner.order_json("Online", total);
    Json(order).into_response()
}

async fn list_products(State(state): State<StubState>, headers: HeaderMap) -> Response {
    if let Err(denied) = require_back_office(&headers) {
        return denied;
    }
    Json(state.lock().products.clone()).into_response()
}

async fn create_product(
    State(state): State<StubState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Err(denied) = require_back_office(&headers) {
        return denied;
    }
    if body
        .get("Name")
        .and_then(Value::as_str)
        .is_none_or(|name| name.trim().is_empty())
    {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "detail": [{
                    "loc": ["body", "Name"],
                    "msg": "field required",
                    "type": "value_error.missing",
                }]
            })),
        )
            .into_response();
    }

    let mut inner = state.lock();
    let id = inner.next_product_id;
    inner.next_product_id += 1;
    let product = json!({
        "PK_Product": id,
        "Name": body.get("Name").cloned().unwrap_or(Value::Null),
        "CategoryID": body.get("CategoryID").cloned().unwrap_or(json!(1)),
        "BrandID": body.get("BrandID").cloned().unwrap_or(json!(1)),
        "variations": [],
    });
    inner.products.push(product.clone());
    Json(product).into_response()
}

async fn delete_product(
    State(state): State<StubState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
) -> Response {
    if let Err(denied) = require_back_office(&headers) {
        return denied;
    }
    state
        .lock()
        .products
        .retain(|p| p.get("PK_Product").and_then(Value::as_i64) != Some(i64::from(id)));
    StatusCode::NO_CONTENT.into_response()
}

#[derive(Deserialize)]
struct AdminOrderLine {
    #[serde(rename = "VariationID")]
    variation_id: i32,
    #[serde(rename = "Quantity")]
    quantity: i32,
    #[serde(rename = "Unit_Price")]
    unit_price: f64,
}

#[derive(Deserialize)]
struct AdminOrderBody {
    #[serde(rename = "Type_Order")]
    order_type: String,
    order_lines: Vec<AdminOrderLine>,
}

async fn create_admin_order(
    State(state): State<StubState>,
    headers: HeaderMap,
    Json(body): Json<AdminOrderBody>,
) -> Response {
    if let Err(denied) = require_back_office(&headers) {
        return denied;
    }
    if body.order_lines.is_empty() {
        return error(StatusCode::BAD_REQUEST, "Order must have at least one line");
    }

    let mut inner = state.lock();
    for line in &body.order_lines {
        let available = inner.stock.get(&line.variation_id).copied().unwrap_or(0);
        if line.quantity > available {
            return error(StatusCode::BAD_REQUEST, "Not enough stock");
        }
    }
    for line in &body.order_lines {
        if let Some(stock) = inner.stock.get_mut(&line.variation_id) {
            *stock -= line.quantity;
        }
    }
    let total: f64 = body
        .order_lines
        .iter()
        .map(|line| line.unit_price * f64::from(line.quantity))
        .sum();
    let order = inner.order_json(&body.order_type, total);
    Json(order).into_response()
}
