//! Shared helpers for integration tests.
//!
//! Provides an in-process stub of the storefront REST API so the clients can
//! be exercised end-to-end without a network. The stub implements the same
//! endpoint table the real backend exposes, including its error shapes: the
//! `{error}` bodies on auth failures, the `{error, order_id?}` body on
//! declined checkouts, and the 403 on the admin listing.
//!
//! Card-number rules for checkout:
//! - ending `0002` - payment declined, but the order row is recorded first
//! - ending `0003` - payment declined, nothing recorded
//! - anything else - order recorded as paid

#![allow(clippy::unwrap_used)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use url::Url;

use little_sprout_client::ClientConfig;

/// Seeded regular account.
pub const ALICE: (&str, &str) = ("alice", "growing-up-fast");

/// Seeded admin account.
pub const MEREDITH: (&str, &str) = ("meredith", "root-and-stem");

/// Fixed creation timestamp stamped on every stub order.
const CREATED_AT: &str = "2026-03-02T10:30:00Z";

/// Knobs for misbehaving-backend scenarios.
#[derive(Debug, Default)]
pub struct StubOptions {
    /// Make the admin listing fail with HTTP 500 regardless of privilege.
    pub fail_admin_orders: bool,
}

#[derive(Clone)]
struct StubUser {
    id: i32,
    username: String,
    email: String,
    password: String,
    is_admin: bool,
    token: String,
}

#[derive(Clone)]
struct StubProduct {
    id: i32,
    name: &'static str,
    description: &'static str,
    price: &'static str,
    image_url: &'static str,
}

#[derive(Clone)]
struct StubOrder {
    id: i32,
    user_id: i32,
    username: String,
    user_email: String,
    product_id: i32,
    product_name: String,
    product_price: String,
    product_image: String,
    card_last_four: String,
    status: &'static str,
}

struct StubState {
    options: StubOptions,
    users: Mutex<Vec<StubUser>>,
    orders: Mutex<Vec<StubOrder>>,
    products: Vec<StubProduct>,
    next_user_id: AtomicI32,
    next_order_id: AtomicI32,
}

impl StubState {
    fn seeded(options: StubOptions) -> Self {
        let users = vec![
            StubUser {
                id: 1,
                username: ALICE.0.to_string(),
                email: "alice@example.com".to_string(),
                password: ALICE.1.to_string(),
                is_admin: false,
                token: "tok-alice".to_string(),
            },
            StubUser {
                id: 2,
                username: MEREDITH.0.to_string(),
                email: "meredith@example.com".to_string(),
                password: MEREDITH.1.to_string(),
                is_admin: true,
                token: "tok-meredith".to_string(),
            },
        ];
        let products = vec![
            StubProduct {
                id: 1,
                name: "Baby Romper",
                description: "Soft cotton romper for newborns",
                price: "19.99",
                image_url: "/images/romper.jpg",
            },
            StubProduct {
                id: 2,
                name: "Baby Dress",
                description: "Cute floral dress",
                price: "29.99",
                image_url: "/images/dress.jpg",
            },
        ];
        Self {
            options,
            users: Mutex::new(users),
            orders: Mutex::new(Vec::new()),
            products,
            next_user_id: AtomicI32::new(3),
            next_order_id: AtomicI32::new(1),
        }
    }
}

/// An in-process stub backend bound to an ephemeral port.
pub struct StubBackend {
    addr: SocketAddr,
}

impl StubBackend {
    /// Spawn a stub with default behavior.
    pub async fn spawn() -> Self {
        Self::spawn_with(StubOptions::default()).await
    }

    /// Spawn a stub with the given failure knobs.
    pub async fn spawn_with(options: StubOptions) -> Self {
        let state = Arc::new(StubState::seeded(options));
        let app = router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub backend");
        let addr = listener.local_addr().expect("stub backend address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub backend crashed");
        });

        Self { addr }
    }

    /// Client configuration pointing at this stub.
    #[must_use]
    pub fn config(&self) -> ClientConfig {
        let url = Url::parse(&format!("http://{}/api/", self.addr)).expect("stub base url");
        ClientConfig::with_base_url(url)
    }
}

fn router(state: Arc<StubState>) -> Router {
    Router::new()
        .route("/api/auth/login/", post(login))
        .route("/api/auth/register/", post(register))
        .route("/api/auth/me/", get(me))
        .route("/api/products/", get(list_products))
        .route("/api/products/{id}/", get(get_product))
        .route("/api/orders/", get(list_orders).post(create_order))
        .route("/api/orders/{id}/", get(get_order))
        .route("/api/admin/orders/", get(admin_orders))
        .with_state(state)
}

fn user_json(user: &StubUser) -> Value {
    json!({
        "id": user.id,
        "username": user.username,
        "email": user.email,
        "is_staff": user.is_admin,
    })
}

fn product_json(product: &StubProduct) -> Value {
    json!({
        "id": product.id,
        "name": product.name,
        "description": product.description,
        "price": product.price,
        "imageUrl": product.image_url,
    })
}

fn order_json(order: &StubOrder, with_owner: bool) -> Value {
    let mut body = json!({
        "id": order.id,
        "product": order.product_id,
        "product_name": order.product_name,
        "product_price": order.product_price,
        "product_image": order.product_image,
        "card_last_four": order.card_last_four,
        "status": order.status,
        "created_at": CREATED_AT,
    });
    if with_owner {
        body["user"] = json!(order.user_id);
        body["username"] = json!(order.username);
        body["user_email"] = json!(order.user_email);
    }
    body
}

/// Resolve the `Authorization: Token <token>` header to a seeded user.
fn auth_user(state: &StubState, headers: &HeaderMap) -> Option<StubUser> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Token "))?;
    state
        .users
        .lock()
        .unwrap()
        .iter()
        .find(|u| u.token == token)
        .cloned()
}

async fn login(State(state): State<Arc<StubState>>, Json(body): Json<Value>) -> Response {
    let username = body["username"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();

    let users = state.users.lock().unwrap();
    match users.iter().find(|u| u.username == username) {
        // Unknown user: no error field, so clients fall back to their
        // generic message.
        None => (StatusCode::UNAUTHORIZED, Json(json!({}))).into_response(),
        Some(user) if user.password != password => (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "Invalid credentials"})),
        )
            .into_response(),
        Some(user) => (
            StatusCode::OK,
            Json(json!({"token": user.token, "user": user_json(user)})),
        )
            .into_response(),
    }
}

async fn register(State(state): State<Arc<StubState>>, Json(body): Json<Value>) -> Response {
    let username = body["username"].as_str().unwrap_or_default().to_string();
    let email = body["email"].as_str().unwrap_or_default().to_string();
    let password = body["password"].as_str().unwrap_or_default().to_string();

    let mut users = state.users.lock().unwrap();
    if users.iter().any(|u| u.username == username) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Username already taken"})),
        )
            .into_response();
    }

    let user = StubUser {
        id: state.next_user_id.fetch_add(1, Ordering::SeqCst),
        token: format!("tok-{username}"),
        username,
        email,
        password,
        is_admin: false,
    };
    let response = (
        StatusCode::CREATED,
        Json(json!({"token": user.token, "user": user_json(&user)})),
    )
        .into_response();
    users.push(user);
    response
}

async fn me(State(state): State<Arc<StubState>>, headers: HeaderMap) -> Response {
    match auth_user(&state, &headers) {
        Some(user) => (StatusCode::OK, Json(user_json(&user))).into_response(),
        None => (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "Invalid token"})),
        )
            .into_response(),
    }
}

async fn list_products(State(state): State<Arc<StubState>>) -> Response {
    let products: Vec<Value> = state.products.iter().map(product_json).collect();
    (StatusCode::OK, Json(Value::Array(products))).into_response()
}

async fn get_product(State(state): State<Arc<StubState>>, Path(id): Path<i32>) -> Response {
    match state.products.iter().find(|p| p.id == id) {
        Some(product) => (StatusCode::OK, Json(product_json(product))).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Product not found"})),
        )
            .into_response(),
    }
}

async fn create_order(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let Some(user) = auth_user(&state, &headers) else {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "Authentication required"})),
        )
            .into_response();
    };

    let product_id = body["product_id"].as_i64().unwrap_or_default();
    let Some(product) = state.products.iter().find(|p| i64::from(p.id) == product_id) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Product not found"})),
        )
            .into_response();
    };

    let card_number = body["card_number"].as_str().unwrap_or_default();
    let card_last_four = card_number
        .chars()
        .rev()
        .take(4)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect::<String>();

    // Declined with nothing recorded.
    if card_number.ends_with("0003") {
        return (
            StatusCode::PAYMENT_REQUIRED,
            Json(json!({"error": "Card declined"})),
        )
            .into_response();
    }

    let status = if card_number.ends_with("0002") {
        "failed"
    } else {
        "paid"
    };

    let order = StubOrder {
        id: state.next_order_id.fetch_add(1, Ordering::SeqCst),
        user_id: user.id,
        username: user.username.clone(),
        user_email: user.email.clone(),
        product_id: product.id,
        product_name: product.name.to_string(),
        product_price: product.price.to_string(),
        product_image: product.image_url.to_string(),
        card_last_four,
        status,
    };
    let mut orders = state.orders.lock().unwrap();

    // Declined after the order row was persisted: the error body carries
    // the recorded order's id.
    if status == "failed" {
        let response = (
            StatusCode::PAYMENT_REQUIRED,
            Json(json!({"error": "Card declined", "order_id": order.id})),
        )
            .into_response();
        orders.push(order);
        return response;
    }

    let response = (StatusCode::CREATED, Json(order_json(&order, false))).into_response();
    orders.push(order);
    response
}

async fn list_orders(State(state): State<Arc<StubState>>, headers: HeaderMap) -> Response {
    let Some(user) = auth_user(&state, &headers) else {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "Authentication required"})),
        )
            .into_response();
    };

    let orders = state.orders.lock().unwrap();
    let body: Vec<Value> = orders
        .iter()
        .filter(|o| o.user_id == user.id)
        .map(|o| order_json(o, false))
        .collect();
    (StatusCode::OK, Json(Value::Array(body))).into_response()
}

async fn get_order(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Response {
    let Some(user) = auth_user(&state, &headers) else {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "Authentication required"})),
        )
            .into_response();
    };

    let orders = state.orders.lock().unwrap();
    match orders.iter().find(|o| o.id == id && o.user_id == user.id) {
        Some(order) => (StatusCode::OK, Json(order_json(order, false))).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Order not found"})),
        )
            .into_response(),
    }
}

async fn admin_orders(State(state): State<Arc<StubState>>, headers: HeaderMap) -> Response {
    if state.options.fail_admin_orders {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "boom"})),
        )
            .into_response();
    }

    let Some(user) = auth_user(&state, &headers) else {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "Authentication required"})),
        )
            .into_response();
    };
    if !user.is_admin {
        return (StatusCode::FORBIDDEN, Json(json!({"error": "Forbidden"}))).into_response();
    }

    let orders = state.orders.lock().unwrap();
    let body: Vec<Value> = orders.iter().map(|o| order_json(o, true)).collect();
    (StatusCode::OK, Json(Value::Array(body))).into_response()
}
