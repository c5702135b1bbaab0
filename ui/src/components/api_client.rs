//! HTTP client for the donation platform REST API.
//!
//! All calls go through the browser `fetch` API and deserialize with
//! serde. The base URL is taken from `MQA_API_URL` at compile time,
//! falling back to the local development server. Errors are collapsed
//! into user-facing Spanish messages at this boundary; the technical
//! detail is logged instead of shown.

use dioxus::prelude::*;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use mqa_common::product::{Category, Product, ProductFilter, ProductStatus};
use mqa_common::user::{AccountStatus, Role, User, UserFilter};

use super::session::use_session;

fn api_base_url() -> String {
    option_env!("MQA_API_URL")
        .filter(|url| !url.is_empty())
        .unwrap_or("http://localhost:3000")
        .to_string()
}

// ─────────────────────────── Wire types ───────────────────────────

#[derive(Serialize)]
struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Clone, Debug, Deserialize)]
struct LoginResponse {
    token: String,
}

#[derive(Serialize)]
struct QuantityUpdate {
    quantity: u32,
}

/// Payload for the product create/edit form.
#[derive(Clone, Debug, Serialize)]
pub struct ProductDraft {
    pub food_name: String,
    pub category: Category,
    /// Wire format `DD/MM/YYYY`.
    pub expiration_date: String,
    pub quantity: u32,
    pub status: ProductStatus,
    pub image: String,
}

/// Payload for the employee create/edit form. `password` is only sent
/// when creating; edits leave the stored credential untouched.
#[derive(Clone, Debug, Serialize)]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
    /// Wire format `DD/MM/YYYY`.
    pub birth_date: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub role: Role,
    pub phone: String,
    pub address: String,
    pub status: AccountStatus,
}

/// Payload for client self-registration and the admin client form.
/// Self-registration sends no status and lets the API pick the default.
#[derive(Clone, Debug, Serialize)]
pub struct ClientDraft {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
    /// Wire format `DD/MM/YYYY`.
    pub birth_date: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub phone: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AccountStatus>,
}

// ─────────────────────────── Errors ───────────────────────────

#[derive(Debug)]
enum ApiError {
    /// The server answered an error status with a `message` body.
    Message(String),
    /// The server answered an error status without a usable message.
    Status(u16),
    /// The request never completed or the body was unreadable.
    Transport(String),
}

impl ApiError {
    /// Collapse to the message shown to the visitor. `fallback` covers
    /// status errors the API did not explain.
    fn into_user_message(self, fallback: &str) -> String {
        match self {
            ApiError::Message(message) => message,
            ApiError::Status(status) => {
                tracing::error!("request rejected with HTTP {status}");
                fallback.to_string()
            }
            ApiError::Transport(detail) => {
                tracing::error!("request failed: {detail}");
                "Error al conectar con el servidor.".to_string()
            }
        }
    }
}

/// Pull the API's own `message` field out of an error body, if present.
#[cfg(any(target_family = "wasm", test))]
fn body_message(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .filter(|message| !message.trim().is_empty())
}

fn parse_payload<T: DeserializeOwned>(body: &str) -> Result<T, String> {
    serde_json::from_str(body).map_err(|e| {
        tracing::error!("unexpected API payload: {e}");
        "Error al conectar con el servidor.".to_string()
    })
}

// ─────────────────────────── Client ───────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
    bearer: Option<String>,
}

impl ApiClient {
    /// Anonymous client for the public endpoints.
    pub fn new() -> Self {
        Self {
            base_url: api_base_url(),
            bearer: None,
        }
    }

    pub fn with_bearer(bearer: Option<String>) -> Self {
        Self {
            base_url: api_base_url(),
            bearer,
        }
    }

    // ── Products ──

    pub async fn fetch_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, String> {
        let path = if filter.is_empty() {
            "/api/foods/all".to_string()
        } else {
            format!("/api/foods/filter?{}", encode_query(&filter.query_pairs()))
        };
        let body = self
            .get(&path)
            .await
            .map_err(|e| e.into_user_message("Error al cargar los productos"))?;
        parse_payload(&body)
    }

    pub async fn create_product(&self, draft: &ProductDraft) -> Result<(), String> {
        let body = encode_body(draft)?;
        self.post("/api/foods", body)
            .await
            .map_err(|e| e.into_user_message("Error al guardar el producto"))?;
        Ok(())
    }

    pub async fn update_product(&self, id: &str, draft: &ProductDraft) -> Result<(), String> {
        let body = encode_body(draft)?;
        self.put(&format!("/api/foods/{id}"), body)
            .await
            .map_err(|e| e.into_user_message("Error al guardar el producto"))?;
        Ok(())
    }

    /// Overwrite a product's stock count, leaving the rest untouched.
    pub async fn update_quantity(&self, id: &str, quantity: u32) -> Result<(), String> {
        let body = encode_body(&QuantityUpdate { quantity })?;
        self.put(&format!("/api/foods/{id}"), body)
            .await
            .map_err(|e| e.into_user_message("Error al actualizar el inventario"))?;
        Ok(())
    }

    pub async fn delete_product(&self, id: &str) -> Result<(), String> {
        self.delete(&format!("/api/foods/{id}"))
            .await
            .map_err(|e| e.into_user_message("Error al eliminar el producto"))?;
        Ok(())
    }

    // ── Users ──

    pub async fn fetch_employees(&self, filter: &UserFilter) -> Result<Vec<User>, String> {
        self.fetch_users("/api/users/employees/all", filter).await
    }

    pub async fn fetch_clients(&self, filter: &UserFilter) -> Result<Vec<User>, String> {
        self.fetch_users("/api/users/clients/all", filter).await
    }

    async fn fetch_users(&self, all_path: &str, filter: &UserFilter) -> Result<Vec<User>, String> {
        let path = if filter.is_empty() {
            all_path.to_string()
        } else {
            format!("/api/users/filter?{}", encode_query(&filter.query_pairs()))
        };
        let body = self
            .get(&path)
            .await
            .map_err(|e| e.into_user_message("Error al cargar los usuarios"))?;
        parse_payload(&body)
    }

    pub async fn create_employee(&self, draft: &EmployeeDraft) -> Result<(), String> {
        let body = encode_body(draft)?;
        self.post("/api/users/employee", body)
            .await
            .map_err(|e| e.into_user_message("Error al guardar el empleado"))?;
        Ok(())
    }

    pub async fn update_employee(&self, id: &str, draft: &EmployeeDraft) -> Result<(), String> {
        let body = encode_body(draft)?;
        self.put(&format!("/api/users/{id}"), body)
            .await
            .map_err(|e| e.into_user_message("Error al guardar el empleado"))?;
        Ok(())
    }

    /// Self-registration; the API answers 400/409 with its own message
    /// when the data is invalid or the email is already taken.
    pub async fn register_client(&self, draft: &ClientDraft) -> Result<(), String> {
        let body = encode_body(draft)?;
        self.post("/api/users/client", body)
            .await
            .map_err(|e| e.into_user_message("Hubo un error al registrar. Intenta más tarde."))?;
        Ok(())
    }

    pub async fn update_client(&self, id: &str, draft: &ClientDraft) -> Result<(), String> {
        let body = encode_body(draft)?;
        self.put(&format!("/api/users/{id}"), body)
            .await
            .map_err(|e| e.into_user_message("Error al guardar el cliente"))?;
        Ok(())
    }

    pub async fn delete_user(&self, id: &str) -> Result<(), String> {
        self.delete(&format!("/api/users/{id}"))
            .await
            .map_err(|e| e.into_user_message("Error al eliminar el registro"))?;
        Ok(())
    }

    // ── Auth ──

    /// Exchange credentials for a raw JWT.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, String> {
        let body = encode_body(&LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })?;
        let resp = self
            .post("/api/auth/login", body)
            .await
            .map_err(|e| e.into_user_message("Error de autenticación"))?;
        let parsed: LoginResponse = parse_payload(&resp)?;
        Ok(parsed.token)
    }

    // ── Request helpers ──

    async fn get(&self, path: &str) -> Result<String, ApiError> {
        fetch_json(
            &format!("{}{}", self.base_url, path),
            "GET",
            None,
            self.bearer.as_deref(),
        )
        .await
    }

    async fn post(&self, path: &str, body: String) -> Result<String, ApiError> {
        fetch_json(
            &format!("{}{}", self.base_url, path),
            "POST",
            Some(body),
            self.bearer.as_deref(),
        )
        .await
    }

    async fn put(&self, path: &str, body: String) -> Result<String, ApiError> {
        fetch_json(
            &format!("{}{}", self.base_url, path),
            "PUT",
            Some(body),
            self.bearer.as_deref(),
        )
        .await
    }

    async fn delete(&self, path: &str) -> Result<String, ApiError> {
        fetch_json(
            &format!("{}{}", self.base_url, path),
            "DELETE",
            None,
            self.bearer.as_deref(),
        )
        .await
    }
}

fn encode_body<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| {
        tracing::error!("request encoding failed: {e}");
        "Error al conectar con el servidor.".to_string()
    })
}

/// Client that carries the current session's credential, for calls the
/// API authenticates.
pub fn use_api() -> ApiClient {
    let session = use_session();
    let bearer = session.read().bearer();
    ApiClient::with_bearer(bearer)
}

// ─────────────────────────── Fetch plumbing ───────────────────────────

fn encode_query(pairs: &[(&str, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", encode_component(value)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(target_family = "wasm")]
fn encode_component(value: &str) -> String {
    js_sys::encode_uri_component(value).into()
}

#[cfg(not(target_family = "wasm"))]
fn encode_component(value: &str) -> String {
    value.to_string()
}

#[cfg(target_family = "wasm")]
async fn fetch_json(
    url: &str,
    method: &str,
    body: Option<String>,
    bearer: Option<&str>,
) -> Result<String, ApiError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);

    let has_body = body.is_some();
    if let Some(body_str) = body {
        opts.set_body(&wasm_bindgen::JsValue::from_str(&body_str));
    }

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| ApiError::Transport(format!("request creation failed: {e:?}")))?;

    if has_body {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|e| ApiError::Transport(format!("header set failed: {e:?}")))?;
    }
    if let Some(token) = bearer {
        request
            .headers()
            .set("Authorization", &format!("Bearer {token}"))
            .map_err(|e| ApiError::Transport(format!("header set failed: {e:?}")))?;
    }

    let window = web_sys::window().ok_or(ApiError::Transport("no window object".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::Transport(format!("fetch failed: {e:?}")))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| ApiError::Transport("response cast failed".to_string()))?;

    let status = resp.status();
    let text = JsFuture::from(
        resp.text()
            .map_err(|e| ApiError::Transport(format!("text extraction failed: {e:?}")))?,
    )
    .await
    .map_err(|e| ApiError::Transport(format!("text await failed: {e:?}")))?;

    let text_str = text
        .as_string()
        .ok_or(ApiError::Transport("response not a string".to_string()))?;

    if status >= 400 {
        return Err(match body_message(&text_str) {
            Some(message) => ApiError::Message(message),
            None => ApiError::Status(status),
        });
    }

    Ok(text_str)
}

#[cfg(not(target_family = "wasm"))]
async fn fetch_json(
    _url: &str,
    _method: &str,
    _body: Option<String>,
    _bearer: Option<&str>,
) -> Result<String, ApiError> {
    Err(ApiError::Transport(
        "HTTP requests only available in WASM".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_message_prefers_api_text() {
        let body = r#"{"message":"El correo ya está registrado"}"#;
        assert_eq!(
            body_message(body),
            Some("El correo ya está registrado".to_string())
        );
    }

    #[test]
    fn body_message_ignores_blank_and_missing() {
        assert_eq!(body_message(r#"{"message":"  "}"#), None);
        assert_eq!(body_message(r#"{"error":"x"}"#), None);
        assert_eq!(body_message("not json"), None);
    }

    #[test]
    fn status_error_falls_back_to_operation_message() {
        let err = ApiError::Status(500);
        assert_eq!(
            err.into_user_message("Error al guardar el producto"),
            "Error al guardar el producto"
        );
    }

    #[test]
    fn query_pairs_are_joined_with_ampersands() {
        let pairs = [
            ("name", "arroz".to_string()),
            ("category", "Semillas".to_string()),
        ];
        assert_eq!(encode_query(&pairs), "name=arroz&category=Semillas");
    }
}
