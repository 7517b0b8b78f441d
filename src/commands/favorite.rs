//! Favorite Commands
//!
//! Binding for the customer favorite toggle endpoint.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::error::{UiError, UiResult};
use crate::models::FavoriteResponse;

pub const FAVORITE_METHOD: &str = "POST";
const CONTENT_TYPE_HEADER: &str = "Content-Type";
const JSON_CONTENT_TYPE: &str = "application/json";
/// Header carrying the anti-forgery token
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Characters escaped when the property id is placed in the path
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[async_trait(?Send)]
pub trait FavoriteApi {
    /// Flip the favorite state of a property for the signed-in customer
    async fn toggle_favorite(&self, property_id: &str, csrf_token: Option<&str>) -> UiResult<FavoriteResponse>;
}

/// Build `{endpoint}/{property_id}`
pub fn favorite_url(endpoint: &str, property_id: &str) -> String {
    format!(
        "{}/{}",
        endpoint.trim_end_matches('/'),
        utf8_percent_encode(property_id, PATH_SEGMENT)
    )
}

/// Headers sent with the toggle request. The request itself has no body.
pub fn request_headers(csrf_token: Option<&str>) -> Vec<(&'static str, String)> {
    let mut headers = vec![(CONTENT_TYPE_HEADER, JSON_CONTENT_TYPE.to_string())];
    if let Some(token) = csrf_token {
        headers.push((CSRF_HEADER, token.to_string()));
    }
    headers
}

/// Map an HTTP status and raw body to the endpoint's answer
pub fn decode_favorite(status: u16, body: &str) -> UiResult<FavoriteResponse> {
    if !(200..300).contains(&status) {
        return Err(UiError::Status(status));
    }
    serde_json::from_str(body).map_err(|e| UiError::Decode(e.to_string()))
}

/// `fetch`-backed implementation used in the browser
pub struct FetchFavoriteApi {
    endpoint: String,
}

impl FetchFavoriteApi {
    pub fn new(endpoint: &str) -> Self {
        Self { endpoint: endpoint.to_string() }
    }
}

#[async_trait(?Send)]
impl FavoriteApi for FetchFavoriteApi {
    async fn toggle_favorite(&self, property_id: &str, csrf_token: Option<&str>) -> UiResult<FavoriteResponse> {
        let window = web_sys::window().ok_or(UiError::NoWindow)?;

        let headers = Headers::new()?;
        for (name, value) in request_headers(csrf_token) {
            headers.set(name, &value)?;
        }

        let init = RequestInit::new();
        init.set_method(FAVORITE_METHOD);
        init.set_headers(&headers);

        let url = favorite_url(&self.endpoint, property_id);
        let request = Request::new_with_str_and_init(&url, &init)?;

        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await?
            .dyn_into()?;
        let body = JsFuture::from(response.text()?).await?;
        let body = body.as_string().unwrap_or_default();
        decode_favorite(response.status(), &body)
    }
}
