//! ReCircuit client - typed access to the storefront API.
//!
//! [`ApiClient`] is the data-access layer a front end builds on: one
//! method per endpoint, request and response types shared with the server
//! through `recircuit-core`, and the session cookie carried automatically
//! between calls. [`CartStore`] persists the client-side cart between
//! runs the way the web client's localStorage did.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
mod error;

pub use cart::CartStore;
pub use error::ClientError;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use recircuit_core::api::{CreateOrderRequest, ErrorBody, LoginRequest, ProductFilter, RegisterRequest};
use recircuit_core::types::ProductId;
use recircuit_core::{Cart, Order, Product, User};

/// Typed client for the storefront API.
///
/// Holds a cookie store, so a `login`/`register` call authenticates every
/// later call made through the same client.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client for a storefront at `base_url`
    /// (e.g. `http://localhost:3000`).
    ///
    /// # Errors
    ///
    /// Returns `ClientError::BaseUrl` if the URL does not parse, or
    /// `ClientError::Http` if the underlying client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().cookie_store(true).build()?;
        Ok(Self {
            http,
            base_url: Url::parse(base_url)?,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.base_url.join(path)?)
    }

    /// List products matching `filter`.
    ///
    /// A `category` of `"All"` is dropped from the query string, matching
    /// what the web UI sent; the server treats it the same way.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Api` for non-2xx responses and
    /// `ClientError::Http` for transport failures.
    pub async fn products(&self, filter: &ProductFilter) -> Result<Vec<Product>, ClientError> {
        let mut filter = filter.clone();
        if filter.category.as_deref() == Some("All") {
            filter.category = None;
        }

        let response = self
            .http
            .get(self.endpoint("/api/products")?)
            .query(&filter)
            .send()
            .await?;
        decode(response).await
    }

    /// Fetch a single product; `Ok(None)` when the id does not exist.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Api` for non-2xx responses other than 404.
    pub async fn product(&self, id: ProductId) -> Result<Option<Product>, ClientError> {
        let response = self
            .http
            .get(self.endpoint(&format!("/api/products/{id}"))?)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        decode(response).await.map(Some)
    }

    /// Log in; the session cookie is stored for subsequent calls.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Api` with status 401 on bad credentials.
    pub async fn login(&self, phone: &str, password: &str) -> Result<User, ClientError> {
        let body = LoginRequest {
            phone: phone.to_owned(),
            password: password.to_owned(),
        };
        let response = self
            .http
            .post(self.endpoint("/api/auth/login")?)
            .json(&body)
            .send()
            .await?;
        decode(response).await
    }

    /// Register an account; a success also logs the client in.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Api` with status 400 on validation failures
    /// (the message names the offending field when there is one).
    pub async fn register(
        &self,
        phone: &str,
        password: &str,
        name: &str,
    ) -> Result<User, ClientError> {
        let body = RegisterRequest {
            phone: phone.to_owned(),
            password: password.to_owned(),
            name: name.to_owned(),
        };
        let response = self
            .http
            .post(self.endpoint("/api/auth/register")?)
            .json(&body)
            .send()
            .await?;
        decode(response).await
    }

    /// Drop the server-side session.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Api` for non-2xx responses.
    pub async fn logout(&self) -> Result<(), ClientError> {
        let response = self
            .http
            .post(self.endpoint("/api/auth/logout")?)
            .send()
            .await?;
        expect_success(response).await.map(|_| ())
    }

    /// The logged-in user's order history.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Api` with status 401 when not logged in.
    pub async fn orders(&self) -> Result<Vec<Order>, ClientError> {
        let response = self.http.get(self.endpoint("/api/orders")?).send().await?;
        decode(response).await
    }

    /// Place an order from an explicit payload.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Api` with status 401 when not logged in.
    pub async fn create_order(&self, request: &CreateOrderRequest) -> Result<Order, ClientError> {
        let response = self
            .http
            .post(self.endpoint("/api/orders")?)
            .json(request)
            .send()
            .await?;
        decode(response).await
    }

    /// Place an order from the cart, shipped to `address`.
    ///
    /// The caller is responsible for clearing the cart once this returns
    /// successfully.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Api` with status 401 when not logged in.
    pub async fn checkout(&self, cart: &Cart, address: &str) -> Result<Order, ClientError> {
        self.create_order(&CreateOrderRequest::from_cart(cart, address))
            .await
    }
}

/// Fail non-2xx responses, decoding the server's error body when present.
async fn expect_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => format!("Request failed with status {status}"),
    };
    Err(ClientError::Api { status, message })
}

/// Decode a JSON response, turning non-2xx statuses into `ClientError::Api`.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    Ok(expect_success(response).await?.json::<T>().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_an_unparseable_base_url() {
        assert!(matches!(
            ApiClient::new("not a url"),
            Err(ClientError::BaseUrl(_))
        ));
        assert!(ApiClient::new("http://localhost:3000").is_ok());
    }

    #[test]
    fn endpoint_joins_against_the_base() {
        let client = ApiClient::new("http://localhost:3000").unwrap();
        let url = client.endpoint("/api/products/3").unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/products/3");
    }
}
