//! Request metadata logged by every handler.

use std::{convert::Infallible, net::SocketAddr};

use axum::{
  extract::{ConnectInfo, FromRequestParts},
  http::{header, request::Parts},
};

/// Caller details, recorded for observability only and never validated.
///
/// The client address is present when the server was started with
/// `into_make_service_with_connect_info`.
#[derive(Debug, Clone, Default)]
pub struct ClientMeta {
  pub user_agent:  Option<String>,
  pub client_addr: Option<SocketAddr>,
}

impl<S: Send + Sync> FromRequestParts<S> for ClientMeta {
  type Rejection = Infallible;

  async fn from_request_parts(
    parts:  &mut Parts,
    _state: &S,
  ) -> Result<Self, Self::Rejection> {
    let user_agent = parts
      .headers
      .get(header::USER_AGENT)
      .and_then(|v| v.to_str().ok())
      .map(str::to_owned);
    let client_addr = parts
      .extensions
      .get::<ConnectInfo<SocketAddr>>()
      .map(|ConnectInfo(addr)| *addr);
    Ok(Self { user_agent, client_addr })
  }
}

impl ClientMeta {
  pub fn log(&self, route: &'static str) {
    tracing::info!(
      route,
      user_agent = self.user_agent.as_deref().unwrap_or("-"),
      client_address = %self
        .client_addr
        .map_or_else(|| "-".to_owned(), |a| a.ip().to_string()),
      "request received"
    );
  }
}
