use anyhow::{Result, ensure};
use async_trait::async_trait;
use reqwest::Client;
use std::{fmt::Debug, time::Duration};

/// User-Agent sent with every tile request, as tile servers require.
const USER_AGENT: &str = concat!("tilemosaic/", env!("CARGO_PKG_VERSION"));

/// Fetches the raw bytes behind a tile URL.
///
/// Implementations report any non-success outcome as an error; there is
/// no retrying. A failed tile fails the whole region request.
#[async_trait]
pub trait TileTransport: Debug + Send + Sync {
	/// Retrieves the resource at `url`.
	async fn get(&self, url: &str) -> Result<Vec<u8>>;
}

/// HTTP(S) transport backed by a shared [`reqwest::Client`].
#[derive(Debug)]
pub struct HttpTransport {
	client: Client,
}

impl HttpTransport {
	/// Builds the transport with its HTTP client.
	///
	/// # Errors
	/// Returns an error if the TLS backend cannot be initialized.
	pub fn new() -> Result<HttpTransport> {
		let client = Client::builder()
			.user_agent(USER_AGENT)
			.tcp_keepalive(Duration::from_secs(600))
			.build()?;
		Ok(HttpTransport { client })
	}
}

#[async_trait]
impl TileTransport for HttpTransport {
	async fn get(&self, url: &str) -> Result<Vec<u8>> {
		let response = self.client.get(url).send().await?;
		ensure!(
			response.status().is_success(),
			"HTTP request failed with status {}",
			response.status()
		);
		Ok(response.bytes().await?.to_vec())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn builds_a_client() {
		HttpTransport::new().unwrap();
	}

	#[test]
	fn user_agent_names_the_crate() {
		assert!(USER_AGENT.starts_with("tilemosaic/"));
	}
}
