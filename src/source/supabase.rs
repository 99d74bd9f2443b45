// Supabase (PostgREST) backed product source
use crate::config::AppConfig;
use crate::model::{FetchError, Product};
use crate::source::traits::ProductSource;

use reqwest::Client;
use tracing::{info, warn};

pub struct SupabaseSource {
    client: Client,
    base_url: String,
    anon_key: String,
    table: String,
}

impl SupabaseSource {
    pub fn new(base_url: &str, anon_key: &str, table: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(concat!("deals-hub/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            table: table.to_string(),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, FetchError> {
        Self::new(&config.supabase_url, &config.supabase_anon_key, &config.products_table)
    }

    /// Every column, newest first, no pagination and no server-side filter.
    fn build_url(&self) -> String {
        format!(
            "{}/rest/v1/{}?select=*&order=posted_date.desc",
            self.base_url, self.table
        )
    }
}

pub fn decode_products(body: &str) -> Result<Vec<Product>, FetchError> {
    Ok(serde_json::from_str(body)?)
}

#[async_trait::async_trait]
impl ProductSource for SupabaseSource {
    async fn fetch_all_products(&self) -> Result<Vec<Product>, FetchError> {
        let url = self.build_url();
        info!("📡 Fetching products from {}", url);

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            warn!("❌ Backend responded [{}]: {}", status, body);
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let products = decode_products(&body)?;
        info!("✅ Received {} products", products.len());
        Ok(products)
    }
}
