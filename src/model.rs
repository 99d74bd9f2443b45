// Core structs: Product, error enums
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::utils::deserialize_datetime;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub affiliate_url: String,
    #[serde(default, deserialize_with = "deserialize_original_price")]
    pub original_price: Option<f64>,
    pub deal_price: f64,
    #[serde(deserialize_with = "deserialize_datetime")]
    pub posted_date: DateTime<Utc>,
}

/// A zero original price is treated the same as a missing one.
fn deserialize_original_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let price = Option::<f64>::deserialize(deserializer)?;
    Ok(price.filter(|p| *p != 0.0))
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("backend responded [{status}]: {body}")]
    Status { status: u16, body: String },
    #[error("failed to decode products: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_null_original_price_are_absent() {
        let json = r#"[
            {"id":"a","title":"A","image_url":"i","affiliate_url":"u","original_price":0,"deal_price":1.5,"posted_date":"2024-05-01T10:00:00Z"},
            {"id":"b","title":"B","image_url":"i","affiliate_url":"u","original_price":null,"deal_price":2,"posted_date":"2024-05-01T10:00:00Z"},
            {"id":"c","title":"C","image_url":"i","affiliate_url":"u","deal_price":3,"posted_date":"2024-05-01T10:00:00Z"},
            {"id":"d","title":"D","image_url":"i","affiliate_url":"u","original_price":49.99,"deal_price":19.99,"posted_date":"2024-05-01T10:00:00Z"}
        ]"#;
        let products: Vec<Product> = serde_json::from_str(json).unwrap();

        assert_eq!(products[0].original_price, None);
        assert_eq!(products[1].original_price, None);
        assert_eq!(products[2].original_price, None);
        assert_eq!(products[3].original_price, Some(49.99));
        assert_eq!(products[1].deal_price, 2.0);
    }
}
