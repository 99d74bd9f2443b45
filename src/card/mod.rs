// Card module: everything a single product card derives from its record.

pub mod time_ago;
pub mod price;

pub use price::{format_price, price_may_vary};
pub use time_ago::time_ago;

use crate::model::Product;
use chrono::{DateTime, Utc};

pub const PRICE_DISCLAIMER: &str = "Prices and offers may change. Check Amazon for latest price.";

/// Display values for one product, computed at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView<'a> {
    pub title: &'a str,
    pub image_url: &'a str,
    pub affiliate_url: &'a str,
    pub posted_label: String,
    pub deal_price: String,
    pub original_price: Option<String>,
    pub price_may_vary: bool,
}

impl<'a> CardView<'a> {
    pub fn new(product: &'a Product, now: DateTime<Utc>) -> Self {
        Self {
            title: &product.title,
            image_url: &product.image_url,
            affiliate_url: &product.affiliate_url,
            posted_label: time_ago(product.posted_date, now),
            deal_price: format_price(product.deal_price),
            original_price: product.original_price.map(format_price),
            price_may_vary: price_may_vary(product.posted_date, now),
        }
    }
}
