// Page view model: fetched records plus live and debounced search queries
use crate::model::{FetchError, Product};
use crate::search::filter_products;
use tracing::{error, info};

pub const NO_PRODUCTS_FOUND: &str = "No products found";
pub const NO_PRODUCTS_AVAILABLE: &str = "No products available";

#[derive(Debug, PartialEq)]
pub enum PageState<'a> {
    Loading,
    Empty(&'static str),
    Listing(Vec<&'a Product>),
}

#[derive(Debug)]
pub struct DealsPage {
    products: Vec<Product>,
    query: String,
    debounced_query: String,
    loading: bool,
}

impl Default for DealsPage {
    fn default() -> Self {
        Self::new()
    }
}

impl DealsPage {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            query: String::new(),
            debounced_query: String::new(),
            loading: true,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The live query, as typed.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn debounced_query(&self) -> &str {
        &self.debounced_query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_debounced_query(&mut self, query: impl Into<String>) {
        self.debounced_query = query.into();
    }

    /// Settles the single fetch. Failures are logged, not retried, and keep
    /// whatever records were already held.
    pub fn finish_load(&mut self, result: Result<Vec<Product>, FetchError>) {
        match result {
            Ok(products) => {
                info!("Loaded {} products", products.len());
                self.products = products;
            }
            Err(e) => {
                error!("Error fetching products: {}", e);
            }
        }
        self.loading = false;
    }

    pub fn visible(&self) -> Vec<&Product> {
        filter_products(&self.products, &self.debounced_query)
    }

    pub fn state(&self) -> PageState<'_> {
        if self.loading {
            return PageState::Loading;
        }

        let visible = self.visible();
        if !visible.is_empty() {
            PageState::Listing(visible)
        } else if self.debounced_query.is_empty() {
            PageState::Empty(NO_PRODUCTS_AVAILABLE)
        } else {
            PageState::Empty(NO_PRODUCTS_FOUND)
        }
    }
}
