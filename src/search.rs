use crate::model::Product;

/// Case-insensitive substring match of `query` against each title.
/// An empty query keeps everything; relative order is preserved.
pub fn filter_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let query = query.to_lowercase();
    products
        .iter()
        .filter(|p| p.title.to_lowercase().contains(&query))
        .collect()
}
