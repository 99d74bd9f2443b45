//! HTML markup for the deals page.
//!
//! Plain string templates; every interpolated value goes through `html_escape`.

use crate::card::{CardView, PRICE_DISCLAIMER};
use crate::page::{DealsPage, PageState};
use crate::utils::html_escape;
use chrono::{DateTime, Utc};

pub const SITE_TITLE: &str = "Amazon Deals Hub";
pub const TAGLINE: &str = "Discover the best deals updated daily";
pub const ASSOCIATE_DISCLOSURE: &str = "As an Amazon Associate, I earn from qualifying purchases.";
pub const LOADING_MESSAGE: &str = "Loading products...";

const STYLE_CSS: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background: #f7f7f8; color: #111; }
header { background: #232f3e; color: #fff; padding: 2rem 1rem; text-align: center; }
header h1 { margin: 0; font-size: 2.5rem; }
header p { margin: .5rem 0 0; opacity: .8; }
.search { max-width: 32rem; margin: 1.5rem auto; padding: 0 1rem; text-align: center; }
.search input { width: 100%; height: 3rem; border-radius: 9999px; border: 1px solid #ddd; padding: 0 1.25rem; font-size: 1rem; }
.search small { display: block; margin-top: .75rem; color: #666; }
.status { text-align: center; padding: 4rem 1rem; color: #666; }
.grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1rem; padding: 0 1rem 3rem; }
@media (min-width: 768px) { .grid { grid-template-columns: repeat(4, 1fr); gap: 1.5rem; } }
.card { position: relative; display: block; background: #fff; border: 1px solid #e5e5e5; border-radius: .75rem; padding: 1rem; color: inherit; text-decoration: none; }
.card:hover { box-shadow: 0 8px 24px rgba(0,0,0,.12); }
.posted { font-size: .75rem; color: #666; margin: 0 0 .75rem; }
.thumb { aspect-ratio: 1 / 1; overflow: hidden; border-radius: .5rem; background: #eee; margin-bottom: 1rem; }
.thumb img { width: 100%; height: 100%; object-fit: cover; }
.title { font-weight: 600; min-height: 3rem; margin: 0 0 .75rem; }
.price { font-size: 1.5rem; font-weight: 700; color: #b12704; }
.original { margin-left: .5rem; color: #666; font-size: .875rem; }
.vary { position: absolute; right: 0; bottom: 0; background: #dc2626; color: #fff; font-size: 10px; font-weight: 600; padding: 2px 8px; border-radius: 6px; cursor: help; }
"#;

pub fn render_page(page: &DealsPage, now: DateTime<Utc>) -> String {
    let body = match page.state() {
        PageState::Loading => format!("<div class=\"status\">{}</div>", LOADING_MESSAGE),
        PageState::Empty(message) => format!(
            "<div class=\"status\"><p class=\"empty\">{}</p></div>",
            html_escape(message)
        ),
        PageState::Listing(products) => {
            let cards: String = products
                .into_iter()
                .map(|p| render_card(&CardView::new(p, now)))
                .collect();
            format!("<div class=\"grid\">{}</div>", cards)
        }
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{style}</style>
</head>
<body>
<header><h1>{title}</h1><p>{tagline}</p></header>
<div class="search">
<input type="text" name="q" placeholder="Search..." value="{query}">
<small>{disclosure}</small>
</div>
<main>{body}</main>
</body>
</html>
"#,
        title = SITE_TITLE,
        style = STYLE_CSS,
        tagline = TAGLINE,
        query = html_escape(page.query()),
        disclosure = ASSOCIATE_DISCLOSURE,
        body = body,
    )
}

/// One card; the whole card opens the affiliate link in a new, no-opener tab.
pub fn render_card(card: &CardView<'_>) -> String {
    let original = card
        .original_price
        .as_deref()
        .map(|p| format!("<s class=\"original\">{}</s>", html_escape(p)))
        .unwrap_or_default();

    let vary = if card.price_may_vary {
        format!(
            "<span class=\"vary\" title=\"{}\">Price May Vary &#9432;</span>",
            html_escape(PRICE_DISCLAIMER)
        )
    } else {
        String::new()
    };

    format!(
        "<a class=\"card\" href=\"{href}\" target=\"_blank\" rel=\"noopener noreferrer\">\
<p class=\"posted\">{posted}</p>\
<div class=\"thumb\"><img src=\"{img}\" alt=\"{title}\" loading=\"lazy\"></div>\
<h3 class=\"title\">{title}</h3>\
<div class=\"prices\"><span class=\"price\">{price}</span>{original}</div>\
{vary}</a>",
        href = html_escape(card.affiliate_url),
        posted = html_escape(&card.posted_label),
        img = html_escape(card.image_url),
        title = html_escape(card.title),
        price = html_escape(&card.deal_price),
        original = original,
        vary = vary,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FetchError, Product};
    use crate::page::{NO_PRODUCTS_AVAILABLE, NO_PRODUCTS_FOUND};
    use chrono::{Duration, TimeZone};
    use scraper::{Html, Selector};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap()
    }

    fn sample() -> Vec<Product> {
        vec![
            Product {
                id: "hub".into(),
                title: "USB-C Hub <7-in-1>".into(),
                image_url: "https://img/hub.jpg".into(),
                affiliate_url: "https://amzn.to/hub?tag=deals-20&x=1".into(),
                original_price: Some(39.99),
                deal_price: 24.5,
                posted_date: now() - Duration::minutes(5),
            },
            Product {
                id: "lamp".into(),
                title: "Desk Lamp".into(),
                image_url: "https://img/lamp.jpg".into(),
                affiliate_url: "https://amzn.to/lamp".into(),
                original_price: None,
                deal_price: 12.0,
                posted_date: now() - Duration::days(8),
            },
        ]
    }

    fn select_all(html: &Html, css: &str) -> Vec<String> {
        let selector = Selector::parse(css).unwrap();
        html.select(&selector)
            .map(|e| e.text().collect::<String>().trim().to_string())
            .collect()
    }

    #[test]
    fn loading_page_shows_loading_message() {
        let html = Html::parse_document(&render_page(&DealsPage::new(), now()));

        assert_eq!(select_all(&html, "header h1"), [SITE_TITLE]);
        assert_eq!(select_all(&html, ".status"), [LOADING_MESSAGE]);
        assert!(select_all(&html, "a.card").is_empty());
    }

    #[test]
    fn failed_fetch_renders_no_products_available_with_empty_search() {
        let mut page = DealsPage::new();
        page.finish_load(Err(FetchError::Status { status: 500, body: String::new() }));
        let html = Html::parse_document(&render_page(&page, now()));

        assert_eq!(select_all(&html, ".empty"), [NO_PRODUCTS_AVAILABLE]);
        let input = Selector::parse("input[name=q]").unwrap();
        let value = html.select(&input).next().and_then(|e| e.value().attr("value"));
        assert_eq!(value, Some(""));
    }

    #[test]
    fn unmatched_query_renders_no_products_found() {
        let mut page = DealsPage::new();
        page.finish_load(Ok(sample()));
        page.set_query("tent");
        page.set_debounced_query("tent");
        let html = Html::parse_document(&render_page(&page, now()));

        assert_eq!(select_all(&html, ".empty"), [NO_PRODUCTS_FOUND]);
    }

    #[test]
    fn listing_renders_cards_in_order() {
        let mut page = DealsPage::new();
        page.finish_load(Ok(sample()));
        let html = Html::parse_document(&render_page(&page, now()));

        assert_eq!(select_all(&html, ".title"), ["USB-C Hub <7-in-1>", "Desk Lamp"]);
        assert_eq!(select_all(&html, ".posted"), ["5 minutes ago", "1 week ago"]);
        assert_eq!(select_all(&html, ".price"), ["$24.50", "$12.00"]);
        assert_eq!(select_all(&html, "s.original"), ["$39.99"]);
    }

    #[test]
    fn cards_open_affiliate_link_without_opener() {
        let products = sample();
        let markup = render_card(&CardView::new(&products[0], now()));
        let html = Html::parse_fragment(&markup);
        let anchor = Selector::parse("a.card").unwrap();
        let a = html.select(&anchor).next().unwrap().value();

        assert_eq!(a.attr("href"), Some("https://amzn.to/hub?tag=deals-20&x=1"));
        assert_eq!(a.attr("target"), Some("_blank"));
        assert_eq!(a.attr("rel"), Some("noopener noreferrer"));
    }

    #[test]
    fn price_may_vary_tag_only_on_stale_cards() {
        let products = sample();
        let fresh = Html::parse_fragment(&render_card(&CardView::new(&products[0], now())));
        let stale = Html::parse_fragment(&render_card(&CardView::new(&products[1], now())));
        let tag = Selector::parse(".vary").unwrap();

        assert!(fresh.select(&tag).next().is_none());
        let span = stale.select(&tag).next().unwrap();
        assert_eq!(span.value().attr("title"), Some(PRICE_DISCLAIMER));
    }
}
