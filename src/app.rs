// Page driver: one fetch, input lines as the live query, debounced re-render
use crate::debounce::Debouncer;
use crate::page::DealsPage;
use crate::render::render_page;
use crate::source::ProductSource;
use chrono::Utc;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::watch;
use tracing::{info, warn};

/// Destination for rendered page snapshots.
#[async_trait::async_trait]
pub trait SnapshotSink: Send {
    async fn publish(&mut self, html: String);
}

/// Overwrites one HTML file per snapshot.
pub struct FileSink {
    path: String,
}

impl FileSink {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl SnapshotSink for FileSink {
    async fn publish(&mut self, html: String) {
        if let Err(e) = tokio::fs::write(&self.path, html).await {
            warn!("Failed to write page snapshot {}: {}", self.path, e);
        }
    }
}

/// Runs the page until `input` reaches EOF.
///
/// Snapshots go out on first render, when the fetch settles, on every
/// debounced query change, and once more at EOF with the last typed query.
pub async fn run<R, S>(input: R, source: &dyn ProductSource, sink: &mut S, delay: Duration)
where
    R: AsyncBufRead + Unpin,
    S: SnapshotSink,
{
    let mut page = DealsPage::new();
    publish(sink, &page).await;

    let (query_tx, query_rx) = watch::channel(String::new());
    let mut debounced = Debouncer::spawn(query_rx, delay);
    let mut lines = input.lines();

    let fetch = source.fetch_all_products();
    tokio::pin!(fetch);

    loop {
        tokio::select! {
            result = &mut fetch, if page.is_loading() => {
                page.finish_load(result);
                publish(sink, &page).await;
                log_summary(&page);
            }
            line = lines.next_line() => match line {
                // Query is used as typed; `lines` only strips the terminator.
                Ok(Some(query)) => {
                    page.set_query(query.clone());
                    query_tx.send_replace(query);
                }
                Ok(None) => {
                    info!("Input closed.");
                    break;
                }
                Err(e) => {
                    warn!("Failed to read input: {}", e);
                    break;
                }
            },
            changed = debounced.changed() => {
                if changed.is_err() {
                    break;
                }
                let query = debounced.borrow_and_update().clone();
                page.set_debounced_query(query);
                publish(sink, &page).await;
                log_summary(&page);
            }
        }
    }

    if page.is_loading() {
        let result = fetch.await;
        page.finish_load(result);
    }
    let last = page.query().to_string();
    page.set_debounced_query(last);
    publish(sink, &page).await;
    log_summary(&page);
}

async fn publish<S: SnapshotSink>(sink: &mut S, page: &DealsPage) {
    sink.publish(render_page(page, Utc::now())).await;
}

fn log_summary(page: &DealsPage) {
    if page.is_loading() {
        return;
    }
    info!(
        "🔎 Query \"{}\": showing {} of {} products",
        page.debounced_query(),
        page.visible().len(),
        page.products().len()
    );
}
