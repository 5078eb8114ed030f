//! Background fetch worker.
//!
//! API calls run on a dedicated thread so the event loop never blocks on the
//! network. The app sends `FetchRequest`s and drains `FetchUpdate`s on each
//! tick; a failed call becomes a status message, never a crash.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

use tracing::{debug, warn};

use volterra_api::{
    AlertRule, ApiClient, PaperAccount, Position, Quote, ScannerRow, Sentiment, WatchlistEntry,
};
use volterra_nav::Market;

#[derive(Debug)]
pub enum FetchRequest {
    Quote { symbol: String, market: Market },
    Sentiment { symbol: String, market: Market },
    Scanner,
    Watchlist,
    Positions,
    Alerts,
    PaperAccount,
}

#[derive(Debug)]
pub enum FetchUpdate {
    Quote(Quote),
    Sentiment(Sentiment),
    Scanner(Vec<ScannerRow>),
    Watchlist(Vec<WatchlistEntry>),
    Positions(Vec<Position>),
    Alerts(Vec<AlertRule>),
    PaperAccount(PaperAccount),
    Failed(String),
}

pub struct WorkerHandle {
    tx: Sender<FetchRequest>,
    rx: Receiver<FetchUpdate>,
}

impl WorkerHandle {
    /// Queue a fetch. A send failure means the worker thread is gone, which
    /// only happens during shutdown; it is safe to ignore.
    pub fn request(&self, request: FetchRequest) {
        let _ = self.tx.send(request);
    }

    /// Drain everything the worker has produced so far.
    pub fn drain(&self) -> Vec<FetchUpdate> {
        let mut updates = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(update) => updates.push(update),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        updates
    }
}

/// Spawn the fetch thread. It exits when the handle (and with it the request
/// sender) is dropped.
pub fn spawn(client: ApiClient) -> WorkerHandle {
    let (req_tx, req_rx) = mpsc::channel::<FetchRequest>();
    let (update_tx, update_rx) = mpsc::channel::<FetchUpdate>();

    thread::spawn(move || {
        for request in req_rx {
            debug!(?request, "fetch");
            let update = perform(&client, request);
            if let FetchUpdate::Failed(ref msg) = update {
                warn!("fetch failed: {msg}");
            }
            if update_tx.send(update).is_err() {
                break;
            }
        }
    });

    WorkerHandle {
        tx: req_tx,
        rx: update_rx,
    }
}

fn perform(client: &ApiClient, request: FetchRequest) -> FetchUpdate {
    let result = match request {
        FetchRequest::Quote { symbol, market } => {
            client.quote(&symbol, market).map(FetchUpdate::Quote)
        }
        FetchRequest::Sentiment { symbol, market } => {
            client.sentiment(&symbol, market).map(FetchUpdate::Sentiment)
        }
        FetchRequest::Scanner => client.scanner().map(FetchUpdate::Scanner),
        FetchRequest::Watchlist => client.watchlist().map(FetchUpdate::Watchlist),
        FetchRequest::Positions => client.positions().map(FetchUpdate::Positions),
        FetchRequest::Alerts => client.alerts().map(FetchUpdate::Alerts),
        FetchRequest::PaperAccount => client.paper_account().map(FetchUpdate::PaperAccount),
    };
    result.unwrap_or_else(|e| FetchUpdate::Failed(e.to_string()))
}
