// SPDX-License-Identifier: MPL-2.0
//! Background metadata extraction.
//!
//! The [`MetadataWorker`] owns a dispatcher task that hands every request to
//! the blocking thread pool, so a slow analysis never stalls the UI thread.
//! Every request gets exactly one response, even if the analyzer panics.
//! Requests carry a [`RequestId`]; responses echo it so the caller can tell
//! a current answer from a stale one. There is no cancellation: a superseded
//! request still runs to completion and its response is simply ignored.

use crate::application::port::MetadataAnalyzer;
use crate::domain::media::MediaFile;
use crate::domain::metadata::MetadataRecord;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Correlates a response with the request that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

impl RequestId {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// What the worker is asked to do.
#[derive(Debug, Clone)]
pub enum RequestKind {
    /// Load the analyzer ahead of the first file.
    Warmup,
    /// Analyze a file.
    Analyze(MediaFile),
}

#[derive(Debug, Clone)]
pub struct WorkerRequest {
    pub id: RequestId,
    pub kind: RequestKind,
}

/// Outcome of a request.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseKind {
    /// Warm-up finished.
    Ready,
    /// Analysis finished; `None` when nothing was found.
    Metadata(Option<MetadataRecord>),
    /// The request failed.
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkerResponse {
    pub id: RequestId,
    pub kind: ResponseKind,
}

/// Handle to the background metadata worker.
///
/// Dropping the handle closes the request channel, which stops the
/// dispatcher once in-flight requests have been handed off.
#[derive(Debug)]
pub struct MetadataWorker {
    request_tx: mpsc::UnboundedSender<WorkerRequest>,
    response_rx: mpsc::UnboundedReceiver<WorkerResponse>,
    next_id: u64,
}

impl MetadataWorker {
    /// Starts the worker.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn spawn(analyzer: Arc<dyn MetadataAnalyzer>) -> Self {
        // Requests: unbounded (the UI thread must never wait to enqueue)
        // Responses: unbounded, one per request
        let (request_tx, mut request_rx) = mpsc::unbounded_channel::<WorkerRequest>();
        let (response_tx, response_rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            while let Some(request) = request_rx.recv().await {
                let analyzer = Arc::clone(&analyzer);
                let response_tx = response_tx.clone();
                tokio::spawn(async move {
                    let id = request.id;
                    let task =
                        tokio::task::spawn_blocking(move || run_request(analyzer.as_ref(), request));
                    // A panicked analysis is answered with an error.
                    let response = task.await.unwrap_or_else(|error| {
                        tracing::warn!(id = id.0, %error, "metadata request panicked");
                        WorkerResponse {
                            id,
                            kind: ResponseKind::Error(format!("analyzer panicked: {error}")),
                        }
                    });
                    if response_tx.send(response).is_err() {
                        tracing::debug!("metadata worker handle dropped, discarding response");
                    }
                });
            }
            tracing::debug!("metadata worker stopped");
        });

        Self {
            request_tx,
            response_rx,
            next_id: 0,
        }
    }

    /// Asks the worker to warm up its analyzer.
    pub fn warm_up(&mut self) -> RequestId {
        self.send(RequestKind::Warmup)
    }

    /// Asks the worker to analyze `file`.
    pub fn analyze(&mut self, file: MediaFile) -> RequestId {
        self.send(RequestKind::Analyze(file))
    }

    fn send(&mut self, kind: RequestKind) -> RequestId {
        self.next_id += 1;
        let id = RequestId(self.next_id);
        if self.request_tx.send(WorkerRequest { id, kind }).is_err() {
            tracing::warn!(id = id.0, "metadata worker is not running");
        }
        id
    }

    /// Takes the next response without waiting.
    pub fn try_recv(&mut self) -> Option<WorkerResponse> {
        self.response_rx.try_recv().ok()
    }

    /// Waits for the next response.
    ///
    /// Returns `None` once the worker has stopped and every response has
    /// been received.
    pub async fn recv(&mut self) -> Option<WorkerResponse> {
        self.response_rx.recv().await
    }
}

fn run_request(analyzer: &dyn MetadataAnalyzer, request: WorkerRequest) -> WorkerResponse {
    let kind = match request.kind {
        RequestKind::Warmup => match analyzer.warm_up() {
            Ok(()) => ResponseKind::Ready,
            Err(e) => ResponseKind::Error(e.to_string()),
        },
        RequestKind::Analyze(file) => match analyzer.analyze(&file) {
            Ok(record) => ResponseKind::Metadata(record),
            Err(e) => ResponseKind::Error(e.to_string()),
        },
    };
    WorkerResponse {
        id: request.id,
        kind,
    }
}
