use crate::api::Notifier;
use core::fmt::{Debug, Write};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::net::TcpListener;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Serve `router` on an ephemeral local port, returning the base URL.
///
/// # Panics
///
/// If we can't bind a local port.
pub async fn serve(router: axum::Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("could not bind a local port");
    let addr = listener
        .local_addr()
        .expect("bound listener has no address");

    tokio::spawn(async move { axum::serve(listener, router).await });

    format!("http://{addr}")
}

/// A notifier that remembers everything it was asked to show.
#[derive(Debug, Default, Clone)]
pub struct Recorder(Arc<Mutex<Vec<String>>>);

impl Recorder {
    /// Everything shown so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl Notifier for Recorder {
    fn notify(&self, message: &str) {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}

/// A tracing layer that keeps every event as a line of text, like
/// `ERROR API Call Failed: ... path="/x"`.
#[derive(Debug, Default, Clone)]
pub struct Logs(Arc<Mutex<Vec<String>>>);

impl Logs {
    /// A subscriber that sends everything to this layer. Install it with
    /// `tracing::subscriber::set_default` for the length of a test.
    pub fn subscriber(&self) -> impl Subscriber + Send + Sync {
        tracing_subscriber::registry().with(self.clone())
    }

    /// Every event seen so far, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl<S: Subscriber> Layer<S> for Logs {
    fn on_event(&self, event: &Event<'_>, _: Context<'_, S>) {
        let mut line = Line(event.metadata().level().to_string());
        event.record(&mut line);

        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.0);
    }
}

/// Builds up one line of `Logs`.
struct Line(String);

impl Visit for Line {
    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        let _ = if field.name() == "message" {
            write!(self.0, " {value:?}")
        } else {
            write!(self.0, " {}={value:?}", field.name())
        };
    }
}

