//! Background fetches whose results are picked up by polling once per frame.
//!
//! Native builds run the future on the Tokio runtime entered in `main`; web
//! builds run it on the JS event loop. Either way the output arrives on a
//! `flume` channel and a repaint is requested so the next frame sees it.

use std::future::Future;

use flume::{Receiver, TryRecvError};

/// A background fetch in flight.
#[derive(Debug)]
pub struct Pending<T> {
    receiver: Receiver<T>,
}

/// Outcome of polling a [`Pending`] fetch.
#[derive(Debug, PartialEq, Eq)]
pub enum Poll<T> {
    Ready(T),
    Waiting,
    /// The task ended without producing a value.
    Lost,
}

impl<T> Pending<T> {
    pub fn poll(&self) -> Poll<T> {
        match self.receiver.try_recv() {
            Ok(value) => Poll::Ready(value),
            Err(TryRecvError::Empty) => Poll::Waiting,
            Err(TryRecvError::Disconnected) => Poll::Lost,
        }
    }
}

/// Starts `future` in the background.
pub fn spawn_fetch<T, F>(ctx: &egui::Context, future: F) -> Pending<T>
where
    T: Send + 'static,
    F: Future<Output = T> + Send + 'static,
{
    let (sender, receiver) = flume::bounded(1);
    let ctx = ctx.clone();

    let task = async move {
        let output = future.await;
        // The page may have dropped the receiver already.
        let _ = sender.send(output);
        ctx.request_repaint();
    };

    #[cfg(not(target_arch = "wasm32"))]
    tokio::spawn(task);

    #[cfg(target_arch = "wasm32")]
    wasm_bindgen_futures::spawn_local(task);

    Pending { receiver }
}
