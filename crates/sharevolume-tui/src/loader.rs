use crate::event::Event;
use sharevolume_spider::stock::model::ViewModel;
use sharevolume_spider::stock::sec::{Cik, SharesClient};
use sharevolume_spider::stock::snapshot;
use sharevolume_spider::{Config, LoadError};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

/// A load the [`App`](crate::app::App) wants performed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Request {
    /// Read the bundled snapshot.
    Local,
    /// Fetch live data for `cik`; `generation` orders it against other remote requests.
    Remote { generation: u64, cik: Cik },
}

/// The outcome of a [`Request`], sent back to the UI as [`Event::Loaded`].
#[derive(Debug)]
pub enum Loaded {
    Local(Result<ViewModel, LoadError>),
    Remote {
        generation: u64,
        cik: Cik,
        result: Result<ViewModel, LoadError>,
    },
}

/// Runs requests on the tokio runtime, each as its own task.
///
/// Tasks are never cancelled or timed out; whatever they resolve to is sent back on the event
/// channel, and the app decides whether it's still wanted.
#[derive(Debug)]
pub struct Loader {
    client: SharesClient,
    snapshot: String,
    sx: mpsc::UnboundedSender<Event>,
}

impl Loader {
    pub fn new(config: &Config, sx: mpsc::UnboundedSender<Event>) -> Result<Self, LoadError> {
        Ok(Self {
            client: SharesClient::new(config)?,
            snapshot: config.snapshot.clone(),
            sx,
        })
    }

    pub fn dispatch(&self, request: Request) -> JoinHandle<()> {
        let sx = self.sx.clone();
        match request {
            Request::Local => {
                let path = self.snapshot.clone();
                tokio::spawn(async move {
                    let result = snapshot::load(&path).await;
                    send(&sx, Loaded::Local(result));
                })
            }
            Request::Remote { generation, cik } => {
                let client = self.client.clone();
                tokio::spawn(async move {
                    let result = client.load(&cik).await;
                    send(
                        &sx,
                        Loaded::Remote {
                            generation,
                            cik,
                            result,
                        },
                    );
                })
            }
        }
    }
}

fn send(sx: &mpsc::UnboundedSender<Event>, loaded: Loaded) {
    trace!("load finished: {loaded:?}");
    if sx.send(Event::Loaded(loaded)).is_err() {
        debug!("event receiver closed; dropping load outcome");
    }
}
