use futures::{FutureExt, StreamExt};
use ratatui::crossterm::event::{
    Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind, MouseEvent,
};
use std::time::Duration;
use tokio::sync::mpsc;

use crate::app::AppResult;
use crate::loader::Loaded;

#[derive(Debug)]
pub enum Event {
    Tick,
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    /// A snapshot or live load finished.
    Loaded(Loaded),
}

/// Terminal event-handler.
///
/// See [ratatui
/// example](https://github.com/ratatui/templates/blob/main/simple-async/src/event.rs);
///
/// Loaders share the same channel (see [`EventHandler::sender`]), so their results arrive in
/// order with key presses.
#[derive(Debug)]
pub struct EventHandler {
    sx: mpsc::UnboundedSender<Event>,
    rx: mpsc::UnboundedReceiver<Event>,
    handler: tokio::task::JoinHandle<()>,
}

impl EventHandler {
    /// Constructs a new instance of [`EventHandler`].
    pub fn new(tick_rate: u64) -> Self {
        let tick_rate = Duration::from_millis(tick_rate);
        let (sx, rx) = mpsc::unbounded_channel();
        let _sx = sx.clone();

        let handler = tokio::spawn(async move {
            let mut reader = EventStream::new();
            let mut tick = tokio::time::interval(tick_rate);

            loop {
                let tick_delay = tick.tick();
                let crossterm_event = reader.next().fuse();

                let event = tokio::select! {
                    // break when sender closes
                    _ = _sx.closed() => {
                        break;
                    }

                    // continue to tick
                    _ = tick_delay => Event::Tick,

                    // handle user input
                    Some(Ok(event)) = crossterm_event => {
                        match event {
                            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                                Event::Key(key)
                            }
                            CrosstermEvent::Mouse(mouse) => Event::Mouse(mouse),
                            CrosstermEvent::Resize(x, y) => Event::Resize(x, y),
                            _ => continue,
                        }
                    }
                };

                if _sx.send(event).is_err() {
                    break;
                }
            }
        });

        Self { sx, rx, handler }
    }

    /// A sender for pushing events from other tasks onto this handler's channel.
    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.sx.clone()
    }

    /// Receive the next event from the handler thread.
    ///
    /// This function will always block the current thread if
    /// there is no data available and it's possible for more data to be sent.
    pub async fn next(&mut self) -> AppResult<Event> {
        self.rx.recv().await.ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::Other, "event channel closed").into()
        })
    }

    /// Stop reading terminal events.
    pub fn abort(&self) {
        self.handler.abort();
    }
}
