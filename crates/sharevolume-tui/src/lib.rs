/// Application state.
pub mod app;

/// Terminal events handler.
pub mod event;

/// Event handler.
pub mod handler;

/// Background loaders for the snapshot and the live SEC data.
pub mod loader;

/// The shareable `?CIK=` query string.
pub mod location;

/// Display & status surfaces, and the functions that render into them.
pub mod surface;

/// Terminal user interface.
pub mod tui;

/// Widget renderer.
pub mod ui;

use app::{App, AppResult};
use event::{Event, EventHandler};
use handler::handle_key_events;
use loader::Loader;
use location::Location;
use ratatui::{backend::CrosstermBackend, Terminal};
use sharevolume_spider::Config;
use std::io;
use tracing::{debug, info};
use tui::Tui;

/// Run the viewer until the user quits, returning the location it was left at.
pub async fn run(config: Config, location: Location) -> AppResult<Location> {
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    let events = EventHandler::new(250);
    let loader = Loader::new(&config, events.sender())?;
    let mut app = App::new(location, config.locale);

    sharevolume_spider::telemetry::ping(&config);

    let mut tui = Tui::new(terminal, events);
    tui.init()?;

    info!("viewer started at {}", app.location);
    app.bootstrap();

    while app.active {
        for request in app.take_requests() {
            debug!("dispatching {request:?}");
            loader.dispatch(request);
        }

        tui.draw(&mut app)?;

        match tui.events.next().await? {
            Event::Tick => app.tick(),
            Event::Key(key_event) => handle_key_events(key_event, &mut app)?,
            Event::Loaded(loaded) => app.apply(loaded),
            Event::Mouse(_) => {}
            Event::Resize(_, _) => {}
        }
    }

    tui.exit()?;
    info!("viewer closed at {}", app.location);
    Ok(app.location)
}
