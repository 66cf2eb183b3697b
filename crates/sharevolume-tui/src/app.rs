use crate::loader::{Loaded, Request};
use crate::location::Location;
use crate::surface::{render, Display, Status};
use sharevolume_spider::format::Locale;
use sharevolume_spider::stock::sec::Cik;
use tracing::{debug, error, info};

pub type AppResult<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// The CIK input line.
#[derive(Debug, Default)]
pub struct Form {
    pub input: String,
    pub focused: bool,
}

#[derive(Debug)]
pub struct App {
    pub active: bool,
    pub display: Display,
    pub status: Status,
    pub form: Form,
    pub location: Location,
    pub locale: Locale,
    /// Generation of the newest remote request issued; 0 before any.
    issued: u64,
    /// Generation of whatever is on display: 0 for the snapshot (or nothing), else remote.
    rendered: u64,
    requests: Vec<Request>,
}

impl App {
    pub fn new(location: Location, locale: Locale) -> Self {
        Self {
            active: true,
            display: Display::default(),
            status: Status::default(),
            form: Form::default(),
            location,
            locale,
            issued: 0,
            rendered: 0,
            requests: vec![],
        }
    }

    /// Pre-fill the form, queue the snapshot load, and queue a live load if the location names a
    /// valid CIK.
    pub fn bootstrap(&mut self) {
        let cik = self.location.cik();
        if let Some(cik) = &cik {
            self.form.input = cik.to_string();
        }

        self.requests.push(Request::Local);

        if let Some(cik) = cik {
            self.request_remote(cik);
        }
    }

    pub fn tick(&self) {}

    pub fn quit(&mut self) {
        self.active = false;
    }

    pub fn focus_input(&mut self) {
        self.form.focused = true;
    }

    pub fn blur_input(&mut self) {
        self.form.focused = false;
    }

    /// Validate the form and, if it holds a CIK, point the location at it and queue a live load.
    pub fn submit(&mut self) {
        match Cik::parse(&self.form.input) {
            Ok(cik) => {
                debug!("CIK {cik} submitted");
                self.form.input = cik.to_string();
                self.location.set_cik(&cik);
                self.request_remote(cik);
            }
            Err(err) => {
                debug!("rejected CIK input {:?}", err.input);
                self.status = Status::warn(err.to_string());
                self.focus_input();
            }
        }
    }

    /// Drain the loads queued since the last call.
    pub fn take_requests(&mut self) -> Vec<Request> {
        std::mem::take(&mut self.requests)
    }

    /// Apply a finished load to the display and status line.
    ///
    /// Remote outcomes older than the newest remote request are dropped, and the snapshot never
    /// replaces live data that's already shown.
    pub fn apply(&mut self, loaded: Loaded) {
        match loaded {
            Loaded::Local(_) if self.rendered > 0 => {
                debug!("snapshot finished after live data was shown; ignoring");
            }
            Loaded::Local(Ok(model)) => {
                self.display = render(&self.display, &model, self.locale);
                self.status = Status::info("Loaded bundled data.json");
                info!("rendered bundled snapshot for {}", model.entity_name);
            }
            Loaded::Local(Err(err)) => {
                error!("failed to load bundled data.json: {err}");
                self.status = Status::error("Failed to load bundled data.json");
            }
            Loaded::Remote {
                generation, cik, ..
            } if generation < self.issued => {
                debug!(
                    "dropping stale result for CIK {cik} (request {generation}, newest {})",
                    self.issued
                );
            }
            Loaded::Remote {
                generation,
                cik,
                result: Ok(model),
            } => {
                self.display = render(&self.display, &model, self.locale);
                self.rendered = generation;
                self.status = Status::info(format!("Updated from live SEC data for CIK {cik}"));
                info!("rendered live data for CIK {cik}: {}", model.entity_name);
            }
            Loaded::Remote {
                cik,
                result: Err(err),
                ..
            } => {
                error!("live fetch failed for CIK {cik}: {err}");
                self.status = Status::warn(format!(
                    "Live fetch failed for CIK {cik}. Showing bundled data."
                ));
            }
        }
    }

    fn request_remote(&mut self, cik: Cik) {
        self.issued += 1;
        self.status = Status::info(format!("Fetching live SEC data for CIK {cik}…"));
        if self.issued > 1 {
            debug!("request {} supersedes any live fetch still in flight", self.issued);
        }
        self.requests.push(Request::Remote {
            generation: self.issued,
            cik,
        });
    }
}
