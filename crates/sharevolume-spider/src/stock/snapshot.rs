use crate::error::LoadError;
use crate::stock::model::ViewModel;
use tracing::{debug, error, info};

/// Read the bundled snapshot at `path`.
///
/// The file is already in [`ViewModel`] shape, so nothing is normalized.
pub async fn load(path: &str) -> Result<ViewModel, LoadError> {
    debug!("loading bundled snapshot from {path}");
    crate::fs::read_json(path).await.map_err(|err| {
        error!("failed to load bundled snapshot \"{path}\": {err}");
        err
    })
}

/// Write `model` to `path` as a snapshot that [`load`] reads back.
pub async fn save(path: &str, model: &ViewModel) -> Result<(), LoadError> {
    crate::fs::write_json(path, model).await.map_err(|err| {
        error!("failed to write snapshot \"{path}\": {err}");
        err
    })?;
    info!("snapshot for {} written to {path}", model.entity_name);
    Ok(())
}
