use crate::error::LoadError;
use tracing::trace;

/// Reads a `.json` file from `path`.
pub async fn read_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, LoadError> {
    trace!("reading file path: {path}");
    let file = tokio::fs::read(path).await.map_err(|source| LoadError::Io {
        path: path.to_string(),
        source,
    })?;
    trace!("file read; deserializing bytes ...");
    let data: T = serde_json::from_slice(&file)?;
    Ok(data)
}

/// Writes `data` as pretty-printed `.json` to `path`, creating parent directories as necessary.
pub async fn write_json<T: serde::Serialize>(path: &str, data: &T) -> Result<(), LoadError> {
    let io_err = |source| LoadError::Io {
        path: path.to_string(),
        source,
    };

    if let Some(dir_path) = std::path::Path::new(path).parent() {
        if !dir_path.as_os_str().is_empty() {
            trace!("checking directory path: {:?}", dir_path);
            tokio::fs::create_dir_all(dir_path).await.map_err(io_err)?;
        }
    }

    let mut bytes = serde_json::to_vec_pretty(data)?;
    bytes.push(b'\n');
    trace!("writing {} bytes to {path}", bytes.len());
    tokio::fs::write(path, bytes).await.map_err(io_err)?;
    Ok(())
}
