use std::path::PathBuf;

use reqwest::blocking::Response;
use tempfile::NamedTempFile;
use tracing::debug;

use super::FetchError;

/// Write the response body into a uniquely named temp file and persist it.
/// The staged file is not cleaned up here; its lifecycle is owned by the
/// caller consuming the PDF.
pub fn stage_body(resp: &mut Response) -> Result<PathBuf, FetchError> {
    let mut file = NamedTempFile::with_prefix("webinfo-").map_err(FetchError::Stage)?;
    resp.copy_to(file.as_file_mut()).map_err(FetchError::Get)?;
    let (_, path) = file.keep().map_err(|e| FetchError::Stage(e.error))?;
    debug!(path = %path.display(), "staged pdf body");
    Ok(path)
}
