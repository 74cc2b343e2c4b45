//! Saving the rendered map page to disk.

use std::path::Path;

use tracing::debug;

use super::MapError;

/// Write `html` to `path`, creating parent directories as needed.
///
/// The file is replaced on every call, so concurrent requests race and the
/// last writer wins. Pages do not read it back.
pub async fn write_artifact(path: &Path, html: &str) -> Result<(), MapError> {
    let to_err = |source| MapError::Write {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(to_err)?;
    }
    tokio::fs::write(path, html).await.map_err(to_err)?;
    debug!(path = %path.display(), bytes = html.len(), "wrote map artifact");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn creates_parent_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("static").join("map.html");

        write_artifact(&path, "<p>first</p>").await.unwrap();
        write_artifact(&path, "<p>second</p>").await.unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "<p>second</p>");
    }
}
