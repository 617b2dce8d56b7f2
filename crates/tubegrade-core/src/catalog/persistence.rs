//! Catalog file loading and saving
//!
//! The CLI operates on a caller-supplied JSON catalog file. Loading
//! rebuilds the comment index through the catalog's Deserialize impl.

use super::manager::Catalog;
use crate::error::{Result, TubegradeError};
use std::path::Path;

/// Load a catalog from a JSON file
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        return Err(TubegradeError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let catalog: Catalog = serde_json::from_str(&content)?;

    tracing::debug!(
        path = %path.display(),
        users = catalog.user_count(),
        videos = catalog.video_count(),
        comments = catalog.comment_count(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// Save a catalog to a JSON file
pub fn save_catalog(path: &Path, catalog: &Catalog) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(catalog)?;
    std::fs::write(path, json)?;

    tracing::debug!(path = %path.display(), "catalog saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Comment, User, Video};
    use crate::types::{CommentId, UserId, VideoId};

    fn sample_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog
            .add_user(User::creator(
                UserId::from_string("creator"),
                "chan",
                "chan@example.com",
            ))
            .unwrap();
        catalog
            .add_video(Video::new(
                VideoId::from_string("v1"),
                UserId::from_string("creator"),
                "Test",
                "https://example.com/v1",
                30,
                "testing",
            ))
            .unwrap();
        catalog
            .add_comment(Comment::new(
                CommentId::from_string("c1"),
                VideoId::from_string("v1"),
                UserId::from_string("creator"),
                "great stuff",
            ))
            .unwrap();
        catalog
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");

        let catalog = sample_catalog();
        save_catalog(&path, &catalog).unwrap();

        let loaded = load_catalog(&path).unwrap();
        assert_eq!(loaded.user_count(), 1);
        assert_eq!(loaded.video_count(), 1);
        assert_eq!(loaded.comment_count(), 1);
        // Index is rebuilt on load.
        assert_eq!(
            loaded.comments_for_video(&VideoId::from_string("v1")).len(),
            1
        );
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_catalog(Path::new("/nonexistent/catalog.json"));
        assert!(matches!(result, Err(TubegradeError::FileNotFound(_))));
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, "not json").unwrap();

        let result = load_catalog(&path);
        assert!(matches!(result, Err(TubegradeError::Serde(_))));
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/dir/catalog.json");

        save_catalog(&path, &Catalog::new()).unwrap();
        assert!(path.exists());
    }
}
