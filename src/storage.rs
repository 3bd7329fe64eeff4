use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Copy image files into the products bucket and return their public
/// paths in upload order. File contents are never inspected; the
/// extension is carried over from the source name.
pub fn upload_images(bucket_dir: &Path, files: &[PathBuf]) -> Result<Vec<String>> {
    let target_dir = bucket_dir.join("products");
    fs::create_dir_all(&target_dir)
        .with_context(|| format!("creating bucket directory {}", target_dir.display()))?;

    let mut urls = Vec::new();
    for file in files {
        let target = target_dir.join(unique_name(file));
        fs::copy(file, &target).with_context(|| format!("uploading {}", file.display()))?;
        urls.push(target.to_string_lossy().into_owned());
    }

    Ok(urls)
}

/// Timestamped object name with a random suffix so concurrent uploads
/// never collide.
fn unique_name(source: &Path) -> String {
    let ext = source
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();

    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}_{}{}", millis, &suffix[..8], ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_name_keeps_extension() {
        let name = unique_name(Path::new("photos/tenis blancos.JPG"));
        assert!(name.ends_with(".JPG"));
        assert!(name.contains('_'));
    }

    #[test]
    fn test_unique_name_without_extension() {
        let name = unique_name(Path::new("cover"));
        assert!(!name.contains('.'));
    }

    #[test]
    fn test_names_do_not_collide() {
        let a = unique_name(Path::new("a.png"));
        let b = unique_name(Path::new("a.png"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_missing_source_maps_to_upload_failed() {
        let bucket = std::env::temp_dir().join(format!(
            "tienda-storage-test-{}",
            Uuid::new_v4().simple()
        ));

        let err = upload_images(&bucket, &[PathBuf::from("does-not-exist.png")]).unwrap_err();
        let cause: &(dyn std::error::Error + 'static) = err.as_ref();
        let (title, _, details) = crate::errors::map_upload_error(cause, &bucket);

        assert_eq!(title, "Upload Failed");
        assert!(details.contains("does-not-exist.png"));

        let _ = fs::remove_dir_all(&bucket);
    }
}
