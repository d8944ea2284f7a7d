use std::path::Path;

use anyhow::{Context, Result};
use image::DynamicImage;

/// Decode an image file. Format handling is delegated entirely to the `image`
/// crate; a missing or unreadable file surfaces as an error with the path
/// attached.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).with_context(|| format!("reading image {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_error() {
        let err = load_image(Path::new("/nonexistent/face.jpg")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/face.jpg"));
    }

    #[test]
    fn decodes_a_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank.png");
        image::RgbImage::new(8, 6).save(&path).unwrap();

        let img = load_image(&path).unwrap();
        assert_eq!((img.width(), img.height()), (8, 6));
    }
}
