use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use image::DynamicImage;
use once_cell::sync::Lazy;

/// Default location of the SeetaFace detection model.
pub static MODEL_PATH: Lazy<&'static Path> = Lazy::new(|| {
    Path::new(
        option_env!("ROSTRO_MODEL_PATH")
            .unwrap_or("/usr/local/share/rostro/seeta_fd_frontal_v1.0.bin"),
    )
});

/// A face found by the detection model
#[derive(Debug, Clone)]
pub struct Detection {
    pub bbox: [f32; 4], // x, y, w, h
    pub score: f32,
}

/// Pluggable face detection backend.
///
/// `Send + Sync` so one instance can be shared across scan workers behind an
/// `Arc`. Implementations report every face they find; callers decide what to
/// do with the list.
pub trait FaceDetector: Send + Sync {
    fn detect(&self, img: &DynamicImage) -> Result<Vec<Detection>>;
}

/// Face detector backed by the `rustface` crate (SeetaFace engine).
///
/// The model is parsed once at construction and shared; the underlying
/// `rustface` detector is not `Sync`, so each `detect` call builds a fresh
/// one from the parsed model.
pub struct SeetaDetector {
    model: rustface::Model,
}

impl SeetaDetector {
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("opening detector model {}", path.display()))?;
        let model = rustface::read_model(BufReader::new(file))
            .with_context(|| format!("parsing detector model {}", path.display()))?;
        Ok(Self { model })
    }
}

impl FaceDetector for SeetaDetector {
    fn detect(&self, img: &DynamicImage) -> Result<Vec<Detection>> {
        // SeetaFace works on a row-major grayscale buffer
        let gray = img.to_luma8();
        let (width, height) = gray.dimensions();

        let mut detector = rustface::create_detector_with_model(self.model.clone());
        detector.set_min_face_size(20);
        detector.set_score_thresh(2.0);
        detector.set_pyramid_scale_factor(0.8);
        detector.set_slide_window_step(4, 4);

        let faces = detector.detect(&rustface::ImageData::new(gray.as_raw(), width, height));
        log::debug!("detector found {} candidate face(s)", faces.len());

        Ok(faces
            .iter()
            .map(|face| {
                let bbox = face.bbox();
                Detection {
                    bbox: [
                        bbox.x() as f32,
                        bbox.y() as f32,
                        bbox.width() as f32,
                        bbox.height() as f32,
                    ],
                    score: face.score() as f32,
                }
            })
            .collect())
    }
}
