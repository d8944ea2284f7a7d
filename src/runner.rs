use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

use log::{debug, warn};
use parking_lot::Mutex;
use rostro_vision::{loader, FaceDetector};

use crate::semaphore::Semaphore;

/// One image to scan: where it lives and how to name it in the report.
#[derive(Debug, Clone)]
pub struct WorkItem {
    pub path: PathBuf,
    pub label: String,
}

impl WorkItem {
    pub fn new(path: impl Into<PathBuf>, label: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
        }
    }
}

/// Outcome of scanning a single image.
///
/// The labels name moods, but only face presence is computed; no emotion
/// classification happens anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanStatus {
    FaceDetected,
    NoFace,
    LoadError,
}

impl fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ScanStatus::FaceDetected => "ROSTRO DETECTADO",
            ScanStatus::NoFace => "SIN ROSTRO DETECTADO",
            ScanStatus::LoadError => "ERROR: Imagen no encontrada",
        })
    }
}

#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub label: String,
    pub status: ScanStatus,
}

/// Scan every item on its own thread, letting at most `limit` of them run
/// the load+detect section at once.
///
/// Returns once every worker has been joined. Results are in completion
/// order, which varies across runs.
pub fn run_scans(
    items: Vec<WorkItem>,
    limit: usize,
    detector: Arc<dyn FaceDetector>,
) -> Vec<ScanOutcome> {
    // A zero limit would starve every worker
    let gate = Arc::new(Semaphore::new(limit.max(1)));
    let results = Arc::new(Mutex::new(Vec::with_capacity(items.len())));

    let workers: Vec<_> = items
        .into_iter()
        .map(|item| {
            let gate = Arc::clone(&gate);
            let results = Arc::clone(&results);
            let detector = Arc::clone(&detector);
            thread::spawn(move || scan_one(item, &gate, detector.as_ref(), &results))
        })
        .collect();

    for worker in workers {
        if worker.join().is_err() {
            warn!("a scan worker panicked");
        }
    }

    // All workers joined, so ours is normally the last Arc standing
    match Arc::try_unwrap(results) {
        Ok(collected) => collected.into_inner(),
        Err(shared) => shared.lock().drain(..).collect(),
    }
}

fn scan_one(
    item: WorkItem,
    gate: &Semaphore,
    detector: &dyn FaceDetector,
    results: &Mutex<Vec<ScanOutcome>>,
) {
    let status = {
        let _permit = gate.acquire();
        println!("[HILO] Procesando: {}", item.label);
        scan_image(&item, detector)
    };

    results.lock().push(ScanOutcome {
        label: item.label.clone(),
        status,
    });

    if status != ScanStatus::LoadError {
        println!("[HILO] Terminado: {}", item.label);
    }
}

fn scan_image(item: &WorkItem, detector: &dyn FaceDetector) -> ScanStatus {
    let img = match loader::load_image(&item.path) {
        Ok(img) => img,
        Err(e) => {
            warn!("{}: {e:#}", item.label);
            return ScanStatus::LoadError;
        }
    };

    match detector.detect(&img) {
        Ok(faces) if faces.is_empty() => ScanStatus::NoFace,
        Ok(faces) => {
            debug!("{}: {} face(s)", item.label, faces.len());
            ScanStatus::FaceDetected
        }
        Err(e) => {
            // A detector failure stays isolated to this item
            warn!("{}: detection failed: {e:#}", item.label);
            ScanStatus::LoadError
        }
    }
}
