pub mod report;
pub mod runner;
pub mod semaphore;

// Re-export vision types for convenience
pub use rostro_vision::{loader, Detection, FaceDetector, SeetaDetector};
