use std::sync::Arc;

use anyhow::{Context, Result};
use log::info;
use rostro::runner::{self, WorkItem};
use rostro::{report, SeetaDetector};
use rostro_vision::MODEL_PATH;

/// At most this many scans may run the load+detect section at once.
const MAX_CONCURRENT_SCANS: usize = 2;

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp(None)
        .init();

    let detector =
        SeetaDetector::from_file(&MODEL_PATH).context("Failed to load face detection model")?;

    // The labels name moods, but only face presence is reported
    let items = vec![
        WorkItem::new("imagenes/feliz.jpg", "Feliz"),
        WorkItem::new("imagenes/enojado.jpg", "Enojado"),
        WorkItem::new("imagenes/triste.jpg", "Triste"),
    ];

    info!(
        "Scanning {} images, {} at a time",
        items.len(),
        MAX_CONCURRENT_SCANS
    );

    let results = runner::run_scans(items, MAX_CONCURRENT_SCANS, Arc::new(detector));
    report::print_report(&results);

    Ok(())
}
