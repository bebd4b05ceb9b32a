use crate::errors::VitrineError;

use image::DynamicImage;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::thread;

pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp"];

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| SUPPORTED_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

// Results from the decode threads, drained on the UI thread each frame.
// The generation tags a message with the deck it belongs to so results
// from a replaced deck can be discarded.
pub enum LoaderMessage {
    SlideLoaded {
        generation: u64,
        index: usize,
        image: DynamicImage,
    },
    LoadError {
        generation: u64,
        index: usize,
        message: String,
    },
}

/// Decodes one slide image off the UI thread and reports back over the
/// channel. The receiver decides what to do with a failure; the decode
/// itself is never retried.
pub fn spawn_decode(
    generation: u64,
    index: usize,
    path: PathBuf,
    tx: Sender<LoaderMessage>,
    ctx: egui::Context,
) {
    thread::spawn(move || {
        match image::open(&path) {
            Ok(image) => {
                let _ = tx.send(LoaderMessage::SlideLoaded {
                    generation,
                    index,
                    image,
                });
            }
            Err(e) => {
                let err = VitrineError::ImageLoadError {
                    path,
                    message: e.to_string(),
                };
                let _ = tx.send(LoaderMessage::LoadError {
                    generation,
                    index,
                    message: err.to_string(),
                });
            }
        }
        ctx.request_repaint();
    });
}
