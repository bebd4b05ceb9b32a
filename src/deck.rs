use crate::errors::{Result, VitrineError};
use crate::image_loading::is_supported_image;

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// One entry in the rotating image sequence.
#[derive(Debug, Clone)]
pub struct Slide {
    pub image: PathBuf,
    pub caption: String,
}

/// A sidebar entry. When `target` is set, clicking the entry jumps the
/// slideshow to that slide instead of playing a ripple.
#[derive(Debug, Clone)]
pub struct NavEntry {
    pub label: String,
    pub target: Option<usize>,
}

/// The loaded deck: slides plus the sidebar entries that navigate them.
/// Built once at load time and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Deck {
    pub slides: Vec<Slide>,
    pub entries: Vec<NavEntry>,
    pub source: PathBuf,
}

#[derive(Deserialize)]
struct DeckManifest {
    slides: Vec<SlideManifest>,
    #[serde(default)]
    sidebar: Vec<EntryManifest>,
}

#[derive(Deserialize)]
struct SlideManifest {
    image: PathBuf,
    #[serde(default)]
    caption: String,
}

#[derive(Deserialize)]
struct EntryManifest {
    label: String,
    #[serde(default)]
    slide: Option<usize>,
}

impl Deck {
    /// Loads a deck from a `.json` manifest or an image folder.
    pub fn load(path: &Path) -> Result<Deck> {
        if path.is_dir() {
            Self::from_folder(path)
        } else if path
            .extension()
            .map_or(false, |e| e.eq_ignore_ascii_case("json"))
        {
            Self::from_manifest(path)
        } else {
            Err(VitrineError::UnsupportedDeckPath {
                path: path.to_path_buf(),
            })
        }
    }

    fn from_manifest(path: &Path) -> Result<Deck> {
        let content = fs::read_to_string(path).map_err(|source| VitrineError::DeckRead {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest: DeckManifest =
            serde_json::from_str(&content).map_err(|source| VitrineError::DeckParse {
                path: path.to_path_buf(),
                source,
            })?;

        // Relative image paths resolve against the manifest's directory
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        let slides = manifest
            .slides
            .into_iter()
            .map(|s| Slide {
                image: if s.image.is_relative() {
                    base.join(&s.image)
                } else {
                    s.image
                },
                caption: s.caption,
            })
            .collect();

        let entries = manifest
            .sidebar
            .into_iter()
            .map(|e| NavEntry {
                label: e.label.trim().to_string(),
                target: e.slide,
            })
            .collect();

        Self::validated(Deck {
            slides,
            entries,
            source: path.to_path_buf(),
        })
    }

    /// Builds a deck from every supported image in `dir`, sorted
    /// naturally by file name. Captions default to the file stem and
    /// each slide gets a sidebar entry targeting it.
    fn from_folder(dir: &Path) -> Result<Deck> {
        let mut images: Vec<PathBuf> = fs::read_dir(dir)
            .map_err(|source| VitrineError::DeckRead {
                path: dir.to_path_buf(),
                source,
            })?
            .flatten()
            .map(|entry| entry.path())
            .filter(|p| p.is_file() && is_supported_image(p))
            .collect();

        images.sort_by(|a, b| natord::compare(&file_name_key(a), &file_name_key(b)));

        let slides: Vec<Slide> = images
            .into_iter()
            .map(|image| {
                let caption = image
                    .file_stem()
                    .map(|s| s.to_string_lossy().to_string())
                    .unwrap_or_default();
                Slide { image, caption }
            })
            .collect();

        let entries = slides
            .iter()
            .enumerate()
            .map(|(i, slide)| NavEntry {
                label: slide.caption.clone(),
                target: Some(i),
            })
            .collect();

        Self::validated(Deck {
            slides,
            entries,
            source: dir.to_path_buf(),
        })
    }

    fn validated(deck: Deck) -> Result<Deck> {
        if deck.slides.is_empty() {
            return Err(VitrineError::EmptyDeck {
                path: deck.source.clone(),
            });
        }

        for entry in &deck.entries {
            if let Some(target) = entry.target {
                if target >= deck.slides.len() {
                    return Err(VitrineError::TargetOutOfRange {
                        label: entry.label.clone(),
                        target,
                        count: deck.slides.len(),
                    });
                }
            }
        }

        // Labels are display text, not dispatch keys, so duplicates are
        // legal; still worth flagging in a hand-written manifest
        let mut seen = HashSet::new();
        for entry in &deck.entries {
            if !seen.insert(entry.label.as_str()) {
                log::warn!("Duplicate sidebar label '{}'", entry.label);
            }
        }

        Ok(deck)
    }

    pub fn captions(&self) -> Vec<String> {
        self.slides.iter().map(|s| s.caption.clone()).collect()
    }

    /// Display name for the title area.
    pub fn title(&self) -> String {
        self.source
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| self.source.display().to_string())
    }
}

fn file_name_key(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}
