//! Slide content supplied from outside the engine.
//!
//! A content file is TOML:
//!
//! ```toml
//! title = "Stay with us"
//!
//! [showcase]
//! preset = "flipped"
//! cooldown_ms = 3000
//!
//! [[slides]]
//! id = 1
//! title = "Rooftop pool"
//! description = "Open all year."
//! video = "https://cdn.example.com/pool.mp4"
//! duration_ms = 6000
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::info;
use serde::Deserialize;

use crate::config::{AdvancePolicy, Preset, ShowcaseConfig, TransitionTiming};
use crate::error::ShowcaseError;
use crate::slide::{MediaRef, Slide, SlideId};

const DEMO_CONTENT: &str = include_str!("../content/demo.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct ContentFile {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub showcase: ShowcaseSection,
    pub slides: Vec<SlideEntry>,
    pub headline: Option<HeadlineEntry>,
    #[serde(default)]
    pub videos: Vec<VideoEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShowcaseSection {
    #[serde(default = "default_preset")]
    pub preset: Preset,
    pub interval_ms: Option<u64>,
    pub still_ms: Option<u64>,
    pub default_media_ms: Option<u64>,
    pub fade_out_ms: Option<u64>,
    pub fade_in_ms: Option<u64>,
    /// `0` turns the pause gate off.
    pub cooldown_ms: Option<u64>,
    pub progress_bar: Option<bool>,
}

fn default_preset() -> Preset {
    Preset::Ancillary
}

impl Default for ShowcaseSection {
    fn default() -> Self {
        Self {
            preset: default_preset(),
            interval_ms: None,
            still_ms: None,
            default_media_ms: None,
            fade_out_ms: None,
            fade_in_ms: None,
            cooldown_ms: None,
            progress_bar: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlideEntry {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub video: Option<String>,
    pub image: Option<String>,
    pub inline: Option<String>,
    pub icon: Option<String>,
    /// Length of a simulated video; omitted means "unknown".
    pub duration_ms: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HeadlineEntry {
    pub text: String,
    #[serde(default)]
    pub suffixes: Vec<String>,
    pub cycle_ms: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoEntry {
    pub title: String,
    pub url: String,
    pub duration_ms: Option<u64>,
    #[serde(default)]
    pub looping: bool,
}

/// Content after validation, ready to hand to the engines.
#[derive(Debug, Clone)]
pub struct Content {
    pub title: String,
    pub slides: Vec<Slide>,
    pub config: ShowcaseConfig,
    pub showcase: ShowcaseSection,
    pub media_durations: HashMap<SlideId, Duration>,
    pub headline: Option<HeadlineEntry>,
    pub videos: Vec<VideoEntry>,
}

impl ShowcaseSection {
    pub fn config(&self) -> ShowcaseConfig {
        let ms = Duration::from_millis;
        let mut config = self.preset.config();

        config.policy = match config.policy {
            AdvancePolicy::FixedInterval { interval } => AdvancePolicy::FixedInterval {
                interval: self.interval_ms.map_or(interval, ms),
            },
            AdvancePolicy::MediaDuration {
                still_interval,
                fallback,
            } => AdvancePolicy::MediaDuration {
                still_interval: self.still_ms.map_or(still_interval, ms),
                fallback: self.default_media_ms.map_or(fallback, ms),
            },
        };

        if self.fade_out_ms.is_some() || self.fade_in_ms.is_some() {
            let base = config.transition.unwrap_or_default();
            let timing = TransitionTiming {
                fade_out: self.fade_out_ms.map_or(base.fade_out, ms),
                fade_in: self.fade_in_ms.map_or(base.fade_in, ms),
            };
            config.transition = if timing.fade_out.is_zero() && timing.fade_in.is_zero() {
                None
            } else {
                Some(timing)
            };
        }

        if let Some(cooldown) = self.cooldown_ms {
            config.pause_cooldown = (cooldown > 0).then(|| ms(cooldown));
        }
        if let Some(progress_bar) = self.progress_bar {
            config.progress_bar = progress_bar;
        }
        config
    }
}

impl Content {
    /// Swap the preset underneath the file's overrides.
    pub fn set_preset(&mut self, preset: Preset) {
        self.showcase.preset = preset;
        self.config = self.showcase.config();
    }
}

impl SlideEntry {
    fn media(&self) -> Result<MediaRef, String> {
        match (&self.video, &self.image, &self.inline) {
            (Some(url), None, None) => Ok(MediaRef::Video { url: url.clone() }),
            (None, Some(url), None) => Ok(MediaRef::Image { url: url.clone() }),
            (None, None, Some(text)) => Ok(MediaRef::Inline { text: text.clone() }),
            (None, None, None) => Err(format!("slide {} has no media", self.id)),
            _ => Err(format!("slide {} has more than one media source", self.id)),
        }
    }

    pub fn to_slide(&self) -> Result<Slide, String> {
        let mut slide = Slide::new(self.id, &self.title, &self.description, self.media()?);
        slide.icon = self.icon.clone();
        Ok(slide)
    }
}

pub fn parse_content(text: &str, file: &Path) -> Result<Content, ShowcaseError> {
    let parse_err = |detail: String| ShowcaseError::Parse {
        file: file.to_path_buf(),
        detail,
    };
    let raw: ContentFile = toml::from_str(text).map_err(|e| parse_err(e.to_string()))?;

    let mut slides = Vec::with_capacity(raw.slides.len());
    let mut media_durations = HashMap::new();
    for entry in &raw.slides {
        let slide = entry.to_slide().map_err(parse_err)?;
        if let Some(ms) = entry.duration_ms {
            media_durations.insert(slide.id, Duration::from_millis(ms));
        }
        slides.push(slide);
    }

    Ok(Content {
        title: raw.title,
        config: raw.showcase.config(),
        showcase: raw.showcase,
        slides,
        media_durations,
        headline: raw.headline,
        videos: raw.videos,
    })
}

pub fn load_content(path: &Path) -> Result<Content, ShowcaseError> {
    let text = fs::read_to_string(path)?;
    let content = parse_content(&text, path)?;
    info!(
        "loaded {} slides from {}",
        content.slides.len(),
        path.display()
    );
    Ok(content)
}

/// Built-in content used when nothing is given on the command line.
pub fn demo_content() -> Result<Content, ShowcaseError> {
    parse_content(DEMO_CONTENT, Path::new("content/demo.toml"))
}

/// Image files in `dir`, sorted by file name.
pub fn load_sorted_image_paths(dir: &Path) -> Result<Vec<PathBuf>, ShowcaseError> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if let Some(ext) = path.extension().and_then(|s| s.to_str()) {
            if matches!(
                ext.to_lowercase().as_str(),
                "png" | "jpg" | "jpeg" | "bmp" | "gif"
            ) {
                paths.push(path);
            }
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    if paths.is_empty() {
        return Err(ShowcaseError::NoImages {
            dir: dir.to_path_buf(),
        });
    }
    Ok(paths)
}

/// One image slide per path, titled by file stem.
pub fn image_slides(paths: &[PathBuf]) -> Vec<Slide> {
    paths
        .iter()
        .enumerate()
        .map(|(i, path)| {
            let title = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            Slide::new(
                i as u32,
                title,
                String::new(),
                MediaRef::Image {
                    url: path.to_string_lossy().into_owned(),
                },
            )
        })
        .collect()
}
