//! The landing page: one showcase, a cycling headline and a column of
//! viewport-gated video panels, laid out on a vertically scrolling page.

use std::time::Duration;

use log::debug;

use crate::constants::PROXIMITY_MARGIN;
use crate::content::Content;
use crate::cycler::TextCycler;
use crate::engine::Engine;
use crate::error::ShowcaseError;
use crate::media::{observe, MediaElement, MediaEvent, Rect, SimulatedVideo, ViewportGatedPlayer};
use crate::showcase::ShowcaseEngine;

pub const SECTION_HEIGHT: f32 = 720.0;
const ENTRY_HEIGHT: f32 = 96.0;
const ENTRY_GAP: f32 = 14.0;
const PANEL_HEIGHT: f32 = 360.0;
const PANEL_GAP: f32 = 80.0;

/// Page geometry in page coordinates (y grows down, 0 is the top of the page).
#[derive(Debug, Clone, Copy)]
pub struct PageLayout {
    pub width: f32,
}

impl PageLayout {
    pub fn headline_rect(&self) -> Rect {
        Rect::new(60.0, 40.0, self.width - 120.0, 60.0)
    }

    pub fn entry_rect(&self, index: usize) -> Rect {
        Rect::new(
            60.0,
            140.0 + index as f32 * (ENTRY_HEIGHT + ENTRY_GAP),
            self.width * 0.4,
            ENTRY_HEIGHT,
        )
    }

    pub fn media_rect(&self) -> Rect {
        Rect::new(self.width * 0.5, 140.0, self.width * 0.45, 420.0)
    }

    pub fn panel_rect(&self, index: usize) -> Rect {
        Rect::new(
            60.0,
            SECTION_HEIGHT + 120.0 + index as f32 * (PANEL_HEIGHT + PANEL_GAP),
            self.width - 120.0,
            PANEL_HEIGHT,
        )
    }

    pub fn page_height(&self, panels: usize) -> f32 {
        SECTION_HEIGHT + 120.0 + panels as f32 * (PANEL_HEIGHT + PANEL_GAP) + 120.0
    }
}

pub struct VideoPanel {
    pub title: String,
    pub player: ViewportGatedPlayer<SimulatedVideo>,
}

pub struct Page {
    pub title: String,
    pub layout: PageLayout,
    pub showcase: ShowcaseEngine,
    pub headline: Option<TextCycler>,
    pub panels: Vec<VideoPanel>,
    slide_video: Option<(usize, SimulatedVideo)>,
    content: Content,
    block_autoplay: bool,
    scroll: f32,
    viewport_height: f32,
}

impl Page {
    pub fn new(
        content: Content,
        width: f32,
        viewport_height: f32,
        block_autoplay: bool,
    ) -> Result<Self, ShowcaseError> {
        let showcase = ShowcaseEngine::new(content.slides.clone(), content.config)?;
        let headline = content.headline.as_ref().map(|h| {
            let cycler = TextCycler::new(h.text.clone(), h.suffixes.clone());
            match h.cycle_ms {
                Some(ms) => cycler.with_interval(Duration::from_millis(ms)),
                None => cycler,
            }
        });
        let panels = content
            .videos
            .iter()
            .map(|v| VideoPanel {
                title: v.title.clone(),
                player: ViewportGatedPlayer::new(
                    SimulatedVideo::new(v.url.clone(), v.duration_ms.map(Duration::from_millis))
                        .looping(v.looping)
                        .autoplay_blocked(block_autoplay),
                ),
            })
            .collect();

        let mut page = Self {
            title: content.title.clone(),
            layout: PageLayout { width },
            showcase,
            headline,
            panels,
            slide_video: None,
            content,
            block_autoplay,
            scroll: 0.0,
            viewport_height,
        };
        page.sync_slide_video();
        page.observe_viewport();
        Ok(page)
    }

    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    pub fn viewport(&self) -> Rect {
        Rect::new(0.0, self.scroll, self.layout.width, self.viewport_height)
    }

    pub fn resize(&mut self, width: f32, viewport_height: f32) {
        self.layout.width = width;
        self.viewport_height = viewport_height;
        self.scroll_by(0.0);
    }

    pub fn scroll_by(&mut self, dy: f32) {
        let max = (self.layout.page_height(self.panels.len()) - self.viewport_height).max(0.0);
        self.scroll = (self.scroll + dy).clamp(0.0, max);
        self.observe_viewport();
    }

    /// Video backing the active slide, if it is a video slide.
    pub fn slide_video(&self) -> Option<&SimulatedVideo> {
        self.slide_video.as_ref().map(|(_, v)| v)
    }

    /// Click at a point in page coordinates.
    pub fn click(&mut self, x: f32, y: f32) {
        let hit = Rect::new(x, y, 1.0, 1.0);
        for index in 0..self.showcase.slides().len() {
            if self.layout.entry_rect(index).intersects(&hit) {
                if let Err(e) = self.showcase.navigate_to(index) {
                    debug!("ignored click: {e}");
                }
                return;
            }
        }
        // A click on a blocked video counts as the gesture that unblocks it.
        if self.layout.media_rect().intersects(&hit) {
            if let Some((_, video)) = self.slide_video.as_mut() {
                video.unblock();
                if let Err(e) = video.play() {
                    debug!("{e}");
                }
            }
            return;
        }
        for (index, panel) in self.panels.iter_mut().enumerate() {
            if self.layout.panel_rect(index).intersects(&hit) {
                panel.player.media_mut().unblock();
                if let Err(e) = panel.player.toggle() {
                    debug!("{e}");
                }
            }
        }
    }

    pub fn update(&mut self, dt: Duration) {
        self.showcase.update(dt);
        self.sync_slide_video();

        if let Some((_, video)) = self.slide_video.as_mut() {
            for event in video.tick(dt) {
                match event {
                    MediaEvent::LoadedMetadata { duration_secs } => {
                        self.showcase.on_media_loaded_metadata(duration_secs)
                    }
                    MediaEvent::Ended => self.showcase.on_media_ended(),
                    MediaEvent::Play | MediaEvent::Pause => {}
                }
            }
        }
        for panel in &mut self.panels {
            panel.player.media_mut().tick(dt);
        }
        if let Some(headline) = self.headline.as_mut() {
            headline.update(dt);
        }
    }

    /// Tear down every widget on the page.
    pub fn unmount(&mut self) {
        self.showcase.teardown();
        if let Some(headline) = self.headline.as_mut() {
            headline.teardown();
        }
        for panel in &mut self.panels {
            panel.player.disconnect();
        }
        if let Some((_, video)) = self.slide_video.as_mut() {
            video.pause();
        }
    }

    fn observe_viewport(&mut self) {
        let viewport = self.viewport();
        if let Some(headline) = self.headline.as_mut() {
            headline.on_in_view(self.layout.headline_rect().intersects(&viewport));
        }
        for (index, panel) in self.panels.iter_mut().enumerate() {
            let bands = observe(self.layout.panel_rect(index), viewport, PROXIMITY_MARGIN);
            panel.player.observe(bands);
        }
    }

    // Swap the simulated element whenever the active slide changes.
    fn sync_slide_video(&mut self) {
        let active = self.showcase.active_index();
        if self.slide_video.as_ref().is_some_and(|(i, _)| *i == active) {
            return;
        }
        let slide = self.showcase.active_slide();
        self.slide_video = match slide.media.url().filter(|_| slide.is_video()) {
            Some(url) => {
                let duration = self.content.media_durations.get(&slide.id).copied();
                let mut video =
                    SimulatedVideo::new(url, duration).autoplay_blocked(self.block_autoplay);
                if let Err(e) = video.play() {
                    debug!("{e}");
                }
                Some((active, video))
            }
            None => None,
        };
    }
}
