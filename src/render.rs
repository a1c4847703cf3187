use std::collections::HashMap;

use raylib::prelude::*;

use crate::media::{MediaElement, Rect, Visibility};
use crate::page::Page;
use crate::slide::{MediaRef, SlideId};

const ACCENT: Color = Color::new(37, 99, 235, 255);
const INK: Color = Color::new(17, 24, 39, 255);
const MUTED: Color = Color::new(107, 114, 128, 255);
const TRACK: Color = Color::new(209, 213, 219, 255);
const PAPER: Color = Color::new(249, 250, 251, 255);

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color::new(color.r, color.g, color.b, (color.a as f32 * alpha.clamp(0.0, 1.0)) as u8)
}

fn to_screen(rect: Rect, scroll: f32) -> Rectangle {
    Rectangle::new(rect.x, rect.y - scroll, rect.width, rect.height)
}

/// Draw the whole page at its current scroll offset.
pub fn draw_page(d: &mut RaylibDrawHandle, page: &Page, textures: &HashMap<SlideId, Texture2D>) {
    d.clear_background(PAPER);
    let scroll = page.scroll();

    draw_headline(d, page, scroll);
    draw_entries(d, page, scroll);
    draw_media(d, page, textures, scroll);
    draw_panels(d, page, scroll);
}

fn draw_headline(d: &mut RaylibDrawHandle, page: &Page, scroll: f32) {
    let rect = to_screen(page.layout.headline_rect(), scroll);
    let Some(headline) = page.headline.as_ref() else {
        d.draw_text(&page.title, rect.x as i32, rect.y as i32, 40, INK);
        return;
    };
    d.draw_text(headline.prefix(), rect.x as i32, rect.y as i32, 40, INK);
    let alpha = if headline.is_blurred() { 0.25 } else { 1.0 };
    d.draw_text(
        headline.suffix(),
        rect.x as i32,
        rect.y as i32 + 48,
        40,
        with_alpha(ACCENT, alpha),
    );
}

// Text entries on the left, each with a vertical line timer.
fn draw_entries(d: &mut RaylibDrawHandle, page: &Page, scroll: f32) {
    let showcase = &page.showcase;
    let active = showcase.active_index();
    let progress = showcase.progress_percent() / 100.0;

    for (index, slide) in showcase.slides().iter().enumerate() {
        let rect = to_screen(page.layout.entry_rect(index), scroll);
        let is_active = index == active;

        let track = Rectangle::new(rect.x, rect.y, 4.0, rect.height);
        d.draw_rectangle_rec(track, TRACK);
        if is_active && showcase.config().progress_bar {
            let fill = Rectangle::new(rect.x, rect.y, 4.0, rect.height * progress);
            d.draw_rectangle_rec(fill, ACCENT);
        }

        let alpha = if is_active { 1.0 } else { 0.6 };
        let title_color = if is_active { ACCENT } else { INK };
        d.draw_text(
            &slide.title,
            rect.x as i32 + 20,
            rect.y as i32 + 4,
            24,
            with_alpha(title_color, alpha),
        );
        if is_active {
            d.draw_text(
                &slide.description,
                rect.x as i32 + 20,
                rect.y as i32 + 40,
                16,
                with_alpha(MUTED, showcase.opacity()),
            );
        }
    }

    if showcase.is_paused() {
        let rect = to_screen(page.layout.entry_rect(showcase.slides().len()), scroll);
        d.draw_text("paused", rect.x as i32 + 20, rect.y as i32, 16, MUTED);
    }
}

// Media panel on the right, faded by the transition controller.
fn draw_media(
    d: &mut RaylibDrawHandle,
    page: &Page,
    textures: &HashMap<SlideId, Texture2D>,
    scroll: f32,
) {
    let showcase = &page.showcase;
    let rect = to_screen(page.layout.media_rect(), scroll);
    let opacity = showcase.opacity();
    let slide = showcase.active_slide();

    d.draw_rectangle_rec(rect, with_alpha(INK, opacity));

    match &slide.media {
        MediaRef::Image { url } => match textures.get(&slide.id) {
            Some(texture) => {
                let (tw, th) = (texture.width() as f32, texture.height() as f32);
                let scale = (rect.width / tw).min(rect.height / th);
                let dest = Rectangle::new(
                    rect.x + (rect.width - tw * scale) / 2.0,
                    rect.y + (rect.height - th * scale) / 2.0,
                    tw * scale,
                    th * scale,
                );
                d.draw_texture_pro(
                    texture,
                    Rectangle::new(0.0, 0.0, tw, th),
                    dest,
                    Vector2::zero(),
                    0.0,
                    with_alpha(Color::WHITE, opacity),
                );
            }
            None => {
                d.draw_text(url, rect.x as i32 + 16, rect.y as i32 + 16, 14, with_alpha(TRACK, opacity));
            }
        },
        MediaRef::Video { url } => {
            d.draw_text(url, rect.x as i32 + 16, rect.y as i32 + 16, 14, with_alpha(TRACK, opacity));
            if let Some(video) = page.slide_video() {
                let bar = Rectangle::new(rect.x, rect.y + rect.height - 6.0, rect.width, 6.0);
                d.draw_rectangle_rec(bar, with_alpha(MUTED, opacity));
                let played = Rectangle::new(bar.x, bar.y, bar.width * video.played_fraction(), bar.height);
                d.draw_rectangle_rec(played, with_alpha(Color::WHITE, opacity));
                if !video.is_playing() {
                    d.draw_text("click to play", rect.x as i32 + 16, rect.y as i32 + 40, 18, with_alpha(Color::WHITE, opacity));
                }
            }
        }
        MediaRef::Inline { text } => {
            d.draw_text(text, rect.x as i32 + 24, rect.y as i32 + 24, 28, with_alpha(Color::WHITE, opacity));
        }
    }
    if let Some(icon) = &slide.icon {
        d.draw_text(icon, rect.x as i32 + 16, (rect.y + rect.height) as i32 - 40, 18, with_alpha(ACCENT, opacity));
    }
}

fn draw_panels(d: &mut RaylibDrawHandle, page: &Page, scroll: f32) {
    for (index, panel) in page.panels.iter().enumerate() {
        let rect = to_screen(page.layout.panel_rect(index), scroll);
        d.draw_rectangle_rec(rect, INK);
        d.draw_text(&panel.title, rect.x as i32 + 24, rect.y as i32 + 24, 28, Color::WHITE);

        let media = panel.player.media();
        let status = match (panel.player.state(), media.is_playing()) {
            (Visibility::Unseen, _) => "not yet seen",
            (_, true) => "playing",
            (Visibility::Visible, false) if panel.player.is_held() => "paused",
            (Visibility::Visible, false) => "blocked: click to play",
            (Visibility::OutOfProximity, false) => "paused",
        };
        d.draw_text(status, rect.x as i32 + 24, rect.y as i32 + 64, 18, TRACK);

        let bar = Rectangle::new(rect.x, rect.y + rect.height - 6.0, rect.width, 6.0);
        d.draw_rectangle_rec(bar, MUTED);
        let played = Rectangle::new(bar.x, bar.y, bar.width * media.played_fraction(), bar.height);
        d.draw_rectangle_rec(played, ACCENT);
    }
}
