use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use raylib::prelude::*;

use showcase::args::Args;
use showcase::content::{self, Content};
use showcase::page::Page;
use showcase::render::draw_page;
use showcase::slide::{MediaRef, SlideId};
use showcase::texture_loader::load_texture_with_exif_rotation;

const SCROLL_STEP: f32 = 60.0;

fn load(args: &Args) -> Result<Content> {
    let mut content = if let Some(path) = &args.content {
        content::load_content(path)
            .with_context(|| format!("loading content from {}", path.display()))?
    } else if let Some(dir) = &args.images {
        let paths = content::load_sorted_image_paths(dir)
            .with_context(|| format!("scanning {}", dir.display()))?;
        info!("{} images in {}", paths.len(), dir.display());
        let mut demo = content::demo_content()?;
        demo.title = dir
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        demo.slides = content::image_slides(&paths);
        demo.media_durations.clear();
        demo
    } else {
        content::demo_content()?
    };
    if let Some(preset) = args.preset {
        content.set_preset(preset);
    }
    Ok(content)
}

fn load_textures(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    content: &Content,
) -> HashMap<SlideId, Texture2D> {
    let mut textures = HashMap::new();
    for slide in &content.slides {
        let MediaRef::Image { url } = &slide.media else {
            continue;
        };
        // Remote images are drawn as placeholders.
        if url.contains("://") {
            continue;
        }
        match load_texture_with_exif_rotation(rl, thread, Path::new(url)) {
            Ok(texture) => {
                textures.insert(slide.id, texture);
            }
            Err(e) => warn!("skipping image for slide {}: {}", slide.id, e),
        }
    }
    textures
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let content = load(&args)?;

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title(&format!("Showcase: {}", content.title))
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(args.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let textures = load_textures(&mut rl, &thread, &content);
    let mut page = Page::new(
        content,
        args.width as f32,
        args.height as f32,
        args.block_autoplay,
    )
    .context("building the page")?;
    info!("{} slides, preset {:?}", page.showcase.slides().len(), page.showcase.config().policy);

    while !rl.window_should_close() {
        let dt = Duration::from_secs_f32(rl.get_frame_time().max(0.0));

        if rl.is_window_resized() {
            page.resize(rl.get_screen_width() as f32, rl.get_screen_height() as f32);
        }

        let wheel = rl.get_mouse_wheel_move();
        if wheel != 0.0 {
            page.scroll_by(-wheel * SCROLL_STEP);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_DOWN) {
            page.scroll_by(SCROLL_STEP);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_UP) {
            page.scroll_by(-SCROLL_STEP);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            page.showcase.next();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            page.showcase.previous();
        }
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let pos = rl.get_mouse_position();
            page.click(pos.x, pos.y + page.scroll());
        }

        page.update(dt);

        let mut d = rl.begin_drawing(&thread);
        draw_page(&mut d, &page, &textures);
    }

    page.unmount();
    Ok(())
}
