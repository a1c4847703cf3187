use std::fs;
use std::io::Cursor;
use std::path::Path;

use exif::{In, Reader, Tag, Value};
use log::{debug, warn};
use raylib::prelude::*;

use crate::error::ShowcaseError;

/// EXIF orientation of a JPEG, 1 (upright) when absent or unreadable.
pub fn exif_orientation(image_path: &Path, file_bytes: &[u8]) -> u16 {
    let extension = image_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();
    if extension != "jpg" && extension != "jpeg" {
        return 1;
    }
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            warn!("could not read EXIF data for {}: {}", image_path.display(), e);
            1
        }
    }
}

/// Load an image slide's texture, upright according to its EXIF orientation.
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D, ShowcaseError> {
    let texture_err = |detail: String| ShowcaseError::Texture {
        path: image_path.to_path_buf(),
        detail,
    };

    let file_bytes = fs::read(image_path)?;
    let orientation = exif_orientation(image_path, &file_bytes);

    let extension = image_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();
    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &file_bytes)
        .map_err(|e| texture_err(e.to_string()))?;

    // 3 = 180, 6 = 90 CW, 8 = 90 CCW. Flipped orientations are left as is.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    if orientation != 1 {
        debug!("{}: applied EXIF orientation {}", image_path.display(), orientation);
    }

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| texture_err(e.to_string()))
}
