use std::collections::HashSet;

use crate::error::ShowcaseError;
use crate::slide::Slide;

/// Ordered, read-only slide list plus the active index.
#[derive(Debug)]
pub struct SlideStore {
    slides: Vec<Slide>,
    active: usize,
}

impl SlideStore {
    pub fn new(slides: Vec<Slide>) -> Result<Self, ShowcaseError> {
        if slides.is_empty() {
            return Err(ShowcaseError::EmptySlideList);
        }
        let mut seen = HashSet::new();
        for slide in &slides {
            if !seen.insert(slide.id) {
                return Err(ShowcaseError::DuplicateSlideId { id: slide.id });
            }
        }
        Ok(Self { slides, active: 0 })
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_slide(&self) -> &Slide {
        &self.slides[self.active]
    }

    pub fn next_index(&self) -> usize {
        (self.active + 1) % self.slides.len()
    }

    pub fn previous_index(&self) -> usize {
        (self.active + self.slides.len() - 1) % self.slides.len()
    }

    pub fn check(&self, index: usize) -> Result<(), ShowcaseError> {
        if index < self.slides.len() {
            Ok(())
        } else {
            Err(ShowcaseError::IndexOutOfRange {
                index,
                len: self.slides.len(),
            })
        }
    }

    /// Returns whether the active index changed. Out-of-range indices are ignored.
    pub(crate) fn commit(&mut self, index: usize) -> bool {
        if index >= self.slides.len() || index == self.active {
            return false;
        }
        self.active = index;
        true
    }
}
