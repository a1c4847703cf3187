use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlideId(pub u32);

impl fmt::Display for SlideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MediaRef {
    Video { url: String },
    Image { url: String },
    Inline { text: String },
}

impl MediaRef {
    pub fn is_video(&self) -> bool {
        matches!(self, MediaRef::Video { .. })
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            MediaRef::Video { url } | MediaRef::Image { url } => Some(url),
            MediaRef::Inline { .. } => None,
        }
    }
}

/// One entry of a showcase. Immutable once handed to an engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub id: SlideId,
    pub title: String,
    pub description: String,
    pub media: MediaRef,
    pub icon: Option<String>,
}

impl Slide {
    pub fn new(id: u32, title: impl Into<String>, description: impl Into<String>, media: MediaRef) -> Self {
        Self {
            id: SlideId(id),
            title: title.into(),
            description: description.into(),
            media,
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn is_video(&self) -> bool {
        self.media.is_video()
    }
}
