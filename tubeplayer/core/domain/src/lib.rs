pub(crate) mod utils;

pub use crate::utils::aliases::MaybeOwnedString;
pub use crate::utils::aliases::MaybeOwnedVec;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    pub id: VideoId,
    pub title: MaybeOwnedString,
    pub tags: MaybeOwnedVec<MaybeOwnedString>,

    pub flag: Option<FlagReason>,
}

pub type VideoId = MaybeOwnedString;

impl Video {
    pub fn new(
        id: impl Into<VideoId>, title: impl Into<MaybeOwnedString>,
        tags: impl IntoIterator<Item = impl Into<MaybeOwnedString>>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tags: MaybeOwnedVec::Owned(tags.into_iter().map(|tag| tag.into()).collect()),
            flag: None,
        }
    }

    pub fn is_flagged(&self) -> bool {
        self.flag.is_some()
    }

    /// Falls back to [`FlagReason::NOT_SUPPLIED`] while the video is not flagged.
    pub fn flag_reason(&self) -> &str {
        self.flag
            .as_ref()
            .map_or(FlagReason::NOT_SUPPLIED, |reason| reason.as_str())
    }

    pub fn set_flag(&mut self, reason: FlagReason) {
        self.flag = Some(reason);
    }

    pub fn allow(&mut self) {
        self.flag = None;
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();

        self.tags.iter().any(|candidate| candidate.to_lowercase() == tag)
    }

    pub fn title_contains(&self, term: &str) -> bool {
        self.title.to_lowercase().contains(&term.to_lowercase())
    }

    pub fn format_tags(&self) -> String {
        self.tags.join(TAG_DELIMITER)
    }
}

const TAG_DELIMITER: &str = " ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagReason(MaybeOwnedString);

impl FlagReason {
    pub const NOT_SUPPLIED: &'static str = "Not supplied";

    /// Blank reasons collapse to [`Self::NOT_SUPPLIED`].
    pub fn new(reason: Option<impl Into<MaybeOwnedString>>) -> Self {
        match reason.map(Into::into) {
            Some(reason) if !reason.trim().is_empty() => Self(reason),
            _ => Self::default(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for FlagReason {
    fn default() -> Self {
        Self(MaybeOwnedString::Borrowed(Self::NOT_SUPPLIED))
    }
}

impl ::std::fmt::Display for FlagReason {
    fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    pub name: PlaylistName,
    pub videos: Vec<VideoId>,
}

pub type PlaylistName = MaybeOwnedString;

impl Playlist {
    pub fn new(name: impl Into<PlaylistName>) -> Self {
        Self { name: name.into(), videos: Vec::new() }
    }

    /// Case-insensitive lookup key for a playlist name.
    pub fn key(name: &str) -> String {
        name.to_uppercase()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.videos.iter().any(|video_id| video_id == id)
    }

    /// Returns `false` without touching the playlist if the video is already in it.
    pub fn add(&mut self, id: VideoId) -> bool {
        if self.contains(&id) {
            return false;
        }

        self.videos.push(id);
        true
    }

    pub fn remove(&mut self, id: &str) -> bool {
        match self.videos.iter().position(|video_id| video_id == id) {
            Some(idx) => {
                self.videos.remove(idx);
                true
            },
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.videos.clear();
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}
