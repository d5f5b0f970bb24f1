pub mod events {
    use ::domain::FlagReason;
    use ::domain::PlaylistName;
    use ::domain::Video;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum PlayerEvent {
        VideoPlaying(VideoPlayingEvent),
        VideoStopped(VideoStoppedEvent),
        VideoPaused(VideoPausedEvent),
        VideoContinued(VideoContinuedEvent),
        VideoFlagged(VideoFlaggedEvent),
        VideoAllowed(VideoAllowedEvent),
        Playlist(PlaylistEvent),
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct VideoPlayingEvent {
        pub video: Video,
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct VideoStoppedEvent {
        pub video: Video,
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct VideoPausedEvent {
        pub video: Video,
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct VideoContinuedEvent {
        pub video: Video,
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct VideoFlaggedEvent {
        pub video: Video,
        pub reason: FlagReason,
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct VideoAllowedEvent {
        pub video: Video,
    }

    /// Playlist names here are the ones supplied with the request, not the stored display names.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum PlaylistEvent {
        Created { playlist: PlaylistName },
        VideoAdded { playlist: PlaylistName, video: Video },
        VideoRemoved { playlist: PlaylistName, video: Video },
        Cleared { playlist: PlaylistName },
        Deleted { playlist: PlaylistName },
    }

    macro_rules! impl_from_event {
        ($($variant:ident($event:ty)),* $(,)?) => {
            $(
                impl From<$event> for PlayerEvent {
                    fn from(event: $event) -> Self {
                        Self::$variant(event)
                    }
                }
            )*
        };
    }

    impl_from_event!(
        VideoPlaying(VideoPlayingEvent),
        VideoStopped(VideoStoppedEvent),
        VideoPaused(VideoPausedEvent),
        VideoContinued(VideoContinuedEvent),
        VideoFlagged(VideoFlaggedEvent),
        VideoAllowed(VideoAllowedEvent),
        Playlist(PlaylistEvent),
    );

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum DiagnosticLevel {
        Warning,
        Error,
    }
}

pub mod errors {
    use ::domain::FlagReason;
    use ::domain::MaybeOwnedString;
    use ::domain::PlaylistName;

    use crate::models::events::DiagnosticLevel;

    /// A rejected command, carrying what was attempted and why it was refused.
    #[derive(Debug, Clone, PartialEq, Eq, ::thiserror::Error)]
    #[error("cannot {action}: {kind}")]
    pub struct PlayerError {
        pub action: Action,
        pub kind: ErrorKind,
    }

    impl PlayerError {
        pub fn new(action: Action, kind: ErrorKind) -> Self {
            Self { action, kind }
        }

        pub fn level(&self) -> DiagnosticLevel {
            self.kind.level()
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Action {
        Play,
        PlayRandom,
        Stop,
        Pause,
        Continue,
        CreatePlaylist,
        AddToPlaylist { playlist: PlaylistName },
        RemoveFromPlaylist { playlist: PlaylistName },
        ClearPlaylist { playlist: PlaylistName },
        DeletePlaylist { playlist: PlaylistName },
        ShowPlaylist { playlist: PlaylistName },
        Flag,
        Allow,
    }

    impl ::std::fmt::Display for Action {
        fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
            match self {
                Self::Play => write!(formatter, "play video"),
                Self::PlayRandom => write!(formatter, "play random video"),
                Self::Stop => write!(formatter, "stop video"),
                Self::Pause => write!(formatter, "pause video"),
                Self::Continue => write!(formatter, "continue video"),
                Self::CreatePlaylist => write!(formatter, "create playlist"),
                Self::AddToPlaylist { playlist } => write!(formatter, "add video to {}", playlist),
                Self::RemoveFromPlaylist { playlist } => write!(formatter, "remove video from {}", playlist),
                Self::ClearPlaylist { playlist } => write!(formatter, "clear playlist {}", playlist),
                Self::DeletePlaylist { playlist } => write!(formatter, "delete playlist {}", playlist),
                Self::ShowPlaylist { playlist } => write!(formatter, "show playlist {}", playlist),
                Self::Flag => write!(formatter, "flag video"),
                Self::Allow => write!(formatter, "allow video"),
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq, ::thiserror::Error)]
    pub enum ErrorKind {
        #[error("video not found")]
        VideoNotFound,
        #[error("no video playing")]
        NoVideoPlaying,
        #[error("{title} already paused")]
        AlreadyPaused { title: MaybeOwnedString },
        #[error("video not paused")]
        NotPaused,
        #[error("playlist name already used")]
        NameAlreadyUsed,
        #[error("playlist not found")]
        PlaylistNotFound,
        #[error("video not in playlist")]
        NotInPlaylist,
        #[error("video already in playlist")]
        AlreadyInPlaylist,
        #[error("video flagged ({reason})")]
        FlaggedVideo { reason: FlagReason },
        #[error("video already flagged")]
        AlreadyFlagged,
        #[error("video not flagged")]
        NotFlagged,
        #[error("no unflagged videos")]
        NoVideosAvailable,
    }

    impl ErrorKind {
        pub fn level(&self) -> DiagnosticLevel {
            match self {
                Self::AlreadyPaused { .. } | Self::NoVideosAvailable => DiagnosticLevel::Warning,
                _ => DiagnosticLevel::Error,
            }
        }
    }
}

pub mod descriptors {
    use ::domain::Video;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum SearchMode {
        TitleSubstring,
        ExactTag,
    }

    impl SearchMode {
        pub fn matches(&self, video: &Video, term: &str) -> bool {
            match self {
                Self::TitleSubstring => video.title_contains(term),
                Self::ExactTag => video.has_tag(term),
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct NowPlaying {
        pub video: Video,
        pub paused: bool,
    }

    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct PlaybackState {
        pub current: Option<::domain::VideoId>,
        pub paused: bool,
    }
}
