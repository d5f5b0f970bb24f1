use ::domain::Video;
use ::use_cases::boundaries::NumberOfVideosResponseModel;
use ::use_cases::boundaries::SearchVideosResponseModel;
use ::use_cases::boundaries::ShowAllPlaylistsResponseModel;
use ::use_cases::boundaries::ShowAllVideosResponseModel;
use ::use_cases::boundaries::ShowPlayingResponseModel;
use ::use_cases::boundaries::ShowPlaylistResponseModel;
use ::use_cases::boundaries::Update;
use ::use_cases::models::errors::Action;
use ::use_cases::models::errors::ErrorKind;
use ::use_cases::models::errors::PlayerError;
use ::use_cases::models::events::DiagnosticLevel;
use ::use_cases::models::events::PlayerEvent;
use ::use_cases::models::events::PlaylistEvent;
use ::use_cases::models::events::VideoAllowedEvent;
use ::use_cases::models::events::VideoContinuedEvent;
use ::use_cases::models::events::VideoFlaggedEvent;
use ::use_cases::models::events::VideoPausedEvent;
use ::use_cases::models::events::VideoPlayingEvent;
use ::use_cases::models::events::VideoStoppedEvent;

/// Line-oriented presenter. Everything the player reports ends up here as plain text.
pub struct TerminalView<Writer> {
    writer: ::std::cell::RefCell<Writer>,
    colorize: bool,
}

impl TerminalView<::std::io::Stdout> {
    pub fn stdout(colorize: bool) -> Self {
        Self::new(::std::io::stdout(), colorize)
    }
}

impl<Writer> TerminalView<Writer>
where
    Writer: ::std::io::Write,
{
    pub fn new(writer: Writer, colorize: bool) -> Self {
        Self { writer: ::std::cell::RefCell::new(writer), colorize }
    }

    pub fn println(&self, line: impl ::std::fmt::Display) {
        let mut writer = self.writer.borrow_mut();

        if let Err(err) = writeln!(writer, "{}", line).and_then(|_| writer.flush()) {
            ::tracing::error!(%err, "failed to write to terminal");
        }
    }

    fn diagnostic(&self, level: DiagnosticLevel, line: impl ::std::fmt::Display) {
        use ::colored::Colorize as _;

        let line = line.to_string();

        match (self.colorize, level) {
            (false, _) => self.println(line),
            (true, DiagnosticLevel::Warning) => self.println(line.yellow()),
            (true, DiagnosticLevel::Error) => self.println(line.red()),
        }
    }
}

impl<Writer> Update<PlayerEvent> for TerminalView<Writer>
where
    Writer: ::std::io::Write,
{
    fn update(&self, event: &PlayerEvent) {
        match event {
            PlayerEvent::VideoPlaying(event) => self.update(event),
            PlayerEvent::VideoStopped(event) => self.update(event),
            PlayerEvent::VideoPaused(event) => self.update(event),
            PlayerEvent::VideoContinued(event) => self.update(event),
            PlayerEvent::VideoFlagged(event) => self.update(event),
            PlayerEvent::VideoAllowed(event) => self.update(event),
            PlayerEvent::Playlist(event) => self.update(event),
        }
    }
}

impl<Writer> Update<VideoPlayingEvent> for TerminalView<Writer>
where
    Writer: ::std::io::Write,
{
    fn update(&self, VideoPlayingEvent { video }: &VideoPlayingEvent) {
        self.println(format_args!("Playing video: {}", video.title));
    }
}

impl<Writer> Update<VideoStoppedEvent> for TerminalView<Writer>
where
    Writer: ::std::io::Write,
{
    fn update(&self, VideoStoppedEvent { video }: &VideoStoppedEvent) {
        self.println(format_args!("Stopping video: {}", video.title));
    }
}

impl<Writer> Update<VideoPausedEvent> for TerminalView<Writer>
where
    Writer: ::std::io::Write,
{
    fn update(&self, VideoPausedEvent { video }: &VideoPausedEvent) {
        self.println(format_args!("Pausing video: {}", video.title));
    }
}

impl<Writer> Update<VideoContinuedEvent> for TerminalView<Writer>
where
    Writer: ::std::io::Write,
{
    fn update(&self, VideoContinuedEvent { video }: &VideoContinuedEvent) {
        self.println(format_args!("Continuing video: {}", video.title));
    }
}

impl<Writer> Update<VideoFlaggedEvent> for TerminalView<Writer>
where
    Writer: ::std::io::Write,
{
    fn update(&self, VideoFlaggedEvent { video, reason }: &VideoFlaggedEvent) {
        self.println(format_args!("Successfully flagged video: {} (reason: {})", video.title, reason));
    }
}

impl<Writer> Update<VideoAllowedEvent> for TerminalView<Writer>
where
    Writer: ::std::io::Write,
{
    fn update(&self, VideoAllowedEvent { video }: &VideoAllowedEvent) {
        self.println(format_args!("Successfully removed flag from video: {}", video.title));
    }
}

impl<Writer> Update<PlaylistEvent> for TerminalView<Writer>
where
    Writer: ::std::io::Write,
{
    fn update(&self, event: &PlaylistEvent) {
        match event {
            PlaylistEvent::Created { playlist } => {
                self.println(format_args!("Successfully created new playlist: {}", playlist))
            },
            PlaylistEvent::VideoAdded { playlist, video } => {
                self.println(format_args!("Added video to {}: {}", playlist, video.title))
            },
            PlaylistEvent::VideoRemoved { playlist, video } => {
                self.println(format_args!("Removed video from {}: {}", playlist, video.title))
            },
            PlaylistEvent::Cleared { playlist } => {
                self.println(format_args!("Successfully removed all videos from {}", playlist))
            },
            PlaylistEvent::Deleted { playlist } => self.println(format_args!("Deleted playlist: {}", playlist)),
        }
    }
}

impl<Writer> Update<PlayerError> for TerminalView<Writer>
where
    Writer: ::std::io::Write,
{
    fn update(&self, error: &PlayerError) {
        self.diagnostic(error.level(), FormattedError(error));
    }
}

impl<Writer> Update<()> for TerminalView<Writer>
where
    Writer: ::std::io::Write,
{
    fn update(&self, _: &()) {}
}

impl<Writer> Update<NumberOfVideosResponseModel> for TerminalView<Writer>
where
    Writer: ::std::io::Write,
{
    fn update(&self, NumberOfVideosResponseModel { count }: &NumberOfVideosResponseModel) {
        self.println(format_args!("{} videos in the library", count));
    }
}

impl<Writer> Update<ShowAllVideosResponseModel> for TerminalView<Writer>
where
    Writer: ::std::io::Write,
{
    fn update(&self, ShowAllVideosResponseModel { videos }: &ShowAllVideosResponseModel) {
        self.println("Here's a list of all available videos:");

        for video in videos {
            self.println(format_args!("{}{}", INDENT, FormattedListedVideo(video)));
        }
    }
}

impl<Writer> Update<ShowPlayingResponseModel> for TerminalView<Writer>
where
    Writer: ::std::io::Write,
{
    fn update(&self, ShowPlayingResponseModel { now_playing }: &ShowPlayingResponseModel) {
        match now_playing {
            Some(now_playing) if now_playing.paused => {
                self.println(format_args!("Currently playing: {} - PAUSED", FormattedVideo(&now_playing.video)))
            },
            Some(now_playing) => self.println(format_args!("Currently playing: {}", FormattedVideo(&now_playing.video))),
            None => self.println("No video is currently playing"),
        }
    }
}

impl<Writer> Update<ShowAllPlaylistsResponseModel> for TerminalView<Writer>
where
    Writer: ::std::io::Write,
{
    fn update(&self, ShowAllPlaylistsResponseModel { playlist_names }: &ShowAllPlaylistsResponseModel) {
        if playlist_names.is_empty() {
            return self.println("No playlists exist yet");
        }

        self.println("Showing all playlists: ");

        for name in playlist_names {
            self.println(format_args!("{}{}", INDENT, name));
        }
    }
}

impl<Writer> Update<ShowPlaylistResponseModel> for TerminalView<Writer>
where
    Writer: ::std::io::Write,
{
    fn update(&self, ShowPlaylistResponseModel { playlist_name, videos }: &ShowPlaylistResponseModel) {
        self.println(format_args!("Showing playlist: {}", playlist_name));

        if videos.is_empty() {
            return self.println(format_args!("{}No videos here yet", INDENT));
        }

        for video in videos {
            self.println(format_args!("{}{}", INDENT, FormattedListedVideo(video)));
        }
    }
}

impl<Writer> Update<SearchVideosResponseModel> for TerminalView<Writer>
where
    Writer: ::std::io::Write,
{
    fn update(&self, SearchVideosResponseModel { term, results }: &SearchVideosResponseModel) {
        if results.is_empty() {
            return self.println(format_args!("No search results for {}", term));
        }

        self.println(format_args!("Here are the results for {}:", term));

        for (idx, video) in results.iter().enumerate() {
            self.println(format_args!("  {}) {}", idx + 1, FormattedVideo(video)));
        }

        self.println("Would you like to play any of the above? If yes, specify the number of the video. ");
        self.println("If your answer is not a valid number, we will assume it's a no.");
    }
}

const INDENT: &str = "    ";

struct FormattedVideo<'a>(&'a Video);

impl ::std::fmt::Display for FormattedVideo<'_> {
    fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        write!(formatter, "{} ({}) [{}]", self.0.title, self.0.id, self.0.format_tags())
    }
}

/// Catalog and playlist listings also show why a video was flagged.
struct FormattedListedVideo<'a>(&'a Video);

impl ::std::fmt::Display for FormattedListedVideo<'_> {
    fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        write!(formatter, "{}", FormattedVideo(self.0))?;

        if self.0.is_flagged() {
            write!(formatter, " - FLAGGED (reason: {})", self.0.flag_reason())?;
        }

        Ok(())
    }
}

struct FormattedError<'a>(&'a PlayerError);

impl ::std::fmt::Display for FormattedError<'_> {
    fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let PlayerError { action, kind } = self.0;

        // Informational kinds are reported without the action prefix.
        if matches!(kind, ErrorKind::AlreadyPaused { .. } | ErrorKind::NoVideosAvailable) {
            return write!(formatter, "{}", FormattedReason(kind));
        }

        match action {
            Action::Play | Action::PlayRandom => write!(formatter, "Cannot play video")?,
            Action::Stop => write!(formatter, "Cannot stop video")?,
            Action::Pause => write!(formatter, "Cannot pause video")?,
            Action::Continue => write!(formatter, "Cannot continue video")?,
            Action::CreatePlaylist => write!(formatter, "Cannot create playlist")?,
            Action::AddToPlaylist { playlist } => write!(formatter, "Cannot add video to {}", playlist)?,
            Action::RemoveFromPlaylist { playlist } => write!(formatter, "Cannot remove video from {}", playlist)?,
            Action::ClearPlaylist { playlist } => write!(formatter, "Cannot clear playlist {}", playlist)?,
            Action::DeletePlaylist { playlist } => write!(formatter, "Cannot delete playlist {}", playlist)?,
            Action::ShowPlaylist { playlist } => write!(formatter, "Cannot show playlist {}", playlist)?,
            Action::Flag => write!(formatter, "Cannot flag video")?,
            Action::Allow => write!(formatter, "Cannot remove flag from video")?,
        }

        write!(formatter, ": {}", FormattedReason(kind))
    }
}

struct FormattedReason<'a>(&'a ErrorKind);

impl ::std::fmt::Display for FormattedReason<'_> {
    fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        match self.0 {
            ErrorKind::VideoNotFound => write!(formatter, "Video does not exist"),
            ErrorKind::NoVideoPlaying => write!(formatter, "No video is currently playing"),
            ErrorKind::AlreadyPaused { title } => write!(formatter, "Video already paused: {}", title),
            ErrorKind::NotPaused => write!(formatter, "Video is not paused"),
            ErrorKind::NameAlreadyUsed => write!(formatter, "A playlist with the same name already exists"),
            ErrorKind::PlaylistNotFound => write!(formatter, "Playlist does not exist"),
            ErrorKind::NotInPlaylist => write!(formatter, "Video is not in playlist"),
            ErrorKind::AlreadyInPlaylist => write!(formatter, "Video already added"),
            ErrorKind::FlaggedVideo { reason } => write!(formatter, "Video is currently flagged (reason: {})", reason),
            ErrorKind::AlreadyFlagged => write!(formatter, "Video is already flagged"),
            ErrorKind::NotFlagged => write!(formatter, "Video is not flagged"),
            ErrorKind::NoVideosAvailable => write!(formatter, "No videos available"),
        }
    }
}
