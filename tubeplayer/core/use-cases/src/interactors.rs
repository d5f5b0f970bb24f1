use ::derive_new::new;
use ::domain::FlagReason;
use ::domain::Video;
use ::domain::VideoId;

use crate::boundaries::Accept;
use crate::boundaries::AddToPlaylistRequestModel;
use crate::boundaries::AllowVideoRequestModel;
use crate::boundaries::ClearPlaylistRequestModel;
use crate::boundaries::ContinueVideoRequestModel;
use crate::boundaries::CreatePlaylistRequestModel;
use crate::boundaries::DeletePlaylistRequestModel;
use crate::boundaries::FlagVideoRequestModel;
use crate::boundaries::NumberOfVideosRequestModel;
use crate::boundaries::NumberOfVideosResponseModel;
use crate::boundaries::PauseVideoRequestModel;
use crate::boundaries::PlayRandomVideoRequestModel;
use crate::boundaries::PlayVideoRequestModel;
use crate::boundaries::PlayerOutputBoundary;
use crate::boundaries::RemoveFromPlaylistRequestModel;
use crate::boundaries::SearchVideosRequestModel;
use crate::boundaries::SearchVideosResponseModel;
use crate::boundaries::ShowAllPlaylistsRequestModel;
use crate::boundaries::ShowAllPlaylistsResponseModel;
use crate::boundaries::ShowAllVideosRequestModel;
use crate::boundaries::ShowAllVideosResponseModel;
use crate::boundaries::ShowPlayingRequestModel;
use crate::boundaries::ShowPlayingResponseModel;
use crate::boundaries::ShowPlaylistRequestModel;
use crate::boundaries::ShowPlaylistResponseModel;
use crate::boundaries::StopVideoRequestModel;
use crate::gateways::PlaylistRepository;
use crate::gateways::RandomPicker;
use crate::gateways::VideoCatalog;
use crate::models::descriptors::NowPlaying;
use crate::models::descriptors::PlaybackState;
use crate::models::errors::Action;
use crate::models::errors::ErrorKind;
use crate::models::errors::PlayerError;
use crate::models::events::PlayerEvent;
use crate::models::events::PlaylistEvent;
use crate::models::events::VideoAllowedEvent;
use crate::models::events::VideoContinuedEvent;
use crate::models::events::VideoFlaggedEvent;
use crate::models::events::VideoPausedEvent;
use crate::models::events::VideoPlayingEvent;
use crate::models::events::VideoStoppedEvent;
use crate::utils::aliases::Outcome;

/// Single entry point for every player command. Owns the catalog, the playlists and the
/// now-playing slot; success effects are pushed to the output boundary in the order they happen.
#[derive(new)]
pub struct PlayerInteractor {
    output_boundary: ::std::rc::Rc<dyn PlayerOutputBoundary>,

    catalog: ::std::boxed::Box<dyn VideoCatalog>,
    playlists: ::std::boxed::Box<dyn PlaylistRepository>,
    picker: ::std::boxed::Box<dyn RandomPicker>,

    #[new(default)]
    state: PlaybackState,
}

impl PlayerInteractor {
    pub fn playback(&self) -> &PlaybackState {
        &self.state
    }

    pub fn catalog(&self) -> &dyn VideoCatalog {
        &*self.catalog
    }

    pub fn playlists(&self) -> &dyn PlaylistRepository {
        &*self.playlists
    }

    fn current_video(&self) -> Option<&Video> {
        self.state.current.as_deref().and_then(|id| self.catalog.get(id))
    }

    fn is_current(&self, id: &str) -> bool {
        self.state.current.as_deref() == Some(id)
    }

    /// Empties the now-playing slot, announcing the stop if something was in it.
    fn stop_current(&mut self) -> bool {
        let Some(video) = self.current_video().cloned() else {
            return false;
        };

        self.state = PlaybackState::default();
        ::tracing::debug!(video_id = %video.id, "stopped video");
        self.emit(VideoStoppedEvent { video });

        true
    }

    fn emit(&self, event: impl Into<PlayerEvent>) {
        self.output_boundary.update(&event.into());
    }

    fn reject(action: Action, kind: ErrorKind) -> PlayerError {
        let error = PlayerError::new(action, kind);
        ::tracing::warn!(%error, "command rejected");

        error
    }
}

impl Accept<NumberOfVideosRequestModel> for PlayerInteractor {
    type Response = NumberOfVideosResponseModel;

    fn accept(&mut self, _: NumberOfVideosRequestModel) -> Outcome<Self::Response> {
        Ok(NumberOfVideosResponseModel { count: self.catalog.count() })
    }
}

impl Accept<ShowAllVideosRequestModel> for PlayerInteractor {
    type Response = ShowAllVideosResponseModel;

    fn accept(&mut self, _: ShowAllVideosRequestModel) -> Outcome<Self::Response> {
        let mut videos: Vec<Video> = self.catalog.get_all().into_iter().cloned().collect();
        sort_by_title(&mut videos);

        Ok(ShowAllVideosResponseModel { videos })
    }
}

impl Accept<PlayVideoRequestModel> for PlayerInteractor {
    type Response = ();

    fn accept(&mut self, request: PlayVideoRequestModel) -> Outcome<Self::Response> {
        let video = self
            .catalog
            .get(&request.video_id)
            .cloned()
            .ok_or_else(|| Self::reject(Action::Play, ErrorKind::VideoNotFound))?;

        self.stop_current();

        // A flagged video still takes the slot, it just never starts.
        self.state = PlaybackState { current: Some(video.id.clone()), paused: false };

        if let Some(reason) = &video.flag {
            return Err(Self::reject(Action::Play, ErrorKind::FlaggedVideo { reason: reason.clone() }));
        }

        ::tracing::debug!(video_id = %video.id, "playing video");
        self.emit(VideoPlayingEvent { video });

        Ok(())
    }
}

impl Accept<PlayRandomVideoRequestModel> for PlayerInteractor {
    type Response = ();

    fn accept(&mut self, _: PlayRandomVideoRequestModel) -> Outcome<Self::Response> {
        let mut candidates: Vec<VideoId> = self
            .catalog
            .get_all()
            .into_iter()
            .filter(|video| !video.is_flagged())
            .map(|video| video.id.clone())
            .collect();

        candidates.sort();

        let video_id = self
            .picker
            .pick(candidates.len())
            .and_then(|idx| candidates.get(idx).cloned())
            .ok_or_else(|| Self::reject(Action::PlayRandom, ErrorKind::NoVideosAvailable))?;

        self.accept(PlayVideoRequestModel { video_id })
    }
}

impl Accept<StopVideoRequestModel> for PlayerInteractor {
    type Response = ();

    fn accept(&mut self, _: StopVideoRequestModel) -> Outcome<Self::Response> {
        if !self.stop_current() {
            return Err(Self::reject(Action::Stop, ErrorKind::NoVideoPlaying));
        }

        Ok(())
    }
}

impl Accept<PauseVideoRequestModel> for PlayerInteractor {
    type Response = ();

    fn accept(&mut self, _: PauseVideoRequestModel) -> Outcome<Self::Response> {
        let video = self
            .current_video()
            .cloned()
            .ok_or_else(|| Self::reject(Action::Pause, ErrorKind::NoVideoPlaying))?;

        if self.state.paused {
            return Err(Self::reject(Action::Pause, ErrorKind::AlreadyPaused { title: video.title }));
        }

        self.state.paused = true;
        ::tracing::debug!(video_id = %video.id, "paused video");
        self.emit(VideoPausedEvent { video });

        Ok(())
    }
}

impl Accept<ContinueVideoRequestModel> for PlayerInteractor {
    type Response = ();

    fn accept(&mut self, _: ContinueVideoRequestModel) -> Outcome<Self::Response> {
        let video = self
            .current_video()
            .cloned()
            .ok_or_else(|| Self::reject(Action::Continue, ErrorKind::NoVideoPlaying))?;

        if !self.state.paused {
            return Err(Self::reject(Action::Continue, ErrorKind::NotPaused));
        }

        // The paused flag is left set on purpose; continuing only announces the video.
        ::tracing::debug!(video_id = %video.id, "continued video");
        self.emit(VideoContinuedEvent { video });

        Ok(())
    }
}

impl Accept<ShowPlayingRequestModel> for PlayerInteractor {
    type Response = ShowPlayingResponseModel;

    fn accept(&mut self, _: ShowPlayingRequestModel) -> Outcome<Self::Response> {
        let now_playing = self.current_video().cloned().map(|video| NowPlaying {
            video,
            paused: self.state.paused,
        });

        Ok(ShowPlayingResponseModel { now_playing })
    }
}

impl Accept<CreatePlaylistRequestModel> for PlayerInteractor {
    type Response = ();

    fn accept(&mut self, request: CreatePlaylistRequestModel) -> Outcome<Self::Response> {
        let playlist = self
            .playlists
            .create(request.playlist_name)
            .map_err(|kind| Self::reject(Action::CreatePlaylist, kind))?
            .name
            .clone();

        ::tracing::debug!(%playlist, "created playlist");
        self.emit(PlaylistEvent::Created { playlist });

        Ok(())
    }
}

impl Accept<AddToPlaylistRequestModel> for PlayerInteractor {
    type Response = ();

    fn accept(&mut self, request: AddToPlaylistRequestModel) -> Outcome<Self::Response> {
        let AddToPlaylistRequestModel { playlist_name, video_id } = request;
        let action = || Action::AddToPlaylist { playlist: playlist_name.clone() };

        if self.playlists.get(&playlist_name).is_none() {
            return Err(Self::reject(action(), ErrorKind::PlaylistNotFound));
        }

        let video = self
            .catalog
            .get(&video_id)
            .cloned()
            .ok_or_else(|| Self::reject(action(), ErrorKind::VideoNotFound))?;

        if let Some(reason) = &video.flag {
            return Err(Self::reject(action(), ErrorKind::FlaggedVideo { reason: reason.clone() }));
        }

        let playlist = self
            .playlists
            .get_mut(&playlist_name)
            .ok_or_else(|| Self::reject(action(), ErrorKind::PlaylistNotFound))?;

        if !playlist.add(video.id.clone()) {
            return Err(Self::reject(action(), ErrorKind::AlreadyInPlaylist));
        }

        ::tracing::debug!(playlist = %playlist_name, video_id = %video.id, "added video to playlist");
        self.emit(PlaylistEvent::VideoAdded { playlist: playlist_name, video });

        Ok(())
    }
}

impl Accept<RemoveFromPlaylistRequestModel> for PlayerInteractor {
    type Response = ();

    fn accept(&mut self, request: RemoveFromPlaylistRequestModel) -> Outcome<Self::Response> {
        let RemoveFromPlaylistRequestModel { playlist_name, video_id } = request;
        let action = || Action::RemoveFromPlaylist { playlist: playlist_name.clone() };

        if self.playlists.get(&playlist_name).is_none() {
            return Err(Self::reject(action(), ErrorKind::PlaylistNotFound));
        }

        let video = self
            .catalog
            .get(&video_id)
            .cloned()
            .ok_or_else(|| Self::reject(action(), ErrorKind::VideoNotFound))?;

        let playlist = self
            .playlists
            .get_mut(&playlist_name)
            .ok_or_else(|| Self::reject(action(), ErrorKind::PlaylistNotFound))?;

        if !playlist.remove(&video.id) {
            return Err(Self::reject(action(), ErrorKind::NotInPlaylist));
        }

        ::tracing::debug!(playlist = %playlist_name, video_id = %video.id, "removed video from playlist");
        self.emit(PlaylistEvent::VideoRemoved { playlist: playlist_name, video });

        Ok(())
    }
}

impl Accept<ClearPlaylistRequestModel> for PlayerInteractor {
    type Response = ();

    fn accept(&mut self, request: ClearPlaylistRequestModel) -> Outcome<Self::Response> {
        let ClearPlaylistRequestModel { playlist_name } = request;

        self.playlists
            .get_mut(&playlist_name)
            .ok_or_else(|| {
                Self::reject(
                    Action::ClearPlaylist { playlist: playlist_name.clone() },
                    ErrorKind::PlaylistNotFound,
                )
            })?
            .clear();

        ::tracing::debug!(playlist = %playlist_name, "cleared playlist");
        self.emit(PlaylistEvent::Cleared { playlist: playlist_name });

        Ok(())
    }
}

impl Accept<DeletePlaylistRequestModel> for PlayerInteractor {
    type Response = ();

    fn accept(&mut self, request: DeletePlaylistRequestModel) -> Outcome<Self::Response> {
        let DeletePlaylistRequestModel { playlist_name } = request;

        self.playlists.delete(&playlist_name).map_err(|kind| {
            Self::reject(Action::DeletePlaylist { playlist: playlist_name.clone() }, kind)
        })?;

        ::tracing::debug!(playlist = %playlist_name, "deleted playlist");
        self.emit(PlaylistEvent::Deleted { playlist: playlist_name });

        Ok(())
    }
}

impl Accept<ShowPlaylistRequestModel> for PlayerInteractor {
    type Response = ShowPlaylistResponseModel;

    fn accept(&mut self, request: ShowPlaylistRequestModel) -> Outcome<Self::Response> {
        let ShowPlaylistRequestModel { playlist_name } = request;

        let playlist = self.playlists.get(&playlist_name).ok_or_else(|| {
            Self::reject(Action::ShowPlaylist { playlist: playlist_name.clone() }, ErrorKind::PlaylistNotFound)
        })?;

        let videos = playlist
            .videos
            .iter()
            .filter_map(|id| self.catalog.get(id))
            .cloned()
            .collect();

        Ok(ShowPlaylistResponseModel { playlist_name, videos })
    }
}

impl Accept<ShowAllPlaylistsRequestModel> for PlayerInteractor {
    type Response = ShowAllPlaylistsResponseModel;

    fn accept(&mut self, _: ShowAllPlaylistsRequestModel) -> Outcome<Self::Response> {
        let mut playlist_names: Vec<_> = self
            .playlists
            .get_all()
            .into_iter()
            .map(|playlist| playlist.name.clone())
            .collect();

        playlist_names.sort();

        Ok(ShowAllPlaylistsResponseModel { playlist_names })
    }
}

impl Accept<SearchVideosRequestModel> for PlayerInteractor {
    type Response = SearchVideosResponseModel;

    fn accept(&mut self, request: SearchVideosRequestModel) -> Outcome<Self::Response> {
        let SearchVideosRequestModel { term, mode } = request;

        let mut results: Vec<Video> = self
            .catalog
            .get_all()
            .into_iter()
            .filter(|video| !video.is_flagged())
            .filter(|video| mode.matches(video, &term))
            .cloned()
            .collect();

        sort_by_title(&mut results);
        ::tracing::debug!(%term, ?mode, results = results.len(), "searched videos");

        Ok(SearchVideosResponseModel { term, results })
    }
}

impl Accept<FlagVideoRequestModel> for PlayerInteractor {
    type Response = ();

    fn accept(&mut self, request: FlagVideoRequestModel) -> Outcome<Self::Response> {
        let video = self
            .catalog
            .get_mut(&request.video_id)
            .ok_or_else(|| Self::reject(Action::Flag, ErrorKind::VideoNotFound))?;

        if video.is_flagged() {
            return Err(Self::reject(Action::Flag, ErrorKind::AlreadyFlagged));
        }

        let reason = FlagReason::new(request.reason);
        video.set_flag(reason.clone());

        let video = video.clone();

        if self.is_current(&video.id) {
            self.stop_current();
        }

        ::tracing::debug!(video_id = %video.id, %reason, "flagged video");
        self.emit(VideoFlaggedEvent { video, reason });

        Ok(())
    }
}

impl Accept<AllowVideoRequestModel> for PlayerInteractor {
    type Response = ();

    fn accept(&mut self, request: AllowVideoRequestModel) -> Outcome<Self::Response> {
        let video = self
            .catalog
            .get_mut(&request.video_id)
            .ok_or_else(|| Self::reject(Action::Allow, ErrorKind::VideoNotFound))?;

        if !video.is_flagged() {
            return Err(Self::reject(Action::Allow, ErrorKind::NotFlagged));
        }

        video.allow();

        let video = video.clone();

        ::tracing::debug!(video_id = %video.id, "allowed video");
        self.emit(VideoAllowedEvent { video });

        Ok(())
    }
}

fn sort_by_title(videos: &mut [Video]) {
    videos.sort_by(|lhs, rhs| lhs.title.cmp(&rhs.title).then_with(|| lhs.id.cmp(&rhs.id)));
}

#[cfg(test)]
mod tests {
    use ::domain::Playlist;
    use ::domain::PlaylistName;

    use super::*;
    use crate::boundaries::Update;
    use crate::models::descriptors::SearchMode;
    use crate::models::events::DiagnosticLevel;

    #[derive(Default)]
    struct RecordingBoundary {
        events: ::std::cell::RefCell<Vec<PlayerEvent>>,
    }

    impl RecordingBoundary {
        fn drain(&self) -> Vec<PlayerEvent> {
            self.events.borrow_mut().drain(..).collect()
        }
    }

    impl Update<PlayerEvent> for RecordingBoundary {
        fn update(&self, event: &PlayerEvent) {
            self.events.borrow_mut().push(event.clone());
        }
    }

    struct StubCatalog(Vec<Video>);

    impl VideoCatalog for StubCatalog {
        fn get(&self, id: &str) -> Option<&Video> {
            self.0.iter().find(|video| video.id == id)
        }

        fn get_mut(&mut self, id: &str) -> Option<&mut Video> {
            self.0.iter_mut().find(|video| video.id == id)
        }

        fn get_all(&self) -> Vec<&Video> {
            self.0.iter().rev().collect()
        }
    }

    #[derive(Default)]
    struct StubPlaylists(Vec<Playlist>);

    impl PlaylistRepository for StubPlaylists {
        fn create(&mut self, name: PlaylistName) -> Result<&mut Playlist, ErrorKind> {
            if self.get(&name).is_some() {
                return Err(ErrorKind::NameAlreadyUsed);
            }

            self.0.push(Playlist::new(name));
            self.0.last_mut().ok_or(ErrorKind::PlaylistNotFound)
        }

        fn get(&self, name: &str) -> Option<&Playlist> {
            self.0.iter().find(|playlist| Playlist::key(&playlist.name) == Playlist::key(name))
        }

        fn get_mut(&mut self, name: &str) -> Option<&mut Playlist> {
            self.0.iter_mut().find(|playlist| Playlist::key(&playlist.name) == Playlist::key(name))
        }

        fn delete(&mut self, name: &str) -> Result<Playlist, ErrorKind> {
            let idx = self
                .0
                .iter()
                .position(|playlist| Playlist::key(&playlist.name) == Playlist::key(name))
                .ok_or(ErrorKind::PlaylistNotFound)?;

            Ok(self.0.remove(idx))
        }

        fn get_all(&self) -> Vec<&Playlist> {
            self.0.iter().collect()
        }
    }

    struct LastPicker;

    impl RandomPicker for LastPicker {
        fn pick(&self, len: usize) -> Option<usize> {
            len.checked_sub(1)
        }
    }

    fn videos() -> Vec<Video> {
        vec![
            Video::new("amazing_cat_video", "Amazing Cat Video", ["#cat", "#animal"]),
            Video::new("funny_dogs_video_id", "Funny Dogs", ["#dog", "#animal"]),
            Video::new("another_cat_video_id", "Another Cat Video", ["#cat", "#animal"]),
        ]
    }

    fn player_with(videos: Vec<Video>) -> (PlayerInteractor, ::std::rc::Rc<RecordingBoundary>) {
        let boundary = ::std::rc::Rc::new(RecordingBoundary::default());

        let player = PlayerInteractor::new(
            ::std::rc::Rc::clone(&boundary) as ::std::rc::Rc<dyn PlayerOutputBoundary>,
            ::std::boxed::Box::new(StubCatalog(videos)),
            ::std::boxed::Box::new(StubPlaylists::default()),
            ::std::boxed::Box::new(LastPicker),
        );

        (player, boundary)
    }

    fn player() -> (PlayerInteractor, ::std::rc::Rc<RecordingBoundary>) {
        player_with(videos())
    }

    fn video(id: &'static str) -> Video {
        videos().into_iter().find(|video| video.id == id).unwrap()
    }

    fn play(player: &mut PlayerInteractor, id: &'static str) -> Outcome<()> {
        player.accept(PlayVideoRequestModel { video_id: id.into() })
    }

    fn flag(player: &mut PlayerInteractor, id: &'static str, reason: Option<&'static str>) -> Outcome<()> {
        player.accept(FlagVideoRequestModel { video_id: id.into(), reason: reason.map(Into::into) })
    }

    fn create(player: &mut PlayerInteractor, name: &'static str) -> Outcome<()> {
        player.accept(CreatePlaylistRequestModel { playlist_name: name.into() })
    }

    fn add(player: &mut PlayerInteractor, name: &'static str, id: &'static str) -> Outcome<()> {
        player.accept(AddToPlaylistRequestModel { playlist_name: name.into(), video_id: id.into() })
    }

    #[test]
    fn play_sets_current_and_announces() {
        let (mut player, boundary) = player();

        play(&mut player, "amazing_cat_video").unwrap();

        assert_eq!(player.playback().current.as_deref(), Some("amazing_cat_video"));
        assert!(!player.playback().paused);
        assert_eq!(
            boundary.drain(),
            vec![PlayerEvent::from(VideoPlayingEvent { video: video("amazing_cat_video") })]
        );
    }

    #[test]
    fn play_unknown_video_leaves_state_untouched() {
        let (mut player, boundary) = player();
        play(&mut player, "amazing_cat_video").unwrap();
        boundary.drain();

        let error = play(&mut player, "does_not_exist").unwrap_err();

        assert_eq!(error, PlayerError::new(Action::Play, ErrorKind::VideoNotFound));
        assert_eq!(player.playback().current.as_deref(), Some("amazing_cat_video"));
        assert!(boundary.drain().is_empty());
    }

    #[test]
    fn play_while_playing_stops_previous_first() {
        let (mut player, boundary) = player();
        play(&mut player, "amazing_cat_video").unwrap();
        player.accept(PauseVideoRequestModel).unwrap();
        boundary.drain();

        play(&mut player, "funny_dogs_video_id").unwrap();

        assert_eq!(
            boundary.drain(),
            vec![
                PlayerEvent::from(VideoStoppedEvent { video: video("amazing_cat_video") }),
                PlayerEvent::from(VideoPlayingEvent { video: video("funny_dogs_video_id") }),
            ]
        );
        assert!(!player.playback().paused);
    }

    #[test]
    fn play_flagged_video_fails_but_occupies_slot() {
        let (mut player, boundary) = player();
        flag(&mut player, "funny_dogs_video_id", Some("dont_like_dogs")).unwrap();
        play(&mut player, "amazing_cat_video").unwrap();
        boundary.drain();

        let error = play(&mut player, "funny_dogs_video_id").unwrap_err();

        assert_eq!(
            error.kind,
            ErrorKind::FlaggedVideo { reason: FlagReason::new(Some("dont_like_dogs")) }
        );
        assert_eq!(player.playback().current.as_deref(), Some("funny_dogs_video_id"));
        assert!(matches!(boundary.drain().as_slice(), [PlayerEvent::VideoStopped(_)]));
    }

    #[test]
    fn stop_without_video_is_rejected() {
        let (mut player, boundary) = player();

        let error = player.accept(StopVideoRequestModel).unwrap_err();

        assert_eq!(error, PlayerError::new(Action::Stop, ErrorKind::NoVideoPlaying));
        assert_eq!(player.playback(), &PlaybackState::default());
        assert!(boundary.drain().is_empty());
    }

    #[test]
    fn stop_clears_slot_and_pause() {
        let (mut player, boundary) = player();
        play(&mut player, "amazing_cat_video").unwrap();
        player.accept(PauseVideoRequestModel).unwrap();
        boundary.drain();

        player.accept(StopVideoRequestModel).unwrap();

        assert_eq!(player.playback(), &PlaybackState::default());
        assert_eq!(
            boundary.drain(),
            vec![PlayerEvent::from(VideoStoppedEvent { video: video("amazing_cat_video") })]
        );
    }

    #[test]
    fn play_random_skips_flagged_videos() {
        let (mut player, _) = player();
        flag(&mut player, "funny_dogs_video_id", None).unwrap();

        player.accept(PlayRandomVideoRequestModel).unwrap();

        assert_eq!(player.playback().current.as_deref(), Some("another_cat_video_id"));
    }

    #[test]
    fn play_random_with_everything_flagged_reports_no_videos() {
        let (mut player, boundary) = player();
        play(&mut player, "amazing_cat_video").unwrap();
        player.accept(StopVideoRequestModel).unwrap();
        for id in ["amazing_cat_video", "funny_dogs_video_id", "another_cat_video_id"] {
            flag(&mut player, id, None).unwrap();
        }
        boundary.drain();

        let error = player.accept(PlayRandomVideoRequestModel).unwrap_err();

        assert_eq!(error, PlayerError::new(Action::PlayRandom, ErrorKind::NoVideosAvailable));
        assert_eq!(error.level(), DiagnosticLevel::Warning);
        assert_eq!(player.playback().current, None);
        assert!(boundary.drain().is_empty());
    }

    #[test]
    fn play_random_on_empty_catalog_reports_no_videos() {
        let (mut player, _) = player_with(Vec::new());

        let error = player.accept(PlayRandomVideoRequestModel).unwrap_err();

        assert_eq!(error.kind, ErrorKind::NoVideosAvailable);
    }

    #[test]
    fn pause_twice_reports_already_paused() {
        let (mut player, boundary) = player();
        play(&mut player, "amazing_cat_video").unwrap();

        player.accept(PauseVideoRequestModel).unwrap();
        assert!(player.playback().paused);

        let error = player.accept(PauseVideoRequestModel).unwrap_err();
        assert_eq!(
            error,
            PlayerError::new(Action::Pause, ErrorKind::AlreadyPaused { title: "Amazing Cat Video".into() })
        );
        assert_eq!(error.level(), DiagnosticLevel::Warning);

        let paused_events = boundary
            .drain()
            .into_iter()
            .filter(|event| matches!(event, PlayerEvent::VideoPaused(_)))
            .count();
        assert_eq!(paused_events, 1);
    }

    #[test]
    fn pause_without_video_is_rejected() {
        let (mut player, _) = player();

        let error = player.accept(PauseVideoRequestModel).unwrap_err();

        assert_eq!(error, PlayerError::new(Action::Pause, ErrorKind::NoVideoPlaying));
        assert_eq!(error.level(), DiagnosticLevel::Error);
    }

    #[test]
    fn continue_requires_a_paused_video() {
        let (mut player, _) = player();

        let error = player.accept(ContinueVideoRequestModel).unwrap_err();
        assert_eq!(error.kind, ErrorKind::NoVideoPlaying);

        play(&mut player, "amazing_cat_video").unwrap();
        let error = player.accept(ContinueVideoRequestModel).unwrap_err();
        assert_eq!(error, PlayerError::new(Action::Continue, ErrorKind::NotPaused));
    }

    #[test]
    fn continue_announces_and_leaves_paused_flag() {
        let (mut player, boundary) = player();
        play(&mut player, "amazing_cat_video").unwrap();
        player.accept(PauseVideoRequestModel).unwrap();
        boundary.drain();

        player.accept(ContinueVideoRequestModel).unwrap();

        assert_eq!(
            boundary.drain(),
            vec![PlayerEvent::from(VideoContinuedEvent { video: video("amazing_cat_video") })]
        );
        assert!(player.playback().paused);
    }

    #[test]
    fn show_playing_reports_pause_state() {
        let (mut player, _) = player();

        assert_eq!(player.accept(ShowPlayingRequestModel).unwrap().now_playing, None);

        play(&mut player, "funny_dogs_video_id").unwrap();
        player.accept(PauseVideoRequestModel).unwrap();

        assert_eq!(
            player.accept(ShowPlayingRequestModel).unwrap().now_playing,
            Some(NowPlaying { video: video("funny_dogs_video_id"), paused: true })
        );
    }

    #[test]
    fn create_playlist_is_case_insensitive() {
        let (mut player, boundary) = player();

        create(&mut player, "my playlist").unwrap();
        let error = create(&mut player, "MY PLAYLIST").unwrap_err();

        assert_eq!(error, PlayerError::new(Action::CreatePlaylist, ErrorKind::NameAlreadyUsed));
        assert_eq!(
            boundary.drain(),
            vec![PlayerEvent::from(PlaylistEvent::Created { playlist: "my playlist".into() })]
        );

        create(&mut player, "my_playlist").unwrap();
        assert_eq!(player.playlists().get_all().len(), 2);
    }

    #[test]
    fn add_to_playlist_rejects_second_add() {
        let (mut player, _) = player();
        create(&mut player, "my playlist").unwrap();

        add(&mut player, "MY PLAYLIST", "amazing_cat_video").unwrap();
        let error = add(&mut player, "my playlist", "amazing_cat_video").unwrap_err();

        assert_eq!(
            error,
            PlayerError::new(
                Action::AddToPlaylist { playlist: "my playlist".into() },
                ErrorKind::AlreadyInPlaylist
            )
        );
        assert_eq!(player.playlists().get("my playlist").unwrap().len(), 1);
    }

    #[test]
    fn add_to_playlist_checks_in_order() {
        let (mut player, _) = player();

        let error = add(&mut player, "missing", "does_not_exist").unwrap_err();
        assert_eq!(error.kind, ErrorKind::PlaylistNotFound);

        create(&mut player, "my playlist").unwrap();
        let error = add(&mut player, "my playlist", "does_not_exist").unwrap_err();
        assert_eq!(error.kind, ErrorKind::VideoNotFound);

        flag(&mut player, "amazing_cat_video", None).unwrap();
        let error = add(&mut player, "my playlist", "amazing_cat_video").unwrap_err();
        assert_eq!(error.kind, ErrorKind::FlaggedVideo { reason: FlagReason::default() });
        assert!(player.playlists().get("my playlist").unwrap().is_empty());
    }

    #[test]
    fn remove_from_playlist() {
        let (mut player, boundary) = player();
        create(&mut player, "my playlist").unwrap();
        add(&mut player, "my playlist", "amazing_cat_video").unwrap();
        boundary.drain();

        let remove = |player: &mut PlayerInteractor, name: &'static str, id: &'static str| {
            player.accept(RemoveFromPlaylistRequestModel { playlist_name: name.into(), video_id: id.into() })
        };

        assert_eq!(remove(&mut player, "missing", "amazing_cat_video").unwrap_err().kind, ErrorKind::PlaylistNotFound);
        assert_eq!(remove(&mut player, "my playlist", "does_not_exist").unwrap_err().kind, ErrorKind::VideoNotFound);
        assert_eq!(remove(&mut player, "my playlist", "funny_dogs_video_id").unwrap_err().kind, ErrorKind::NotInPlaylist);

        remove(&mut player, "My Playlist", "amazing_cat_video").unwrap();

        assert!(player.playlists().get("my playlist").unwrap().is_empty());
        assert_eq!(
            boundary.drain(),
            vec![PlayerEvent::from(PlaylistEvent::VideoRemoved { playlist: "My Playlist".into(), video: video("amazing_cat_video") })]
        );
        assert_eq!(remove(&mut player, "my playlist", "amazing_cat_video").unwrap_err().kind, ErrorKind::NotInPlaylist);
    }

    #[test]
    fn clear_keeps_playlist_and_delete_destroys_it() {
        let (mut player, _) = player();
        create(&mut player, "my playlist").unwrap();
        add(&mut player, "my playlist", "amazing_cat_video").unwrap();
        add(&mut player, "my playlist", "funny_dogs_video_id").unwrap();

        player.accept(ClearPlaylistRequestModel { playlist_name: "MY playlist".into() }).unwrap();
        assert!(player.playlists().get("my playlist").unwrap().is_empty());

        player.accept(DeletePlaylistRequestModel { playlist_name: "my PLAYLIST".into() }).unwrap();
        assert!(player.playlists().get("my playlist").is_none());

        let error = player.accept(ClearPlaylistRequestModel { playlist_name: "my playlist".into() }).unwrap_err();
        assert_eq!(
            error,
            PlayerError::new(Action::ClearPlaylist { playlist: "my playlist".into() }, ErrorKind::PlaylistNotFound)
        );

        let error = player.accept(DeletePlaylistRequestModel { playlist_name: "my playlist".into() }).unwrap_err();
        assert_eq!(
            error,
            PlayerError::new(Action::DeletePlaylist { playlist: "my playlist".into() }, ErrorKind::PlaylistNotFound)
        );
    }

    #[test]
    fn show_playlist_keeps_insertion_order_and_flagged_entries() {
        let (mut player, _) = player();
        create(&mut player, "my playlist").unwrap();
        add(&mut player, "my playlist", "funny_dogs_video_id").unwrap();
        add(&mut player, "my playlist", "amazing_cat_video").unwrap();
        flag(&mut player, "funny_dogs_video_id", None).unwrap();

        let response = player
            .accept(ShowPlaylistRequestModel { playlist_name: "MY PLAYLIST".into() })
            .unwrap();

        assert_eq!(response.playlist_name, "MY PLAYLIST");
        let ids: Vec<_> = response.videos.iter().map(|video| &*video.id).collect();
        assert_eq!(ids, ["funny_dogs_video_id", "amazing_cat_video"]);
        assert!(response.videos[0].is_flagged());

        let error = player
            .accept(ShowPlaylistRequestModel { playlist_name: "other".into() })
            .unwrap_err();
        assert_eq!(error.kind, ErrorKind::PlaylistNotFound);
    }

    #[test]
    fn show_all_playlists_sorted_by_display_name() {
        let (mut player, _) = player();
        create(&mut player, "zeta").unwrap();
        create(&mut player, "Alpha").unwrap();

        let response = player.accept(ShowAllPlaylistsRequestModel).unwrap();

        assert_eq!(response.playlist_names, vec![PlaylistName::from("Alpha"), PlaylistName::from("zeta")]);
    }

    #[test]
    fn catalog_queries() {
        let (mut player, _) = player();

        assert_eq!(player.accept(NumberOfVideosRequestModel).unwrap().count, 3);

        let titles: Vec<_> = player
            .accept(ShowAllVideosRequestModel)
            .unwrap()
            .videos
            .into_iter()
            .map(|video| video.title)
            .collect();
        assert_eq!(titles, ["Amazing Cat Video", "Another Cat Video", "Funny Dogs"]);
    }

    #[test]
    fn search_by_title_excludes_flagged_and_sorts() {
        let (mut player, _) = player();
        flag(&mut player, "amazing_cat_video", None).unwrap();

        let response = player
            .accept(SearchVideosRequestModel { term: "CAT".into(), mode: SearchMode::TitleSubstring })
            .unwrap();

        let ids: Vec<_> = response.results.iter().map(|video| &*video.id).collect();
        assert_eq!(ids, ["another_cat_video_id"]);
        assert_eq!(response.term, "CAT");
    }

    #[test]
    fn search_by_tag_requires_exact_tag() {
        let (mut player, _) = player();

        let search = |player: &mut PlayerInteractor, tag: &'static str| {
            player
                .accept(SearchVideosRequestModel { term: tag.into(), mode: SearchMode::ExactTag })
                .unwrap()
                .results
        };

        assert_eq!(search(&mut player, "#ANIMAL").len(), 3);
        assert_eq!(search(&mut player, "#dog").len(), 1);
        assert!(search(&mut player, "#do").is_empty());
        assert!(search(&mut player, "dog").is_empty());
    }

    #[test]
    fn flag_current_video_stops_it_first() {
        let (mut player, boundary) = player();
        play(&mut player, "amazing_cat_video").unwrap();
        player.accept(PauseVideoRequestModel).unwrap();
        boundary.drain();

        flag(&mut player, "amazing_cat_video", Some("fake")).unwrap();

        assert_eq!(player.playback(), &PlaybackState::default());
        let events = boundary.drain();
        assert!(matches!(
            events.as_slice(),
            [PlayerEvent::VideoStopped(_), PlayerEvent::VideoFlagged(VideoFlaggedEvent { reason, .. })]
                if reason.as_str() == "fake"
        ));
    }

    #[test]
    fn flag_other_video_keeps_playing() {
        let (mut player, boundary) = player();
        play(&mut player, "amazing_cat_video").unwrap();
        boundary.drain();

        flag(&mut player, "funny_dogs_video_id", None).unwrap();

        assert_eq!(player.playback().current.as_deref(), Some("amazing_cat_video"));
        assert!(matches!(boundary.drain().as_slice(), [PlayerEvent::VideoFlagged(_)]));
    }

    #[test]
    fn flag_rejections() {
        let (mut player, _) = player();

        assert_eq!(
            flag(&mut player, "does_not_exist", None).unwrap_err(),
            PlayerError::new(Action::Flag, ErrorKind::VideoNotFound)
        );

        flag(&mut player, "amazing_cat_video", None).unwrap();
        assert_eq!(
            flag(&mut player, "amazing_cat_video", Some("again")).unwrap_err(),
            PlayerError::new(Action::Flag, ErrorKind::AlreadyFlagged)
        );
        assert_eq!(player.catalog().get("amazing_cat_video").unwrap().flag_reason(), "Not supplied");
    }

    #[test]
    fn flag_then_allow_restores_every_video() {
        let (mut player, _) = player();
        let ids: Vec<_> = videos().into_iter().map(|video| video.id).collect();

        for id in ids {
            player
                .accept(FlagVideoRequestModel { video_id: id.clone(), reason: Some("reason".into()) })
                .unwrap();
            player.accept(AllowVideoRequestModel { video_id: id.clone() }).unwrap();

            let video = player.catalog().get(&id).unwrap();
            assert!(!video.is_flagged());
            assert_eq!(video.flag_reason(), "Not supplied");
        }
    }

    #[test]
    fn allow_rejections() {
        let (mut player, _) = player();

        let error = player
            .accept(AllowVideoRequestModel { video_id: "does_not_exist".into() })
            .unwrap_err();
        assert_eq!(error, PlayerError::new(Action::Allow, ErrorKind::VideoNotFound));

        let error = player
            .accept(AllowVideoRequestModel { video_id: "amazing_cat_video".into() })
            .unwrap_err();
        assert_eq!(error, PlayerError::new(Action::Allow, ErrorKind::NotFlagged));
    }

    #[test]
    fn cat_video_session() {
        let (mut player, _) = player_with(vec![
            Video::new("amazing_cat_video", "Amazing Cat Video", ["#cat", "#animal"]),
            Video::new("funny_dogs_video_id", "Funny Dogs", ["#dog", "#animal"]),
        ]);

        play(&mut player, "amazing_cat_video").unwrap();
        assert_eq!(player.playback().current.as_deref(), Some("amazing_cat_video"));

        player.accept(PauseVideoRequestModel).unwrap();
        assert!(player.playback().paused);

        let error = player.accept(PauseVideoRequestModel).unwrap_err();
        assert!(matches!(error.kind, ErrorKind::AlreadyPaused { .. }));

        flag(&mut player, "amazing_cat_video", Some("fake")).unwrap();
        assert_eq!(player.playback().current, None);
        assert!(!player.playback().paused);
    }
}
