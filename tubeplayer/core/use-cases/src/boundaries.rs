use ::domain::MaybeOwnedString;
use ::domain::PlaylistName;
use ::domain::Video;
use ::domain::VideoId;

use crate::models::descriptors::NowPlaying;
use crate::models::descriptors::SearchMode;
use crate::models::events::PlayerEvent;
use crate::utils::aliases::Outcome;

pub trait Accept<Request> {
    type Response;

    fn accept(&mut self, request: Request) -> Outcome<Self::Response>;
}

pub trait Update<Event> {
    fn update(&self, event: &Event);
}

pub trait PlayerOutputBoundary: Update<PlayerEvent> {}

impl<Boundary> PlayerOutputBoundary for Boundary where Boundary: Update<PlayerEvent> {}

pub struct NumberOfVideosRequestModel;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberOfVideosResponseModel {
    pub count: usize,
}

pub struct ShowAllVideosRequestModel;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowAllVideosResponseModel {
    pub videos: Vec<Video>,
}

pub struct PlayVideoRequestModel {
    pub video_id: VideoId,
}

pub struct PlayRandomVideoRequestModel;

pub struct StopVideoRequestModel;

pub struct PauseVideoRequestModel;

pub struct ContinueVideoRequestModel;

pub struct ShowPlayingRequestModel;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowPlayingResponseModel {
    pub now_playing: Option<NowPlaying>,
}

pub struct CreatePlaylistRequestModel {
    pub playlist_name: PlaylistName,
}

pub struct AddToPlaylistRequestModel {
    pub playlist_name: PlaylistName,
    pub video_id: VideoId,
}

pub struct RemoveFromPlaylistRequestModel {
    pub playlist_name: PlaylistName,
    pub video_id: VideoId,
}

pub struct ClearPlaylistRequestModel {
    pub playlist_name: PlaylistName,
}

pub struct DeletePlaylistRequestModel {
    pub playlist_name: PlaylistName,
}

pub struct ShowPlaylistRequestModel {
    pub playlist_name: PlaylistName,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowPlaylistResponseModel {
    pub playlist_name: PlaylistName,
    pub videos: Vec<Video>,
}

pub struct ShowAllPlaylistsRequestModel;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowAllPlaylistsResponseModel {
    pub playlist_names: Vec<PlaylistName>,
}

pub struct SearchVideosRequestModel {
    pub term: MaybeOwnedString,
    pub mode: SearchMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchVideosResponseModel {
    pub term: MaybeOwnedString,
    pub results: Vec<Video>,
}

pub struct FlagVideoRequestModel {
    pub video_id: VideoId,
    pub reason: Option<MaybeOwnedString>,
}

pub struct AllowVideoRequestModel {
    pub video_id: VideoId,
}
