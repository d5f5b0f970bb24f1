use ::domain::Playlist;
use ::domain::PlaylistName;
use ::domain::Video;

use crate::models::errors::ErrorKind;

/// Fixed set of videos. Membership never changes after construction; only the flag state of a
/// video is mutable, through [`VideoCatalog::get_mut`].
pub trait VideoCatalog {
    fn get(&self, id: &str) -> Option<&Video>;

    fn get_mut(&mut self, id: &str) -> Option<&mut Video>;

    /// No particular order.
    fn get_all(&self) -> Vec<&Video>;

    fn count(&self) -> usize {
        self.get_all().len()
    }
}

/// Playlists keyed by case-insensitive name.
pub trait PlaylistRepository {
    fn create(&mut self, name: PlaylistName) -> Result<&mut Playlist, ErrorKind>;

    fn get(&self, name: &str) -> Option<&Playlist>;

    fn get_mut(&mut self, name: &str) -> Option<&mut Playlist>;

    fn delete(&mut self, name: &str) -> Result<Playlist, ErrorKind>;

    fn get_all(&self) -> Vec<&Playlist>;
}

pub trait RandomPicker {
    /// Uniform index in `0..len`, or `None` when `len` is zero.
    fn pick(&self, len: usize) -> Option<usize>;
}
