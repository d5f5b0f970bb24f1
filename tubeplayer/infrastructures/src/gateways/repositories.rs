use ::derive_new::new;
use ::domain::Playlist;
use ::domain::PlaylistName;
use ::domain::Video;
use ::domain::VideoId;
use ::use_cases::gateways::PlaylistRepository;
use ::use_cases::gateways::VideoCatalog;
use ::use_cases::models::errors::ErrorKind;

use crate::utils::aliases::Fallible;
use crate::utils::aliases::MaybeOwnedPath;

#[derive(Debug, Default)]
pub struct InMemoryVideoCatalog {
    videos: ::std::collections::HashMap<VideoId, Video>,
}

impl InMemoryVideoCatalog {
    pub fn new(videos: impl IntoIterator<Item = Video>) -> Fallible<Self> {
        let mut catalog = Self::default();

        for video in videos {
            if catalog.videos.contains_key(&video.id) {
                ::anyhow::bail!("duplicate video id `{}` in catalog", video.id);
            }

            catalog.videos.insert(video.id.clone(), video);
        }

        Ok(catalog)
    }
}

impl VideoCatalog for InMemoryVideoCatalog {
    fn get(&self, id: &str) -> Option<&Video> {
        self.videos.get(id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Video> {
        self.videos.get_mut(id)
    }

    fn get_all(&self) -> Vec<&Video> {
        self.videos.values().collect()
    }

    fn count(&self) -> usize {
        self.videos.len()
    }
}

#[derive(Debug, Default)]
pub struct InMemoryPlaylistRepository {
    playlists: ::std::collections::HashMap<String, Playlist>,
}

impl PlaylistRepository for InMemoryPlaylistRepository {
    fn create(&mut self, name: PlaylistName) -> Result<&mut Playlist, ErrorKind> {
        use ::std::collections::hash_map::Entry;

        match self.playlists.entry(Playlist::key(&name)) {
            Entry::Occupied(_) => Err(ErrorKind::NameAlreadyUsed),
            Entry::Vacant(entry) => Ok(entry.insert(Playlist::new(name))),
        }
    }

    fn get(&self, name: &str) -> Option<&Playlist> {
        self.playlists.get(&Playlist::key(name))
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut Playlist> {
        self.playlists.get_mut(&Playlist::key(name))
    }

    fn delete(&mut self, name: &str) -> Result<Playlist, ErrorKind> {
        self.playlists
            .remove(&Playlist::key(name))
            .ok_or(ErrorKind::PlaylistNotFound)
    }

    fn get_all(&self) -> Vec<&Playlist> {
        self.playlists.values().collect()
    }
}

/// Reads a catalog written one video per line as `title | id | tag, tag, ...`.
#[derive(new)]
pub struct FilesystemCatalogSource {
    path: MaybeOwnedPath,
}

impl FilesystemCatalogSource {
    pub fn load(&self) -> Fallible<Vec<Video>> {
        use ::anyhow::Context as _;

        let contents = ::std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read catalog at {}", self.path.display()))?;

        let videos = parse_catalog(&contents)
            .with_context(|| format!("malformed catalog at {}", self.path.display()))?;

        ::tracing::info!(path = %self.path.display(), videos = videos.len(), "loaded catalog");

        Ok(videos)
    }
}

pub fn parse_catalog(contents: &str) -> Fallible<Vec<Video>> {
    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| parse_catalog_line(line).ok_or_else(|| ::anyhow::anyhow!("line {}: `{}`", idx + 1, line)))
        .collect()
}

fn parse_catalog_line(line: &str) -> Option<Video> {
    let mut fields = line.split(FIELD_DELIMITER).map(str::trim);

    let title = fields.next().filter(|title| !title.is_empty())?;
    let id = fields.next().filter(|id| !id.is_empty())?;
    let tags = fields.next();

    if fields.next().is_some() {
        return None;
    }

    let tags = tags
        .into_iter()
        .flat_map(|tags| tags.split(TAG_DELIMITER))
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_owned);

    Some(Video::new(id.to_owned(), title.to_owned(), tags))
}

const FIELD_DELIMITER: char = '|';
const TAG_DELIMITER: char = ',';
