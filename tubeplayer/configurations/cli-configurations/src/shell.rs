use ::infrastructures::boundaries::TerminalView;
use ::use_cases::boundaries::Accept;
use ::use_cases::boundaries::AddToPlaylistRequestModel;
use ::use_cases::boundaries::AllowVideoRequestModel;
use ::use_cases::boundaries::ClearPlaylistRequestModel;
use ::use_cases::boundaries::ContinueVideoRequestModel;
use ::use_cases::boundaries::CreatePlaylistRequestModel;
use ::use_cases::boundaries::DeletePlaylistRequestModel;
use ::use_cases::boundaries::FlagVideoRequestModel;
use ::use_cases::boundaries::NumberOfVideosRequestModel;
use ::use_cases::boundaries::PauseVideoRequestModel;
use ::use_cases::boundaries::PlayRandomVideoRequestModel;
use ::use_cases::boundaries::PlayVideoRequestModel;
use ::use_cases::boundaries::RemoveFromPlaylistRequestModel;
use ::use_cases::boundaries::SearchVideosRequestModel;
use ::use_cases::boundaries::ShowAllPlaylistsRequestModel;
use ::use_cases::boundaries::ShowAllVideosRequestModel;
use ::use_cases::boundaries::ShowPlayingRequestModel;
use ::use_cases::boundaries::ShowPlaylistRequestModel;
use ::use_cases::boundaries::StopVideoRequestModel;
use ::use_cases::boundaries::Update;
use ::use_cases::interactors::PlayerInteractor;
use ::use_cases::models::descriptors::SearchMode;
use ::use_cases::models::errors::PlayerError;

use crate::commands::parse_selection;
use crate::commands::Command;
use crate::commands::HELP;
use crate::commands::INVALID_COMMAND;
use crate::utils::aliases::Fallible;

/// Reads commands line by line and renders every outcome through the view.
pub struct Shell<Input, Writer> {
    player: PlayerInteractor,
    view: ::std::rc::Rc<TerminalView<Writer>>,
    input: Input,
}

impl<Input, Writer> Shell<Input, Writer>
where
    Input: ::std::io::BufRead,
    Writer: ::std::io::Write,
{
    pub fn new(player: PlayerInteractor, view: ::std::rc::Rc<TerminalView<Writer>>, input: Input) -> Self {
        Self { player, view, input }
    }

    pub fn run(&mut self) -> Fallible<()> {
        self.view.println("Hello and welcome to the video player, what would you like to do?");
        self.view.println("Enter HELP for a list of available commands or EXIT to terminate.");

        while let Some(line) = self.read_line()? {
            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => {
                    ::tracing::debug!(%err, line = line.trim(), "invalid command");
                    self.view.println(INVALID_COMMAND);
                    continue;
                },
            };

            if let ::std::ops::ControlFlow::Break(()) = self.execute(command)? {
                break;
            }
        }

        self.view.println("Thanks for watching!");

        Ok(())
    }

    /// Undecodable bytes are replaced rather than failing the session.
    fn read_line(&mut self) -> Fallible<Option<String>> {
        use ::anyhow::Context as _;

        let mut line = Vec::new();

        match self.input.read_until(b'\n', &mut line).context("failed to read command")? {
            0 => Ok(None),
            _ => Ok(Some(String::from_utf8_lossy(&line).into_owned())),
        }
    }

    fn execute(&mut self, command: Command) -> Fallible<::std::ops::ControlFlow<()>> {
        ::tracing::debug!(?command, "executing command");

        match command {
            Command::NumberOfVideos => {
                self.present(NumberOfVideosRequestModel);
            },
            Command::ShowAllVideos => {
                self.present(ShowAllVideosRequestModel);
            },
            Command::Play { video_id } => {
                self.present(PlayVideoRequestModel { video_id: video_id.into() });
            },
            Command::PlayRandom => {
                self.present(PlayRandomVideoRequestModel);
            },
            Command::Stop => {
                self.present(StopVideoRequestModel);
            },
            Command::Pause => {
                self.present(PauseVideoRequestModel);
            },
            Command::Continue => {
                self.present(ContinueVideoRequestModel);
            },
            Command::ShowPlaying => {
                self.present(ShowPlayingRequestModel);
            },
            Command::CreatePlaylist { playlist_name } => {
                self.present(CreatePlaylistRequestModel { playlist_name: playlist_name.into() });
            },
            Command::AddToPlaylist { playlist_name, video_id } => {
                self.present(AddToPlaylistRequestModel { playlist_name: playlist_name.into(), video_id: video_id.into() });
            },
            Command::RemoveFromPlaylist { playlist_name, video_id } => {
                self.present(RemoveFromPlaylistRequestModel {
                    playlist_name: playlist_name.into(),
                    video_id: video_id.into(),
                });
            },
            Command::ClearPlaylist { playlist_name } => {
                self.present(ClearPlaylistRequestModel { playlist_name: playlist_name.into() });
            },
            Command::DeletePlaylist { playlist_name } => {
                self.present(DeletePlaylistRequestModel { playlist_name: playlist_name.into() });
            },
            Command::ShowPlaylist { playlist_name } => {
                self.present(ShowPlaylistRequestModel { playlist_name: playlist_name.into() });
            },
            Command::ShowAllPlaylists => {
                self.present(ShowAllPlaylistsRequestModel);
            },
            Command::SearchVideos { term } => self.search(term, SearchMode::TitleSubstring)?,
            Command::SearchVideosWithTag { tag } => self.search(tag, SearchMode::ExactTag)?,
            Command::FlagVideo { video_id, reason } => {
                self.present(FlagVideoRequestModel { video_id: video_id.into(), reason: reason.map(Into::into) });
            },
            Command::AllowVideo { video_id } => {
                self.present(AllowVideoRequestModel { video_id: video_id.into() });
            },
            Command::Help => self.view.println(&*HELP),
            Command::Exit => return Ok(::std::ops::ControlFlow::Break(())),
        }

        Ok(::std::ops::ControlFlow::Continue(()))
    }

    /// Offers to play one of the results; anything but a valid 1-based number is a no.
    fn search(&mut self, term: String, mode: SearchMode) -> Fallible<()> {
        let Some(response) = self.present(SearchVideosRequestModel { term: term.into(), mode }) else {
            return Ok(());
        };

        if response.results.is_empty() {
            return Ok(());
        }

        let answer = self.read_line()?.unwrap_or_default();

        if let Some(video) = parse_selection(&answer, response.results.len()).and_then(|idx| response.results.get(idx)) {
            self.present(PlayVideoRequestModel { video_id: video.id.clone() });
        }

        Ok(())
    }

    fn present<Request, Response>(&mut self, request: Request) -> Option<Response>
    where
        PlayerInteractor: Accept<Request, Response = Response>,
        TerminalView<Writer>: Update<Response>,
    {
        match self.player.accept(request) {
            Ok(response) => {
                self.view.update(&response);
                Some(response)
            },
            Err(err) => {
                self.report(&err);
                None
            },
        }
    }

    fn report(&self, err: &PlayerError) {
        self.view.update(err);
    }
}
