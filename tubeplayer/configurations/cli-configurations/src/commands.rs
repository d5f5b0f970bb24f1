use crate::utils::aliases::Fallible;

/// One line of shell input, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NumberOfVideos,
    ShowAllVideos,
    Play { video_id: String },
    PlayRandom,
    Stop,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist { playlist_name: String },
    AddToPlaylist { playlist_name: String, video_id: String },
    RemoveFromPlaylist { playlist_name: String, video_id: String },
    ClearPlaylist { playlist_name: String },
    DeletePlaylist { playlist_name: String },
    ShowPlaylist { playlist_name: String },
    ShowAllPlaylists,
    SearchVideos { term: String },
    SearchVideosWithTag { tag: String },
    FlagVideo { video_id: String, reason: Option<String> },
    AllowVideo { video_id: String },
    Help,
    Exit,
}

impl Command {
    /// Blank lines parse to `None`. Unknown words and wrong argument counts are errors.
    pub fn parse(line: &str) -> Fallible<Option<Self>> {
        let mut words = line.split_whitespace();

        let Some(word) = words.next() else {
            return Ok(None);
        };

        let signature = COMMANDS
            .iter()
            .find(|signature| signature.word.eq_ignore_ascii_case(word))
            .ok_or_else(|| ::anyhow::anyhow!("unknown command `{}`", word))?;

        let mut args = words.map(str::to_owned);

        let command = (signature.build)(&mut args)
            .ok_or_else(|| ::anyhow::anyhow!("missing arguments, usage: {}", signature.usage()))?;

        if args.next().is_some() {
            ::anyhow::bail!("too many arguments, usage: {}", signature.usage());
        }

        Ok(Some(command))
    }
}

type Args<'a> = dyn Iterator<Item = String> + 'a;

struct Signature {
    word: &'static str,
    params: &'static str,
    description: &'static str,
    build: fn(&mut Args<'_>) -> Option<Command>,
}

impl Signature {
    fn usage(&self) -> String {
        match self.params {
            "" => self.word.to_owned(),
            params => format!("{} {}", self.word, params),
        }
    }
}

static COMMANDS: &[Signature] = &[
    Signature {
        word: "NUMBER_OF_VIDEOS",
        params: "",
        description: "Shows how many videos are in the library.",
        build: |_| Some(Command::NumberOfVideos),
    },
    Signature {
        word: "SHOW_ALL_VIDEOS",
        params: "",
        description: "Lists all videos from the library.",
        build: |_| Some(Command::ShowAllVideos),
    },
    Signature {
        word: "PLAY",
        params: "<video_id>",
        description: "Plays specified video.",
        build: |args| Some(Command::Play { video_id: args.next()? }),
    },
    Signature {
        word: "PLAY_RANDOM",
        params: "",
        description: "Plays a random video from the library.",
        build: |_| Some(Command::PlayRandom),
    },
    Signature {
        word: "STOP",
        params: "",
        description: "Stop the current video.",
        build: |_| Some(Command::Stop),
    },
    Signature {
        word: "PAUSE",
        params: "",
        description: "Pause the current video.",
        build: |_| Some(Command::Pause),
    },
    Signature {
        word: "CONTINUE",
        params: "",
        description: "Resume the current paused video.",
        build: |_| Some(Command::Continue),
    },
    Signature {
        word: "SHOW_PLAYING",
        params: "",
        description: "Displays the video that is currently playing (or paused).",
        build: |_| Some(Command::ShowPlaying),
    },
    Signature {
        word: "CREATE_PLAYLIST",
        params: "<playlist_name>",
        description: "Creates a new (empty) playlist with the provided name.",
        build: |args| Some(Command::CreatePlaylist { playlist_name: args.next()? }),
    },
    Signature {
        word: "ADD_TO_PLAYLIST",
        params: "<playlist_name> <video_id>",
        description: "Adds the requested video to the playlist.",
        build: |args| Some(Command::AddToPlaylist { playlist_name: args.next()?, video_id: args.next()? }),
    },
    Signature {
        word: "REMOVE_FROM_PLAYLIST",
        params: "<playlist_name> <video_id>",
        description: "Removes the specified video from the specified playlist.",
        build: |args| Some(Command::RemoveFromPlaylist { playlist_name: args.next()?, video_id: args.next()? }),
    },
    Signature {
        word: "CLEAR_PLAYLIST",
        params: "<playlist_name>",
        description: "Removes all the videos from the playlist.",
        build: |args| Some(Command::ClearPlaylist { playlist_name: args.next()? }),
    },
    Signature {
        word: "DELETE_PLAYLIST",
        params: "<playlist_name>",
        description: "Deletes the playlist.",
        build: |args| Some(Command::DeletePlaylist { playlist_name: args.next()? }),
    },
    Signature {
        word: "SHOW_PLAYLIST",
        params: "<playlist_name>",
        description: "List all the videos in this playlist.",
        build: |args| Some(Command::ShowPlaylist { playlist_name: args.next()? }),
    },
    Signature {
        word: "SHOW_ALL_PLAYLISTS",
        params: "",
        description: "Display all the available playlists.",
        build: |_| Some(Command::ShowAllPlaylists),
    },
    Signature {
        word: "SEARCH_VIDEOS",
        params: "<search_term>",
        description: "Display all the videos whose titles contain the search term.",
        build: |args| Some(Command::SearchVideos { term: args.next()? }),
    },
    Signature {
        word: "SEARCH_VIDEOS_WITH_TAG",
        params: "<tag_name>",
        description: "Display all videos whose tags contain the provided tag.",
        build: |args| Some(Command::SearchVideosWithTag { tag: args.next()? }),
    },
    Signature {
        word: "FLAG_VIDEO",
        params: "<video_id> [flag_reason]",
        description: "Mark a video as flagged.",
        build: |args| Some(Command::FlagVideo { video_id: args.next()?, reason: args.next() }),
    },
    Signature {
        word: "ALLOW_VIDEO",
        params: "<video_id>",
        description: "Removes a flag from a video.",
        build: |args| Some(Command::AllowVideo { video_id: args.next()? }),
    },
    Signature {
        word: "HELP",
        params: "",
        description: "Displays help.",
        build: |_| Some(Command::Help),
    },
    Signature {
        word: "EXIT",
        params: "",
        description: "Terminates the program execution.",
        build: |_| Some(Command::Exit),
    },
];

pub static HELP: ::once_cell::sync::Lazy<String> = ::once_cell::sync::Lazy::new(|| {
    COMMANDS.iter().fold(String::from("Available commands:"), |mut help, signature| {
        help.push_str(&format!("\n    {} - {}", signature.usage(), signature.description));
        help
    })
});

pub const INVALID_COMMAND: &str = "Please enter a valid command, type HELP for a list of available commands.";

/// Interprets the answer to a search prompt as a 1-based index into `len` results.
pub fn parse_selection(answer: &str, len: usize) -> Option<usize> {
    answer
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|selection| (1..=len).contains(selection))
        .map(|selection| selection - 1)
}
