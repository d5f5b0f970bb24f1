pub(crate) mod commands;
pub(crate) mod shell;
pub(crate) mod utils;

use ::infrastructures::boundaries::TerminalView;
use ::infrastructures::gateways::pickers::SeededPicker;
use ::infrastructures::gateways::pickers::ThreadRngPicker;
use ::infrastructures::gateways::repositories::FilesystemCatalogSource;
use ::infrastructures::gateways::repositories::InMemoryPlaylistRepository;
use ::infrastructures::gateways::repositories::InMemoryVideoCatalog;
use ::use_cases::boundaries::PlayerOutputBoundary;
use ::use_cases::gateways::RandomPicker;
use ::use_cases::interactors::PlayerInteractor;

use crate::shell::Shell;
use crate::utils::aliases::Fallible;
use crate::utils::aliases::MaybeOwnedPath;
use crate::utils::extensions::OptionExt;

fn main() -> Fallible<()> {
    let command = ::clap::Command::new("tubeplayer")
        .about("Plays, pauses, flags and organizes videos from a fixed catalog")
        .arg(
            ::clap::Arg::new("catalog")
                .short('c')
                .long("catalog")
                .default_value(concat!(env!("CARGO_MANIFEST_DIR"), "/videos.txt"))
                .value_parser(::clap::value_parser!(::std::path::PathBuf)),
        )
        .arg(
            ::clap::Arg::new("log-directory")
                .short('l')
                .long("log-directory")
                .default_value("logs")
                .value_parser(::clap::value_parser!(::std::path::PathBuf)),
        )
        .arg(
            ::clap::Arg::new("seed")
                .long("seed")
                .required(false)
                .value_parser(::clap::value_parser!(u64)),
        )
        .arg(
            ::clap::Arg::new("no-color")
                .long("no-color")
                .action(::clap::ArgAction::SetTrue),
        );

    let matches = command.get_matches();

    let log_directory = matches.get_one::<::std::path::PathBuf>("log-directory").ok()?;
    let (writer, _guard) = ::tracing_appender::non_blocking(log_writer(log_directory)?);

    ::tracing_subscriber::fmt()
        .with_writer(writer)
        .with_env_filter(
            ::tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| ::tracing_subscriber::EnvFilter::new("info")),
        )
        .with_ansi(false)
        .init();

    let catalog: MaybeOwnedPath = matches.get_one::<::std::path::PathBuf>("catalog").ok()?.to_owned().into();
    let videos = FilesystemCatalogSource::new(catalog).load()?;

    let picker: ::std::boxed::Box<dyn RandomPicker> = match matches.get_one::<u64>("seed") {
        Some(seed) => ::std::boxed::Box::new(SeededPicker::new(*seed)),
        None => ::std::boxed::Box::new(ThreadRngPicker),
    };

    let view = ::std::rc::Rc::new(TerminalView::stdout(!matches.get_flag("no-color")));

    let player = PlayerInteractor::new(
        ::std::rc::Rc::clone(&view) as ::std::rc::Rc<dyn PlayerOutputBoundary>,
        ::std::boxed::Box::new(InMemoryVideoCatalog::new(videos)?),
        ::std::boxed::Box::new(InMemoryPlaylistRepository::default()),
        picker,
    );

    ::tracing::info!("session started");

    Shell::new(player, view, ::std::io::stdin().lock()).run()?;

    ::tracing::info!("session ended");

    Ok(())
}

fn log_writer(directory: &::std::path::Path) -> Fallible<::tracing_appender::rolling::RollingFileAppender> {
    use ::anyhow::Context as _;

    ::tracing_appender::rolling::RollingFileAppender::builder()
        .rotation(::tracing_appender::rolling::Rotation::DAILY)
        .filename_prefix("tubeplayer.log")
        .build(directory)
        .with_context(|| format!("failed to open log directory {}", directory.display()))
}
