//! CLI Adapter.

use std::io;
use std::path::PathBuf;

use clap::builder::PossibleValue;
use clap::{ArgAction, Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::app::commands::story::StoryOutcome;
use crate::domain::configuration::story_options::DEFAULT_GPX_PATH;
use crate::domain::{
    AppError, Focus, InlinePoint, Length, PresentationParams, StoryOptions, Tone, TrackInput,
};

#[derive(Parser, Debug)]
#[command(name = "stroll-story")]
#[command(version)]
#[command(
    about = "Turn a recorded walk into a journal entry, an illustration and a route map in one HTML page",
    long_about = None
)]
struct Cli {
    /// GPX file with the recorded walk [default: inputs/ottawa.gpx]
    #[arg(long, value_name = "PATH", conflicts_with = "points")]
    gpx: Option<PathBuf>,
    /// Trip point given directly; repeat for each point in order
    #[arg(long = "point", value_name = "LAT,LON[,TIME]", id = "points")]
    points: Vec<InlinePoint>,
    /// Voice of the journal entry
    #[arg(long, value_enum, default_value_t = Tone::default())]
    tone: Tone,
    /// What the journal entry should dwell on
    #[arg(long, value_enum, default_value_t = Focus::default())]
    focus: Focus,
    /// Size of the journal entry
    #[arg(long, value_enum, default_value_t = Length::default())]
    length: Length,
    /// Configuration file [default: stroll.toml when present]
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Directory for the generated page (overrides the configuration)
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,
    /// Print the narrative prompt without calling the generation API
    #[arg(long, conflicts_with = "mock")]
    prompt_preview: bool,
    /// Use a canned offline narrative instead of the generation API
    #[arg(long, conflicts_with = "prompt_preview")]
    mock: bool,
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn into_options(self) -> StoryOptions {
        let input = if self.points.is_empty() {
            TrackInput::Gpx(self.gpx.unwrap_or_else(|| PathBuf::from(DEFAULT_GPX_PATH)))
        } else {
            TrackInput::Inline(self.points)
        };

        StoryOptions {
            input,
            params: PresentationParams::new(self.tone, self.focus, self.length),
            config_path: self.config,
            output_dir: self.output_dir,
            prompt_preview: self.prompt_preview,
            mock: self.mock,
        }
    }
}

macro_rules! value_enum {
    ($ty:ty) => {
        impl ValueEnum for $ty {
            fn value_variants<'a>() -> &'a [Self] {
                &<$ty>::ALL
            }

            fn to_possible_value(&self) -> Option<PossibleValue> {
                Some(PossibleValue::new(self.as_str()))
            }
        }
    };
}

value_enum!(Tone);
value_enum!(Focus);
value_enum!(Length);

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    load_dotenv();

    match run_story(cli.into_options()) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {} ({} stage)", e, e.stage());
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).try_init();
}

/// Load `.env` from the working directory or its parents. Variables already
/// set in the process environment win.
fn load_dotenv() {
    if let Ok(path) = dotenvy::dotenv() {
        debug!(path = %path.display(), "loaded environment file");
    }
}

fn run_story(options: StoryOptions) -> Result<(), AppError> {
    match crate::story(options)? {
        StoryOutcome::Preview { prompt } => println!("{}", prompt),
        StoryOutcome::Saved { path } => println!("Output saved to '{}'", path.display()),
    }
    Ok(())
}
