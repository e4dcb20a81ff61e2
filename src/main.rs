//! Handsign CLI
//!
//! Usage:
//!   handsign --predictions recorded.jsonl        # Camera game, first to 3
//!   handsign --text                              # Typed game, 3 rounds
//!   handsign --text --target-wins 5 --seed 7     # Typed game, first to 5
//!   handsign --text --json                       # JSON summary at the end

use clap::Parser;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::error;

use handsign::core::{
    ArgmaxClassifier, CameraSession, LabelSet, RandomPlayer, ReplayModel, SyntheticCamera,
    TerminalRenderer, TextGame,
};
use handsign::types::{GameConfig, GameError, Result, SessionSummary, StopRule};
use handsign::{logging, CAMERA_FPS, CONFIDENCE_THRESHOLD, DEFAULT_LABELS_FILE, TARGET_WINS, TEXT_ROUNDS, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "handsign",
    version = VERSION,
    about = "Rock-Paper-Scissors against the computer",
    long_about = "Handsign plays Rock-Paper-Scissors against the computer.\n\n\
                  Modes:\n  \
                  (default)  Camera game: a classifier labels your hand gesture\n  \
                  --text     Typed game: enter Rock, Paper, or Scissors\n\n\
                  Each camera round:\n  \
                  0-1s  warm-up\n  \
                  1-4s  countdown\n  \
                  4-7s  gesture captured, result shown\n\n\
                  Press Q in the camera game, or type quit in the typed game, to leave."
)]
struct Args {
    /// Typed game instead of the camera
    #[arg(short, long)]
    text: bool,

    /// Recorded classifier output for the camera game, one JSON array per frame
    #[arg(short, long, required_unless_present = "text")]
    predictions: Option<PathBuf>,

    /// Model labels file (`index label` per line)
    #[arg(short, long, default_value = DEFAULT_LABELS_FILE)]
    labels: PathBuf,

    /// End the game when either side reaches this many wins
    #[arg(long, conflicts_with = "rounds")]
    target_wins: Option<u32>,

    /// End the game after this many rounds
    #[arg(long)]
    rounds: Option<u32>,

    /// Minimum classifier probability to accept a gesture
    #[arg(long, default_value_t = CONFIDENCE_THRESHOLD)]
    confidence: f32,

    /// Camera frames per second
    #[arg(long, default_value_t = CAMERA_FPS)]
    fps: u32,

    /// Seed for the computer's moves
    #[arg(long)]
    seed: Option<u64>,

    /// Print the session summary as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);
    if args.no_color {
        colored::control::set_override(false);
    }

    let mut stdout = io::stdout().lock();
    let result = if args.text {
        run_text(&args, &mut io::stdin().lock(), &mut stdout, &mut io::stderr())
    } else {
        run_camera(&args)
    };

    let printed = result.and_then(|summary| {
        print_summary(&mut stdout, &summary, &args)
            .inspect_err(|e| error!(kind = e.kind(), error = %e, "summary not written"))
    });
    if let Err(e) = printed {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

/// Stop rule from flags, falling back to the mode's default
fn stop_rule(args: &Args, default: StopRule) -> StopRule {
    match (args.target_wins, args.rounds) {
        (_, Some(rounds)) => StopRule::Rounds(rounds),
        (Some(target), None) => StopRule::FirstTo(target),
        (None, None) => default,
    }
}

fn build_config(args: &Args, default_stop: StopRule) -> Result<GameConfig> {
    let config = GameConfig::default()
        .with_stop(stop_rule(args, default_stop))
        .with_confidence_threshold(args.confidence);
    config.validate()?;
    Ok(config)
}

fn computer_player(args: &Args) -> RandomPlayer {
    match args.seed {
        Some(seed) => RandomPlayer::seeded(seed),
        None => RandomPlayer::new(),
    }
}

/// Run the typed game. With `--json` the prompts and round lines go to
/// `stderr` so `stdout` carries only the summary.
fn run_text<I: BufRead, O: Write, E: Write>(
    args: &Args,
    input: &mut I,
    stdout: &mut O,
    stderr: &mut E,
) -> Result<SessionSummary> {
    play_text(args, input, stdout, stderr)
        .inspect_err(|e| error!(kind = e.kind(), error = %e, "text game aborted"))
}

fn play_text<I: BufRead, O: Write, E: Write>(
    args: &Args,
    input: &mut I,
    stdout: &mut O,
    stderr: &mut E,
) -> Result<SessionSummary> {
    let config = build_config(args, StopRule::Rounds(TEXT_ROUNDS))?;
    let mut interactive: &mut dyn Write = if args.json { stderr } else { stdout };

    print_header(&mut interactive, "Text Mode")?;
    writeln!(interactive, "Playing {}. Type 'quit' to exit.", config.stop)?;
    TextGame::new(config.stop, computer_player(args)).play(input, &mut interactive)
}

/// Run the camera game in the terminal
fn run_camera(args: &Args) -> Result<SessionSummary> {
    let (config, classifier) = load_camera_game(args)
        .inspect_err(|e| error!(kind = e.kind(), error = %e, "camera game failed to start"))?;

    let camera = SyntheticCamera::new(args.fps);
    let renderer = TerminalRenderer::open()
        .inspect_err(|e| error!(kind = e.kind(), error = %e, "terminal unavailable"))?;
    CameraSession::new(config, camera, classifier, renderer, computer_player(args)).run()
}

fn load_camera_game(args: &Args) -> Result<(GameConfig, ArgmaxClassifier<ReplayModel>)> {
    let config = build_config(args, StopRule::FirstTo(TARGET_WINS))?;
    let labels = LabelSet::load(&args.labels)?;
    let predictions = args
        .predictions
        .as_ref()
        .ok_or_else(|| GameError::Config("--predictions is required for the camera game".to_string()))?;
    let model = ReplayModel::load(predictions)?;
    Ok((config, ArgmaxClassifier::new(labels, model)))
}

/// Print header
fn print_header<W: Write>(out: &mut W, mode: &str) -> io::Result<()> {
    writeln!(out, "{}", "========================================".bold())?;
    writeln!(out, "{}", format!("  Handsign v{} - {}", VERSION, mode).as_str().bold())?;
    writeln!(out, "{}", "========================================".bold())
}

fn print_summary<W: Write>(out: &mut W, summary: &SessionSummary, args: &Args) -> Result<()> {
    if args.json {
        let json = serde_json::to_string_pretty(summary).map_err(io::Error::from)?;
        writeln!(out, "{}", json)?;
        return Ok(());
    }

    // The camera game drew its rounds on a screen that is now gone
    if !args.text {
        for record in &summary.rounds {
            if args.no_color {
                writeln!(out, "{}", record.to_parseable_string())?;
            } else {
                writeln!(out, "{}", record.to_terminal_string())?;
            }
        }
    }
    writeln!(out, "{}", summary.headline().bold())?;
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
