use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "marquee", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the scene schedule of a timeline as JSON.
    Schedule(ScheduleArgs),
    /// Evaluate one frame of a timeline and print it as JSON.
    Frame(FrameArgs),
    /// Compute the snap target for a settled scroll fraction.
    Snap(SnapArgs),
    /// Print the overlay styles of one transition at one frame.
    Transition(TransitionArgs),
}

#[derive(Parser, Debug)]
struct ScheduleArgs {
    /// Input timeline JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input timeline JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,
}

#[derive(Parser, Debug)]
struct SnapArgs {
    /// Pinned-region snapshot JSON (`max_scroll` + `regions`).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Settled scroll fraction in [0, 1].
    #[arg(long)]
    at: f64,

    /// Optional snap config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of positions sampled along the settle curve.
    #[arg(long, default_value_t = 5)]
    samples: usize,
}

#[derive(Parser, Debug)]
struct TransitionArgs {
    /// Transition kind: fade, wipe, zoom, slide or blur.
    #[arg(long, value_parser = marquee::parse_transition_kind)]
    kind: marquee::TransitionKind,

    /// Ramped boundaries: in, out or both.
    #[arg(long, value_parser = marquee::parse_transition_direction, default_value = "both")]
    direction: marquee::TransitionDirection,

    /// Frame offset within the scene (0-based).
    #[arg(long)]
    frame: u64,

    /// Scene length in frames.
    #[arg(long)]
    duration: u64,
}

#[derive(serde::Serialize)]
struct ScheduleRow<'a> {
    id: &'a str,
    start_frame: u64,
    duration_in_frames: u64,
}

#[derive(serde::Serialize)]
struct ScheduleOut<'a> {
    total_frames: u64,
    scenes: Vec<ScheduleRow<'a>>,
}

#[derive(serde::Serialize)]
struct SnapOut {
    input: f64,
    target: f64,
    range_index: Option<usize>,
    settle_duration_s: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    settle_curve: Option<Vec<f64>>,
    ease: &'static str,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Schedule(args) => cmd_schedule(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Snap(args) => cmd_snap(args),
        Command::Transition(args) => cmd_transition(args),
    }
}

fn load_timeline(path: &std::path::Path) -> anyhow::Result<marquee::Timeline<marquee::SceneSpec>> {
    let def = marquee::TimelineDef::from_path(path)
        .with_context(|| format!("load timeline '{}'", path.display()))?;
    def.into_timeline()
        .with_context(|| format!("schedule timeline '{}'", path.display()))
}

fn cmd_schedule(args: ScheduleArgs) -> anyhow::Result<()> {
    let timeline = load_timeline(&args.in_path)?;
    let out = ScheduleOut {
        total_frames: timeline.total_frames(),
        scenes: timeline
            .iter()
            .map(|s| ScheduleRow {
                id: &s.component.id,
                start_frame: s.start_frame.0,
                duration_in_frames: s.duration_in_frames,
            })
            .collect(),
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let timeline = load_timeline(&args.in_path)?;
    let frame = marquee::Evaluator::eval_frame(&timeline, marquee::FrameIndex(args.frame))?;
    println!("{}", serde_json::to_string_pretty(&frame)?);
    Ok(())
}

fn cmd_snap(args: SnapArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => marquee::SnapConfig::from_path(path)
            .with_context(|| format!("load snap config '{}'", path.display()))?,
        None => marquee::SnapConfig::default(),
    };
    let input = marquee::SnapInput::from_path(&args.in_path)
        .with_context(|| format!("load snap input '{}'", args.in_path.display()))?;

    let outcome = match input.coordinator(&config) {
        Some(c) => c.snap_with_index(args.at),
        None => {
            tracing::info!("no pinned regions or zero scroll extent; snapping disabled");
            marquee::SnapOutcome {
                target: args.at,
                range_index: None,
            }
        }
    };
    let out = SnapOut {
        input: args.at,
        target: outcome.target,
        range_index: outcome.range_index,
        settle_duration_s: outcome.range_index.map(|_| {
            config
                .settle
                .duration_for(outcome.target - args.at)
                .as_secs_f64()
        }),
        settle_curve: outcome
            .range_index
            .map(|_| config.settle.curve(args.at, outcome.target, args.samples)),
        ease: config.settle.ease.host_name(),
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn cmd_transition(args: TransitionArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.duration > 0, "scene duration must be > 0 frames");
    let overlay =
        marquee::transition_frame(args.frame, args.duration, args.kind, args.direction);
    println!("{}", serde_json::to_string_pretty(&overlay)?);
    Ok(())
}
