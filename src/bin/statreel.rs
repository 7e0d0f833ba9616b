use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

use statreel::{
    CpuRenderer, FfmpegSink, FfmpegSinkOpts, FrameIndex, FrameRange, PngSequenceSink, ReelConfig,
    Scene, SceneInputs, SceneKind,
};

#[derive(Parser, Debug)]
#[command(name = "statreel", version, about = "Statistics explainer animations")]
struct Cli {
    /// JSON configuration file (every field optional).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the network, replay its growth and write the growth table CSV.
    Network(NetworkArgs),
    /// Draw a synthetic height sample and write the measurement CSV.
    Heights(HeightsArgs),
    /// Plot the measurement file as histograms with 1, 2 and 5 cm bins.
    Histogram(HistogramArgs),
    /// Render a single frame of a scene as a PNG.
    Frame(FrameArgs),
    /// Render a scene as a numbered PNG sequence.
    Frames(FramesArgs),
    /// Render a scene to MP4 (requires `ffmpeg` on PATH).
    Render(RenderArgs),
}

#[derive(Args, Debug)]
struct NetworkArgs {
    /// Output growth table.
    #[arg(long, default_value = "network_data.csv")]
    out: PathBuf,

    /// Also write the network / degree distribution chart here.
    #[arg(long)]
    chart: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct HeightsArgs {
    /// Output measurement table.
    #[arg(long, default_value = "height_filtered.csv")]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct HistogramArgs {
    /// Measurement table to plot.
    #[arg(long, default_value = "height_filtered.csv")]
    heights: PathBuf,

    /// Output PNG.
    #[arg(long, default_value = "height_histogram.png")]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct SceneArgs {
    /// Scene to script: network-growth, height-drop, koch, trial-averaging.
    #[arg(long)]
    scene: SceneKind,

    /// Growth table read by network-growth.
    #[arg(long, default_value = "network_data.csv")]
    table: PathBuf,

    /// Measurement table read by height-drop.
    #[arg(long, default_value = "height_filtered.csv")]
    heights: PathBuf,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct FramesArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Output directory for `frame_00000.png`, ...
    #[arg(long)]
    out_dir: PathBuf,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Last frame (exclusive); defaults to the scene duration.
    #[arg(long)]
    end: Option<u64>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Output MP4 path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cfg = match &cli.config {
        Some(path) => ReelConfig::from_json_file(path)?,
        None => ReelConfig::default(),
    };

    match cli.cmd {
        Command::Network(args) => cmd_network(&cfg, args),
        Command::Heights(args) => cmd_heights(&cfg, args),
        Command::Histogram(args) => cmd_histogram(args),
        Command::Frame(args) => cmd_frame(&cfg, args),
        Command::Frames(args) => cmd_frames(&cfg, args),
        Command::Render(args) => cmd_render(&cfg, args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn cmd_network(cfg: &ReelConfig, args: NetworkArgs) -> anyhow::Result<()> {
    let data = statreel::prepare_network(&cfg.network)?;
    data.table().write_csv(&args.out)?;
    eprintln!("wrote {}", args.out.display());

    if let Some(chart) = args.chart {
        statreel::write_network_chart(
            &data.graph,
            &data.layout,
            &chart,
            &statreel::system_fontdb(),
        )?;
        eprintln!("wrote {}", chart.display());
    }
    Ok(())
}

fn cmd_heights(cfg: &ReelConfig, args: HeightsArgs) -> anyhow::Result<()> {
    let heights = statreel::synthetic_heights(&cfg.heights.sample)?;
    statreel::write_measurements(&args.out, &heights)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_histogram(args: HistogramArgs) -> anyhow::Result<()> {
    let heights = statreel::read_measurements(&args.heights)?;
    statreel::write_height_histogram(&heights, &args.out, &statreel::system_fontdb())?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frame(cfg: &ReelConfig, args: FrameArgs) -> anyhow::Result<()> {
    let scene = load_scene(cfg, &args.scene)?;
    let mut renderer = CpuRenderer::new();
    let frame = statreel::render_frame(&scene, FrameIndex(args.frame), &mut renderer)?;
    statreel::write_png(&args.out, &frame, scene.background)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(cfg: &ReelConfig, args: FramesArgs) -> anyhow::Result<()> {
    let scene = load_scene(cfg, &args.scene)?;
    let end = args.end.unwrap_or(scene.duration.0).min(scene.duration.0);
    let range = FrameRange::new(FrameIndex(args.start), FrameIndex(end))?;

    let mut sink = PngSequenceSink::new(&args.out_dir);
    let n = statreel::render_to_sink(&scene, range, &mut CpuRenderer::new(), &mut sink)?;
    eprintln!("wrote {n} frames to {}", args.out_dir.display());
    Ok(())
}

fn cmd_render(cfg: &ReelConfig, args: RenderArgs) -> anyhow::Result<()> {
    let scene = load_scene(cfg, &args.scene)?;
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(&args.out));
    statreel::render_to_sink(
        &scene,
        statreel::full_range(&scene),
        &mut CpuRenderer::new(),
        &mut sink,
    )?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn load_scene(cfg: &ReelConfig, args: &SceneArgs) -> anyhow::Result<Scene> {
    let mut inputs = SceneInputs::default();
    match args.scene {
        SceneKind::NetworkGrowth => {
            inputs.growth = Some(read_table(&args.table)?);
        }
        SceneKind::HeightDrop => {
            inputs.heights = Some(statreel::read_measurements(&args.heights)?);
        }
        SceneKind::Koch | SceneKind::TrialAveraging => {}
    }
    Ok(statreel::build_scene(args.scene, cfg, &inputs)?)
}

fn read_table(path: &Path) -> anyhow::Result<statreel::GrowthTable> {
    statreel::GrowthTable::read_csv(path)
        .with_context(|| format!("load growth table '{}'", path.display()))
}
