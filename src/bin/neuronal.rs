use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[derive(Parser, Debug)]
#[command(name = "neuronal", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay cues up to a point in time and render that frame as a PNG.
    Frame(FrameArgs),
    /// Replay cues and render a numbered PNG sequence.
    Frames(FramesArgs),
}

#[derive(Args, Debug)]
struct SessionArgs {
    /// Performance config JSON. Missing fields take their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Key cues, e.g. "0:p,250:m,900:w".
    #[arg(long, default_value = "")]
    cues: String,

    /// File of key cues, one or more per line.
    #[arg(long)]
    cues_file: Option<PathBuf>,

    /// Simulation rate in frames per second.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    /// Backend to use.
    #[arg(long, value_enum, default_value_t = BackendChoice::Cpu)]
    backend: BackendChoice,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    session: SessionArgs,

    /// Time of the rendered frame in milliseconds.
    #[arg(long)]
    at_ms: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    #[command(flatten)]
    session: SessionArgs,

    /// Length of the sequence in milliseconds.
    #[arg(long)]
    duration_ms: f64,

    /// Output directory; frames are written as `frame_00000.png`, ...
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BackendChoice {
    Cpu,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
    }
}

struct Session {
    performance: neuronal::Performance,
    cues: neuronal::CueSheet,
    step_ms: f64,
    backend: Box<dyn neuronal::RenderBackend>,
}

impl Session {
    fn open(args: &SessionArgs) -> anyhow::Result<Self> {
        let mut config = match &args.config {
            Some(path) => neuronal::PerformConfig::from_path(path)
                .with_context(|| format!("load config '{}'", path.display()))?,
            None => neuronal::PerformConfig::default(),
        };
        if let Some(seed) = args.seed {
            config.seed = seed;
        }
        if let Some(width) = args.width {
            config.width = width;
        }
        if let Some(height) = args.height {
            config.height = height;
        }
        config.validate()?;

        if !args.fps.is_finite() || args.fps <= 0.0 {
            anyhow::bail!("--fps must be > 0 (got {})", args.fps);
        }

        let mut text = args.cues.clone();
        if let Some(path) = &args.cues_file {
            let file = std::fs::read_to_string(path)
                .with_context(|| format!("read cues '{}'", path.display()))?;
            text.push('\n');
            text.push_str(&file);
        }
        let cues = neuronal::CueSheet::parse(&text).with_context(|| "parse cues")?;

        let kind = match args.backend {
            BackendChoice::Cpu => neuronal::BackendKind::Cpu,
        };
        let backend = neuronal::create_backend(kind, &neuronal::RenderSettings::default())?;

        Ok(Self {
            performance: neuronal::Performance::new(&config)?,
            cues,
            step_ms: 1000.0 / args.fps,
            backend,
        })
    }

    /// Steps the simulation until it reaches `at_ms`.
    fn advance_to(&mut self, at_ms: f64) -> anyhow::Result<()> {
        while self.performance.elapsed_ms() + self.step_ms <= at_ms + 1e-9 {
            self.performance.advance(&mut self.cues, self.step_ms)?;
        }
        Ok(())
    }

    fn write_png(&mut self, out: &Path) -> anyhow::Result<()> {
        let scene = self.performance.draw();
        let frame = self.backend.render_scene(&scene)?;
        if let Some(parent) = out.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        image::save_buffer_with_format(
            out,
            &frame.to_straight(),
            frame.width,
            frame.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", out.display()))?;
        Ok(())
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    if !args.at_ms.is_finite() || args.at_ms < 0.0 {
        anyhow::bail!("--at-ms must be >= 0 (got {})", args.at_ms);
    }
    let mut session = Session::open(&args.session)?;
    session.advance_to(args.at_ms)?;
    session.write_png(&args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    if !args.duration_ms.is_finite() || args.duration_ms < 0.0 {
        anyhow::bail!("--duration-ms must be >= 0 (got {})", args.duration_ms);
    }
    let mut session = Session::open(&args.session)?;
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let count = (args.duration_ms / session.step_ms).floor() as u64 + 1;
    for i in 0..count {
        session.advance_to(i as f64 * session.step_ms)?;
        session.write_png(&args.out_dir.join(format!("frame_{i:05}.png")))?;
    }
    eprintln!("wrote {count} frames to {}", args.out_dir.display());
    Ok(())
}
