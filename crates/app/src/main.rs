use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use viewport_animator_core::{
    ElementDescriptor, ElementKind, FrameClock, PageDescriptor, PageModel, ViewportAnimator,
};

fn main() -> viewport_animator_core::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate { page, frames } => run_simulate(page.as_deref(), frames),
        Commands::Count {
            start,
            end,
            duration,
        } => run_count(start, end, duration),
    }
}

fn run_simulate(page_path: Option<&std::path::Path>, frames: u32) -> viewport_animator_core::Result<()> {
    let descriptor = match page_path {
        Some(path) => {
            tracing::info!(?path, "loading page description");
            PageDescriptor::from_json(&std::fs::read_to_string(path)?)?
        }
        None => PageDescriptor::demo(),
    };

    let mut page = PageModel::new(descriptor);
    let mut animator = ViewportAnimator::default();
    animator.observe(page.elements());
    tracing::info!(
        elements = animator.observed_count(),
        frames,
        "starting scroll simulation"
    );

    let interval = animator.config().frame.interval_ms;
    let mut clock = FrameClock::new();
    let scrollable = page.content_height() - page.viewport().height;

    for frame in 0..frames {
        let progress = if frames > 1 {
            f64::from(frame) / f64::from(frames - 1)
        } else {
            1.0
        };
        let viewport = page.scroll_to(scrollable * progress as f32);

        for element in animator.scroll_to(viewport)? {
            tracing::info!(
                id = element.id(),
                scroll_top = viewport.scroll_top,
                "element revealed"
            );
        }

        animator.tick(clock.now_ms())?;
        clock.advance(interval);
    }

    // Let any counters that started near the end of the scroll finish.
    while !animator.is_idle() {
        animator.tick(clock.now_ms())?;
        clock.advance(interval);
    }

    for element in page.elements() {
        if element.kind() == ElementKind::StatHeading {
            let value = element.text()?;
            tracing::info!(id = element.id(), value = %value, "final stat value");
        }
    }

    Ok(())
}

fn run_count(start: i64, end: i64, duration: f64) -> viewport_animator_core::Result<()> {
    tracing::info!(start, end, duration, "running counter animation");

    let mut animator = ViewportAnimator::default();
    let target = ElementDescriptor::stat_heading("stat", 0.0, 40.0, None).instantiate();
    animator.animate_value(&target, start, end, duration)?;

    let interval = animator.config().frame.interval_ms;
    let mut clock = FrameClock::new();
    while !animator.is_idle() {
        animator.tick(clock.now_ms())?;
        println!("{:>8.1}ms  {}", clock.now_ms(), target.text()?);
        clock.advance(interval);
    }

    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Scroll-reveal and stat-counter animation demo", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scroll a page top to bottom and report reveals and counter results.
    Simulate {
        /// Optional JSON page description; the built-in demo page is used
        /// when omitted.
        #[arg(short, long)]
        page: Option<PathBuf>,
        /// Number of animation frames the scroll is spread over.
        #[arg(short, long, default_value_t = 240)]
        frames: u32,
    },
    /// Run a single counter animation and print each rendered frame.
    Count {
        /// Value the counter starts from.
        start: i64,
        /// Value the counter ends on.
        end: i64,
        /// Time budget in milliseconds.
        #[arg(short, long, default_value_t = 1000.0)]
        duration: f64,
    },
}
