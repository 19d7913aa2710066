use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use inkboard::Config;
use inkboard::draw::OffscreenBuffer;
use inkboard::input::BoardState;
use inkboard::replay;
use inkboard::util::Point;

#[derive(Parser, Debug)]
#[command(name = "inkboard")]
#[command(version, about = "Paged freehand whiteboard core with two-point pointer calibration")]
struct Cli {
    /// Event script to replay (see the flagless usage text for the format)
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// PNG snapshot written when the replay finishes
    #[arg(long, short = 'o', value_name = "FILE", default_value = "inkboard.png")]
    output: PathBuf,

    /// Load configuration from this file instead of the default location
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Surface width override in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Surface height override in pixels
    #[arg(long)]
    height: Option<u32>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(script_path) = cli.script else {
        print_usage();
        return Ok(());
    };

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let width = cli.width.unwrap_or(config.surface.width);
    let height = cli.height.unwrap_or(config.surface.height);

    let script = fs::read_to_string(&script_path)
        .with_context(|| format!("Failed to read script from {}", script_path.display()))?;
    let commands = replay::parse_script(&script)?;

    let [ax, ay] = config.calibration.reference_a;
    let [bx, by] = config.calibration.reference_b;
    let mut board = BoardState::with_defaults(
        config.default_color_index(),
        config.drawing.default_width,
        Point::new(ax, ay),
        Point::new(bx, by),
        config.calibration.calibrate_on_start,
    );
    let mut buffer = OffscreenBuffer::new(width, height, config.background_color())
        .context("Failed to allocate the offscreen surface")?;
    board.on_resize(width, height);
    replay::sync(&mut board, &mut buffer).context("Failed to paint the initial surface")?;

    log::info!(
        "Replaying {} events onto a {width}x{height} surface",
        commands.len()
    );
    replay::run(&mut board, &mut buffer, &commands).context("Replay failed")?;

    let mut file = fs::File::create(&cli.output)
        .with_context(|| format!("Failed to create {}", cli.output.display()))?;
    buffer
        .write_png(&mut file)
        .with_context(|| format!("Failed to write PNG to {}", cli.output.display()))?;

    println!(
        "Replayed {} events; page {} holds {} strokes -> {}",
        commands.len(),
        board.pages.active_index(),
        board.pages.active().strokes.len(),
        cli.output.display()
    );

    Ok(())
}

fn print_usage() {
    println!("inkboard: paged whiteboard drawing core");
    println!();
    println!("Usage:");
    println!("  inkboard --script FILE [--output FILE]   Replay an event script, write a PNG");
    println!("  inkboard --help                          Show all options");
    println!();
    println!("Script commands (one per line, '#' starts a comment):");
    println!("  down X Y / move X Y / up X Y    pointer events in raw surface pixels");
    println!("  tool NAME                       black, blue, red, green, eraser,");
    println!("                                  thin, normal, thick, verythick,");
    println!("                                  clear, calibrate, quit");
    println!("  page N                          switch to page N (0-7)");
    println!("  resize W H                      resize the drawing surface");
    println!();
    println!("A freshly started board is calibrating: the first two 'down' events");
    println!("are the reference clicks (set calibrate_on_start = false in the");
    println!("config to start drawing immediately).");
}
