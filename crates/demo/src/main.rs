// File: crates/demo/src/main.rs
// Summary: Demo loads a JSON move list (plus optional live evals) and renders every
// analysis chart to PNG, alongside the Chart.js data JSON for each category.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chart_core::{theme, RenderOptions};
use clap::Parser;
use engine_graph::{
    load_moves, Category, ChartBackend, GraphAdapter, GraphConfig, HeadlessBackend, MoveRecord, SkiaBackend,
};
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "engine-graph-demo", about = "Render engine analysis charts for a game")]
struct Cli {
    /// JSON array of move records (`null` for moves not known yet).
    moves: PathBuf,
    /// Graph settings JSON (max_eval, colors, engine names).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Live engine evals to replay: `[{"id": 2, "ply": 31, "wv": "0.45"}, ...]`.
    #[arg(long)]
    live: Option<PathBuf>,
    #[arg(long, default_value = "target/out")]
    out: PathBuf,
    #[arg(long, default_value = "dark")]
    theme: String,
    #[arg(long, default_value_t = 960)]
    width: i32,
    #[arg(long, default_value_t = 480)]
    height: i32,
    /// Chart to leave selected after the run.
    #[arg(long, default_value = "eval")]
    active: Category,
    /// Write only the Chart.js JSON, no PNGs.
    #[arg(long)]
    json_only: bool,
    #[arg(short, long)]
    verbose: bool,
}

/// One live analysis update: target eval series plus the move record.
#[derive(Deserialize, Debug)]
struct LiveEntry {
    id: usize,
    #[serde(flatten)]
    record: MoveRecord,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).try_init();

    let config = match &cli.config {
        Some(path) => GraphConfig::load(path).with_context(|| format!("loading config {}", path.display()))?,
        None => GraphConfig::default(),
    };
    let moves = load_moves(&cli.moves).with_context(|| format!("loading moves {}", cli.moves.display()))?;
    let live = match &cli.live {
        Some(path) => load_live(path)?,
        None => Vec::new(),
    };
    info!(moves = moves.len(), live = live.len(), "inputs loaded");

    if cli.json_only {
        let mut adapter = GraphAdapter::new(config, HeadlessBackend);
        run(&mut adapter, &cli, &moves, &live)
    } else {
        let mut render = RenderOptions::default();
        render.width = cli.width;
        render.height = cli.height;
        render.theme = theme::find(&cli.theme);
        let backend = SkiaBackend::new(render).with_output_dir(&cli.out);
        let mut adapter = GraphAdapter::new(config, backend);
        run(&mut adapter, &cli, &moves, &live)
    }
}

fn run<B: ChartBackend>(
    adapter: &mut GraphAdapter<B>,
    cli: &Cli,
    moves: &[Option<MoveRecord>],
    live: &[LiveEntry],
) -> Result<()> {
    adapter.set_active_category(cli.active);
    adapter.init(moves);
    // init plots the active chart only; fill the others too
    for category in Category::ALL.into_iter().filter(|&c| c != cli.active) {
        adapter.apply_move_batch(Some(category), moves, 0);
    }
    adapter.set_active_category(cli.active);

    for entry in live {
        adapter.apply_live_update(&entry.record, entry.id);
    }

    std::fs::create_dir_all(&cli.out).with_context(|| format!("creating {}", cli.out.display()))?;
    for category in Category::ALL {
        if let Some(json) = adapter.export_json(category)? {
            let path = cli.out.join(format!("{}.json", category.canvas_id()));
            std::fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
            info!(%category, path = %path.display(), "wrote chart data");
        }
    }
    if !cli.json_only {
        info!(dir = %cli.out.display(), "wrote chart images");
    }
    Ok(())
}

fn load_live(path: &Path) -> Result<Vec<LiveEntry>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing live updates {}", path.display()))
}
