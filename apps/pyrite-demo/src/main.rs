use anyhow::Result;
use clap::Parser;
use pyrite_assets::AssetStore;
use pyrite_event::{ActionKind, Key, Modifiers, MouseEventKind};
use pyrite_tilemap::Tilemap;
use pyrite_window::{ExitHandle, Responder, WindowConfig, run};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pyrite-demo", about = "Tilemap demo for the pyrite shell")]
struct Cli {
    #[arg(long, default_value_t = 800)]
    width: u32,

    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Borderless fullscreen at the display's native mode
    #[arg(long)]
    fullscreen: bool,

    #[arg(long)]
    resizable: bool,

    /// Disable vsync
    #[arg(long)]
    no_vsync: bool,

    /// Multisample count (1 = off)
    #[arg(long, default_value_t = 1)]
    fsaa: u32,

    /// Log the frame rate once per second
    #[arg(long)]
    log_fps: bool,

    /// Directory containing bot.png and rock.png
    #[arg(long, default_value = "./assets")]
    asset_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

struct Demo {
    exit: ExitHandle,
    asset_dir: PathBuf,
    map: Option<Tilemap>,
}

impl Responder for Demo {
    fn preload(&mut self, assets: &mut AssetStore) {
        assets.queue("bot", self.asset_dir.join("bot.png"));
        assets.queue("rock", self.asset_dir.join("rock.png"));
    }

    fn setup(&mut self, assets: &AssetStore) {
        let grid: Vec<Vec<&str>> = vec![
            vec!["2", "2", "2", "2", "2"],
            vec!["2", "0", "1", "0", "2"],
            vec!["2", "0", "0", "0", "2"],
            vec!["2", "2", "2", "2", "2"],
        ];
        let map = Tilemap::from_grid(&grid, assets);
        let textured = map.iter().filter(|t| t.image.is_some()).count();
        tracing::info!(
            "tilemap ready: {}x{} tiles, {textured} textured",
            map.rows(),
            map.cols()
        );
        self.map = Some(map);
    }

    fn resize(&mut self, width: u32, height: u32) {
        tracing::debug!("resized to {width}x{height}");
    }

    fn mouse(&mut self, x: f32, y: f32, kind: MouseEventKind) {
        if kind != MouseEventKind::Move {
            tracing::debug!("mouse {kind:?} at ({x:.0}, {y:.0})");
        }
    }

    fn key(&mut self, key: Key, _modifiers: Modifiers, kind: ActionKind) {
        if kind != ActionKind::Press {
            return;
        }
        match key {
            Key::Escape => self.exit.request_exit(),
            Key::T => {
                if let Some(map) = &self.map {
                    let textured = map.iter().filter(|t| t.image.is_some()).count();
                    tracing::info!(
                        "tilemap: {} rows, {} cols, {textured} textured",
                        map.rows(),
                        map.cols()
                    );
                }
            }
            _ => {}
        }
    }

    fn scroll(&mut self, amount: f32) {
        tracing::debug!("scroll {amount}");
    }

    fn typed(&mut self, ch: char) {
        tracing::debug!("typed {ch:?}");
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = WindowConfig {
        width: cli.width,
        height: cli.height,
        title: "Pyrite Demo".into(),
        fullscreen: cli.fullscreen,
        resizable: cli.resizable,
        vsync: !cli.no_vsync,
        fsaa: cli.fsaa,
        log_fps: cli.log_fps,
    };

    tracing::info!("pyrite-demo starting");

    let exit = ExitHandle::new();
    let demo = Demo {
        exit: exit.clone(),
        asset_dir: cli.asset_dir,
        map: None,
    };

    run(config, AssetStore::new(), demo, exit)?;
    Ok(())
}
