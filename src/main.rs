use std::collections::BTreeMap;
use std::fs;

use blackbetty::config::Config;
use blackbetty::infra::{BoardObserver, DefaultObserver};
use blackbetty::{Game, Map, Snapshot};
use dotenv::dotenv;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("blackbetty=debug,info"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    init_logging();

    let config = Config::from_env()?;

    let map = match &config.map_path {
        Some(path) => Map::parse(&fs::read_to_string(path)?)?,
        None => Map::standard(config.settings.board_size),
    };
    tracing::info!("Arena: {}x{} ({} cells)", map.width, map.height, map.len());

    let snapshot = Snapshot::from_json(&fs::read_to_string(&config.snapshot_path)?)?;

    let mut rng = match config.seed {
        Some(seed) => {
            tracing::info!("Seed: {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let mut game = if config.draw_board {
        Game::new(map.clone(), config.settings, BoardObserver::new(map))
    } else {
        Game::new(map, config.settings, DefaultObserver)
    };
    tracing::debug!("Rules: {:?}", game.settings());

    let actions = game.decide(&snapshot, config.player, &mut rng)?;
    let wire: BTreeMap<u32, _> = actions.into_iter().map(|(id, action)| (id.0, action)).collect();
    println!("{}", serde_json::to_string(&wire)?);

    Ok(())
}
