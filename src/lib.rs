pub mod cards;
pub mod clustering;
pub mod linear;
pub mod progress;
pub mod save;
pub mod strengths;

/// feature-vector geometry
pub const EQUITY_BUCKETS: usize = 50;
pub const OCHS_CLUSTERS: usize = 8;
pub const RIVER_VILLAINS: usize = 990; // 45 choose 2

// kmeans clustering parameters
pub const KMEANS_RESTARTS: usize = 10;
pub const KMEANS_FLOP_CLUSTER_COUNT: usize = 200;
pub const KMEANS_TURN_CLUSTER_COUNT: usize = 200;
pub const KMEANS_RIVER_CLUSTER_COUNT: usize = 200;

/// seed for the production clustering runs. persisted assignments are
/// only comparable across runs that share this value.
pub const DRIVER_SEED: u64 = 0x5EED;

/// initialize terminal + file logging
pub fn init() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
