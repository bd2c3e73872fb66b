mod app;
mod config;
mod cubes;
mod game;
mod resources;

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    if let Err(err) = app::run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
