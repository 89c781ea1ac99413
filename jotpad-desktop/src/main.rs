mod app;
mod settings;
mod toolbar;

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    app::run(settings::load_settings())
}
