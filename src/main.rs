use anyhow::Result;
use tooltip_slider::app;
use tooltip_slider::data::assets;
use tooltip_slider::data::config::Config;
use tooltip_slider::data::theme_loader::ThemeLoader;
use tooltip_slider::utils::logging;

fn main() -> Result<()> {
    let root = assets::resolve_asset_root();
    // a read-only config dir still runs on the embedded defaults
    let seeded = assets::ensure_all_assets(&root);
    let config = Config::load_or_default(&root)?;
    logging::init(&config.log_file)?;
    log::info!("assets at {}", root.display());
    if let Err(e) = seeded {
        log::warn!("could not write default assets: {e:#}");
    }

    let theme = ThemeLoader::load(&root, &config.theme)?;

    let mut app = app::state::AppState::new(config, theme, root)?;
    app::event_loop::run(&mut app)
}
