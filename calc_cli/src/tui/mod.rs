mod app;
mod event;
mod view;

use calc_core::settings::Settings;

pub fn run(settings: Settings, slug: Option<&str>) -> anyhow::Result<()> {
    app::run(settings, slug)
}
