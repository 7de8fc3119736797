// SPDX-License-Identifier: GPL-3.0-only

use app::Pagina;
use iced::window::Settings;
use pagina_core::config::ListSettings;
use tracing::error;
use tracing_subscriber::EnvFilter;

mod app;
mod i18n;
mod pagina;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Get the system's preferred languages.
    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();

    // Enable localizations to be applied.
    i18n::init(&requested_languages);

    let settings = ListSettings::load().unwrap_or_else(|err| {
        error!("Could not load list settings, falling back to defaults: {err}");
        ListSettings::default()
    });

    iced::application(Pagina::title, Pagina::update, Pagina::view)
        .subscription(Pagina::subscription)
        .theme(Pagina::theme)
        .window(Settings {
            position: iced::window::Position::Centered,
            resizable: true,
            ..Default::default()
        })
        .run_with(move || (Pagina::new(settings), iced::Task::none()))
}
