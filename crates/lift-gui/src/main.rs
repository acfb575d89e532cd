//! LiftCare - Desktop GUI Application
//!
//! Customer portal for elevator maintenance: raise complaints, follow
//! service visits, review contracts, invoices and quotations.

use iced::Size;
use iced::window;
use lift_gui::App;
use lift_gui::component::LUCIDE_FONT_BYTES;
use tracing_subscriber::EnvFilter;

/// Application entry point.
///
/// `RUST_LOG` overrides the default log filter.
pub fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,lift_gui=debug,lift_nav=debug")),
        )
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting LiftCare");

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .font(LUCIDE_FONT_BYTES)
        .window(window::Settings {
            size: Size::new(1280.0, 800.0),
            min_size: Some(Size::new(1024.0, 600.0)),
            ..Default::default()
        })
        .run()
}
