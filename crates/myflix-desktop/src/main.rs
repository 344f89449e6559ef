//! # MyFlix Desktop
//!
//! Native desktop client for the MyFlix movie catalog.
//!
//! ## Architecture
//!
//! All data lives in the remote MyFlix API. Pages are thin Dioxus
//! components over the view models in `myflix-views`, which call the API
//! through `myflix-client`.
//!
//! ## Modules
//!
//! - [`components`] - Shell, navigation, movie cards, dialogs, toasts
//! - [`router`] - Application routes
//! - [`state`] - Shared services and the UI feedback adapters
//! - [`views`] - Page-level view components

use anyhow::Context;
use dioxus::desktop::{Config as WindowConfig, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use myflix_client::{ApiClient, Config, SessionStore};

mod components;
mod router;
mod state;
mod views;

use router::Route;
use state::AppState;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "myflix_desktop=info,myflix_views=info,myflix_client=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load();
    let api_url = config.api_url().context("invalid MyFlix API url")?;
    tracing::info!(%api_url, "Starting MyFlix Desktop");

    let session = SessionStore::open_default();
    let state = AppState::new(ApiClient::new(api_url, session));

    let cfg = WindowConfig::new().with_window(
        WindowBuilder::new()
            .with_title("MyFlix")
            .with_inner_size(LogicalSize::new(1200.0, 800.0))
            .with_min_inner_size(LogicalSize::new(800.0, 600.0)),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(cfg)
        .with_context(state)
        .launch(App);

    Ok(())
}

/// Root application component.
#[component]
fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/styles.css") }
        Router::<Route> {}
    }
}
