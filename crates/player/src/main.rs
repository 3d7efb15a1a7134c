//! GM Voice Player - composition root binary.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gmvoice_player::{PlayerConfig, ShellKind};

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gmvoice_player=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting GM Voice Player");

    let config = PlayerConfig::from_env();
    let session = config.initial_session();
    tracing::debug!(
        snapshot = ?config.snapshot_path,
        transcript_lines = session.transcript.len(),
        "Loaded initial session"
    );

    // Shell kind (desktop vs mobile layout)
    let shell = config.shell.unwrap_or_else(detect_shell);

    // Launch Dioxus
    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let window = dioxus::desktop::WindowBuilder::new().with_title("GM Voice");
        let cfg = dioxus::desktop::Config::new().with_window(window);
        builder = builder.with_cfg(cfg);
    }

    builder
        .with_context(shell)
        .with_context(session)
        .launch(gmvoice_player::app);
}

#[cfg(target_arch = "wasm32")]
fn detect_shell() -> ShellKind {
    let width = web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(1024.0);

    if width < 768.0 {
        ShellKind::Mobile
    } else {
        ShellKind::Desktop
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn detect_shell() -> ShellKind {
    ShellKind::default()
}
