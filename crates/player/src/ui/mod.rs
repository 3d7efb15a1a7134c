use dioxus::prelude::*;
use gmvoice_domain::{ChatMessage, GameSnapshot};

pub mod presentation;

use presentation::state::GameState;
use presentation::views::{GameView, WelcomeView};

/// Panel effects (animations, bars, glow) applied on every target.
const PANELS_CSS: &str = include_str!("../../assets/css/panels.css");

/// Shell variant for UI layout selection.
/// This is passed via Dioxus context from the runner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ShellKind {
    #[default]
    Desktop,
    Mobile,
}

impl ShellKind {
    /// Parse a shell name from configuration ("desktop" / "mobile", any case)
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "desktop" => Some(Self::Desktop),
            "mobile" => Some(Self::Mobile),
            _ => None,
        }
    }
}

/// Data the composition root hands to the UI at launch
#[derive(Clone, Debug, PartialEq)]
pub struct InitialSession {
    pub snapshot: GameSnapshot,
    pub transcript: Vec<ChatMessage>,
    pub start_label: String,
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `crates/player/src/main.rs`).
    let shell = use_context::<ShellKind>();
    let session = use_context::<InitialSession>();

    // Must be created inside an active Dioxus runtime.
    let mut game_state = use_context_provider({
        let snapshot = session.snapshot.clone();
        let transcript = session.transcript.clone();
        move || GameState::new(snapshot, transcript)
    });

    let started = *game_state.started.read();

    let screen = if started {
        rsx! { GameView {} }
    } else {
        rsx! {
            WelcomeView {
                start_button_text: session.start_label.clone(),
                on_start_call: move |_| game_state.start(),
            }
        }
    };

    rsx! {
        style { "{PANELS_CSS}" }

        {
            match shell {
                ShellKind::Desktop => rsx! {
                    DesktopShell { {screen} }
                },
                ShellKind::Mobile => rsx! {
                    MobileShell { {screen} }
                },
            }
        }
    }
}

#[component]
fn DesktopShell(children: Element) -> Element {
    rsx! {
        div {
            class: "bg-dark-bg text-white",
            style: "width: 100vw; height: 100vh; overflow: hidden;",
            {children}
        }
    }
}

#[component]
fn MobileShell(children: Element) -> Element {
    rsx! {
        // Panels stack vertically, so the page scrolls instead of clipping.
        div {
            class: "bg-dark-bg text-white",
            style: "width: 100vw; min-height: 100vh; overflow-y: auto;",
            {children}
        }
    }
}
