//! Welcome View - Landing screen shown before a session starts
//!
//! Independent of game state; the caller supplies the button label and what
//! happens when it is pressed.

use dioxus::prelude::*;

/// Props for WelcomeView
#[derive(Props, Clone, PartialEq)]
pub struct WelcomeViewProps {
    /// Label of the call-to-action button
    pub start_button_text: String,
    /// Invoked with no arguments when the button is pressed
    pub on_start_call: EventHandler<()>,
}

#[component]
pub fn WelcomeView(props: WelcomeViewProps) -> Element {
    let on_start_call = props.on_start_call;

    rsx! {
        div {
            class: "welcome-view h-full w-full flex items-center justify-center p-8",

            section {
                class: "flex flex-col items-center justify-center text-center max-w-2xl animate-rise-in",

                WelcomeIllustration {}

                h1 {
                    class: "text-white text-5xl font-bold mb-4 font-serif tracking-wide animate-pop-in delay-200",
                    span { class: "magic-glow bg-white/5 rounded-2xl px-4 py-2", "D&D Game Master" }
                }

                p {
                    class: "text-white max-w-prose pt-2 leading-7 font-medium text-lg animate-fade-in delay-400",
                    "Embark on an epic fantasy adventure with your AI Game Master"
                }

                p {
                    class: "text-gray-400 max-w-xl pt-4 text-base leading-6 animate-fade-in delay-600",
                    "Speak your actions aloud and watch your story unfold. Face challenges, meet mysterious characters, and make choices that shape your destiny."
                }

                div {
                    class: "mt-8 animate-rise-in delay-800",
                    button {
                        class: "start-button w-72 h-14 text-lg font-bold font-serif magic-glow rounded-lg bg-amber-500 text-black border-0 cursor-pointer hover-grow flex items-center justify-center gap-2",
                        onclick: move |_| {
                            tracing::debug!("Start button pressed");
                            on_start_call.call(());
                        },
                        span { "🎲" }
                        "{props.start_button_text}"
                    }
                }

                div {
                    class: "mt-8 flex items-center gap-6 text-sm text-gray-400 animate-fade-in delay-1000",
                    div {
                        class: "flex items-center gap-2",
                        span { class: "text-amber-400", "⚔" }
                        span { "Real-time voice interaction" }
                    }
                    div {
                        class: "flex items-center gap-2",
                        span { class: "text-amber-400", "📖" }
                        span { "Dynamic storytelling" }
                    }
                }
            }
        }
    }
}

/// Floating sword, die and book with sparkles
#[component]
fn WelcomeIllustration() -> Element {
    rsx! {
        div {
            class: "relative mb-6",
            div {
                class: "relative animate-sway",
                div {
                    class: "flex items-center justify-center gap-4 text-5xl",
                    span { class: "text-amber-400 magic-glow animate-bob", "⚔" }
                    span { class: "text-yellow-300 animate-spin-slow", "🎲" }
                    span { class: "text-amber-400 magic-glow animate-bob delay-1000", "📖" }
                }
                span { class: "absolute -top-4 -right-4 text-yellow-300 animate-twinkle", "✦" }
                span { class: "absolute -bottom-4 -left-4 text-amber-400 animate-twinkle delay-1000", "✦" }
            }
        }
    }
}
