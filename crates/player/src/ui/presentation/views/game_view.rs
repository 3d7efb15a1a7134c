//! Game View - The in-session screen
//!
//! Quests and NPCs on the left, the transcript in the middle, and the
//! character/locations stack on the right. The mobile shell stacks
//! everything in a single column.

use dioxus::prelude::*;

use crate::presentation::components::{ChatTranscript, NpcPanel, QuestsPanel, RightPanel};
use crate::presentation::state::use_game_state;
use crate::ShellKind;

#[component]
pub fn GameView() -> Element {
    let game_state = use_game_state();
    let shell = use_context::<ShellKind>();

    let snapshot = game_state.snapshot.read().clone();
    let transcript = game_state.transcript.read().clone();

    let layout_class = match shell {
        ShellKind::Desktop => "game-view flex flex-row h-full w-full gap-4 p-4",
        ShellKind::Mobile => "game-view flex flex-col w-full gap-4 p-2 overflow-y-auto",
    };

    rsx! {
        div {
            class: "{layout_class}",

            div {
                class: "flex flex-col gap-4 shrink-0",
                QuestsPanel { quests: snapshot.quests.clone() }
                NpcPanel { npcs: snapshot.npcs.clone() }
            }

            div {
                class: "flex-1 min-w-0 overflow-y-auto",
                ChatTranscript { messages: transcript }
            }

            div {
                class: "shrink-0",
                RightPanel {
                    player: snapshot.player.clone(),
                    locations: snapshot.locations.clone(),
                    current_location: snapshot.current_location.clone(),
                }
            }
        }
    }
}
