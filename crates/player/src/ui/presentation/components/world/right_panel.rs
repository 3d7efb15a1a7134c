//! Right Panel - Character sheet stacked over the locations list

use dioxus::prelude::*;
use gmvoice_domain::{Location, NamedEntries, PlayerState};

use crate::presentation::components::pc::character_panel::CharacterPanel;
use crate::presentation::components::world::locations_panel::LocationsPanel;

/// Props for RightPanel
#[derive(Props, Clone, PartialEq)]
pub struct RightPanelProps {
    pub player: Option<PlayerState>,
    pub locations: Option<NamedEntries<Location>>,
    /// Forwarded to the locations panel, which falls back to "village"
    pub current_location: Option<String>,
}

/// RightPanel component - pure layout, no state of its own
#[component]
pub fn RightPanel(props: RightPanelProps) -> Element {
    rsx! {
        div {
            class: "right-panel flex flex-col gap-4 p-4",
            CharacterPanel { player: props.player.clone() }
            LocationsPanel {
                locations: props.locations.clone(),
                current_location: props.current_location.clone(),
            }
        }
    }
}
