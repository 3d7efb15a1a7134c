//! NPC panel helper functions

use gmvoice_domain::{Attitude, NamedEntries, Npc};

/// NPCs split into the living roster and the fallen list
///
/// Both halves keep the snapshot's order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NpcPartition {
    pub alive: Vec<(String, Npc)>,
    pub fallen: Vec<(String, Npc)>,
}

impl NpcPartition {
    pub fn total(&self) -> usize {
        self.alive.len() + self.fallen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Split NPCs on their alive flag; only an explicit `alive: false` is fallen
pub fn partition_npcs(npcs: Option<&NamedEntries<Npc>>) -> NpcPartition {
    let mut partition = NpcPartition::default();
    let Some(npcs) = npcs else {
        return partition;
    };

    for (name, npc) in npcs.iter() {
        let entry = (name.to_string(), npc.clone());
        if npc.is_alive() {
            partition.alive.push(entry);
        } else {
            partition.fallen.push(entry);
        }
    }
    partition
}

/// Header summary, e.g. "3 alive" or "3 alive, 1 fallen"
///
/// # Examples
/// ```
/// use gmvoice_player::ui::presentation::helpers::npc_helpers::{roster_summary, NpcPartition};
///
/// assert_eq!(roster_summary(&NpcPartition::default()), "0 alive");
/// ```
pub fn roster_summary(partition: &NpcPartition) -> String {
    if partition.fallen.is_empty() {
        format!("{} alive", partition.alive.len())
    } else {
        format!(
            "{} alive, {} fallen",
            partition.alive.len(),
            partition.fallen.len()
        )
    }
}

/// Badge color for the three known attitudes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttitudeTone {
    Friendly,
    Hostile,
    Neutral,
}

impl AttitudeTone {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Friendly => "bg-green-500/20 text-green-400 border-green-500/30",
            Self::Hostile => "bg-red-500/20 text-red-400 border-red-500/30",
            Self::Neutral => "bg-gray-500/20 text-gray-400 border-gray-500/30",
        }
    }
}

/// `None` for attitudes outside the known three; they render uncolored
pub fn attitude_tone(attitude: &Attitude) -> Option<AttitudeTone> {
    match attitude {
        Attitude::Friendly => Some(AttitudeTone::Friendly),
        Attitude::Hostile => Some(AttitudeTone::Hostile),
        Attitude::Neutral => Some(AttitudeTone::Neutral),
        Attitude::Other(_) => None,
    }
}

/// Attitude to show as a badge; a blank attitude shows no badge at all
pub fn attitude_badge(npc: &Npc) -> Option<&Attitude> {
    npc.attitude
        .as_ref()
        .filter(|attitude| !attitude.as_str().trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> NamedEntries<Npc> {
        serde_json::from_str(
            r#"{
                "Mira": {"role": "innkeeper", "attitude": "friendly"},
                "Grask": {"role": "bandit", "attitude": "hostile", "alive": false},
                "Old Tom": {"alive": true},
                "Vex": {"attitude": "scheming"},
                "Hollow King": {"alive": false}
            }"#,
        )
        .unwrap()
    }

    mod partition_tests {
        use super::*;

        #[test]
        fn every_npc_lands_in_exactly_one_half() {
            let npcs = roster();
            let partition = partition_npcs(Some(&npcs));
            assert_eq!(partition.total(), npcs.len());

            for name in npcs.names() {
                let in_alive = partition.alive.iter().any(|(n, _)| n == name);
                let in_fallen = partition.fallen.iter().any(|(n, _)| n == name);
                assert!(in_alive ^ in_fallen, "{name} must be in exactly one half");
            }
        }

        #[test]
        fn halves_keep_snapshot_order() {
            let partition = partition_npcs(Some(&roster()));
            let alive: Vec<&str> = partition.alive.iter().map(|(n, _)| n.as_str()).collect();
            let fallen: Vec<&str> = partition.fallen.iter().map(|(n, _)| n.as_str()).collect();
            assert_eq!(alive, vec!["Mira", "Old Tom", "Vex"]);
            assert_eq!(fallen, vec!["Grask", "Hollow King"]);
        }

        #[test]
        fn summary_matches_partition_sizes() {
            let partition = partition_npcs(Some(&roster()));
            assert_eq!(roster_summary(&partition), "3 alive, 2 fallen");
        }

        #[test]
        fn summary_omits_fallen_when_none() {
            let npcs: NamedEntries<Npc> =
                serde_json::from_str(r#"{"Mira": {}, "Tom": {}}"#).unwrap();
            assert_eq!(roster_summary(&partition_npcs(Some(&npcs))), "2 alive");
        }

        #[test]
        fn absent_mapping_is_empty() {
            let partition = partition_npcs(None);
            assert!(partition.is_empty());
            assert_eq!(roster_summary(&partition), "0 alive");
        }
    }

    mod attitude_tests {
        use super::*;

        #[test]
        fn known_attitudes_have_tones() {
            assert_eq!(attitude_tone(&Attitude::Friendly), Some(AttitudeTone::Friendly));
            assert_eq!(attitude_tone(&Attitude::Hostile), Some(AttitudeTone::Hostile));
            assert_eq!(attitude_tone(&Attitude::Neutral), Some(AttitudeTone::Neutral));
        }

        #[test]
        fn unknown_attitude_is_uncolored_but_kept() {
            let attitude = Attitude::from("scheming");
            assert_eq!(attitude_tone(&attitude), None);
            assert_eq!(attitude.as_str(), "scheming");
        }

        #[test]
        fn blank_attitude_has_no_badge() {
            let npcs: NamedEntries<Npc> = serde_json::from_str(
                r#"{"Mira": {"attitude": ""}, "Tom": {"attitude": "  "}, "Vex": {}}"#,
            )
            .unwrap();
            for (name, npc) in npcs.iter() {
                assert!(attitude_badge(npc).is_none(), "{name} should have no badge");
            }
        }

        #[test]
        fn present_attitude_is_badged() {
            let npc: Npc = serde_json::from_str(r#"{"attitude": "scheming"}"#).unwrap();
            assert_eq!(attitude_badge(&npc), Some(&Attitude::from("scheming")));
        }
    }
}
