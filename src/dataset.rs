// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: (C) 2025 Cranky Kernel <crankykernel@proton.me>

//! Bundled demo lineup. The guide has no backend of its own, so this is the
//! channel source for both the TUI and the CLI commands.

use crate::channel::{Category, Channel, ChannelKind};

pub fn categories() -> Vec<Category> {
    fn cat(id: &str, name: &str) -> Category {
        Category {
            category_id: id.to_string(),
            category_name: name.to_string(),
        }
    }

    vec![
        cat("8", "UK Live Sports"),
        cat("1", "USA News"),
        cat("2", "UK Entertainment"),
        cat("3", "Sports Premium"),
        cat("4", "Documentaries"),
        cat("5", "Kids Zone"),
        cat("6", "Action Movies"),
        cat("7", "Sci-Fi Series"),
    ]
}

pub fn channels() -> Vec<Channel> {
    fn ch(id: u32, name: &str, category_id: &str, kind: ChannelKind) -> Channel {
        Channel {
            id,
            name: name.to_string(),
            category_id: Some(category_id.to_string()),
            kind,
        }
    }

    vec![
        // UK live sports
        ch(105, "Sky Sports Premier League", "8", ChannelKind::Live),
        ch(106, "TNT Sports 1", "8", ChannelKind::Live),
        ch(107, "BBC One UK", "8", ChannelKind::Live),
        ch(108, "Eurosport 1 UK", "8", ChannelKind::Live),
        // Live TV
        ch(101, "Big Buck Bunny 24/7", "2", ChannelKind::Live),
        ch(102, "Tech News Now", "1", ChannelKind::Live),
        ch(103, "Sports Center HD", "3", ChannelKind::Live),
        ch(104, "Nature 4K", "4", ChannelKind::Live),
        ch(109, "Kids Zone TV", "5", ChannelKind::Live),
        // Movies
        ch(201, "Tears of Steel", "6", ChannelKind::Movie),
        ch(202, "Sintel", "6", ChannelKind::Movie),
        ch(203, "Cosmos Laundromat", "6", ChannelKind::Movie),
        ch(204, "Agent 327", "6", ChannelKind::Movie),
        ch(205, "Spring", "6", ChannelKind::Movie),
        // Series
        ch(301, "Pioneer One", "7", ChannelKind::Series),
        ch(302, "Star Trek Continues", "7", ChannelKind::Series),
    ]
}

/// The subset the guide actually shows.
pub fn live_channels() -> Vec<Channel> {
    channels()
        .into_iter()
        .filter(|c| c.kind == ChannelKind::Live)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<u32> = channels().iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), channels().len());
    }

    #[test]
    fn live_subset_only_contains_live_channels() {
        let live = live_channels();
        assert!(!live.is_empty());
        assert!(live.iter().all(|c| c.kind == ChannelKind::Live));
    }

    #[test]
    fn every_channel_category_exists() {
        let categories = categories();
        for channel in channels() {
            let id = channel.category_id.as_deref().unwrap();
            assert!(
                categories.iter().any(|c| c.category_id == id),
                "{} references unknown category {}",
                channel.name,
                id
            );
        }
    }
}
