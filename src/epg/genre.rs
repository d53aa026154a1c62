// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: (C) 2025 Cranky Kernel <crankykernel@proton.me>

use serde::{Deserialize, Serialize};

use crate::channel::{Channel, ChannelKind};

pub const GENERAL_TITLES: &[&str] = &[
    "Daily News",
    "Weather Report",
    "Morning Show",
    "Afternoon Special",
    "Prime Time Movie",
];

pub const SPORTS_TITLES: &[&str] = &[
    "Live: Premier League Match",
    "Match Analysis",
    "Sports Center",
    "Classic Goals",
    "F1 Highlights",
    "Live: Tennis Open",
    "Boxing: Fight Night",
];

pub const CINEMA_TITLES: &[&str] = &[
    "Cinema: Action Hero",
    "Director's Cut: Sci-Fi",
    "Comedy Hour",
    "Blockbuster Movie",
    "Late Night Thriller",
];

pub const KIDS_TITLES: &[&str] = &[
    "Cartoon Fun",
    "Super Heroes",
    "Learning Time",
    "Animated Adventures",
    "Bedtime Stories",
];

/// Category ids that mark a channel as belonging to a genre. The defaults
/// match the bundled demo lineup; real providers number their categories
/// differently, so these live in the config file rather than in the rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentinels {
    pub sports_category_id: String,
    pub cinema_category_id: String,
    pub kids_category_id: String,
}

impl Default for Sentinels {
    fn default() -> Self {
        Self {
            sports_category_id: "8".to_string(),
            cinema_category_id: "6".to_string(),
            kids_category_id: "5".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Genre {
    Sports,
    Cinema,
    Kids,
    General,
}

/// One classification rule: the predicate over a channel and the title pool
/// used when it matches.
pub struct GenreRule {
    pub genre: Genre,
    predicate: Box<dyn Fn(&Channel) -> bool + Send + Sync>,
    pub titles: &'static [&'static str],
}

impl GenreRule {
    pub fn matches(&self, channel: &Channel) -> bool {
        (self.predicate)(channel)
    }
}

fn category_is(channel: &Channel, sentinel: &str) -> bool {
    channel.category_id.as_deref() == Some(sentinel)
}

fn name_contains(channel: &Channel, keyword: &str) -> bool {
    channel.name.to_lowercase().contains(keyword)
}

/// The classification rules, in precedence order. A channel satisfying more
/// than one rule takes the first; a channel satisfying none (including
/// channels with an empty name or no category at all) falls through to the
/// general pool.
pub fn rules(sentinels: &Sentinels) -> Vec<GenreRule> {
    let sports = sentinels.sports_category_id.clone();
    let cinema = sentinels.cinema_category_id.clone();
    let kids = sentinels.kids_category_id.clone();

    vec![
        GenreRule {
            genre: Genre::Sports,
            predicate: Box::new(move |c| category_is(c, &sports) || name_contains(c, "sport")),
            titles: SPORTS_TITLES,
        },
        GenreRule {
            genre: Genre::Cinema,
            predicate: Box::new(move |c| category_is(c, &cinema) || c.kind == ChannelKind::Movie),
            titles: CINEMA_TITLES,
        },
        GenreRule {
            genre: Genre::Kids,
            predicate: Box::new(move |c| name_contains(c, "kids") || category_is(c, &kids)),
            titles: KIDS_TITLES,
        },
    ]
}

/// Evaluate the rules in order, first match wins.
pub fn classify(rules: &[GenreRule], channel: &Channel) -> (Genre, &'static [&'static str]) {
    rules
        .iter()
        .find(|rule| rule.matches(channel))
        .map(|rule| (rule.genre, rule.titles))
        .unwrap_or((Genre::General, GENERAL_TITLES))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel(name: &str, category_id: Option<&str>, kind: ChannelKind) -> Channel {
        Channel {
            id: 1,
            name: name.to_string(),
            category_id: category_id.map(str::to_string),
            kind,
        }
    }

    fn classify_default(ch: &Channel) -> Genre {
        let rules = rules(&Sentinels::default());
        classify(&rules, ch).0
    }

    #[test]
    fn sports_by_category_or_name() {
        let by_category = channel("BBC One UK", Some("8"), ChannelKind::Live);
        let by_name = channel("TNT Sports 1", Some("2"), ChannelKind::Live);
        assert_eq!(classify_default(&by_category), Genre::Sports);
        assert_eq!(classify_default(&by_name), Genre::Sports);
    }

    #[test]
    fn cinema_by_category_or_kind() {
        let by_category = channel("Premium One", Some("6"), ChannelKind::Live);
        let by_kind = channel("Sintel", Some("99"), ChannelKind::Movie);
        assert_eq!(classify_default(&by_category), Genre::Cinema);
        assert_eq!(classify_default(&by_kind), Genre::Cinema);
    }

    #[test]
    fn kids_by_name_or_category() {
        let by_name = channel("Kids Planet", Some("2"), ChannelKind::Live);
        let by_category = channel("Junior TV", Some("5"), ChannelKind::Live);
        assert_eq!(classify_default(&by_name), Genre::Kids);
        assert_eq!(classify_default(&by_category), Genre::Kids);
    }

    #[test]
    fn unmatched_falls_back_to_general() {
        let plain = channel("Nature 4K", Some("4"), ChannelKind::Live);
        let nameless = channel("", None, ChannelKind::Live);
        assert_eq!(classify_default(&plain), Genre::General);
        assert_eq!(classify_default(&nameless), Genre::General);
    }

    #[test]
    fn sports_category_beats_kids_name() {
        // The sports rule is evaluated before the kids rule, so a sports
        // category wins even when the name says "kids".
        let ch = channel("Kids Sports Day", Some("8"), ChannelKind::Live);
        assert_eq!(classify_default(&ch), Genre::Sports);
    }

    #[test]
    fn name_matching_is_case_insensitive() {
        let ch = channel("EUROSPORT 1 UK", None, ChannelKind::Live);
        assert_eq!(classify_default(&ch), Genre::Sports);
    }

    #[test]
    fn sentinels_are_injectable() {
        let sentinels = Sentinels {
            sports_category_id: "sports-uk".to_string(),
            cinema_category_id: "vod-1".to_string(),
            kids_category_id: "junior".to_string(),
        };
        let rules = rules(&sentinels);
        let ch = channel("Channel 5", Some("junior"), ChannelKind::Live);
        assert_eq!(classify(&rules, &ch).0, Genre::Kids);

        // The demo ids mean nothing under the custom sentinels.
        let demo = channel("Channel 8", Some("8"), ChannelKind::Live);
        assert_eq!(classify(&rules, &demo).0, Genre::General);
    }

    #[test]
    fn pools_are_distinct_and_non_empty() {
        for pool in [GENERAL_TITLES, SPORTS_TITLES, CINEMA_TITLES, KIDS_TITLES] {
            assert!(!pool.is_empty());
            let mut titles: Vec<_> = pool.to_vec();
            titles.sort_unstable();
            titles.dedup();
            assert_eq!(titles.len(), pool.len());
        }
    }
}
