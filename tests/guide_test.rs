// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: (C) 2025 Cranky Kernel <crankykernel@proton.me>

use chrono::{DateTime, Duration, FixedOffset, TimeZone, Timelike};

use genietv::channel::{Channel, ChannelKind};
use genietv::dataset;
use genietv::epg::{EpgGenerator, Sentinels, genre};

fn tz() -> FixedOffset {
    FixedOffset::east_opt(2 * 3600).unwrap()
}

fn at(h: u32, m: u32, s: u32) -> DateTime<FixedOffset> {
    tz().with_ymd_and_hms(2026, 8, 27, h, m, s).unwrap()
}

#[test]
fn every_demo_channel_gets_a_well_formed_schedule() {
    let generator = EpgGenerator::new(&Sentinels::default());
    let now = at(14, 23, 0);

    for channel in dataset::channels() {
        let schedule = generator.schedule(&channel, now);

        assert_eq!(schedule.current.start.minute(), 0);
        assert_eq!(schedule.current.start.second(), 0);
        assert_eq!(schedule.current.start.nanosecond(), 0);
        assert_eq!(schedule.next.start, schedule.current.end);
        assert_eq!(
            schedule.current.end - schedule.current.start,
            Duration::hours(1)
        );
        assert_eq!(schedule.next.end - schedule.next.start, Duration::hours(1));
        assert!(!schedule.current.title.is_empty());
        assert!(schedule.current.description.contains(&channel.name));
    }
}

#[test]
fn repeated_calls_are_bit_identical() {
    let generator = EpgGenerator::new(&Sentinels::default());
    for channel in dataset::live_channels() {
        let first = generator.schedule(&channel, at(9, 5, 0));
        let second = generator.schedule(&channel, at(9, 55, 59));
        assert_eq!(first, second, "channel {} drifted within an hour", channel.id);
    }
}

#[test]
fn sky_sports_scenario_walkthrough() {
    let generator = EpgGenerator::new(&Sentinels::default());
    let channel = dataset::channels()
        .into_iter()
        .find(|c| c.id == 105)
        .expect("demo lineup includes Sky Sports");

    let afternoon = generator.schedule(&channel, at(14, 23, 0));
    assert_eq!(afternoon.current.start, at(14, 0, 0));
    assert_eq!(afternoon.current.end, at(15, 0, 0));
    assert_eq!(
        afternoon.current.title,
        genre::SPORTS_TITLES[(105 + 14) % genre::SPORTS_TITLES.len()]
    );

    // Crossing the boundary promotes the previous "next" block to "current".
    let on_the_hour = generator.schedule(&channel, at(15, 0, 0));
    assert_eq!(on_the_hour.current, afternoon.next);
}

#[test]
fn generator_is_total_over_odd_inputs() {
    let generator = EpgGenerator::new(&Sentinels::default());
    let odd = Channel {
        id: 0,
        name: String::new(),
        category_id: None,
        kind: ChannelKind::Series,
    };
    let schedule = generator.schedule(&odd, at(0, 0, 0));
    assert!(genre::GENERAL_TITLES.contains(&schedule.current.title.as_str()));
    assert_eq!(schedule.current.start, at(0, 0, 0));
}
