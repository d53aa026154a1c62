// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: (C) 2025 Cranky Kernel <crankykernel@proton.me>

pub mod genre;

pub use genre::{Genre, Sentinels};

use chrono::{DateTime, Duration, TimeZone, Timelike};

use crate::channel::Channel;
use genre::GenreRule;

/// A single guide entry. Always exactly one hour long, starting on the hour.
#[derive(Debug, Clone)]
pub struct ProgramBlock<Tz: TimeZone> {
    pub title: String,
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
    pub description: String,
}

impl<Tz: TimeZone> PartialEq for ProgramBlock<Tz> {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.start == other.start
            && self.end == other.end
            && self.description == other.description
    }
}

/// The now/next pair for one channel: two contiguous blocks with
/// `next.start == current.end`.
#[derive(Debug, Clone)]
pub struct Schedule<Tz: TimeZone> {
    pub current: ProgramBlock<Tz>,
    pub next: ProgramBlock<Tz>,
}

impl<Tz: TimeZone> PartialEq for Schedule<Tz> {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current && self.next == other.next
    }
}

/// Synthesizes a stable guide for channels that have no real EPG feed.
///
/// The output is a pure function of the channel identity and the supplied
/// instant: two calls with the same inputs return identical schedules, and
/// any two instants inside the same clock hour return the same current
/// block. No I/O, no RNG, no state between calls.
pub struct EpgGenerator {
    rules: Vec<GenreRule>,
}

impl EpgGenerator {
    pub fn new(sentinels: &Sentinels) -> Self {
        Self {
            rules: genre::rules(sentinels),
        }
    }

    /// Produce the current and next one-hour blocks for `channel` at `now`.
    ///
    /// Generic over the timezone: the binary passes local time, tests pin a
    /// fixed offset. An instant exactly on an hour boundary belongs to the
    /// block starting at that boundary.
    pub fn schedule<Tz: TimeZone>(&self, channel: &Channel, now: DateTime<Tz>) -> Schedule<Tz> {
        let (_, titles) = genre::classify(&self.rules, channel);
        let hour_start = floor_to_hour(now);
        let current = program_at(channel, titles, hour_start);
        let next = program_at(channel, titles, current.end.clone());
        Schedule { current, next }
    }
}

fn program_at<Tz: TimeZone>(
    channel: &Channel,
    titles: &[&str],
    start: DateTime<Tz>,
) -> ProgramBlock<Tz> {
    // Seeding with id + hour-of-day rotates titles across the day and
    // spreads channels apart at the same hour, wrapping daily.
    let seed = u64::from(channel.id) + u64::from(start.hour());
    let title = titles[(seed % titles.len() as u64) as usize];
    let end = start.clone() + Duration::hours(1);

    ProgramBlock {
        title: title.to_string(),
        description: format!(
            "Enjoy the best of {}. Full coverage and exclusive content strictly on {}.",
            title, channel.name
        ),
        start,
        end,
    }
}

/// Floor an instant to the start of its clock hour. Done by subtracting the
/// sub-hour components rather than rewriting the fields, which stays total
/// across DST transitions.
fn floor_to_hour<Tz: TimeZone>(now: DateTime<Tz>) -> DateTime<Tz> {
    now.clone()
        - Duration::minutes(now.minute() as i64)
        - Duration::seconds(now.second() as i64)
        - Duration::nanoseconds(now.nanosecond() as i64)
}
