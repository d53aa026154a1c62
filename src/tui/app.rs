// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: (C) 2025 Cranky Kernel <crankykernel@proton.me>

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::channel::Channel;
use crate::config::Config;
use crate::dataset;
use crate::epg::{EpgGenerator, Schedule};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browse,
    Search,
    Help,
}

pub struct App {
    pub mode: Mode,
    pub channels: Vec<Channel>,
    pub filtered_indices: Vec<usize>,
    pub selected_index: usize,
    pub scroll_offset: usize,
    pub visible_height: usize,
    pub search_query: String,
    /// The instant the guide is rendered against. Refreshed on every tick;
    /// all schedule lookups in one draw share it.
    pub now: DateTime<Local>,
    pub page_size: usize,
    generator: EpgGenerator,
    matcher: SkimMatcherV2,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let channels = dataset::live_channels();
        let filtered_indices = (0..channels.len()).collect();

        Self {
            mode: Mode::Browse,
            channels,
            filtered_indices,
            selected_index: 0,
            scroll_offset: 0,
            visible_height: 20, // Updated on first render
            search_query: String::new(),
            now: Local::now(),
            page_size: config.ui.page_size.max(1),
            generator: EpgGenerator::new(&config.epg),
            matcher: SkimMatcherV2::default(),
        }
    }

    pub fn tick(&mut self) {
        self.now = Local::now();
    }

    /// Recomputed on demand; the generator is deterministic, so rendering the
    /// same tick twice shows the same guide.
    pub fn schedule_for(&self, channel: &Channel) -> Schedule<Local> {
        self.generator.schedule(channel, self.now)
    }

    pub fn selected_channel(&self) -> Option<&Channel> {
        self.filtered_indices
            .get(self.selected_index)
            .and_then(|&idx| self.channels.get(idx))
    }

    pub fn visible_channels(&self) -> impl Iterator<Item = &Channel> {
        self.filtered_indices
            .iter()
            .filter_map(|&idx| self.channels.get(idx))
    }

    pub fn update_visible_height(&mut self, height: usize) {
        self.visible_height = height.max(1);
        self.ensure_selection_visible();
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        match self.mode {
            Mode::Search => self.handle_search_key(key),
            Mode::Help => {
                if matches!(
                    key.code,
                    KeyCode::Char('?') | KeyCode::F(1) | KeyCode::Esc | KeyCode::Char('q')
                ) {
                    self.mode = Mode::Browse;
                }
                None
            }
            Mode::Browse => self.handle_browse_key(key),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc => {
                self.search_query.clear();
                self.update_filtered_indices();
                self.mode = Mode::Browse;
            }
            KeyCode::Enter => {
                self.mode = Mode::Browse;
            }
            KeyCode::Backspace => {
                self.search_query.pop();
                self.update_filtered_indices();
            }
            KeyCode::Char(c) => {
                self.search_query.push(c);
                self.update_filtered_indices();
            }
            _ => {}
        }
        None
    }

    fn handle_browse_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('q') => return Some(Action::Quit),
            KeyCode::Esc => {
                if self.search_query.is_empty() {
                    return Some(Action::Quit);
                }
                self.search_query.clear();
                self.update_filtered_indices();
            }
            KeyCode::Char('?') | KeyCode::F(1) => self.mode = Mode::Help,
            KeyCode::Char('/') => {
                self.search_query.clear();
                self.update_filtered_indices();
                self.mode = Mode::Search;
            }
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::PageUp => self.move_selection(-(self.page_size as isize)),
            KeyCode::PageDown => self.move_selection(self.page_size as isize),
            KeyCode::Home | KeyCode::Char('H') => self.select_first(),
            KeyCode::End | KeyCode::Char('G') => self.select_last(),
            _ => {}
        }
        None
    }

    fn move_selection(&mut self, delta: isize) {
        if self.filtered_indices.is_empty() {
            return;
        }
        let last = self.filtered_indices.len() - 1;
        let target = self.selected_index as isize + delta;
        self.selected_index = target.clamp(0, last as isize) as usize;
        self.ensure_selection_visible();
    }

    fn select_first(&mut self) {
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    fn select_last(&mut self) {
        self.selected_index = self.filtered_indices.len().saturating_sub(1);
        self.ensure_selection_visible();
    }

    fn ensure_selection_visible(&mut self) {
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if self.selected_index >= self.scroll_offset + self.visible_height {
            self.scroll_offset = self.selected_index + 1 - self.visible_height;
        }
    }

    fn update_filtered_indices(&mut self) {
        if self.search_query.is_empty() {
            self.filtered_indices = (0..self.channels.len()).collect();
        } else {
            let mut scored: Vec<(i64, usize)> = self
                .channels
                .iter()
                .enumerate()
                .filter_map(|(idx, channel)| {
                    self.matcher
                        .fuzzy_match(&channel.name, &self.search_query)
                        .map(|score| (score, idx))
                })
                .collect();
            scored.sort_by(|a, b| b.0.cmp(&a.0));
            self.filtered_indices = scored.into_iter().map(|(_, idx)| idx).collect();
        }

        self.selected_index = 0;
        self.scroll_offset = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn app() -> App {
        App::new(&Config::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn starts_with_all_live_channels_visible() {
        let app = app();
        assert_eq!(app.filtered_indices.len(), app.channels.len());
        assert!(app.selected_channel().is_some());
    }

    #[test]
    fn navigation_clamps_at_the_ends() {
        let mut app = app();
        app.handle_key_event(key(KeyCode::Up));
        assert_eq!(app.selected_index, 0);
        app.handle_key_event(key(KeyCode::End));
        assert_eq!(app.selected_index, app.filtered_indices.len() - 1);
        app.handle_key_event(key(KeyCode::Down));
        assert_eq!(app.selected_index, app.filtered_indices.len() - 1);
    }

    #[test]
    fn search_narrows_and_escape_restores() {
        let mut app = app();
        app.handle_key_event(key(KeyCode::Char('/')));
        assert_eq!(app.mode, Mode::Search);
        for c in "sports".chars() {
            app.handle_key_event(key(KeyCode::Char(c)));
        }
        assert!(!app.filtered_indices.is_empty());
        assert!(app.filtered_indices.len() < app.channels.len());
        assert!(
            app.visible_channels()
                .all(|c| c.name.to_lowercase().contains("sport"))
        );

        app.handle_key_event(key(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Browse);
        assert_eq!(app.filtered_indices.len(), app.channels.len());
    }

    #[test]
    fn quit_from_browse_mode() {
        let mut app = app();
        assert_eq!(app.handle_key_event(key(KeyCode::Char('q'))), Some(Action::Quit));
    }

    #[test]
    fn help_opens_and_closes() {
        let mut app = app();
        app.handle_key_event(key(KeyCode::Char('?')));
        assert_eq!(app.mode, Mode::Help);
        assert_eq!(app.handle_key_event(key(KeyCode::Char('q'))), None);
        assert_eq!(app.mode, Mode::Browse);
    }

    #[test]
    fn schedule_is_stable_within_a_tick() {
        let app = app();
        let channel = app.selected_channel().unwrap();
        assert_eq!(app.schedule_for(channel), app.schedule_for(channel));
    }
}
