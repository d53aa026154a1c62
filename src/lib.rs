// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: (C) 2025 Cranky Kernel <crankykernel@proton.me>

pub mod channel;
pub mod config;
pub mod dataset;
pub mod epg;
pub mod tui;

pub use channel::{Channel, ChannelKind};
pub use config::Config;
pub use epg::EpgGenerator;
pub use tui::run_tui;
