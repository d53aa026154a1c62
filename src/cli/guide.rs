use anyhow::Result;
use chrono::{DateTime, Local};
use serde_json::json;

use genietv::channel::Channel;
use genietv::config::Config;
use genietv::dataset;
use genietv::epg::{EpgGenerator, ProgramBlock, Schedule};

use super::OutputFormat;

/// Print the now/next guide for one channel or the whole live lineup.
pub struct GuideCommand {
    pub channel: Option<u32>,
    /// Pin the guide to this instant instead of the wall clock. Useful for
    /// scripting: the generator is deterministic, so a pinned instant always
    /// prints the same schedule.
    pub at: Option<DateTime<Local>>,
    pub format: OutputFormat,
}

impl GuideCommand {
    pub fn execute(self, config: &Config) -> Result<()> {
        let generator = EpgGenerator::new(&config.epg);
        let now = self.at.unwrap_or_else(Local::now);

        let channels: Vec<Channel> = match self.channel {
            Some(id) => {
                let channel = dataset::channels()
                    .into_iter()
                    .find(|c| c.id == id)
                    .ok_or_else(|| anyhow::anyhow!("Channel {} not found", id))?;
                vec![channel]
            }
            None => dataset::live_channels(),
        };

        let entries: Vec<(Channel, Schedule<Local>)> = channels
            .into_iter()
            .map(|channel| {
                let schedule = generator.schedule(&channel, now);
                (channel, schedule)
            })
            .collect();

        match self.format {
            OutputFormat::Json => {
                let rows: Vec<_> = entries
                    .iter()
                    .map(|(channel, schedule)| {
                        json!({
                            "id": channel.id,
                            "name": channel.name,
                            "category_id": channel.category_id,
                            "current": block_json(&schedule.current),
                            "next": block_json(&schedule.next),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&json!(rows))?);
            }
            OutputFormat::Text => {
                for (channel, schedule) in &entries {
                    println!(
                        "{:6} | {:<28} | {} - {}  {:<28} | next: {}",
                        channel.id,
                        channel.name,
                        schedule.current.start.format("%H:%M"),
                        schedule.current.end.format("%H:%M"),
                        schedule.current.title,
                        schedule.next.title,
                    );
                }
            }
        }

        Ok(())
    }
}

fn block_json(block: &ProgramBlock<Local>) -> serde_json::Value {
    json!({
        "title": block.title,
        "start": block.start.to_rfc3339(),
        "end": block.end.to_rfc3339(),
        "description": block.description,
    })
}
