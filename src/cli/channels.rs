use anyhow::Result;
use serde_json::json;

use genietv::dataset;

use super::OutputFormat;

/// List the bundled channel lineup.
pub struct ChannelsCommand {
    pub format: OutputFormat,
}

impl ChannelsCommand {
    pub fn execute(self) -> Result<()> {
        let channels = dataset::channels();

        match self.format {
            OutputFormat::Json => {
                let rows: Vec<_> = channels
                    .iter()
                    .map(|c| {
                        json!({
                            "id": c.id,
                            "name": c.name,
                            "kind": c.kind,
                            "category_id": c.category_id,
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&json!(rows))?);
            }
            OutputFormat::Text => {
                for channel in &channels {
                    println!(
                        "{:6} | {:<7} | {}",
                        channel.id,
                        channel.kind.as_str(),
                        channel.name
                    );
                }
            }
        }

        Ok(())
    }
}
