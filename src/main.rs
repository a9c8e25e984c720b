use std::path::Path;

use anyhow::{Context, Result};
use cli_table::{print_stdout, WithTitle};
use log::info;

use oref_data::pipeline::Pipeline;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let client = reqwest::Client::builder().build()?;

    // outputs land in the working directory, one file per dataset
    let dir = Path::new(".");

    let mut summaries = Vec::with_capacity(Pipeline::ALL.len());
    for pipeline in Pipeline::ALL.iter().copied() {
        let summary = pipeline
            .run(&client, dir)
            .await
            .with_context(|| format!("{} pipeline failed", pipeline))?;
        summaries.push(summary);
    }

    info!("Generated {} dataset(s).", summaries.len());

    print_stdout(summaries.with_title())?;

    Ok(())
}
