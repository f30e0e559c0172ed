//! Batch forecast over a CSV file

use anyhow::Result;
use demanda_core::{read_batch_csv, run_batch, Config, HttpForecastClient};
use std::path::Path;

pub async fn run(file: &Path, config: &Config) -> Result<()> {
    let rows = read_batch_csv(file)?;
    if rows.is_empty() {
        println!("No usable rows in {}", file.display());
        return Ok(());
    }

    let client = HttpForecastClient::new(config.forecast_service.clone())?;
    let outcomes = run_batch(&client, &rows).await;

    for outcome in outcomes {
        println!(
            "## {} ({} materiales)",
            outcome.date,
            outcome.materials.len()
        );
        super::print_reply(&outcome.reply)?;
        println!();
    }

    Ok(())
}
