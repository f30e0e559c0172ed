//! Show resolved configuration

use anyhow::Result;
use demanda_core::Config;

pub fn run(config: &Config) -> Result<()> {
    let mut masked = config.clone();
    mask(&mut masked.llm_service.api_key);
    mask(&mut masked.forecast_service.api_key);
    mask(&mut masked.retrieval_service.api_key);

    print!("{}", serde_yaml::to_string(&masked)?);
    println!("# config file: {}", Config::default_path().display());
    Ok(())
}

fn mask(key: &mut Option<String>) {
    if key.is_some() {
        *key = Some("********".to_string());
    }
}
