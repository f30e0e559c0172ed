//! One-shot question command

use anyhow::{bail, Result};
use demanda_core::{Config, Router};

pub async fn run(question: &str, config: &Config) -> Result<()> {
    let question = question.trim();
    if question.is_empty() {
        bail!("No question given. Usage: demanda ask \"¿Cuál será la demanda de POLLO para 2025-12-31?\"");
    }

    let router = Router::from_config(config)?;
    let reply = router.route_and_respond(question).await;

    super::print_reply(&reply)?;
    Ok(())
}
