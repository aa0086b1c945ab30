//! JSON dashboard output.

use anyhow::Context;
use log::info;
use std::path::Path;
use wq_core::{Dataset, FilterSpec};
use wq_data::Dashboard;

pub fn render_dashboard(dataset: &Dataset, spec: &FilterSpec) -> anyhow::Result<String> {
    let dashboard = Dashboard::build(dataset, spec);
    Ok(serde_json::to_string_pretty(&dashboard)?)
}

pub fn run_dashboard(dataset: &Dataset, spec: &FilterSpec, output: Option<&Path>) -> anyhow::Result<()> {
    let json = render_dashboard(dataset, spec)?;
    match output {
        Some(path) => {
            std::fs::write(path, &json).with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Dashboard written to {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
