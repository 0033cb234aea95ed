use crate::AnalyzerParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Deserialize)]
pub struct SalientOutputConfig {
    pub report_json: PathBuf,
    #[serde(default)]
    pub overlay_image: Option<PathBuf>,
}

/// Configuration of the `salient_points` tool.
#[derive(Clone, Debug, Deserialize)]
pub struct SalientConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub params: AnalyzerParams,
    pub output: SalientOutputConfig,
}

pub fn load_config(path: &Path) -> Result<SalientConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(data: &str) -> Result<SalientConfig, String> {
    serde_json::from_str(data).map_err(|e| e.to_string())
}

/// Reads the config path from the first CLI argument.
pub fn parse_cli(program: &str) -> Result<SalientConfig, String> {
    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .ok_or_else(|| format!("Usage: {program} <config.json>"))?;
    if args.next().is_some() {
        return Err(format!("Usage: {program} <config.json>"));
    }
    load_config(Path::new(&path))
}
