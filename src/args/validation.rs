use std::{fs, path::PathBuf};

use crate::model::StatsSnapshot;

/// # Errors
///
/// Will return `Err` if the value is not an absolute http(s) url
pub fn check_url(url: &str) -> Result<String, String> {
    let parsed =
        reqwest::Url::parse(url).map_err(|e| format!("The stats url '{url}' is not valid: {e}"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(url.to_string()),
        other => Err(format!(
            "The stats url '{url}' must be http or https, not {other}."
        )),
    }
}

/// # Errors
///
/// Will return `Err` if the file is not readable or does not parse as a stats snapshot
pub fn check_readable_stats_json(file: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(file);
    if !path.is_file() {
        return Err(format!("The json file '{file}' is not readable."));
    }
    let contents =
        fs::read(&path).map_err(|e| format!("The json file '{file}' is not readable: {e}"))?;
    StatsSnapshot::from_json_slice(&contents)
        .map_err(|e| format!("The json file '{file}' is not a stats snapshot: {e}"))?;
    Ok(path)
}
