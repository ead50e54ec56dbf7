use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::scene::ParsedScene;

const EMPTY_STATE: &str = "No scenes found.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
    Text,
}

/// Render scenes for display. Field values, placeholder included, are written
/// verbatim.
pub fn render_scenes(scenes: &[ParsedScene], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut out =
                serde_json::to_string_pretty(scenes).context("failed to encode scenes as JSON")?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(scenes).context("failed to encode scenes as YAML")
        }
        OutputFormat::Text => Ok(render_text(scenes)),
    }
}

fn render_text(scenes: &[ParsedScene]) -> String {
    if scenes.is_empty() {
        return format!("{EMPTY_STATE}\n");
    }

    scenes
        .iter()
        .map(|scene| {
            format!(
                "{}\n  Visuals: {}\n  Narration: {}\n  Mood: {}\n  Cinematic direction: {}\n",
                scene.title,
                indent_continuation(&scene.visuals),
                indent_continuation(&scene.narration),
                indent_continuation(&scene.mood),
                indent_continuation(&scene.cinematic_direction),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn indent_continuation(value: &str) -> String {
    value.replace('\n', "\n    ")
}
