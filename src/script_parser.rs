//! Script-to-scene parsing.
//!
//! Generated scripts are loosely structured: headings may be bold or bare,
//! labels vary in wording and may sit behind bullets, and transition notes
//! often mention other scenes in running text. Parsing runs in two stages:
//! [`split_scenes`] cuts the script at line-anchored `Scene N` headings, then
//! [`extract_scene`] pulls labeled fields out of each block. A field ends at
//! the nearest following label, so one field never swallows the next.

use tracing::debug;

use crate::labels::{boundary_regex, heading_regex, starts_with_heading, Label};
use crate::scene::{or_placeholder, ParsedScene, PLACEHOLDER};

/// Order in which the parts of `cinematicDirection` are joined.
const CINEMATIC_PARTS: [Label; 3] = [Label::Cinematic, Label::CameraCues, Label::Transition];

/// Split a raw script into trimmed scene blocks, in source order.
///
/// Each block starts at a scene heading and runs to the next heading or the
/// end of the text. Prose before the first heading is dropped. Heading numbers
/// are not interpreted; duplicates and out-of-order numbers each get a block.
pub fn split_scenes(raw: &str) -> Vec<&str> {
    if raw.trim().is_empty() {
        return Vec::new();
    }

    let starts = heading_regex()
        .find_iter(raw)
        .map(|found| found.start())
        .collect::<Vec<_>>();

    let mut blocks = Vec::with_capacity(starts.len());
    for (idx, &start) in starts.iter().enumerate() {
        let end = starts.get(idx + 1).copied().unwrap_or(raw.len());
        let block = raw[start..end].trim();
        if starts_with_heading(block) {
            blocks.push(block);
        }
    }
    blocks
}

/// Build the scene record for one block. `position` is the 1-based index of
/// the block in split order and becomes the title; the heading's own title
/// text is discarded.
///
/// Missing fields become [`PLACEHOLDER`]. When a label appears twice, the
/// first occurrence wins and the second only ends the first capture.
pub fn extract_scene(block: &str, position: usize) -> ParsedScene {
    let body = strip_heading_line(block);

    let cinematic_direction = CINEMATIC_PARTS
        .iter()
        .filter_map(|label| capture_field(body, *label))
        .collect::<Vec<_>>()
        .join(" ");

    ParsedScene {
        title: ParsedScene::positional_title(position),
        visuals: field_or_placeholder(body, Label::Visuals),
        narration: field_or_placeholder(body, Label::Narration),
        mood: field_or_placeholder(body, Label::Mood),
        cinematic_direction: or_placeholder(&cinematic_direction),
    }
}

/// Parse a generated script into displayable scenes.
///
/// Returns an empty sequence only for empty or whitespace-only input. A script
/// without any recognizable heading comes back as a single `"Script"` scene
/// carrying the whole text as narration.
pub fn parse_script_to_scenes(raw: &str) -> Vec<ParsedScene> {
    if raw.trim().is_empty() {
        return Vec::new();
    }

    let blocks = split_scenes(raw);
    if blocks.is_empty() {
        debug!(input_len = raw.len(), "no scene headings found, using fallback scene");
        return vec![ParsedScene::fallback(raw)];
    }

    debug!(
        input_len = raw.len(),
        scene_count = blocks.len(),
        "split script into scenes"
    );
    blocks
        .iter()
        .enumerate()
        .map(|(idx, block)| extract_scene(block, idx + 1))
        .collect()
}

/// Drop the heading line (heading token plus any title text on that line).
fn strip_heading_line(block: &str) -> &str {
    let block = block.trim_start();
    if !starts_with_heading(block) {
        return block;
    }
    match block.split_once('\n') {
        Some((_, rest)) => rest,
        None => "",
    }
}

fn field_or_placeholder(body: &str, label: Label) -> String {
    match capture_field(body, label) {
        Some(text) => text.to_owned(),
        None => PLACEHOLDER.to_owned(),
    }
}

/// Text after the first `label` up to the next label or heading, trimmed.
fn capture_field(body: &str, label: Label) -> Option<&str> {
    let found = label.regex().find(body)?;
    // find_at keeps `^` anchored to real line starts in `body`.
    let end = boundary_regex()
        .find_at(body, found.end())
        .map(|next| next.start())
        .unwrap_or(body.len());
    let text = body[found.end()..end].trim();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
