use serde::{Deserialize, Serialize};

/// Shown in place of any field the script did not provide.
pub const PLACEHOLDER: &str = "—";

/// Title given to the single scene synthesized when a script has no headings.
pub const FALLBACK_TITLE: &str = "Script";

/// One displayable scene, projected from a generated script.
///
/// Every field holds either extracted text or [`PLACEHOLDER`], never an empty
/// string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedScene {
    pub title: String,
    pub visuals: String,
    pub narration: String,
    pub mood: String,
    pub cinematic_direction: String,
}

impl ParsedScene {
    /// Title for the scene at `position` (1-based) in split order.
    pub fn positional_title(position: usize) -> String {
        format!("Scene {position}")
    }

    /// The whole script as narration, everything else left as placeholder.
    pub fn fallback(narration: &str) -> Self {
        Self {
            title: FALLBACK_TITLE.to_owned(),
            visuals: PLACEHOLDER.to_owned(),
            narration: or_placeholder(narration),
            mood: PLACEHOLDER.to_owned(),
            cinematic_direction: PLACEHOLDER.to_owned(),
        }
    }
}

pub(crate) fn or_placeholder(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        PLACEHOLDER.to_owned()
    } else {
        value.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::{or_placeholder, ParsedScene, PLACEHOLDER};

    #[test]
    fn fallback_scene_keeps_only_narration() {
        let scene = ParsedScene::fallback("  plain prose  ");
        assert_eq!(scene.title, "Script");
        assert_eq!(scene.narration, "plain prose");
        assert_eq!(scene.visuals, PLACEHOLDER);
        assert_eq!(scene.mood, PLACEHOLDER);
        assert_eq!(scene.cinematic_direction, PLACEHOLDER);
    }

    #[test]
    fn blank_values_become_placeholder() {
        assert_eq!(or_placeholder(""), PLACEHOLDER);
        assert_eq!(or_placeholder(" \n\t"), PLACEHOLDER);
        assert_eq!(or_placeholder(" Calm. "), "Calm.");
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let scene = ParsedScene {
            title: ParsedScene::positional_title(3),
            visuals: "Rain on glass.".to_owned(),
            narration: PLACEHOLDER.to_owned(),
            mood: "Quiet.".to_owned(),
            cinematic_direction: "Rack focus.".to_owned(),
        };
        let value = serde_json::to_value(&scene).expect("scene should serialize");
        assert_eq!(value["title"], "Scene 3");
        assert_eq!(value["cinematicDirection"], "Rack focus.");
        assert_eq!(value["narration"], "—");
        assert!(value.get("cinematic_direction").is_none());
    }
}
