//! Fixed vocabulary of scene headings and field labels.
//!
//! Patterns are compiled on first use and shared read-only afterwards. Every
//! pattern is line-anchored in multiline mode, so searches that start in the
//! middle of a haystack must use [`Regex::find_at`] to keep `^` honest.

use std::sync::OnceLock;

use regex::Regex;

/// Leading list marker accepted before a label: `-`, `*`, `+`, `•`, `1.` or `1)`.
const BULLET: &str = r"(?:(?:[-*+•]|\d+[.)])[ \t]+)?";

/// Markdown emphasis that may wrap a heading, a label or its colon: bold or
/// italic, with `*` or `_`.
const EMPHASIS: &str = r"(?:\*\*|__|\*|_)?";

/// `Scene N` at a line start, with its optional colon. No flags of its own.
fn heading_pattern() -> String {
    format!(r"^[ \t]*{EMPHASIS}Scene[ \t]+\d+:?")
}

/// Sub-field labels recognized inside a scene block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Visuals,
    Narration,
    Mood,
    Cinematic,
    CameraCues,
    Transition,
}

impl Label {
    pub const ALL: [Label; 6] = [
        Label::Visuals,
        Label::Narration,
        Label::Mood,
        Label::Cinematic,
        Label::CameraCues,
        Label::Transition,
    ];

    /// Keyword spellings, without bullet, emphasis or colon.
    fn keyword_pattern(self) -> &'static str {
        match self {
            Label::Visuals => r"visuals?(?:[ \t]+direction)?",
            // "Narration (English):" carries a language note before the colon.
            Label::Narration => r"narration(?:[ \t]*\([^)\n]*\))?",
            Label::Mood => r"mood",
            Label::Cinematic => r"cinematic(?:[ \t]+direction)?",
            Label::CameraCues => r"(?:camera(?:[ \t]*/[ \t]*shot)?|shot)(?:[ \t]+cues?)?",
            Label::Transition => r"transitions?",
        }
    }

    /// Line-anchored, case-insensitive pattern for this label. The match
    /// covers the whole label token up to and including its colon.
    pub fn regex(self) -> &'static Regex {
        static LABEL_RES: OnceLock<Vec<Regex>> = OnceLock::new();
        let all = LABEL_RES.get_or_init(|| {
            Label::ALL
                .iter()
                .map(|label| {
                    Regex::new(&label_line_pattern(label.keyword_pattern()))
                        .expect("label regex should compile")
                })
                .collect()
        });
        // `ALL` lists the variants in declaration order.
        &all[self as usize]
    }
}

fn label_line_pattern(keyword: &str) -> String {
    format!(r"(?im)^[ \t]*{BULLET}{EMPHASIS}(?:{keyword}){EMPHASIS}[ \t]*:{EMPHASIS}")
}

/// `Scene 3:`, `**Scene 1:**`, `__Scene 4:__`, `Scene 2` at the start of a line.
pub fn heading_regex() -> &'static Regex {
    static HEADING_RE: OnceLock<Regex> = OnceLock::new();
    HEADING_RE.get_or_init(|| {
        Regex::new(&format!("(?m){}", heading_pattern())).expect("heading regex should compile")
    })
}

/// True when `text` opens with a scene heading (ignoring leading spaces/tabs).
pub fn starts_with_heading(text: &str) -> bool {
    heading_regex()
        .find(text)
        .is_some_and(|found| found.start() == 0)
}

/// Any label or scene heading; marks where a captured field ends.
pub fn boundary_regex() -> &'static Regex {
    static BOUNDARY_RE: OnceLock<Regex> = OnceLock::new();
    BOUNDARY_RE.get_or_init(|| {
        let keywords = Label::ALL
            .iter()
            .map(|label| label.keyword_pattern())
            .collect::<Vec<_>>()
            .join("|");
        let labels = label_line_pattern(&keywords);
        let heading = heading_pattern();
        Regex::new(&format!("(?:{labels})|(?m:{heading})"))
            .expect("boundary regex should compile")
    })
}

#[cfg(test)]
mod tests {
    use super::{boundary_regex, heading_regex, starts_with_heading, Label};

    #[test]
    fn heading_variants_are_recognized() {
        for line in [
            "Scene 3:",
            "**Scene 1:**",
            "__Scene 4:__",
            "*Scene 5:* Dusk",
            "Scene 2",
            "  Scene 10: The Chase",
        ] {
            assert!(starts_with_heading(line), "{line:?} should be a heading");
        }
        for line in ["Scenes 1", "The Scene 2", "scene", "Scene one:"] {
            assert!(!starts_with_heading(line), "{line:?} should not be a heading");
        }
    }

    #[test]
    fn heading_requires_line_start() {
        let text = "Transition: Cut from Scene 2 to Scene 3 in a dissolve.";
        assert!(heading_regex().find(text).is_none());
    }

    #[test]
    fn label_spellings_match() {
        let cases = [
            (Label::Visuals, "Visual: a"),
            (Label::Visuals, "Visuals: a"),
            (Label::Visuals, "* Visual direction: a"),
            (Label::Visuals, "- **Visuals:** a"),
            (Label::Narration, "Narration (English): a"),
            (Label::Narration, "NARRATION: a"),
            (Label::Mood, "2. Mood: a"),
            (Label::Cinematic, "Cinematic direction: a"),
            (Label::CameraCues, "Camera/shot cues: a"),
            (Label::CameraCues, "Camera / Shot cues: a"),
            (Label::CameraCues, "Shot cues: a"),
            (Label::Transition, "**Transition**: a"),
            (Label::Visuals, "*Visuals:* a"),
            (Label::Mood, "_Mood:_ a"),
            (Label::Mood, "__Mood:__ a"),
        ];
        for (label, line) in cases {
            assert!(
                label.regex().is_match(line),
                "{label:?} should match {line:?}"
            );
        }
    }

    #[test]
    fn regex_lookup_follows_declaration_order() {
        for (position, label) in Label::ALL.iter().enumerate() {
            assert_eq!(*label as usize, position);
        }
        assert!(Label::Transition.regex().is_match("Transition: a"));
        assert!(!Label::Transition.regex().is_match("Mood: a"));
    }

    #[test]
    fn italic_markers_are_consumed_with_the_label() {
        let found = Label::Mood.regex().find("_Mood:_ Calm.").expect("italic mood");
        assert_eq!(found.as_str(), "_Mood:_");
        let found = Label::Visuals.regex().find("*Visuals:* Wide.").expect("italic visuals");
        assert_eq!(found.as_str(), "*Visuals:*");
    }

    #[test]
    fn label_needs_colon_and_line_start() {
        assert!(!Label::Mood.regex().is_match("Mood lighting everywhere"));
        assert!(!Label::Mood.regex().is_match("The mood: tense"));
        assert!(!Label::Visuals.regex().is_match("Visualize: it"));
    }

    #[test]
    fn boundary_find_at_respects_line_anchor() {
        let body = "Visuals: Mood: still visuals\nMood: Calm.";
        let start = Label::Visuals
            .regex()
            .find(body)
            .expect("visuals label")
            .end();
        let next = boundary_regex()
            .find_at(body, start)
            .expect("mood label on next line");
        assert_eq!(&body[next.start()..next.end()], "Mood:");
        assert_eq!(next.start(), body.find('\n').expect("newline") + 1);
    }
}
