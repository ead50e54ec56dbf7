//! Turn LLM-generated video scripts into scene records.
//!
//! ```
//! use scenescript::parse_script_to_scenes;
//!
//! let scenes = parse_script_to_scenes("**Scene 1: Opening**\n* Mood: Calm.\n");
//! assert_eq!(scenes.len(), 1);
//! assert_eq!(scenes[0].title, "Scene 1");
//! assert_eq!(scenes[0].mood, "Calm.");
//! assert_eq!(scenes[0].visuals, scenescript::PLACEHOLDER);
//! ```

pub mod error_codes;
pub mod labels;
pub mod prompt_guard;
pub mod render;
pub mod scene;
pub mod script_parser;

pub use scene::{ParsedScene, PLACEHOLDER};
pub use script_parser::{extract_scene, parse_script_to_scenes, split_scenes};
