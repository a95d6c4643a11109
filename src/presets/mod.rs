pub mod document;
pub mod reader;

pub use document::{ConfigurePreset, PresetDocument, WorkflowPreset};
pub use reader::{ParsedPresets, PresetRequest};
