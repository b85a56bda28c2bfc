//! Prompt template discovery and rendering.

pub mod discovery;
pub mod engine;

pub use discovery::{TemplateDiscoveryError, TemplateInfo, discover_prompt_templates};
pub use engine::{PromptRenderer, RenderContext, TemplateEngine, TemplateRenderError};
