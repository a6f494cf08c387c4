// Resume generation: prompt templates, the composer, and its HTTP handler.
// All backend calls go through llm_client; nothing here talks HTTP to Gemini.

pub mod composer;
pub mod handlers;
pub mod prompts;
