// Résumé intake: PDF bytes → page texts → structured ResumeRecord.
// All LLM calls go through llm_client; nothing here talks to a provider directly.

pub mod extractor;
pub mod prompts;
pub mod structurer;
