// Shared prompt constants.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System prompt that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// System prompt for calls whose reply is plain text.
pub const PLAIN_TEXT_SYSTEM: &str = "You are a concise, helpful assistant. \
    Answer with plain text only. Do NOT use markdown.";

/// Appended to structuring prompts that must only reshape their input.
pub const NO_INVENTION_INSTRUCTION: &str = "\
    Do not add or hallucinate data. Only reorganize and lightly normalize what is present \
    (e.g., splitting bullet points, trimming whitespace, combining clearly related fragments). \
    Leave a field empty when the input does not contain it.";
