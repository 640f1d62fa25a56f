// Pipeline: résumé intake, enrichment fan-out, cheat sheet synthesis.
// Implements: POST /pipeline, POST /interview, and the offline run log.

pub mod handlers;
pub mod orchestrator;
pub mod runs;
