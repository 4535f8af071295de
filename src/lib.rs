// src/lib.rs
pub use sysmod_api as api;
pub use sysmod_config as config;
pub use sysmod_core::{LlmResponseEnvelope, SysmodError, SysmodResult};
pub use sysmod_gateway as gateway;
pub use sysmod_llm_connector as llm_connector;
pub use sysmod_observability as observability;
