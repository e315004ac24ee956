use serde::{Deserialize, Serialize};

/// Processor-wide configuration supplied by the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessorOptions {
    /// Whether the state-bag type is present on the compilation classpath.
    #[serde(default = "default_true")]
    pub state_handle_on_classpath: bool,
    /// Whether generated types carry the `@Generated` marker annotation.
    #[serde(default = "default_true")]
    pub emit_generated_annotation: bool,
}

impl Default for ProcessorOptions {
    fn default() -> Self {
        Self {
            state_handle_on_classpath: true,
            emit_generated_annotation: true,
        }
    }
}

fn default_true() -> bool {
    true
}
