use serde::{Deserialize, Serialize};

use crate::decl::TypeDecl;

/// The declarations the host hands the processor for one compilation pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PassInput {
    #[serde(default)]
    pub types: Vec<TypeDecl>,
}
