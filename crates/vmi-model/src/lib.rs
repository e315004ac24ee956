pub mod decl;
pub mod diagnostics;
pub mod error;
pub mod ids;
pub mod index;
pub mod options;
pub mod pass;

pub use decl::{AnnotationUse, ConstructorDecl, Parameter, TypeDecl, Visibility};
pub use diagnostics::{Diagnostic, DiagnosticReport, Severity};
pub use error::{ModelError, Result};
pub use ids::ClassName;
pub use index::TypeIndex;
pub use options::ProcessorOptions;
pub use pass::PassInput;
