//! Candidate discovery for one pass. A pure grouping step: no validation.

use vmi_model::TypeDecl;

use crate::{VIEW_MODEL_INJECT_ANNOTATION, VIEW_MODEL_MODULE_ANNOTATION};

/// Declarations with at least one `@ViewModelInject` constructor, in
/// first-seen order. The host model already groups constructors under their
/// enclosing declaration, so grouping reduces to filtering.
pub fn find_injection_candidates(types: &[TypeDecl]) -> Vec<&TypeDecl> {
    types
        .iter()
        .filter(|decl| {
            decl.constructors
                .iter()
                .any(|c| c.has_annotation(VIEW_MODEL_INJECT_ANNOTATION))
        })
        .collect()
}

/// Declarations carrying the registration-root marker, in first-seen order.
pub fn find_module_candidates(types: &[TypeDecl]) -> Vec<&TypeDecl> {
    types
        .iter()
        .filter(|decl| decl.has_annotation(VIEW_MODEL_MODULE_ANNOTATION))
        .collect()
}
