//! Structural validation of injection candidates.

use vmi_model::{ConstructorDecl, Diagnostic, TypeDecl, TypeIndex};

use crate::{VIEW_MODEL_INJECT_ANNOTATION, VIEW_MODEL_TYPE};

/// A candidate that passed structural validation: the declaration and its
/// single annotated, non-private constructor.
#[derive(Debug, Clone, Copy)]
pub struct InjectionTarget<'a> {
    pub declaration: &'a TypeDecl,
    pub constructor: &'a ConstructorDecl,
}

/// Validate one candidate declaration.
///
/// Class-level checks all run before giving up, so a declaration that is both
/// private and non-static reports both violations. The constructor visibility
/// check only runs once the class level holds.
pub fn validate_target<'a>(
    decl: &'a TypeDecl,
    index: &TypeIndex,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<InjectionTarget<'a>> {
    let mut valid = true;
    if decl.visibility.is_private() {
        diagnostics.push(Diagnostic::error(
            "@ViewModelInject-using types must not be private",
            Some(decl.name.clone()),
        ));
        valid = false;
    }
    if decl.is_nested() && !decl.static_nested {
        diagnostics.push(Diagnostic::error(
            "Nested @ViewModelInject-using types must be static",
            Some(decl.name.clone()),
        ));
        valid = false;
    }
    if !index.is_subtype(&decl.name.reflection_name(), VIEW_MODEL_TYPE) {
        diagnostics.push(Diagnostic::error(
            "@ViewModelInject-using types must be subtypes of ViewModel",
            Some(decl.name.clone()),
        ));
        valid = false;
    }

    let constructors = decl.annotated_constructors(VIEW_MODEL_INJECT_ANNOTATION);
    if constructors.len() > 1 {
        diagnostics.push(Diagnostic::error(
            "Multiple @ViewModelInject-annotated constructors found.",
            Some(decl.name.clone()),
        ));
        valid = false;
    }

    if !valid {
        return None;
    }

    let constructor = *constructors.first()?;
    if constructor.visibility.is_private() {
        diagnostics.push(Diagnostic::error(
            "@ViewModelInject constructor must not be private.",
            Some(decl.name.clone()),
        ));
        return None;
    }

    Some(InjectionTarget {
        declaration: decl,
        constructor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use vmi_model::{AnnotationUse, ClassName, Severity, Visibility};

    fn candidate(name: &str) -> TypeDecl {
        TypeDecl {
            name: ClassName::from_reflection_name(name).unwrap(),
            visibility: Visibility::default(),
            static_nested: false,
            superclass: Some(VIEW_MODEL_TYPE.to_string()),
            annotations: vec![],
            constructors: vec![ConstructorDecl {
                annotations: vec![AnnotationUse::marker(VIEW_MODEL_INJECT_ANNOTATION)],
                ..ConstructorDecl::default()
            }],
        }
    }

    fn index_with(decl: &TypeDecl) -> TypeIndex {
        let mut index = TypeIndex::new();
        index.insert(decl.clone());
        index
    }

    #[test]
    fn valid_candidate_yields_target() {
        let decl = candidate("test.TestViewModel");
        let mut diagnostics = Vec::new();
        let target = validate_target(&decl, &index_with(&decl), &mut diagnostics);
        assert!(target.is_some());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn class_level_violations_accumulate() {
        let mut decl = candidate("test.Outer$TestViewModel");
        decl.visibility = Visibility::Private;
        decl.superclass = None;
        let mut diagnostics = Vec::new();
        let target = validate_target(&decl, &index_with(&decl), &mut diagnostics);
        assert!(target.is_none());
        let messages: Vec<&str> = diagnostics.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(
            messages,
            [
                "@ViewModelInject-using types must not be private",
                "Nested @ViewModelInject-using types must be static",
                "@ViewModelInject-using types must be subtypes of ViewModel",
            ]
        );
        assert!(diagnostics.iter().all(|d| d.severity == Severity::Error));
    }

    #[test]
    fn private_constructor_checked_after_class_level() {
        let mut decl = candidate("test.TestViewModel");
        decl.constructors[0].visibility = Visibility::Private;
        let mut diagnostics = Vec::new();
        let target = validate_target(&decl, &index_with(&decl), &mut diagnostics);
        assert!(target.is_none());
        assert_eq!(
            diagnostics[0].message,
            "@ViewModelInject constructor must not be private."
        );
    }

    #[test]
    fn static_nested_candidate_is_accepted() {
        let mut decl = candidate("test.Outer$TestViewModel");
        decl.static_nested = true;
        let mut diagnostics = Vec::new();
        assert!(validate_target(&decl, &index_with(&decl), &mut diagnostics).is_some());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn multiple_annotated_constructors_rejected() {
        let mut decl = candidate("test.TestViewModel");
        let extra = decl.constructors[0].clone();
        decl.constructors.push(extra);
        let mut diagnostics = Vec::new();
        assert!(validate_target(&decl, &index_with(&decl), &mut diagnostics).is_none());
        assert_eq!(
            diagnostics[0].message,
            "Multiple @ViewModelInject-annotated constructors found."
        );
    }
}
