//! The host declaration surface consumed by the processor.
//!
//! These types are the concrete realization of the reflection capability the
//! pipeline needs: modifiers, supertypes, enclosing declarations, annotations
//! and constructors. Whatever front end inspects real source (or a compiler's
//! element model) adapts into this model; the pipeline never sees anything
//! host-specific.

use serde::{Deserialize, Serialize};

use crate::ids::ClassName;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    #[default]
    #[serde(rename = "package")]
    PackagePrivate,
    Private,
}

impl Visibility {
    pub fn is_private(self) -> bool {
        self == Visibility::Private
    }

    pub fn is_public(self) -> bool {
        self == Visibility::Public
    }
}

/// An annotation as written on a declaration or parameter.
///
/// `name` may be fully qualified or a bare simple name; marker matching
/// compares simple names so pass files can use either.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationUse {
    pub name: String,
    /// True for annotations that act as dependency qualifiers.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub qualifier: bool,
    /// Single explicit member, e.g. `"session"` for `@Named("session")`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Type references from an `includes` member, as written by the host.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub includes: Vec<String>,
}

impl AnnotationUse {
    pub fn marker(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qualifier: false,
            value: None,
            includes: Vec::new(),
        }
    }

    /// Whether this annotation is the given marker, by simple-name match.
    pub fn is(&self, marker: &str) -> bool {
        simple_name(&self.name) == simple_name(marker)
    }
}

fn simple_name(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<AnnotationUse>,
}

impl Parameter {
    pub fn annotation(&self, marker: &str) -> Option<&AnnotationUse> {
        self.annotations.iter().find(|a| a.is(marker))
    }

    pub fn has_annotation(&self, marker: &str) -> bool {
        self.annotation(marker).is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorDecl {
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<AnnotationUse>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
}

impl ConstructorDecl {
    pub fn has_annotation(&self, marker: &str) -> bool {
        self.annotations.iter().any(|a| a.is(marker))
    }
}

/// A class-like declaration seen in one compilation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDecl {
    pub name: ClassName,
    #[serde(default)]
    pub visibility: Visibility,
    /// For nested declarations: whether the nesting is static.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub static_nested: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superclass: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<AnnotationUse>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constructors: Vec<ConstructorDecl>,
}

impl TypeDecl {
    pub fn is_nested(&self) -> bool {
        self.name.is_nested()
    }

    pub fn annotation(&self, marker: &str) -> Option<&AnnotationUse> {
        self.annotations.iter().find(|a| a.is(marker))
    }

    pub fn has_annotation(&self, marker: &str) -> bool {
        self.annotation(marker).is_some()
    }

    /// Constructors carrying the given marker annotation, in declared order.
    pub fn annotated_constructors(&self, marker: &str) -> Vec<&ConstructorDecl> {
        self.constructors
            .iter()
            .filter(|c| c.has_annotation(marker))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_matching_ignores_package() {
        let qualified = AnnotationUse::marker("com.example.inject.ViewModelInject");
        assert!(qualified.is("ViewModelInject"));
        let bare = AnnotationUse::marker("Module");
        assert!(bare.is("dagger.Module"));
        assert!(!bare.is("ViewModelModule"));
    }

    #[test]
    fn annotated_constructors_preserve_order() {
        let decl = TypeDecl {
            name: ClassName::top_level("test", "TestViewModel").unwrap(),
            visibility: Visibility::default(),
            static_nested: false,
            superclass: None,
            annotations: vec![],
            constructors: vec![
                ConstructorDecl::default(),
                ConstructorDecl {
                    annotations: vec![AnnotationUse::marker("ViewModelInject")],
                    ..ConstructorDecl::default()
                },
            ],
        };
        assert_eq!(decl.annotated_constructors("ViewModelInject").len(), 1);
    }
}
