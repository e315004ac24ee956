//! Classifies constructor parameters into dependency requests.
//!
//! Every parameter becomes either a runtime-supplied (`Assisted`) or a
//! container-supplied (`Provided`) request carrying a structural key. The key
//! (type plus optional qualifier) is what duplicate detection compares; the
//! display forms below appear verbatim in diagnostics.

use std::fmt;

use serde::{Deserialize, Serialize};

use vmi_model::{AnnotationUse, Parameter};

/// Marker annotation naming a runtime-supplied parameter.
pub const ASSISTED_ANNOTATION: &str = "Assisted";

/// A qualifier annotation as part of a structural key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Qualifier {
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Qualifier {
    pub fn simple_name(&self) -> &str {
        self.type_name.rsplit('.').next().unwrap_or(&self.type_name)
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "@{}(\"{value}\")", self.simple_name()),
            None => write!(f, "@{}", self.simple_name()),
        }
    }
}

/// Structural key of a dependency request: type plus optional qualifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Key {
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualifier: Option<Qualifier>,
}

impl Key {
    pub fn of(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            qualifier: None,
        }
    }

    pub fn qualified(type_name: impl Into<String>, qualifier: Qualifier) -> Self {
        Self {
            type_name: type_name.into(),
            qualifier: Some(qualifier),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.qualifier {
            Some(qualifier) => write!(f, "{qualifier} {}", self.type_name),
            None => f.write_str(&self.type_name),
        }
    }
}

/// A structural key together with the declared parameter name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NamedKey {
    pub key: Key,
    pub name: String,
}

impl NamedKey {
    pub fn new(key: Key, name: impl Into<String>) -> Self {
        Self {
            key,
            name: name.into(),
        }
    }
}

impl fmt::Display for NamedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.key, self.name)
    }
}

/// One constructor parameter, classified.
///
/// Order in a request list always matches declared constructor parameter
/// order; generated constructor invocations rely on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum DependencyRequest {
    Provided(NamedKey),
    Assisted(NamedKey),
}

impl DependencyRequest {
    pub fn named_key(&self) -> &NamedKey {
        match self {
            DependencyRequest::Provided(named) | DependencyRequest::Assisted(named) => named,
        }
    }

    pub fn key(&self) -> &Key {
        &self.named_key().key
    }

    pub fn name(&self) -> &str {
        &self.named_key().name
    }

    pub fn is_assisted(&self) -> bool {
        matches!(self, DependencyRequest::Assisted(_))
    }
}

impl fmt::Display for DependencyRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.named_key().fmt(f)
    }
}

/// Classify a constructor parameter.
///
/// A parameter is assisted iff it carries the `@Assisted` marker. The key's
/// qualifier is the first annotation flagged as a qualifier.
pub fn classify(parameter: &Parameter) -> DependencyRequest {
    let qualifier = parameter
        .annotations
        .iter()
        .find(|a| a.qualifier)
        .map(|a: &AnnotationUse| Qualifier {
            type_name: a.name.clone(),
            value: a.value.clone(),
        });
    let key = Key {
        type_name: parameter.type_name.clone(),
        qualifier,
    };
    let named = NamedKey::new(key, parameter.name.clone());
    if parameter.has_annotation(ASSISTED_ANNOTATION) {
        DependencyRequest::Assisted(named)
    } else {
        DependencyRequest::Provided(named)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(name: &str, type_name: &str, annotations: Vec<AnnotationUse>) -> Parameter {
        Parameter {
            name: name.to_string(),
            type_name: type_name.to_string(),
            annotations,
        }
    }

    #[test]
    fn plain_parameter_is_provided() {
        let request = classify(&param("foo", "java.lang.Long", vec![]));
        assert!(!request.is_assisted());
        assert_eq!(request.to_string(), "java.lang.Long foo");
    }

    #[test]
    fn assisted_marker_is_runtime_supplied() {
        let request = classify(&param(
            "savedStateHandle",
            "androidx.lifecycle.SavedStateHandle",
            vec![AnnotationUse::marker("Assisted")],
        ));
        assert!(request.is_assisted());
        assert_eq!(
            request.to_string(),
            "androidx.lifecycle.SavedStateHandle savedStateHandle"
        );
    }

    #[test]
    fn qualifier_distinguishes_keys() {
        let named = AnnotationUse {
            name: "javax.inject.Named".to_string(),
            qualifier: true,
            value: Some("session".to_string()),
            includes: vec![],
        };
        let qualified = classify(&param("foo", "java.lang.Long", vec![named]));
        let plain = classify(&param("bar", "java.lang.Long", vec![]));
        assert_ne!(qualified.key(), plain.key());
        assert_eq!(
            qualified.key().to_string(),
            "@Named(\"session\") java.lang.Long"
        );
    }

    #[test]
    fn qualifier_values_distinguish_keys() {
        let named = |value: &str| AnnotationUse {
            name: "javax.inject.Named".to_string(),
            qualifier: true,
            value: Some(value.to_string()),
            includes: vec![],
        };
        let first = classify(&param("foo", "java.lang.Long", vec![named("a")]));
        let second = classify(&param("bar", "java.lang.Long", vec![named("b")]));
        assert_ne!(first.key(), second.key());
    }
}
