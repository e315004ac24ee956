use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ModelError;

/// A Java class name: a package plus a non-empty chain of simple names.
///
/// Nested classes keep their enclosing chain (`test.Outer$Inner` has the
/// chain `["Outer", "Inner"]`). Two textual forms exist: the canonical name
/// joins the chain with dots, the reflection name with `$`. The reflection
/// form is unambiguous and is what serializes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClassName {
    package: String,
    names: Vec<String>,
}

impl ClassName {
    pub fn top_level(package: impl Into<String>, name: impl Into<String>) -> Result<Self, ModelError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ModelError::InvalidClassName(name));
        }
        Ok(Self {
            package: package.into(),
            names: vec![name],
        })
    }

    /// A class nested inside `self`.
    pub fn nested(&self, name: impl Into<String>) -> Result<Self, ModelError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ModelError::InvalidClassName(name));
        }
        let mut names = self.names.clone();
        names.push(name);
        Ok(Self {
            package: self.package.clone(),
            names,
        })
    }

    /// Parse a reflection name such as `test.Outer$Inner`.
    ///
    /// Everything up to the last dot is the package; the remainder splits on
    /// `$` into the nesting chain.
    pub fn from_reflection_name(value: &str) -> Result<Self, ModelError> {
        let value = value.trim();
        let (package, rest) = match value.rsplit_once('.') {
            Some((package, rest)) => (package, rest),
            None => ("", value),
        };
        let names: Vec<String> = rest.split('$').map(str::to_string).collect();
        if names.iter().any(|name| name.is_empty()) || rest.is_empty() {
            return Err(ModelError::InvalidClassName(value.to_string()));
        }
        Ok(Self {
            package: package.to_string(),
            names,
        })
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn simple_name(&self) -> &str {
        self.names.last().expect("class name chain is non-empty")
    }

    pub fn simple_names(&self) -> &[String] {
        &self.names
    }

    pub fn is_nested(&self) -> bool {
        self.names.len() > 1
    }

    /// Canonical source form, e.g. `test.Outer.Inner`.
    pub fn canonical_name(&self) -> String {
        self.join('.')
    }

    /// Reflection form, e.g. `test.Outer$Inner`.
    pub fn reflection_name(&self) -> String {
        self.join('$')
    }

    /// A top-level class in the same package.
    pub fn peer_class(&self, name: impl Into<String>) -> Result<Self, ModelError> {
        Self::top_level(self.package.clone(), name)
    }

    /// Name of the generated per-class factory: a top-level peer whose simple
    /// name encodes the nesting chain with `$`, suffixed `_AssistedFactory`.
    pub fn assisted_factory_name(&self) -> Self {
        let name = format!("{}_AssistedFactory", self.names.join("$"));
        self.peer_class(name).expect("suffixed name is non-empty")
    }

    /// Name of the generated aggregation module for this root module.
    pub fn aggregation_module_name(&self) -> Self {
        let name = format!("ViewModelInject_{}", self.simple_name());
        self.peer_class(name).expect("prefixed name is non-empty")
    }

    fn join(&self, separator: char) -> String {
        let chain = self
            .names
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(&separator.to_string());
        if self.package.is_empty() {
            chain
        } else {
            format!("{}.{}", self.package, chain)
        }
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_name())
    }
}

impl Serialize for ClassName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.reflection_name())
    }
}

impl<'de> Deserialize<'de> for ClassName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::from_reflection_name(&value).map_err(serde::de::Error::custom)
    }
}
