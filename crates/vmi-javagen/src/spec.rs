use std::path::PathBuf;

use vmi_model::ClassName;

/// A possibly parameterized type reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaType {
    pub class_name: ClassName,
    pub arguments: Vec<JavaType>,
}

impl JavaType {
    pub fn of(class_name: ClassName) -> Self {
        Self {
            class_name,
            arguments: Vec::new(),
        }
    }

    /// Parse a reflection name, e.g. `javax.inject.Provider`.
    pub fn named(reflection_name: &str) -> Self {
        Self::of(
            ClassName::from_reflection_name(reflection_name)
                .expect("well-known type names are valid"),
        )
    }

    pub fn parameterized(reflection_name: &str, arguments: Vec<JavaType>) -> Self {
        Self {
            class_name: ClassName::from_reflection_name(reflection_name)
                .expect("well-known type names are valid"),
            arguments,
        }
    }
}

/// An annotation applied to a type, field, method or parameter.
///
/// Member values are raw Java expressions (`"TestViewModel.class"`,
/// `"\"comment\""`); a sole member named `value` renders without its key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationSpec {
    pub type_name: ClassName,
    pub members: Vec<(String, String)>,
}

impl AnnotationSpec {
    pub fn marker(reflection_name: &str) -> Self {
        Self {
            type_name: ClassName::from_reflection_name(reflection_name)
                .expect("well-known annotation names are valid"),
            members: Vec::new(),
        }
    }

    pub fn member(mut self, name: impl Into<String>, raw_value: impl Into<String>) -> Self {
        self.members.push((name.into(), raw_value.into()));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub modifiers: Vec<String>,
    pub field_type: JavaType,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSpec {
    pub annotations: Vec<AnnotationSpec>,
    pub parameter_type: JavaType,
    pub name: String,
}

impl ParameterSpec {
    pub fn new(parameter_type: JavaType, name: impl Into<String>) -> Self {
        Self {
            annotations: Vec::new(),
            parameter_type,
            name: name.into(),
        }
    }
}

/// A method or constructor (`name`/`return_type` absent for constructors).
///
/// `body` is a list of statements; `None` renders an abstract declaration
/// ending in a semicolon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSpec {
    pub annotations: Vec<AnnotationSpec>,
    pub modifiers: Vec<String>,
    pub return_type: Option<JavaType>,
    pub name: Option<String>,
    pub parameters: Vec<ParameterSpec>,
    pub body: Option<Vec<String>>,
}

impl MethodSpec {
    pub fn constructor() -> Self {
        Self {
            annotations: Vec::new(),
            modifiers: Vec::new(),
            return_type: None,
            name: None,
            parameters: Vec::new(),
            body: Some(Vec::new()),
        }
    }

    pub fn method(name: impl Into<String>, return_type: JavaType) -> Self {
        Self {
            annotations: Vec::new(),
            modifiers: Vec::new(),
            return_type: Some(return_type),
            name: Some(name.into()),
            parameters: Vec::new(),
            body: Some(Vec::new()),
        }
    }

    pub fn abstract_method(name: impl Into<String>, return_type: JavaType) -> Self {
        Self {
            body: None,
            ..Self::method(name, return_type)
        }
    }
}

/// A single top-level class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSpec {
    /// Simple name; generated peers may contain a literal `$`.
    pub name: String,
    pub modifiers: Vec<String>,
    pub annotations: Vec<AnnotationSpec>,
    pub interfaces: Vec<JavaType>,
    pub fields: Vec<FieldSpec>,
    pub methods: Vec<MethodSpec>,
}

impl TypeSpec {
    pub fn class(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifiers: Vec::new(),
            annotations: Vec::new(),
            interfaces: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }
}

/// A renderable compilation unit: one type in one package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaFile {
    pub package: String,
    pub file_comment: Option<String>,
    pub type_spec: TypeSpec,
}

impl JavaFile {
    pub fn new(package: impl Into<String>, type_spec: TypeSpec) -> Self {
        Self {
            package: package.into(),
            file_comment: None,
            type_spec,
        }
    }

    pub fn with_file_comment(mut self, comment: impl Into<String>) -> Self {
        self.file_comment = Some(comment.into());
        self
    }

    /// Relative output path: package directories plus `<Name>.java`.
    pub fn path(&self) -> PathBuf {
        let mut path = PathBuf::new();
        if !self.package.is_empty() {
            for segment in self.package.split('.') {
                path.push(segment);
            }
        }
        path.push(format!("{}.java", self.type_spec.name));
        path
    }
}
