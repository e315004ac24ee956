//! Builds in-memory descriptions of Java types and renders them to source.
//!
//! The specs here describe exactly the shapes the processor generates:
//! annotated classes with fields, constructors and methods. Rendering is
//! deterministic — identical specs produce byte-identical source.

mod render;
mod spec;

pub use spec::{
    AnnotationSpec, FieldSpec, JavaFile, JavaType, MethodSpec, ParameterSpec, TypeSpec,
};
