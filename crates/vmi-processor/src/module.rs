//! Registration-root validation and the generated aggregation module.

use vmi_javagen::{AnnotationSpec, JavaFile, JavaType, MethodSpec, ParameterSpec, TypeSpec};
use vmi_model::{ClassName, Diagnostic, TypeDecl};

use crate::MODULE_ANNOTATION;

const ABSTRACT_FACTORY: &str = "viewmodel.inject.AbstractViewModelFactory";
const BINDS: &str = "dagger.Binds";
const INTO_MAP: &str = "dagger.multibindings.IntoMap";
const CLASS_KEY: &str = "dagger.multibindings.ClassKey";

/// The single declaration marking where generated bindings aggregate.
#[derive(Debug, Clone, Copy)]
pub struct RegistrationRoot<'a> {
    pub declaration: &'a TypeDecl,
    pub public: bool,
}

/// The root must also carry the container framework's own module marker;
/// the generated type is included from it.
pub fn validate_module<'a>(
    decl: &'a TypeDecl,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<RegistrationRoot<'a>> {
    if !decl.has_annotation(MODULE_ANNOTATION) {
        diagnostics.push(Diagnostic::error(
            "@ViewModelModule must also be annotated as a Dagger @Module",
            Some(decl.name.clone()),
        ));
        return None;
    }
    Some(RegistrationRoot {
        declaration: decl,
        public: decl.visibility.is_public(),
    })
}

/// Description of the aggregation module: one binding per injected class,
/// in cumulative encounter order.
#[derive(Debug, Clone)]
pub struct AggregationDescriptor {
    pub module_name: ClassName,
    pub public: bool,
    pub injected: Vec<ClassName>,
}

impl AggregationDescriptor {
    pub fn generated_name(&self) -> ClassName {
        self.module_name.aggregation_module_name()
    }
}

/// Build the generated `ViewModelInject_<Module>` compilation unit: an
/// abstract, non-instantiable module with one multi-binding method per
/// injected class.
pub fn module_file(
    descriptor: &AggregationDescriptor,
    generated_annotation: Option<&AnnotationSpec>,
) -> JavaFile {
    let generated_name = descriptor.generated_name();

    let mut spec = TypeSpec::class(generated_name.simple_name());
    spec.annotations.push(AnnotationSpec::marker(MODULE_ANNOTATION));
    if let Some(annotation) = generated_annotation {
        spec.annotations.push(annotation.clone());
    }
    if descriptor.public {
        spec.modifiers.push("public".to_string());
    }
    spec.modifiers.push("abstract".to_string());

    let mut constructor = MethodSpec::constructor();
    constructor.modifiers.push("private".to_string());
    spec.methods.push(constructor);

    for injected in &descriptor.injected {
        let mut bind = MethodSpec::abstract_method(
            bind_method_name(injected),
            JavaType::named(ABSTRACT_FACTORY),
        );
        bind.annotations.push(AnnotationSpec::marker(BINDS));
        bind.annotations.push(AnnotationSpec::marker(INTO_MAP));
        bind.annotations.push(
            AnnotationSpec::marker(CLASS_KEY)
                .member("value", format!("{}.class", class_literal(injected, &generated_name))),
        );
        bind.modifiers.push("abstract".to_string());
        bind.parameters.push(ParameterSpec::new(
            JavaType::of(injected.assisted_factory_name()),
            "factory",
        ));
        spec.methods.push(bind);
    }

    JavaFile::new(generated_name.package(), spec)
        .with_file_comment("Generated by @ViewModelModule. Do not modify!")
}

/// `bind_` plus the injected class's reflection name with dots flattened;
/// nesting `$` separators survive as-is.
fn bind_method_name(injected: &ClassName) -> String {
    format!("bind_{}", injected.reflection_name().replace('.', "_"))
}

/// Source reference used inside the `@ClassKey` member: short within the
/// module's own package, otherwise fully qualified.
fn class_literal(injected: &ClassName, generated: &ClassName) -> String {
    if injected.package() == generated.package() {
        injected.simple_names().join(".")
    } else {
        injected.canonical_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vmi_model::{AnnotationUse, Visibility};

    #[test]
    fn missing_container_marker_is_an_error() {
        let decl = TypeDecl {
            name: ClassName::top_level("test", "TestModule").unwrap(),
            visibility: Visibility::default(),
            static_nested: false,
            superclass: None,
            annotations: vec![AnnotationUse::marker(crate::VIEW_MODEL_MODULE_ANNOTATION)],
            constructors: vec![],
        };
        let mut diagnostics = Vec::new();
        assert!(validate_module(&decl, &mut diagnostics).is_none());
        assert_eq!(
            diagnostics[0].message,
            "@ViewModelModule must also be annotated as a Dagger @Module"
        );
    }

    #[test]
    fn bind_method_name_flattens_packages_and_keeps_nesting() {
        let nested = ClassName::from_reflection_name("test.Outer$TestViewModel").unwrap();
        assert_eq!(bind_method_name(&nested), "bind_test_Outer$TestViewModel");
        let top = ClassName::from_reflection_name("test.TestViewModel").unwrap();
        assert_eq!(bind_method_name(&top), "bind_test_TestViewModel");
    }
}
