//! Renders a synthesized factory description to a generated type.

use vmi_classify::{DependencyRequest, Qualifier};
use vmi_javagen::{
    AnnotationSpec, FieldSpec, JavaFile, JavaType, MethodSpec, ParameterSpec, TypeSpec,
};
use vmi_model::ClassName;

use crate::synthesize::{FactoryKind, SynthesizedFactory};
use crate::{SAVED_STATE_HANDLE_NAME, SAVED_STATE_HANDLE_TYPE};

const BASIC_FACTORY: &str = "viewmodel.inject.ViewModelBasicFactory";
const SAVED_STATE_FACTORY: &str = "viewmodel.inject.savedstate.ViewModelSavedStateFactory";
const PROVIDER: &str = "javax.inject.Provider";
const INJECT: &str = "javax.inject.Inject";
const OVERRIDE: &str = "java.lang.Override";

/// Build the generated `<Name>_AssistedFactory` compilation unit.
///
/// One provider field and constructor parameter per provided request, in
/// declared order; one `create` method whose body reassembles the target
/// constructor's arguments in their ORIGINAL declared positions.
pub fn factory_file(
    factory: &SynthesizedFactory,
    generated_annotation: Option<&AnnotationSpec>,
) -> JavaFile {
    let target_type = JavaType::of(factory.target.clone());

    let mut spec = TypeSpec::class(factory.generated_name.simple_name());
    spec.modifiers = vec!["public".to_string(), "final".to_string()];
    if let Some(annotation) = generated_annotation {
        spec.annotations.push(annotation.clone());
    }
    let interface = match factory.kind {
        FactoryKind::Basic => BASIC_FACTORY,
        FactoryKind::SavedState => SAVED_STATE_FACTORY,
    };
    spec.interfaces
        .push(JavaType::parameterized(interface, vec![target_type.clone()]));

    let mut constructor = MethodSpec::constructor();
    constructor.annotations.push(AnnotationSpec::marker(INJECT));
    constructor.modifiers.push("public".to_string());
    let mut assignments = Vec::new();
    for request in factory.provided() {
        let provider_type = JavaType::parameterized(
            PROVIDER,
            vec![JavaType::named(&request.key().type_name)],
        );
        spec.fields.push(FieldSpec {
            modifiers: vec!["private".to_string(), "final".to_string()],
            field_type: provider_type.clone(),
            name: request.name().to_string(),
        });
        let mut parameter = ParameterSpec::new(provider_type, request.name());
        if let Some(annotation) = request.key().qualifier.as_ref().and_then(qualifier_annotation)
        {
            parameter.annotations.push(annotation);
        }
        constructor.parameters.push(parameter);
        assignments.push(format!("this.{0} = {0};", request.name()));
    }
    constructor.body = Some(assignments);
    spec.methods.push(constructor);

    let mut create = MethodSpec::method("create", target_type);
    create.annotations.push(AnnotationSpec::marker(OVERRIDE));
    create.modifiers.push("public".to_string());
    if factory.kind == FactoryKind::SavedState {
        create.parameters.push(ParameterSpec::new(
            JavaType::named(SAVED_STATE_HANDLE_TYPE),
            SAVED_STATE_HANDLE_NAME,
        ));
    }
    create.body = Some(vec![format!(
        "return new {}({});",
        local_reference(&factory.target),
        constructor_arguments(&factory.requests)
    )]);
    spec.methods.push(create);

    JavaFile::new(factory.generated_name.package(), spec)
        .with_file_comment("Generated by @ViewModelInject. Do not modify!")
}

/// `None` when the qualifier's annotation name does not parse; the parameter
/// is then emitted unqualified.
fn qualifier_annotation(qualifier: &Qualifier) -> Option<AnnotationSpec> {
    let type_name = ClassName::from_reflection_name(&qualifier.type_name).ok()?;
    let mut annotation = AnnotationSpec {
        type_name,
        members: Vec::new(),
    };
    if let Some(value) = &qualifier.value {
        annotation = annotation.member("value", format!("\"{value}\""));
    }
    Some(annotation)
}

/// How the target class is referenced from its same-package generated peer.
fn local_reference(name: &ClassName) -> String {
    name.simple_names().join(".")
}

fn constructor_arguments(requests: &[DependencyRequest]) -> String {
    requests
        .iter()
        .map(|request| match request {
            DependencyRequest::Provided(named) => format!("{}.get()", named.name),
            DependencyRequest::Assisted(named) => named.name.clone(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
