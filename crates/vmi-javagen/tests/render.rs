//! Renderer tests: layout snapshot plus import-resolution invariants.

use proptest::prelude::*;

use vmi_javagen::{
    AnnotationSpec, FieldSpec, JavaFile, JavaType, MethodSpec, ParameterSpec, TypeSpec,
};

fn sample_file() -> JavaFile {
    let mut spec = TypeSpec::class("SessionStore");
    spec.modifiers = vec!["public".to_string(), "final".to_string()];
    spec.annotations.push(
        AnnotationSpec::marker("javax.annotation.Generated")
            .member("value", "\"example.Generator\"")
            .member("comments", "\"sample\""),
    );
    spec.interfaces.push(JavaType::parameterized(
        "example.api.Store",
        vec![JavaType::named("java.lang.String")],
    ));
    spec.fields.push(FieldSpec {
        modifiers: vec!["private".to_string(), "final".to_string()],
        field_type: JavaType::parameterized(
            "javax.inject.Provider",
            vec![JavaType::named("java.lang.String")],
        ),
        name: "session".to_string(),
    });
    let mut constructor = MethodSpec::constructor();
    constructor
        .annotations
        .push(AnnotationSpec::marker("javax.inject.Inject"));
    constructor.modifiers.push("public".to_string());
    constructor.parameters.push(ParameterSpec::new(
        JavaType::parameterized(
            "javax.inject.Provider",
            vec![JavaType::named("java.lang.String")],
        ),
        "session",
    ));
    constructor.body = Some(vec!["this.session = session;".to_string()]);
    spec.methods.push(constructor);
    let mut get = MethodSpec::method("get", JavaType::named("java.lang.String"));
    get.annotations
        .push(AnnotationSpec::marker("java.lang.Override"));
    get.modifiers.push("public".to_string());
    get.body = Some(vec!["return session.get();".to_string()]);
    spec.methods.push(get);
    let mut purge = MethodSpec::abstract_method("purge", JavaType::named("void"));
    purge.modifiers.push("abstract".to_string());
    spec.methods.push(purge);
    JavaFile::new("example.store", spec).with_file_comment("Generated. Do not modify!")
}

#[test]
fn renders_expected_layout() {
    insta::assert_snapshot!("sample_class", sample_file().render());
}

#[test]
fn path_follows_package_directories() {
    assert_eq!(
        sample_file().path().to_str().unwrap(),
        "example/store/SessionStore.java"
    );
}

fn import_lines(rendered: &str) -> Vec<String> {
    rendered
        .lines()
        .filter(|line| line.starts_with("import "))
        .map(str::to_string)
        .collect()
}

fn ident() -> impl Strategy<Value = String> {
    "[A-Z][a-zA-Z0-9]{0,8}"
}

fn package() -> impl Strategy<Value = String> {
    "[a-z]{1,6}(\\.[a-z]{1,6}){0,2}"
}

proptest! {
    #[test]
    fn imports_are_sorted_and_unique(
        names in proptest::collection::vec((package(), ident()), 0..12),
        file_package in package(),
    ) {
        let mut spec = TypeSpec::class("Holder");
        for (index, (package, simple)) in names.iter().enumerate() {
            spec.fields.push(FieldSpec {
                modifiers: vec!["private".to_string()],
                field_type: JavaType::named(&format!("{package}.{simple}")),
                name: format!("field{index}"),
            });
        }
        let rendered = JavaFile::new(file_package.clone(), spec).render();
        let imports = import_lines(&rendered);
        let mut sorted = imports.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(&imports, &sorted);
        for import in &imports {
            let qualified = import
                .trim_start_matches("import ")
                .trim_end_matches(';');
            let (package, _) = qualified.rsplit_once('.').unwrap();
            prop_assert_ne!(package, file_package.as_str());
        }
    }

    #[test]
    fn rendering_is_deterministic(
        names in proptest::collection::vec((package(), ident()), 1..8),
    ) {
        let mut spec = TypeSpec::class("Holder");
        for (index, (package, simple)) in names.iter().enumerate() {
            spec.fields.push(FieldSpec {
                modifiers: vec!["private".to_string()],
                field_type: JavaType::named(&format!("{package}.{simple}")),
                name: format!("field{index}"),
            });
        }
        let file = JavaFile::new("example", spec);
        prop_assert_eq!(file.render(), file.render());
    }
}
