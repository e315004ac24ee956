//! Source rendering with import resolution.
//!
//! Imports are collected from every type reference in the spec (not from raw
//! statement text), deduplicated and sorted. Two distinct classes sharing a
//! top-level simple name import the lexicographically smaller one; the other
//! renders fully qualified.

use std::collections::{BTreeMap, BTreeSet};

use vmi_model::ClassName;

use crate::spec::{AnnotationSpec, JavaFile, JavaType, MethodSpec};

const INDENT: &str = "  ";

impl JavaFile {
    /// Render the compilation unit to Java source.
    pub fn render(&self) -> String {
        let imports = Imports::collect(self);
        let mut out = String::new();

        if let Some(comment) = &self.file_comment {
            for line in comment.lines() {
                out.push_str("// ");
                out.push_str(line);
                out.push('\n');
            }
        }
        if !self.package.is_empty() {
            out.push_str(&format!("package {};\n", self.package));
        }
        if !imports.qualified_imports.is_empty() {
            out.push('\n');
            for import in &imports.qualified_imports {
                out.push_str(&format!("import {import};\n"));
            }
        }
        out.push('\n');

        let spec = &self.type_spec;
        for annotation in &spec.annotations {
            out.push_str(&imports.annotation(annotation));
            out.push('\n');
        }
        let mut header = String::new();
        for modifier in &spec.modifiers {
            header.push_str(modifier);
            header.push(' ');
        }
        header.push_str("class ");
        header.push_str(&spec.name);
        if !spec.interfaces.is_empty() {
            header.push_str(" implements ");
            let rendered: Vec<String> = spec.interfaces.iter().map(|i| imports.typ(i)).collect();
            header.push_str(&rendered.join(", "));
        }
        out.push_str(&header);
        out.push_str(" {\n");

        for field in &spec.fields {
            out.push_str(INDENT);
            for modifier in &field.modifiers {
                out.push_str(modifier);
                out.push(' ');
            }
            out.push_str(&imports.typ(&field.field_type));
            out.push(' ');
            out.push_str(&field.name);
            out.push_str(";\n");
        }

        for (index, method) in spec.methods.iter().enumerate() {
            if index > 0 || !spec.fields.is_empty() {
                out.push('\n');
            }
            render_method(&mut out, method, &spec.name, &imports);
        }

        out.push_str("}\n");
        out
    }
}

fn render_method(out: &mut String, method: &MethodSpec, type_name: &str, imports: &Imports) {
    for annotation in &method.annotations {
        out.push_str(INDENT);
        out.push_str(&imports.annotation(annotation));
        out.push('\n');
    }
    out.push_str(INDENT);
    for modifier in &method.modifiers {
        out.push_str(modifier);
        out.push(' ');
    }
    if let Some(return_type) = &method.return_type {
        out.push_str(&imports.typ(return_type));
        out.push(' ');
    }
    out.push_str(method.name.as_deref().unwrap_or(type_name));
    out.push('(');
    let params: Vec<String> = method
        .parameters
        .iter()
        .map(|param| {
            let mut rendered = String::new();
            for annotation in &param.annotations {
                rendered.push_str(&imports.annotation(annotation));
                rendered.push(' ');
            }
            rendered.push_str(&imports.typ(&param.parameter_type));
            rendered.push(' ');
            rendered.push_str(&param.name);
            rendered
        })
        .collect();
    out.push_str(&params.join(", "));
    out.push(')');
    match &method.body {
        None => out.push_str(";\n"),
        Some(statements) if statements.is_empty() => out.push_str(" {}\n"),
        Some(statements) => {
            out.push_str(" {\n");
            for statement in statements {
                out.push_str(INDENT);
                out.push_str(INDENT);
                out.push_str(statement);
                out.push('\n');
            }
            out.push_str(INDENT);
            out.push_str("}\n");
        }
    }
}

struct Imports {
    file_package: String,
    /// Top-level simple name -> package chosen for the short reference.
    chosen: BTreeMap<String, String>,
    qualified_imports: Vec<String>,
}

impl Imports {
    fn collect(file: &JavaFile) -> Self {
        let mut referenced: BTreeSet<(String, String)> = BTreeSet::new();
        let spec = &file.type_spec;
        let mut visit_class = |name: &ClassName| {
            if !name.package().is_empty() && name.package() != file.package {
                referenced.insert((name.package().to_string(), name.simple_names()[0].clone()));
            }
        };
        fn visit_type(t: &JavaType, visit: &mut impl FnMut(&ClassName)) {
            visit(&t.class_name);
            for argument in &t.arguments {
                visit_type(argument, visit);
            }
        }
        for annotation in &spec.annotations {
            visit_class(&annotation.type_name);
        }
        for interface in &spec.interfaces {
            visit_type(interface, &mut visit_class);
        }
        for field in &spec.fields {
            visit_type(&field.field_type, &mut visit_class);
        }
        for method in &spec.methods {
            for annotation in &method.annotations {
                visit_class(&annotation.type_name);
            }
            if let Some(return_type) = &method.return_type {
                visit_type(return_type, &mut visit_class);
            }
            for parameter in &method.parameters {
                for annotation in &parameter.annotations {
                    visit_class(&annotation.type_name);
                }
                visit_type(&parameter.parameter_type, &mut visit_class);
            }
        }

        // First (lexicographically smallest) package wins a contested simple
        // name; the BTreeSet iterates in sorted order already.
        let mut chosen: BTreeMap<String, String> = BTreeMap::new();
        for (package, simple) in &referenced {
            chosen
                .entry(simple.clone())
                .or_insert_with(|| package.clone());
        }
        let mut qualified_imports: Vec<String> = chosen
            .iter()
            .map(|(simple, package)| format!("{package}.{simple}"))
            .collect();
        qualified_imports.sort();

        Self {
            file_package: file.package.clone(),
            chosen,
            qualified_imports,
        }
    }

    /// Source reference for a class: short when local or imported, fully
    /// qualified otherwise.
    fn class(&self, name: &ClassName) -> String {
        let chain = name.simple_names().join(".");
        if name.package().is_empty() || name.package() == self.file_package {
            return chain;
        }
        if self.chosen.get(&name.simple_names()[0]).map(String::as_str) == Some(name.package()) {
            return chain;
        }
        format!("{}.{chain}", name.package())
    }

    fn typ(&self, t: &JavaType) -> String {
        let base = self.class(&t.class_name);
        if t.arguments.is_empty() {
            return base;
        }
        let arguments: Vec<String> = t.arguments.iter().map(|a| self.typ(a)).collect();
        format!("{base}<{}>", arguments.join(", "))
    }

    fn annotation(&self, annotation: &AnnotationSpec) -> String {
        let base = format!("@{}", self.class(&annotation.type_name));
        match annotation.members.as_slice() {
            [] => base,
            [(name, value)] if name == "value" => format!("{base}({value})"),
            members => {
                let rendered: Vec<String> = members
                    .iter()
                    .map(|(name, value)| format!("{name} = {value}"))
                    .collect();
                format!("{base}({})", rendered.join(", "))
            }
        }
    }
}
