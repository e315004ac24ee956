//! Semantic validation and factory synthesis for a validated target.

use std::collections::BTreeSet;

use vmi_classify::{DependencyRequest, Key, NamedKey, classify};
use vmi_model::{ClassName, Diagnostic, ProcessorOptions};

use crate::validate::InjectionTarget;
use crate::{SAVED_STATE_HANDLE_NAME, SAVED_STATE_HANDLE_TYPE};

/// Which generic factory shape the generated type implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactoryKind {
    /// No runtime-supplied parameters; `create()` takes nothing.
    Basic,
    /// Exactly one runtime-supplied `SavedStateHandle savedStateHandle`.
    SavedState,
}

/// Abstract description of one per-class factory to generate.
#[derive(Debug, Clone)]
pub struct SynthesizedFactory {
    pub target: ClassName,
    /// Every constructor parameter, classified, in declared order.
    pub requests: Vec<DependencyRequest>,
    pub kind: FactoryKind,
    pub generated_name: ClassName,
}

impl SynthesizedFactory {
    pub fn provided(&self) -> impl Iterator<Item = &DependencyRequest> {
        self.requests.iter().filter(|r| !r.is_assisted())
    }
}

/// The single runtime-supplied shape the saved-state variant accepts.
fn expected_assisted_key() -> NamedKey {
    NamedKey::new(Key::of(SAVED_STATE_HANDLE_TYPE), SAVED_STATE_HANDLE_NAME)
}

/// Classify the constructor's parameters and validate the two groups.
///
/// Any error yields `None`: no factory is generated and the class never
/// reaches module aggregation. The empty-provided case is only advisory.
pub fn synthesize(
    target: &InjectionTarget<'_>,
    options: &ProcessorOptions,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<SynthesizedFactory> {
    let declaration = target.declaration;
    let requests: Vec<DependencyRequest> = target
        .constructor
        .parameters
        .iter()
        .map(classify)
        .collect();
    let assisted: Vec<&DependencyRequest> = requests.iter().filter(|r| r.is_assisted()).collect();
    let provided: Vec<&DependencyRequest> = requests.iter().filter(|r| !r.is_assisted()).collect();

    let mut valid = true;

    let expected = expected_assisted_key();
    let assisted_keys: Vec<&NamedKey> = assisted.iter().map(|r| r.named_key()).collect();
    let found: BTreeSet<&NamedKey> = assisted_keys.iter().copied().collect();
    let wanted: BTreeSet<&NamedKey> = std::iter::once(&expected).collect();
    if !assisted_keys.is_empty() && found != wanted {
        let found_list = assisted_keys
            .iter()
            .map(|key| key.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        diagnostics.push(Diagnostic::error(
            format!(
                "ViewModel injection only allows up to 1 @Assisted parameter of type SavedStateHandle.\n\
                 \x20 Found:\n\
                 \x20   [{found_list}]\n\
                 \x20 Expected:\n\
                 \x20   [{expected}]"
            ),
            Some(declaration.name.clone()),
        ));
        valid = false;
    } else if !assisted_keys.is_empty() && !options.state_handle_on_classpath {
        diagnostics.push(Diagnostic::error(
            "SavedStateHandle is missing from the classpath",
            None,
        ));
        valid = false;
    }

    if provided.is_empty() {
        diagnostics.push(Diagnostic::warning(
            "ViewModel injections requires at least one non-@Assisted parameter.",
            Some(declaration.name.clone()),
        ));
    } else {
        let duplicates = provided_duplicates(&provided);
        if !duplicates.is_empty() {
            let mut message =
                String::from("Duplicate non-@Assisted parameters declared. Forget a qualifier annotation?");
            for request in &duplicates {
                message.push_str("\n * ");
                message.push_str(&request.to_string());
            }
            diagnostics.push(Diagnostic::error(message, Some(declaration.name.clone())));
            valid = false;
        }
    }

    if !valid {
        return None;
    }

    let kind = if assisted.is_empty() {
        FactoryKind::Basic
    } else {
        FactoryKind::SavedState
    };
    Some(SynthesizedFactory {
        target: declaration.name.clone(),
        requests,
        kind,
        generated_name: declaration.name.assisted_factory_name(),
    })
}

/// Every request belonging to a structural key that occurs more than once,
/// in declared order.
fn provided_duplicates<'a>(provided: &[&'a DependencyRequest]) -> Vec<&'a DependencyRequest> {
    let mut counts: Vec<(&Key, usize)> = Vec::new();
    for request in provided {
        match counts.iter_mut().find(|(key, _)| *key == request.key()) {
            Some((_, count)) => *count += 1,
            None => counts.push((request.key(), 1)),
        }
    }
    let duplicated: BTreeSet<&Key> = counts
        .iter()
        .filter(|(_, count)| *count > 1)
        .map(|(key, _)| *key)
        .collect();
    provided
        .iter()
        .filter(|request| duplicated.contains(request.key()))
        .copied()
        .collect()
}
