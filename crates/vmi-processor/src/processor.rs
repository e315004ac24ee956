//! The multi-pass driver.
//!
//! The host calls `run_pass` once per compilation pass and `finalize` once
//! after the last pass. Only two registers survive between passes: the
//! claimed registration root and the cumulative list of synthesized targets;
//! the type index additionally retains every declaration for late
//! re-resolution.

use tracing::debug;

use vmi_javagen::AnnotationSpec;
use vmi_model::{ClassName, Diagnostic, PassInput, ProcessorOptions, TypeIndex};

use crate::MODULE_ANNOTATION;
use crate::discovery::{find_injection_candidates, find_module_candidates};
use crate::factory::factory_file;
use crate::filer::GeneratedFile;
use crate::module::{AggregationDescriptor, module_file, validate_module};
use crate::synthesize::synthesize;
use crate::validate::validate_target;

const GENERATED_ANNOTATION: &str = "javax.annotation.Generated";
const PROCESSOR_NAME: &str = "viewmodel.inject.processor.ViewModelInjectProcessor";
const PROJECT_URL: &str = "https://github.com/viewmodel-inject/viewmodel-inject";

const MULTIPLE_MODULES: &str = "Multiple @ViewModelModule-annotated modules found.";

/// State of the single registration root across passes.
///
/// A duplicate clears the claim through the `Conflicted` transition, so
/// neither declaration is treated as canonical afterwards; a root sighted
/// while conflicted claims afresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootClaim {
    Unclaimed,
    Claimed(ClassName),
    Conflicted,
}

/// Everything one pass produced.
#[derive(Debug, Clone, Default)]
pub struct PassOutcome {
    pub diagnostics: Vec<Diagnostic>,
    pub files: Vec<GeneratedFile>,
}

pub struct ViewModelInjectProcessor {
    options: ProcessorOptions,
    index: TypeIndex,
    root: RootClaim,
    /// Targets whose synthesis succeeded, in encounter order across passes.
    injected: Vec<ClassName>,
    module_written: bool,
}

impl ViewModelInjectProcessor {
    pub fn new(options: ProcessorOptions) -> Self {
        Self {
            options,
            index: TypeIndex::new(),
            root: RootClaim::Unclaimed,
            injected: Vec::new(),
            module_written: false,
        }
    }

    pub fn root_claim(&self) -> &RootClaim {
        &self.root
    }

    /// Process one compilation pass.
    ///
    /// Within the pass, every candidate is validated and synthesized before
    /// module aggregation runs, so the aggregation sees this pass's
    /// factories. A failing candidate never aborts its siblings.
    pub fn run_pass(&mut self, pass: &PassInput) -> PassOutcome {
        let mut outcome = PassOutcome::default();
        self.index.extend(pass.types.iter().cloned());

        let candidates = find_injection_candidates(&pass.types);
        debug!(candidates = candidates.len(), "discovered injection candidates");
        for candidate in candidates {
            let Some(target) = validate_target(candidate, &self.index, &mut outcome.diagnostics)
            else {
                continue;
            };
            let Some(factory) = synthesize(&target, &self.options, &mut outcome.diagnostics)
            else {
                continue;
            };
            let file = factory_file(&factory, self.generated_annotation().as_ref());
            outcome
                .files
                .push(GeneratedFile::from_java(&file, vec![factory.target.clone()]));
            if !self.injected.contains(&factory.target) {
                self.injected.push(factory.target.clone());
            }
        }

        self.process_modules(pass, &mut outcome);
        outcome
    }

    fn process_modules(&mut self, pass: &PassInput, outcome: &mut PassOutcome) {
        let modules = find_module_candidates(&pass.types);
        if modules.len() > 1 {
            for module in &modules {
                outcome
                    .diagnostics
                    .push(Diagnostic::error(MULTIPLE_MODULES, Some(module.name.clone())));
            }
            return;
        }
        let Some(module) = modules.first() else {
            return;
        };
        let Some(root) = validate_module(module, &mut outcome.diagnostics) else {
            return;
        };
        let name = root.declaration.name.clone();

        match self.root.clone() {
            RootClaim::Claimed(existing) if existing != name => {
                outcome
                    .diagnostics
                    .push(Diagnostic::error(MULTIPLE_MODULES, Some(existing)));
                outcome
                    .diagnostics
                    .push(Diagnostic::error(MULTIPLE_MODULES, Some(name)));
                self.root = RootClaim::Conflicted;
            }
            RootClaim::Claimed(_) => {
                // Same root re-sighted; the aggregation type already exists.
                debug!(module = %name, "registration root re-sighted, skipping re-emission");
            }
            RootClaim::Unclaimed | RootClaim::Conflicted => {
                self.root = RootClaim::Claimed(name.clone());
                if !self.module_written {
                    let descriptor = AggregationDescriptor {
                        module_name: name.clone(),
                        public: root.public,
                        injected: self.injected.clone(),
                    };
                    let file = module_file(&descriptor, self.generated_annotation().as_ref());
                    let mut originating = vec![name];
                    originating.extend(self.injected.iter().cloned());
                    outcome
                        .files
                        .push(GeneratedFile::from_java(&file, originating));
                    self.module_written = true;
                }
            }
        }
    }

    /// Run once after the host signals that no further passes will occur.
    ///
    /// The root is re-resolved through the index because its includes list
    /// may only have become resolvable after the aggregation type was first
    /// emitted.
    pub fn finalize(&self) -> Vec<Diagnostic> {
        let RootClaim::Claimed(name) = &self.root else {
            return Vec::new();
        };
        let Some(decl) = self.index.resolve(&name.reflection_name()) else {
            return Vec::new();
        };
        let expected = name.aggregation_module_name();
        // Earlier validation guarantees the container marker is present.
        let includes = decl
            .annotation(MODULE_ANNOTATION)
            .map(|annotation| annotation.includes.as_slice())
            .unwrap_or(&[]);
        let referenced = includes.iter().any(|entry| {
            *entry == expected.reflection_name()
                || *entry == expected.canonical_name()
                || entry == expected.simple_name()
        });
        if referenced {
            return Vec::new();
        }
        vec![Diagnostic::error(
            format!(
                "@ViewModelModule's @Module must include {}",
                expected.simple_name()
            ),
            Some(name.clone()),
        )]
    }

    fn generated_annotation(&self) -> Option<AnnotationSpec> {
        self.options.emit_generated_annotation.then(|| {
            AnnotationSpec::marker(GENERATED_ANNOTATION)
                .member("value", format!("\"{PROCESSOR_NAME}\""))
                .member("comments", format!("\"{PROJECT_URL}\""))
        })
    }
}
