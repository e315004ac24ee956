//! The ViewModel injection processor.
//!
//! Given the declarations of one or more compilation passes, the processor
//! validates classes whose constructor carries `@ViewModelInject`, generates
//! one `<Name>_AssistedFactory` per valid class, and aggregates every
//! generated factory into a `ViewModelInject_<Module>` binding module rooted
//! at the single `@ViewModelModule` declaration. A final cross-pass check
//! verifies the root module actually includes the generated aggregation type.

pub mod discovery;
pub mod factory;
pub mod filer;
pub mod module;
pub mod processor;
pub mod synthesize;
pub mod validate;

pub use factory::factory_file;
pub use filer::{FsFiler, GeneratedFile};
pub use module::{AggregationDescriptor, RegistrationRoot, module_file, validate_module};
pub use processor::{PassOutcome, RootClaim, ViewModelInjectProcessor};
pub use synthesize::{FactoryKind, SynthesizedFactory, synthesize};
pub use validate::{InjectionTarget, validate_target};

/// Marker on the injected constructor.
pub const VIEW_MODEL_INJECT_ANNOTATION: &str = "ViewModelInject";
/// Marker on the single registration-root module.
pub const VIEW_MODEL_MODULE_ANNOTATION: &str = "ViewModelModule";
/// The container framework's module marker the root must also carry.
pub const MODULE_ANNOTATION: &str = "dagger.Module";

/// Base type every injected class must extend, directly or transitively.
pub const VIEW_MODEL_TYPE: &str = "androidx.lifecycle.ViewModel";
/// The state-bag type and the parameter name it must be declared under.
pub const SAVED_STATE_HANDLE_TYPE: &str = "androidx.lifecycle.SavedStateHandle";
pub const SAVED_STATE_HANDLE_NAME: &str = "savedStateHandle";
