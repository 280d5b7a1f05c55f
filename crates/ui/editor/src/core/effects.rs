/*!
Effect & task model of the editor.

The reducer stays pure: it mutates `FormState` and returns `Vec<Effect>`.
The event loop interprets the effects; `Effect::Async(TaskKind)` is handed
to the `TaskExecutor`, whose completions come back as `InternalEvent`s and
are reduced by `reducer::reduce_internal_event`.
*/

use std::fmt;

use catalog::{Category, FeatureType, Id, SelectOption, Standard, TitledItem};

use crate::domain::{
    multi_select::CreateRequest,
    resource::{Generation, ResourceKind},
    validation::ProductSubmission,
};

/// Declarative instruction emitted by the reducer.
#[derive(Debug, Clone)]
pub enum Effect {
    /// Schedule an asynchronous task.
    Async(TaskKind),
    /// Log a message (info level).
    Log(String),
    /// The draft validated; show the produced object.
    Submitted(ProductSubmission),
}

impl Effect {
    pub fn log<T: Into<String>>(msg: T) -> Self {
        Effect::Log(msg.into())
    }
    pub fn async_task(kind: TaskKind) -> Self {
        Effect::Async(kind)
    }
}

/// Background work. Each variant carries everything the executor needs.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskKind {
    FetchCategories,
    FetchScoped {
        resource: ResourceKind,
        subcategory: Id,
        generation: Generation,
    },
    CreateOption(CreateRequest),
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskKind::FetchCategories => write!(f, "FetchCategories"),
            TaskKind::FetchScoped {
                resource,
                subcategory,
                generation,
            } => write!(f, "FetchScoped({resource}, subcategory={subcategory}, {generation})"),
            TaskKind::CreateOption(req) => {
                write!(f, "CreateOption({}, {:?})", req.target.identity(), req.text)
            }
        }
    }
}

/// Payload of a successful scoped fetch.
#[derive(Debug, Clone)]
pub enum ScopedData {
    FeatureTypes(Vec<FeatureType>),
    Labels(Vec<TitledItem>),
    UseCases(Vec<TitledItem>),
    Standards(Vec<Standard>),
}

impl ScopedData {
    pub fn kind(&self) -> ResourceKind {
        match self {
            ScopedData::FeatureTypes(_) => ResourceKind::FeatureTypes,
            ScopedData::Labels(_) => ResourceKind::Labels,
            ScopedData::UseCases(_) => ResourceKind::UseCases,
            ScopedData::Standards(_) => ResourceKind::Standards,
        }
    }
}

/// Outcome of a finished task.
#[derive(Debug, Clone)]
pub enum TaskResultKind {
    CategoriesLoaded(Vec<Category>),
    CategoriesFailed(String),
    ScopedLoaded {
        generation: Generation,
        data: ScopedData,
    },
    ScopedFailed {
        generation: Generation,
        resource: ResourceKind,
        error: String,
    },
    OptionCreated {
        request: CreateRequest,
        option: SelectOption,
    },
    OptionFailed {
        request: CreateRequest,
        error: String,
    },
}

/// Events the executor sends back to the loop.
#[derive(Debug, Clone)]
pub enum InternalEvent {
    TaskStarted { id: u64, label: String },
    TaskFinished { id: u64, result: TaskResultKind },
}
