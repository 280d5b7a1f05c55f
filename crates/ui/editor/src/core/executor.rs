/*!
Task executor.

Turns the reducer's declarative `Effect::Async(TaskKind)` into catalog API
calls. The loop calls `spawn(kind)`; a single worker receives dispatches over
an unbounded channel and runs each one on its own tokio task, so the four
scoped fetches of a subcategory selection proceed in parallel and may finish
in any order.

Every dispatch reports back through the internal event channel:
- `InternalEvent::TaskStarted { id, label }` before the call
- `InternalEvent::TaskFinished { id, result }` once it resolved

Failures are never raised here. They are converted into the `*Failed`
variants of `TaskResultKind` and the reducer decides what to show.
Pending dispatches are dropped on shutdown.
*/

use std::sync::atomic::{AtomicU64, Ordering};

use catalog::ApiClient;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::core::effects::{InternalEvent, ScopedData, TaskKind, TaskResultKind};
use crate::domain::resource::ResourceKind;

/// Monotonic task identifier type.
pub type TaskId = u64;

/// Handle for scheduling background tasks. Cloning only clones the sender.
#[derive(Clone)]
pub struct TaskExecutor {
    tx: mpsc::UnboundedSender<Dispatch>,
}

struct Dispatch {
    id: TaskId,
    kind: TaskKind,
}

impl TaskExecutor {
    /// Create the executor and spawn its worker loop. Requires a tokio runtime.
    pub fn new(client: ApiClient, internal_tx: mpsc::UnboundedSender<InternalEvent>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel::<Dispatch>();
        Worker {
            rx,
            client,
            internal_tx,
        }
        .spawn();
        Self { tx }
    }

    /// Schedule a task and return its id.
    pub fn spawn(&self, kind: TaskKind) -> TaskId {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);
        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        if let Err(e) = self.tx.send(Dispatch { id, kind }) {
            warn!("TaskExecutor channel closed; failed to schedule task: {e}");
        }
        id
    }
}

struct Worker {
    rx: mpsc::UnboundedReceiver<Dispatch>,
    client: ApiClient,
    internal_tx: mpsc::UnboundedSender<InternalEvent>,
}

impl Worker {
    fn spawn(mut self) {
        tokio::spawn(async move {
            while let Some(dispatch) = self.rx.recv().await {
                let client = self.client.clone();
                let tx = self.internal_tx.clone();
                tokio::spawn(run(client, tx, dispatch));
            }
            info!("TaskExecutor worker stopped (channel closed)");
        });
    }
}

async fn run(client: ApiClient, tx: mpsc::UnboundedSender<InternalEvent>, dispatch: Dispatch) {
    let Dispatch { id, kind } = dispatch;
    let label = kind.to_string();
    debug!("[task:{id}] started {label}");
    let _ = tx.send(InternalEvent::TaskStarted {
        id,
        label: label.clone(),
    });

    let result = execute(&client, kind).await;
    match &result {
        TaskResultKind::CategoriesFailed(error)
        | TaskResultKind::ScopedFailed { error, .. }
        | TaskResultKind::OptionFailed { error, .. } => {
            warn!("[task:{id}] {label} failed: {error}")
        }
        _ => info!("[task:{id}] {label} finished"),
    }

    if tx.send(InternalEvent::TaskFinished { id, result }).is_err() {
        debug!("[task:{id}] loop gone; result dropped");
    }
}

async fn execute(client: &ApiClient, kind: TaskKind) -> TaskResultKind {
    match kind {
        TaskKind::FetchCategories => match client.categories().await {
            Ok(categories) => TaskResultKind::CategoriesLoaded(categories),
            Err(e) => TaskResultKind::CategoriesFailed(e.to_string()),
        },
        TaskKind::FetchScoped {
            resource,
            subcategory,
            generation,
        } => {
            let data = match resource {
                ResourceKind::FeatureTypes => client
                    .feature_types(subcategory)
                    .await
                    .map(ScopedData::FeatureTypes),
                ResourceKind::Labels => client.labels(subcategory).await.map(ScopedData::Labels),
                ResourceKind::UseCases => {
                    client.use_cases(subcategory).await.map(ScopedData::UseCases)
                }
                ResourceKind::Standards => {
                    client.standards(subcategory).await.map(ScopedData::Standards)
                }
            };
            match data {
                Ok(data) => TaskResultKind::ScopedLoaded { generation, data },
                Err(e) => TaskResultKind::ScopedFailed {
                    generation,
                    resource,
                    error: e.to_string(),
                },
            }
        }
        TaskKind::CreateOption(request) => {
            match client.create_option(&request.target, &request.text).await {
                Ok(option) => TaskResultKind::OptionCreated { request, option },
                Err(e) => TaskResultKind::OptionFailed {
                    request,
                    error: e.to_string(),
                },
            }
        }
    }
}
