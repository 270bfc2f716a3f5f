//! Application state store for the kanban board.
//!
//! The store is the single in-memory source of truth. Every command applies
//! its mutation synchronously, notifies subscribers, and then queues the
//! change for a background writer that nobody awaits. The writer hands
//! changes to the gateway one at a time in the order they were made.
//! Gateway failures are logged and swallowed: the in-memory state stays
//! authoritative until the next successful save or a full reload.
//!
//! Commands are plain functions and may be called from threads outside the
//! async runtime. The writer is spawned on the runtime that was current when
//! the store was created, or on the one given to
//! [`BoardStore::with_runtime`].

use crate::board::{
    domain::{
        AccentColor, BoardChange, MoveOutcome, NewTask, Preferences, Project, ProjectId, Snapshot,
        Task, TaskDrop, TaskId, TaskStatus, TaskUpdate, Theme,
    },
    ports::{PreferenceStore, ProjectGateway},
};
use mockable::Clock;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::{mpsc, oneshot, watch};

/// Work handed to the background writer.
enum PersistCommand {
    Save {
        snapshot: Snapshot,
        change: BoardChange,
    },
    Flush(oneshot::Sender<()>),
}

/// Owned state container exposing the board command interface.
pub struct BoardStore<C>
where
    C: Clock + Send + Sync,
{
    projects: Vec<Project>,
    preferences: Preferences,
    gateway: Arc<dyn ProjectGateway>,
    preference_store: Arc<dyn PreferenceStore>,
    clock: Arc<C>,
    mirror_preferences: bool,
    runtime: Option<Handle>,
    writer: Option<mpsc::UnboundedSender<PersistCommand>>,
    revision: watch::Sender<u64>,
}

impl<C> BoardStore<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty store.
    ///
    /// Preferences are read from `preference_store`; a read failure is logged
    /// and the defaults are used. The runtime current at this point, if any,
    /// runs the background writer.
    #[must_use]
    pub fn new(
        gateway: Arc<dyn ProjectGateway>,
        preference_store: Arc<dyn PreferenceStore>,
        clock: Arc<C>,
    ) -> Self {
        let preferences = match preference_store.load() {
            Ok(stored) => stored.unwrap_or_default(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to read stored preferences, using defaults");
                Preferences::default()
            }
        };
        let (revision, _) = watch::channel(0);
        Self {
            projects: Vec::new(),
            preferences,
            gateway,
            preference_store,
            clock,
            mirror_preferences: false,
            runtime: Handle::try_current().ok(),
            writer: None,
            revision,
        }
    }

    /// Mirrors preference changes to the remote gateway as well as the local
    /// slot, and adopts remote preferences on [`Self::fetch_all`].
    #[must_use]
    pub const fn with_preference_mirroring(mut self, enabled: bool) -> Self {
        self.mirror_preferences = enabled;
        self
    }

    /// Runs the background writer on `runtime`.
    ///
    /// Needed when the store is created outside any runtime context.
    #[must_use]
    pub fn with_runtime(mut self, runtime: Handle) -> Self {
        self.runtime = Some(runtime);
        self
    }

    /// Returns every project in display order.
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Returns the project with the given identifier.
    #[must_use]
    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id() == id)
    }

    /// Returns the current preferences.
    #[must_use]
    pub const fn preferences(&self) -> Preferences {
        self.preferences
    }

    /// Returns a receiver whose value increases after every state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    /// Returns the state handed to the gateway on save.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            projects: self.projects.clone(),
            preferences: self.mirror_preferences.then_some(self.preferences),
        }
    }

    /// Replaces every project with the gateway's contents.
    ///
    /// Queued saves are written first so the reload observes them. On
    /// failure the current state is kept and the error is logged.
    pub async fn fetch_all(&mut self) {
        self.flush().await;
        let snapshot = match self.gateway.load().await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                tracing::warn!(error = %err, "failed to fetch board, keeping current state");
                return;
            }
        };
        tracing::info!(projects = snapshot.projects.len(), "board fetched");
        self.projects = snapshot.projects;
        if self.mirror_preferences
            && let Some(remote) = snapshot.preferences
        {
            self.preferences = remote;
            self.write_local_preferences();
        }
        self.notify();
    }

    /// Appends a new, empty project.
    pub fn create_project(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> ProjectId {
        let project = Project::new(name, description, &*self.clock);
        let id = project.id();
        self.projects.push(project.clone());
        self.commit(BoardChange::ProjectCreated(project));
        id
    }

    /// Replaces a project's name and description.
    ///
    /// Returns `false`, without persisting anything, when the project does
    /// not exist.
    pub fn update_project(
        &mut self,
        id: ProjectId,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> bool {
        let Some(project) = self.project_mut(id) else {
            tracing::debug!(project_id = %id, "update for unknown project ignored");
            return false;
        };
        project.rename(name, description);
        let updated = project.clone();
        self.commit(BoardChange::ProjectUpdated(updated));
        true
    }

    /// Removes a project together with all of its tasks.
    pub fn delete_project(&mut self, id: ProjectId) -> bool {
        let Some(position) = self.projects.iter().position(|project| project.id() == id) else {
            tracing::debug!(project_id = %id, "delete for unknown project ignored");
            return false;
        };
        self.projects.remove(position);
        self.commit(BoardChange::ProjectDeleted(id));
        true
    }

    /// Appends a new task to the end of a project's flat sequence.
    ///
    /// Returns `None` when the project does not exist.
    pub fn create_task(&mut self, project_id: ProjectId, request: NewTask) -> Option<TaskId> {
        let task = Task::new(request, &*self.clock);
        let task_id = task.id();
        let Some(project) = self.project_mut(project_id) else {
            tracing::debug!(project_id = %project_id, "task for unknown project ignored");
            return None;
        };
        project.push_task(task.clone());
        self.commit(BoardChange::TaskCreated { project_id, task });
        Some(task_id)
    }

    /// Merges the supplied fields into a task.
    pub fn update_task(&mut self, project_id: ProjectId, task_id: TaskId, update: &TaskUpdate) -> bool {
        let updated = self
            .project_mut(project_id)
            .and_then(|project| project.update_task(task_id, update))
            .cloned();
        let Some(task) = updated else {
            tracing::debug!(project_id = %project_id, task_id = %task_id, "update for unknown task ignored");
            return false;
        };
        self.commit(BoardChange::TaskUpdated { project_id, task });
        true
    }

    /// Removes a task from its project.
    pub fn delete_task(&mut self, project_id: ProjectId, task_id: TaskId) -> bool {
        let removed = self
            .project_mut(project_id)
            .and_then(|project| project.remove_task(task_id));
        if removed.is_none() {
            tracing::debug!(project_id = %project_id, task_id = %task_id, "delete for unknown task ignored");
            return false;
        }
        self.commit(BoardChange::TaskDeleted {
            project_id,
            task_id,
        });
        true
    }

    /// Moves a task to `new_index` of the `new_status` column.
    ///
    /// Returns `false` when the project or task is unknown or the move
    /// leaves the board as it was; nothing is persisted in those cases.
    pub fn move_task(
        &mut self,
        project_id: ProjectId,
        task_id: TaskId,
        new_status: TaskStatus,
        new_index: usize,
    ) -> bool {
        let outcome = self.project_mut(project_id).map_or(MoveOutcome::TaskNotFound, |project| {
            project.move_task(task_id, new_status, new_index)
        });
        match outcome {
            MoveOutcome::Moved => {
                self.commit(BoardChange::TaskMoved {
                    project_id,
                    task_id,
                    status: new_status,
                });
                true
            }
            MoveOutcome::Unchanged => false,
            MoveOutcome::TaskNotFound => {
                tracing::debug!(project_id = %project_id, task_id = %task_id, "move for unknown task ignored");
                false
            }
        }
    }

    /// Applies a drag result reported by the view layer.
    ///
    /// Drops outside any column and drops onto the starting slot are ignored.
    pub fn apply_drop(&mut self, project_id: ProjectId, task_drop: &TaskDrop) -> bool {
        match task_drop.destination {
            Some(destination) if !task_drop.is_noop() => self.move_task(
                project_id,
                task_drop.task_id,
                destination.status,
                destination.index,
            ),
            _ => false,
        }
    }

    /// Flips between light and dark and returns the new theme.
    pub fn toggle_theme(&mut self) -> Theme {
        self.preferences.theme = self.preferences.theme.toggled();
        self.commit_preferences();
        self.preferences.theme
    }

    /// Sets the accent colour.
    pub fn set_accent_color(&mut self, color: AccentColor) {
        self.preferences.accent_color = color;
        self.commit_preferences();
    }

    /// Waits until every change queued so far has been handed to the
    /// gateway.
    pub async fn flush(&mut self) {
        let Some(writer) = &self.writer else {
            return;
        };
        let (done, finished) = oneshot::channel();
        if writer.send(PersistCommand::Flush(done)).is_err() || finished.await.is_err() {
            tracing::error!("persistence writer stopped before draining its queue");
            self.writer = None;
        }
    }

    fn project_mut(&mut self, id: ProjectId) -> Option<&mut Project> {
        self.projects.iter_mut().find(|project| project.id() == id)
    }

    fn notify(&self) {
        self.revision.send_modify(|revision| *revision = revision.wrapping_add(1));
    }

    fn commit(&mut self, change: BoardChange) {
        self.notify();
        self.persist(change);
    }

    fn commit_preferences(&mut self) {
        self.write_local_preferences();
        self.notify();
        if self.mirror_preferences {
            self.persist(BoardChange::PreferencesChanged(self.preferences));
        }
    }

    fn write_local_preferences(&self) {
        if let Err(err) = self.preference_store.save(&self.preferences) {
            tracing::warn!(error = %err, "failed to store preferences locally");
        }
    }

    fn persist(&mut self, change: BoardChange) {
        let command = PersistCommand::Save {
            snapshot: self.snapshot(),
            change,
        };
        let command = match &self.writer {
            Some(writer) => match writer.send(command) {
                Ok(()) => return,
                Err(mpsc::error::SendError(unsent)) => {
                    tracing::error!("persistence writer stopped, starting a new one");
                    unsent
                }
            },
            None => command,
        };
        let Some(writer) = self.spawn_writer() else {
            tracing::error!("no async runtime available, board change not persisted");
            return;
        };
        if writer.send(command).is_err() {
            tracing::error!("persistence writer rejected its first change");
        }
        self.writer = Some(writer);
    }

    fn spawn_writer(&self) -> Option<mpsc::UnboundedSender<PersistCommand>> {
        let runtime = self
            .runtime
            .clone()
            .or_else(|| Handle::try_current().ok())?;
        let (sender, receiver) = mpsc::unbounded_channel();
        runtime.spawn(run_writer(Arc::clone(&self.gateway), receiver));
        Some(sender)
    }
}

/// Drains queued commands in order, one gateway call at a time.
async fn run_writer(
    gateway: Arc<dyn ProjectGateway>,
    mut receiver: mpsc::UnboundedReceiver<PersistCommand>,
) {
    while let Some(command) = receiver.recv().await {
        match command {
            PersistCommand::Save { snapshot, change } => {
                match gateway.save(&snapshot, &change).await {
                    Ok(()) => tracing::debug!(change = change.kind(), "board change persisted"),
                    Err(err) => tracing::warn!(
                        change = change.kind(),
                        error = %err,
                        "failed to persist board change"
                    ),
                }
            }
            PersistCommand::Flush(done) => {
                // The waiting caller may already be gone.
                if done.send(()).is_err() {
                    tracing::debug!("flush waiter dropped");
                }
            }
        }
    }
}
