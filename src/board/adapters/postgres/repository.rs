//! `PostgreSQL` gateway applying row-level deltas.

use super::{
    models::{NewProjectRow, NewTaskRow, ProjectRow, TaskRow, row_to_project},
    schema::{projects, tasks},
};
use crate::board::{
    domain::{BoardChange, Snapshot},
    ports::{GatewayResult, ProjectGateway, TransportError},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::Error as DieselError;
use std::collections::HashMap;

/// `PostgreSQL` connection pool type used by the board gateway.
pub type BoardPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed gateway.
///
/// Projects load newest first and tasks load oldest first; preferences are
/// never stored here.
#[derive(Debug, Clone)]
pub struct PostgresProjectGateway {
    pool: BoardPgPool,
}

impl PostgresProjectGateway {
    /// Creates a gateway from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: BoardPgPool) -> Self {
        Self { pool }
    }

    /// Builds a pool for `database_url` and wraps it in a gateway.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Network`] when the pool cannot be built.
    pub fn connect(database_url: &str, max_size: u32) -> GatewayResult<Self> {
        let manager = ConnectionManager::<PgConnection>::new(database_url);
        let pool = Pool::builder()
            .max_size(max_size)
            .build(manager)
            .map_err(TransportError::network)?;
        Ok(Self::new(pool))
    }

    async fn run_blocking<F, T>(&self, f: F) -> GatewayResult<T>
    where
        F: FnOnce(&mut PgConnection) -> GatewayResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TransportError::network)?;
            f(&mut connection)
        })
        .await
        .map_err(TransportError::network)?
    }
}

#[async_trait]
impl ProjectGateway for PostgresProjectGateway {
    async fn load(&self) -> GatewayResult<Snapshot> {
        self.run_blocking(|connection| {
            let project_rows = projects::table
                .order(projects::created_at.desc())
                .select(ProjectRow::as_select())
                .load::<ProjectRow>(connection)
                .map_err(TransportError::network)?;
            let task_rows = tasks::table
                .order(tasks::created_at.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TransportError::network)?;

            let mut tasks_by_project: HashMap<uuid::Uuid, Vec<TaskRow>> = HashMap::new();
            for row in task_rows {
                tasks_by_project.entry(row.project_id).or_default().push(row);
            }

            let loaded = project_rows
                .into_iter()
                .map(|row| {
                    let project_tasks = tasks_by_project.remove(&row.id).unwrap_or_default();
                    row_to_project(row, project_tasks)
                })
                .collect::<GatewayResult<Vec<_>>>()?;

            Ok(Snapshot {
                projects: loaded,
                preferences: None,
            })
        })
        .await
    }

    async fn save(&self, _snapshot: &Snapshot, change: &BoardChange) -> GatewayResult<()> {
        if matches!(change, BoardChange::PreferencesChanged(_)) {
            return Ok(());
        }
        let owned_change = change.clone();
        self.run_blocking(move |connection| {
            apply_change(connection, &owned_change).map_err(TransportError::network)
        })
        .await
    }
}

fn apply_change(connection: &mut PgConnection, change: &BoardChange) -> Result<(), DieselError> {
    match change {
        BoardChange::ProjectCreated(project) => {
            diesel::insert_into(projects::table)
                .values(&NewProjectRow::from_project(project))
                .execute(connection)?;
        }
        BoardChange::ProjectUpdated(project) => {
            diesel::update(projects::table.filter(projects::id.eq(project.id().into_inner())))
                .set((
                    projects::name.eq(project.name()),
                    projects::description.eq(project.description()),
                ))
                .execute(connection)?;
        }
        BoardChange::ProjectDeleted(project_id) => {
            let id = project_id.into_inner();
            connection.transaction::<_, DieselError, _>(|tx| {
                diesel::delete(tasks::table.filter(tasks::project_id.eq(id))).execute(tx)?;
                diesel::delete(projects::table.filter(projects::id.eq(id))).execute(tx)?;
                Ok(())
            })?;
        }
        BoardChange::TaskCreated { project_id, task } => {
            diesel::insert_into(tasks::table)
                .values(&NewTaskRow::from_task(*project_id, task))
                .execute(connection)?;
        }
        BoardChange::TaskUpdated { task, .. } => {
            diesel::update(tasks::table.filter(tasks::id.eq(task.id().into_inner())))
                .set((
                    tasks::title.eq(task.title()),
                    tasks::description.eq(task.description()),
                    tasks::status.eq(task.status().as_str()),
                    tasks::priority.eq(i16::from(task.priority().value())),
                ))
                .execute(connection)?;
        }
        BoardChange::TaskDeleted { task_id, .. } => {
            diesel::delete(tasks::table.filter(tasks::id.eq(task_id.into_inner())))
                .execute(connection)?;
        }
        BoardChange::TaskMoved {
            task_id, status, ..
        } => {
            diesel::update(tasks::table.filter(tasks::id.eq(task_id.into_inner())))
                .set(tasks::status.eq(status.as_str()))
                .execute(connection)?;
        }
        BoardChange::PreferencesChanged(_) => {}
    }
    Ok(())
}
