//! Request handlers.
//!
//! Each handler runs its registry work synchronously under the shared lock
//! and converts the outcome into a JSON response.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use mockable::Clock;

use super::{
    SharedRegistry,
    dto::{
        CreateTaskRequest, ListQuery, ListSort, PriorityInput, SetDueDateRequest,
        SetPriorityRequest, TaskResponse, UpdateTaskRequest,
    },
    error::ApiError,
};
use crate::task::{
    domain::{Task, TaskId, parse_due_date},
    ports::TaskStorage,
    services::{TaskRegistry, TaskStats, sort_by_due_date, sort_by_priority},
};

type ApiResult<T> = Result<T, ApiError>;

fn with_registry<S, C, T>(
    registry: &SharedRegistry<S, C>,
    operation: impl FnOnce(&mut TaskRegistry<S, C>) -> ApiResult<T>,
) -> ApiResult<T>
where
    S: TaskStorage,
    C: Clock + Send + Sync,
{
    let mut guard = registry.lock().map_err(|_| ApiError::Unavailable)?;
    operation(&mut guard)
}

fn task_id(path: Result<Path<String>, PathRejection>) -> ApiResult<TaskId> {
    let Path(raw) = path.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    raw.parse::<TaskId>().map_err(ApiError::from)
}

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

fn respond<S, C>(registry: &TaskRegistry<S, C>, id: TaskId) -> ApiResult<TaskResponse>
where
    S: TaskStorage,
    C: Clock + Send + Sync,
{
    let task = registry.get(id)?;
    Ok(TaskResponse {
        task: task.clone(),
        is_overdue: registry.is_overdue(task),
    })
}

/// `GET /tasks`
pub async fn list_tasks<S, C>(
    State(shared): State<SharedRegistry<S, C>>,
    params: Result<Query<ListQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<TaskResponse>>>
where
    S: TaskStorage,
    C: Clock + Send + Sync,
{
    let Query(query) = params.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    with_registry(&shared, |registry| {
        let tasks = match (query.completed.as_deref(), query.overdue.as_deref()) {
            (Some("true"), _) => registry.list_completed(),
            (Some("false"), _) => registry.list_pending(),
            (_, Some("true")) => registry.list_overdue(),
            _ => registry.list_all(),
        };
        let ordered: Vec<Task> = match query.sort {
            Some(ListSort::Priority) => sort_by_priority(&tasks),
            Some(ListSort::DueDate) => sort_by_due_date(&tasks),
            None => tasks,
        };
        Ok(Json(
            ordered
                .into_iter()
                .map(|task| TaskResponse {
                    is_overdue: registry.is_overdue(&task),
                    task,
                })
                .collect(),
        ))
    })
}

/// `GET /tasks/{id}`
pub async fn get_task<S, C>(
    State(shared): State<SharedRegistry<S, C>>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<TaskResponse>>
where
    S: TaskStorage,
    C: Clock + Send + Sync,
{
    let id = task_id(path)?;
    with_registry(&shared, |registry| respond(registry, id).map(Json))
}

/// `POST /tasks`
pub async fn create_task<S, C>(
    State(shared): State<SharedRegistry<S, C>>,
    payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<TaskResponse>)>
where
    S: TaskStorage,
    C: Clock + Send + Sync,
{
    let request = body(payload)?;
    let due_date = request
        .due_date
        .as_deref()
        .map(parse_due_date)
        .transpose()?
        .flatten();
    let priority = request
        .priority
        .as_ref()
        .map(PriorityInput::resolve)
        .transpose()?;

    with_registry(&shared, |registry| {
        let id = registry.add(&request.title, &request.description)?.id();
        if due_date.is_some() {
            registry.set_due_date(id, due_date)?;
        }
        if let Some(level) = priority {
            registry.set_priority(id, i64::from(level.value()))?;
        }
        Ok((StatusCode::CREATED, Json(respond(registry, id)?)))
    })
}

/// `PUT /tasks/{id}`
pub async fn update_task<S, C>(
    State(shared): State<SharedRegistry<S, C>>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<UpdateTaskRequest>, JsonRejection>,
) -> ApiResult<Json<TaskResponse>>
where
    S: TaskStorage,
    C: Clock + Send + Sync,
{
    let id = task_id(path)?;
    let request = body(payload)?;
    with_registry(&shared, |registry| {
        registry.update(id, &request.title, &request.description)?;
        respond(registry, id).map(Json)
    })
}

/// `DELETE /tasks/{id}`
pub async fn delete_task<S, C>(
    State(shared): State<SharedRegistry<S, C>>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<StatusCode>
where
    S: TaskStorage,
    C: Clock + Send + Sync,
{
    let id = task_id(path)?;
    with_registry(&shared, |registry| {
        registry.delete(id)?;
        Ok(StatusCode::NO_CONTENT)
    })
}

/// `PATCH /tasks/{id}/complete`
pub async fn complete_task<S, C>(
    State(shared): State<SharedRegistry<S, C>>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<TaskResponse>>
where
    S: TaskStorage,
    C: Clock + Send + Sync,
{
    let id = task_id(path)?;
    with_registry(&shared, |registry| {
        registry.mark_complete(id)?;
        respond(registry, id).map(Json)
    })
}

/// `PATCH /tasks/{id}/uncomplete`
pub async fn uncomplete_task<S, C>(
    State(shared): State<SharedRegistry<S, C>>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<TaskResponse>>
where
    S: TaskStorage,
    C: Clock + Send + Sync,
{
    let id = task_id(path)?;
    with_registry(&shared, |registry| {
        registry.mark_incomplete(id)?;
        respond(registry, id).map(Json)
    })
}

/// `PATCH /tasks/{id}/due-date`
pub async fn set_due_date<S, C>(
    State(shared): State<SharedRegistry<S, C>>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<SetDueDateRequest>, JsonRejection>,
) -> ApiResult<Json<TaskResponse>>
where
    S: TaskStorage,
    C: Clock + Send + Sync,
{
    let id = task_id(path)?;
    let due_date = parse_due_date(&body(payload)?.due_date)?;
    with_registry(&shared, |registry| {
        registry.set_due_date(id, due_date)?;
        respond(registry, id).map(Json)
    })
}

/// `PATCH /tasks/{id}/priority`
pub async fn set_priority<S, C>(
    State(shared): State<SharedRegistry<S, C>>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<SetPriorityRequest>, JsonRejection>,
) -> ApiResult<Json<TaskResponse>>
where
    S: TaskStorage,
    C: Clock + Send + Sync,
{
    let id = task_id(path)?;
    let priority = body(payload)?.priority.resolve()?;
    with_registry(&shared, |registry| {
        registry.set_priority(id, i64::from(priority.value()))?;
        respond(registry, id).map(Json)
    })
}

/// `GET /stats`
pub async fn stats<S, C>(
    State(shared): State<SharedRegistry<S, C>>,
) -> ApiResult<Json<TaskStats>>
where
    S: TaskStorage,
    C: Clock + Send + Sync,
{
    with_registry(&shared, |registry| Ok(Json(registry.stats())))
}
