use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use uuid::Uuid;

use crate::dto::{
    DepartmentRollupDto, EmployeeDto, HeatmapCellDto, HeatmapDto, HeatmapTotalsDto,
    MentorMatchDto, PairingDto, RosterSummaryDto, SkillHitDto, UpdateEmployee,
};
use crate::error::{ApiError, ApiResult};
use crate::insights::{mentorship, pairing, rollup, search, status};
use crate::store;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
}

impl AppState {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/employees", get(list_employees))
        .route(
            "/employees/{id}",
            get(get_employee).patch(update_employee),
        )
        .route("/insights/summary", get(summary))
        .route("/insights/heatmap", get(heatmap))
        .route("/insights/pairings", get(pairings))
        .route("/insights/mentors/{id}", get(mentors))
        .route("/insights/departments", get(departments))
        .route("/insights/skills", get(skill_search))
        .with_state(state)
}

async fn list_employees(State(state): State<AppState>) -> ApiResult<Json<Vec<EmployeeDto>>> {
    let roster = store::list_employees(state.db.as_ref()).await?;
    Ok(Json(roster.into_iter().map(EmployeeDto::from).collect()))
}

async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<EmployeeDto>> {
    let id = parse_employee_id(&id)?;
    let employee = store::find_employee(state.db.as_ref(), id)
        .await?
        .ok_or(ApiError::NotFound("Employee"))?;
    Ok(Json(employee.into()))
}

async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> ApiResult<Json<EmployeeDto>> {
    let id = parse_employee_id(&id)?;
    // Deserialize by hand so a malformed body surfaces as a 400 with
    // detail instead of the extractor's default rejection.
    let changes: UpdateEmployee = serde_json::from_value(body)
        .map_err(|err| ApiError::validation("body", err.to_string()))?;
    changes.validate()?;
    let updated = store::update_employee(state.db.as_ref(), id, changes)
        .await?
        .ok_or(ApiError::NotFound("Employee"))?;
    Ok(Json(updated.into()))
}

async fn summary(State(state): State<AppState>) -> ApiResult<Json<RosterSummaryDto>> {
    let roster = store::list_employees(state.db.as_ref()).await?;
    Ok(Json(rollup::roster_summary(&roster).into()))
}

async fn heatmap(State(state): State<AppState>) -> ApiResult<Json<HeatmapDto>> {
    let roster = store::list_employees(state.db.as_ref()).await?;
    let mut totals = HeatmapTotalsDto { red: 0, amber: 0, green: 0 };
    let cells = roster
        .iter()
        .map(|employee| {
            let status = status::classify(employee);
            match status {
                status::Status::Red => totals.red += 1,
                status::Status::Amber => totals.amber += 1,
                status::Status::Green => totals.green += 1,
            }
            HeatmapCellDto {
                employee: employee.into(),
                status,
                status_label: status.label(),
            }
        })
        .collect();
    Ok(Json(HeatmapDto { totals, cells }))
}

async fn pairings(State(state): State<AppState>) -> ApiResult<Json<Vec<PairingDto>>> {
    let roster = store::list_employees(state.db.as_ref()).await?;
    let pairings = pairing::generate_pairings(&roster)
        .into_iter()
        .map(|pairing| PairingDto {
            senior: pairing.senior.into(),
            junior: pairing.junior.into(),
            connection_score: pairing.connection_score,
            skills_to_share: pairing.skills_to_share,
        })
        .collect();
    Ok(Json(pairings))
}

async fn mentors(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<MentorMatchDto>>> {
    let id = parse_employee_id(&id)?;
    let roster = store::list_employees(state.db.as_ref()).await?;
    let subject = roster
        .iter()
        .find(|employee| employee.id == id)
        .ok_or(ApiError::NotFound("Employee"))?;
    let matches = mentorship::recommend_mentors(subject, &roster)
        .into_iter()
        .map(|m| MentorMatchDto {
            mentor: m.mentor.into(),
            match_score: m.match_score,
        })
        .collect();
    Ok(Json(matches))
}

async fn departments(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<DepartmentRollupDto>>> {
    let roster = store::list_employees(state.db.as_ref()).await?;
    let rollups = rollup::department_rollups(&roster)
        .into_iter()
        .map(DepartmentRollupDto::from)
        .collect();
    Ok(Json(rollups))
}

#[derive(Debug, Deserialize)]
struct SkillSearchParams {
    #[serde(default)]
    q: String,
}

async fn skill_search(
    State(state): State<AppState>,
    Query(params): Query<SkillSearchParams>,
) -> ApiResult<Json<Vec<SkillHitDto>>> {
    let roster = store::list_employees(state.db.as_ref()).await?;
    let hits = search::search_skills(&roster, &params.q)
        .into_iter()
        .map(|hit| SkillHitDto {
            employee: hit.employee.into(),
            matched_skills: hit.matched_skills,
        })
        .collect();
    Ok(Json(hits))
}

fn parse_employee_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::validation("id", "must be a valid UUID"))
}
