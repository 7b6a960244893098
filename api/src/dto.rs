//! Wire types. Everything serializes camelCase to match the dashboard
//! client; skill maps round-trip in document order.

use entity::employee::{self, SkillMap};
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::error::{ApiError, FieldError};
use crate::insights::rollup::{DepartmentRollup, RosterSummary, SkillAggregate};
use crate::insights::status::Status;

/// Closed set of retention-risk labels. Assigned externally, never computed.
pub const RISK_LABELS: [&str; 3] = ["High Flight Risk", "Underutilized", "Needs Context"];

const MAX_NAME_CHARS: usize = 256;
const MAX_DEPARTMENT_CHARS: usize = 128;
const MAX_CAREER_GOALS_CHARS: usize = 500;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    pub id: Uuid,
    pub name: String,
    pub department: String,
    pub tenure: i32,
    pub level: i32,
    pub skills: SkillMap,
    pub risk: Option<String>,
    pub digital_literacy: i32,
    pub career_goals: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl From<employee::Model> for EmployeeDto {
    fn from(model: employee::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            department: model.department,
            tenure: model.tenure,
            level: model.level,
            skills: model.skills,
            risk: model.risk,
            digital_literacy: model.digital_literacy,
            career_goals: model.career_goals,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<&employee::Model> for EmployeeDto {
    fn from(model: &employee::Model) -> Self {
        model.clone().into()
    }
}

/// Partial update body for `PATCH /employees/{id}`. Absent fields are left
/// untouched; `risk` and `careerGoals` distinguish absent from explicit
/// null, which clears the column.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployee {
    pub name: Option<String>,
    pub department: Option<String>,
    pub tenure: Option<i32>,
    pub level: Option<i32>,
    pub skills: Option<SkillMap>,
    #[serde(default, deserialize_with = "double_option")]
    pub risk: Option<Option<String>>,
    pub digital_literacy: Option<i32>,
    #[serde(default, deserialize_with = "double_option")]
    pub career_goals: Option<Option<String>>,
}

fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl UpdateEmployee {
    /// Enforce the edit-boundary invariants before anything reaches the
    /// store. Collects every violation so the client gets the full list.
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut problems = Vec::new();

        if let Some(name) = &self.name {
            check_label(&mut problems, "name", name, MAX_NAME_CHARS);
        }
        if let Some(department) = &self.department {
            check_label(&mut problems, "department", department, MAX_DEPARTMENT_CHARS);
        }
        if let Some(tenure) = self.tenure {
            if tenure < 0 {
                problems.push(FieldError::new("tenure", "must not be negative"));
            }
        }
        if let Some(level) = self.level {
            check_rating(&mut problems, "level", level);
        }
        if let Some(value) = self.digital_literacy {
            check_rating(&mut problems, "digitalLiteracy", value);
        }
        if let Some(skills) = &self.skills {
            for (skill, value) in skills.iter() {
                if skill.trim().is_empty() {
                    problems.push(FieldError::new("skills", "skill names must not be blank"));
                }
                check_rating(&mut problems, format!("skills.{skill}"), value);
            }
        }
        if let Some(Some(risk)) = &self.risk {
            if !RISK_LABELS.contains(&risk.as_str()) {
                problems.push(FieldError::new(
                    "risk",
                    format!("must be one of: {}", RISK_LABELS.join(", ")),
                ));
            }
        }
        if let Some(Some(goals)) = &self.career_goals {
            if goals.chars().count() > MAX_CAREER_GOALS_CHARS {
                problems.push(FieldError::new(
                    "careerGoals",
                    format!("must be at most {MAX_CAREER_GOALS_CHARS} characters"),
                ));
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Validation(problems))
        }
    }
}

fn check_label(problems: &mut Vec<FieldError>, field: &str, value: &str, max: usize) {
    if value.trim().is_empty() {
        problems.push(FieldError::new(field, "must not be blank"));
    } else if value.chars().count() > max {
        problems.push(FieldError::new(
            field,
            format!("must be at most {max} characters"),
        ));
    }
}

fn check_rating(problems: &mut Vec<FieldError>, field: impl Into<String>, value: i32) {
    if !(1..=10).contains(&value) {
        problems.push(FieldError::new(field, "must be between 1 and 10"));
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterSummaryDto {
    pub total_employees: usize,
    pub at_risk: usize,
    pub wisdom_gap: usize,
    pub potential_pairings: usize,
    pub avg_skill_level: f64,
}

impl From<RosterSummary> for RosterSummaryDto {
    fn from(summary: RosterSummary) -> Self {
        Self {
            total_employees: summary.total_employees,
            at_risk: summary.at_risk,
            wisdom_gap: summary.wisdom_gap,
            potential_pairings: summary.potential_pairings,
            avg_skill_level: summary.avg_skill_level,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct HeatmapDto {
    pub totals: HeatmapTotalsDto,
    pub cells: Vec<HeatmapCellDto>,
}

#[derive(Clone, Debug, Serialize)]
pub struct HeatmapTotalsDto {
    pub red: usize,
    pub amber: usize,
    pub green: usize,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapCellDto {
    pub employee: EmployeeDto,
    pub status: Status,
    pub status_label: &'static str,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairingDto {
    pub senior: EmployeeDto,
    pub junior: EmployeeDto,
    pub connection_score: i32,
    pub skills_to_share: Vec<String>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorMatchDto {
    pub mentor: EmployeeDto,
    pub match_score: i32,
}

#[derive(Clone, Debug, Serialize)]
pub struct DepartmentRollupDto {
    pub department: String,
    pub headcount: usize,
    pub skills: Vec<SkillAggregateDto>,
}

impl From<DepartmentRollup<'_>> for DepartmentRollupDto {
    fn from(rollup: DepartmentRollup<'_>) -> Self {
        Self {
            department: rollup.department.to_string(),
            headcount: rollup.headcount,
            skills: rollup.skills.into_iter().map(SkillAggregateDto::from).collect(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillAggregateDto {
    pub skill: String,
    pub avg_value: f64,
    pub count: usize,
}

impl From<SkillAggregate> for SkillAggregateDto {
    fn from(aggregate: SkillAggregate) -> Self {
        Self {
            skill: aggregate.skill,
            avg_value: aggregate.avg_value,
            count: aggregate.count,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillHitDto {
    pub employee: EmployeeDto,
    pub matched_skills: Vec<String>,
}
