//! CRUD over the `employee` table. Pairing and matching are never
//! persisted; every derived view works from a fresh `list_employees`
//! snapshot.

use chrono::Utc;
use entity::employee::{self, SkillMap};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
};
use uuid::Uuid;

use crate::dto::UpdateEmployee;

#[derive(Clone, Debug)]
pub struct NewEmployee {
    pub name: String,
    pub department: String,
    pub tenure: i32,
    pub level: i32,
    pub skills: SkillMap,
    pub risk: Option<String>,
    pub digital_literacy: i32,
    pub career_goals: Option<String>,
}

pub async fn list_employees(db: &impl ConnectionTrait) -> Result<Vec<employee::Model>, DbErr> {
    employee::Entity::find().all(db).await
}

pub async fn find_employee(
    db: &impl ConnectionTrait,
    id: Uuid,
) -> Result<Option<employee::Model>, DbErr> {
    employee::Entity::find_by_id(id).one(db).await
}

pub async fn count_employees(db: &impl ConnectionTrait) -> Result<u64, DbErr> {
    employee::Entity::find().count(db).await
}

pub async fn create_employee(
    db: &impl ConnectionTrait,
    new: NewEmployee,
) -> Result<employee::Model, DbErr> {
    let now = Utc::now();
    employee::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(new.name),
        department: Set(new.department),
        tenure: Set(new.tenure),
        level: Set(new.level),
        skills: Set(new.skills),
        risk: Set(new.risk),
        digital_literacy: Set(new.digital_literacy),
        career_goals: Set(new.career_goals),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(db)
    .await
}

/// Merge only the supplied fields into the stored record. Returns `None`
/// when the id is unknown; last write wins on concurrent edits.
pub async fn update_employee(
    db: &impl ConnectionTrait,
    id: Uuid,
    changes: UpdateEmployee,
) -> Result<Option<employee::Model>, DbErr> {
    let Some(existing) = employee::Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    let mut active: employee::ActiveModel = existing.into();
    if let Some(name) = changes.name {
        active.name = Set(name);
    }
    if let Some(department) = changes.department {
        active.department = Set(department);
    }
    if let Some(tenure) = changes.tenure {
        active.tenure = Set(tenure);
    }
    if let Some(level) = changes.level {
        active.level = Set(level);
    }
    if let Some(skills) = changes.skills {
        active.skills = Set(skills);
    }
    if let Some(risk) = changes.risk {
        active.risk = Set(risk);
    }
    if let Some(value) = changes.digital_literacy {
        active.digital_literacy = Set(value);
    }
    if let Some(goals) = changes.career_goals {
        active.career_goals = Set(goals);
    }
    active.updated_at = Set(Utc::now().into());
    active.update(db).await.map(Some)
}

/// Unused by the HTTP surface, kept for parity with the store contract.
pub async fn delete_employee(db: &impl ConnectionTrait, id: Uuid) -> Result<bool, DbErr> {
    let result = employee::Entity::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}
