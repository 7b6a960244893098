use indexmap::IndexMap;
use sea_orm::entity::prelude::*;
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "employee")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(indexed)]
    pub department: String,
    pub tenure: i32,
    pub level: i32,
    #[sea_orm(column_type = "Json")]
    pub skills: SkillMap,
    pub risk: Option<String>,
    pub digital_literacy: i32,
    pub career_goals: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Skill name -> proficiency (1..=10). Backed by an `IndexMap` so the map
/// keeps its document order; the pairing heuristic ranks a senior's
/// shareable skills by that order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct SkillMap(pub IndexMap<String, i32>);

impl SkillMap {
    pub fn new(map: IndexMap<String, i32>) -> Self {
        Self(map)
    }

    /// Proficiency for `skill`, with 0 standing in for a skill the
    /// employee does not have.
    pub fn proficiency(&self, skill: &str) -> i32 {
        self.0.get(skill).copied().unwrap_or(0)
    }

    /// Highest proficiency in the map, `None` when the map is empty.
    pub fn peak(&self) -> Option<i32> {
        self.0.values().copied().max()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.0.iter().map(|(name, value)| (name.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, i32)> for SkillMap {
    fn from_iter<I: IntoIterator<Item = (S, i32)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(name, value)| (name.into(), value)).collect())
    }
}
