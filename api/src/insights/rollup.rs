use std::cmp::Ordering;

use entity::employee::Model;
use indexmap::IndexMap;

use crate::insights::pairing;
use crate::insights::status::{classify, Status};

#[derive(Clone, Debug, PartialEq)]
pub struct SkillAggregate {
    pub skill: String,
    /// Arithmetic mean of the values present, one decimal.
    pub avg_value: f64,
    /// Employees contributing a value for this skill.
    pub count: usize,
}

#[derive(Clone, Debug)]
pub struct DepartmentRollup<'a> {
    pub department: &'a str,
    pub headcount: usize,
    pub skills: Vec<SkillAggregate>,
}

/// Group the roster by department (first-seen order) and aggregate every
/// skill appearing in any member's map. Members lacking a skill do not
/// drag its mean down.
pub fn department_rollups(roster: &[Model]) -> Vec<DepartmentRollup<'_>> {
    let mut by_department: IndexMap<&str, Vec<&Model>> = IndexMap::new();
    for employee in roster {
        by_department
            .entry(employee.department.as_str())
            .or_default()
            .push(employee);
    }
    by_department
        .into_iter()
        .map(|(department, members)| DepartmentRollup {
            department,
            headcount: members.len(),
            skills: aggregate_skills(&members),
        })
        .collect()
}

/// Per-skill mean over the given members, sorted by descending mean.
/// Ties keep first-appearance order.
pub fn aggregate_skills(members: &[&Model]) -> Vec<SkillAggregate> {
    let mut totals: IndexMap<&str, (i32, usize)> = IndexMap::new();
    for member in members {
        for (skill, value) in member.skills.iter() {
            let entry = totals.entry(skill).or_insert((0, 0));
            entry.0 += value;
            entry.1 += 1;
        }
    }
    let mut aggregates: Vec<SkillAggregate> = totals
        .into_iter()
        .map(|(skill, (total, count))| SkillAggregate {
            skill: skill.to_string(),
            avg_value: round_one(f64::from(total) / count as f64),
            count,
        })
        .collect();
    aggregates.sort_by(|a, b| {
        b.avg_value
            .partial_cmp(&a.avg_value)
            .unwrap_or(Ordering::Equal)
    });
    aggregates
}

#[derive(Clone, Debug, PartialEq)]
pub struct RosterSummary {
    pub total_employees: usize,
    pub at_risk: usize,
    pub wisdom_gap: usize,
    /// min(#seniors, #juniors) under the pairing candidate rules.
    pub potential_pairings: usize,
    /// Mean of per-employee mean proficiency, one decimal. Employees with
    /// no recorded skills are skipped; an empty roster yields 0.
    pub avg_skill_level: f64,
}

pub fn roster_summary(roster: &[Model]) -> RosterSummary {
    let mut at_risk = 0;
    let mut wisdom_gap = 0;
    for employee in roster {
        match classify(employee) {
            Status::Red => at_risk += 1,
            Status::Amber => wisdom_gap += 1,
            Status::Green => {}
        }
    }

    let potential_pairings = pairing::seniors(roster)
        .len()
        .min(pairing::juniors(roster).len());

    let mut mean_sum = 0.0;
    let mut rated = 0usize;
    for employee in roster {
        if employee.skills.is_empty() {
            continue;
        }
        let total: i32 = employee.skills.iter().map(|(_, value)| value).sum();
        mean_sum += f64::from(total) / employee.skills.len() as f64;
        rated += 1;
    }
    let avg_skill_level = if rated == 0 {
        0.0
    } else {
        round_one(mean_sum / rated as f64)
    };

    RosterSummary {
        total_employees: roster.len(),
        at_risk,
        wisdom_gap,
        potential_pairings,
        avg_skill_level,
    }
}

fn round_one(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
