//! Idempotent starter roster, inserted on first boot.

use entity::employee::SkillMap;
use sea_orm::{ConnectionTrait, DbErr};

use crate::store::{self, NewEmployee};

/// Insert the demo roster unless the table already holds records. Returns
/// the number of rows inserted (0 on the no-op path).
pub async fn seed_roster(db: &impl ConnectionTrait) -> Result<usize, DbErr> {
    if store::count_employees(db).await? > 0 {
        return Ok(0);
    }
    let roster = starter_roster();
    let inserted = roster.len();
    for employee in roster {
        store::create_employee(db, employee).await?;
    }
    Ok(inserted)
}

fn starter_roster() -> Vec<NewEmployee> {
    vec![
        employee(
            "Robert",
            "Legacy Ops",
            18,
            3,
            [("Mechanical", 9), ("Precision", 9), ("IoT", 2)],
            Some("Underutilized"),
            2,
        ),
        employee(
            "Maya",
            "Automation",
            2,
            6,
            [("AI", 9), ("Python", 8), ("Domain_Wisdom", 3)],
            Some("Needs Context"),
            9,
        ),
        employee(
            "Elena",
            "Legacy Ops",
            22,
            4,
            [("QA", 10), ("Safety", 9)],
            Some("High Flight Risk"),
            3,
        ),
        employee(
            "James",
            "Digital Sys",
            1,
            4,
            [("Cloud", 8), ("Security", 7)],
            None,
            8,
        ),
        employee(
            "David",
            "Automation",
            4,
            5,
            [("Robotics", 8), ("Legacy_Mechanics", 6)],
            None,
            7,
        ),
        employee(
            "Sarah",
            "Digital Sys",
            3,
            3,
            [("Analytics", 7), ("UX", 6)],
            None,
            7,
        ),
        employee("Frank", "Legacy Ops", 15, 2, [("Tooling", 9)], None, 2),
        employee("Chloe", "Automation", 1, 3, [("Design", 8)], None, 8),
        employee("Tom", "Digital Sys", 8, 5, [("Cyber", 9)], None, 9),
        employee("Lisa", "Legacy Ops", 12, 3, [("Supply_Chain", 8)], None, 4),
    ]
}

fn employee<const N: usize>(
    name: &str,
    department: &str,
    tenure: i32,
    level: i32,
    skills: [(&str, i32); N],
    risk: Option<&str>,
    digital_literacy: i32,
) -> NewEmployee {
    NewEmployee {
        name: name.to_string(),
        department: department.to_string(),
        tenure,
        level,
        skills: SkillMap::from_iter(skills),
        risk: risk.map(str::to_string),
        digital_literacy,
        career_goals: None,
    }
}
