use entity::employee::Model;

#[derive(Clone, Debug)]
pub struct SkillHit<'a> {
    pub employee: &'a Model,
    /// Matching skill names in the employee's own map order.
    pub matched_skills: Vec<String>,
}

/// Case-insensitive substring search over skill names, across every
/// department. Strongest match first; a blank query matches nothing.
pub fn search_skills<'a>(roster: &'a [Model], query: &str) -> Vec<SkillHit<'a>> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut hits: Vec<SkillHit<'a>> = roster
        .iter()
        .filter_map(|employee| {
            let matched_skills: Vec<String> = employee
                .skills
                .iter()
                .filter(|(skill, _)| skill.to_lowercase().contains(&needle))
                .map(|(skill, _)| skill.to_string())
                .collect();
            if matched_skills.is_empty() {
                None
            } else {
                Some(SkillHit { employee, matched_skills })
            }
        })
        .collect();
    hits.sort_by(|a, b| best_match(b).cmp(&best_match(a)));
    hits
}

fn best_match(hit: &SkillHit<'_>) -> i32 {
    hit.matched_skills
        .iter()
        .map(|skill| hit.employee.skills.proficiency(skill))
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::testutil::employee;

    #[test]
    fn matches_are_case_insensitive_substrings() {
        let roster = vec![
            employee("Maya", "Automation", 2, 6, &[("Python", 8), ("AI", 9)]),
            employee("Elena", "Legacy Ops", 22, 4, &[("QA", 10)]),
        ];
        let hits = search_skills(&roster, "py");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].employee.name, "Maya");
        assert_eq!(hits[0].matched_skills, ["Python"]);
    }

    #[test]
    fn strongest_matched_skill_ranks_first() {
        let roster = vec![
            employee("Weak", "Automation", 1, 1, &[("Security", 3)]),
            employee("Strong", "Digital Sys", 1, 1, &[("Security", 7)]),
        ];
        let hits = search_skills(&roster, "sec");
        let names: Vec<&str> = hits.iter().map(|h| h.employee.name.as_str()).collect();
        assert_eq!(names, ["Strong", "Weak"]);
    }

    #[test]
    fn blank_query_matches_nothing() {
        let roster = vec![employee("Maya", "Automation", 2, 6, &[("AI", 9)])];
        assert!(search_skills(&roster, "").is_empty());
        assert!(search_skills(&roster, "   ").is_empty());
    }
}
