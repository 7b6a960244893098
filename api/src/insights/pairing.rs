use entity::employee::Model;

/// Knowledge-transfer pairings between long-tenured staff and promising
/// juniors from other departments.
pub const MAX_PAIRINGS: usize = 3;

const SENIOR_MIN_TENURE: i32 = 10;
const JUNIOR_MAX_TENURE: i32 = 4;
const JUNIOR_MIN_LEVEL: i32 = 4;
const SHARE_GAP_THRESHOLD: i32 = 3;
const MAX_SKILLS_TO_SHARE: usize = 2;
const TENURE_SATURATION_YEARS: f64 = 25.0;
const MAX_SCORE: i32 = 100;

#[derive(Clone, Debug)]
pub struct Pairing<'a> {
    pub senior: &'a Model,
    pub junior: &'a Model,
    pub connection_score: i32,
    pub skills_to_share: Vec<String>,
}

/// Mentoring-side candidates: tenure >= 10, longest tenure first.
pub fn seniors(roster: &[Model]) -> Vec<&Model> {
    let mut seniors: Vec<&Model> = roster
        .iter()
        .filter(|e| e.tenure >= SENIOR_MIN_TENURE)
        .collect();
    seniors.sort_by(|a, b| b.tenure.cmp(&a.tenure));
    seniors
}

/// Receiving-side candidates: short tenure but already at level 4+,
/// highest level first.
pub fn juniors(roster: &[Model]) -> Vec<&Model> {
    let mut juniors: Vec<&Model> = roster
        .iter()
        .filter(|e| e.tenure <= JUNIOR_MAX_TENURE && e.level >= JUNIOR_MIN_LEVEL)
        .collect();
    juniors.sort_by(|a, b| b.level.cmp(&a.level));
    juniors
}

/// Top pairings across departments. A pair only qualifies when the senior
/// holds at least one skill more than 3 points ahead of the junior; the
/// first two such skills (senior's map order) are the ones to share.
/// Ties keep enumeration order (seniors outer, juniors inner).
pub fn generate_pairings(roster: &[Model]) -> Vec<Pairing<'_>> {
    let seniors = seniors(roster);
    let juniors = juniors(roster);

    let mut pairings = Vec::new();
    for &senior in &seniors {
        for &junior in &juniors {
            if senior.department == junior.department {
                continue;
            }
            let skills_to_share: Vec<String> = senior
                .skills
                .iter()
                .filter(|(skill, value)| *value > junior.skills.proficiency(skill) + SHARE_GAP_THRESHOLD)
                .take(MAX_SKILLS_TO_SHARE)
                .map(|(skill, _)| skill.to_string())
                .collect();
            if skills_to_share.is_empty() {
                continue;
            }
            pairings.push(Pairing {
                senior,
                junior,
                connection_score: connection_score(senior, junior, &skills_to_share),
                skills_to_share,
            });
        }
    }

    pairings.sort_by(|a, b| b.connection_score.cmp(&a.connection_score));
    pairings.truncate(MAX_PAIRINGS);
    pairings
}

/// Half the score saturates with the senior's tenure at 25 years; the rest
/// rewards the proficiency gap on the shared skills. Clamped to 100.
fn connection_score(senior: &Model, junior: &Model, skills_to_share: &[String]) -> i32 {
    let tenure_weight = (f64::from(senior.tenure) / TENURE_SATURATION_YEARS).min(1.0) * 50.0;
    let gap: i32 = skills_to_share
        .iter()
        .map(|skill| senior.skills.proficiency(skill) - junior.skills.proficiency(skill))
        .sum();
    let raw = (tenure_weight + f64::from(gap * 5)).round() as i32;
    raw.min(MAX_SCORE)
}
