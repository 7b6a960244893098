use entity::employee::Model;

/// Reverse mentorship: Automation leads coach the rest of the org on
/// digital skills.
pub const MENTOR_DEPARTMENT: &str = "Automation";
pub const MAX_MATCHES: usize = 3;

const MENTOR_MIN_LEVEL: i32 = 5;
const TENURE_WEIGHT: f64 = 0.4;
const GAP_WEIGHT: f64 = 0.6;

/// The digital skills a mentor can close a gap on. Anything outside this
/// list never contributes to the match score.
pub const DIGITAL_SKILLS: [&str; 8] = [
    "AI",
    "Python",
    "Cloud",
    "Security",
    "Analytics",
    "Robotics",
    "Cyber",
    "Design",
];

#[derive(Clone, Debug)]
pub struct MentorMatch<'a> {
    pub mentor: &'a Model,
    pub match_score: i32,
}

/// Weighted blend of tenure distance (cross-generation pairings score
/// higher) and the mentor's average lead on the digital skills.
pub fn match_score(subject: &Model, mentor: &Model) -> i32 {
    let tenure_diff = (mentor.tenure - subject.tenure).abs();

    let mut gap_total = 0;
    let mut gap_count = 0;
    for skill in DIGITAL_SKILLS {
        let lead = mentor.skills.proficiency(skill) - subject.skills.proficiency(skill);
        if lead > 0 {
            gap_total += lead;
            gap_count += 1;
        }
    }
    let avg_gap = if gap_count > 0 {
        f64::from(gap_total) / f64::from(gap_count)
    } else {
        0.0
    };

    (f64::from(tenure_diff) * TENURE_WEIGHT + avg_gap * GAP_WEIGHT).round() as i32
}

/// Top mentors for `subject`: Automation staff at level 5+, never the
/// subject themselves, ranked by score with ties in roster order.
pub fn recommend_mentors<'a>(subject: &Model, roster: &'a [Model]) -> Vec<MentorMatch<'a>> {
    let mut matches: Vec<MentorMatch<'a>> = roster
        .iter()
        .filter(|e| {
            e.id != subject.id && e.department == MENTOR_DEPARTMENT && e.level >= MENTOR_MIN_LEVEL
        })
        .map(|mentor| MentorMatch {
            mentor,
            match_score: match_score(subject, mentor),
        })
        .collect();
    matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    matches.truncate(MAX_MATCHES);
    matches
}
