mod common;

use axum::http::StatusCode;
use common::{get_json, id_of, setup_empty, setup_seeded};
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn summary_matches_the_seeded_roster() {
    let env = setup_seeded().await;
    let (status, body) = get_json(&env.router, "/insights/summary").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalEmployees"], 10);
    // Robert and Frank: peak skill above 8 while stuck below level 4.
    assert_eq!(body["atRisk"], 2);
    assert_eq!(body["wisdomGap"], 0);
    // Four seniors (Elena, Robert, Frank, Lisa), three juniors (Maya,
    // David, James).
    assert_eq!(body["potentialPairings"], 3);
    assert_eq!(body["avgSkillLevel"], 7.8);
}

#[tokio::test]
async fn heatmap_classifies_every_employee() {
    let env = setup_seeded().await;
    let (status, body) = get_json(&env.router, "/insights/heatmap").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totals"], json!({ "red": 2, "amber": 0, "green": 8 }));

    let cells = body["cells"].as_array().unwrap();
    assert_eq!(cells.len(), 10);
    let robert = cells
        .iter()
        .find(|c| c["employee"]["name"] == "Robert")
        .unwrap();
    assert_eq!(robert["status"], "red");
    assert_eq!(robert["statusLabel"], "At Risk");
    let elena = cells
        .iter()
        .find(|c| c["employee"]["name"] == "Elena")
        .unwrap();
    assert_eq!(elena["status"], "green");
}

#[tokio::test]
async fn top_pairings_cross_departments() {
    let env = setup_seeded().await;
    let (status, body) = get_json(&env.router, "/insights/pairings").await;
    assert_eq!(status, StatusCode::OK);
    let pairings = body.as_array().unwrap();
    assert_eq!(pairings.len(), 3);

    // Elena has the longest tenure and a huge QA/Safety lead over every
    // junior, so she owns all three slots at the score cap.
    for pairing in pairings {
        assert_eq!(pairing["senior"]["name"], "Elena");
        assert_eq!(pairing["connectionScore"], 100);
        assert_eq!(pairing["skillsToShare"], json!(["QA", "Safety"]));
        assert_ne!(
            pairing["senior"]["department"],
            pairing["junior"]["department"]
        );
    }
    let juniors: Vec<&str> = pairings
        .iter()
        .map(|p| p["junior"]["name"].as_str().unwrap())
        .collect();
    assert_eq!(juniors, ["Maya", "David", "James"]);
}

#[tokio::test]
async fn mentor_matches_for_a_legacy_employee() {
    let env = setup_seeded().await;
    let id = id_of(&env.router, "Robert").await;
    let (status, body) = get_json(&env.router, &format!("/insights/mentors/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    let matches = body.as_array().unwrap();

    // Automation at level 5+: Maya and David. Chloe sits at level 3.
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0]["mentor"]["name"], "Maya");
    assert_eq!(matches[0]["matchScore"], 12);
    assert_eq!(matches[1]["mentor"]["name"], "David");
    assert_eq!(matches[1]["matchScore"], 10);
}

#[tokio::test]
async fn mentors_for_unknown_subject_is_not_found() {
    let env = setup_seeded().await;
    let missing = Uuid::new_v4();
    let (status, _) = get_json(&env.router, &format!("/insights/mentors/{missing}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn department_rollup_aggregates_skills() {
    let env = setup_seeded().await;
    let (status, body) = get_json(&env.router, "/insights/departments").await;
    assert_eq!(status, StatusCode::OK);
    let rollups = body.as_array().unwrap();

    let departments: Vec<&str> = rollups
        .iter()
        .map(|r| r["department"].as_str().unwrap())
        .collect();
    assert_eq!(departments, ["Legacy Ops", "Automation", "Digital Sys"]);

    let legacy = &rollups[0];
    assert_eq!(legacy["headcount"], 4);
    let skills: Vec<(&str, f64, u64)> = legacy["skills"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| {
            (
                s["skill"].as_str().unwrap(),
                s["avgValue"].as_f64().unwrap(),
                s["count"].as_u64().unwrap(),
            )
        })
        .collect();
    assert_eq!(
        skills,
        vec![
            ("QA", 10.0, 1),
            ("Mechanical", 9.0, 1),
            ("Precision", 9.0, 1),
            ("Safety", 9.0, 1),
            ("Tooling", 9.0, 1),
            ("Supply_Chain", 8.0, 1),
            ("IoT", 2.0, 1),
        ]
    );
}

#[tokio::test]
async fn skill_search_finds_talent_across_departments() {
    let env = setup_seeded().await;
    let (status, body) = get_json(&env.router, "/insights/skills?q=py").await;
    assert_eq!(status, StatusCode::OK);
    let hits = body.as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["employee"]["name"], "Maya");
    assert_eq!(hits[0]["matchedSkills"], json!(["Python"]));

    let (status, body) = get_json(&env.router, "/insights/skills").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn insights_work_on_an_empty_roster() {
    let env = setup_empty().await;
    let (status, body) = get_json(&env.router, "/insights/summary").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalEmployees"], 0);
    assert_eq!(body["avgSkillLevel"], 0.0);

    let (status, body) = get_json(&env.router, "/insights/pairings").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}
