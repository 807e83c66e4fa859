// Unit tests for Roomie Match

use roomie_match::core::{compute_compatibility, CompatibilityEngine};
use roomie_match::models::{BudgetRange, Lifestyle, Profile};

fn full_profile(id: &str) -> Profile {
    Profile {
        user_id: id.to_string(),
        age: Some(25),
        location: Some("Boston".to_string()),
        lifestyle: Some(Lifestyle {
            cleanliness: Some(4),
            social_level: Some(3),
            sleep_schedule: Some("22:00-07:00".to_string()),
            smoking: Some(false),
            pets: Some(false),
        }),
        deal_breakers: vec![],
        budget_range: Some(BudgetRange::new(1000.0, 1500.0)),
        tags: vec!["yoga".to_string(), "reading".to_string()],
    }
}

fn assorted_profiles() -> Vec<Profile> {
    vec![
        Profile::default(),
        full_profile("full"),
        Profile {
            user_id: "smoker".to_string(),
            age: Some(41),
            location: Some("Cambridge".to_string()),
            lifestyle: Some(Lifestyle {
                cleanliness: Some(1),
                social_level: Some(5),
                sleep_schedule: Some("02:00-10:00".to_string()),
                smoking: Some(true),
                pets: Some(true),
            }),
            deal_breakers: vec!["pets".to_string()],
            budget_range: Some(BudgetRange::new(400.0, 900.0)),
            tags: vec!["gaming".to_string(), "yoga".to_string()],
        },
        Profile {
            user_id: "picky".to_string(),
            age: Some(23),
            location: Some("boston, ma".to_string()),
            lifestyle: Some(Lifestyle {
                cleanliness: Some(5),
                social_level: Some(1),
                ..Default::default()
            }),
            deal_breakers: vec![
                "smoking".to_string(),
                "pets".to_string(),
                "parties".to_string(),
            ],
            budget_range: Some(BudgetRange::new(800.0, 1200.0)),
            tags: vec!["reading".to_string()],
        },
        Profile {
            user_id: "sparse".to_string(),
            age: Some(30),
            ..Default::default()
        },
    ]
}

#[test]
fn test_score_always_within_range() {
    let profiles = assorted_profiles();

    for a in &profiles {
        for b in &profiles {
            let score = compute_compatibility(Some(a), Some(b));
            assert!(
                (0.0..=100.0).contains(&score),
                "Score {} out of range for {} / {}",
                score,
                a.user_id,
                b.user_id
            );
        }
    }
}

#[test]
fn test_score_is_symmetric() {
    let profiles = assorted_profiles();

    for a in &profiles {
        for b in &profiles {
            assert_eq!(
                compute_compatibility(Some(a), Some(b)),
                compute_compatibility(Some(b), Some(a)),
                "Asymmetric score for {} / {}",
                a.user_id,
                b.user_id
            );
        }
    }
}

#[test]
fn test_empty_profiles_score_zero() {
    let empty = Profile::default();
    assert_eq!(compute_compatibility(Some(&empty), Some(&empty)), 0.0);
}

#[test]
fn test_missing_profile_scores_zero() {
    let profile = full_profile("a");
    assert_eq!(compute_compatibility(Some(&profile), None), 0.0);
    assert_eq!(compute_compatibility(None, Some(&profile)), 0.0);
    assert_eq!(compute_compatibility(None, None), 0.0);
}

#[test]
fn test_deal_breaker_lowers_score() {
    let a = full_profile("a");
    let mut b = full_profile("b");
    if let Some(lifestyle) = b.lifestyle.as_mut() {
        lifestyle.smoking = Some(true);
    }

    let without = compute_compatibility(Some(&a), Some(&b));

    let mut picky = a.clone();
    picky.deal_breakers = vec!["smoking".to_string()];
    let with = compute_compatibility(Some(&picky), Some(&b));

    assert!(with < without, "Expected {} < {}", with, without);
    assert_eq!(without - with, 20.0);
}

#[test]
fn test_perfect_match_scores_near_100() {
    let a = full_profile("a");
    let b = full_profile("b");

    let score = compute_compatibility(Some(&a), Some(&b));
    assert!(score >= 95.0, "Expected >= 95, got {}", score);
    assert_eq!(score, 100.0);
}

#[test]
fn test_age_gap_of_nine_contributes_nothing() {
    let a = Profile {
        age: Some(25),
        ..Default::default()
    };
    let b = Profile {
        age: Some(34),
        ..Default::default()
    };

    let breakdown = CompatibilityEngine::default().breakdown(&a, &b);
    assert_eq!(breakdown.age, Some(0.0));
    assert_eq!(breakdown.score, 0.0);
}

#[test]
fn test_age_only_scores_reflect_tiers() {
    let score_for = |other: u8| {
        compute_compatibility(
            Some(&Profile {
                age: Some(25),
                ..Default::default()
            }),
            Some(&Profile {
                age: Some(other),
                ..Default::default()
            }),
        )
    };

    assert_eq!(score_for(28), 10.0);
    assert_eq!(score_for(30), 7.0);
    assert_eq!(score_for(33), 4.0);
    assert_eq!(score_for(34), 0.0);
}

#[test]
fn test_disjoint_budgets_contribute_nothing() {
    let a = Profile {
        budget_range: Some(BudgetRange::new(500.0, 800.0)),
        ..Default::default()
    };
    let b = Profile {
        budget_range: Some(BudgetRange::new(2000.0, 3000.0)),
        ..Default::default()
    };

    let breakdown = CompatibilityEngine::default().breakdown(&a, &b);
    assert_eq!(breakdown.budget, Some(0.0));
    assert_eq!(breakdown.score, 0.0);
}

#[test]
fn test_unmatched_locations_still_score() {
    let a = Profile {
        location: Some("Boston".to_string()),
        ..Default::default()
    };
    let b = Profile {
        location: Some("Seattle".to_string()),
        ..Default::default()
    };
    let c = Profile {
        location: Some("south BOSTON".to_string()),
        ..Default::default()
    };

    assert_eq!(compute_compatibility(Some(&a), Some(&b)), 5.0);
    assert_eq!(compute_compatibility(Some(&a), Some(&c)), 15.0);
}

#[test]
fn test_malformed_fields_are_skipped() {
    let a = Profile {
        lifestyle: Some(Lifestyle {
            cleanliness: Some(9),
            ..Default::default()
        }),
        budget_range: Some(BudgetRange::new(1500.0, 1000.0)),
        location: Some("".to_string()),
        ..Default::default()
    };
    let b = full_profile("b");

    let breakdown = CompatibilityEngine::default().breakdown(&a, &b);
    assert_eq!(breakdown.lifestyle, None);
    assert_eq!(breakdown.budget, None);
    assert_eq!(breakdown.location, None);
    assert_eq!(breakdown.score, 0.0);
}

#[test]
fn test_sparse_profiles_score_lower_than_complete_ones() {
    let complete = compute_compatibility(Some(&full_profile("a")), Some(&full_profile("b")));

    let sparse_a = Profile {
        age: Some(25),
        location: Some("Boston".to_string()),
        ..Default::default()
    };
    let sparse = compute_compatibility(Some(&sparse_a), Some(&sparse_a.clone()));

    assert_eq!(sparse, 25.0);
    assert!(sparse < complete);
}

#[test]
fn test_score_has_two_decimals() {
    let a = Profile {
        tags: vec!["a".to_string(), "b".to_string(), "c".to_string()],
        ..Default::default()
    };
    let b = Profile {
        tags: vec!["a".to_string()],
        ..Default::default()
    };

    // 1/3 of 10 points
    assert_eq!(compute_compatibility(Some(&a), Some(&b)), 3.33);
}
