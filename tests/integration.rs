//! Integration tests for passforge

use std::collections::HashSet;

use passforge::{GeneratorConfig, IdentityInput, WordlistGenerator};

fn generate(input: &IdentityInput, max: usize) -> Vec<String> {
    WordlistGenerator::with_config(GeneratorConfig::with_max_words(max))
        .generate(input)
        .words
}

fn alex() -> IdentityInput {
    IdentityInput {
        name: Some("alex".to_string()),
        pet: Some("milo".to_string()),
        dob: Some("1999-07-01".to_string()),
        ..Default::default()
    }
}

fn swaraj() -> IdentityInput {
    IdentityInput {
        name: Some("swaraj".to_string()),
        pet: Some("tiger".to_string()),
        dob: Some("2001-10-25".to_string()),
        keywords: vec![
            "india".to_string(),
            "football".to_string(),
            "linux".to_string(),
        ],
        years: vec!["2018".to_string(), "2024".to_string(), "2025".to_string()],
    }
}

#[test]
fn test_scenario_required_inclusions() {
    let words = generate(&alex(), 10_000);
    for expected in [
        "alex", "Alex", "ALEX", "4lex", "alexmilo", "miloalex", "alex1999", "1999alex", "alex!",
        "alex123",
    ] {
        assert!(words.contains(&expected.to_string()), "missing {expected}");
    }
}

#[test]
fn test_empty_input_yields_empty_result() {
    let input = IdentityInput {
        name: Some("".to_string()),
        pet: Some("".to_string()),
        dob: Some("".to_string()),
        ..Default::default()
    };
    assert!(generate(&input, 100).is_empty());
}

#[test]
fn test_keyword_and_year_inclusions() {
    let words = generate(&swaraj(), 30_000);
    assert!(words.len() <= 30_000);
    for expected in ["swaraj2001", "tiger2025", "india!", "football123", "linux@"] {
        assert!(words.contains(&expected.to_string()), "missing {expected}");
    }
}

#[test]
fn test_zero_max_yields_empty_result() {
    assert!(generate(&swaraj(), 0).is_empty());
}

#[test]
fn test_invalid_dob_is_nonfatal() {
    let input = IdentityInput {
        name: Some("bob".to_string()),
        dob: Some("not-a-date".to_string()),
        ..Default::default()
    };
    let words = generate(&input, 1_000);
    for expected in ["bob", "Bob", "BOB", "b0b"] {
        assert!(words.contains(&expected.to_string()), "missing {expected}");
    }
    // no date fragments leaked through
    assert!(!words.iter().any(|w| w.chars().all(|c| c.is_ascii_digit())));
}

#[test]
fn test_no_empty_candidates() {
    let words = generate(&swaraj(), 30_000);
    assert!(words.iter().all(|w| !w.is_empty()));
}

#[test]
fn test_cap_respected() {
    for max in [1, 5, 100, 2_000] {
        assert!(generate(&swaraj(), max).len() <= max);
    }
}

#[test]
fn test_uniqueness() {
    let words = generate(&swaraj(), 30_000);
    let unique: HashSet<&String> = words.iter().collect();
    assert_eq!(unique.len(), words.len());
}

#[test]
fn test_determinism() {
    assert_eq!(generate(&swaraj(), 30_000), generate(&swaraj(), 30_000));
}

#[test]
fn test_no_bare_suffix_candidates() {
    let words = generate(&swaraj(), 30_000);
    for forbidden in ["!", "123", "@", "#"] {
        assert!(!words.contains(&forbidden.to_string()));
    }
}

#[test]
fn test_adding_keyword_is_monotonic() {
    let base_words = generate(&swaraj(), usize::MAX);

    let mut extended = swaraj();
    extended.keywords.push("chess".to_string());
    let extended_words = generate(&extended, usize::MAX);

    assert!(extended_words.len() >= base_words.len());
    let extended_set: HashSet<&String> = extended_words.iter().collect();
    for word in &base_words {
        assert!(extended_set.contains(word), "lost candidate {word}");
    }
}

#[test]
fn test_malformed_years_are_dropped() {
    let input = IdentityInput {
        name: Some("alex".to_string()),
        years: vec!["18".to_string(), "20x4".to_string(), "2024".to_string()],
        ..Default::default()
    };
    let words = generate(&input, 10_000);
    assert!(words.contains(&"alex2024".to_string()));
    assert!(!words.contains(&"alex18".to_string()));
    assert!(!words.contains(&"alex20x4".to_string()));
}

#[test]
fn test_capped_flag_reports_truncation() {
    let generator = WordlistGenerator::with_config(GeneratorConfig::with_max_words(10));
    let wordlist = generator.generate(&swaraj());
    assert_eq!(wordlist.len(), 10);
    assert!(wordlist.capped);

    let roomy = WordlistGenerator::with_config(GeneratorConfig::with_max_words(1_000_000));
    assert!(!roomy.generate(&swaraj()).capped);
}
