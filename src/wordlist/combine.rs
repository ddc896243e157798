//! Pairwise and triple concatenation of base tokens
//!
//! Combinations use raw base tokens only, never case or leetspeak
//! variants; variants meet years and suffixes in the append stage
//! instead, keeping growth linear across the two expansion axes.

use super::generator::CandidateSink;
use super::normalize::TokenSet;

/// Emit all combinations into the sink, stopping the moment it fills.
///
/// Loop order is fixed for reproducibility: personal tokens (name, pet,
/// date fragments) pair with each other and with years first, then each
/// keyword pairs with every personal token, then (name, pet, year)
/// triples.
pub(super) fn emit_combinations(tokens: &TokenSet, sink: &mut CandidateSink) {
    let personal = tokens.personal();

    for a in &personal {
        for b in &personal {
            if a == b {
                continue;
            }
            if !sink.push(format!("{a}{b}")) {
                return;
            }
            if !sink.push(format!("{b}{a}")) {
                return;
            }
        }
        for year in &tokens.years {
            if !sink.push(format!("{a}{year}")) {
                return;
            }
            if !sink.push(format!("{year}{a}")) {
                return;
            }
        }
    }

    for keyword in &tokens.keywords {
        for p in &personal {
            if !sink.push(format!("{keyword}{p}")) {
                return;
            }
            if !sink.push(format!("{p}{keyword}")) {
                return;
            }
        }
    }

    // arbitrary triples would explode; only (name, pet, year) shapes are built
    if let (Some(name), Some(pet)) = (&tokens.name, &tokens.pet) {
        for year in &tokens.years {
            if !sink.push(format!("{name}{pet}{year}")) {
                return;
            }
            if !sink.push(format!("{pet}{name}{year}")) {
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(
        name: Option<&str>,
        pet: Option<&str>,
        fragments: &[&str],
        keywords: &[&str],
        years: &[&str],
    ) -> TokenSet {
        TokenSet {
            name: name.map(|s| s.to_string()),
            pet: pet.map(|s| s.to_string()),
            date_fragments: fragments.iter().map(|s| s.to_string()).collect(),
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            years: years.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn collect(tokens: &TokenSet) -> Vec<String> {
        let mut sink = CandidateSink::new(usize::MAX);
        emit_combinations(tokens, &mut sink);
        sink.into_words()
    }

    #[test]
    fn test_personal_pairs_both_orders() {
        let words = collect(&tokens(Some("alex"), Some("milo"), &[], &[], &[]));
        assert!(words.contains(&"alexmilo".to_string()));
        assert!(words.contains(&"miloalex".to_string()));
    }

    #[test]
    fn test_personal_year_pairs() {
        let words = collect(&tokens(Some("alex"), None, &[], &[], &["2024"]));
        assert!(words.contains(&"alex2024".to_string()));
        assert!(words.contains(&"2024alex".to_string()));
    }

    #[test]
    fn test_date_fragments_are_personal() {
        let words = collect(&tokens(Some("alex"), None, &["1999", "99"], &[], &[]));
        assert!(words.contains(&"alex1999".to_string()));
        assert!(words.contains(&"1999alex".to_string()));
        assert!(words.contains(&"199999".to_string()));
    }

    #[test]
    fn test_keyword_pairs_with_personal_only() {
        let words = collect(&tokens(
            Some("alex"),
            None,
            &[],
            &["india", "linux"],
            &["2024"],
        ));
        assert!(words.contains(&"indiaalex".to_string()));
        assert!(words.contains(&"alexindia".to_string()));
        // keywords never pair with each other or prefix years here
        assert!(!words.contains(&"indialinux".to_string()));
        assert!(!words.contains(&"2024india".to_string()));
    }

    #[test]
    fn test_triples_require_name_pet_and_year() {
        let words = collect(&tokens(Some("alex"), Some("milo"), &[], &[], &["2024"]));
        assert!(words.contains(&"alexmilo2024".to_string()));
        assert!(words.contains(&"miloalex2024".to_string()));

        let no_pet = collect(&tokens(Some("alex"), None, &[], &[], &["2024"]));
        assert!(!no_pet.iter().any(|w| w.len() > "2024alex".len()));
    }

    #[test]
    fn test_deterministic_order() {
        let set = tokens(Some("alex"), Some("milo"), &["1999"], &["india"], &["2024"]);
        assert_eq!(collect(&set), collect(&set));
        // name-led pairs come before keyword pairs
        let words = collect(&set);
        let first_pair = words.iter().position(|w| w == "alexmilo").unwrap();
        let keyword_pair = words.iter().position(|w| w == "indiaalex").unwrap();
        assert!(first_pair < keyword_pair);
    }

    #[test]
    fn test_cap_short_circuits() {
        let set = tokens(Some("alex"), Some("milo"), &["1999"], &["india"], &["2024"]);
        let mut sink = CandidateSink::new(3);
        emit_combinations(&set, &mut sink);
        assert_eq!(sink.into_words().len(), 3);
    }
}
