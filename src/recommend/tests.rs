//! Unit tests for recommendation module

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::analysis::WordFrequency;
    use crate::text::{Lemmatizer, PluralLemmatizer, SnowballLemmatizer};

    fn freq(words: &[&str]) -> Vec<WordFrequency> {
        words
            .iter()
            .map(|w| WordFrequency {
                word: w.to_string(),
                count: 1,
            })
            .collect()
    }

    #[test]
    fn test_default_table_order() {
        let rules = default_rules();
        assert_eq!(rules.len(), 5);
        assert!(rules[0].keywords.contains(&"visa".to_string()));
        assert!(rules[4].keywords.contains(&"prix".to_string()));
    }

    #[test]
    fn test_mobile_advisory_fires_once() {
        let engine = RecommendationEngine::default();
        let set = engine.recommend(&freq(&["bug", "application", "lent", "erreur"]));

        assert!(!set.no_trend);
        assert_eq!(set.items.len(), 1);
        assert!(set.items[0].contains("application mobile"));
    }

    #[test]
    fn test_output_follows_table_order() {
        let engine = RecommendationEngine::default();
        let set = engine.recommend(&freq(&["frais", "bug", "carte"]));

        assert_eq!(set.items.len(), 3);
        assert!(set.items[0].contains("Visa"));
        assert!(set.items[1].contains("application mobile"));
        assert!(set.items[2].contains("tarifaire"));
        assert_eq!(set.advisories().len(), 3);
    }

    #[test]
    fn test_no_negative_words_yields_notice_only() {
        let engine = RecommendationEngine::default();
        let set = engine.recommend(&[]);

        assert!(set.no_trend);
        assert_eq!(set.items, vec![NO_TREND_NOTICE.to_string()]);
        assert!(set.advisories().is_empty());
    }

    #[test]
    fn test_unmatched_words_yield_notice() {
        let engine = RecommendationEngine::default();
        let set = engine.recommend_words(["lenteur", "attente"]);
        assert!(set.no_trend);
        assert_eq!(set.items.len(), 1);
    }

    #[test]
    fn test_keyword_match_is_exact() {
        let engine = RecommendationEngine::default();
        // "cartes" is not "carte": matching happens on normalized tokens
        let set = engine.recommend_words(["cartes"]);
        assert!(set.no_trend);
    }

    #[test]
    fn test_custom_rules_from_config() {
        let config = RecommendationConfig {
            rules: Some(vec![RecommendationRule::new(&["lenteur"], "Accélérer.")]),
            no_trend_notice: Some("Rien à signaler.".to_string()),
        };
        let engine = RecommendationEngine::from_config(&config);
        assert_eq!(engine.rules().len(), 1);

        let fired = engine.recommend_words(["lenteur"]);
        assert_eq!(fired.items, vec!["Accélérer.".to_string()]);

        let quiet = engine.recommend_words(["bug"]);
        assert_eq!(quiet.items, vec!["Rien à signaler.".to_string()]);
    }

    #[test]
    fn test_lemmatized_keywords_match_stems() {
        let stemmer = SnowballLemmatizer::new();
        let engine = RecommendationEngine::default().lemmatized(&stemmer);

        let application = stemmer.lemmatize("application");
        let set = engine.recommend_words([application.as_str()]);
        assert_eq!(set.items.len(), 1);
        assert!(set.items[0].contains("application mobile"));
    }

    #[test]
    fn test_plural_lemmatizer_keeps_keywords() {
        let engine = RecommendationEngine::default().lemmatized(&PluralLemmatizer::new());
        assert_eq!(engine.rules(), default_rules().as_slice());
    }
}
