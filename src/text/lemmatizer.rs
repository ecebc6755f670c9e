//! Reduction of tokens to a base form
//!
//! Best-effort only: forms that are not recognised pass through unchanged.

use rust_stemmers::{Algorithm, Stemmer};
use std::collections::{HashMap, HashSet};

use crate::config::LemmatizerKind;

pub trait Lemmatizer: Send + Sync {
    fn lemmatize(&self, token: &str) -> String;
}

/// Builds the lemmatizer selected in configuration
pub fn from_kind(kind: LemmatizerKind) -> Box<dyn Lemmatizer> {
    match kind {
        LemmatizerKind::Plural => Box::new(PluralLemmatizer::new()),
        LemmatizerKind::Snowball => Box::new(SnowballLemmatizer::new()),
        LemmatizerKind::None => Box::new(IdentityLemmatizer),
    }
}

/// No-op lemmatizer
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityLemmatizer;

impl Lemmatizer for IdentityLemmatizer {
    fn lemmatize(&self, token: &str) -> String {
        token.to_string()
    }
}

/// Plural folding with an irregular-form table
pub struct PluralLemmatizer {
    irregular: HashMap<&'static str, &'static str>,
    invariant: HashSet<&'static str>,
}

impl PluralLemmatizer {
    pub fn new() -> Self {
        let irregular = [
            ("yeux", "œil"),
            ("travaux", "travail"),
            ("journaux", "journal"),
            ("animaux", "animal"),
            ("chevaux", "cheval"),
            ("généraux", "général"),
            ("réseaux", "réseau"),
            ("bureaux", "bureau"),
            ("nouveaux", "nouveau"),
            ("beaux", "beau"),
            ("jeux", "jeu"),
            ("cheveux", "cheveu"),
            ("lieux", "lieu"),
            ("feux", "feu"),
            ("messieurs", "monsieur"),
            ("mesdames", "madame"),
        ];

        // Words ending in `s` that are not plurals
        let invariant = [
            "temps", "fois", "corps", "pays", "plus", "moins", "sans", "vers", "alors",
            "toujours", "tous", "jamais", "avis", "prix", "frais", "gens", "fils", "sens",
            "ailleurs", "lors", "puis", "dessus", "dessous", "mauvais", "français", "anglais",
            "souris", "colis", "this", "always", "less", "news", "was", "has", "its", "yes",
        ];

        Self {
            irregular: irregular.into_iter().collect(),
            invariant: invariant.into_iter().collect(),
        }
    }

    fn strips_plural_s(&self, token: &str) -> bool {
        if self.invariant.contains(token) || token.chars().count() <= 3 {
            return false;
        }
        token.ends_with('s')
            && !["ss", "us", "is", "os", "as", "ès", "ës"]
                .iter()
                .any(|suffix| token.ends_with(suffix))
    }
}

impl Default for PluralLemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lemmatizer for PluralLemmatizer {
    fn lemmatize(&self, token: &str) -> String {
        if let Some(base) = self.irregular.get(token) {
            return base.to_string();
        }
        if self.strips_plural_s(token) {
            return token[..token.len() - 1].to_string();
        }
        token.to_string()
    }
}

/// French Snowball stemmer
pub struct SnowballLemmatizer {
    stemmer: Stemmer,
}

impl SnowballLemmatizer {
    pub fn new() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::French),
        }
    }
}

impl Default for SnowballLemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lemmatizer for SnowballLemmatizer {
    fn lemmatize(&self, token: &str) -> String {
        self.stemmer.stem(token).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_folding() {
        let lemmatizer = PluralLemmatizer::new();
        assert_eq!(lemmatizer.lemmatize("bugs"), "bug");
        assert_eq!(lemmatizer.lemmatize("cartes"), "carte");
        assert_eq!(lemmatizer.lemmatize("transferts"), "transfert");
        assert_eq!(lemmatizer.lemmatize("erreurs"), "erreur");
    }

    #[test]
    fn test_irregular_forms() {
        let lemmatizer = PluralLemmatizer::new();
        assert_eq!(lemmatizer.lemmatize("travaux"), "travail");
        assert_eq!(lemmatizer.lemmatize("réseaux"), "réseau");
    }

    #[test]
    fn test_invariant_words_untouched() {
        let lemmatizer = PluralLemmatizer::new();
        for word in ["frais", "prix", "temps", "très", "mauvais", "application", "bus"] {
            assert_eq!(lemmatizer.lemmatize(word), word);
        }
    }

    #[test]
    fn test_x_plurals_only_through_table() {
        let lemmatizer = PluralLemmatizer::new();
        assert_eq!(lemmatizer.lemmatize("jeux"), "jeu");
        for word in ["heureux", "deux", "progrès", "accès"] {
            assert_eq!(lemmatizer.lemmatize(word), word);
        }
    }

    #[test]
    fn test_short_tokens_untouched() {
        let lemmatizer = PluralLemmatizer::new();
        assert_eq!(lemmatizer.lemmatize("ans"), "ans");
    }

    #[test]
    fn test_snowball_stems() {
        let lemmatizer = SnowballLemmatizer::new();
        assert_eq!(lemmatizer.lemmatize("rapides"), lemmatizer.lemmatize("rapide"));
        assert_eq!(lemmatizer.lemmatize("rapide"), "rapid");
    }

    #[test]
    fn test_identity() {
        assert_eq!(IdentityLemmatizer.lemmatize("cartes"), "cartes");
    }

    #[test]
    fn test_from_kind() {
        assert_eq!(from_kind(LemmatizerKind::Plural).lemmatize("bugs"), "bug");
        assert_eq!(from_kind(LemmatizerKind::None).lemmatize("bugs"), "bugs");
    }
}
