//! Polarity lexicon
//!
//! French-first word list with common English entries, since replies mix
//! both. Keys are lemmas as produced by the default lemmatizer (singular,
//! lowercase, accents kept).

use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::error::{DashboardError, Result};
use crate::text::Lemmatizer;

const POSITIVE_WORDS: &[(&str, f64)] = &[
    // French
    ("bon", 0.5),
    ("bonne", 0.5),
    ("bien", 0.4),
    ("super", 0.5),
    ("excellent", 0.8),
    ("excellente", 0.8),
    ("génial", 0.8),
    ("géniale", 0.8),
    ("parfait", 0.8),
    ("parfaite", 0.8),
    ("top", 0.5),
    ("merci", 0.4),
    ("bravo", 0.6),
    ("félicitation", 0.6),
    ("rapide", 0.4),
    ("rapidement", 0.4),
    ("efficace", 0.6),
    ("facile", 0.4),
    ("pratique", 0.4),
    ("simple", 0.3),
    ("satisfait", 0.6),
    ("satisfaite", 0.6),
    ("content", 0.5),
    ("contente", 0.5),
    ("heureux", 0.6),
    ("heureuse", 0.6),
    ("aime", 0.5),
    ("aimer", 0.5),
    ("adore", 0.7),
    ("adorer", 0.7),
    ("meilleur", 0.7),
    ("meilleure", 0.7),
    ("formidable", 0.8),
    ("magnifique", 0.8),
    ("merveilleux", 0.8),
    ("incroyable", 0.6),
    ("fiable", 0.5),
    ("sécurisé", 0.4),
    ("gratuit", 0.4),
    ("utile", 0.4),
    ("agréable", 0.5),
    ("cool", 0.4),
    ("recommande", 0.5),
    ("réactif", 0.5),
    ("réactive", 0.5),
    ("fluide", 0.4),
    ("fier", 0.5),
    ("fière", 0.5),
    ("confiance", 0.4),
    ("joie", 0.6),
    ("beau", 0.5),
    ("belle", 0.5),
    ("bienvenue", 0.4),
    ("innovant", 0.5),
    // English
    ("good", 0.5),
    ("great", 0.7),
    ("amazing", 0.8),
    ("awesome", 0.7),
    ("best", 0.8),
    ("love", 0.6),
    ("happy", 0.6),
    ("nice", 0.5),
    ("perfect", 0.8),
    ("fast", 0.4),
    ("easy", 0.4),
    ("thank", 0.4),
];

const NEGATIVE_WORDS: &[(&str, f64)] = &[
    // French
    ("mauvais", -0.6),
    ("mauvaise", -0.6),
    ("nul", -0.7),
    ("nulle", -0.7),
    ("lent", -0.5),
    ("lente", -0.5),
    ("lenteur", -0.5),
    ("bug", -0.6),
    ("bugue", -0.6),
    ("bugué", -0.6),
    ("panne", -0.6),
    ("erreur", -0.5),
    ("problème", -0.5),
    ("probleme", -0.5),
    ("impossible", -0.5),
    ("arnaque", -0.9),
    ("escroquerie", -0.9),
    ("escroc", -0.9),
    ("voleur", -0.8),
    ("fraude", -0.9),
    ("honte", -0.7),
    ("honteux", -0.7),
    ("déçu", -0.6),
    ("déçue", -0.6),
    ("décevant", -0.6),
    ("déception", -0.6),
    ("inadmissible", -0.8),
    ("inacceptable", -0.8),
    ("scandale", -0.8),
    ("scandaleux", -0.8),
    ("catastrophe", -0.8),
    ("catastrophique", -0.8),
    ("pire", -0.8),
    ("horrible", -0.8),
    ("bloqué", -0.5),
    ("bloque", -0.5),
    ("perdu", -0.4),
    ("perte", -0.5),
    ("retard", -0.4),
    ("cher", -0.4),
    ("chère", -0.4),
    ("difficile", -0.4),
    ("compliqué", -0.4),
    ("fâché", -0.6),
    ("colère", -0.6),
    ("énervé", -0.6),
    ("marre", -0.6),
    ("plainte", -0.5),
    ("insupportable", -0.8),
    ("pénible", -0.6),
    ("dommage", -0.4),
    ("triste", -0.5),
    ("peur", -0.4),
    ("faux", -0.3),
    ("fausse", -0.3),
    ("débité", -0.3),
    ("injoignable", -0.6),
    // English
    ("bad", -0.6),
    ("terrible", -0.7),
    ("worst", -0.8),
    ("awful", -0.7),
    ("scam", -0.9),
    ("slow", -0.5),
    ("broken", -0.6),
    ("error", -0.5),
    ("hate", -0.7),
    ("fail", -0.6),
];

/// Intensity boosters applied to the next scored word
const BOOSTERS: &[(&str, f64)] = &[
    ("très", 1.3),
    ("trop", 1.3),
    ("vraiment", 1.3),
    ("tellement", 1.3),
    ("extrêmement", 1.5),
    ("hyper", 1.4),
    ("grave", 1.2),
    ("totalement", 1.3),
    ("complètement", 1.4),
    ("very", 1.3),
    ("really", 1.3),
    ("extremely", 1.5),
    ("totally", 1.3),
];

/// Negations flip (and dampen) scored words within a short window
const NEGATIONS: &[&str] = &[
    "jamais", "rien", "aucun", "aucune", "sans", "non", "guère", "not", "never", "nothing",
    "cannot",
];

#[derive(Debug, Deserialize)]
struct LexiconRow {
    word: String,
    score: f64,
}

/// Word scores, boosters and negations used by the scorer
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: HashMap<String, f64>,
    boosters: HashMap<String, f64>,
    negations: HashSet<String>,
}

impl Lexicon {
    pub fn builtin() -> Self {
        let mut words = HashMap::new();
        for (word, score) in POSITIVE_WORDS.iter().chain(NEGATIVE_WORDS.iter()) {
            words.insert(word.to_string(), *score);
        }

        Self {
            words,
            boosters: BOOSTERS
                .iter()
                .map(|(word, factor)| (word.to_string(), *factor))
                .collect(),
            negations: NEGATIONS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Load a `word,score` CSV file with a header row
    pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path.as_ref())?;

        let mut words = HashMap::new();
        for row in reader.deserialize() {
            let row: LexiconRow = row?;
            if !(-1.0..=1.0).contains(&row.score) {
                return Err(DashboardError::Lexicon(format!(
                    "score {} for '{}' is outside [-1, 1]",
                    row.score, row.word
                )));
            }
            words.insert(row.word.to_lowercase(), row.score);
        }

        tracing::info!(
            path = %path.as_ref().display(),
            entries = words.len(),
            "Loaded lexicon extension"
        );

        Ok(Self {
            words,
            ..Self::default()
        })
    }

    /// Merge `other` into this lexicon; its entries win
    pub fn merge(&mut self, other: Lexicon) {
        self.words.extend(other.words);
        self.boosters.extend(other.boosters);
        self.negations.extend(other.negations);
    }

    /// Re-key every table through a lemmatizer so lookups match normalized text
    ///
    /// When several word entries collapse onto one lemma their scores are
    /// averaged; colliding boosters keep the strongest factor.
    pub fn lemmatized(&self, lemmatizer: &dyn Lemmatizer) -> Self {
        let mut grouped: HashMap<String, (f64, usize)> = HashMap::new();
        for (word, score) in &self.words {
            let entry = grouped.entry(lemmatizer.lemmatize(word)).or_insert((0.0, 0));
            entry.0 += score;
            entry.1 += 1;
        }

        let mut boosters: HashMap<String, f64> = HashMap::new();
        for (word, factor) in &self.boosters {
            let entry = boosters.entry(lemmatizer.lemmatize(word)).or_insert(*factor);
            *entry = entry.max(*factor);
        }

        Self {
            words: grouped
                .into_iter()
                .map(|(lemma, (sum, n))| (lemma, sum / n as f64))
                .collect(),
            boosters,
            negations: self
                .negations
                .iter()
                .map(|word| lemmatizer.lemmatize(word))
                .collect(),
        }
    }

    pub fn score(&self, word: &str) -> Option<f64> {
        self.words.get(word).copied()
    }

    pub fn booster(&self, word: &str) -> Option<f64> {
        self.boosters.get(word).copied()
    }

    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{PluralLemmatizer, SnowballLemmatizer};
    use std::io::Write;

    #[test]
    fn test_builtin_scores_in_range() {
        let lexicon = Lexicon::builtin();
        assert!(lexicon.len() > 100);
        assert!(lexicon.words.values().all(|s| (-1.0..=1.0).contains(s)));
        assert!(lexicon.score("super").unwrap() > 0.0);
        assert!(lexicon.score("bug").unwrap() < 0.0);
        assert_eq!(lexicon.score("application"), None);
    }

    #[test]
    fn test_boosters_and_negations() {
        let lexicon = Lexicon::builtin();
        assert!(lexicon.booster("très").unwrap() > 1.0);
        assert!(lexicon.is_negation("jamais"));
        assert!(!lexicon.is_negation("super"));
    }

    #[test]
    fn test_load_csv_and_merge() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "word,score\nWoyo,0.9\nbug,-0.2").unwrap();

        let extra = Lexicon::load_csv(&path).unwrap();
        assert_eq!(extra.len(), 2);

        let mut lexicon = Lexicon::builtin();
        lexicon.merge(extra);
        assert_eq!(lexicon.score("woyo"), Some(0.9));
        assert_eq!(lexicon.score("bug"), Some(-0.2));
        assert!(lexicon.booster("très").is_some());
    }

    #[test]
    fn test_load_csv_rejects_out_of_range() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.csv");
        std::fs::write(&path, "word,score\nmax,1.5\n").unwrap();
        assert!(matches!(
            Lexicon::load_csv(&path),
            Err(DashboardError::Lexicon(_))
        ));
    }

    #[test]
    fn test_lemmatized_keys() {
        let lexicon = Lexicon::builtin().lemmatized(&SnowballLemmatizer::new());
        let stem = SnowballLemmatizer::new().lemmatize("rapide");
        assert!(lexicon.score(&stem).unwrap() > 0.0);

        let plural = Lexicon::builtin().lemmatized(&PluralLemmatizer::new());
        assert_eq!(plural.score("bug"), Some(-0.6));
    }

    #[test]
    fn test_lemmatized_modifiers() {
        let stemmer = SnowballLemmatizer::new();
        let lexicon = Lexicon::builtin().lemmatized(&stemmer);

        assert!(lexicon.is_negation(&stemmer.lemmatize("jamais")));
        assert!(lexicon.is_negation(&stemmer.lemmatize("sans")));
        assert!(lexicon.booster(&stemmer.lemmatize("vraiment")).unwrap() > 1.0);
        assert!(lexicon.booster(&stemmer.lemmatize("très")).unwrap() > 1.0);
    }
}
