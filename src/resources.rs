//! Process-wide linguistic resources
//!
//! The French stopword set and the built-in polarity lexicon are built once
//! on first use of [`init`]. Later calls return the same instance.

use crate::sentiment::Lexicon;
use once_cell::sync::OnceCell;
use std::collections::HashSet;

/// French stopwords (NLTK list)
const FRENCH_STOPWORDS: &[&str] = &[
    "au", "aux", "avec", "ce", "ces", "dans", "de", "des", "du", "elle", "en", "et", "eux",
    "il", "ils", "je", "la", "le", "les", "leur", "lui", "ma", "mais", "me", "même", "mes",
    "moi", "mon", "ne", "nos", "notre", "nous", "on", "ou", "par", "pas", "pour", "qu", "que",
    "qui", "sa", "se", "ses", "son", "sur", "ta", "te", "tes", "toi", "ton", "tu", "un", "une",
    "vos", "votre", "vous", "c", "d", "j", "l", "à", "m", "n", "s", "t", "y", "été", "étée",
    "étées", "étés", "étant", "étante", "étants", "étantes", "suis", "es", "est", "sommes",
    "êtes", "sont", "serai", "seras", "sera", "serons", "serez", "seront", "serais", "serait",
    "serions", "seriez", "seraient", "étais", "était", "étions", "étiez", "étaient", "fus",
    "fut", "fûmes", "fûtes", "furent", "sois", "soit", "soyons", "soyez", "soient", "fusse",
    "fusses", "fût", "fussions", "fussiez", "fussent", "ayant", "ayante", "ayantes", "ayants",
    "eu", "eue", "eues", "eus", "ai", "as", "avons", "avez", "ont", "aurai", "auras", "aura",
    "aurons", "aurez", "auront", "aurais", "aurait", "aurions", "auriez", "auraient", "avais",
    "avait", "avions", "aviez", "avaient", "eut", "eûmes", "eûtes", "eurent", "aie", "aies",
    "ait", "ayons", "ayez", "aient", "eusse", "eusses", "eût", "eussions", "eussiez",
    "eussent",
];

/// Immutable resources shared by every pipeline in the process
#[derive(Debug)]
pub struct LinguisticResources {
    pub stopwords: HashSet<&'static str>,
    pub lexicon: Lexicon,
}

impl LinguisticResources {
    fn build() -> Self {
        Self {
            stopwords: FRENCH_STOPWORDS.iter().copied().collect(),
            lexicon: Lexicon::builtin(),
        }
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }
}

static RESOURCES: OnceCell<LinguisticResources> = OnceCell::new();

/// Initialize the linguistic resources (idempotent)
pub fn init() -> &'static LinguisticResources {
    RESOURCES.get_or_init(|| {
        let resources = LinguisticResources::build();
        tracing::debug!(
            stopwords = resources.stopwords.len(),
            lexicon_entries = resources.lexicon.len(),
            "Linguistic resources initialized"
        );
        resources
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        let first = init();
        let second = init();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_stopwords() {
        let resources = init();
        assert!(resources.is_stopword("de"));
        assert!(resources.is_stopword("pas"));
        assert!(resources.is_stopword("été"));
        assert!(!resources.is_stopword("application"));
        assert!(!resources.is_stopword("très"));
    }

    #[test]
    fn test_lexicon_loaded() {
        assert!(!init().lexicon.is_empty());
    }
}
