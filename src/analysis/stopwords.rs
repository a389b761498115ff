//! Per-language stopword tables.
//!
//! Each supported language code owns one [`StopwordTable`]. The tables are
//! built once on first use and shared read-only for the lifetime of the
//! process. Looking up a language without a table is not an error: it
//! yields the shared empty table, so no filtering takes place.
//!
//! # Examples
//!
//! ```
//! use wordhash::analysis::stopwords::StopwordTable;
//!
//! let english = StopwordTable::for_language("en");
//! assert!(english.contains("the"));
//! assert!(!english.contains("cat"));
//!
//! let unknown = StopwordTable::for_language("xx");
//! assert!(unknown.is_empty());
//! ```

use std::collections::HashSet;
use std::sync::LazyLock;

use ahash::AHashMap;

/// English stopwords.
const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "again", "all", "along", "are", "also", "an", "and", "as", "at", "but", "by", "came",
    "can", "cant", "couldnt", "did", "didn", "didnt", "do", "doesnt", "dont", "ever", "first",
    "from", "have", "her", "here", "him", "how", "i", "if", "in", "into", "is", "isnt", "it",
    "itll", "just", "last", "least", "like", "most", "my", "new", "no", "not", "now", "of", "on",
    "or", "should", "sinc", "so", "some", "th", "than", "this", "that", "the", "their", "then",
    "those", "to", "told", "too", "true", "try", "until", "url", "us", "were", "when", "whether",
    "while", "with", "within", "yes", "you", "youll",
];

/// Spanish stopwords.
const SPANISH_STOP_WORDS: &[&str] = &[
    "de", "la", "que", "el", "en", "y", "a", "los", "del", "se", "las", "por", "un", "para", "con",
    "no", "una", "su", "al", "lo", "como", "más", "pero", "sus", "le", "ya", "o", "este", "sí",
    "porque", "esta", "entre", "cuando", "muy", "sin", "sobre", "también", "me", "hasta", "hay",
    "donde", "quien", "desde", "todo", "nos", "durante", "todos", "uno", "les", "ni", "contra",
    "otros", "ese", "eso", "ante", "ellos", "e", "esto", "mí", "antes", "algunos", "qué", "unos",
    "yo", "otro", "otras", "otra", "él", "tanto", "esa", "estos", "mucho", "quienes", "nada",
    "muchos", "cual", "poco", "ella", "estar", "estas", "algunas", "algo", "nosotros", "mi", "mis",
    "tú", "te", "ti", "tu", "tus", "ellas", "nosotras", "vosotros", "vosotras", "os", "mío", "mía",
    "míos", "mías", "tuyo", "tuya", "tuyos", "tuyas", "suyo", "suya", "suyos", "suyas", "nuestro",
    "nuestra", "nuestros", "nuestras", "vuestro", "vuestra", "vuestros", "vuestras", "esos",
    "esas", "estoy", "estás", "está", "estamos", "estáis", "están", "esté", "estés", "estemos",
    "estéis", "estén", "estaré", "estarás", "estará", "estaremos", "estaréis", "estarán",
    "estaría", "estarías", "estaríamos", "estaríais", "estarían", "estaba", "estabas", "estábamos",
    "estabais", "estaban", "estuve", "estuviste", "estuvo", "estuvimos", "estuvisteis",
    "estuvieron", "estuviera", "estuvieras", "estuviéramos", "estuvierais", "estuvieran",
    "estuviese", "estuvieses", "estuviésemos", "estuvieseis", "estuviesen", "estando", "estado",
    "estada", "estados", "estadas", "estad", "he", "has", "ha", "hemos", "habéis", "han", "haya",
    "hayas", "hayamos", "hayáis", "hayan", "habré", "habrás", "habrá", "habremos", "habréis",
    "habrán", "habría", "habrías", "habríamos", "habríais", "habrían", "había", "habías",
    "habíamos", "habíais", "habían", "hube", "hubiste", "hubo", "hubimos", "hubisteis", "hubieron",
    "hubiera", "hubieras", "hubiéramos", "hubierais", "hubieran", "hubiese", "hubieses",
    "hubiésemos", "hubieseis", "hubiesen", "habiendo", "habido", "habida", "habidos", "habidas",
    "soy", "eres", "es", "somos", "sois", "son", "sea", "seas", "seamos", "seáis", "sean", "seré",
    "serás", "será", "seremos", "seréis", "serán", "sería", "serías", "seríamos", "seríais",
    "serían", "era", "eras", "éramos", "erais", "eran", "fui", "fuiste", "fue", "fuimos",
    "fuisteis", "fueron", "fuera", "fueras", "fuéramos", "fuerais", "fueran", "fuese", "fueses",
    "fuésemos", "fueseis", "fuesen", "siendo", "sido", "tengo", "tienes", "tiene", "tenemos",
    "tenéis", "tienen", "tenga", "tengas", "tengamos", "tengáis", "tengan", "tendré", "tendrás",
    "tendrá", "tendremos", "tendréis", "tendrán", "tendría", "tendrías", "tendríamos", "tendríais",
    "tendrían", "tenía", "tenías", "teníamos", "teníais", "tenían", "tuve", "tuviste", "tuvo",
    "tuvimos", "tuvisteis", "tuvieron", "tuviera", "tuvieras", "tuviéramos", "tuvierais",
    "tuvieran", "tuviese", "tuvieses", "tuviésemos", "tuvieseis", "tuviesen", "teniendo", "tenido",
    "tenida", "tenidos", "tenidas", "tened",
];

/// All built-in tables, keyed by language code.
static STOPWORD_TABLES: LazyLock<AHashMap<&'static str, StopwordTable>> = LazyLock::new(|| {
    let mut tables = AHashMap::new();
    tables.insert("en", StopwordTable::from_words(ENGLISH_STOP_WORDS.iter().copied()));
    tables.insert("es", StopwordTable::from_words(SPANISH_STOP_WORDS.iter().copied()));
    tables
});

static EMPTY_TABLE: LazyLock<StopwordTable> = LazyLock::new(StopwordTable::default);

/// A set of lowercase stopwords for one language.
///
/// Membership is an exact, case-sensitive match; callers lowercase tokens
/// before asking.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StopwordTable {
    words: HashSet<String>,
}

impl StopwordTable {
    /// Create a table from a list of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StopwordTable {
            words: words.into_iter().map(|s| s.into()).collect(),
        }
    }

    /// The shared table for `language`, or the shared empty table when no
    /// table exists for that code.
    pub fn for_language(language: &str) -> &'static StopwordTable {
        Self::lookup(language).unwrap_or(&*EMPTY_TABLE)
    }

    /// The shared table for `language`, if one exists.
    pub fn lookup(language: &str) -> Option<&'static StopwordTable> {
        STOPWORD_TABLES.get(language)
    }

    /// Check if a word is a stopword.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Get the number of stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the stopwords in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// Language codes that have a built-in stopword table, sorted.
pub fn supported_languages() -> Vec<&'static str> {
    let mut languages: Vec<&'static str> = STOPWORD_TABLES.keys().copied().collect();
    languages.sort_unstable();
    languages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_table() {
        let table = StopwordTable::for_language("en");
        assert_eq!(table.len(), ENGLISH_STOP_WORDS.len());
        for word in ["a", "the", "and", "youll", "sinc", "th", "url"] {
            assert!(table.contains(word), "{word} should be a stopword");
        }
        assert!(!table.contains("cat"));
        assert!(!table.contains("The"));
    }

    #[test]
    fn test_spanish_table() {
        let table = StopwordTable::for_language("es");
        assert_eq!(table.len(), SPANISH_STOP_WORDS.len());
        for word in ["de", "más", "también", "estuviésemos", "tened"] {
            assert!(table.contains(word), "{word} should be a stopword");
        }
        assert!(!table.contains("mas"));
    }

    #[test]
    fn test_tables_have_no_duplicates() {
        let english: HashSet<&str> = ENGLISH_STOP_WORDS.iter().copied().collect();
        assert_eq!(english.len(), ENGLISH_STOP_WORDS.len());
        let spanish: HashSet<&str> = SPANISH_STOP_WORDS.iter().copied().collect();
        assert_eq!(spanish.len(), SPANISH_STOP_WORDS.len());
    }

    #[test]
    fn test_tables_are_lowercase() {
        for word in ENGLISH_STOP_WORDS.iter().chain(SPANISH_STOP_WORDS) {
            assert_eq!(*word, word.to_lowercase());
        }
    }

    #[test]
    fn test_unknown_language_is_empty() {
        assert!(StopwordTable::lookup("fr").is_none());
        let table = StopwordTable::for_language("fr");
        assert!(table.is_empty());
        assert!(!table.contains("le"));
    }

    #[test]
    fn test_shared_instance() {
        let a = StopwordTable::for_language("en");
        let b = StopwordTable::for_language("en");
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_supported_languages() {
        assert_eq!(supported_languages(), vec!["en", "es"]);
    }

    #[test]
    fn test_custom_table() {
        let table = StopwordTable::from_words(vec!["foo", "bar"]);
        assert_eq!(table.len(), 2);
        let mut words: Vec<&str> = table.iter().collect();
        words.sort_unstable();
        assert_eq!(words, vec!["bar", "foo"]);
    }
}
