//! Embedded linguistic tables used by the text normalizer.
//!
//! Both tables are versioned with the matching pipeline: editing either one
//! changes every similarity score the engine produces.

/// Common English function words removed during normalization.
pub const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers",
    "herself", "it", "its", "itself", "they", "them", "their", "theirs", "themselves",
    "what", "which", "who", "whom", "this", "that", "these", "those", "am", "is", "are",
    "was", "were", "be", "been", "being", "have", "has", "had", "having", "do", "does",
    "did", "doing", "a", "an", "the", "and", "but", "if", "or", "because", "as", "until",
    "while", "of", "at", "by", "for", "with", "about", "against", "between", "into",
    "through", "during", "before", "after", "above", "below", "to", "from", "up", "down",
    "in", "out", "on", "off", "over", "under", "again", "further", "then", "once", "here",
    "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so",
    "than", "too", "very", "s", "t", "can", "will", "just", "don", "should", "now", "d",
    "ll", "m", "o", "re", "ve", "y", "ain", "aren", "couldn", "didn", "doesn", "hadn",
    "hasn", "haven", "isn", "ma", "mightn", "mustn", "needn", "shan", "shouldn", "wasn",
    "weren", "won", "wouldn",
];

/// Coarse inflection table standing in for real lemmatization.
///
/// Tokens missing from the table pass through unchanged. The table is applied
/// after stop-word removal, so entries that are also stop words ("more",
/// "most", "did", ...) never actually fire on their own.
pub const INFLECTIONS: &[(&str, &str)] = &[
    ("running", "run"),
    ("ran", "run"),
    ("runs", "run"),
    ("better", "good"),
    ("best", "good"),
    ("worse", "bad"),
    ("worst", "bad"),
    ("happier", "happy"),
    ("happiest", "happy"),
    ("sadder", "sad"),
    ("saddest", "sad"),
    ("more", "much"),
    ("most", "much"),
    ("less", "little"),
    ("least", "little"),
    ("doing", "do"),
    ("did", "do"),
    ("does", "do"),
    ("done", "do"),
];
