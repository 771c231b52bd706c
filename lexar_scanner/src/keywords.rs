/// Caller-supplied keyword list, normalized to lowercase on construction.
/// Membership tests are case-insensitive; insertion order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    words: Vec<String>,
}

impl KeywordSet {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|word| word.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn contains(&self, ident: &str) -> bool {
        let lowered = ident.to_lowercase();
        self.words.iter().any(|word| *word == lowered)
    }
}
