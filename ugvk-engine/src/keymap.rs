//! Fixed Latin-key to Uyghur-character table

use std::collections::HashMap;

/// Immutable mapping from a typed key to the character it produces.
///
/// Keys are case-sensitive: `k` gives ك while `K` gives ۆ.
#[derive(Debug, Clone)]
pub struct KeyMap {
    table: HashMap<char, char>,
}

impl KeyMap {
    /// Build the standard Uyghur layout
    pub fn uyghur() -> Self {
        let mut table = HashMap::new();
        let mut map = |key: char, out: char| {
            table.insert(key, out);
        };

        // Letters
        map('a', 'ھ');
        map('b', 'ب');
        map('c', 'غ');
        map('D', 'ژ');
        map('d', 'د');
        map('e', 'ې');
        map('F', 'ف');
        map('f', 'ا');
        map('G', 'گ');
        map('g', 'ە');
        map('H', 'خ');
        map('h', 'ى');
        map('i', 'ڭ');
        map('J', 'ج');
        map('j', 'ق');
        map('K', 'ۆ');
        map('k', 'ك');
        map('l', 'ل');
        map('m', 'م');
        map('n', 'ن');
        map('o', 'و');
        map('p', 'پ');
        map('q', 'چ');
        map('r', 'ر');
        map('s', 'س');
        map('t', 'ت');
        map('u', 'ۇ');
        map('v', 'ۈ');
        map('w', 'ۋ');
        map('x', 'ش');
        map('y', 'ي');
        map('z', 'ز');
        map('/', 'ئ');

        // Arabic punctuation
        map(';', '؛');
        map('?', '؟');
        map(',', '،');
        map('_', '—');

        // Brackets are mirrored so they render correctly in RTL text
        map('(', ')');
        map(')', '(');
        map('[', ']');
        map(']', '[');
        map('{', '»');
        map('}', '«');
        map('<', '›');
        map('>', '‹');

        Self { table }
    }

    /// Look up the output character for a key
    pub fn get(&self, key: char) -> Option<char> {
        self.table.get(&key).copied()
    }

    pub fn contains(&self, key: char) -> bool {
        self.table.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Iterate over `(key, output)` pairs sorted by key
    pub fn entries(&self) -> Vec<(char, char)> {
        let mut entries: Vec<(char, char)> = self.table.iter().map(|(k, v)| (*k, *v)).collect();
        entries.sort_unstable();
        entries
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::uyghur()
    }
}
