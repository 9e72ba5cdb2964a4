//! Porter stemming algorithm implementation.
//!
//! This is the classic algorithm from M.F. Porter, "An algorithm for suffix
//! stripping" (1980), in five steps:
//! 1. Plurals, -ed/-ing, terminal y → i
//! 2. Double suffixes: -ational → -ate, -tional → -tion, ...
//! 3. -icate → -ic, -ative → "", -ness → "", ...
//! 4. Remove -al, -ance, -ence, ... when the stem is long enough
//! 5. Remove a final -e and reduce -ll
//!
//! Words of two letters or fewer, and words with non-ASCII characters, are
//! returned unchanged (ASCII letters lowercased).
//!
//! # Examples
//!
//! ```
//! use newsclass::analysis::token_filter::stem::Stemmer;
//! use newsclass::analysis::token_filter::stem::porter::PorterStemmer;
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("running"), "run");
//! assert_eq!(stemmer.stem("generalization"), "gener");
//! assert_eq!(stemmer.stem("traditional"), "tradit");
//! ```

use crate::analysis::token_filter::stem::Stemmer;

/// Porter stemming algorithm.
#[derive(Debug, Clone, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        let word = word.to_ascii_lowercase();
        if word.len() <= 2 || !word.is_ascii() {
            return word;
        }

        let mut buffer = StemBuffer::new(&word);
        buffer.step1ab();
        if buffer.k > 0 {
            buffer.step1c();
            buffer.step2();
            buffer.step3();
            buffer.step4();
            buffer.step5();
        }
        buffer.into_stem()
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}

/// Working state of one stemming run.
///
/// `b[0..=k]` is the current word. `j` marks the end of the stem in front of
/// the suffix found by the last successful [`StemBuffer::ends`] call, and may
/// be -1 when the suffix is the whole word.
struct StemBuffer {
    b: Vec<u8>,
    k: isize,
    j: isize,
}

impl StemBuffer {
    fn new(word: &str) -> Self {
        StemBuffer {
            b: word.as_bytes().to_vec(),
            k: word.len() as isize - 1,
            j: 0,
        }
    }

    fn into_stem(self) -> String {
        self.b[..=self.k as usize]
            .iter()
            .map(|&c| c as char)
            .collect()
    }

    fn at(&self, i: isize) -> u8 {
        self.b[i as usize]
    }

    /// True when `b[i]` is a consonant. A `y` is a consonant at the start
    /// of the word or after a vowel.
    fn is_consonant(&self, i: isize) -> bool {
        match self.at(i) {
            b'a' | b'e' | b'i' | b'o' | b'u' => false,
            b'y' => i == 0 || !self.is_consonant(i - 1),
            _ => true,
        }
    }

    /// The measure m of `b[0..=j]`: the number of VC sequences in the form
    /// `[C](VC){m}[V]`.
    fn measure(&self) -> usize {
        let mut n = 0;
        let mut i = 0;
        loop {
            if i > self.j {
                return n;
            }
            if !self.is_consonant(i) {
                break;
            }
            i += 1;
        }
        i += 1;
        loop {
            loop {
                if i > self.j {
                    return n;
                }
                if self.is_consonant(i) {
                    break;
                }
                i += 1;
            }
            i += 1;
            n += 1;
            loop {
                if i > self.j {
                    return n;
                }
                if !self.is_consonant(i) {
                    break;
                }
                i += 1;
            }
            i += 1;
        }
    }

    /// True when `b[0..=j]` contains a vowel.
    fn vowel_in_stem(&self) -> bool {
        (0..=self.j).any(|i| !self.is_consonant(i))
    }

    /// True when `b[i-1..=i]` is a double consonant.
    fn double_consonant(&self, i: isize) -> bool {
        i >= 1 && self.at(i) == self.at(i - 1) && self.is_consonant(i)
    }

    /// True when `b[i-2..=i]` is consonant-vowel-consonant and the last
    /// consonant is not w, x or y (`hop`, not `snow`).
    fn cvc(&self, i: isize) -> bool {
        if i < 2 || !self.is_consonant(i) || self.is_consonant(i - 1) || !self.is_consonant(i - 2)
        {
            return false;
        }
        !matches!(self.at(i), b'w' | b'x' | b'y')
    }

    /// True when the word ends with `suffix`; sets `j` in front of it.
    fn ends(&mut self, suffix: &str) -> bool {
        let suffix = suffix.as_bytes();
        let len = suffix.len() as isize;
        if len > self.k + 1 {
            return false;
        }
        let start = (self.k - len + 1) as usize;
        if &self.b[start..=self.k as usize] != suffix {
            return false;
        }
        self.j = self.k - len;
        true
    }

    /// Replace `b[j+1..=k]` with `replacement`.
    fn set_to(&mut self, replacement: &str) {
        self.b.truncate((self.j + 1) as usize);
        self.b.extend_from_slice(replacement.as_bytes());
        self.k = self.j + replacement.len() as isize;
    }

    /// [`StemBuffer::set_to`] guarded by m > 0.
    fn replace_if_measured(&mut self, replacement: &str) {
        if self.measure() > 0 {
            self.set_to(replacement);
        }
    }

    /// Apply the first rule whose suffix matches, then stop.
    fn apply_first(&mut self, rules: &[(&str, &str)]) {
        for (suffix, replacement) in rules {
            if self.ends(suffix) {
                self.replace_if_measured(replacement);
                return;
            }
        }
    }

    /// Plurals and -ed or -ing.
    fn step1ab(&mut self) {
        if self.at(self.k) == b's' {
            if self.ends("sses") {
                self.k -= 2;
            } else if self.ends("ies") {
                self.set_to("i");
            } else if self.at(self.k - 1) != b's' {
                self.k -= 1;
            }
        }

        if self.ends("eed") {
            if self.measure() > 0 {
                self.k -= 1;
            }
        } else if (self.ends("ed") || self.ends("ing")) && self.vowel_in_stem() {
            self.k = self.j;
            if self.ends("at") {
                self.set_to("ate");
            } else if self.ends("bl") {
                self.set_to("ble");
            } else if self.ends("iz") {
                self.set_to("ize");
            } else if self.double_consonant(self.k) {
                self.k -= 1;
                if matches!(self.at(self.k), b'l' | b's' | b'z') {
                    self.k += 1;
                }
            } else if self.measure() == 1 && self.cvc(self.k) {
                self.set_to("e");
            }
        }
    }

    /// Terminal y → i when there is another vowel in the stem.
    fn step1c(&mut self) {
        if self.ends("y") && self.vowel_in_stem() {
            let k = self.k as usize;
            self.b[k] = b'i';
        }
    }

    /// Double suffixes to single ones, keyed on the penultimate letter.
    fn step2(&mut self) {
        let rules: &[(&str, &str)] = match self.at(self.k - 1) {
            b'a' => &[("ational", "ate"), ("tional", "tion")],
            b'c' => &[("enci", "ence"), ("anci", "ance")],
            b'e' => &[("izer", "ize")],
            b'l' => &[
                ("bli", "ble"),
                ("alli", "al"),
                ("entli", "ent"),
                ("eli", "e"),
                ("ousli", "ous"),
            ],
            b'o' => &[("ization", "ize"), ("ation", "ate"), ("ator", "ate")],
            b's' => &[
                ("alism", "al"),
                ("iveness", "ive"),
                ("fulness", "ful"),
                ("ousness", "ous"),
            ],
            b't' => &[("aliti", "al"), ("iviti", "ive"), ("biliti", "ble")],
            b'g' => &[("logi", "log")],
            _ => return,
        };
        self.apply_first(rules);
    }

    /// -ic-, -full, -ness etc., keyed on the last letter.
    fn step3(&mut self) {
        let rules: &[(&str, &str)] = match self.at(self.k) {
            b'e' => &[("icate", "ic"), ("ative", ""), ("alize", "al")],
            b'i' => &[("iciti", "ic")],
            b'l' => &[("ical", "ic"), ("ful", "")],
            b's' => &[("ness", "")],
            _ => return,
        };
        self.apply_first(rules);
    }

    /// Strip -ant, -ence etc. in context <c>vcvc<v>.
    fn step4(&mut self) {
        let suffixes: &[&str] = match self.at(self.k - 1) {
            b'a' => &["al"],
            b'c' => &["ance", "ence"],
            b'e' => &["er"],
            b'i' => &["ic"],
            b'l' => &["able", "ible"],
            b'n' => &["ant", "ement", "ment", "ent"],
            b'o' => {
                let sion_or_tion = self.ends("ion")
                    && self.j >= 0
                    && matches!(self.at(self.j), b's' | b't');
                if !sion_or_tion && !self.ends("ou") {
                    return;
                }
                &[]
            }
            b's' => &["ism"],
            b't' => &["ate", "iti"],
            b'u' => &["ous"],
            b'v' => &["ive"],
            b'z' => &["ize"],
            _ => return,
        };
        if !suffixes.is_empty() && !suffixes.iter().any(|suffix| self.ends(suffix)) {
            return;
        }
        if self.measure() > 1 {
            self.k = self.j;
        }
    }

    /// Remove a final -e if m > 1, and change -ll to -l if m > 1.
    fn step5(&mut self) {
        self.j = self.k;
        if self.at(self.k) == b'e' {
            let m = self.measure();
            if m > 1 || (m == 1 && !self.cvc(self.k - 1)) {
                self.k -= 1;
            }
        }
        if self.at(self.k) == b'l' && self.double_consonant(self.k) && self.measure() > 1 {
            self.k -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stem(word: &str) -> String {
        PorterStemmer::new().stem(word)
    }

    #[test]
    fn test_step1_plurals_and_participles() {
        assert_eq!(stem("caresses"), "caress");
        assert_eq!(stem("ponies"), "poni");
        assert_eq!(stem("cats"), "cat");
        assert_eq!(stem("agreed"), "agre");
        assert_eq!(stem("hopping"), "hop");
        assert_eq!(stem("running"), "run");
        assert_eq!(stem("died"), "di");
        assert_eq!(stem("measuring"), "measur");
        assert_eq!(stem("happy"), "happi");
    }

    #[test]
    fn test_later_steps() {
        assert_eq!(stem("relational"), "relat");
        assert_eq!(stem("generalization"), "gener");
        assert_eq!(stem("itemization"), "item");
        assert_eq!(stem("sensational"), "sensat");
        assert_eq!(stem("traditional"), "tradit");
        assert_eq!(stem("disabled"), "disabl");
        assert_eq!(stem("hopeful"), "hope");
        assert_eq!(stem("goodness"), "good");
    }

    #[test]
    fn test_short_and_non_ascii_words_unchanged() {
        assert_eq!(stem("us"), "us");
        assert_eq!(stem("IS"), "is");
        assert_eq!(stem("zürich"), "zürich");
    }

    #[test]
    fn test_deterministic() {
        let stemmer = PorterStemmer::new();
        assert_eq!(stemmer.stem("shipments"), stemmer.stem("shipments"));
        assert_eq!(stemmer.name(), "porter");
    }
}
