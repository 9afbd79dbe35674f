//! Content filtering for example files
//!
//! An example is dropped when its source mentions a class the browser
//! runtime does not provide. Matching is plain substring containment: most
//! words carry one trailing space so that `MidiIn min;` matches while
//! `MidiInput` does not. This is a crude token boundary and over-matches
//! identifiers that merely end in an excluded word (`MyHid h;`). The
//! published index depends on these exact matches.

/// Classes matched with a single trailing space appended.
pub const SPACED_WORDS: &[&str] = &[
    "OscIn",
    "OscOut",
    "Hid",
    "HidMsg",
    "MidiIn",
    "MidiOut",
    "MidiMsg",
    "MidiFileIn",
    "ConsoleInput",
    // data files are not shipped alongside the examples
    "SndBuf",
    "SndBuf2",
];

/// Classes matched bare, without a trailing space.
pub const BARE_WORDS: &[&str] = &["SerialIO", "Serial"];

/// The ordered list of substrings that disqualify an example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionWords(Vec<String>);

impl ExclusionWords {
    /// Build the set from words that get a trailing space and words that
    /// are used verbatim. Spaced words come first.
    pub fn new<S, B>(spaced: S, bare: B) -> Self
    where
        S: IntoIterator,
        S::Item: AsRef<str>,
        B: IntoIterator,
        B::Item: AsRef<str>,
    {
        let mut patterns: Vec<String> = spaced
            .into_iter()
            .map(|w| format!("{} ", w.as_ref()))
            .collect();
        patterns.extend(bare.into_iter().map(|w| w.as_ref().to_string()));
        Self(patterns)
    }

    /// The exact substrings searched for, in match order.
    pub fn patterns(&self) -> &[String] {
        &self.0
    }

    /// First pattern (in list order) that occurs in `text`.
    pub fn first_match(&self, text: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|pattern| text.contains(pattern.as_str()))
            .map(String::as_str)
    }
}

impl Default for ExclusionWords {
    fn default() -> Self {
        Self::new(SPACED_WORDS, BARE_WORDS)
    }
}

/// Example filter based on source content.
/// This is a newtype wrapper around ExclusionWords for future extensibility.
#[derive(Debug, Clone, Default)]
pub struct FileFilter(ExclusionWords);

impl FileFilter {
    pub fn new(words: ExclusionWords) -> Self {
        Self(words)
    }

    /// Check if an example with this source should be included.
    pub fn is_included(&self, content: &str) -> bool {
        self.excluded_by(content).is_none()
    }

    /// The pattern responsible for excluding `content`, if any.
    pub fn excluded_by<'a>(&'a self, content: &str) -> Option<&'a str> {
        self.0.first_match(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_patterns() {
        let words = ExclusionWords::default();
        let patterns = words.patterns();
        assert_eq!(patterns.len(), 13);
        assert_eq!(patterns[0], "OscIn ");
        assert_eq!(patterns[10], "SndBuf2 ");
        // bare words keep no trailing space
        assert_eq!(patterns[11], "SerialIO");
        assert_eq!(patterns[12], "Serial");
    }

    #[test]
    fn test_plain_example_is_included() {
        let filter = FileFilter::default();
        assert!(filter.is_included("SinOsc s => dac;\n1::second => now;"));
        assert!(filter.is_included(""));
    }

    #[test]
    fn test_spaced_word_excludes() {
        let filter = FileFilter::default();
        assert!(!filter.is_included("MidiIn min; "));
        assert!(!filter.is_included("OscOut xmit;"));
        assert!(!filter.is_included("SndBuf buf => dac;"));
    }

    #[test]
    fn test_trailing_space_is_required() {
        let filter = FileFilter::default();
        // no space directly after the class name
        assert!(filter.is_included("MidiIn\tmin;"));
        assert!(filter.is_included("MidiInput m;"));
        assert!(filter.is_included("// see Hid.ck"));
    }

    #[test]
    fn test_suffix_overmatch_is_preserved() {
        let filter = FileFilter::default();
        // "MyHid " contains "Hid "
        assert_eq!(filter.excluded_by("MyHid h;"), Some("Hid "));
    }

    #[test]
    fn test_bare_words_match_anywhere() {
        let filter = FileFilter::default();
        assert_eq!(filter.excluded_by("SerialIO.list() @=> string list[];"), Some("SerialIO"));
        assert_eq!(filter.excluded_by("// Serial port demo"), Some("Serial"));
        assert_eq!(filter.excluded_by("MySerialThing"), Some("Serial"));
    }

    #[test]
    fn test_first_match_follows_list_order() {
        let filter = FileFilter::default();
        // "HidMsg " matches, "Hid " does not
        assert_eq!(filter.excluded_by("HidMsg msg;"), Some("HidMsg "));
        // both "Hid " and "HidMsg " occur, "Hid " is listed first
        assert_eq!(filter.excluded_by("Hid hi; HidMsg msg;"), Some("Hid "));
    }

    #[test]
    fn test_custom_words() {
        let filter = FileFilter::new(ExclusionWords::new(["Blit"], ["adc"]));
        assert!(!filter.is_included("Blit b;"));
        assert!(!filter.is_included("adc => dac;"));
        assert!(filter.is_included("MidiIn min; "));
    }
}
