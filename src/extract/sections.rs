// Section location inside a report's text.
//
// A section runs from the first heading match to the end of the document.
// Patterns are tried in order and matched case-insensitively. Apostrophes
// accept the straight quote, U+2019, and the forms a curly quote takes after
// Latin-1 decoding (WinAnsi 0x92, or the three UTF-8 bytes of U+2019).

use regex_lite::RegexBuilder;
use serde::{Deserialize, Serialize};

const MDNA_PATTERNS: &[&str] = &[
    r"management discussion and analysis",
    r"management discussion",
    r"management review",
];

const AUDITOR_PATTERNS: &[&str] = &[
    r"independent auditors?(?:'|’|\x{92}|â\x{80}\x{99})? report",
    r"auditor(?:'|’|\x{92}|â\x{80}\x{99})?s report",
];

/// Which part of a report to score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// The whole document
    #[default]
    Full,
    /// Management discussion and analysis
    Mdna,
    /// Independent auditor's report
    Auditor,
}

impl Section {
    fn patterns(&self) -> &'static [&'static str] {
        match self {
            Section::Full => &[],
            Section::Mdna => MDNA_PATTERNS,
            Section::Auditor => AUDITOR_PATTERNS,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Full => "full",
            Section::Mdna => "mdna",
            Section::Auditor => "auditor",
        }
    }
}

/// Locate `section` in `text`, returning the slice from its heading onward.
///
/// `Section::Full` always returns the whole text. Returns `None` when no
/// heading pattern matches.
pub fn locate(text: &str, section: Section) -> Option<&str> {
    if section == Section::Full {
        return Some(text);
    }

    section.patterns().iter().find_map(|pattern| {
        let re = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .ok()?;
        re.find(text).map(|m| &text[m.start()..])
    })
}
