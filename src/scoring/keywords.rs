// Fixed keyword sets used by the density scorer.
//
// Each set is an ordered list of lowercase substrings. Matching is raw
// substring counting against lowercased text, so stems like "advertis"
// cover "advertising" and "advertisement" alike.

/// A named, immutable keyword list.
#[derive(Debug, Clone, Copy)]
pub struct KeywordSet {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

pub const OPTIMISM: KeywordSet = KeywordSet {
    name: "optimism",
    keywords: &["strong", "robust", "record", "growth", "outperformance"],
};

pub const UNCERTAINTY: KeywordSet = KeywordSet {
    name: "uncertainty",
    keywords: &[
        "may",
        "might",
        "could",
        "risk",
        "uncertain",
        "volatility",
        "challenge",
    ],
};

pub const JUSTIFICATION: KeywordSet = KeywordSet {
    name: "justification",
    keywords: &[
        "one-time",
        "temporary",
        "non-recurring",
        "adjusted",
        "excluding",
    ],
};

pub const CFO: KeywordSet = KeywordSet {
    name: "cash flow",
    keywords: &["cash flow", "cash from operations", "operating cash", "cfo"],
};

pub const PRODUCTION: KeywordSet = KeywordSet {
    name: "production",
    keywords: &["inventory", "production", "raw material", "cost of goods"],
};

pub const DISCRETIONARY: KeywordSet = KeywordSet {
    name: "discretionary expense",
    keywords: &["marketing", "advertis", "r&d", "selling", "sg&a"],
};

/// All sets in display order.
pub const ALL: [KeywordSet; 6] = [
    OPTIMISM,
    UNCERTAINTY,
    JUSTIFICATION,
    CFO,
    PRODUCTION,
    DISCRETIONARY,
];
