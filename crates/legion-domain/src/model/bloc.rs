//! Bloc - The dialectical affiliation of an agent
//!
//! Bloc is a Value Object - two blocs with the same tag are equal.
//! Tags are matched case-sensitively; anything outside the known set
//! is kept verbatim as `Other`.

/// Dialectical affiliation tag
///
/// - Thesis = Order
/// - Antithesis = Chaos
/// - Synthesis = the resolution of the two
/// - Unknown = no affiliation recorded
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Bloc {
    Thesis,
    Antithesis,
    Synthesis,
    /// Any tag outside the known set, kept as written
    Other(String),
    /// Missing tag, or the literal `UNKNOWN`
    #[default]
    Unknown,
}

impl Bloc {
    /// Parse a bloc tag exactly as it appears in the archive
    pub fn parse(tag: &str) -> Self {
        match tag {
            "THESIS" => Bloc::Thesis,
            "ANTITHESIS" => Bloc::Antithesis,
            "SYNTHESIS" => Bloc::Synthesis,
            "UNKNOWN" => Bloc::Unknown,
            other => Bloc::Other(other.to_string()),
        }
    }

    /// The tag as written in the archive
    pub fn as_str(&self) -> &str {
        match self {
            Bloc::Thesis => "THESIS",
            Bloc::Antithesis => "ANTITHESIS",
            Bloc::Synthesis => "SYNTHESIS",
            Bloc::Other(tag) => tag,
            Bloc::Unknown => "UNKNOWN",
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Bloc::Unknown)
    }

    /// Thesis and Antithesis oppose each other, in either order
    pub fn opposes(&self, other: &Bloc) -> bool {
        matches!(
            (self, other),
            (Bloc::Thesis, Bloc::Antithesis) | (Bloc::Antithesis, Bloc::Thesis)
        )
    }
}

impl core::fmt::Display for Bloc {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tags() {
        assert_eq!(Bloc::parse("THESIS"), Bloc::Thesis);
        assert_eq!(Bloc::parse("ANTITHESIS"), Bloc::Antithesis);
        assert_eq!(Bloc::parse("SYNTHESIS"), Bloc::Synthesis);
        assert_eq!(Bloc::parse("UNKNOWN"), Bloc::Unknown);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(Bloc::parse("thesis"), Bloc::Other("thesis".to_string()));
        assert_eq!(Bloc::parse("ABSTAIN").as_str(), "ABSTAIN");
    }

    #[test]
    fn test_opposition_is_symmetric() {
        assert!(Bloc::Thesis.opposes(&Bloc::Antithesis));
        assert!(Bloc::Antithesis.opposes(&Bloc::Thesis));
        assert!(!Bloc::Thesis.opposes(&Bloc::Thesis));
        assert!(!Bloc::Synthesis.opposes(&Bloc::Antithesis));
        assert!(!Bloc::Unknown.opposes(&Bloc::Thesis));
    }

    #[test]
    fn test_default_is_unknown() {
        assert!(Bloc::default().is_unknown());
        assert_eq!(Bloc::default().to_string(), "UNKNOWN");
    }
}
