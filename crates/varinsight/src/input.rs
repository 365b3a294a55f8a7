use std::fmt::{self, Display};

/// A variant and the gene it sits in, as typed by a user.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VariantQuery {
    /// The cDNA or protein change, e.g. `c.1187G>A`.
    pub variant: String,
    /// The gene symbol, e.g. `CMTR1`.
    pub gene: String,
}

impl VariantQuery {
    /// Parses free text such as `c.1187G>A in CMTR1 gene`,
    /// `c.1026_1027delinsCA + SCN1A` or `p.Arg396Gln CMTR1`.
    ///
    /// Returns `None` if the text doesn't name both parts.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let (variant, gene) = text
            .split_once(" + ")
            .or_else(|| text.split_once(" in "))
            .or_else(|| text.split_once(char::is_whitespace))?;

        let variant = variant.trim();
        let gene = gene.trim();
        let gene = gene
            .strip_suffix(" gene")
            .or_else(|| gene.strip_suffix(" Gene"))
            .unwrap_or(gene)
            .trim();
        if !is_term(variant) || !is_term(gene) {
            return None;
        }

        Some(Self {
            variant: variant.to_owned(),
            gene: gene.to_owned(),
        })
    }
}

/// A single word carrying at least one letter or digit.
fn is_term(part: &str) -> bool {
    !part.contains(char::is_whitespace)
        && part.chars().any(char::is_alphanumeric)
}

impl Display for VariantQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in {}", self.variant, self.gene)
    }
}
