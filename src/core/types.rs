/// sgRNA lengths for which precomputed annotation tables exist
pub const SUPPORTED_SGRNA_LENGTHS: [usize; 2] = [19, 20];

/// Genome assemblies with precomputed annotation tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Assembly {
    Hg19,
    Hg38,
    Mm9,
    Mm10,
}

impl Assembly {
    /// Lowercase assembly name as it appears in annotation table file names
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hg19 => "hg19",
            Self::Hg38 => "hg38",
            Self::Mm9 => "mm9",
            Self::Mm10 => "mm10",
        }
    }
}

impl std::fmt::Display for Assembly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the sgRNA length used for annotation table selection is chosen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LengthMode {
    /// Use the lengths observed in the library file
    #[default]
    Auto,
    /// Force 19 bp annotation tables
    #[value(name = "19")]
    Bp19,
    /// Force 20 bp annotation tables
    #[value(name = "20")]
    Bp20,
}

impl LengthMode {
    /// The explicitly requested length, or `None` for auto mode
    #[must_use]
    pub fn explicit(self) -> Option<usize> {
        match self {
            Self::Auto => None,
            Self::Bp19 => Some(19),
            Self::Bp20 => Some(20),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assembly_display() {
        assert_eq!(Assembly::Hg38.to_string(), "hg38");
        assert_eq!(Assembly::Mm9.to_string(), "mm9");
    }

    #[test]
    fn test_length_mode_explicit() {
        assert_eq!(LengthMode::Auto.explicit(), None);
        assert_eq!(LengthMode::Bp19.explicit(), Some(19));
        assert_eq!(LengthMode::Bp20.explicit(), Some(20));
    }
}
