//! Curated catalog of common restriction enzymes.
//!
//! The catalog maps enzyme names to their IUPAC recognition patterns and
//! backs cutting-agent resolution: a user can name an enzyme ("EcoRI")
//! instead of spelling out its recognition site.

use serde::Serialize;

use crate::base::RecognitionPattern;
use crate::errors::AnalysisError;

/// A named restriction enzyme and its recognition pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Enzyme {
    /// Enzyme name (e.g. "EcoRI").
    pub name: &'static str,
    /// Recognition site in IUPAC DNA, uppercase.
    pub recognition: &'static str,
}

impl Enzyme {
    /// Parse the recognition site into a pattern.
    pub fn pattern(&self) -> Result<RecognitionPattern, AnalysisError> {
        self.recognition.parse()
    }
}

/// The built-in enzyme catalog.
///
/// A small curated set covering the common laboratory enzymes, including a
/// few with degenerate recognition sites.
pub const CATALOG: &[Enzyme] = &[
    Enzyme { name: "EcoRI", recognition: "GAATTC" },
    Enzyme { name: "BamHI", recognition: "GGATCC" },
    Enzyme { name: "HindIII", recognition: "AAGCTT" },
    Enzyme { name: "NotI", recognition: "GCGGCCGC" },
    Enzyme { name: "XhoI", recognition: "CTCGAG" },
    Enzyme { name: "SalI", recognition: "GTCGAC" },
    Enzyme { name: "BglII", recognition: "AGATCT" },
    Enzyme { name: "NcoI", recognition: "CCATGG" },
    Enzyme { name: "NdeI", recognition: "CATATG" },
    Enzyme { name: "XbaI", recognition: "TCTAGA" },
    Enzyme { name: "SpeI", recognition: "ACTAGT" },
    Enzyme { name: "KpnI", recognition: "GGTACC" },
    Enzyme { name: "PstI", recognition: "CTGCAG" },
    Enzyme { name: "EcoRV", recognition: "GATATC" },
    Enzyme { name: "SmaI", recognition: "CCCGGG" },
    Enzyme { name: "ScaI", recognition: "AGTACT" },
    Enzyme { name: "HincII", recognition: "GTYRAC" },
    Enzyme { name: "AvaII", recognition: "GGWCC" },
    Enzyme { name: "DdeI", recognition: "CTNAG" },
    Enzyme { name: "BstXI", recognition: "CCANNNNNNTGG" },
];

/// Look up an enzyme by name, case-insensitively.
pub fn lookup(name: &str) -> Option<&'static Enzyme> {
    let name = name.trim();
    CATALOG.iter().find(|e| e.name.eq_ignore_ascii_case(name))
}
