use core::fmt;

use serde::{Deserialize, Serialize};

use super::Nucleotide;

/// One position of a recognition pattern: a concrete base or an IUPAC
/// ambiguity code.
///
/// Ambiguity applies to pattern symbols only. A `Symbol` matches the set of
/// concrete bases it names; the sequence-side placeholder `Nucleotide::N` is
/// matched exclusively by `Symbol::N`, never by a concrete or partially
/// ambiguous symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Symbol {
    A,
    C,
    G,
    T,
    /// Purine (A or G)
    R,
    /// Pyrimidine (C or T)
    Y,
    /// Amino (A or C)
    M,
    /// Keto (G or T)
    K,
    /// Strong (C or G)
    S,
    /// Weak (A or T)
    W,
    /// Not G (A, C or T)
    H,
    /// Not A (C, G or T)
    B,
    /// Not T (A, C or G)
    V,
    /// Not C (A, G or T)
    D,
    /// Any base
    N,
}

impl Symbol {
    /// Convert from an ASCII byte, accepting lowercase. Returns `None` for
    /// characters outside the IUPAC alphabet.
    #[inline]
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        match byte.to_ascii_uppercase() {
            b'A' => Some(Self::A),
            b'C' => Some(Self::C),
            b'G' => Some(Self::G),
            b'T' => Some(Self::T),
            b'R' => Some(Self::R),
            b'Y' => Some(Self::Y),
            b'M' => Some(Self::M),
            b'K' => Some(Self::K),
            b'S' => Some(Self::S),
            b'W' => Some(Self::W),
            b'H' => Some(Self::H),
            b'B' => Some(Self::B),
            b'V' => Some(Self::V),
            b'D' => Some(Self::D),
            b'N' => Some(Self::N),
            _ => None,
        }
    }

    /// Convert to an uppercase ASCII byte representing this symbol.
    #[inline(always)]
    pub const fn to_ascii(self) -> u8 {
        match self {
            Self::A => b'A',
            Self::C => b'C',
            Self::G => b'G',
            Self::T => b'T',
            Self::R => b'R',
            Self::Y => b'Y',
            Self::M => b'M',
            Self::K => b'K',
            Self::S => b'S',
            Self::W => b'W',
            Self::H => b'H',
            Self::B => b'B',
            Self::V => b'V',
            Self::D => b'D',
            Self::N => b'N',
        }
    }

    /// Convert to an uppercase `char` representing this symbol.
    #[inline(always)]
    pub const fn to_char(self) -> char {
        self.to_ascii() as char
    }

    /// Return true if this symbol matches `base` under ambiguity expansion.
    ///
    /// `Symbol::N` matches every base including the sequence placeholder
    /// `Nucleotide::N`; every other symbol matches only the concrete bases
    /// in its expansion set.
    #[inline]
    pub const fn matches(self, base: Nucleotide) -> bool {
        if matches!(self, Self::N) {
            return true;
        }
        match base {
            Nucleotide::N => false,
            Nucleotide::A => matches!(
                self,
                Self::A | Self::R | Self::M | Self::W | Self::H | Self::V | Self::D
            ),
            Nucleotide::C => matches!(
                self,
                Self::C | Self::Y | Self::M | Self::S | Self::H | Self::B | Self::V
            ),
            Nucleotide::G => matches!(
                self,
                Self::G | Self::R | Self::K | Self::S | Self::B | Self::V | Self::D
            ),
            Nucleotide::T => matches!(
                self,
                Self::T | Self::Y | Self::K | Self::W | Self::H | Self::B | Self::D
            ),
        }
    }

    /// Return the IUPAC complement of this symbol.
    ///
    /// The complement of an ambiguity code is the code naming the
    /// complements of its expansion set (R <-> Y, M <-> K, B <-> V,
    /// D <-> H; S, W and N are self-complementary).
    #[inline]
    pub const fn complement(self) -> Self {
        match self {
            Self::A => Self::T,
            Self::T => Self::A,
            Self::C => Self::G,
            Self::G => Self::C,
            Self::R => Self::Y,
            Self::Y => Self::R,
            Self::M => Self::K,
            Self::K => Self::M,
            Self::S => Self::S,
            Self::W => Self::W,
            Self::H => Self::D,
            Self::D => Self::H,
            Self::B => Self::V,
            Self::V => Self::B,
            Self::N => Self::N,
        }
    }
}

impl From<Nucleotide> for Symbol {
    /// Every concrete base is also a valid pattern symbol.
    #[inline]
    fn from(base: Nucleotide) -> Self {
        match base {
            Nucleotide::A => Self::A,
            Nucleotide::C => Self::C,
            Nucleotide::G => Self::G,
            Nucleotide::T => Self::T,
            Nucleotide::N => Self::N,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
