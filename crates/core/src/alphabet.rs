//! Alphabets des séquences biologiques
//!
//! Chaque alphabet est un type marqueur de taille nulle qui porte l'ensemble
//! des symboles autorisés (en majuscules). Les codes d'ambiguïté IUPAC
//! (N, bases dégénérées) sont volontairement exclus: le moteur ne traite
//! que les symboles standards.

/// Alphabet d'un genre de séquence
pub trait Alphabet: Clone + 'static {
    /// Nom lisible du genre (ex. "ADN")
    const NAME: &'static str;

    /// Symboles autorisés, en majuscules
    const SYMBOLS: &'static [u8];

    /// Vérifie qu'un caractère appartient à l'alphabet (insensible à la casse)
    fn contains(b: u8) -> bool {
        Self::SYMBOLS.contains(&b.to_ascii_uppercase())
    }
}

/// Alphabet ADN: A, T, C, G
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DnaAlphabet;

impl Alphabet for DnaAlphabet {
    const NAME: &'static str = "ADN";
    const SYMBOLS: &'static [u8] = b"ATCG";
}

/// Alphabet ARN: A, U, C, G
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RnaAlphabet;

impl Alphabet for RnaAlphabet {
    const NAME: &'static str = "ARN";
    const SYMBOLS: &'static [u8] = b"AUCG";
}

/// Alphabet protéique: les 20 acides aminés standards (code à une lettre)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProteinAlphabet;

impl Alphabet for ProteinAlphabet {
    const NAME: &'static str = "protéine";
    const SYMBOLS: &'static [u8] = b"ACDEFGHIKLMNPQRSTVWY";
}
