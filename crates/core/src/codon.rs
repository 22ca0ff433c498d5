//! Table des codons et traduction ARN → protéine
//!
//! Code génétique standard complet (table NCBI n°1), stocké comme tableau
//! constant de 64 entrées indexé par codon. Les trois codons stop (UAA,
//! UAG, UGA) ne produisent aucun acide aminé: toute recherche qui échoue
//! termine la traduction, ce qui modélise un arrêt prématuré et non une
//! erreur.

use tracing::debug;

// Encodage des bases: A=0, C=1, G=2, U=3
fn base_index(b: u8) -> Option<usize> {
    match b.to_ascii_uppercase() {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'U' => Some(3),
        _ => None,
    }
}

/// Convertit un codon de 3 bases en indice dans [0, 64)
fn codon_index(codon: &[u8]) -> Option<usize> {
    if codon.len() != 3 {
        return None;
    }
    let b1 = base_index(codon[0])?;
    let b2 = base_index(codon[1])?;
    let b3 = base_index(codon[2])?;
    Some(b1 * 16 + b2 * 4 + b3)
}

// Ordre des codons: AAA, AAC, AAG, AAU, ACA, ACC, ACG, ACU, AGA, AGC, AGG,
// AGU, AUA, AUC, AUG, AUU, CAA, ... , UUA, UUC, UUG, UUU
// '*' marque les codons stop (absents de la correspondance).
const STANDARD_CODE: [u8; 64] = [
    b'K', b'N', b'K', b'N', b'T', b'T', b'T', b'T', b'R', b'S', b'R', b'S',
    b'I', b'I', b'M', b'I', b'Q', b'H', b'Q', b'H', b'P', b'P', b'P', b'P',
    b'R', b'R', b'R', b'R', b'L', b'L', b'L', b'L', b'E', b'D', b'E', b'D',
    b'A', b'A', b'A', b'A', b'G', b'G', b'G', b'G', b'V', b'V', b'V', b'V',
    b'*', b'Y', b'*', b'Y', b'S', b'S', b'S', b'S', b'*', b'C', b'W', b'C',
    b'L', b'F', b'L', b'F',
];

/// Traduit un codon ARN en acide aminé
///
/// Retourne `None` pour un codon stop ou un triplet hors table, ce qui
/// interrompt la traduction chez l'appelant.
pub fn translate_codon(codon: &[u8]) -> Option<char> {
    let idx = codon_index(codon)?;
    match STANDARD_CODE[idx] {
        b'*' => None,
        aa => Some(aa as char),
    }
}

/// Traduit un texte ARN en chaîne protéique
///
/// Parcourt le texte en triplets non chevauchants depuis l'offset 0.
/// Le premier codon introuvable arrête la traduction et le reste de la
/// séquence est ignoré; les 1 à 2 caractères finaux d'un texte dont la
/// longueur n'est pas multiple de 3 sont ignorés aussi.
pub(crate) fn translate_text(rna: &str) -> String {
    let text = rna.to_ascii_uppercase();
    let bytes = text.as_bytes();
    let mut protein = String::with_capacity(bytes.len() / 3);

    for triplet in bytes.chunks_exact(3) {
        match translate_codon(triplet) {
            Some(aa) => protein.push(aa),
            None => {
                debug!(
                    codon = %String::from_utf8_lossy(triplet),
                    "arrêt de traduction sur codon hors table"
                );
                break;
            }
        }
    }

    protein
}
