//! Composition: comptage des nucléotides et contenu GC

use std::collections::BTreeMap;

use crate::error::{Result, SequenceError};

/// Pourcentage de caractères G ou C dans le texte
///
/// Échoue avec [`SequenceError::EmptySequence`] sur un texte vide pour
/// éviter la division par zéro.
pub(crate) fn gc_percent(text: &str) -> Result<f64> {
    if text.is_empty() {
        return Err(SequenceError::EmptySequence);
    }
    let gc = text
        .bytes()
        .filter(|b| matches!(b.to_ascii_uppercase(), b'G' | b'C'))
        .count();
    Ok(100.0 * gc as f64 / text.len() as f64)
}

/// Compte les occurrences de chaque symbole du texte
///
/// Le résultat contient une entrée par symbole de l'alphabet, à zéro par
/// défaut. Un caractère hors alphabet (impossible après validation) est
/// quand même compté sous sa propre clé pour garder un décompte exhaustif.
pub(crate) fn tally(text: &str, alphabet: &[u8]) -> BTreeMap<char, usize> {
    let mut counts: BTreeMap<char, usize> =
        alphabet.iter().map(|&b| (b as char, 0)).collect();
    for c in text.to_ascii_uppercase().chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}
