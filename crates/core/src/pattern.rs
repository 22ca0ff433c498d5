//! Recherche de motifs exacts et de palindromes inverse-complémentaires
//!
//! Le balayage des palindromes est volontairement en force brute sur les
//! O(n²) sous-chaînes: le contrat documente la justesse avant la
//! performance, les entrées étant des séquences courtes saisies à la main.

use tracing::debug;

use crate::error::{Result, SequenceError};

/// Positions de départ (base 1) de chaque occurrence du motif
///
/// Les occurrences chevauchantes sont incluses: après une occurrence en
/// position p, la recherche reprend en p+1. Le motif est mis en majuscules
/// avant le balayage; un motif vide est une erreur de contrat.
pub(crate) fn motif_positions(text: &str, motif: &str) -> Result<Vec<usize>> {
    if motif.is_empty() {
        return Err(SequenceError::EmptyMotif);
    }

    let haystack = text.to_ascii_uppercase();
    let needle = motif.to_ascii_uppercase();
    let mut positions = Vec::new();

    if needle.len() <= haystack.len() {
        for start in 0..=haystack.len() - needle.len() {
            if haystack[start..start + needle.len()] == needle {
                positions.push(start + 1);
            }
        }
    }

    debug!(motif = %needle, occurrences = positions.len(), "recherche de motif");
    Ok(positions)
}

/// Sous-chaînes égales à leur propre complément inverse
///
/// Énumère toutes les sous-chaînes de longueur ≥ 2 (départ croissant, fin
/// croissante) et retient celles dont le complément inversé, remis en
/// majuscules, est identique à la sous-chaîne. Les doublons trouvés à des
/// offsets différents sont tous rapportés, dans l'ordre de découverte.
pub(crate) fn palindromic_substrings(text: &str, complement: fn(u8) -> u8) -> Vec<String> {
    let normalized = text.to_ascii_uppercase();
    let bytes = normalized.as_bytes();
    let n = bytes.len();
    let mut palindromes = Vec::new();

    for start in 0..n {
        for end in start + 2..=n {
            let sub = &bytes[start..end];
            let is_palindrome = sub
                .iter()
                .zip(sub.iter().rev())
                .all(|(&a, &b)| a == complement(b));
            if is_palindrome {
                palindromes.push(normalized[start..end].to_string());
            }
        }
    }

    debug!(total = palindromes.len(), "balayage des palindromes");
    palindromes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{dna_complement, rna_complement};

    #[test]
    fn test_motif_chevauchant() {
        assert_eq!(motif_positions("AAAA", "AA").unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_motif_absent() {
        assert_eq!(motif_positions("ATCG", "GGG").unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn test_motif_plus_long_que_le_texte() {
        assert_eq!(motif_positions("AT", "ATCG").unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn test_motif_insensible_a_la_casse() {
        assert_eq!(motif_positions("ATCGATCG", "atc").unwrap(), vec![1, 5]);
    }

    #[test]
    fn test_motif_vide_refuse() {
        assert_eq!(motif_positions("ATCG", ""), Err(SequenceError::EmptyMotif));
    }

    #[test]
    fn test_palindromes_site_ecori() {
        // GAATTC est son propre complément inverse (site EcoRI)
        let found = palindromic_substrings("GAATTC", dna_complement);
        assert_eq!(found, vec!["GAATTC", "AATT", "AT"]);
    }

    #[test]
    fn test_palindromes_doublons_conserves() {
        // AT apparaît à deux offsets, les deux sont rapportés
        let found = palindromic_substrings("ATAT", dna_complement);
        assert_eq!(found, vec!["AT", "ATAT", "TA", "AT"]);
    }

    #[test]
    fn test_palindromes_aucun() {
        assert!(palindromic_substrings("AAA", dna_complement).is_empty());
    }

    #[test]
    fn test_palindromes_arn() {
        let found = palindromic_substrings("GAAUUC", rna_complement);
        assert_eq!(found, vec!["GAAUUC", "AAUU", "AU"]);
    }
}
