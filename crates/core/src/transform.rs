//! Transformations de séquences: complément et transcription
//!
//! Le complément est émis caractère par caractère, sans inversion du brin.
//! C'est un choix de compatibilité assumé avec le comportement de
//! référence: il diffère du complément inverse biologique, qui s'obtient
//! ici en combinant ce complément avec une inversion côté appelant.

/// Table de complément ADN: A↔T, C↔G
pub(crate) fn dna_complement(b: u8) -> u8 {
    match b.to_ascii_uppercase() {
        b'A' => b'T',
        b'T' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        other => other,
    }
}

/// Table de complément ARN: A↔U, C↔G
pub(crate) fn rna_complement(b: u8) -> u8 {
    match b.to_ascii_uppercase() {
        b'A' => b'U',
        b'U' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        other => other,
    }
}

/// Applique une table de complément à tout le texte, en majuscules
pub(crate) fn complement_text(text: &str, complement: fn(u8) -> u8) -> String {
    text.bytes().map(|b| complement(b) as char).collect()
}

/// Transcrit un texte ADN en ARN: T → U, le reste inchangé
pub(crate) fn transcribe_text(dna: &str) -> String {
    dna.to_ascii_uppercase().replace('T', "U")
}
