//! Types d'erreurs pour le moteur d'analyse

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("Séquence {kind} invalide: caractère '{found}' hors alphabet")]
    InvalidSequence { kind: &'static str, found: char },

    #[error("Séquence vide: l'opération exige au moins un caractère")]
    EmptySequence,

    #[error("Motif vide: la recherche exige un motif non vide")]
    EmptyMotif,
}

pub type Result<T> = std::result::Result<T, SequenceError>;
