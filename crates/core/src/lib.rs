//! GeneAlchemy Core Library
//!
//! Moteur d'analyse de séquences biologiques courtes (ADN, ARN, protéine):
//! validation d'alphabet, composition (comptage, contenu GC), transformations
//! (complément, transcription, traduction) et recherche de motifs et de
//! palindromes inverse-complémentaires.

pub mod alphabet;
pub mod codon;
pub mod error;
pub mod logging;
pub mod sequence;

mod composition;
mod pattern;
mod transform;

// Réexportations principales
pub use alphabet::{Alphabet, DnaAlphabet, ProteinAlphabet, RnaAlphabet};
pub use codon::translate_codon;
pub use error::{Result, SequenceError};
pub use logging::init_logging;
pub use sequence::{DnaSequence, ProteinSequence, RnaSequence, Seq, Sequence};
