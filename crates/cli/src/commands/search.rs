//! Commandes de recherche: motifs exacts et palindromes

use anyhow::Result;
use genealchemy_core::{DnaSequence, RnaSequence};

use super::ensure_valid;
use crate::display::report;
use crate::NucleotideKind;

pub fn motif(kind: NucleotideKind, sequence: &str, motif: &str, json: bool) -> Result<()> {
    let positions = match kind {
        NucleotideKind::Dna => {
            let dna = DnaSequence::new(sequence);
            ensure_valid(&dna)?;
            dna.find_motif(motif)?
        }
        NucleotideKind::Rna => {
            let rna = RnaSequence::new(sequence);
            ensure_valid(&rna)?;
            rna.find_motif(motif)?
        }
    };

    report::motif(kind.label(), sequence, motif, &positions, json)
}

pub fn palindromes(kind: NucleotideKind, sequence: &str, json: bool) -> Result<()> {
    let found = match kind {
        NucleotideKind::Dna => {
            let dna = DnaSequence::new(sequence);
            ensure_valid(&dna)?;
            dna.find_palindromes()
        }
        NucleotideKind::Rna => {
            let rna = RnaSequence::new(sequence);
            ensure_valid(&rna)?;
            rna.find_palindromes()
        }
    };

    report::palindromes(kind.label(), sequence, &found, json)
}
