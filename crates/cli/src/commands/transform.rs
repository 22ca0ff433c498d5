//! Commandes de transformation: complément, transcription, traduction

use anyhow::Result;
use genealchemy_core::{DnaSequence, RnaSequence, Sequence};

use super::ensure_valid;
use crate::display::report;

pub fn complement(sequence: &str, json: bool) -> Result<()> {
    let dna = DnaSequence::new(sequence);
    ensure_valid(&dna)?;

    report::transform("complement", dna.raw(), &dna.complement(), json)
}

pub fn transcribe(sequence: &str, json: bool) -> Result<()> {
    let dna = DnaSequence::new(sequence);
    ensure_valid(&dna)?;

    let rna = dna.transcribe();
    report::transform("transcription", dna.raw(), rna.raw(), json)
}

pub fn translate(sequence: &str, json: bool) -> Result<()> {
    let rna = RnaSequence::new(sequence);
    ensure_valid(&rna)?;

    let protein = rna.translate();
    report::transform("traduction", rna.raw(), protein.raw(), json)
}
