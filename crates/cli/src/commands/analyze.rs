//! Commandes de composition: contenu GC et comptage des nucléotides

use anyhow::Result;
use genealchemy_core::{DnaSequence, RnaSequence};

use super::ensure_valid;
use crate::display::report;
use crate::NucleotideKind;

pub fn gc(kind: NucleotideKind, sequence: &str, json: bool) -> Result<()> {
    let gc_percent = match kind {
        NucleotideKind::Dna => {
            let dna = DnaSequence::new(sequence);
            ensure_valid(&dna)?;
            dna.gc_content()?
        }
        NucleotideKind::Rna => {
            let rna = RnaSequence::new(sequence);
            ensure_valid(&rna)?;
            rna.gc_content()?
        }
    };

    report::gc(kind.label(), sequence, gc_percent, json)
}

pub fn count(kind: NucleotideKind, sequence: &str, json: bool) -> Result<()> {
    let counts = match kind {
        NucleotideKind::Dna => {
            let dna = DnaSequence::new(sequence);
            ensure_valid(&dna)?;
            dna.count_nucleotides()
        }
        NucleotideKind::Rna => {
            let rna = RnaSequence::new(sequence);
            ensure_valid(&rna)?;
            rna.count_nucleotides()
        }
    };

    report::counts(kind.label(), sequence, &counts, json)
}
