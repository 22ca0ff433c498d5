//! Commande de validation d'alphabet

use anyhow::Result;
use genealchemy_core::{DnaSequence, ProteinSequence, RnaSequence, Sequence};

use crate::display::report;
use crate::SequenceKind;

pub fn run(kind: SequenceKind, sequence: &str, json: bool) -> Result<()> {
    let outcome = match kind {
        SequenceKind::Dna => DnaSequence::new(sequence).check(),
        SequenceKind::Rna => RnaSequence::new(sequence).check(),
        SequenceKind::Protein => ProteinSequence::new(sequence).check(),
    };

    report::validation(kind.label(), sequence, &outcome, json)
}
