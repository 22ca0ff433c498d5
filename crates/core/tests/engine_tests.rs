//! Tests d'intégration du moteur GeneAlchemy

use genealchemy_core::{
    DnaSequence, ProteinSequence, RnaSequence, Sequence, SequenceError,
};

#[test]
fn test_validation_par_genre() {
    assert!(DnaSequence::new("ATCG").validate());
    assert!(RnaSequence::new("AUCG").validate());
    assert!(ProteinSequence::new("ACDEFGHIKLMNPQRSTVWY").validate());

    // Caractère hors alphabet
    assert!(!DnaSequence::new("ATXG").validate());
    assert!(!RnaSequence::new("AUCT").validate());
    assert!(!ProteinSequence::new("MF1").validate());

    // La chaîne vide n'est jamais valide
    assert!(!DnaSequence::new("").validate());
    assert!(!RnaSequence::new("").validate());
    assert!(!ProteinSequence::new("").validate());
}

#[test]
fn test_complement_est_une_involution() {
    let original = "ATCGGATTACA";
    let once = DnaSequence::new(original).complement();
    let twice = DnaSequence::new(once).complement();
    assert_eq!(twice, original);
}

#[test]
fn test_transcription_reversible() {
    let dna = DnaSequence::new("GATTACATTT");
    let rna = dna.transcribe();
    assert!(rna.validate());
    assert_eq!(rna.raw().replace('U', "T"), dna.raw());
}

#[test]
fn test_motif_chevauchant_et_positions_base_1() {
    let dna = DnaSequence::new("AAAA");
    assert_eq!(dna.find_motif("AA").unwrap(), vec![1, 2, 3]);

    // Chaque position retournée pointe bien sur une occurrence
    let text = "ATATGCATAT";
    let dna = DnaSequence::new(text);
    for p in dna.find_motif("ATAT").unwrap() {
        assert_eq!(&text[p - 1..p - 1 + 4], "ATAT");
    }
    assert_eq!(dna.find_motif("ATAT").unwrap(), vec![1, 7]);
}

#[test]
fn test_motif_sans_occurrence() {
    let dna = DnaSequence::new("ATCG");
    assert_eq!(dna.find_motif("TTT").unwrap(), Vec::<usize>::new());
}

#[test]
fn test_motif_vide_est_une_erreur_de_contrat() {
    let dna = DnaSequence::new("ATCG");
    assert_eq!(dna.find_motif(""), Err(SequenceError::EmptyMotif));
}

#[test]
fn test_palindromes_gaattc() {
    let dna = DnaSequence::new("GAATTC");
    let found = dna.find_palindromes();
    assert!(found.contains(&"GAATTC".to_string()));
    // GAAT n'est pas son propre complément inverse
    assert!(!found.contains(&"GAAT".to_string()));
}

#[test]
fn test_comptage_nucleotides() {
    let counts = DnaSequence::new("ATCG").count_nucleotides();
    assert_eq!(counts[&'A'], 1);
    assert_eq!(counts[&'T'], 1);
    assert_eq!(counts[&'C'], 1);
    assert_eq!(counts[&'G'], 1);

    let counts = DnaSequence::new("AATT").count_nucleotides();
    assert_eq!(counts[&'A'], 2);
    assert_eq!(counts[&'T'], 2);
    assert_eq!(counts[&'C'], 0);
    assert_eq!(counts[&'G'], 0);

    let counts = RnaSequence::new("AUGG").count_nucleotides();
    assert_eq!(counts[&'U'], 1);
    assert_eq!(counts[&'G'], 2);
}

#[test]
fn test_traduction_et_arret_premature() {
    assert_eq!(RnaSequence::new("AUGUUUGGG").translate().raw(), "MFG");

    // UGA arrête la traduction, les codons valides derrière sont perdus
    assert_eq!(RnaSequence::new("AUGUGAUUU").translate().raw(), "M");
}

#[test]
fn test_gc_extremes() {
    assert_eq!(DnaSequence::new("GGCC").gc_content().unwrap(), 100.0);
    assert_eq!(DnaSequence::new("AATT").gc_content().unwrap(), 0.0);
    assert_eq!(
        DnaSequence::new("").gc_content(),
        Err(SequenceError::EmptySequence)
    );
}

#[test]
fn test_chaine_de_transformations() {
    // ADN → ARN → protéine, avec revalidation à chaque étape
    let dna = DnaSequence::new("ATGTTTGGG");
    assert!(dna.validate());

    let rna = dna.transcribe();
    assert!(rna.validate());
    assert_eq!(rna.raw(), "AUGUUUGGG");

    let protein = rna.translate();
    assert!(protein.validate());
    assert_eq!(protein.raw(), "MFG");
}
