//! Types de séquences et dispatch par genre
//!
//! [`Seq<A>`] est une valeur immuable qui conserve le texte brut tel que
//! saisi; la normalisation en majuscules se fait dans les opérations, pas
//! dans le constructeur. Les capacités communes passent par le trait
//! [`Sequence`]; les capacités propres à un genre (complément, GC,
//! traduction...) vivent dans des blocs `impl` sur les alias concrets, si
//! bien qu'un appel non supporté est une erreur de compilation et non un
//! test de genre à l'exécution.

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use crate::alphabet::{Alphabet, DnaAlphabet, ProteinAlphabet, RnaAlphabet};
use crate::codon;
use crate::composition;
use crate::error::{Result, SequenceError};
use crate::pattern;
use crate::transform;

/// Séquence biologique typée par son alphabet
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Seq<A: Alphabet> {
    text: String,
    _alphabet: PhantomData<A>,
}

/// Séquence ADN
pub type DnaSequence = Seq<DnaAlphabet>;

/// Séquence ARN
pub type RnaSequence = Seq<RnaAlphabet>;

/// Séquence protéique
pub type ProteinSequence = Seq<ProteinAlphabet>;

/// Capacités communes à tous les genres de séquences
pub trait Sequence {
    /// Texte brut, tel que fourni au constructeur
    fn raw(&self) -> &str;

    /// Longueur du texte
    fn len(&self) -> usize;

    /// Vérifie si le texte est vide
    fn is_empty(&self) -> bool;

    /// Contrôle d'alphabet détaillé
    ///
    /// Échoue sur un texte vide ou sur le premier caractère hors alphabet.
    fn check(&self) -> Result<()>;

    /// Contrôle d'alphabet en oui/non
    ///
    /// Précondition de toutes les autres opérations: l'appelant doit
    /// revalider après toute transformation qui change le genre.
    fn validate(&self) -> bool {
        self.check().is_ok()
    }
}

impl<A: Alphabet> Seq<A> {
    /// Crée une séquence depuis un texte brut, conservé tel quel
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            _alphabet: PhantomData,
        }
    }

    /// Texte normalisé en majuscules, vue de travail des opérations
    fn normalized(&self) -> String {
        self.text.to_ascii_uppercase()
    }
}

impl<A: Alphabet> Sequence for Seq<A> {
    fn raw(&self) -> &str {
        &self.text
    }

    fn len(&self) -> usize {
        self.text.len()
    }

    fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn check(&self) -> Result<()> {
        if self.text.is_empty() {
            return Err(SequenceError::EmptySequence);
        }
        match self.text.chars().find(|&c| !c.is_ascii() || !A::contains(c as u8)) {
            Some(found) => Err(SequenceError::InvalidSequence {
                kind: A::NAME,
                found,
            }),
            None => Ok(()),
        }
    }
}

impl<A: Alphabet> fmt::Display for Seq<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl DnaSequence {
    /// Brin complémentaire, caractère par caractère, en majuscules
    ///
    /// Sans inversion du brin: comportement littéral conservé par
    /// compatibilité, distinct du complément inverse biologique.
    pub fn complement(&self) -> String {
        transform::complement_text(&self.normalized(), transform::dna_complement)
    }

    /// Transcrit l'ADN en ARN (T → U)
    ///
    /// Le résultat n'est pas revalidé automatiquement.
    pub fn transcribe(&self) -> RnaSequence {
        RnaSequence::new(transform::transcribe_text(&self.text))
    }

    /// Pourcentage de bases G et C
    pub fn gc_content(&self) -> Result<f64> {
        composition::gc_percent(&self.text)
    }

    /// Occurrences de chaque nucléotide A, T, C, G
    pub fn count_nucleotides(&self) -> BTreeMap<char, usize> {
        composition::tally(&self.text, DnaAlphabet::SYMBOLS)
    }

    /// Positions (base 1) des occurrences du motif, chevauchements inclus
    pub fn find_motif(&self, motif: &str) -> Result<Vec<usize>> {
        pattern::motif_positions(&self.text, motif)
    }

    /// Sous-chaînes égales à leur complément inverse (table ADN)
    pub fn find_palindromes(&self) -> Vec<String> {
        pattern::palindromic_substrings(&self.text, transform::dna_complement)
    }
}

impl RnaSequence {
    /// Traduit l'ARN en protéine par triplets non chevauchants
    ///
    /// La traduction s'arrête au premier codon hors table (arrêt
    /// prématuré); le résultat n'est pas revalidé automatiquement.
    pub fn translate(&self) -> ProteinSequence {
        ProteinSequence::new(codon::translate_text(&self.text))
    }

    /// Pourcentage de bases G et C
    pub fn gc_content(&self) -> Result<f64> {
        composition::gc_percent(&self.text)
    }

    /// Occurrences de chaque nucléotide A, U, C, G
    pub fn count_nucleotides(&self) -> BTreeMap<char, usize> {
        composition::tally(&self.text, RnaAlphabet::SYMBOLS)
    }

    /// Positions (base 1) des occurrences du motif, chevauchements inclus
    pub fn find_motif(&self, motif: &str) -> Result<Vec<usize>> {
        pattern::motif_positions(&self.text, motif)
    }

    /// Sous-chaînes égales à leur complément inverse (table ARN)
    pub fn find_palindromes(&self) -> Vec<String> {
        pattern::palindromic_substrings(&self.text, transform::rna_complement)
    }
}
