//! CLI pour l'analyse de séquences biologiques

use clap::{Parser, Subcommand};

mod commands;
mod display;

use commands::{analyze, search, transform, validate};

#[derive(Parser)]
#[command(name = "genealchemy")]
#[command(about = "Analyse de séquences biologiques (ADN, ARN, protéine)", long_about = None)]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Sortie JSON plutôt que texte
    #[arg(long, global = true)]
    json: bool,

    /// Niveau de verbosité
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Vérifie qu'une séquence respecte l'alphabet de son genre
    Validate {
        /// Genre de la séquence
        #[arg(short, long, value_enum)]
        kind: SequenceKind,

        /// Séquence à contrôler
        sequence: String,
    },

    /// Brin complémentaire d'une séquence ADN (sans inversion du brin)
    Complement {
        /// Séquence ADN
        sequence: String,
    },

    /// Transcrit une séquence ADN en ARN (T → U)
    Transcribe {
        /// Séquence ADN
        sequence: String,
    },

    /// Traduit une séquence ARN en protéine
    Translate {
        /// Séquence ARN
        sequence: String,
    },

    /// Contenu GC d'une séquence nucléotidique
    Gc {
        /// Genre nucléotidique
        #[arg(short, long, value_enum, default_value = "dna")]
        kind: NucleotideKind,

        /// Séquence à analyser
        sequence: String,
    },

    /// Compte les occurrences de chaque nucléotide
    Count {
        /// Genre nucléotidique
        #[arg(short, long, value_enum, default_value = "dna")]
        kind: NucleotideKind,

        /// Séquence à analyser
        sequence: String,
    },

    /// Positions d'un motif exact, occurrences chevauchantes comprises
    Motif {
        /// Genre nucléotidique
        #[arg(short, long, value_enum, default_value = "dna")]
        kind: NucleotideKind,

        /// Séquence à parcourir
        sequence: String,

        /// Motif recherché (insensible à la casse)
        motif: String,
    },

    /// Sous-chaînes égales à leur propre complément inverse
    Palindromes {
        /// Genre nucléotidique
        #[arg(short, long, value_enum, default_value = "dna")]
        kind: NucleotideKind,

        /// Séquence à parcourir
        sequence: String,
    },
}

#[derive(clap::ValueEnum, Clone, Copy)]
pub enum SequenceKind {
    Dna,
    Rna,
    Protein,
}

impl SequenceKind {
    /// Libellé affiché dans les rapports
    pub fn label(self) -> &'static str {
        match self {
            SequenceKind::Dna => "ADN",
            SequenceKind::Rna => "ARN",
            SequenceKind::Protein => "protéine",
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy)]
pub enum NucleotideKind {
    Dna,
    Rna,
}

impl NucleotideKind {
    /// Libellé affiché dans les rapports
    pub fn label(self) -> &'static str {
        match self {
            NucleotideKind::Dna => "ADN",
            NucleotideKind::Rna => "ARN",
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    genealchemy_core::init_logging(level);

    match cli.command {
        Commands::Validate { kind, sequence } => {
            validate::run(kind, &sequence, cli.json)?;
        }
        Commands::Complement { sequence } => {
            transform::complement(&sequence, cli.json)?;
        }
        Commands::Transcribe { sequence } => {
            transform::transcribe(&sequence, cli.json)?;
        }
        Commands::Translate { sequence } => {
            transform::translate(&sequence, cli.json)?;
        }
        Commands::Gc { kind, sequence } => {
            analyze::gc(kind, &sequence, cli.json)?;
        }
        Commands::Count { kind, sequence } => {
            analyze::count(kind, &sequence, cli.json)?;
        }
        Commands::Motif {
            kind,
            sequence,
            motif,
        } => {
            search::motif(kind, &sequence, &motif, cli.json)?;
        }
        Commands::Palindromes { kind, sequence } => {
            search::palindromes(kind, &sequence, cli.json)?;
        }
    }

    Ok(())
}
