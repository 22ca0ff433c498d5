//! Rapports texte et JSON des commandes
//!
//! Chaque rapport existe en deux rendus: texte stylé pour le terminal,
//! JSON (`--json`) pour un consommateur programmatique. Aucune des deux
//! sorties ne transporte autre chose que des chaînes, des entiers et des
//! listes.

use std::collections::BTreeMap;

use anyhow::Result;
use console::style;
use genealchemy_core::SequenceError;
use serde::Serialize;
use tabled::{Table, Tabled};

#[derive(Serialize)]
struct ValidationReport<'a> {
    kind: &'a str,
    sequence: &'a str,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub fn validation(
    kind: &str,
    sequence: &str,
    outcome: &Result<(), SequenceError>,
    json: bool,
) -> Result<()> {
    if json {
        let report = ValidationReport {
            kind,
            sequence,
            valid: outcome.is_ok(),
            error: outcome.as_ref().err().map(ToString::to_string),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match outcome {
        Ok(()) => println!("{} Séquence {} valide", style("✅").green(), kind),
        Err(e) => println!("{} {}", style("❌").red(), e),
    }
    Ok(())
}

#[derive(Serialize)]
struct TransformReport<'a> {
    operation: &'a str,
    input: &'a str,
    output: &'a str,
}

pub fn transform(operation: &str, input: &str, output: &str, json: bool) -> Result<()> {
    if json {
        let report = TransformReport {
            operation,
            input,
            output,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("🧬 {}: {}", operation, style(output).cyan());
    Ok(())
}

#[derive(Serialize)]
struct GcReport<'a> {
    kind: &'a str,
    sequence: &'a str,
    gc_percent: f64,
}

pub fn gc(kind: &str, sequence: &str, gc_percent: f64, json: bool) -> Result<()> {
    if json {
        let report = GcReport {
            kind,
            sequence,
            gc_percent,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("📊 Contenu GC ({}): {:.1}%", kind, gc_percent);
    Ok(())
}

#[derive(Serialize)]
struct CountReport<'a> {
    kind: &'a str,
    sequence: &'a str,
    counts: &'a BTreeMap<char, usize>,
}

#[derive(Tabled)]
struct CountRow {
    #[tabled(rename = "Nucléotide")]
    symbol: char,
    #[tabled(rename = "Occurrences")]
    count: usize,
}

pub fn counts(
    kind: &str,
    sequence: &str,
    counts: &BTreeMap<char, usize>,
    json: bool,
) -> Result<()> {
    if json {
        let report = CountReport {
            kind,
            sequence,
            counts,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let rows: Vec<CountRow> = counts
        .iter()
        .map(|(&symbol, &count)| CountRow { symbol, count })
        .collect();
    println!("📊 Comptage des nucléotides ({})", kind);
    println!("{}", Table::new(rows));
    Ok(())
}

#[derive(Serialize)]
struct MotifReport<'a> {
    kind: &'a str,
    sequence: &'a str,
    motif: &'a str,
    positions: &'a [usize],
}

pub fn motif(
    kind: &str,
    sequence: &str,
    motif: &str,
    positions: &[usize],
    json: bool,
) -> Result<()> {
    if json {
        let report = MotifReport {
            kind,
            sequence,
            motif,
            positions,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if positions.is_empty() {
        println!("🔍 Motif introuvable dans la séquence {}", kind);
    } else {
        let joined = positions
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        println!("🔍 Motif trouvé aux positions: {}", style(joined).cyan());
    }
    Ok(())
}

#[derive(Serialize)]
struct PalindromeReport<'a> {
    kind: &'a str,
    sequence: &'a str,
    palindromes: &'a [String],
}

pub fn palindromes(kind: &str, sequence: &str, found: &[String], json: bool) -> Result<()> {
    if json {
        let report = PalindromeReport {
            kind,
            sequence,
            palindromes: found,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if found.is_empty() {
        println!("🔍 Aucun palindrome dans la séquence {}", kind);
    } else {
        println!("🔍 Palindromes: {}", style(found.join(", ")).cyan());
    }
    Ok(())
}
