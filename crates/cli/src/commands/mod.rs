//! Commandes de la CLI

pub mod analyze;
pub mod search;
pub mod transform;
pub mod validate;

use anyhow::Result;
use genealchemy_core::Sequence;

/// Refuse de lancer une analyse sur une séquence invalide (échec rapide)
pub(crate) fn ensure_valid(seq: &impl Sequence) -> Result<()> {
    seq.check()?;
    Ok(())
}
