//! Affichage des résultats d'analyse

pub mod report;
