//! Noyau de la calculatrice quatre opérations
//!
//! Organisation interne :
//! - eval.rs    : opérateurs + évaluation binaire (f64, IEEE-754)
//! - format.rs  : nombre <-> texte d’affichage
//! - saisie.rs  : machine de saisie (réducteur pur)
//! - clavier.rs : touches -> événements

pub mod clavier;
pub mod eval;
pub mod format;
pub mod saisie;

#[cfg(test)]
mod tests_scenarios;


// API publique minimale
pub use eval::Operateur;
pub use saisie::{Chiffre, EtatCalc, Evenement};
