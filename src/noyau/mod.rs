//! Noyau de la calculatrice de base
//!
//! Organisation interne :
//! - jetons.rs       : opérateurs + tokenisation d’une expression plate
//! - eval.rs         : réduction gauche → droite (pas de priorité, pas d’eval dynamique)
//! - format.rs       : affichage d’un résultat (groupes de milliers / exponentiel)
//! - historique.rs   : 10 derniers calculs + forme persistée JSON
//! - calculatrice.rs : machine à états (touches -> écran)
//! - erreur.rs       : ErreurEvaluation / ErreurPersistance

pub mod calculatrice;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod historique;
pub mod jetons;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use calculatrice::Calculatrice;
pub use jetons::Operateur;
