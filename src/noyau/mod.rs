//! Noyau de calcul scientifique (f64)
//!
//! Organisation interne :
//! - jetons.rs : tokenisation (totale, n'échoue jamais)
//! - eval.rs   : descente récursive, évaluation directe sans AST
//! - format.rs : affichage du résultat (12 chiffres significatifs / scientifique)
//!
//! Chaque appel est pur et sans état partagé : jetons + curseur sont
//! propres à l'appel, détruits au retour. Pas d'E/S, pas de verrou.

pub mod eval;
pub mod format;
pub mod jetons;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use eval::{evaluer_expression, ErreurEval, ModeAngle};
pub use format::format_resultat;
