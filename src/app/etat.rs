//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l'état de la calculatrice (expression en cours, dernier
//! résultat formaté, erreur, mode d'angle, historique) et offrir des actions
//! simples (AC/DEL/bascule de mode/insertion) sans logique d'affichage.
//!
//! Contrats :
//! - L'évaluation passe par une seule méthode (evaluer), qui délègue au noyau.
//! - Actions déterministes, sans effet de bord caché.
//! - Historique borné (HISTORIQUE_MAX), jamais persisté.

use crate::noyau::{evaluer_expression, format_resultat, ModeAngle};

/// Nombre d'évaluations conservées dans l'historique.
const HISTORIQUE_MAX: usize = 30;

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: Option<String>, // dernier résultat formaté
    pub erreur: Option<String>,   // message d'erreur affiché tel quel

    // --- paramètres ---
    pub mode: ModeAngle,

    // --- historique (lignes "expr = résultat", en mémoire seulement) ---
    pub historique: Vec<String>,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l'entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: None,
            erreur: None,
            mode: ModeAngle::default(), // degrés au démarrage
            historique: Vec::new(),
            focus_entree: true,
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions "boutons" ------------------------ */

    /// AC : efface entrée + résultat + erreur (l'historique et le mode restent).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.resultat = None;
        self.erreur = None;
        self.focus_entree = true;
    }

    /// DEL : si un résultat ou une erreur est affiché, tout effacer ;
    /// sinon, effacement arrière — un motif connu d'un coup ("sin(", "π"...),
    /// à défaut un caractère.
    pub fn effacer(&mut self) {
        if self.resultat.is_some() || self.erreur.is_some() {
            self.reset_total();
            return;
        }

        for motif in ["sqrt(", "sin(", "cos(", "tan(", "log(", "ln("] {
            if self.entree.ends_with(motif) {
                for _ in 0..motif.chars().count() {
                    self.entree.pop();
                }
                self.focus_entree = true;
                return;
            }
        }

        self.entree.pop();
        self.focus_entree = true;
    }

    /// DR : bascule degrés <-> radians. Ne touche ni l'entrée ni les sorties.
    pub fn basculer_mode(&mut self) {
        self.mode = match self.mode {
            ModeAngle::Degres => ModeAngle::Radians,
            ModeAngle::Radians => ModeAngle::Degres,
        };
        self.focus_entree = true;
    }

    /// Insertion depuis le pavé. `op` distingue les opérateurs : après un
    /// résultat, un opérateur enchaîne sur ce résultat, tout le reste repart
    /// d'une expression neuve.
    pub fn inserer(&mut self, texte: &str, op: bool) {
        if let Some(r) = self.resultat.take() {
            self.erreur = None;
            self.entree = if op { format!("{r}{texte}") } else { texte.to_string() };
            self.focus_entree = true;
            return;
        }

        if self.erreur.take().is_some() {
            self.entree = texte.to_string();
            self.focus_entree = true;
            return;
        }

        self.entree.push_str(texte);
        self.focus_entree = true;
    }

    /* ------------------------ Évaluation ------------------------ */

    /// "=" : évalue l'entrée via le noyau, dépose le résultat formaté
    /// (ou le message d'erreur verbatim) et alimente l'historique.
    pub fn evaluer(&mut self) {
        if self.entree.is_empty() {
            return;
        }

        match evaluer_expression(&self.entree, self.mode) {
            Ok(v) => {
                let affiche = format_resultat(v);
                self.pousser_historique(&affiche);
                self.resultat = Some(affiche);
                self.erreur = None;
            }
            Err(e) => {
                self.erreur = Some(e.to_string());
                self.resultat = None;
            }
        }
        self.focus_entree = true;
    }

    fn pousser_historique(&mut self, affiche: &str) {
        self.historique.push(format!("{} = {}", self.entree, affiche));
        if self.historique.len() > HISTORIQUE_MAX {
            let trop = self.historique.len() - HISTORIQUE_MAX;
            self.historique.drain(..trop);
        }
    }
}
