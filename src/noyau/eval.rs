//! Noyau — analyse et évaluation (descente récursive)
//!
//! tokenize -> curseur avant -> descente récursive (évaluation directe, sans AST)
//!
//! Grammaire (du moins lié au plus lié ; `^` est associatif à droite) :
//!
//! ```text
//! Expression  := MulDiv ( ('+' | '-') MulDiv )*
//! MulDiv      := Exposant ( ('*' | '/') Exposant )*
//! Exposant    := Factorielle ( '^' Exposant )*
//! Factorielle := Primaire ( '!' )*
//! Primaire    := Nombre | '(' Expression ')' | '-' Primaire | Fonction Primaire
//! ```
//!
//! Tolérances héritées (comportement observable, à préserver) :
//! - fin d'entrée là où une valeur est attendue => 0
//! - ')' manquante non détectée (le curseur consomme sans vérifier)
//! - jeton inattendu en position Primaire : consommé, vaut 0
//! - jetons en trop après l'expression de tête : ignorés

use super::jetons::{tokenize, Fonction, Jeton};

/// Unité d'angle pour sin/cos/tan, choisie par l'appelant à chaque appel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ModeAngle {
    #[default]
    Degres,
    Radians,
}

/// Erreurs terminales d'une évaluation (pas de reprise, pas de résultat partiel).
/// Les messages sont affichés tels quels par l'appelant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErreurEval {
    /// Division dont le diviseur vaut exactement 0 (contrôle au site même).
    DivisionParZero,
    /// tan à un multiple impair de 90° / π⁄2.
    TangenteIndefinie,
    /// Valeur finale NaN (sqrt/log/factorielle hors domaine, entrée mal formée).
    EntreeInvalide,
    /// Garde-fou : imbrication au-delà de PROFONDEUR_MAX.
    ExpressionTropProfonde,
}

impl std::fmt::Display for ErreurEval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            ErreurEval::DivisionParZero => "Divide by Zero",
            ErreurEval::TangenteIndefinie => "Tangent Undefined",
            ErreurEval::EntreeInvalide => "Invalid Input",
            ErreurEval::ExpressionTropProfonde => "Expression Too Deep",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ErreurEval {}

/// Seuil sous lequel un résultat trig est ramené à 0 exact :
/// sin(180°) doit donner 0, pas 1.2e-16.
const EPSILON_TRIG: f64 = 1e-15;

/// Garde-fou anti-débordement de pile : profondeur max d'imbrication
/// (parenthèses, fonctions, négations, chaînes de '^'). L'entrée est
/// contrôlée par l'utilisateur, la pile ne l'est pas.
const PROFONDEUR_MAX: usize = 256;

/// API publique : tokenize puis évalue l'expression.
/// Après réduction complète, un unique contrôle final : NaN => EntreeInvalide.
/// Une valeur infinie est retournée telle quelle (format s'en charge).
pub fn evaluer_expression(expr: &str, mode: ModeAngle) -> Result<f64, ErreurEval> {
    let jetons = tokenize(expr);
    let mut curseur = Curseur {
        jetons: &jetons,
        pos: 0,
        profondeur: 0,
        mode,
    };

    let valeur = curseur.expression()?;
    if valeur.is_nan() {
        return Err(ErreurEval::EntreeInvalide);
    }
    Ok(valeur)
}

/// Curseur avant sur la séquence de jetons, propre à un appel d'évaluation.
struct Curseur<'a> {
    jetons: &'a [Jeton],
    pos: usize,
    profondeur: usize,
    mode: ModeAngle,
}

impl Curseur<'_> {
    fn peek(&self) -> Option<Jeton> {
        self.jetons.get(self.pos).copied()
    }

    /// Consomme le jeton courant (ou rien en fin d'entrée, sans broncher).
    fn consume(&mut self) -> Option<Jeton> {
        let j = self.peek();
        self.pos += 1;
        j
    }

    fn entrer(&mut self) -> Result<(), ErreurEval> {
        self.profondeur += 1;
        if self.profondeur > PROFONDEUR_MAX {
            return Err(ErreurEval::ExpressionTropProfonde);
        }
        Ok(())
    }

    fn sortir(&mut self) {
        self.profondeur -= 1;
    }

    /* ------------------------ Règles de grammaire ------------------------ */

    fn expression(&mut self) -> Result<f64, ErreurEval> {
        let mut val = self.mul_div()?;
        loop {
            match self.peek() {
                Some(Jeton::Plus) => {
                    self.consume();
                    val += self.mul_div()?;
                }
                Some(Jeton::Minus) => {
                    self.consume();
                    val -= self.mul_div()?;
                }
                _ => break,
            }
        }
        Ok(val)
    }

    fn mul_div(&mut self) -> Result<f64, ErreurEval> {
        let mut val = self.exposant()?;
        loop {
            match self.peek() {
                Some(Jeton::Star) => {
                    self.consume();
                    val *= self.exposant()?;
                }
                Some(Jeton::Slash) => {
                    self.consume();
                    let diviseur = self.exposant()?;
                    if diviseur == 0.0 {
                        return Err(ErreurEval::DivisionParZero);
                    }
                    val /= diviseur;
                }
                _ => break,
            }
        }
        Ok(val)
    }

    fn exposant(&mut self) -> Result<f64, ErreurEval> {
        self.entrer()?;
        let r = self.exposant_interne();
        self.sortir();
        r
    }

    // Associatif à droite : 2^3^2 = 2^(3^2) = 512, via récursion sur le membre droit.
    fn exposant_interne(&mut self) -> Result<f64, ErreurEval> {
        let mut val = self.factorielle()?;
        while matches!(self.peek(), Some(Jeton::Caret)) {
            self.consume();
            val = val.powf(self.exposant()?);
        }
        Ok(val)
    }

    // Postfixe, chaînable : 3!! = (3!)! = 720.
    fn factorielle(&mut self) -> Result<f64, ErreurEval> {
        let mut val = self.primaire()?;
        while matches!(self.peek(), Some(Jeton::Bang)) {
            self.consume();
            val = factorielle_f64(val);
        }
        Ok(val)
    }

    fn primaire(&mut self) -> Result<f64, ErreurEval> {
        self.entrer()?;
        let r = self.primaire_interne();
        self.sortir();
        r
    }

    fn primaire_interne(&mut self) -> Result<f64, ErreurEval> {
        let Some(jeton) = self.consume() else {
            // Fin d'entrée là où une valeur est attendue : 0 (tolérance héritée).
            return Ok(0.0);
        };

        match jeton {
            Jeton::Num(v) => Ok(v),

            Jeton::LPar => {
                let val = self.expression()?;
                // ')' attendue : consommée sans vérification, son absence est tolérée.
                self.consume();
                Ok(val)
            }

            // Négation unaire, récursive à droite : --5 = 5.
            Jeton::Minus => Ok(-self.primaire()?),

            // Une fonction s'applique à exactement UN Primaire :
            // sin 30 + 5 == sin(30) + 5.
            Jeton::Func(f) => {
                let arg = self.primaire()?;
                self.appliquer_fonction(f, arg)
            }

            // Jeton inattendu en position Primaire : consommé, vaut 0 (tolérance héritée).
            _ => Ok(0.0),
        }
    }

    /* ------------------------ Fonctions scientifiques ------------------------ */

    fn appliquer_fonction(&self, f: Fonction, arg: f64) -> Result<f64, ErreurEval> {
        match f {
            Fonction::Sin => Ok(ramener_a_zero(self.en_radians(arg).sin())),
            Fonction::Cos => Ok(ramener_a_zero(self.en_radians(arg).cos())),

            Fonction::Tan => {
                let rad = self.en_radians(arg);
                if rad.cos().abs() < EPSILON_TRIG {
                    return Err(ErreurEval::TangenteIndefinie);
                }
                Ok(ramener_a_zero(rad.tan()))
            }

            // Argument négatif : NaN propagé, détecté au contrôle final
            // (contrairement à la division, contrôlée au site même).
            Fonction::Sqrt => Ok(arg.sqrt()),
            Fonction::Log => Ok(arg.log10()),
            Fonction::Ln => Ok(arg.ln()),
        }
    }

    fn en_radians(&self, v: f64) -> f64 {
        match self.mode {
            ModeAngle::Degres => v * std::f64::consts::PI / 180.0,
            ModeAngle::Radians => v,
        }
    }
}

/// Quasi-zéro trig (|x| < 1e-15) ramené à 0 exact.
fn ramener_a_zero(x: f64) -> f64 {
    if x.abs() < EPSILON_TRIG {
        0.0
    } else {
        x
    }
}

/// Factorielle sur f64 : entiers non négatifs seulement, sinon NaN
/// (détecté au contrôle final). 0! = 1. Au-delà de 170!, le double
/// déborde silencieusement vers l'infini.
fn factorielle_f64(n: f64) -> f64 {
    // NaN et ±inf tombent ici aussi : fract() rend NaN.
    if n < 0.0 || n.fract() != 0.0 {
        return f64::NAN;
    }
    if n > 170.0 {
        return f64::INFINITY;
    }

    let mut res = 1.0_f64;
    let mut i = 2.0_f64;
    while i <= n {
        res *= i;
        i += 1.0;
    }
    res
}
