// src/noyau/format.rs
//
// Affichage du résultat numérique (post-traitement sans état).
// - NaN          -> "Error"
// - ±infini      -> "Infinity" (signe non distingué)
// - très grand / très petit -> notation scientifique, 6 décimales
// - sinon        -> 12 chiffres significatifs, zéros finaux retirés
//   (masque les artefacts flottants : 0.1 + 0.2 s'affiche "0.3")

/// Au-delà de cette magnitude : notation scientifique.
const SEUIL_GRAND: f64 = 1e12;

/// En deçà de cette magnitude (non nulle) : notation scientifique.
const SEUIL_PETIT: f64 = 1e-9;

/// Chiffres significatifs conservés en affichage normal.
const CHIFFRES_SIGNIFICATIFS: usize = 12;

/// Formate une valeur f64 pour l'affichage.
pub fn format_resultat(v: f64) -> String {
    if v.is_nan() {
        return "Error".to_string();
    }
    if v.is_infinite() {
        return "Infinity".to_string();
    }

    if v.abs() > SEUIL_GRAND || (v != 0.0 && v.abs() < SEUIL_PETIT) {
        return format_scientifique(v);
    }

    // Arrondi à 12 chiffres significatifs via aller-retour texte,
    // puis Display (zéros finaux et point inutile retirés d'office).
    let arrondi: f64 = match format!("{:.*e}", CHIFFRES_SIGNIFICATIFS - 1, v).parse() {
        Ok(x) => x,
        Err(_) => v,
    };

    // -0 s'affiche "0"
    if arrondi == 0.0 {
        return "0".to_string();
    }
    format!("{arrondi}")
}

/// Notation scientifique à exposant signé : "1.500000e+13", "1.000000e-10".
/// Rust n'écrit pas le '+' de l'exposant, on le rétablit.
fn format_scientifique(v: f64) -> String {
    let brut = format!("{v:.6e}");
    match brut.split_once('e') {
        Some((mantisse, exp)) if !exp.starts_with('-') => format!("{mantisse}e+{exp}"),
        _ => brut,
    }
}
