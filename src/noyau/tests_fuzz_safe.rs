//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler tokenize + évaluation + format sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée côté générateur
//! - budget temps global
//! - toute erreur doit être un ErreurEval typé (jamais de panique)
//! - invariant clé : Ok(v) implique !v.is_nan() (le contrôle final tient)

use std::time::{Duration, Instant};

use super::{evaluer_expression, format_resultat, ModeAngle};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d'expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    // petits entiers + quelques décimaux ; 0 inclus (utile pour division par zéro)
    match rng.pick(8) {
        0 => "0".to_string(),
        1 => "1".to_string(),
        2 => "2".to_string(),
        3 => "3".to_string(),
        4 => "7".to_string(),
        5 => "0.5".to_string(),
        6 => "3.25".to_string(),
        _ => "10".to_string(),
    }
}

fn gen_atome(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 | 1 => gen_nombre(rng),
        2 => "π".to_string(),
        3 => "e".to_string(),
        4 => format!("-{}", gen_nombre(rng)),
        _ => format!("{}!", gen_nombre(rng)),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atome(rng);
    }

    match rng.pick(10) {
        0 => gen_atome(rng),
        1 => format!("({}+{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        2 => format!("({}-{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        3 => format!("({}*{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        4 => format!("({}/{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        5 => format!("({}^{})", gen_nombre(rng), gen_nombre(rng)),
        6 => format!("sin({})", gen_expr(rng, depth - 1)),
        7 => format!("cos({})", gen_expr(rng, depth - 1)),
        8 => format!("tan({})", gen_expr(rng, depth - 1)),
        _ => {
            if rng.coin() {
                format!("sqrt({})", gen_expr(rng, depth - 1))
            } else {
                format!("ln({})", gen_expr(rng, depth - 1))
            }
        }
    }
}

/// Entrée volontairement sale : glyphes, lettres parasites, ponctuation.
/// Le lexeur doit tout avaler (en sautant l'inconnu), jamais paniquer.
fn gen_bruit(rng: &mut Rng, longueur: usize) -> String {
    const POOL: [&str; 18] = [
        "1", "2", "+", "-", "*", "/", "^", "!", "(", ")", "×", "÷", "π", ".", " ", "s", "q", "#",
    ];
    let mut s = String::new();
    for _ in 0..longueur {
        s.push_str(POOL[rng.pick(POOL.len() as u32) as usize]);
    }
    s
}

fn mode_de(rng: &mut Rng) -> ModeAngle {
    if rng.coin() {
        ModeAngle::Degres
    } else {
        ModeAngle::Radians
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_jamais_de_nan_en_sortie() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut vus_ok = 0usize;
    let mut vus_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        let mode = mode_de(&mut rng);

        match evaluer_expression(&expr, mode) {
            Ok(v) => {
                // invariant clé : le contrôle final a filtré NaN
                assert!(!v.is_nan(), "NaN sorti en Ok: expr={expr:?}");
                // et le format ne panique jamais
                let _ = format_resultat(v);
                vus_ok += 1;
            }
            Err(_) => {
                // erreur typée : attendue (division par zéro, tan, NaN...)
                vus_err += 1;
            }
        }
    }

    // On veut un mix des deux, sinon le fuzz ne balaye rien.
    assert!(vus_ok > 50, "trop peu de succès: {vus_ok}");
    assert!(vus_err > 0, "aucune erreur vue: fuzz trop sage");
}

#[test]
fn fuzz_safe_determinisme() {
    // Même seed => mêmes expressions => mêmes sorties.
    let gen_sorties = || {
        let mut rng = Rng::new(0xBADC0DE_u64);
        let mut sorties = Vec::new();
        for _ in 0..100 {
            let expr = gen_expr(&mut rng, 4);
            let mode = mode_de(&mut rng);
            let sortie = match evaluer_expression(&expr, mode) {
                Ok(v) => format_resultat(v),
                Err(e) => e.to_string(),
            };
            sorties.push((expr, sortie));
        }
        sorties
    };

    assert_eq!(gen_sorties(), gen_sorties());
}

#[test]
fn fuzz_safe_bruit_lexical() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xDEAD10CC_u64);

    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_bruit(&mut rng, 40);
        // aucune entrée ne doit paniquer : Ok ou ErreurEval, rien d'autre
        if let Ok(v) = evaluer_expression(&expr, mode_de(&mut rng)) {
            assert!(!v.is_nan(), "NaN sorti en Ok: expr={expr:?}");
            let _ = format_resultat(v);
        }
    }
}

#[test]
fn fuzz_safe_imbrication_profonde_sans_debordement() {
    // bien au-delà du garde-fou : erreur propre attendue, pas de stack overflow
    for n in [300usize, 1000, 5000] {
        let expr = format!("{}1{}", "(".repeat(n), ")".repeat(n));
        let r = evaluer_expression(&expr, ModeAngle::Degres);
        assert!(r.is_err(), "imbrication n={n} aurait dû dépasser le garde-fou");
    }
}

#[test]
fn fuzz_safe_expression_plate_longue() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // les chaînes d'additions sont itératives : une somme plate très longue
    // ne doit ni exploser la pile ni déclencher le garde-fou
    let mut expr = String::new();
    for k in 0..5000 {
        if k > 0 {
            expr.push('+');
        }
        expr.push('1');
    }
    budget(t0, max);

    let v = evaluer_expression(&expr, ModeAngle::Degres).unwrap_or_else(|e| panic!("err: {e}"));
    assert_eq!(v, 5000.0);
    assert_eq!(format_resultat(v), "5000");
}
