// src/noyau/jetons.rs

/// Fonctions scientifiques reconnues par le lexeur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Log,
    Ln,
    Sqrt,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Jeton {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^
    Bang,  // ! (factorielle, postfixe)

    LPar,
    RPar,

    Func(Fonction),
}

/// Développements décimaux de π et e — assez de chiffres pour retomber
/// exactement sur f64::consts::PI / f64::consts::E après parse.
const PI_TXT: &str = "3.141592653589793";
const E_TXT: &str = "2.718281828459045";

/// Normalise les glyphes d'affichage AVANT lexing :
/// - × et ÷ deviennent * et /
/// - π et e sont substitués par leur développement décimal littéral,
///   donc indiscernables d'un nombre pour le parseur.
///
/// NOTE: la substitution de 'e' est textuelle et sûre : aucun mot-clé
/// reconnu (sin cos tan log ln sqrt) ne contient la lettre 'e'.
fn normaliser(s: &str) -> String {
    s.replace('×', "*")
        .replace('÷', "/")
        .replace('π', PI_TXT)
        .replace('e', E_TXT)
}

/// Tokenize une chaîne en jetons.
/// Supporte :
/// - nombres décimaux (12, 3.25, .5) — pas d'exposant, pas de signe
///   (le signe est géré par le parseur comme négation unaire)
/// - opérateurs + - * / ^ !
/// - parenthèses ( )
/// - mots-clés fonctions (sensibles à la casse) : sin cos tan log ln sqrt
/// - glyphes × ÷ π e (normalisés avant lexing)
///
/// Tout caractère hors de ces classes (espaces, lettres isolées,
/// ponctuation) ne produit aucun jeton et est sauté : la tokenisation
/// n'échoue jamais. Entrée vide => séquence vide.
pub fn tokenize(s: &str) -> Vec<Jeton> {
    let s = normaliser(s);
    let chars: Vec<char> = s.chars().collect();
    let mut out = Vec::new();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        // Opérateurs + parenthèses (un caractère)
        match c {
            '+' => {
                out.push(Jeton::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Jeton::Minus);
                i += 1;
                continue;
            }
            '*' => {
                out.push(Jeton::Star);
                i += 1;
                continue;
            }
            '/' => {
                out.push(Jeton::Slash);
                i += 1;
                continue;
            }
            '^' => {
                out.push(Jeton::Caret);
                i += 1;
                continue;
            }
            '!' => {
                out.push(Jeton::Bang);
                i += 1;
                continue;
            }
            '(' => {
                out.push(Jeton::LPar);
                i += 1;
                continue;
            }
            ')' => {
                out.push(Jeton::RPar);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Nombre décimal : chiffres, puis partie fractionnaire optionnelle.
        // ".5" est accepté ; "5." lit "5" et le point isolé est sauté.
        if c.is_ascii_digit() || (c == '.' && suit_un_chiffre(&chars, i + 1)) {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            if i < chars.len() && chars[i] == '.' && suit_un_chiffre(&chars, i + 1) {
                i += 1; // '.'
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }
            let txt: String = chars[start..i].iter().collect();
            if let Ok(v) = txt.parse::<f64>() {
                out.push(Jeton::Num(v));
            }
            continue;
        }

        // Mots-clés fonctions, sensibles à la casse.
        if c.is_ascii_alphabetic() {
            if let Some((f, long)) = fonction_en_tete(&chars[i..]) {
                out.push(Jeton::Func(f));
                i += long;
                continue;
            }
        }

        // Caractère non reconnu : sauté, sans jeton.
        i += 1;
    }

    out
}

fn suit_un_chiffre(chars: &[char], i: usize) -> bool {
    i < chars.len() && chars[i].is_ascii_digit()
}

/// Reconnaît un mot-clé fonction en tête de `reste`.
/// Aucun mot-clé n'est préfixe d'un autre : l'ordre d'essai est indifférent.
fn fonction_en_tete(reste: &[char]) -> Option<(Fonction, usize)> {
    const MOTS: [(&str, Fonction); 6] = [
        ("sin", Fonction::Sin),
        ("cos", Fonction::Cos),
        ("tan", Fonction::Tan),
        ("log", Fonction::Log),
        ("ln", Fonction::Ln),
        ("sqrt", Fonction::Sqrt),
    ];

    for (mot, f) in MOTS {
        if reste.len() >= mot.len() && reste.iter().zip(mot.chars()).all(|(a, b)| *a == b) {
            return Some((f, mot.len()));
        }
    }
    None
}
