// src/noyau/jetons.rs

use super::erreur::ErreurEvaluation;

/// Opérateurs binaires du pavé (+, −, ×, ÷).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    /// Symbole canonique (celui qui est écrit dans l’expression affichée).
    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "−",
            Operateur::Fois => "×",
            Operateur::Divise => "÷",
        }
    }

    /// Accepte le symbole canonique ou son équivalent ASCII.
    pub fn depuis_symbole(s: &str) -> Option<Self> {
        match s {
            "+" => Some(Operateur::Plus),
            "−" | "-" => Some(Operateur::Moins),
            "×" | "*" | "x" => Some(Operateur::Fois),
            "÷" | "/" => Some(Operateur::Divise),
            _ => None,
        }
    }

    /// a op b, avec refus de la division par zéro et des résultats non finis.
    pub fn appliquer(self, a: f64, b: f64) -> Result<f64, ErreurEvaluation> {
        let r = match self {
            Operateur::Plus => a + b,
            Operateur::Moins => a - b,
            Operateur::Fois => a * b,
            Operateur::Divise => {
                if b == 0.0 {
                    return Err(ErreurEvaluation::DivisionParZero);
                }
                a / b
            }
        };

        if r.is_finite() {
            Ok(r)
        } else {
            Err(ErreurEvaluation::ResultatNonFini)
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Op(Operateur),
}

/// Tokenize une expression du pavé.
///
/// Les opérateurs sont toujours entourés d’espaces ("6 + 2"), donc un mot
/// est soit un opérateur, soit un numéral. Un "%" collé à un numéral
/// ("50%") n’est pas interprété : le numéral est alors invalide.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEvaluation> {
    s.split_whitespace()
        .map(|mot| match Operateur::depuis_symbole(mot) {
            Some(op) => Ok(Tok::Op(op)),
            None => lire_numeral(mot).map(Tok::Num),
        })
        .collect()
}

/// Lit un numéral décimal tel qu’il peut apparaître à l’écran :
/// - signe moins en tête ("-7")
/// - séparateurs de milliers ("1,234.5")
/// - notation exponentielle ("1.23457e+12")
/// - point final ou initial ("5." / ".5")
///
/// Refuse tout le reste ("Error", "inf", "NaN", "5%"...).
pub fn lire_numeral(mot: &str) -> Result<f64, ErreurEvaluation> {
    let invalide = || ErreurEvaluation::NumeralInvalide(mot.to_string());

    let corps = mot.strip_prefix('-').unwrap_or(mot);
    let premier = corps.chars().next().ok_or_else(invalide)?;
    if !(premier.is_ascii_digit() || premier == '.') {
        return Err(invalide());
    }

    let autorise = |c: char| c.is_ascii_digit() || matches!(c, '.' | ',' | 'e' | 'E' | '+' | '-');
    if !corps.chars().all(autorise) {
        return Err(invalide());
    }

    let sans_groupes: String = mot.chars().filter(|&c| c != ',').collect();
    let v: f64 = sans_groupes.parse().map_err(|_| invalide())?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(invalide())
    }
}

/// Format utilitaire (traces) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(|t| match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Op(op) => op.symbole().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
