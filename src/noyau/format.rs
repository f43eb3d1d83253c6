// src/noyau/format.rs

/// Au-delà de ce nombre de caractères (forme décimale brute), on passe en exponentiel.
pub const SEUIL_EXPONENTIEL: usize = 10;

/// Chiffres après la virgule en notation exponentielle.
pub const CHIFFRES_EXPONENTIEL: usize = 5;

/* ------------------------ Affichage d’un résultat ------------------------ */

/// Rend un nombre pour l’écran :
/// - forme brute (plus courte représentation exacte) > 10 caractères => "1.23457e+12"
/// - sinon => groupes de milliers ("1,234.5"), sans troncature des décimales
///
/// Pure et déterministe.
pub fn formater_nombre(v: f64) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }

    // -0 s’affiche "0"
    let v = if v == 0.0 { 0.0 } else { v };

    let brut = format!("{v}");
    if brut.chars().count() > SEUIL_EXPONENTIEL {
        return format_exponentiel(v, CHIFFRES_EXPONENTIEL);
    }
    grouper_milliers(&brut)
}

/// Notation exponentielle à exposant signé : 1.23457e+12, 3.33333e-1.
pub fn format_exponentiel(v: f64, chiffres: usize) -> String {
    let s = format!("{v:.chiffres$e}");
    match s.split_once('e') {
        Some((mantisse, exp)) if exp.starts_with('-') => format!("{mantisse}e{exp}"),
        Some((mantisse, exp)) => format!("{mantisse}e+{exp}"),
        None => s,
    }
}

/// "-1234567.25" -> "-1,234,567.25"
fn grouper_milliers(brut: &str) -> String {
    let (signe, corps) = match brut.strip_prefix('-') {
        Some(reste) => ("-", reste),
        None => ("", brut),
    };
    let (entier, decimales) = match corps.split_once('.') {
        Some((e, d)) => (e, Some(d)),
        None => (corps, None),
    };

    let n = entier.len();
    let mut out = String::with_capacity(brut.len() + n / 3);
    out.push_str(signe);
    for (i, c) in entier.chars().enumerate() {
        if i > 0 && (n - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if let Some(d) = decimales {
        out.push('.');
        out.push_str(d);
    }
    out
}
