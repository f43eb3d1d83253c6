//! Outils de conversion (hors noyau)
//!
//! Fonctions pures, sans état. La vue lit les champs texte, appelle ces
//! fonctions et n’affiche un résultat que si l’entrée est exploitable.
//!
//! - poids.rs       : table de facteurs -> kg
//! - longueur.rs    : table de facteurs -> m
//! - temperature.rs : pivot Celsius
//! - pret.rs        : mensualité d’un prêt amortissable
//! - pourcentage.rs : cinq formules
//! - temps.rs       : addition / écart de durées HH:MM:SS

pub mod longueur;
pub mod poids;
pub mod pourcentage;
pub mod pret;
pub mod temperature;
pub mod temps;

/// Unité sélectionnable dans un menu.
pub trait Unite: Copy + PartialEq + 'static {
    const TOUTES: &'static [Self];

    /// Symbole court, affiché à côté d’un résultat ("kg", "°F"...).
    fn code(self) -> &'static str;
    fn libelle(self) -> &'static str;
}

/// Unité convertible par un simple facteur vers l’unité de base.
pub trait UniteLineaire: Unite {
    fn facteur(self) -> f64;
}

/// valeur (de) -> base -> (vers)
pub fn convertir_lineaire<U: UniteLineaire>(valeur: f64, de: U, vers: U) -> f64 {
    valeur * de.facteur() / vers.facteur()
}

/* ------------------------ Lecture tolérante des champs ------------------------ */

/// Lecture "à la parseFloat" : plus long préfixe numérique, espaces ignorés.
/// None si rien d’exploitable (vide, texte, non fini).
pub fn lire_nombre(s: &str) -> Option<f64> {
    let s = s.trim();
    let candidat: String = s
        .chars()
        .take_while(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
        .collect();

    (1..=candidat.len())
        .rev()
        .filter_map(|n| candidat.get(..n))
        .find_map(|p| p.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Lecture "à la parseInt || 0" : signe + chiffres de tête, sinon 0.
pub fn lire_entier(s: &str) -> i64 {
    let s = s.trim();
    let (signe, corps) = match s.strip_prefix('-') {
        Some(r) => (-1, r),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let chiffres: String = corps.chars().take_while(|c| c.is_ascii_digit()).collect();
    chiffres.parse::<i64>().map(|n| signe * n).unwrap_or(0)
}
