// src/outils/temps.rs
//
// Durées en secondes depuis minuit, rendu HH:MM:SS (champs sur 2 chiffres au moins).
// La soustraction donne toujours un écart positif.
// Arithmétique vérifiée : un champ démesuré donne None, jamais un débordement.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Duree {
    pub heures: i64,
    pub minutes: i64,
    pub secondes: i64,
}

impl Duree {
    pub fn new(heures: i64, minutes: i64, secondes: i64) -> Self {
        Self {
            heures,
            minutes,
            secondes,
        }
    }

    /// None si le total ne tient pas dans un i64.
    pub fn total_secondes(self) -> Option<i64> {
        self.heures
            .checked_mul(3600)?
            .checked_add(self.minutes.checked_mul(60)?)?
            .checked_add(self.secondes)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationTemps {
    Ajouter,
    Soustraire,
}

impl OperationTemps {
    pub fn libelle(self) -> &'static str {
        match self {
            OperationTemps::Ajouter => "Ajouter",
            OperationTemps::Soustraire => "Écart",
        }
    }
}

pub fn calculer_temps(t1: Duree, t2: Duree, op: OperationTemps) -> Option<String> {
    let (a, b) = (t1.total_secondes()?, t2.total_secondes()?);
    let s = match op {
        OperationTemps::Ajouter => a.checked_add(b)?,
        OperationTemps::Soustraire => a.checked_sub(b)?.checked_abs()?,
    };
    Some(format_hms(s))
}

/// 8130 -> "02:15:30"
pub fn format_hms(secondes: i64) -> String {
    let h = secondes / 3600;
    let m = (secondes % 3600) / 60;
    let s = secondes % 60;
    format!("{h:02}:{m:02}:{s:02}")
}
