// src/outils/pourcentage.rs

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationPourcentage {
    /// v1 % de v2
    Pourcentage,
    /// v1 représente quel % de v2
    PourcentDe,
    /// variation de v1 vers v2, en %
    Variation,
    /// v2 + v1 %
    Ajouter,
    /// v2 − v1 %
    Soustraire,
}

impl OperationPourcentage {
    pub const TOUTES: [Self; 5] = [
        Self::Pourcentage,
        Self::PourcentDe,
        Self::Variation,
        Self::Ajouter,
        Self::Soustraire,
    ];

    pub fn libelle(self) -> &'static str {
        match self {
            Self::Pourcentage => "X % de Y",
            Self::PourcentDe => "X est quel % de Y",
            Self::Variation => "Variation en %",
            Self::Ajouter => "Ajouter X % à Y",
            Self::Soustraire => "Retirer X % de Y",
        }
    }

    /// Libellés des deux champs (v1, v2).
    pub fn libelles_champs(self) -> (&'static str, &'static str) {
        match self {
            Self::Pourcentage | Self::Ajouter | Self::Soustraire => ("Pourcentage", "Nombre"),
            Self::PourcentDe => ("Nombre", "Total"),
            Self::Variation => ("Initial", "Nouveau"),
        }
    }

    /// Le résultat est-il lui-même un pourcentage (suffixe "%") ?
    pub fn resultat_en_pourcent(self) -> bool {
        matches!(self, Self::PourcentDe | Self::Variation)
    }
}

/// None si le résultat n’est pas fini (division par zéro).
pub fn calculer_pourcentage(op: OperationPourcentage, v1: f64, v2: f64) -> Option<f64> {
    let r = match op {
        OperationPourcentage::Pourcentage => (v1 / 100.0) * v2,
        OperationPourcentage::PourcentDe => (v1 / v2) * 100.0,
        OperationPourcentage::Variation => ((v2 - v1) / v1) * 100.0,
        OperationPourcentage::Ajouter => v2 + (v1 / 100.0) * v2,
        OperationPourcentage::Soustraire => v2 - (v1 / 100.0) * v2,
    };
    r.is_finite().then_some(r)
}

/// Deux décimales, "%" si le résultat est un pourcentage.
pub fn formater_pourcentage(op: OperationPourcentage, r: f64) -> String {
    if op.resultat_en_pourcent() {
        format!("{r:.2}%")
    } else {
        format!("{r:.2}")
    }
}
