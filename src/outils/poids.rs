// src/outils/poids.rs

use super::{Unite, UniteLineaire};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnitePoids {
    Kilogramme,
    Livre,
    Gramme,
    Once,
    Stone,
    Tonne,
}

impl Unite for UnitePoids {
    const TOUTES: &'static [Self] = &[
        UnitePoids::Kilogramme,
        UnitePoids::Livre,
        UnitePoids::Gramme,
        UnitePoids::Once,
        UnitePoids::Stone,
        UnitePoids::Tonne,
    ];

    fn code(self) -> &'static str {
        match self {
            UnitePoids::Kilogramme => "kg",
            UnitePoids::Livre => "lbs",
            UnitePoids::Gramme => "g",
            UnitePoids::Once => "oz",
            UnitePoids::Stone => "st",
            UnitePoids::Tonne => "t",
        }
    }

    fn libelle(self) -> &'static str {
        match self {
            UnitePoids::Kilogramme => "Kilogrammes (kg)",
            UnitePoids::Livre => "Livres (lbs)",
            UnitePoids::Gramme => "Grammes (g)",
            UnitePoids::Once => "Onces (oz)",
            UnitePoids::Stone => "Stone",
            UnitePoids::Tonne => "Tonnes",
        }
    }
}

impl UniteLineaire for UnitePoids {
    /// kg par unité
    fn facteur(self) -> f64 {
        match self {
            UnitePoids::Kilogramme => 1.0,
            UnitePoids::Livre => 0.453592,
            UnitePoids::Gramme => 0.001,
            UnitePoids::Once => 0.0283495,
            UnitePoids::Stone => 6.35029,
            UnitePoids::Tonne => 1000.0,
        }
    }
}
