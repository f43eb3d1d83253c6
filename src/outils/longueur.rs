// src/outils/longueur.rs

use super::{Unite, UniteLineaire};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UniteLongueur {
    Metre,
    Pied,
    Pouce,
    Centimetre,
    Millimetre,
    Kilometre,
    Yard,
    Mile,
}

impl Unite for UniteLongueur {
    const TOUTES: &'static [Self] = &[
        UniteLongueur::Metre,
        UniteLongueur::Pied,
        UniteLongueur::Pouce,
        UniteLongueur::Centimetre,
        UniteLongueur::Millimetre,
        UniteLongueur::Kilometre,
        UniteLongueur::Yard,
        UniteLongueur::Mile,
    ];

    fn code(self) -> &'static str {
        match self {
            UniteLongueur::Metre => "m",
            UniteLongueur::Pied => "ft",
            UniteLongueur::Pouce => "in",
            UniteLongueur::Centimetre => "cm",
            UniteLongueur::Millimetre => "mm",
            UniteLongueur::Kilometre => "km",
            UniteLongueur::Yard => "yd",
            UniteLongueur::Mile => "mi",
        }
    }

    fn libelle(self) -> &'static str {
        match self {
            UniteLongueur::Metre => "Mètres (m)",
            UniteLongueur::Pied => "Pieds (ft)",
            UniteLongueur::Pouce => "Pouces (in)",
            UniteLongueur::Centimetre => "Centimètres (cm)",
            UniteLongueur::Millimetre => "Millimètres (mm)",
            UniteLongueur::Kilometre => "Kilomètres (km)",
            UniteLongueur::Yard => "Yards (yd)",
            UniteLongueur::Mile => "Miles (mi)",
        }
    }
}

impl UniteLineaire for UniteLongueur {
    /// mètres par unité
    fn facteur(self) -> f64 {
        match self {
            UniteLongueur::Metre => 1.0,
            UniteLongueur::Pied => 0.3048,
            UniteLongueur::Pouce => 0.0254,
            UniteLongueur::Centimetre => 0.01,
            UniteLongueur::Millimetre => 0.001,
            UniteLongueur::Kilometre => 1000.0,
            UniteLongueur::Yard => 0.9144,
            UniteLongueur::Mile => 1609.34,
        }
    }
}
