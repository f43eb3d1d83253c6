// src/outils/temperature.rs
//
// Conversions affines, toujours via Celsius :
//   source -> °C -> cible

use super::Unite;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UniteTemperature {
    Celsius,
    Fahrenheit,
    Kelvin,
    Rankine,
}

impl Unite for UniteTemperature {
    const TOUTES: &'static [Self] = &[
        UniteTemperature::Celsius,
        UniteTemperature::Fahrenheit,
        UniteTemperature::Kelvin,
        UniteTemperature::Rankine,
    ];

    fn code(self) -> &'static str {
        match self {
            UniteTemperature::Celsius => "°C",
            UniteTemperature::Fahrenheit => "°F",
            UniteTemperature::Kelvin => "K",
            UniteTemperature::Rankine => "°R",
        }
    }

    fn libelle(self) -> &'static str {
        match self {
            UniteTemperature::Celsius => "Celsius (°C)",
            UniteTemperature::Fahrenheit => "Fahrenheit (°F)",
            UniteTemperature::Kelvin => "Kelvin (K)",
            UniteTemperature::Rankine => "Rankine (°R)",
        }
    }
}

pub fn vers_celsius(t: f64, de: UniteTemperature) -> f64 {
    match de {
        UniteTemperature::Celsius => t,
        UniteTemperature::Fahrenheit => (t - 32.0) * 5.0 / 9.0,
        UniteTemperature::Kelvin => t - 273.15,
        UniteTemperature::Rankine => (t - 491.67) * 5.0 / 9.0,
    }
}

pub fn depuis_celsius(c: f64, vers: UniteTemperature) -> f64 {
    match vers {
        UniteTemperature::Celsius => c,
        UniteTemperature::Fahrenheit => c * 9.0 / 5.0 + 32.0,
        UniteTemperature::Kelvin => c + 273.15,
        UniteTemperature::Rankine => (c + 273.15) * 9.0 / 5.0,
    }
}

pub fn convertir_temperature(t: f64, de: UniteTemperature, vers: UniteTemperature) -> f64 {
    depuis_celsius(vers_celsius(t, de), vers)
}
