//! src/noyau/erreur.rs
//!
//! Erreurs du noyau.
//!
//! - `ErreurEvaluation` : expression mal formée ou résultat indéfini.
//!   Visible à l’écran seulement sous la forme "Error".
//! - `ErreurPersistance` : lecture/écriture du stockage.
//!   Jamais montrée à l’utilisateur, jamais bloquante (on trace et on continue).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurEvaluation {
    #[error("expression vide")]
    Vide,

    #[error("numéral invalide: {0:?}")]
    NumeralInvalide(String),

    #[error("opérateur inconnu: {0:?}")]
    OperateurInconnu(String),

    #[error("opérateur sans opérande à droite")]
    OperateurFinal,

    #[error("division par zéro")]
    DivisionParZero,

    #[error("résultat non fini")]
    ResultatNonFini,
}

#[derive(Debug, Error)]
pub enum ErreurPersistance {
    #[error("stockage: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    #[error("localStorage: {0}")]
    Navigateur(String),

    #[error("stockage indisponible: {0}")]
    Indisponible(String),
}
