//! Noyau — évaluation d’une expression du pavé
//!
//! tokenize -> alternance numéral/opérateur -> réduction gauche → droite
//!
//! Pas de priorité entre opérateurs : "2 + 3 × 4" vaut 20, comme une
//! calculatrice de poche. Le pavé ne peut produire que des chaînes plates
//! (ni parenthèses, ni moins unaire entre deux opérateurs).

use tracing::debug;

use super::erreur::ErreurEvaluation;
use super::jetons::{format_tokens, tokenize, Tok};

/// API publique : évalue l’expression et retourne un flottant fini.
pub fn evaluer(expression: &str) -> Result<f64, ErreurEvaluation> {
    let jetons = tokenize(expression)?;
    debug!(jetons = %format_tokens(&jetons), "évaluation");

    let mut it = jetons.into_iter();

    let mut total = match it.next() {
        None => return Err(ErreurEvaluation::Vide),
        Some(Tok::Num(v)) => v,
        Some(Tok::Op(op)) => return Err(ErreurEvaluation::OperateurInconnu(op.symbole().into())),
    };

    while let Some(tok) = it.next() {
        let op = match tok {
            Tok::Op(op) => op,
            // deux numéraux de suite : "6 2"
            Tok::Num(v) => return Err(ErreurEvaluation::NumeralInvalide(format!("{v}"))),
        };

        let rhs = match it.next() {
            Some(Tok::Num(v)) => v,
            Some(Tok::Op(o)) => return Err(ErreurEvaluation::OperateurInconnu(o.symbole().into())),
            None => return Err(ErreurEvaluation::OperateurFinal),
        };

        total = op.appliquer(total, rhs)?;
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(s: &str) -> f64 {
        evaluer(s).unwrap_or_else(|e| panic!("evaluer({s:?}) erreur: {e}"))
    }

    #[test]
    fn addition_simple() {
        assert_eq!(ok("6 + 2"), 8.0);
    }

    #[test]
    fn numeral_seul() {
        assert_eq!(ok("42"), 42.0);
        assert_eq!(ok("-3.5"), -3.5);
    }

    #[test]
    fn gauche_a_droite_sans_priorite() {
        assert_eq!(ok("2 + 3 × 4"), 20.0);
        assert_eq!(ok("10 − 4 ÷ 2"), 3.0);
        assert_eq!(ok("1 - 2 - 3"), -4.0);
    }

    #[test]
    fn chainage_sur_resultat_formate() {
        assert_eq!(ok("1,234 + 3"), 1237.0);
        assert_eq!(ok("1.23457e+12 ÷ 1e+12"), 1.23457);
    }

    #[test]
    fn division_par_zero() {
        assert_eq!(evaluer("6 ÷ 0"), Err(ErreurEvaluation::DivisionParZero));
        assert_eq!(evaluer("6 ÷ 0.0"), Err(ErreurEvaluation::DivisionParZero));
    }

    #[test]
    fn expressions_mal_formees() {
        assert_eq!(evaluer(""), Err(ErreurEvaluation::Vide));
        assert_eq!(evaluer("   "), Err(ErreurEvaluation::Vide));
        assert_eq!(evaluer("6 + "), Err(ErreurEvaluation::OperateurFinal));
        assert!(evaluer("6 + × 2").is_err());
        assert!(evaluer("+ 2").is_err());
        assert!(evaluer("6 2").is_err());
        assert!(evaluer("Error + 2").is_err());
        assert!(evaluer("50%").is_err());
    }

    #[test]
    fn pas_d_evaluation_dynamique() {
        for s in ["alert(1)", "2 ** 3", "(1 + 2)", "2; 3"] {
            assert!(evaluer(s).is_err(), "devrait refuser {s:?}");
        }
    }
}
