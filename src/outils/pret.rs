// src/outils/pret.rs

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResultatPret {
    pub mensualite: f64,
    pub total: f64,
    pub interets: f64,
}

/// Prêt amortissable à mensualités constantes.
///
/// i = taux/100/12, n = années × 12
/// mensualité = P·i·(1+i)^n / ((1+i)^n − 1), ou P/n si taux nul.
///
/// None si principal ou durée <= 0, taux négatif, ou résultat non fini.
pub fn calculer_pret(principal: f64, taux_annuel: f64, annees: f64) -> Option<ResultatPret> {
    if principal <= 0.0 || annees <= 0.0 || taux_annuel < 0.0 {
        return None;
    }

    let i = taux_annuel / 100.0 / 12.0;
    let n = annees * 12.0;

    let r = if taux_annuel == 0.0 {
        ResultatPret {
            mensualite: principal / n,
            total: principal,
            interets: 0.0,
        }
    } else {
        let facteur = (1.0 + i).powf(n);
        let mensualite = principal * i * facteur / (facteur - 1.0);
        let total = mensualite * n;
        ResultatPret {
            mensualite,
            total,
            interets: total - principal,
        }
    };

    (r.mensualite.is_finite() && r.total.is_finite()).then_some(r)
}
