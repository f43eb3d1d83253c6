// src/app.rs
//
// Calculatrice multi-outils — module App (racine)
// -----------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Le clavier n’est lu que sur la calculatrice de base, et seulement si aucun
//   champ texte n’a le focus (sinon les formulaires des outils le reçoivent).

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use etat::{Outil, Touche};

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.appliquer_theme(ctx);

        if self.outil == Outil::Base && !ctx.wants_keyboard_input() {
            for t in touches_clavier(ctx) {
                self.appuyer(t);
            }
        }

        self.ui(ctx);
    }
}

impl AppCalc {
    /// Ne touche aux visuels que si le thème a changé depuis la dernière frame.
    fn appliquer_theme(&mut self, ctx: &egui::Context) {
        if self.theme_applique == Some(self.sombre) {
            return;
        }
        ctx.set_visuals(if self.sombre {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });
        self.theme_applique = Some(self.sombre);
    }
}

/// Chiffres / opérateurs / % / = via le texte saisi ; Enter = "=", Escape = C.
fn touches_clavier(ctx: &egui::Context) -> Vec<Touche> {
    ctx.input(|i| {
        let mut touches = Vec::new();
        for ev in &i.events {
            match ev {
                egui::Event::Text(t) => {
                    touches.extend(t.chars().filter_map(Touche::depuis_caractere));
                }
                egui::Event::Key {
                    key: egui::Key::Enter,
                    pressed: true,
                    ..
                } => touches.push(Touche::Egal),
                egui::Event::Key {
                    key: egui::Key::Escape,
                    pressed: true,
                    ..
                } => touches.push(Touche::Effacer),
                _ => {}
            }
        }
        touches
    })
}
