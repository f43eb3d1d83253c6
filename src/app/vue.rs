// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Barre du haut : menu des outils, titre, bascule de l’historique
// - Calculatrice : écran cliquable (copie), expression en cours, pavé 4 colonnes
// - Outils : formulaires simples, résultat affiché seulement si l’entrée est exploitable
//
// Note :
// - L’écran est lu depuis le miroir `ecran` (abonnement), jamais recalculé ici.

use eframe::egui;

use super::etat::{AppCalc, FormConversion, Outil, ResultatOutil, Touche};
use crate::noyau::calculatrice::Etat;
use crate::noyau::Operateur;
use crate::outils::pourcentage::OperationPourcentage;
use crate::outils::temps::OperationTemps;
use crate::outils::Unite;

/// Taille des touches du pavé.
const TOUCHE: [f32; 2] = [64.0, 44.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("barre_haut").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("☰").on_hover_text("Outils").clicked() {
                    self.menu_ouvert = !self.menu_ouvert;
                }
                ui.heading(self.outil.titre());

                if self.outil == Outil::Base {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .selectable_label(self.historique_visible, "Historique")
                            .clicked()
                        {
                            self.basculer_historique();
                        }
                    });
                }
            });
        });

        if self.menu_ouvert {
            egui::SidePanel::left("menu_outils")
                .resizable(false)
                .show(ctx, |ui| self.ui_menu(ui));
        }

        if self.outil == Outil::Base && self.historique_visible {
            egui::SidePanel::right("panneau_historique")
                .default_width(220.0)
                .show(ctx, |ui| self.ui_historique(ui));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            // Densité “calc”
            ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match self.outil {
                    Outil::Base => self.ui_calculatrice(ui),
                    Outil::Poids => {
                        if Self::ui_conversion(ui, "poids", &mut self.poids, "Convertir") {
                            self.convertir_poids();
                        }
                    }
                    Outil::Longueur => {
                        if Self::ui_conversion(ui, "longueur", &mut self.longueur, "Convertir") {
                            self.convertir_longueur();
                        }
                    }
                    Outil::Temperature => {
                        if Self::ui_conversion(ui, "temperature", &mut self.temperature, "Convertir")
                        {
                            self.convertir_temperature();
                        }
                    }
                    Outil::Pret => self.ui_pret(ui),
                    Outil::Pourcentage => self.ui_pourcentage(ui),
                    Outil::Temps => self.ui_temps(ui),
                });
        });
    }

    /* ------------------------ Menu latéral ------------------------ */

    fn ui_menu(&mut self, ui: &mut egui::Ui) {
        ui.add_space(6.0);
        for outil in Outil::TOUS {
            if ui.selectable_label(self.outil == outil, outil.titre()).clicked() {
                self.changer_outil(outil);
            }
        }

        ui.add_space(8.0);
        ui.separator();

        let libelle = if self.sombre { "☀ Mode clair" } else { "🌙 Mode sombre" };
        if ui.button(libelle).clicked() {
            self.basculer_theme();
        }
    }

    /* ------------------------ Calculatrice de base ------------------------ */

    fn ui_calculatrice(&mut self, ui: &mut egui::Ui) {
        // copie locale : le miroir est emprunté par l’observateur pendant les touches
        let (affichage, mut expression) = {
            let e = self.ecran.borrow();
            (e.affichage.clone(), e.expression.clone())
        };
        if self.calc.etat() == Etat::Resultat {
            expression.push_str(" =");
        }

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    ui.label(egui::RichText::new(&expression).monospace().weak());

                    let resp = ui
                        .add(
                            egui::Label::new(egui::RichText::new(&affichage).monospace().size(36.0))
                                .sense(egui::Sense::click()),
                        )
                        .on_hover_text("Cliquer pour copier");
                    if resp.clicked() {
                        ui.ctx().copy_text(affichage.clone());
                    }
                });
            });

        ui.add_space(8.0);
        self.ui_pave(ui);
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_touche(ui, "C", Touche::Effacer);
                self.bouton_touche(ui, "±", Touche::Signe);
                self.bouton_touche(ui, "%", Touche::Pourcent);
                self.bouton_touche(ui, "÷", Touche::Op(Operateur::Divise));
                ui.end_row();

                for (ligne, op) in [
                    (['7', '8', '9'], Operateur::Fois),
                    (['4', '5', '6'], Operateur::Moins),
                    (['1', '2', '3'], Operateur::Plus),
                ] {
                    for d in ligne {
                        self.bouton_touche(ui, d.encode_utf8(&mut [0; 4]), Touche::Chiffre(d));
                    }
                    self.bouton_touche(ui, op.symbole(), Touche::Op(op));
                    ui.end_row();
                }

                self.bouton_touche(ui, "0", Touche::Chiffre('0'));
                self.bouton_touche(ui, ".", Touche::Point);
                ui.label("");
                self.bouton_touche(ui, "=", Touche::Egal);
                ui.end_row();
            });
    }

    fn bouton_touche(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche) {
        let texte = egui::RichText::new(label).size(20.0);
        if ui.add_sized(TOUCHE, egui::Button::new(texte)).clicked() {
            self.appuyer(touche);
        }
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        ui.heading("Historique");
        ui.add_space(4.0);

        let historique = self.calc.historique();
        if historique.is_empty() {
            ui.weak("Aucun calcul pour l’instant");
        } else {
            egui::ScrollArea::vertical()
                .max_height((ui.available_height() - 40.0).max(80.0))
                .show(ui, |ui| {
                    for (i, e) in historique.iter().enumerate() {
                        ui.push_id(i, |ui| {
                            ui.label(egui::RichText::new(&e.expression).monospace().weak());
                            ui.monospace(format!("= {}", e.resultat));
                            ui.separator();
                        });
                    }
                });
        }

        ui.add_space(6.0);
        if ui
            .add_enabled(!self.calc.historique().is_empty(), egui::Button::new("Effacer l’historique"))
            .clicked()
        {
            self.calc.effacer_historique();
        }
    }

    /* ------------------------ Outils ------------------------ */

    /// Formulaire générique valeur + de/vers. Renvoie true si "Convertir" est cliqué.
    fn ui_conversion<U: Unite>(
        ui: &mut egui::Ui,
        id: &str,
        form: &mut FormConversion<U>,
        action: &str,
    ) -> bool {
        ui.label("Valeur :");
        ui.add(egui::TextEdit::singleline(&mut form.valeur).hint_text("Entrer une valeur"));

        Self::choix_unite(ui, &format!("{id}_de"), "De :", &mut form.de);
        Self::choix_unite(ui, &format!("{id}_vers"), "Vers :", &mut form.vers);

        ui.add_space(6.0);
        let clique = ui.button(action).clicked();

        if let Some(r) = &form.resultat {
            ui.add_space(6.0);
            Self::champ_resultat(ui, r);
        }
        clique
    }

    fn choix_unite<U: Unite>(ui: &mut egui::Ui, id: &str, label: &str, courant: &mut U) {
        ui.horizontal(|ui| {
            ui.label(label);
            egui::ComboBox::from_id_salt(id)
                .selected_text(courant.libelle())
                .show_ui(ui, |ui| {
                    for &u in U::TOUTES {
                        ui.selectable_value(courant, u, u.libelle());
                    }
                });
        });
    }

    fn champ_resultat(ui: &mut egui::Ui, r: &ResultatOutil) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.label(
                    egui::RichText::new(format!("{} {}", r.valeur, r.unite))
                        .monospace()
                        .size(24.0),
                );
            });
    }

    fn ui_pret(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("form_pret").num_columns(2).show(ui, |ui| {
            ui.label("Montant :");
            ui.text_edit_singleline(&mut self.pret.montant);
            ui.end_row();

            ui.label("Taux annuel (%) :");
            ui.text_edit_singleline(&mut self.pret.taux);
            ui.end_row();

            ui.label("Durée (années) :");
            ui.text_edit_singleline(&mut self.pret.annees);
            ui.end_row();
        });

        ui.add_space(6.0);
        if ui.button("Calculer").clicked() {
            self.calculer_pret();
        }

        if let Some(r) = self.pret.resultat {
            ui.add_space(6.0);
            egui::Grid::new("resultat_pret").num_columns(2).show(ui, |ui| {
                ui.label("Mensualité :");
                ui.monospace(format!("{:.2}", r.mensualite));
                ui.end_row();

                ui.label("Total remboursé :");
                ui.monospace(format!("{:.2}", r.total));
                ui.end_row();

                ui.label("Intérêts :");
                ui.monospace(format!("{:.2}", r.interets));
                ui.end_row();
            });
        }
    }

    fn ui_pourcentage(&mut self, ui: &mut egui::Ui) {
        let f = &mut self.pourcentage;

        egui::ComboBox::from_id_salt("operation_pourcentage")
            .selected_text(f.operation.libelle())
            .show_ui(ui, |ui| {
                for op in OperationPourcentage::TOUTES {
                    ui.selectable_value(&mut f.operation, op, op.libelle());
                }
            });

        let (l1, l2) = f.operation.libelles_champs();
        egui::Grid::new("form_pourcentage").num_columns(2).show(ui, |ui| {
            ui.label(format!("{l1} :"));
            ui.text_edit_singleline(&mut f.v1);
            ui.end_row();

            ui.label(format!("{l2} :"));
            ui.text_edit_singleline(&mut f.v2);
            ui.end_row();
        });

        ui.add_space(6.0);
        if ui.button("Calculer").clicked() {
            self.calculer_pourcentage();
        }

        if let Some(r) = &self.pourcentage.resultat {
            ui.add_space(6.0);
            ui.label(egui::RichText::new(r).monospace().size(24.0));
        }
    }

    fn ui_temps(&mut self, ui: &mut egui::Ui) {
        let f = &mut self.temps;

        egui::Grid::new("form_temps").num_columns(4).show(ui, |ui| {
            ui.label("");
            ui.label("h");
            ui.label("min");
            ui.label("s");
            ui.end_row();

            for (ligne, titre) in ["Durée 1", "Durée 2"].into_iter().enumerate() {
                ui.label(titre);
                for champ in &mut f.champs[ligne * 3..ligne * 3 + 3] {
                    ui.add(egui::TextEdit::singleline(champ).desired_width(48.0));
                }
                ui.end_row();
            }
        });

        ui.horizontal(|ui| {
            for op in [OperationTemps::Ajouter, OperationTemps::Soustraire] {
                ui.radio_value(&mut f.operation, op, op.libelle());
            }
        });

        ui.add_space(6.0);
        if ui.button("Calculer").clicked() {
            self.calculer_temps();
        }

        if let Some(r) = &self.temps.resultat {
            ui.add_space(6.0);
            ui.label(egui::RichText::new(r).monospace().size(24.0));
        }
    }
}
