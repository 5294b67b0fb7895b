// src/app/vue.rs
//
// Vue (UI egui), natif + web
// ---------------------------
// - Écran : ligne d’opération + entrée courante (monospace, aligné à droite)
// - Pavé : fonctions, chiffres, opérateurs ; chaque bouton émet un Jeton
// - Historique repliable (plus récent en haut)
// - Bascule clair / sombre
//
// Note : la touche xʸ du pavé émet Jeton::Exposant (double appui = évaluation),
// le ^ du clavier reste la forme opérateur.

use eframe::egui;

use super::etat::AppCalc;
use crate::config::Theme;
use crate::noyau::{Binaire, Jeton, Langue, Unaire};

/// Pavé 5 colonnes : (libellé, jeton).
const PAVE: [[(&str, Jeton); 5]; 6] = [
    [
        ("sin", Jeton::Fonction(Unaire::Sine)),
        ("cos", Jeton::Fonction(Unaire::Cosine)),
        ("tan", Jeton::Fonction(Unaire::Tangent)),
        ("log", Jeton::Fonction(Unaire::Log10)),
        ("√", Jeton::Fonction(Unaire::Sqrt)),
    ],
    [
        ("x²", Jeton::Fonction(Unaire::Square)),
        ("n!", Jeton::Fonction(Unaire::Factorial)),
        ("%", Jeton::Fonction(Unaire::Percent)),
        ("xʸ", Jeton::Exposant),
        ("π", Jeton::Pi),
    ],
    [
        ("7", Jeton::Chiffre('7')),
        ("8", Jeton::Chiffre('8')),
        ("9", Jeton::Chiffre('9')),
        ("÷", Jeton::Operateur(Binaire::Divide)),
        ("⌫", Jeton::Retour),
    ],
    [
        ("4", Jeton::Chiffre('4')),
        ("5", Jeton::Chiffre('5')),
        ("6", Jeton::Chiffre('6')),
        ("×", Jeton::Operateur(Binaire::Multiply)),
        ("C", Jeton::Effacer),
    ],
    [
        ("1", Jeton::Chiffre('1')),
        ("2", Jeton::Chiffre('2')),
        ("3", Jeton::Chiffre('3')),
        ("-", Jeton::Operateur(Binaire::Subtract)),
        ("Ans", Jeton::Rappel),
    ],
    [
        ("0", Jeton::Chiffre('0')),
        (".", Jeton::Point),
        ("=", Jeton::Egal),
        ("+", Jeton::Operateur(Binaire::Add)),
        ("^", Jeton::Operateur(Binaire::Exponent)),
    ],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(titre(self.langue));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        self.ui_theme(ui);
                    });
                });
                ui.add_space(6.0);

                self.ui_ecran(ui);

                ui.add_space(8.0);
                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_historique(ui);
            });
    }

    fn ui_theme(&mut self, ui: &mut egui::Ui) {
        let icone = match self.theme {
            Theme::Clair => "🌙",
            Theme::Sombre => "☀",
        };
        if ui.add_sized([32.0, 28.0], egui::Button::new(icone)).clicked() {
            self.basculer_theme();
        }
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        let en_erreur = self.calc.en_erreur();

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // ligne d’opération (vide si rien en attente)
                    let haut = match self.affichage.operation {
                        Some(_) => self.affichage.texte.as_str(),
                        None => " ",
                    };
                    ui.monospace(haut);

                    let courant = if en_erreur {
                        self.affichage.texte.as_str()
                    } else {
                        self.affichage.entree.as_str()
                    };
                    let texte = egui::RichText::new(courant).monospace().size(28.0);
                    if en_erreur {
                        ui.label(texte.color(ui.visuals().error_fg_color));
                    } else {
                        ui.label(texte);
                    }
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let mut clic = None;

        egui::Grid::new("pave_calculatrice")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in PAVE {
                    for (label, jeton) in rangee {
                        if Self::bouton(ui, label).clicked() {
                            clic = Some(jeton);
                        }
                    }
                    ui.end_row();
                }
            });

        if let Some(j) = clic {
            self.appliquer(j);
        }
    }

    fn bouton(ui: &mut egui::Ui, label: &str) -> egui::Response {
        ui.add_sized([64.0, 40.0], egui::Button::new(egui::RichText::new(label).size(18.0)))
    }

    fn ui_historique(&self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new(titre_historique(self.langue))
            .default_open(true)
            .show(ui, |ui| {
                let lignes = self.lignes_historique();
                if lignes.is_empty() {
                    ui.weak("-");
                    return;
                }
                for l in lignes {
                    ui.monospace(l);
                }
            });
    }
}

fn titre(langue: Langue) -> &'static str {
    match langue {
        Langue::Es => "Calculadora científica",
        Langue::En => "Scientific calculator",
        Langue::Fr => "Calculatrice scientifique",
    }
}

fn titre_historique(langue: Langue) -> &'static str {
    match langue {
        Langue::Es => "Historial",
        Langue::En => "History",
        Langue::Fr => "Historique",
    }
}
