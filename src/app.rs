// src/app.rs
//
// Calculatrice à touches, module App (racine)
// -------------------------------------------
// Rôle:
// - Déclarer les sous-modules (clavier.rs + etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Ordre par frame : thème, jetons clavier, puis dessin (le pavé émet ses propres jetons).

pub mod clavier;
pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::config::Theme;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(match self.theme {
            Theme::Clair => egui::Visuals::light(),
            Theme::Sombre => egui::Visuals::dark(),
        });

        for jeton in clavier::jetons_du_cadre(ctx) {
            self.appliquer(jeton);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
