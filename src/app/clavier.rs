// src/app/clavier.rs
//
// Source de jetons : clavier physique -> Jeton
// --------------------------------------------
// - Caractères (Event::Text) : chiffres, opérateurs, raccourcis de fonctions
// - Touches nommées (Event::Key) : Enter, Backspace, Delete, Escape
// - Répétitions et combinaisons Ctrl/Alt/Cmd ignorées

use eframe::egui;

use crate::noyau::{Binaire, Jeton, Unaire};

/// Caractère tapé -> jeton (None si la touche n’a pas de rôle).
pub fn jeton_pour_caractere(c: char) -> Option<Jeton> {
    let j = match c {
        '0'..='9' => Jeton::Chiffre(c),
        '.' => Jeton::Point,
        '+' => Jeton::Operateur(Binaire::Add),
        '-' => Jeton::Operateur(Binaire::Subtract),
        '*' | '×' => Jeton::Operateur(Binaire::Multiply),
        '/' | '÷' => Jeton::Operateur(Binaire::Divide),
        '^' => Jeton::Operateur(Binaire::Exponent),
        '%' => Jeton::Fonction(Unaire::Percent),
        '=' => Jeton::Egal,
        'p' | 'P' => Jeton::Pi,
        'a' | 'A' => Jeton::Rappel,
        's' | 'S' => Jeton::Fonction(Unaire::Sine),
        'c' | 'C' => Jeton::Fonction(Unaire::Cosine),
        't' | 'T' => Jeton::Fonction(Unaire::Tangent),
        'l' | 'L' => Jeton::Fonction(Unaire::Log10),
        'r' | 'R' => Jeton::Fonction(Unaire::Sqrt),
        _ => return None,
    };
    Some(j)
}

/// Touches sans caractère.
pub fn jeton_pour_touche(key: egui::Key) -> Option<Jeton> {
    match key {
        egui::Key::Enter => Some(Jeton::Egal),
        egui::Key::Backspace => Some(Jeton::Retour),
        egui::Key::Delete | egui::Key::Escape => Some(Jeton::Effacer),
        _ => None,
    }
}

fn modifie(m: &egui::Modifiers) -> bool {
    m.ctrl || m.alt || m.command || m.mac_cmd
}

/// Jetons produits par le clavier pendant cette frame, dans l’ordre.
pub fn jetons_du_cadre(ctx: &egui::Context) -> Vec<Jeton> {
    ctx.input(|i| {
        let mut jetons = Vec::new();
        for ev in &i.events {
            match ev {
                egui::Event::Text(t) if !modifie(&i.modifiers) => {
                    jetons.extend(t.chars().filter_map(jeton_pour_caractere));
                }
                egui::Event::Key {
                    key,
                    pressed: true,
                    repeat: false,
                    modifiers,
                    ..
                } if !modifie(modifiers) => {
                    jetons.extend(jeton_pour_touche(*key));
                }
                _ => {}
            }
        }
        jetons
    })
}
