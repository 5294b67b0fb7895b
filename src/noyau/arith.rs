// src/noyau/arith.rs
//
// Bibliothèque arithmétique (f64, sans état)
// ------------------------------------------
// Contrat : chaque fonction rend soit un nombre FINI, soit une ErreurCalc.
// - sin/cos/tan : degrés, réduits modulo 360 avant conversion
// - bruit flottant : |x| < 1e-14 => 0 exactement (sin/cos)
// - factorielle : entiers 0..=170 (171! n’est plus représentable)

use std::f64::consts::PI;

use num_traits::ToPrimitive;
use thiserror::Error;

use super::operation::{Binaire, Unaire};

/// Seuil du “zéro flottant” (sin(180°), cos(90°), résultats normalisés).
pub const SEUIL_ZERO: f64 = 1e-14;

/// Plus grand n tel que n! reste fini en f64.
pub const FACTORIELLE_MAX: f64 = 170.0;

/// Base par défaut de `exposant` (10^x).
pub const BASE_EXPOSANT: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalc {
    /// Débordement ou résultat non fini (division par zéro incluse).
    #[error("résultat non fini")]
    NonFini,
    /// Argument hors du domaine de la fonction (√ négatif, log ≤ 0, n! invalide).
    #[error("argument hors domaine")]
    HorsDomaine,
    /// Point mathématiquement indéfini (asymptote de tan).
    #[error("indéfini")]
    Indefini,
    /// Opérande illisible (ni nombre, ni fini).
    #[error("opérande illisible")]
    Illisible,
}

pub type ResultatCalc = Result<f64, ErreurCalc>;

fn fini(x: f64) -> ResultatCalc {
    if x.is_finite() {
        Ok(x)
    } else {
        Err(ErreurCalc::NonFini)
    }
}

fn sans_bruit(x: f64) -> f64 {
    if x.abs() < SEUIL_ZERO {
        0.0
    } else {
        x
    }
}

/// Angle en degrés -> radians, après réduction modulo 360.
fn radians_reduits(a: f64) -> f64 {
    (a % 360.0) * PI / 180.0
}

/* ------------------------ Binaires ------------------------ */

pub fn addition(a: f64, b: f64) -> ResultatCalc {
    fini(a + b)
}

pub fn soustraction(a: f64, b: f64) -> ResultatCalc {
    fini(a - b)
}

pub fn multiplication(a: f64, b: f64) -> ResultatCalc {
    fini(a * b)
}

pub fn division(a: f64, b: f64) -> ResultatCalc {
    if b == 0.0 || !a.is_finite() || !b.is_finite() {
        return Err(ErreurCalc::NonFini);
    }
    fini(a / b)
}

/// base^a ; `None` => base 10.
pub fn exposant(a: f64, base: Option<f64>) -> ResultatCalc {
    let base = base.unwrap_or(BASE_EXPOSANT);
    if !a.is_finite() || !base.is_finite() {
        return Err(ErreurCalc::NonFini);
    }
    fini(base.powf(a))
}

/* ------------------------ Unaires ------------------------ */

pub fn sinus(a: f64) -> ResultatCalc {
    if !a.is_finite() {
        return Err(ErreurCalc::NonFini);
    }
    Ok(sans_bruit(radians_reduits(a).sin()))
}

pub fn cosinus(a: f64) -> ResultatCalc {
    if !a.is_finite() {
        return Err(ErreurCalc::NonFini);
    }
    Ok(sans_bruit(radians_reduits(a).cos()))
}

pub fn tangente(a: f64) -> ResultatCalc {
    if !a.is_finite() {
        return Err(ErreurCalc::NonFini);
    }
    let reduit = a % 360.0;
    // 90°, 270°, -90°… : asymptotes
    if (reduit % 180.0).abs() == 90.0 {
        return Err(ErreurCalc::Indefini);
    }
    fini((reduit * PI / 180.0).tan())
}

pub fn log10(a: f64) -> ResultatCalc {
    if a <= 0.0 || !a.is_finite() {
        return Err(ErreurCalc::HorsDomaine);
    }
    Ok(a.log10())
}

pub fn racine(a: f64) -> ResultatCalc {
    if a < 0.0 || !a.is_finite() {
        return Err(ErreurCalc::HorsDomaine);
    }
    Ok(a.sqrt())
}

pub fn carre(a: f64) -> ResultatCalc {
    if !a.is_finite() {
        return Err(ErreurCalc::NonFini);
    }
    fini(a * a)
}

pub fn factorielle(a: f64) -> ResultatCalc {
    if !a.is_finite() || a < 0.0 || a.fract() != 0.0 || a > FACTORIELLE_MAX {
        return Err(ErreurCalc::HorsDomaine);
    }
    let n = a.to_u32().ok_or(ErreurCalc::HorsDomaine)?;

    let mut acc = 1.0_f64;
    for i in 2..=n {
        acc *= f64::from(i);
    }
    fini(acc)
}

pub fn pourcentage(a: f64) -> ResultatCalc {
    if !a.is_finite() {
        return Err(ErreurCalc::NonFini);
    }
    Ok(a / 100.0)
}

/* ------------------------ Dispatch (fermé) ------------------------ */

/// `gauche op droite` ; pour l’exposant : gauche^droite.
pub fn evaluer_binaire(op: Binaire, gauche: f64, droite: f64) -> ResultatCalc {
    match op {
        Binaire::Add => addition(gauche, droite),
        Binaire::Subtract => soustraction(gauche, droite),
        Binaire::Multiply => multiplication(gauche, droite),
        Binaire::Divide => division(gauche, droite),
        Binaire::Exponent => exposant(droite, Some(gauche)),
    }
}

pub fn evaluer_unaire(op: Unaire, a: f64) -> ResultatCalc {
    match op {
        Unaire::Sine => sinus(a),
        Unaire::Cosine => cosinus(a),
        Unaire::Tangent => tangente(a),
        Unaire::Log10 => log10(a),
        Unaire::Sqrt => racine(a),
        Unaire::Square => carre(a),
        Unaire::Factorial => factorielle(a),
        Unaire::Percent => pourcentage(a),
    }
}
