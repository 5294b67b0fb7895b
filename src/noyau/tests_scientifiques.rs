//! Tests scientifiques : bibliothèque arithmétique + normalisation.
//!
//! Couvre les cas limites du flottant :
//! - division par zéro / opérandes non finis
//! - bruit aux passages par zéro (sin 180°, cos 90°)
//! - asymptotes de tan
//! - bornes de la factorielle (170 / 171)
//! - seuil de la notation scientifique (1e15 exactement)

use super::arith::*;
use super::format::*;
use super::operation::{Binaire, Unaire};

fn proche(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

/* ------------------------ Binaires ------------------------ */

#[test]
fn sci_division_par_zero() {
    assert_eq!(division(5.0, 0.0), Err(ErreurCalc::NonFini));
    assert_eq!(division(0.0, 0.0), Err(ErreurCalc::NonFini));
    assert_eq!(division(5.0, -0.0), Err(ErreurCalc::NonFini));
    assert_eq!(division(f64::INFINITY, 2.0), Err(ErreurCalc::NonFini));
    assert_eq!(division(f64::NAN, 2.0), Err(ErreurCalc::NonFini));
    assert_eq!(division(1.0, f64::INFINITY), Err(ErreurCalc::NonFini));
    assert_eq!(division(9.0, 3.0), Ok(3.0));
}

#[test]
fn sci_debordements() {
    assert_eq!(addition(f64::MAX, f64::MAX), Err(ErreurCalc::NonFini));
    assert_eq!(soustraction(-f64::MAX, f64::MAX), Err(ErreurCalc::NonFini));
    assert_eq!(multiplication(1e200, 1e200), Err(ErreurCalc::NonFini));
    assert_eq!(carre(1e200), Err(ErreurCalc::NonFini));
    assert_eq!(exposant(400.0, None), Err(ErreurCalc::NonFini));
    assert_eq!(addition(2.0, 3.0), Ok(5.0));
}

#[test]
fn sci_exposant() {
    assert_eq!(exposant(3.0, None), Ok(1000.0));
    assert_eq!(exposant(2.0, Some(3.0)), Ok(9.0));
    assert_eq!(exposant(f64::NAN, Some(2.0)), Err(ErreurCalc::NonFini));
    // binaire : gauche^droite
    assert_eq!(evaluer_binaire(Binaire::Exponent, 2.0, 10.0), Ok(1024.0));
}

/* ------------------------ Trigonométrie (degrés) ------------------------ */

#[test]
fn sci_zeros_exacts_trig() {
    assert_eq!(sinus(180.0), Ok(0.0));
    assert_eq!(sinus(360.0), Ok(0.0));
    assert_eq!(sinus(-180.0), Ok(0.0));
    assert_eq!(cosinus(90.0), Ok(0.0));
    assert_eq!(cosinus(270.0), Ok(0.0));
}

#[test]
fn sci_reduction_grands_angles() {
    // 360e9 + 30 est exact en f64 : la réduction retombe sur 30°
    let s = sinus(360e9 + 30.0).unwrap();
    assert!(proche(s, 0.5), "s={s}");
    assert_eq!(sinus(360.0 * 1e6 + 90.0), Ok(1.0));
}

#[test]
fn sci_tangente_asymptotes() {
    for a in [90.0, 270.0, -90.0, 450.0, -270.0] {
        assert_eq!(tangente(a), Err(ErreurCalc::Indefini), "a={a}");
    }
    let t = tangente(45.0).unwrap();
    assert!(proche(t, 1.0), "t={t}");
    assert_eq!(tangente(f64::INFINITY), Err(ErreurCalc::NonFini));
}

/* ------------------------ Domaines ------------------------ */

#[test]
fn sci_domaines() {
    assert_eq!(log10(0.0), Err(ErreurCalc::HorsDomaine));
    assert_eq!(log10(-1.0), Err(ErreurCalc::HorsDomaine));
    assert!(proche(log10(1000.0).unwrap(), 3.0));

    assert_eq!(racine(-1.0), Err(ErreurCalc::HorsDomaine));
    assert_eq!(racine(f64::INFINITY), Err(ErreurCalc::HorsDomaine));
    assert_eq!(racine(16.0), Ok(4.0));

    assert_eq!(pourcentage(50.0), Ok(0.5));
    assert_eq!(pourcentage(f64::NAN), Err(ErreurCalc::NonFini));
}

#[test]
fn sci_factorielle_bornes() {
    let f170 = factorielle(170.0).unwrap();
    assert!(f170.is_finite());
    assert!(f170 > 7.2e306);

    assert_eq!(factorielle(171.0), Err(ErreurCalc::HorsDomaine));
    assert_eq!(factorielle(-1.0), Err(ErreurCalc::HorsDomaine));
    assert_eq!(factorielle(2.5), Err(ErreurCalc::HorsDomaine));
    assert_eq!(factorielle(f64::NAN), Err(ErreurCalc::HorsDomaine));

    assert_eq!(factorielle(0.0), Ok(1.0));
    assert_eq!(factorielle(1.0), Ok(1.0));
    assert_eq!(factorielle(5.0), Ok(120.0));
}

#[test]
fn sci_dispatch_total() {
    // Chaque fonction rend un fini ou une erreur, même sur des entrées hostiles.
    let entrees = [0.0, -0.0, 1.0, -1.0, 0.5, 90.0, 171.0, 1e308, -1e308, f64::NAN, f64::INFINITY];
    for op in Unaire::TOUTES {
        for a in entrees {
            if let Ok(v) = evaluer_unaire(op, a) {
                assert!(v.is_finite(), "{op:?}({a}) = {v}");
            }
        }
    }
    for op in Binaire::TOUTES {
        for a in entrees {
            for b in entrees {
                if let Ok(v) = evaluer_binaire(op, a, b) {
                    assert!(v.is_finite(), "{op:?}({a}, {b}) = {v}");
                }
            }
        }
    }
}

/* ------------------------ Normalisation ------------------------ */

#[test]
fn sci_seuil_scientifique() {
    assert_eq!(normaliser(1e15), "1.000000e+15");
    assert_eq!(normaliser(999_999_999_999_999.0), "999999999999999");
    assert_eq!(normaliser(120_000_000_000_001.0), "120000000000001");
    assert_eq!(normaliser(-2.5e15), "-2.500000e+15");
    assert_eq!(normaliser(1_234_567_890_123_456.0), "1.234568e+15");
}

#[test]
fn sci_decimales_et_bruit() {
    assert_eq!(normaliser(0.1 + 0.2), "0.3");
    assert_eq!(normaliser(2.0 / 3.0), "0.666666666667");
    assert_eq!(normaliser(1.0 / 3.0), "0.333333333333");
    assert_eq!(normaliser(1e-15), "0");
    assert_eq!(normaliser(-1e-15), "0");
    assert_eq!(normaliser(-0.0), "0");
    assert_eq!(normaliser(42.0), "42");
}

#[test]
fn sci_texte_nombre() {
    assert_eq!(texte_nombre(std::f64::consts::PI), "3.141592653589793");
    assert_eq!(texte_nombre(1e21), "1e+21");
    assert_eq!(texte_nombre(1.5e-7), "1.5e-7");
    assert_eq!(texte_nombre(-12.5), "-12.5");
    assert_eq!(texte_nombre(1e20), "100000000000000000000");
}

#[test]
fn sci_lecture_operandes() {
    assert_eq!(lire_operande(ERREUR), Err(ErreurCalc::Illisible));
    assert_eq!(lire_operande(""), Err(ErreurCalc::Illisible));
    assert_eq!(lire_operande("inf"), Err(ErreurCalc::Illisible));
    assert_eq!(lire_operande("NaN"), Err(ErreurCalc::Illisible));
    assert_eq!(lire_operande("1.000000e+15"), Ok(1e15));
    assert_eq!(lire_operande("0."), Ok(0.0));
    assert_eq!(lire_operande("-7"), Ok(-7.0));

    // tout texte normalisé se relit
    for v in [1e15, -3.75, 2.0 / 3.0, 1e-9, 7.257415615307994e306] {
        assert!(lire_operande(&normaliser(v)).is_ok(), "v={v}");
    }
}

#[test]
fn sci_reparer_entree() {
    assert_eq!(reparer_entree("1e-".to_string()), "1");
    assert_eq!(reparer_entree("-".to_string()), "0");
    assert_eq!(reparer_entree(String::new()), "0");
    assert_eq!(reparer_entree("12.".to_string()), "12.");
}
