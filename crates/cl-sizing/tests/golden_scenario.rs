//! Regression values for the stock freezer room and a few variations.

use cl_core::{Tolerances, nearly_equal};
use cl_sizing::{
    InputLimits, InsulationType, SizingInput, compute_load, envelope_area, room_volume,
    sanitize_input,
};
use uom::si::power::kilowatt;

const TOL: Tolerances = Tolerances {
    abs: 1e-12,
    rel: 1e-9,
};

#[test]
fn stock_freezer_room() {
    let input = SizingInput {
        room_width_m: 6.0,
        room_length_m: 8.0,
        room_height_m: 3.5,
        insulation_type: InsulationType::Pur,
        insulation_thickness_mm: 100.0,
        ambient_temp_c: 35.0,
        target_temp_c: -18.0,
        product_mass_kg: 5000.0,
        product_cp_kj_kgk: 3.2,
        loading_time_hours: 24.0,
    };
    assert_eq!(input, SizingInput::default());

    let r = compute_load(&input).expect("stock room should size");

    assert_eq!(r.envelope_area_m2, 146.0);
    assert_eq!(r.volume_m3, 168.0);
    assert_eq!(r.temp_diff_k, 53.0);
    assert!(nearly_equal(r.u_value_w_m2k, 0.22, TOL));

    assert!(nearly_equal(r.transmission_load_kw, 1.702_36, TOL));
    assert!(nearly_equal(r.product_load_kw, 9.814_814_814_814_815, TOL));
    assert!(nearly_equal(r.infiltration_load_kw, 0.007_42, TOL));
    assert!(nearly_equal(r.total_load_kw, 13.253_284_037_037_037, TOL));
    assert!(nearly_equal(r.safety_margin_kw, 1.728_689_222_222_222, TOL));

    assert!(nearly_equal(r.total_load().get::<kilowatt>(), r.total_load_kw, TOL));
}

#[test]
fn stock_room_with_eps_panels() {
    let input = SizingInput {
        insulation_type: InsulationType::Eps,
        ..SizingInput::default()
    };
    let r = compute_load(&input).unwrap();
    assert!(nearly_equal(r.total_load_kw, 14.499_102_037_037_035, TOL));
}

#[test]
fn pir_matches_pur() {
    let pur = compute_load(&SizingInput::default()).unwrap();
    let pir = compute_load(&SizingInput {
        insulation_type: InsulationType::Pir,
        ..SizingInput::default()
    })
    .unwrap();
    assert_eq!(pur, pir);
}

#[test]
fn equal_temperatures_zero_everything() {
    let input = SizingInput::default().with_temperatures(4.0, 4.0);
    let r = compute_load(&input).unwrap();
    assert_eq!(r.total_load_kw, 0.0);
    assert_eq!(r.safety_margin_kw, 0.0);
}

#[test]
fn zero_divisors_never_leak_nan() {
    for input in [
        SizingInput {
            loading_time_hours: 0.0,
            ..SizingInput::default()
        },
        SizingInput {
            insulation_thickness_mm: 0.0,
            ..SizingInput::default()
        },
    ] {
        match compute_load(&input) {
            Err(e) => assert!(e.is_invalid_input()),
            Ok(r) => panic!("expected an error, got {r:?}"),
        }
    }
}

#[test]
fn doubling_mass_doubles_product_load() {
    let base = compute_load(&SizingInput::default()).unwrap();
    let heavy = compute_load(&SizingInput::default().with_product_mass(10_000.0)).unwrap();
    assert!(nearly_equal(heavy.product_load_kw, 2.0 * base.product_load_kw, TOL));
}

#[test]
fn uniform_scaling_is_not_uniform_for_area_and_volume() {
    let (w, l, h) = (6.0, 8.0, 3.5);
    let k = 2.0;
    assert_eq!(envelope_area(k * w, k * l, k * h), 584.0);
    assert_eq!(room_volume(k * w, k * l, k * h), 1344.0);
    assert_ne!(envelope_area(k * w, k * l, k * h), k * envelope_area(w, l, h));
}

#[test]
fn sanitized_input_feeds_calculator() {
    let raw = SizingInput {
        insulation_thickness_mm: 400.0,
        ..SizingInput::default()
    };
    let outcome = sanitize_input(&raw, &InputLimits::default()).unwrap();
    assert!(outcome.was_clamped());
    let clamped = compute_load(&outcome.input).unwrap();
    let thick = compute_load(&raw).unwrap();
    assert!(clamped.transmission_load_kw > thick.transmission_load_kw);
}
