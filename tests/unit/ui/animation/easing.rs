use super::*;

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn every_curve_starts_at_zero_and_ends_at_one() {
    for (name, f) in ALL {
        assert!(close(f(0.0), 0.0), "{name}(0) = {}", f(0.0));
        assert!(close(f(1.0), 1.0), "{name}(1) = {}", f(1.0));
    }
}

#[test]
fn library_has_every_family() {
    assert_eq!(ALL.len(), 31);
    assert!(by_name("bounce_in_out").is_some());
    assert!(by_name("wobble").is_none());
}

#[test]
fn in_out_curves_pass_through_the_midpoint() {
    for name in ["quadratic_in_out", "cubic_in_out", "sine_in_out", "circular_in_out"] {
        let f = by_name(name).unwrap();
        assert!(close(f(0.5), 0.5), "{name}");
    }
}

#[test]
fn in_curves_lag_and_out_curves_lead() {
    assert!(quadratic_in(0.5) < 0.5);
    assert!(quadratic_out(0.5) > 0.5);
    assert!(cubic_in(0.5) < quadratic_in(0.5));
}

#[test]
fn back_in_overshoots_below_zero() {
    assert!(back_in(0.2) < 0.0);
    assert!(back_out(0.8) > 1.0);
}

#[test]
fn monotonic_curves_do_not_decrease() {
    let curves: [EasingFn; 4] = [linear, quadratic_out, sine_in, exponential_in_out];
    for f in curves {
        let mut prev = f(0.0);
        for i in 1..=100 {
            let v = f(i as f32 / 100.0);
            assert!(v + 1e-6 >= prev);
            prev = v;
        }
    }
}
