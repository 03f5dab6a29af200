//! Progress remapping curves. Every function maps `0.0 -> 0.0` and
//! `1.0 -> 1.0`; elastic, back and bounce variants overshoot in between.

use std::f32::consts::PI;

pub type EasingFn = fn(f32) -> f32;

pub fn linear(p: f32) -> f32 {
    p
}

pub fn quadratic_in(p: f32) -> f32 {
    p * p
}

pub fn quadratic_out(p: f32) -> f32 {
    -(p * (p - 2.0))
}

pub fn quadratic_in_out(p: f32) -> f32 {
    if p < 0.5 {
        2.0 * p * p
    } else {
        (-2.0 * p * p) + (4.0 * p) - 1.0
    }
}

pub fn cubic_in(p: f32) -> f32 {
    p * p * p
}

pub fn cubic_out(p: f32) -> f32 {
    let f = p - 1.0;
    f * f * f + 1.0
}

pub fn cubic_in_out(p: f32) -> f32 {
    if p < 0.5 {
        4.0 * p * p * p
    } else {
        let f = 2.0 * p - 2.0;
        0.5 * f * f * f + 1.0
    }
}

pub fn quartic_in(p: f32) -> f32 {
    p * p * p * p
}

pub fn quartic_out(p: f32) -> f32 {
    let f = p - 1.0;
    f * f * f * (1.0 - p) + 1.0
}

pub fn quartic_in_out(p: f32) -> f32 {
    if p < 0.5 {
        8.0 * p * p * p * p
    } else {
        let f = p - 1.0;
        -8.0 * f * f * f * f + 1.0
    }
}

pub fn quintic_in(p: f32) -> f32 {
    p * p * p * p * p
}

pub fn quintic_out(p: f32) -> f32 {
    let f = p - 1.0;
    f * f * f * f * f + 1.0
}

pub fn quintic_in_out(p: f32) -> f32 {
    if p < 0.5 {
        16.0 * p * p * p * p * p
    } else {
        let f = 2.0 * p - 2.0;
        0.5 * f * f * f * f * f + 1.0
    }
}

pub fn sine_in(p: f32) -> f32 {
    ((p - 1.0) * PI / 2.0).sin() + 1.0
}

pub fn sine_out(p: f32) -> f32 {
    (p * PI / 2.0).sin()
}

pub fn sine_in_out(p: f32) -> f32 {
    0.5 * (1.0 - (p * PI).cos())
}

pub fn circular_in(p: f32) -> f32 {
    1.0 - (1.0 - p * p).sqrt()
}

pub fn circular_out(p: f32) -> f32 {
    ((2.0 - p) * p).sqrt()
}

pub fn circular_in_out(p: f32) -> f32 {
    if p < 0.5 {
        0.5 * (1.0 - (1.0 - 4.0 * p * p).sqrt())
    } else {
        0.5 * ((-(2.0 * p - 3.0) * (2.0 * p - 1.0)).sqrt() + 1.0)
    }
}

pub fn exponential_in(p: f32) -> f32 {
    if p == 0.0 {
        p
    } else {
        2f32.powf(10.0 * (p - 1.0))
    }
}

pub fn exponential_out(p: f32) -> f32 {
    if p == 1.0 {
        p
    } else {
        1.0 - 2f32.powf(-10.0 * p)
    }
}

pub fn exponential_in_out(p: f32) -> f32 {
    if p == 0.0 || p == 1.0 {
        return p;
    }
    if p < 0.5 {
        0.5 * 2f32.powf(20.0 * p - 10.0)
    } else {
        -0.5 * 2f32.powf(-20.0 * p + 10.0) + 1.0
    }
}

pub fn elastic_in(p: f32) -> f32 {
    (13.0 * PI / 2.0 * p).sin() * 2f32.powf(10.0 * (p - 1.0))
}

pub fn elastic_out(p: f32) -> f32 {
    (-13.0 * PI / 2.0 * (p + 1.0)).sin() * 2f32.powf(-10.0 * p) + 1.0
}

pub fn elastic_in_out(p: f32) -> f32 {
    if p < 0.5 {
        0.5 * (13.0 * PI / 2.0 * (2.0 * p)).sin() * 2f32.powf(10.0 * (2.0 * p - 1.0))
    } else {
        0.5 * ((-13.0 * PI / 2.0 * (2.0 * p)).sin() * 2f32.powf(-10.0 * (2.0 * p - 1.0)) + 2.0)
    }
}

pub fn back_in(p: f32) -> f32 {
    p * p * p - p * (p * PI).sin()
}

pub fn back_out(p: f32) -> f32 {
    let f = 1.0 - p;
    1.0 - (f * f * f - f * (f * PI).sin())
}

pub fn back_in_out(p: f32) -> f32 {
    if p < 0.5 {
        let f = 2.0 * p;
        0.5 * (f * f * f - f * (f * PI).sin())
    } else {
        let f = 1.0 - (2.0 * p - 1.0);
        0.5 * (1.0 - (f * f * f - f * (f * PI).sin())) + 0.5
    }
}

pub fn bounce_in(p: f32) -> f32 {
    1.0 - bounce_out(1.0 - p)
}

pub fn bounce_out(p: f32) -> f32 {
    if p < 4.0 / 11.0 {
        (121.0 * p * p) / 16.0
    } else if p < 8.0 / 11.0 {
        (363.0 / 40.0 * p * p) - (99.0 / 10.0 * p) + 17.0 / 5.0
    } else if p < 9.0 / 10.0 {
        (4356.0 / 361.0 * p * p) - (35442.0 / 1805.0 * p) + 16061.0 / 1805.0
    } else {
        (54.0 / 5.0 * p * p) - (513.0 / 25.0 * p) + 268.0 / 25.0
    }
}

pub fn bounce_in_out(p: f32) -> f32 {
    if p < 0.5 {
        0.5 * bounce_in(p * 2.0)
    } else {
        0.5 * bounce_out(p * 2.0 - 1.0) + 0.5
    }
}

/// Every curve by name, for demos and configuration.
pub const ALL: &[(&str, EasingFn)] = &[
    ("linear", linear),
    ("quadratic_in", quadratic_in),
    ("quadratic_out", quadratic_out),
    ("quadratic_in_out", quadratic_in_out),
    ("cubic_in", cubic_in),
    ("cubic_out", cubic_out),
    ("cubic_in_out", cubic_in_out),
    ("quartic_in", quartic_in),
    ("quartic_out", quartic_out),
    ("quartic_in_out", quartic_in_out),
    ("quintic_in", quintic_in),
    ("quintic_out", quintic_out),
    ("quintic_in_out", quintic_in_out),
    ("sine_in", sine_in),
    ("sine_out", sine_out),
    ("sine_in_out", sine_in_out),
    ("circular_in", circular_in),
    ("circular_out", circular_out),
    ("circular_in_out", circular_in_out),
    ("exponential_in", exponential_in),
    ("exponential_out", exponential_out),
    ("exponential_in_out", exponential_in_out),
    ("elastic_in", elastic_in),
    ("elastic_out", elastic_out),
    ("elastic_in_out", elastic_in_out),
    ("back_in", back_in),
    ("back_out", back_out),
    ("back_in_out", back_in_out),
    ("bounce_in", bounce_in),
    ("bounce_out", bounce_out),
    ("bounce_in_out", bounce_in_out),
];

pub fn by_name(name: &str) -> Option<EasingFn> {
    ALL.iter().find(|(n, _)| *n == name).map(|(_, f)| *f)
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/animation/easing.rs"]
mod tests;
