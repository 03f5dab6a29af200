//! One-dimensional space distribution shared by the stacking containers and
//! flexbox lines.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoxElement {
    pub min_size: i32,
    pub flex_grow: i32,
    pub flex_shrink: i32,
    /// Output.
    pub size: i32,
}

impl BoxElement {
    pub fn new(min_size: i32, flex_grow: i32, flex_shrink: i32) -> Self {
        Self {
            min_size,
            flex_grow,
            flex_shrink,
            size: 0,
        }
    }
}

// Integer shares are taken in order, each from what the earlier ones left, so
// rounding leftovers land on the later elements.
fn compute_grow(elements: &mut [BoxElement], mut extra: i32, mut grow_sum: i32) {
    for e in elements {
        let added = if grow_sum > 0 {
            extra * e.flex_grow / grow_sum
        } else {
            0
        };
        extra -= added;
        grow_sum -= e.flex_grow;
        e.size = e.min_size + added;
    }
}

// Shrinkable elements alone can absorb the deficit, in proportion to
// `min_size * flex_shrink`.
fn compute_shrink_easy(elements: &mut [BoxElement], mut extra: i32, mut shrink_sum: i32) {
    for e in elements {
        let weight = e.min_size * e.flex_shrink;
        let added = if shrink_sum > 0 {
            extra * weight / shrink_sum
        } else {
            0
        };
        extra -= added;
        shrink_sum -= weight;
        e.size = e.min_size + added;
    }
}

// Shrinkable elements collapse to nothing and the rest shrink in proportion
// to their minimum size.
fn compute_shrink_hard(elements: &mut [BoxElement], mut extra: i32, mut size: i32) {
    for e in elements {
        if e.flex_shrink > 0 {
            e.size = 0;
            continue;
        }
        let added = if size > 0 {
            extra * e.min_size / size
        } else {
            0
        };
        extra -= added;
        size -= e.min_size;
        e.size = e.min_size + added;
    }
}

/// Fills in `size` for every element so the sizes add up to `target_size`
/// (when the minimum sizes allow it).
pub fn compute(elements: &mut [BoxElement], target_size: i32) {
    let mut size = 0;
    let mut grow_sum = 0;
    let mut shrink_sum = 0;
    let mut shrink_size = 0;
    for e in elements.iter() {
        size += e.min_size;
        grow_sum += e.flex_grow;
        shrink_sum += e.min_size * e.flex_shrink;
        if e.flex_shrink > 0 {
            shrink_size += e.min_size;
        }
    }

    let extra = target_size - size;
    if extra >= 0 {
        compute_grow(elements, extra, grow_sum);
    } else if shrink_size + extra >= 0 {
        compute_shrink_easy(elements, extra, shrink_sum);
    } else {
        compute_shrink_hard(elements, extra + shrink_size, size - shrink_size);
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/dom/box_helper.rs"]
mod tests;
