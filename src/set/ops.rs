//! Pairwise intersection and difference over the three set forms.
//!
//! Every operation takes per-operand shifts into account and expresses
//! its result in the left operand's shifted coordinates. Dense intervals
//! and owned vectors are already normalized (shift 0); only index views
//! carry a shift. A shifted element below zero can never be a match
//! start and is dropped during normalization.
//!
//! Two algorithms serve the sorted-by-sorted cases: a linear two-pointer
//! merge, and a binary probe that searches the larger set for each
//! element of the smaller. The probe is chosen when one side is at least
//! [`PROBE_RATIO`] times the other.

use crate::corpus::Pos;
use crate::set::{DenseInterval, SetRepr};

/// Size ratio at which the binary probe replaces the linear merge.
///
/// At 10x the `O(small * log large)` probe undercuts the `O(a + b)`
/// merge for in-memory posting lists; tune per target machine.
pub const PROBE_RATIO: usize = 10;

/// Intersects two sets, result in the left operand's shifted coordinates.
///
/// Dense-by-dense stays dense; every other pair materializes.
pub fn intersect<'a>(a: &SetRepr<'a>, b: &SetRepr<'a>) -> SetRepr<'a> {
    use SetRepr::{Dense, Owned, View};
    match (a, b) {
        (Dense(x), Dense(y)) => Dense(dense_intersect(x, y)),
        (Dense(x), View(v)) => Owned(range_select(x, v.elems(), v.shift() as i64)),
        (Dense(x), Owned(v)) => Owned(range_select(x, v, 0)),
        (View(v), Dense(y)) => Owned(range_select(y, v.elems(), v.shift() as i64)),
        (Owned(v), Dense(y)) => Owned(range_select(y, v, 0)),
        (View(u), View(v)) => Owned(sorted_intersect(
            u.elems(),
            u.shift() as i64,
            v.elems(),
            v.shift() as i64,
        )),
        (View(u), Owned(v)) => Owned(sorted_intersect(u.elems(), u.shift() as i64, v, 0)),
        (Owned(u), View(v)) => Owned(sorted_intersect(u, 0, v.elems(), v.shift() as i64)),
        (Owned(u), Owned(v)) => Owned(sorted_intersect(u, 0, v, 0)),
    }
}

/// Computes `a - b`, result in the left operand's shifted coordinates.
///
/// Dense-by-dense stays dense unless the right operand splits the left
/// in two, which materializes.
pub fn difference<'a>(a: &SetRepr<'a>, b: &SetRepr<'a>) -> SetRepr<'a> {
    use SetRepr::{Dense, Owned, View};
    match (a, b) {
        (Dense(x), Dense(y)) => dense_difference(x, y),
        (Dense(x), View(v)) => Owned(dense_minus_sorted(x, v.elems(), v.shift() as i64)),
        (Dense(x), Owned(v)) => Owned(dense_minus_sorted(x, v, 0)),
        (View(u), Dense(y)) => Owned(sorted_minus_dense(u.elems(), u.shift() as i64, y)),
        (Owned(u), Dense(y)) => Owned(sorted_minus_dense(u, 0, y)),
        (View(u), View(v)) => Owned(sorted_difference(
            u.elems(),
            u.shift() as i64,
            v.elems(),
            v.shift() as i64,
        )),
        (View(u), Owned(v)) => Owned(sorted_difference(u.elems(), u.shift() as i64, v, 0)),
        (Owned(u), View(v)) => Owned(sorted_difference(u, 0, v.elems(), v.shift() as i64)),
        (Owned(u), Owned(v)) => Owned(sorted_difference(u, 0, v, 0)),
    }
}

#[inline]
fn norm(x: Pos, shift: i64) -> i64 {
    x as i64 - shift
}

fn sorted_intersect(a: &[Pos], a_shift: i64, b: &[Pos], b_shift: i64) -> Vec<Pos> {
    if a.len() * PROBE_RATIO <= b.len() {
        probe_intersect(a, a_shift, b, b_shift)
    } else if a.len() >= b.len() * PROBE_RATIO {
        // Intersection is symmetric in shifted coordinates, so the
        // smaller set can drive from either side.
        probe_intersect(b, b_shift, a, a_shift)
    } else {
        merge_intersect(a, a_shift, b, b_shift)
    }
}

fn sorted_difference(a: &[Pos], a_shift: i64, b: &[Pos], b_shift: i64) -> Vec<Pos> {
    // Difference is directional: only the left operand may drive.
    if a.len() * PROBE_RATIO <= b.len() {
        probe_difference(a, a_shift, b, b_shift)
    } else {
        merge_difference(a, a_shift, b, b_shift)
    }
}

fn merge_intersect(a: &[Pos], a_shift: i64, b: &[Pos], b_shift: i64) -> Vec<Pos> {
    let mut out = Vec::new();
    let (mut p, mut q) = (0, 0);
    while p < a.len() && q < b.len() {
        let av = norm(a[p], a_shift);
        let bv = norm(b[q], b_shift);
        if av < bv {
            p += 1;
        } else if bv < av {
            q += 1;
        } else {
            if av >= 0 {
                out.push(av as Pos);
            }
            p += 1;
            q += 1;
        }
    }
    out
}

fn probe_intersect(driver: &[Pos], d_shift: i64, haystack: &[Pos], h_shift: i64) -> Vec<Pos> {
    let mut out = Vec::new();
    for &x in driver {
        let v = norm(x, d_shift);
        if v < 0 {
            continue;
        }
        if let Ok(target) = Pos::try_from(v + h_shift) {
            if haystack.binary_search(&target).is_ok() {
                out.push(v as Pos);
            }
        }
    }
    out
}

fn merge_difference(a: &[Pos], a_shift: i64, b: &[Pos], b_shift: i64) -> Vec<Pos> {
    let mut out = Vec::new();
    let (mut p, mut q) = (0, 0);
    while p < a.len() && q < b.len() {
        let av = norm(a[p], a_shift);
        let bv = norm(b[q], b_shift);
        if av < bv {
            if av >= 0 {
                out.push(av as Pos);
            }
            p += 1;
        } else if bv < av {
            q += 1;
        } else {
            p += 1;
            q += 1;
        }
    }
    for &x in &a[p..] {
        let av = norm(x, a_shift);
        if av >= 0 {
            out.push(av as Pos);
        }
    }
    out
}

fn probe_difference(a: &[Pos], a_shift: i64, b: &[Pos], b_shift: i64) -> Vec<Pos> {
    let mut out = Vec::new();
    for &x in a {
        let v = norm(x, a_shift);
        if v < 0 {
            continue;
        }
        let in_b = match Pos::try_from(v + b_shift) {
            Ok(target) => b.binary_search(&target).is_ok(),
            Err(_) => false,
        };
        if !in_b {
            out.push(v as Pos);
        }
    }
    out
}

fn dense_intersect(a: &DenseInterval, b: &DenseInterval) -> DenseInterval {
    DenseInterval::new(a.first.max(b.first), a.last.min(b.last))
}

fn dense_difference<'a>(a: &DenseInterval, b: &DenseInterval) -> SetRepr<'a> {
    if a.is_empty() || b.is_empty() || b.last < a.first || b.first > a.last {
        return SetRepr::Dense(*a);
    }
    if b.first <= a.first && b.last >= a.last {
        return SetRepr::Dense(DenseInterval::EMPTY);
    }
    if b.first <= a.first {
        return SetRepr::Dense(DenseInterval::new(b.last + 1, a.last));
    }
    if b.last >= a.last {
        return SetRepr::Dense(DenseInterval::new(a.first, b.first - 1));
    }
    // b lies strictly inside a: two surviving runs
    let mut out: Vec<Pos> = (a.first..b.first).collect();
    out.extend(b.last + 1..=a.last);
    SetRepr::Owned(out)
}

/// Elements of the sorted set that fall inside the interval.
fn range_select(d: &DenseInterval, x: &[Pos], shift: i64) -> Vec<Pos> {
    let mut out = Vec::new();
    if d.is_empty() {
        return out;
    }
    for &e in x {
        let v = norm(e, shift);
        if v < d.first as i64 {
            continue;
        }
        if v > d.last as i64 {
            break;
        }
        out.push(v as Pos);
    }
    out
}

/// Integers of the interval absent from the sorted set.
fn dense_minus_sorted(d: &DenseInterval, x: &[Pos], shift: i64) -> Vec<Pos> {
    let mut out = Vec::new();
    if d.is_empty() {
        return out;
    }
    let mut p = d.first as i64;
    let mut q = 0;
    while p <= d.last as i64 && q < x.len() {
        let v = norm(x[q], shift);
        if p < v {
            out.push(p as Pos);
            p += 1;
        } else if p > v {
            q += 1;
        } else {
            p += 1;
            q += 1;
        }
    }
    while p <= d.last as i64 {
        out.push(p as Pos);
        p += 1;
    }
    out
}

/// Elements of the sorted set outside the interval.
fn sorted_minus_dense(x: &[Pos], shift: i64, d: &DenseInterval) -> Vec<Pos> {
    let mut out = Vec::new();
    for &e in x {
        let v = norm(e, shift);
        if v < 0 {
            continue;
        }
        if d.is_empty() || v < d.first as i64 || v > d.last as i64 {
            out.push(v as Pos);
        }
    }
    out
}
