//! Property checks for the array helpers (proptest).
//!
//! Naive reference scans stand in for the numpy behaviour: first index wins,
//! comparisons are strict, `w = 0` is never generated for the identity checks.

use nalgebra::{Matrix3, Vector2};
use ndarray::{Array2, ArrayD, Dimension, IxDyn};
use npkit::prelude::*;
use npkit::{argmin_in_shape, unravel_index};
use proptest::prelude::*;

fn points(max: usize) -> impl Strategy<Value = Vec<Vector2<f64>>> {
    prop::collection::vec((-1e3..1e3f64, -1e3..1e3f64), 0..max)
        .prop_map(|v| v.into_iter().map(|(x, y)| Vector2::new(x, y)).collect())
}

fn matrix3() -> impl Strategy<Value = Matrix3<f64>> {
    prop::array::uniform9(-10.0..10.0f64).prop_map(|a| Matrix3::from_row_slice(&a))
}

fn naive_first<T: PartialEq>(v: &[T], target: &T) -> Option<usize> {
    let mut i = 0;
    while i < v.len() {
        if v[i] == *target {
            return Some(i);
        }
        i += 1;
    }
    None
}

proptest! {
    #[test]
    fn identity_transform_keeps_points(x in points(64)) {
        let y = perspective_multiply(&Matrix3::identity(), &x);
        prop_assert_eq!(y.len(), x.len());
        for (a, b) in x.iter().zip(&y) {
            prop_assert!((a - b).norm() <= 1e-12 * (1.0 + a.norm()));
        }
    }

    #[test]
    fn transform_preserves_row_count(m in matrix3(), x in points(64)) {
        let y = perspective_multiply(&m, &x);
        prop_assert_eq!(y.len(), x.len());

        let x_arr = Array2::from_shape_fn((x.len(), 2), |(i, j)| x[i][j]);
        let m_arr = Array2::from_shape_fn((3, 3), |(i, j)| m[(i, j)]);
        let y_arr = perspective_multiply_array(m_arr.view(), x_arr.view()).unwrap();
        prop_assert_eq!(y_arr.dim(), (x.len(), 2));
    }

    #[test]
    fn scaling_whole_matrix_is_invisible(
        m in matrix3(),
        x in points(32),
        s in prop::sample::select(vec![0.125, 0.5, 2.0, 8.0]),
    ) {
        // projective transforms are defined up to scale; powers of two scale exactly
        let a = perspective_multiply(&m, &x);
        let b = perspective_multiply(&(m * s), &x);
        for (p, q) in a.iter().zip(&b) {
            if p.iter().all(|c| c.is_finite()) {
                prop_assert!((p - q).norm() <= 1e-12 * (1.0 + p.norm()));
            }
        }
    }

    #[test]
    fn transform_is_repeatable(m in matrix3(), x in points(32)) {
        let a = perspective_multiply(&m, &x);
        let b = perspective_multiply(&m, &x);
        for (p, q) in a.iter().zip(&b) {
            // bitwise equal, NaN included
            prop_assert_eq!(p.x.to_bits(), q.x.to_bits());
            prop_assert_eq!(p.y.to_bits(), q.y.to_bits());
        }
    }

    #[test]
    fn first_true_and_false_match_naive_scan(v in prop::collection::vec(any::<bool>(), 0..64)) {
        prop_assert_eq!(find_first_true(&v), naive_first(&v, &true));
        prop_assert_eq!(find_first_false(&v), naive_first(&v, &false));
        if let Some(i) = find_first_true(&v) {
            prop_assert!(v[i]);
            prop_assert!(v[..i].iter().all(|b| !b));
        }
    }

    #[test]
    fn search_and_extremum_are_repeatable(
        v in prop::collection::vec(any::<bool>(), 0..64),
        rows in 1usize..5,
        fill in prop::collection::vec(-50.0..50.0f64, 20),
    ) {
        prop_assert_eq!(find_first_true(&v), find_first_true(&v));
        prop_assert_eq!(find_first_false(&v), find_first_false(&v));
        let a = Array2::from_shape_vec((rows, 4), fill[..rows * 4].to_vec()).unwrap();
        prop_assert_eq!(nd_argmin(&a), nd_argmin(&a));
        prop_assert_eq!(nd_argmax(&a), nd_argmax(&a));
        let data = a.as_slice().unwrap();
        prop_assert_eq!(argmin_in_shape(data, &[rows, 4]), argmin_in_shape(data, &[rows, 4]));
    }

    #[test]
    fn argmin_argmax_match_flat_scan(
        rows in 1usize..6,
        cols in 1usize..6,
        seed in prop::collection::vec(-5i32..5, 36),
    ) {
        let data: Vec<i32> = seed[..rows * cols].to_vec();
        let a = Array2::from_shape_vec((rows, cols), data.clone()).unwrap();
        let min = *data.iter().min().unwrap();
        let max = *data.iter().max().unwrap();
        let (i, j) = nd_argmin(&a).unwrap();
        prop_assert_eq!(i * cols + j, naive_first(&data, &min).unwrap());
        let (i, j) = nd_argmax(&a).unwrap();
        prop_assert_eq!(i * cols + j, naive_first(&data, &max).unwrap());
        prop_assert_eq!(argmin_in_shape(&data, &[rows, cols]).unwrap(), vec![
            naive_first(&data, &min).unwrap() / cols,
            naive_first(&data, &min).unwrap() % cols,
        ]);
    }

    #[test]
    fn dynamic_rank_agrees_with_unravel(
        shape in prop::collection::vec(1usize..4, 1..5),
        fill in prop::collection::vec(-100.0..100.0f64, 256),
    ) {
        let len: usize = shape.iter().product();
        let data = fill[..len].to_vec();
        let a = ArrayD::from_shape_vec(IxDyn(&shape), data.clone()).unwrap();
        let flat = data
            .iter()
            .enumerate()
            .fold(0, |best, (k, v)| if *v > data[best] { k } else { best });
        let got = nd_argmax(&a).unwrap();
        let want = unravel_index(flat, &shape).unwrap();
        prop_assert_eq!(got.slice(), want.as_slice());
    }
}

#[test]
fn documented_examples() {
    assert_eq!(find_first_true(&[false, false, true, true]), Some(2));
    assert_eq!(find_first_true(&[false, false, false]), None);
    assert_eq!(find_first_false(&[true, true, false, true]), Some(2));
    assert_eq!(find_first_false(&[true, true, true]), None);
    assert_eq!(find_first_true(&[] as &[bool]), None);
    assert_eq!(find_first_false(&[] as &[bool]), None);

    let a = ndarray::array![3, 1, 4, 1, 5];
    assert_eq!(nd_argmin(&a), Ok(1));
    assert_eq!(nd_argmax(&a), Ok(4));
    let b = ndarray::array![[9, 2], [2, 7]];
    assert_eq!(nd_argmin(&b), Ok((0, 1)));
}

#[test]
fn errors_are_std_errors() {
    fn takes_error(_: &dyn std::error::Error) {}
    let m = Array2::<f64>::eye(3);
    let bad = Array2::<f64>::zeros((2, 3));
    let err = perspective_multiply_array(m.view(), bad.view()).unwrap_err();
    takes_error(&err);
    assert!(matches!(err, ArrayError::Shape { what: "x", .. }));
}
