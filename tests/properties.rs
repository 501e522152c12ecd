//! Randomized checks of algebraic identities, over every size the
//! containers are meant for.

#[macro_use] extern crate smallmat_assert_close;

use rand::Rng;
use smallmat::{Complex, Mat, Vector};
use smallmat::{dot, cross, cross_mat, cross_mat_sq, det, cofactor_det, inverse, lapack_inverse};

type C64 = Complex<f64>;

// Diagonally dominant, so the condition number stays small.
fn well_conditioned<R: Rng, const N: usize>(rng: &mut R) -> Mat<N, N> {
    Mat::from_fn(|r, c| {
        let x: f64 = rng.gen_range(-1.0..1.0);
        if r == c { x + 2.0 * N as f64 } else { x }
    })
}

fn complex_vector<R: Rng, const N: usize>(rng: &mut R) -> Vector<N, C64> {
    Vector::from_fn(|_| Complex::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
}

fn integer_vector<R: Rng>(rng: &mut R) -> Vector<3> {
    Vector::from_fn(|_| rng.gen_range(-10i32..=10) as f64)
}

fn check_inverse<R: Rng, const N: usize>(rng: &mut R) {
    let m = well_conditioned::<_, N>(rng);
    let inv = inverse(&m).unwrap();
    assert_close!(abs=1e-12, (inv * m).0, Mat::<N, N>::eye().0);
    assert_close!(abs=1e-12, (m * inv).0, Mat::<N, N>::eye().0);
    assert_close!(abs=1e-12, lapack_inverse(&m).unwrap().0, inv.0);
}

#[test]
fn inverse_is_inverse() {
    let mut rng = rand::thread_rng();
    for _ in 0..20 {
        check_inverse::<_, 1>(&mut rng);
        check_inverse::<_, 2>(&mut rng);
        check_inverse::<_, 3>(&mut rng);
        check_inverse::<_, 4>(&mut rng);
        check_inverse::<_, 5>(&mut rng);
        check_inverse::<_, 6>(&mut rng);
    }
}

fn check_dot<R: Rng, const N: usize>(rng: &mut R) {
    let v = complex_vector::<_, N>(rng);
    let w = complex_vector::<_, N>(rng);
    let expected: C64 = v.iter().zip(w.iter()).map(|(a, b)| a.conj() * b).sum();
    assert_close!(abs=1e-13, dot(v, w), expected);
    assert_close!(abs=1e-13, dot(v.t(), w), expected);

    let norm = dot(v, v);
    assert_eq!(norm.im, 0.0);
    assert!(norm.re >= 0.0);

    let (v, w) = (v.map(|x| x.re), w.map(|x| x.im));
    let expected: f64 = v.iter().zip(w.iter()).map(|(a, b)| a * b).sum();
    assert_close!(abs=1e-13, dot(v, w), expected);
    assert!(dot(v, v) >= 0.0);
}

#[test]
fn dot_is_conjugated_sum() {
    let mut rng = rand::thread_rng();
    for _ in 0..20 {
        check_dot::<_, 1>(&mut rng);
        check_dot::<_, 2>(&mut rng);
        check_dot::<_, 3>(&mut rng);
        check_dot::<_, 4>(&mut rng);
        check_dot::<_, 5>(&mut rng);
        check_dot::<_, 6>(&mut rng);
    }
}

#[test]
fn cross_identities() {
    let mut rng = rand::thread_rng();
    for _ in 0..50 {
        let a = integer_vector(&mut rng);
        let b = integer_vector(&mut rng);
        assert_eq!(cross(a, b), -cross(b, a));
        assert_eq!(cross(a, a), Vector([0.0; 3]));
        assert_eq!(cross_mat(a) * b, cross(a, b));
        assert_eq!(cross_mat(a.t()) * b, a % b);
        assert_eq!(dot(a, cross(a, b)), 0.0);
    }
}

#[test]
fn cross_mat_sq_is_double_cross() {
    let mut rng = rand::thread_rng();
    for _ in 0..50 {
        let v = Vector::<3>::from_fn(|_| rng.gen_range(-3.0..3.0));
        let w = Vector::<3>::from_fn(|_| rng.gen_range(-3.0..3.0));
        assert_close!(abs=1e-12, (cross_mat_sq(v) * w).0, (-(v % (v % w))).0);
        assert_close!(abs=1e-12, cross_mat_sq(v).to_mat().0, (-(cross_mat(v) * cross_mat(v))).0);
    }
}

#[test]
fn determinant_closed_forms() {
    let mut rng = rand::thread_rng();
    for _ in 0..50 {
        let m2 = Mat::<2, 2>::from_fn(|_, _| rng.gen_range(-10.0..10.0));
        let m3 = Mat::<3, 3>::from_fn(|_, _| rng.gen_range(-10.0..10.0));
        assert_eq!(det(&m2), cofactor_det(&m2));
        assert_eq!(det(&m3), cofactor_det(&m3));

        // and the inverse agrees with the determinant
        let m4 = well_conditioned::<_, 4>(&mut rng);
        assert_close!(rel=1e-10, det(&inverse(&m4).unwrap()), 1.0 / det(&m4));
    }
}

#[test]
fn singular_matrices() {
    let mut rng = rand::thread_rng();
    for _ in 0..10 {
        let row = [rng.gen_range(-1.0f64..1.0), rng.gen_range(-1.0f64..1.0)];
        assert!(inverse(&Mat([row, row])).is_err());

        let m = Mat::<3, 3>::from_fn(|r, _| if r == 1 { 0.0 } else { rng.gen_range(-1.0..1.0) });
        assert!(inverse(&m).is_err());

        let m = Mat::<5, 5>::from_fn(|r, c| if r == 2 { 0.0 } else { rng.gen_range(-1.0..1.0) + (r == c) as u8 as f64 });
        assert!(inverse(&m).is_err());
        assert!(lapack_inverse(&m).is_err());
    }
}
