//! Tests for the mass-ratio and scoring stages of the MOF pipeline.

use float_cmp::approx_eq;
use mof::{mass_ratio, scoring, Euclidean, MofError, PointSet};
use rand::prelude::*;

/// The five-point set used throughout the MOF literature.
fn five_points() -> Vec<Vec<f64>> {
    vec![
        vec![906.0, 892.0],
        vec![870.0, 323.0],
        vec![433.0, 480.0],
        vec![602.0, 695.0],
        vec![569.0, 849.0],
    ]
}

/// Uniformly random points in `[-100, 100]^d`, reproducible by seed.
fn random_points(cardinality: usize, dimensionality: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..cardinality)
        .map(|_| (0..dimensionality).map(|_| rng.gen_range(-100.0..100.0)).collect())
        .collect()
}

#[test]
fn mass_ratio_reciprocity() -> Result<(), MofError> {
    let data = PointSet::new(random_points(40, 4, 3))?;
    let matrix: Vec<Vec<f64>> = mass_ratio::matrix(&data, &Euclidean);

    for (i, row) in matrix.iter().enumerate() {
        assert!(approx_eq!(f64, row[i], 1.0, ulps = 2));
        for (j, &r) in row.iter().enumerate() {
            assert!(r > 0.0);
            assert!(approx_eq!(f64, r * matrix[j][i], 1.0, ulps = 2));
        }
    }

    Ok(())
}

#[test]
fn mass_ratio_from_neighborhoods() {
    // nbh = [[1, 3], [2, 1]] -> mr[0][1] = 3 / 2, mr[1][0] = 2 / 3.
    let neighborhoods = vec![vec![1, 3], vec![2, 1]];
    let matrix: Vec<Vec<f64>> = mass_ratio::from_neighborhoods(&neighborhoods);
    assert_eq!(matrix, vec![vec![1.0, 1.5], vec![2.0 / 3.0, 1.0]]);

    let parallel: Vec<Vec<f64>> = mass_ratio::par_from_neighborhoods(&neighborhoods);
    assert_eq!(matrix, parallel);
}

#[test]
fn coincident_points_have_unit_ratio() -> Result<(), MofError> {
    let data = PointSet::new(vec![vec![0.0_f64, 0.0], vec![0.0, 0.0], vec![5.0, 5.0]])?;
    let matrix: Vec<Vec<f64>> = mass_ratio::matrix(&data, &Euclidean);
    assert_eq!(matrix[0][1], 1.0);
    assert_eq!(matrix[1][0], 1.0);
    Ok(())
}

#[test]
fn five_point_scores() -> Result<(), MofError> {
    let expected = [
        0.046_875,
        0.380_208_333_333_333_3,
        0.084_635_416_666_666_66,
        0.045_885_416_666_666_665,
        0.022_135_416_666_666_668,
    ];

    let data = PointSet::new(five_points())?;
    let scores: Vec<f64> = scoring::mof(&data, &Euclidean)?;

    assert_eq!(scores.len(), 5);
    for (&score, &e) in scores.iter().zip(expected.iter()) {
        assert!(approx_eq!(f64, score, e, epsilon = 1e-12));
    }

    Ok(())
}

#[test]
fn scores_are_non_negative_and_deterministic() -> Result<(), MofError> {
    let data = PointSet::new(random_points(60, 6, 17))?;

    let scores: Vec<f64> = scoring::mof(&data, &Euclidean)?;
    assert!(scores.iter().all(|&s| s >= 0.0));

    // Bit-identical across repeated runs and across the parallel version.
    assert_eq!(scores, scoring::mof::<_, f64, _>(&data, &Euclidean)?);
    assert_eq!(scores, scoring::par_mof::<_, f64, _>(&data, &Euclidean)?);

    Ok(())
}

#[test]
fn far_point_scores_highest() -> Result<(), MofError> {
    let data = PointSet::new(vec![
        vec![0.0_f64, 0.0],
        vec![1.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 1.0],
        vec![0.5, 0.5],
        vec![100.0, 100.0],
    ])?;
    let scores: Vec<f64> = scoring::mof(&data, &Euclidean)?;

    let top = scores
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(i, _)| i);
    assert_eq!(top, Some(5));

    // The centroid of the cluster has the most symmetric density context.
    let bottom = scores
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(i, _)| i);
    assert_eq!(bottom, Some(4));

    Ok(())
}

#[test]
fn two_points_score_zero() -> Result<(), MofError> {
    let data = PointSet::new(vec![vec![0.0_f64], vec![9.0]])?;
    let scores: Vec<f64> = scoring::mof(&data, &Euclidean)?;
    assert_eq!(scores, vec![0.0, 0.0]);
    Ok(())
}

#[test]
fn single_point_is_insufficient() -> Result<(), MofError> {
    let data = PointSet::new(vec![vec![1.0_f64, 2.0]])?;
    let scores: Result<Vec<f64>, _> = scoring::mof(&data, &Euclidean);
    assert_eq!(scores.err(), Some(MofError::InsufficientPoints { found: 1 }));
    Ok(())
}

#[test]
fn malformed_matrix_is_rejected() {
    let matrix = vec![vec![1.0_f64, f64::NAN], vec![f64::NAN, 1.0]];
    let scores = scoring::from_mass_ratios(&matrix);
    assert_eq!(scores.err(), Some(MofError::NonFiniteResult { index: 0 }));
}
