//! Common test utilities
#![allow(dead_code)]

use std::str::FromStr;

use bigdecimal::BigDecimal;
use decimat::prelude::*;

/// Parse a decimal literal
pub fn dec(s: &str) -> BigDecimal {
    BigDecimal::from_str(s).unwrap()
}

/// Build a dense matrix from string rows
pub fn dense(rows: &[&[&str]]) -> DenseMatrix {
    DenseMatrix::from_rows(
        rows.iter()
            .map(|row| row.iter().map(|v| dec(v)).collect())
            .collect(),
    )
    .unwrap()
}

/// Build a sparse matrix from a default and `(row, column, value)` triplets
pub fn sparse(
    rows: usize,
    columns: usize,
    default_value: &str,
    entries: &[(usize, usize, &str)],
) -> SparseMatrix {
    SparseMatrix::from_entries(
        rows,
        columns,
        dec(default_value),
        entries.iter().map(|&(r, c, v)| (r, c, dec(v))),
    )
    .unwrap()
}

/// Assert two matrices hold the same values cell by cell
pub fn assert_same_values<L, R>(a: &L, b: &R, msg: &str)
where
    L: BigMatrix + ?Sized,
    R: BigMatrix + ?Sized,
{
    assert_eq!(a.shape(), b.shape(), "{}: shape mismatch", msg);
    for row in 0..a.rows() {
        for column in 0..a.columns() {
            assert_eq!(
                a.get(row, column),
                b.get(row, column),
                "{}: cell ({}, {}) differs",
                msg,
                row,
                column
            );
        }
    }
}

/// A deterministic dense matrix with small integer and fractional values
pub fn sample_dense(rows: usize, columns: usize, seed: i64) -> DenseMatrix {
    DenseMatrix::from_fn(rows, columns, |r, c| {
        let n = (r as i64 * 31 + c as i64 * 17 + seed * 7) % 23 - 11;
        BigDecimal::new(n.into(), (c % 3) as i64)
    })
}
