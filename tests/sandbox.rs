/*
    The sandbox
*/

use num_bigint::BigInt;
use rounder::{decimal::*, *};

fn round_all<N: Number>(x: &N) -> Vec<N> {
    RoundingMode::ALL.iter().map(|rm| round_number(x, *rm)).collect()
}

fn to_integers<N: Number>(x: &N) -> Vec<RoundingResult<BigInt>> {
    let ctx = RoundingContext::default();
    RoundingMode::ALL
        .iter()
        .map(|rm| ctx.rounding_mode(*rm))
        .map(|ctx| x.round_to_integer(&ctx))
        .collect()
}

#[test]
fn sandbox() {
    let a = round_all(&-2.5f64);
    let b = round_all(&Decimal::new(true, 25u32, -1));
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(&b) {
        assert!(Decimal::from(*x as i64).numerically_eq(y));
    }

    assert_eq!(to_integers(&-2.5f32), to_integers(&Decimal::new(true, 250u32, -2)));
}
