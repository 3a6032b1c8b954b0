//! Cross-module interaction tests
//!
//! The runtime evaluator and the width-named catalogue must agree on every
//! operand, since both are thin layers over the same generic families.

use proptest::prelude::*;
use scalar_ops::catalogue::*;
use scalar_runtime::{call, Scalar};

fn int_call_i32(name: &str, x: i32, y: i32) -> i32 {
    match call(name, &[Scalar::I32(x), Scalar::I32(y)]) {
        Ok(Scalar::I32(v)) => v,
        other => panic!("{name}: {other:?}"),
    }
}

fn int_call_i64(name: &str, x: i64, y: i64) -> i64 {
    match call(name, &[Scalar::I64(x), Scalar::I64(y)]) {
        Ok(Scalar::I64(v)) => v,
        other => panic!("{name}: {other:?}"),
    }
}

// ============================================================================
// Runtime -> Catalogue agreement
// ============================================================================

proptest! {
    #[test]
    fn test_arith_agrees_32(x in any::<i32>(), y in any::<i32>()) {
        prop_assert_eq!(int_call_i32("add32", x, y), add32(x, y));
        prop_assert_eq!(int_call_i32("sub32", x, y), sub32(x, y));
        prop_assert_eq!(int_call_i32("mul32", x, y), mul32(x, y));
        prop_assert_eq!(int_call_i32("xor32", x, y), xor32(x, y));
        prop_assert_eq!(int_call_i32("shl32", x, y), shl32(x, y));
        prop_assert_eq!(int_call_i32("lshr32", x, y), lshr32(x, y));
    }

    #[test]
    fn test_division_agrees_64(x in any::<i64>(), y in any::<i64>().prop_filter("nonzero", |y| *y != 0)) {
        prop_assert_eq!(int_call_i64("squot64", x, y), squot64(x, y));
        prop_assert_eq!(int_call_i64("srem64", x, y), srem64(x, y));
        prop_assert_eq!(int_call_i64("sdiv64", x, y), sdiv64(x, y));
        prop_assert_eq!(int_call_i64("smod64", x, y), smod64(x, y));
        prop_assert_eq!(int_call_i64("udiv64", x, y), udiv64(x, y));
        prop_assert_eq!(int_call_i64("umod64", x, y), umod64(x, y));
    }

    #[test]
    fn test_comparisons_agree_16(x in any::<i16>(), y in any::<i16>()) {
        let args = [Scalar::I16(x), Scalar::I16(y)];
        prop_assert_eq!(call("slt16", &args).unwrap(), Scalar::Bool(slt16(x, y)));
        prop_assert_eq!(call("ule16", &args).unwrap(), Scalar::Bool(ule16(x, y)));
        prop_assert_eq!(call("umax16", &args).unwrap(), Scalar::I16(umax16(x, y)));
    }

    #[test]
    fn test_conversions_agree(x in any::<i32>(), f in -1.0e12f64..1.0e12) {
        prop_assert_eq!(call("sext_i32_i8", &[Scalar::I32(x)]).unwrap(), Scalar::I8(sext_i32_i8(x)));
        prop_assert_eq!(call("zext_i32_i64", &[Scalar::I32(x)]).unwrap(), Scalar::I64(zext_i32_i64(x)));
        prop_assert_eq!(call("uitofp_i32_f64", &[Scalar::I32(x)]).unwrap(), Scalar::F64(uitofp_i32_f64(x)));
        prop_assert_eq!(call("fptosi_f64_i16", &[Scalar::F64(f)]).unwrap(), Scalar::I16(fptosi_f64_i16(f)));
        prop_assert_eq!(call("fptoui_f64_i32", &[Scalar::F64(f)]).unwrap(), Scalar::I32(fptoui_f64_i32(f)));
    }

    #[test]
    fn test_bit_casts_agree(bits in any::<i64>()) {
        let via_runtime = call("from_bits64", &[Scalar::I64(bits)]).unwrap();
        prop_assert!(via_runtime.bit_eq(&Scalar::F64(from_bits64(bits))));
        prop_assert_eq!(call("to_bits64", &[via_runtime]).unwrap(), Scalar::I64(bits));
    }
}

// ============================================================================
// Catalogue edge cases through the runtime
// ============================================================================

#[test]
fn test_min_over_minus_one() {
    assert_eq!(int_call_i32("squot32", i32::MIN, -1), i32::MIN);
    assert_eq!(int_call_i32("srem32", i32::MIN, -1), 0);
    assert_eq!(int_call_i32("sdiv32", i32::MIN, -1), sdiv32(i32::MIN, -1));
    assert_eq!(int_call_i32("smod32", i32::MIN, -1), 0);
}

#[test]
fn test_float_wrappers_agree() {
    for x in [0.25f64, 1.0, 2.5, 10.0, 1.0e6] {
        assert_eq!(call("log64", &[Scalar::F64(x)]).unwrap(), Scalar::F64(log64(x)));
        assert_eq!(call("sqrt64", &[Scalar::F64(x)]).unwrap(), Scalar::F64(sqrt64(x)));
        assert_eq!(call("round64", &[Scalar::F64(x)]).unwrap(), Scalar::F64(round64(x)));
    }
    assert_eq!(
        call("fpow32", &[Scalar::F32(2.0), Scalar::F32(3.0)]).unwrap(),
        Scalar::F32(fpow32(2.0, 3.0))
    );
}
