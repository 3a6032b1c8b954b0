//! Integration tests for named evaluation

use scalar_runtime::primitive::{IntBinaryOp, IntConvertOp};
use scalar_runtime::{call, Diagnostic, EvalConfig, EvalError, Evaluator, Primitive, Scalar, ScalarType};
use scalar_ops::IntWidth;

fn eval(name: &str, args: &[Scalar]) -> Scalar {
    call(name, args).unwrap_or_else(|err| panic!("{name}: {err}"))
}

#[test]
fn test_wraparound_examples() {
    assert_eq!(eval("add8", &[Scalar::I8(120), Scalar::I8(10)]), Scalar::I8(-126));
    assert_eq!(eval("sub16", &[Scalar::I16(i16::MIN), Scalar::I16(1)]), Scalar::I16(i16::MAX));
    assert_eq!(
        eval("mul32", &[Scalar::I32(0x10000), Scalar::I32(0x10000)]),
        Scalar::I32(0)
    );
}

#[test]
fn test_division_examples() {
    let cases = [
        ("squot32", -7, 2, -3),
        ("srem32", -7, 2, -1),
        ("sdiv32", -7, 2, -4),
        ("smod32", -7, 2, 1),
        ("sdiv32", 7, -2, -4),
        ("smod32", 7, -2, -1),
    ];
    for (name, x, y, expected) in cases {
        assert_eq!(eval(name, &[Scalar::I32(x), Scalar::I32(y)]), Scalar::I32(expected), "{name}({x}, {y})");
    }
}

#[test]
fn test_unsigned_examples() {
    assert_eq!(eval("udiv8", &[Scalar::I8(-1), Scalar::I8(16)]), Scalar::I8(15));
    assert_eq!(eval("umod8", &[Scalar::I8(-1), Scalar::I8(16)]), Scalar::I8(15));
    assert_eq!(eval("umin32", &[Scalar::I32(-1), Scalar::I32(3)]), Scalar::I32(3));
    assert_eq!(eval("usignum64", &[Scalar::I64(-5)]), Scalar::I64(1));
}

#[test]
fn test_extension_examples() {
    assert_eq!(eval("sext_i8_i32", &[Scalar::I8(-1)]), Scalar::I32(-1));
    assert_eq!(eval("zext_i8_i32", &[Scalar::I8(-1)]), Scalar::I32(255));
    assert_eq!(eval("sext_i64_i8", &[Scalar::I64(0x1FF)]), Scalar::I8(-1));
    assert_eq!(eval("zext_i16_i16", &[Scalar::I16(-2)]), Scalar::I16(-2));
}

#[test]
fn test_float_conversion_examples() {
    assert_eq!(eval("fptosi_f64_i8", &[Scalar::F64(130.9)]), Scalar::I8(-126));
    assert_eq!(eval("fptosi_f32_i32", &[Scalar::F32(-2.9)]), Scalar::I32(-2));
    assert_eq!(eval("uitofp_i16_f64", &[Scalar::I16(-1)]), Scalar::F64(65535.0));
    assert_eq!(eval("sitofp_i16_f64", &[Scalar::I16(-1)]), Scalar::F64(-1.0));
    assert_eq!(eval("to_bits64", &[Scalar::F64(1.0)]), Scalar::I64(0x3FF0_0000_0000_0000));
}

#[test]
fn test_nan_survives_bit_round_trip() {
    let quiet = f32::from_bits(0x7FC0_0001);
    let bits = eval("to_bits32", &[Scalar::F32(quiet)]);
    assert_eq!(bits, Scalar::I32(0x7FC0_0001));
    let back = eval("from_bits32", &[bits]);
    assert!(back.bit_eq(&Scalar::F32(quiet)));
}

#[test]
fn test_constructed_primitives_match_names() {
    let prim = Primitive::IntBinary {
        op: IntBinaryOp::Smod,
        width: IntWidth::W16,
    };
    let by_value = Evaluator::default().apply(prim, &[Scalar::I16(-7), Scalar::I16(3)]).unwrap();
    let by_name = eval("smod16", &[Scalar::I16(-7), Scalar::I16(3)]);
    assert_eq!(by_value, by_name);

    let prim = Primitive::IntConvert {
        op: IntConvertOp::Zext,
        from: IntWidth::W32,
        to: IntWidth::W64,
    };
    assert_eq!(prim.name(), "zext_i32_i64");
}

#[test]
fn test_rejections_leave_counter_untouched() {
    let mut evaluator = Evaluator::new(EvalConfig::default());
    assert!(evaluator.call("sdiv8", &[Scalar::I8(1), Scalar::I8(0)]).is_err());
    assert!(evaluator.call("sdiv8", &[Scalar::I8(1)]).is_err());
    assert!(evaluator.call("sdiv8", &[Scalar::I8(1), Scalar::F32(1.0)]).is_err());
    assert!(evaluator.call("sdiv7", &[]).is_err());
    assert_eq!(evaluator.calls(), 0);

    evaluator.call("sdiv8", &[Scalar::I8(1), Scalar::I8(1)]).unwrap();
    assert_eq!(evaluator.calls(), 1);
}

#[test]
fn test_error_diagnostics() {
    let err = call("umod32", &[Scalar::I32(9), Scalar::I32(0)]).unwrap_err();
    let diag = Diagnostic::from(&err);
    assert_eq!(diag.exit_code, 1);
    assert!(diag.to_string().ends_with(": Division by zero in umod32"));

    let err = call("llt", &[Scalar::I8(0), Scalar::Bool(true)]).unwrap_err();
    assert!(matches!(
        err,
        EvalError::TypeMismatch { index: 0, expected: ScalarType::Bool, found: ScalarType::I8, .. }
    ));
    assert_eq!(Diagnostic::from(&err).exit_code, 2);
}

#[test]
fn test_every_signature_result_type_is_honoured() {
    let mut evaluator = Evaluator::default();
    for prim in Primitive::all() {
        let sig = prim.signature();
        let args: Vec<Scalar> = sig
            .params
            .iter()
            .map(|&ty| Scalar::parse(ty, if ty == ScalarType::Bool { "true" } else { "3" }).unwrap())
            .collect();
        let result = evaluator.apply(prim, &args).unwrap();
        assert_eq!(result.ty(), sig.result, "{prim}");
    }
    assert_eq!(evaluator.calls(), Primitive::all().len() as u64);
}
