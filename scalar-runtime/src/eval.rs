//! Checked evaluation of catalogue calls

use serde::{Deserialize, Serialize};

use crate::error::{EvalError, Result};
use crate::execute::{check_operands, dispatch};
use crate::fatal::Diagnostic;
use crate::primitive::Primitive;
use crate::value::Scalar;

/// What to do when a division-family call receives a zero divisor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ZeroDivisionPolicy {
    /// Return `EvalError::DivisionByZero`
    #[default]
    Error,
    /// Report through the fatal reporter and exit the process
    Fatal { exit_code: i32 },
}

/// Evaluator configuration
#[derive(Debug, Clone)]
pub struct EvalConfig {
    /// Zero divisor handling
    pub division_by_zero: ZeroDivisionPolicy,

    /// Log every successful call at trace level
    pub trace_calls: bool,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            division_by_zero: ZeroDivisionPolicy::Error,
            trace_calls: false,
        }
    }
}

/// Applies primitives to tagged operands, enforcing arity, operand types
/// and the divisor precondition before handing off to `scalar-ops`.
#[derive(Debug, Default)]
pub struct Evaluator {
    config: EvalConfig,

    /// Successful applications so far
    calls: u64,
}

impl Evaluator {
    pub fn new(config: EvalConfig) -> Self {
        Self { config, calls: 0 }
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Number of calls that produced a result
    pub fn calls(&self) -> u64 {
        self.calls
    }

    /// Resolve `name` in the catalogue and apply it
    pub fn call(&mut self, name: &str, args: &[Scalar]) -> Result<Scalar> {
        let primitive: Primitive = name.parse().map_err(|err| {
            tracing::debug!("rejected call to {:?}: {}", name, err);
            EvalError::from(err)
        })?;
        self.apply(primitive, args)
    }

    pub fn apply(&mut self, primitive: Primitive, args: &[Scalar]) -> Result<Scalar> {
        if let Err(err) = check_operands(primitive, args) {
            tracing::debug!("rejected call to {}: {}", primitive, err);
            return Err(err);
        }

        if primitive.is_division() && args.get(1).map_or(false, Scalar::is_int_zero) {
            let err = EvalError::DivisionByZero {
                primitive: primitive.name(),
            };
            tracing::debug!("rejected call to {}: {}", primitive, err);
            if let ZeroDivisionPolicy::Fatal { exit_code } = self.config.division_by_zero {
                Diagnostic::new(exit_code, err.to_string()).report();
            }
            return Err(err);
        }

        let result = dispatch(primitive, args)?;
        self.calls += 1;

        if self.config.trace_calls {
            tracing::trace!(primitive = %primitive, ?args, %result, "call");
        }

        Ok(result)
    }
}

/// Apply a primitive with the default configuration
pub fn apply(primitive: Primitive, args: &[Scalar]) -> Result<Scalar> {
    Evaluator::default().apply(primitive, args)
}

/// Resolve a primitive by name and apply it with the default configuration
pub fn call(name: &str, args: &[Scalar]) -> Result<Scalar> {
    Evaluator::default().call(name, args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ScalarType;
    use scalar_ops::ParseError;

    #[test]
    fn test_eval_config_default() {
        let config = EvalConfig::default();
        assert_eq!(config.division_by_zero, ZeroDivisionPolicy::Error);
        assert!(!config.trace_calls);
    }

    #[test]
    fn test_call_by_name() {
        let mut eval = Evaluator::default();
        assert_eq!(
            eval.call("add8", &[Scalar::I8(120), Scalar::I8(10)]).unwrap(),
            Scalar::I8(-126)
        );
        assert_eq!(
            eval.call("sdiv32", &[Scalar::I32(-7), Scalar::I32(2)]).unwrap(),
            Scalar::I32(-4)
        );
        assert_eq!(eval.calls(), 2);
    }

    #[test]
    fn test_unknown_primitive() {
        let mut eval = Evaluator::default();
        let err = eval.call("div8", &[Scalar::I8(1), Scalar::I8(1)]).unwrap_err();
        assert!(matches!(
            err,
            EvalError::Parse(ParseError::UnknownPrimitive(ref name)) if name == "div8"
        ));
        assert_eq!(eval.calls(), 0);
    }

    #[test]
    fn test_arity_mismatch() {
        let err = call("sqrt64", &[Scalar::F64(1.0), Scalar::F64(2.0)]).unwrap_err();
        assert!(matches!(
            err,
            EvalError::ArityMismatch { expected: 1, found: 2, .. }
        ));
    }

    #[test]
    fn test_type_mismatch() {
        let err = call("add32", &[Scalar::I32(1), Scalar::I64(1)]).unwrap_err();
        match err {
            EvalError::TypeMismatch {
                index,
                expected,
                found,
                ..
            } => {
                assert_eq!(index, 1);
                assert_eq!(expected, ScalarType::I32);
                assert_eq!(found, ScalarType::I64);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_division_by_zero_is_an_error() {
        let mut eval = Evaluator::default();
        for name in ["squot8", "srem16", "sdiv32", "smod64", "udiv8", "umod32"] {
            let prim: Primitive = name.parse().unwrap();
            let zero = Scalar::parse(prim.signature().params[1], "0").unwrap();
            let one = Scalar::parse(prim.signature().params[0], "1").unwrap();
            let err = eval.apply(prim, &[one, zero]).unwrap_err();
            assert!(matches!(err, EvalError::DivisionByZero { .. }), "{}", name);
        }
        assert_eq!(eval.calls(), 0);
    }

    #[test]
    fn test_zero_dividend_is_fine() {
        assert_eq!(
            call("smod8", &[Scalar::I8(0), Scalar::I8(-3)]).unwrap(),
            Scalar::I8(0)
        );
    }

    #[test]
    fn test_min_over_minus_one_wraps() {
        assert_eq!(
            call("squot8", &[Scalar::I8(i8::MIN), Scalar::I8(-1)]).unwrap(),
            Scalar::I8(i8::MIN)
        );
        assert_eq!(
            call("sdiv64", &[Scalar::I64(i64::MIN), Scalar::I64(-1)]).unwrap(),
            Scalar::I64(i64::MIN)
        );
        assert_eq!(
            call("srem32", &[Scalar::I32(i32::MIN), Scalar::I32(-1)]).unwrap(),
            Scalar::I32(0)
        );
    }

    #[test]
    fn test_free_apply() {
        let prim: Primitive = "fptosi_f64_i8".parse().unwrap();
        assert_eq!(apply(prim, &[Scalar::F64(130.9)]).unwrap(), Scalar::I8(-126));
    }

    #[test]
    fn test_trace_calls_does_not_change_results() {
        let mut eval = Evaluator::new(EvalConfig {
            trace_calls: true,
            ..EvalConfig::default()
        });
        assert_eq!(
            eval.call("zext_i8_i64", &[Scalar::I8(-1)]).unwrap(),
            Scalar::I64(255)
        );
        assert!(eval.config().trace_calls);
    }
}
