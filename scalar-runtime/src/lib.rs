//! # Scalar Runtime
//!
//! Dynamic access to the scalar catalogue: primitives addressed by name,
//! operands carried as tagged values, and fatal reporting for the conditions
//! generated code cannot recover from.
//!
//! ## Features
//!
//! - **Named primitives**: every catalogue entry (`add8`, `sext_i8_i64`, `log2_32`)
//!   as a [`Primitive`] value with its signature
//! - **Checked evaluation**: arity, operand types and the divisor precondition
//!   are enforced before dispatch
//! - **Fatal reporting**: `<program>: <message>` on stderr, then exit
//!
//! ## Example
//!
//! ```rust
//! use scalar_runtime::{Evaluator, EvalConfig, Scalar};
//!
//! let mut eval = Evaluator::new(EvalConfig::default());
//! let q = eval.call("sdiv32", &[Scalar::I32(-7), Scalar::I32(2)]).unwrap();
//! assert_eq!(q, Scalar::I32(-4));
//! ```

pub mod error;
pub mod value;
pub mod primitive;
mod execute;
pub mod eval;
pub mod fatal;

pub use error::{EvalError, Result};
pub use value::{Operand, Scalar, ScalarType};
pub use primitive::{Primitive, Signature};
pub use eval::{apply, call, EvalConfig, Evaluator, ZeroDivisionPolicy};
pub use fatal::{ensure, ensure_msg, Diagnostic};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_exports() {
        let _ = EvalConfig::default();
        let _ = ZeroDivisionPolicy::Fatal { exit_code: 1 };
        let _ = Diagnostic::new(1, "x");
        let _ = ScalarType::Bool;
    }

    #[test]
    fn test_call_helper() {
        let result = call("pow32", &[Scalar::I32(2), Scalar::I32(10)]);
        assert_eq!(result.unwrap(), Scalar::I32(1024));
    }

    #[test]
    fn test_apply_helper() {
        let prim: Primitive = "fpconv_f64_f32".parse().unwrap();
        assert_eq!(apply(prim, &[Scalar::F64(0.5)]).unwrap(), Scalar::F32(0.5));
    }

    #[test]
    fn test_eval_error_reexport() {
        let err = EvalError::DivisionByZero {
            primitive: "udiv64".to_string(),
        };
        assert_eq!(err.to_string(), "Division by zero in udiv64");
    }

    #[test]
    fn test_fatal_macro_type_checks() {
        // Never invoked: `fatal!` diverges.
        fn _unreachable_path(code: i32) -> ! {
            crate::fatal!(code, "bad operand {}", 3)
        }
    }
}
