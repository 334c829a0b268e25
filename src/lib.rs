#![warn(clippy::pedantic)]
#![expect(clippy::module_name_repetitions)]
#![expect(clippy::must_use_candidate)]
#![expect(clippy::return_self_not_must_use)]
#![expect(clippy::missing_panics_doc)]
#![expect(clippy::missing_errors_doc)]

pub mod error;
pub mod numbers;
pub mod sym_expr;
pub mod sympify;
