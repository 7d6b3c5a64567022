//! Left-to-right function pipelines.
//!
//! Every form here applies steps in the order they are written:
//! `compose(f, g, h)(x)` is `h(g(f(x)))`.
//!
//! | Item          | Steps                     | Types               |
//! |---------------|---------------------------|---------------------|
//! | [`compose`]   | runtime list              | `T -> T`            |
//! | [`Chain`]     | runtime list, owned       | `T -> T`            |
//! | [`compose!`]  | written out at call site  | `A -> B -> ... -> Z`|
//! | [`Then`]      | two at a time             | `A -> B -> C`       |
//! | [`Pipeline`]  | applied to a value now    | any                 |
//!
//! `compose!` and `Pipeline` take any [`Transform`]: a function, a closure,
//! or a struct holding step settings.
//!
//! [`compose!`]: crate::compose

mod chain;
mod compose;
mod transform;

pub use chain::Chain;
pub use compose::{Then, compose, identity};
pub use transform::Transform;

// =============================================================================
// Pipeline
// =============================================================================

/// A value threaded through steps as they are written.
///
/// # Example
///
/// ```
/// use pathpipe::pipeline::Pipeline;
///
/// let total = Pipeline::new(3)
///     .pipe(|x: i32| x + 1)
///     .pipe(|x: i32| x * 2)
///     .into_inner();
/// assert_eq!(total, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pipeline<T>(T);

impl<T> Pipeline<T> {
    #[inline]
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// Apply one step.
    #[inline]
    pub fn pipe<X: Transform<T>>(self, step: X) -> Pipeline<X::To> {
        Pipeline(step.transform(self.0))
    }

    /// Observe the current value without changing it.
    #[inline]
    pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
        f(&self.0);
        self
    }

    /// Observe the current value when `cond` holds.
    #[inline]
    pub fn inspect_if(self, cond: bool, f: impl FnOnce(&T)) -> Self {
        if cond {
            f(&self.0);
        }
        self
    }

    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}
