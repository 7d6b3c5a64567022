//! Pipeline step trait.

/// One step of a pipeline, turning `In` into [`Transform::To`].
///
/// Every `Fn(In) -> Out` is a step, so closures and plain functions can be
/// mixed with named step structs that carry their own settings.
///
/// # Example
///
/// ```
/// use pathpipe::pipeline::{Pipeline, Transform};
///
/// struct Scale(i32);
///
/// impl Transform<i32> for Scale {
///     type To = i32;
///
///     fn transform(&self, input: i32) -> i32 {
///         input * self.0
///     }
/// }
///
/// let out = Pipeline::new(2)
///     .pipe(Scale(10))
///     .pipe(|x: i32| x + 1)
///     .into_inner();
/// assert_eq!(out, 21);
/// ```
pub trait Transform<In> {
    type To;

    fn transform(&self, input: In) -> Self::To;
}

impl<F, In, Out> Transform<In> for F
where
    F: Fn(In) -> Out,
{
    type To = Out;

    #[inline]
    fn transform(&self, input: In) -> Out {
        self(input)
    }
}
