//! Function composition, applied left to right.

/// Compose a runtime list of same-typed steps into one function.
///
/// The argument is folded through `fns` in order, each output becoming the
/// next input. An empty list gives the identity function.
///
/// # Example
///
/// ```
/// use pathpipe::pipeline::compose;
///
/// fn add1(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// let both = compose([add1 as fn(i32) -> i32, double]);
/// assert_eq!(both(3), 8);
/// ```
pub fn compose<T, F, I>(fns: I) -> impl Fn(T) -> T
where
    F: Fn(T) -> T,
    I: IntoIterator<Item = F>,
{
    let fns: Vec<F> = fns.into_iter().collect();
    move |arg| fns.iter().fold(arg, |composed, f| f(composed))
}

/// Return the argument unchanged.
#[inline]
pub fn identity<T>(arg: T) -> T {
    arg
}

/// Compose steps of different types, left to right.
///
/// `compose!(f, g, h)` is a closure computing `h(g(f(x)))`. Each step is any
/// [`Transform`](crate::pipeline::Transform), so functions, closures and
/// named step structs mix freely. Adjacent steps must agree on types; a
/// mismatch is a compile error. `compose!()` is the identity function.
///
/// Step expressions are evaluated on every call, so curried builders such
/// as `prepend_zero(Field::Hours)` can be written inline.
///
/// # Example
///
/// ```
/// use pathpipe::compose;
///
/// let describe = compose!(
///     |n: u32| n * 3,
///     |n: u32| n.to_string(),
///     |s: String| format!("<{s}>"),
/// );
/// assert_eq!(describe(4), "<12>");
/// ```
#[macro_export]
macro_rules! compose {
    () => {
        $crate::pipeline::identity
    };
    ($($step:expr),+ $(,)?) => {
        move |arg| {
            $( let arg = $crate::pipeline::Transform::transform(&$step, arg); )+
            arg
        }
    };
}

/// Two-step composition as a method on any function.
///
/// # Example
///
/// ```
/// use pathpipe::pipeline::Then;
///
/// fn add1(x: i32) -> i32 { x + 1 }
///
/// let f = add1.then(|x: i32| x * 2).then(|x: i32| x.to_string());
/// assert_eq!(f(3), "8");
/// ```
pub trait Then<A, B>: Fn(A) -> B + Sized {
    fn then<C, G>(self, next: G) -> impl Fn(A) -> C
    where
        G: Fn(B) -> C,
    {
        move |arg| next(self(arg))
    }
}

impl<A, B, F> Then<A, B> for F where F: Fn(A) -> B {}
