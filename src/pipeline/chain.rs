//! Owned, growable list of same-typed steps.

use std::fmt;

type Step<T> = Box<dyn Fn(T) -> T + Send + Sync>;

/// An ordered list of `T -> T` steps, built up at runtime.
///
/// Applying an empty chain returns the argument unchanged.
///
/// # Example
///
/// ```
/// use pathpipe::pipeline::Chain;
///
/// let chain = Chain::new().then(|x: i32| x + 1).then(|x| x * 2);
/// assert_eq!(chain.apply(3), 8);
/// assert_eq!(Chain::<i32>::new().apply(3), 3);
/// ```
pub struct Chain<T> {
    steps: Vec<Step<T>>,
}

impl<T> Chain<T> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step (builder style).
    pub fn then(mut self, step: impl Fn(T) -> T + Send + Sync + 'static) -> Self {
        self.push(step);
        self
    }

    /// Append a step in place.
    pub fn push(&mut self, step: impl Fn(T) -> T + Send + Sync + 'static) {
        self.steps.push(Box::new(step));
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Thread `arg` through every step in order.
    pub fn apply(&self, arg: T) -> T {
        self.steps.iter().fold(arg, |composed, step| step(composed))
    }

    /// Turn the chain into a plain function.
    pub fn into_fn(self) -> impl Fn(T) -> T {
        move |arg| self.apply(arg)
    }
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Chain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("steps", &self.steps.len())
            .finish()
    }
}

impl<T> FromIterator<Step<T>> for Chain<T> {
    fn from_iter<I: IntoIterator<Item = Step<T>>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<Step<T>> for Chain<T> {
    fn extend<I: IntoIterator<Item = Step<T>>>(&mut self, iter: I) {
        self.steps.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_left_to_right() {
        let chain = Chain::new().then(|x: i32| x + 1).then(|x: i32| x * 2);
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.apply(3), 8);
    }

    #[test]
    fn test_chain_empty_is_identity() {
        let chain = Chain::<String>::new();
        assert!(chain.is_empty());
        assert_eq!(chain.apply("x".to_string()), "x");
    }

    #[test]
    fn test_chain_push() {
        let mut chain = Chain::default();
        chain.push(|s: String| s + "a");
        chain.push(|s: String| s + "b");
        assert_eq!(chain.apply(String::new()), "ab");
    }

    #[test]
    fn test_chain_from_iter() {
        let steps: Vec<Step<i32>> = vec![Box::new(|x: i32| x - 1), Box::new(|x: i32| x * 10)];
        let chain: Chain<i32> = steps.into_iter().collect();
        assert_eq!(chain.apply(4), 30);
    }

    #[test]
    fn test_chain_extend() {
        let mut chain = Chain::new().then(|x: u8| x + 1);
        chain.extend([Box::new(|x: u8| x * 3) as Step<u8>]);
        assert_eq!(chain.apply(1), 6);
    }

    #[test]
    fn test_chain_into_fn() {
        let f = Chain::new().then(|x: i32| x * x).into_fn();
        assert_eq!(f(7), 49);
        assert_eq!(f(-2), 4);
    }

    #[test]
    fn test_chain_debug() {
        let chain = Chain::new().then(|x: i32| x);
        assert_eq!(format!("{chain:?}"), "Chain { steps: 1 }");
    }
}
