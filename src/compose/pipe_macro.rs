//! The `pipe!` macro for left-to-right application.

/// Pipes a value through a series of transformers from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))`: the value flows
/// through the stages in the order they are written.
///
/// # Syntax
///
/// - `pipe!(x)` - returns `x` unchanged
/// - `pipe!(x, f)` - returns `f(x)`
/// - `pipe!(x, f, g, ...)` - returns `...g(f(x))`
///
/// # Type Requirements
///
/// Each stage only needs to implement [`FnOnce`], since each stage is
/// called exactly once. Stages that consume their captured environment,
/// like the one-shot transformers in this crate, work unmodified.
///
/// # Examples
///
/// ```
/// use pipework::{eager, lazy, pipe, seq};
///
/// let result = pipe!(
///     seq![1, 2, 3, 4, 5],
///     lazy::filter(|n: &i32, _| n % 2 == 1),
///     lazy::map(|n: i32| n * n),
///     lazy::collect,
/// );
/// assert_eq!(result, seq! { 0 => 1, 2 => 9, 4 => 25 });
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };

    ($value:expr, $stage:expr $(,)?) => {
        $stage($value)
    };

    ($value:expr, $stage:expr, $($remaining:expr),+ $(,)?) => {
        $crate::pipe!($stage($value), $($remaining),+)
    };
}
