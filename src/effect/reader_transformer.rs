//! `ReaderT` - adds an environment to any kind.
//!
//! `ReaderT<R, M>` wraps a function `R -> M`. Its token
//! [`ReaderTLambda<F>`] passes every slot to the inner kind unchanged:
//!
//! ```text
//! Kind<ReaderTLambda<F>, S, R, W, E, A> = ReaderT<R, Kind<F, S, R, W, E, A>>
//! ```
//!
//! Each instance is written once against the inner token, so `ReaderT` over
//! `Sync`, `Option` or another transformer gets `Functor`, `Apply`,
//! `Flattenable`, `Alt`, `Bifunctor` and the embedding classes whenever the
//! inner kind has them. Running the outer function only builds the inner
//! effect; sequencing and evaluation order are the inner kind's.
//!
//! # Examples
//!
//! ```rust
//! use kindred::effect::{OptionLambda, ReaderT, reader_transformer};
//!
//! let halve: ReaderT<i32, Option<i32>> = reader_transformer::asks_effect::<OptionLambda, (), i32, (), (), i32, _>(
//!     |n: i32| if n % 2 == 0 { Some(n / 2) } else { None },
//! );
//! let plus_one = reader_transformer::map::<OptionLambda, (), i32, (), (), i32, i32, _>(halve, |n| n + 1);
//! assert_eq!(plus_one.run(10), Some(6));
//! assert_eq!(plus_one.run(7), None);
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use super::from_reader::FromReader;
use super::from_sync::FromSync;
use super::reader::Reader;
use super::sync::Sync;
use crate::control::Either;
use crate::typeclass::{
    Alt, Apply, Arrow, Bifunctor, Contravariant, Flattenable, FromEither, Functor, Kind, Plus,
    Pointed, Slot, TypeLambda,
};

/// A function from an environment `R` to an inner effect `M`.
pub struct ReaderT<R, M> {
    run_function: Rc<dyn Fn(R) -> M>,
}

impl<R, M> Clone for ReaderT<R, M> {
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<R, M> fmt::Debug for ReaderT<R, M> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("ReaderT(<function>)")
    }
}

impl<R: 'static, M: 'static> ReaderT<R, M> {
    /// Wraps a function from the environment to the inner effect.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(R) -> M + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Builds the inner effect for `environment`.
    #[inline]
    pub fn run(&self, environment: R) -> M {
        (self.run_function)(environment)
    }
}

/// Kind token for [`ReaderT`] over the inner token `F`.
pub struct ReaderTLambda<F>(PhantomData<F>);

impl<F: TypeLambda> TypeLambda for ReaderTLambda<F> {
    type Kind<S, R, W, E, A> = ReaderT<R, Kind<F, S, R, W, E, A>>;
}

impl<F: Functor> Functor for ReaderTLambda<F> {
    fn map<S, R, W, E, A, B, Func>(
        fa: ReaderT<R, Kind<F, S, R, W, E, A>>,
        function: Func,
    ) -> ReaderT<R, Kind<F, S, R, W, E, B>>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
        B: Slot,
        Func: Fn(A) -> B + 'static,
    {
        let function = Rc::new(function);
        ReaderT::new(move |environment| {
            let function = Rc::clone(&function);
            F::map::<S, R, W, E, A, B, _>(fa.run(environment), move |value| function(value))
        })
    }
}

impl<F: Pointed> Pointed for ReaderTLambda<F> {
    fn succeed<S, R, W, E, A>(value: A) -> ReaderT<R, Kind<F, S, R, W, E, A>>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
    {
        ReaderT::new(move |_| F::succeed::<S, R, W, E, A>(value.clone()))
    }
}

impl<F: Apply> Apply for ReaderTLambda<F> {
    fn ap<S, R, W, E, A, B>(
        fab: ReaderT<R, Kind<F, S, R, W, E, Arrow<A, B>>>,
        fa: ReaderT<R, Kind<F, S, R, W, E, A>>,
    ) -> ReaderT<R, Kind<F, S, R, W, E, B>>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
        B: Slot,
    {
        ReaderT::new(move |environment: R| {
            let function = fab.run(environment.clone());
            F::ap::<S, R, W, E, A, B>(function, fa.run(environment))
        })
    }
}

impl<F: Flattenable> Flattenable for ReaderTLambda<F> {
    fn flat_map<S, R, W, E, A, B, Func>(
        fa: ReaderT<R, Kind<F, S, R, W, E, A>>,
        function: Func,
    ) -> ReaderT<R, Kind<F, S, R, W, E, B>>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
        B: Slot,
        Func: Fn(A) -> ReaderT<R, Kind<F, S, R, W, E, B>> + 'static,
    {
        let function = Rc::new(function);
        ReaderT::new(move |environment: R| {
            let function = Rc::clone(&function);
            let continuation_environment = environment.clone();
            F::flat_map::<S, R, W, E, A, B, _>(fa.run(environment), move |value| {
                function(value).run(continuation_environment.clone())
            })
        })
    }
}

/// The outer environment is narrowed by `function`; the inner kind is
/// contramapped with the same function.
impl<F: Contravariant> Contravariant for ReaderTLambda<F> {
    fn contramap<S, R, W, E, A, R2, Func>(
        fa: ReaderT<R, Kind<F, S, R, W, E, A>>,
        function: Func,
    ) -> ReaderT<R2, Kind<F, S, R2, W, E, A>>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
        R2: Slot,
        Func: Fn(R2) -> R + 'static,
    {
        let function = Rc::new(function);
        ReaderT::new(move |environment: R2| {
            let narrowed = function(environment);
            let function = Rc::clone(&function);
            F::contramap::<S, R, W, E, A, R2, _>(fa.run(narrowed), move |wider| function(wider))
        })
    }
}

impl<F: Bifunctor> Bifunctor for ReaderTLambda<F> {
    fn map_both<S, R, W, E, A, E2, B, FE, FA>(
        fea: ReaderT<R, Kind<F, S, R, W, E, A>>,
        on_error: FE,
        on_value: FA,
    ) -> ReaderT<R, Kind<F, S, R, W, E2, B>>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
        E2: Slot,
        B: Slot,
        FE: Fn(E) -> E2 + 'static,
        FA: Fn(A) -> B + 'static,
    {
        let on_error = Rc::new(on_error);
        let on_value = Rc::new(on_value);
        ReaderT::new(move |environment| {
            let on_error = Rc::clone(&on_error);
            let on_value = Rc::clone(&on_value);
            F::map_both::<S, R, W, E, A, E2, B, _, _>(
                fea.run(environment),
                move |error| on_error(error),
                move |value| on_value(value),
            )
        })
    }
}

impl<F: Alt> Alt for ReaderTLambda<F> {
    fn alt<S, R, W, E, A, Second>(
        first: ReaderT<R, Kind<F, S, R, W, E, A>>,
        second: Second,
    ) -> ReaderT<R, Kind<F, S, R, W, E, A>>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
        Second: Fn() -> ReaderT<R, Kind<F, S, R, W, E, A>> + 'static,
    {
        let second = Rc::new(second);
        ReaderT::new(move |environment: R| {
            let second = Rc::clone(&second);
            let fallback_environment = environment.clone();
            F::alt::<S, R, W, E, A, _>(first.run(environment), move || {
                second().run(fallback_environment.clone())
            })
        })
    }
}

impl<F: Plus> Plus for ReaderTLambda<F> {
    fn zero<S, R, W, E, A>() -> ReaderT<R, Kind<F, S, R, W, E, A>>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
    {
        ReaderT::new(|_| F::zero::<S, R, W, E, A>())
    }
}

impl<F: FromEither> FromEither for ReaderTLambda<F> {
    fn from_either<S, R, W, E, A>(either: Either<E, A>) -> ReaderT<R, Kind<F, S, R, W, E, A>>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
    {
        ReaderT::new(move |_| F::from_either::<S, R, W, E, A>(either.clone()))
    }
}

impl<F: FromSync> FromSync for ReaderTLambda<F> {
    fn from_sync<S, R, W, E, A>(sync: Sync<A>) -> ReaderT<R, Kind<F, S, R, W, E, A>>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
    {
        ReaderT::new(move |_| F::from_sync::<S, R, W, E, A>(sync.clone()))
    }
}

impl<F: Pointed> FromReader for ReaderTLambda<F> {
    fn from_reader<S, R, W, E, A>(reader: Reader<R, A>) -> ReaderT<R, Kind<F, S, R, W, E, A>>
    where
        S: Slot,
        R: Slot,
        W: Slot,
        E: Slot,
        A: Slot,
    {
        ReaderT::new(move |environment| F::succeed::<S, R, W, E, A>(reader.run(environment)))
    }
}

/// Lifts a plain value, ignoring the environment.
pub fn succeed<F, S, R, W, E, A>(value: A) -> ReaderT<R, Kind<F, S, R, W, E, A>>
where
    F: Pointed,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
{
    ReaderTLambda::<F>::succeed::<S, R, W, E, A>(value)
}

/// Runs `reader` and lifts its result into the inner kind.
pub fn from_reader<F, S, R, W, E, A>(reader: Reader<R, A>) -> ReaderT<R, Kind<F, S, R, W, E, A>>
where
    F: Pointed,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
{
    ReaderTLambda::<F>::from_reader::<S, R, W, E, A>(reader)
}

/// Lifts an inner effect that does not need the environment.
pub fn lift<F, S, R, W, E, A>(fa: Kind<F, S, R, W, E, A>) -> ReaderT<R, Kind<F, S, R, W, E, A>>
where
    F: TypeLambda,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
    Kind<F, S, R, W, E, A>: Slot,
{
    ReaderT::new(move |_| fa.clone())
}

/// Builds the inner effect from the environment.
pub fn asks_effect<F, S, R, W, E, A, Func>(function: Func) -> ReaderT<R, Kind<F, S, R, W, E, A>>
where
    F: TypeLambda,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
    Func: Fn(R) -> Kind<F, S, R, W, E, A> + 'static,
{
    ReaderT::new(function)
}

/// Maps the value of the inner effect.
pub fn map<F, S, R, W, E, A, B, Func>(
    fa: ReaderT<R, Kind<F, S, R, W, E, A>>,
    function: Func,
) -> ReaderT<R, Kind<F, S, R, W, E, B>>
where
    F: Functor,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
    B: Slot,
    Func: Fn(A) -> B + 'static,
{
    ReaderTLambda::<F>::map::<S, R, W, E, A, B, Func>(fa, function)
}

/// Applies a wrapped function; both sides see the same environment.
pub fn ap<F, S, R, W, E, A, B>(
    fab: ReaderT<R, Kind<F, S, R, W, E, Arrow<A, B>>>,
    fa: ReaderT<R, Kind<F, S, R, W, E, A>>,
) -> ReaderT<R, Kind<F, S, R, W, E, B>>
where
    F: Apply,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
    B: Slot,
{
    ReaderTLambda::<F>::ap::<S, R, W, E, A, B>(fab, fa)
}

/// Sequences through the inner kind; both steps see the same environment.
pub fn flat_map<F, S, R, W, E, A, B, Func>(
    fa: ReaderT<R, Kind<F, S, R, W, E, A>>,
    function: Func,
) -> ReaderT<R, Kind<F, S, R, W, E, B>>
where
    F: Flattenable,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
    B: Slot,
    Func: Fn(A) -> ReaderT<R, Kind<F, S, R, W, E, B>> + 'static,
{
    ReaderTLambda::<F>::flat_map::<S, R, W, E, A, B, Func>(fa, function)
}

/// Runs `fa` in an environment derived from a wider one.
pub fn local<F, S, R, W, E, A, R2, Func>(
    fa: ReaderT<R, Kind<F, S, R, W, E, A>>,
    function: Func,
) -> ReaderT<R2, Kind<F, S, R2, W, E, A>>
where
    F: Contravariant,
    S: Slot,
    R: Slot,
    W: Slot,
    E: Slot,
    A: Slot,
    R2: Slot,
    Func: Fn(R2) -> R + 'static,
{
    ReaderTLambda::<F>::contramap::<S, R, W, E, A, R2, Func>(fa, function)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::{OptionLambda, SyncLambda};
    use rstest::rstest;

    type ReaderOption = ReaderTLambda<OptionLambda>;

    #[rstest]
    #[case(4, Some(3))]
    #[case(5, None)]
    fn flat_map_threads_environment_and_short_circuits(#[case] environment: i32, #[case] expected: Option<i32>) {
        let even = asks_effect::<OptionLambda, (), i32, (), (), i32, _>(|n: i32| (n % 2 == 0).then_some(n));
        let chained = flat_map::<OptionLambda, (), i32, (), (), i32, i32, _>(even, |half_of| {
            asks_effect::<OptionLambda, (), i32, (), (), i32, _>(move |n: i32| Some(n - half_of / 4))
        });
        assert_eq!(chained.run(environment), expected);
    }

    #[rstest]
    fn lift_ignores_environment() {
        let lifted = lift::<OptionLambda, (), String, (), (), i32>(Some(7));
        assert_eq!(lifted.run("anything".to_string()), Some(7));
    }

    #[rstest]
    fn from_reader_reads_then_succeeds() {
        let length = from_reader::<OptionLambda, (), String, (), (), usize>(Reader::new(|text: String| text.len()));
        assert_eq!(length.run("four".to_string()), Some(4));
    }

    #[rstest]
    fn local_narrows_environment() {
        let doubled = asks_effect::<OptionLambda, (), i32, (), (), i32, _>(|n: i32| Some(n * 2));
        let from_text = local::<OptionLambda, (), i32, (), (), i32, String, _>(doubled, |text: String| text.len() as i32);
        assert_eq!(from_text.run("abc".to_string()), Some(6));
    }

    #[rstest]
    fn alt_reruns_fallback_in_same_environment() {
        let missing = ReaderOption::zero::<(), i32, (), (), i32>();
        let recovered = ReaderOption::alt::<(), i32, (), (), i32, _>(missing, || {
            asks_effect::<OptionLambda, (), i32, (), (), i32, _>(|n: i32| Some(n + 100))
        });
        assert_eq!(recovered.run(1), Some(101));
    }

    #[rstest]
    fn inner_sync_is_not_run_by_outer_run() {
        let counter = Rc::new(std::cell::Cell::new(0));
        let effect = {
            let counter = Rc::clone(&counter);
            asks_effect::<SyncLambda, (), i32, (), (), i32, _>(move |n: i32| {
                let counter = Rc::clone(&counter);
                Sync::new(move || {
                    counter.set(counter.get() + 1);
                    n
                })
            })
        };
        let built = effect.run(3);
        assert_eq!(counter.get(), 0);
        assert_eq!(built.run(), 3);
        assert_eq!(counter.get(), 1);
    }
}
