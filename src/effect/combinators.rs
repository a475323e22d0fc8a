//! Stamps monomorphic wrappers of the generic combinators into an effect
//! module.
//!
//! The generic combinators need every slot spelled out. Each concrete effect
//! module invokes the macros below with its token, its four fixed slots and
//! the slots left free (`R`, `E`), and gets functions whose signatures name
//! the concrete effect type, so user code infers normally.
//!
//! The free slot names must not be `A`, `B`, `C`, `D` or `T`.

macro_rules! functor_combinators {
    ($token:ty, [$s:ty, $r:ty, $w:ty, $e:ty], [$($free:ident),*]) => {
        /// Applies `function` to the value.
        pub fn map<$($free: $crate::typeclass::Slot,)* A, B, Func>(
            fa: $crate::typeclass::Kind<$token, $s, $r, $w, $e, A>,
            function: Func,
        ) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, B>
        where
            A: $crate::typeclass::Slot,
            B: $crate::typeclass::Slot,
            Func: Fn(A) -> B + 'static,
        {
            <$token as $crate::typeclass::Functor>::map::<$s, $r, $w, $e, A, B, Func>(fa, function)
        }

        /// Applies a known argument to a wrapped function.
        pub fn flap<$($free: $crate::typeclass::Slot,)* A, B>(
            value: A,
            fab: $crate::typeclass::Kind<$token, $s, $r, $w, $e, $crate::typeclass::Arrow<A, B>>,
        ) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, B>
        where
            A: $crate::typeclass::Slot,
            B: $crate::typeclass::Slot,
        {
            $crate::typeclass::flap::<$token, $s, $r, $w, $e, A, B>(value, fab)
        }

        /// Replaces the value with a constant.
        pub fn as_<$($free: $crate::typeclass::Slot,)* A, B>(
            fa: $crate::typeclass::Kind<$token, $s, $r, $w, $e, A>,
            value: B,
        ) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, B>
        where
            A: $crate::typeclass::Slot,
            B: $crate::typeclass::Slot,
        {
            $crate::typeclass::as_::<$token, $s, $r, $w, $e, A, B>(fa, value)
        }

        /// Discards the value.
        pub fn unit<$($free: $crate::typeclass::Slot,)* A>(
            fa: $crate::typeclass::Kind<$token, $s, $r, $w, $e, A>,
        ) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, ()>
        where
            A: $crate::typeclass::Slot,
        {
            $crate::typeclass::unit::<$token, $s, $r, $w, $e, A>(fa)
        }

        /// Seeds a do-notation scope with one binding.
        pub fn bind_to<$($free: $crate::typeclass::Slot,)* A>(
            fa: $crate::typeclass::Kind<$token, $s, $r, $w, $e, A>,
        ) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, (A,)>
        where
            A: $crate::typeclass::Slot,
        {
            $crate::typeclass::bind_to::<$token, $s, $r, $w, $e, A>(fa)
        }

        /// Wraps the value in a one-element tuple.
        pub fn tupled<$($free: $crate::typeclass::Slot,)* A>(
            fa: $crate::typeclass::Kind<$token, $s, $r, $w, $e, A>,
        ) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, (A,)>
        where
            A: $crate::typeclass::Slot,
        {
            $crate::typeclass::tupled::<$token, $s, $r, $w, $e, A>(fa)
        }

        /// Appends a pure value computed from the scope.
        pub fn let_<$($free: $crate::typeclass::Slot,)* T, B, Func>(
            fa: $crate::typeclass::Kind<$token, $s, $r, $w, $e, T>,
            function: Func,
        ) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, <T as $crate::typeclass::Append<B>>::Output>
        where
            T: $crate::typeclass::Slot + $crate::typeclass::Append<B>,
            B: $crate::typeclass::Slot,
            <T as $crate::typeclass::Append<B>>::Output: $crate::typeclass::Slot,
            Func: Fn(&T) -> B + 'static,
        {
            $crate::typeclass::let_::<$token, $s, $r, $w, $e, T, B, Func>(fa, function)
        }
    };
}

macro_rules! pointed_combinators {
    ($token:ty, [$s:ty, $r:ty, $w:ty, $e:ty], [$($free:ident),*]) => {
        /// Lifts a plain value.
        pub fn succeed<$($free: $crate::typeclass::Slot,)* A>(
            value: A,
        ) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, A>
        where
            A: $crate::typeclass::Slot,
        {
            <$token as $crate::typeclass::Pointed>::succeed::<$s, $r, $w, $e, A>(value)
        }

        /// The empty do-notation scope.
        pub fn do_<$($free: $crate::typeclass::Slot),*>() -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, ()> {
            $crate::typeclass::do_::<$token, $s, $r, $w, $e>()
        }

        /// The seed of tuple sequencing.
        pub fn zip<$($free: $crate::typeclass::Slot),*>() -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, ()> {
            $crate::typeclass::zip::<$token, $s, $r, $w, $e>()
        }

        /// The identity Kleisli arrow.
        pub fn id_kleisli<$($free: $crate::typeclass::Slot,)* A>(
        ) -> impl Fn(A) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, A>
        where
            A: $crate::typeclass::Slot,
        {
            $crate::typeclass::id_kleisli::<$token, $s, $r, $w, $e, A>()
        }
    };
}

macro_rules! apply_combinators {
    ($token:ty, [$s:ty, $r:ty, $w:ty, $e:ty], [$($free:ident),*]) => {
        /// Applies a wrapped function to a wrapped value, function first.
        pub fn ap<$($free: $crate::typeclass::Slot,)* A, B>(
            fab: $crate::typeclass::Kind<$token, $s, $r, $w, $e, $crate::typeclass::Arrow<A, B>>,
            fa: $crate::typeclass::Kind<$token, $s, $r, $w, $e, A>,
        ) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, B>
        where
            A: $crate::typeclass::Slot,
            B: $crate::typeclass::Slot,
        {
            <$token as $crate::typeclass::Apply>::ap::<$s, $r, $w, $e, A, B>(fab, fa)
        }

        /// Combines two independent effects with a binary function.
        pub fn zip_with<$($free: $crate::typeclass::Slot,)* A, B, C, Func>(
            fa: $crate::typeclass::Kind<$token, $s, $r, $w, $e, A>,
            fb: $crate::typeclass::Kind<$token, $s, $r, $w, $e, B>,
            function: Func,
        ) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, C>
        where
            A: $crate::typeclass::Slot,
            B: $crate::typeclass::Slot,
            C: $crate::typeclass::Slot,
            Func: Fn(A, B) -> C + 'static,
        {
            $crate::typeclass::zip_with::<$token, $s, $r, $w, $e, A, B, C, Func>(fa, fb, function)
        }

        /// Lifts a binary function.
        pub fn lift2<$($free: $crate::typeclass::Slot,)* A, B, C, Func>(
            function: Func,
        ) -> impl Fn(
            $crate::typeclass::Kind<$token, $s, $r, $w, $e, A>,
            $crate::typeclass::Kind<$token, $s, $r, $w, $e, B>,
        ) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, C>
        where
            A: $crate::typeclass::Slot,
            B: $crate::typeclass::Slot,
            C: $crate::typeclass::Slot,
            Func: Fn(A, B) -> C + 'static,
        {
            $crate::typeclass::lift2::<$token, $s, $r, $w, $e, A, B, C, Func>(function)
        }

        /// Lifts a ternary function.
        pub fn lift3<$($free: $crate::typeclass::Slot,)* A, B, C, D, Func>(
            function: Func,
        ) -> impl Fn(
            $crate::typeclass::Kind<$token, $s, $r, $w, $e, A>,
            $crate::typeclass::Kind<$token, $s, $r, $w, $e, B>,
            $crate::typeclass::Kind<$token, $s, $r, $w, $e, C>,
        ) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, D>
        where
            A: $crate::typeclass::Slot,
            B: $crate::typeclass::Slot,
            C: $crate::typeclass::Slot,
            D: $crate::typeclass::Slot,
            Func: Fn(A, B, C) -> D + 'static,
        {
            $crate::typeclass::lift3::<$token, $s, $r, $w, $e, A, B, C, D, Func>(function)
        }

        /// Appends the value of an independent effect to the scope.
        pub fn bind_right<$($free: $crate::typeclass::Slot,)* T, B>(
            fa: $crate::typeclass::Kind<$token, $s, $r, $w, $e, T>,
            fb: $crate::typeclass::Kind<$token, $s, $r, $w, $e, B>,
        ) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, <T as $crate::typeclass::Append<B>>::Output>
        where
            T: $crate::typeclass::Slot + $crate::typeclass::Append<B>,
            B: $crate::typeclass::Slot,
            <T as $crate::typeclass::Append<B>>::Output: $crate::typeclass::Slot,
        {
            $crate::typeclass::bind_right::<$token, $s, $r, $w, $e, T, B>(fa, fb)
        }

        /// Appends the value of `fb` to the tuple produced by `fa`.
        pub fn zip_flatten<$($free: $crate::typeclass::Slot,)* T, B>(
            fa: $crate::typeclass::Kind<$token, $s, $r, $w, $e, T>,
            fb: $crate::typeclass::Kind<$token, $s, $r, $w, $e, B>,
        ) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, <T as $crate::typeclass::Append<B>>::Output>
        where
            T: $crate::typeclass::Slot + $crate::typeclass::Append<B>,
            B: $crate::typeclass::Slot,
            <T as $crate::typeclass::Append<B>>::Output: $crate::typeclass::Slot,
        {
            $crate::typeclass::zip_flatten::<$token, $s, $r, $w, $e, T, B>(fa, fb)
        }
    };
}

macro_rules! monad_combinators {
    ($token:ty, [$s:ty, $r:ty, $w:ty, $e:ty], [$($free:ident),*]) => {
        /// Runs `fa`, then the effect built from its value.
        pub fn flat_map<$($free: $crate::typeclass::Slot,)* A, B, Func>(
            fa: $crate::typeclass::Kind<$token, $s, $r, $w, $e, A>,
            function: Func,
        ) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, B>
        where
            A: $crate::typeclass::Slot,
            B: $crate::typeclass::Slot,
            Func: Fn(A) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, B> + 'static,
        {
            <$token as $crate::typeclass::Flattenable>::flat_map::<$s, $r, $w, $e, A, B, Func>(fa, function)
        }

        /// Extends the scope with the value of a dependent effect.
        pub fn bind<$($free: $crate::typeclass::Slot,)* T, B, Func>(
            fa: $crate::typeclass::Kind<$token, $s, $r, $w, $e, T>,
            function: Func,
        ) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, <T as $crate::typeclass::Append<B>>::Output>
        where
            T: $crate::typeclass::Slot + $crate::typeclass::Append<B>,
            B: $crate::typeclass::Slot,
            <T as $crate::typeclass::Append<B>>::Output: $crate::typeclass::Slot,
            Func: Fn(&T) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, B> + 'static,
        {
            $crate::typeclass::bind::<$token, $s, $r, $w, $e, T, B, Func>(fa, function)
        }

        /// Runs a dependent effect and keeps the original value.
        pub fn tap<$($free: $crate::typeclass::Slot,)* A, B, Func>(
            fa: $crate::typeclass::Kind<$token, $s, $r, $w, $e, A>,
            function: Func,
        ) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, A>
        where
            A: $crate::typeclass::Slot,
            B: $crate::typeclass::Slot,
            Func: Fn(A) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, B> + 'static,
        {
            $crate::typeclass::tap::<$token, $s, $r, $w, $e, A, B, Func>(fa, function)
        }

        /// Sequences two effects and keeps the first value.
        pub fn zip_left<$($free: $crate::typeclass::Slot,)* A, B>(
            first: $crate::typeclass::Kind<$token, $s, $r, $w, $e, A>,
            second: $crate::typeclass::Kind<$token, $s, $r, $w, $e, B>,
        ) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, A>
        where
            A: $crate::typeclass::Slot,
            B: $crate::typeclass::Slot,
        {
            $crate::typeclass::zip_left::<$token, $s, $r, $w, $e, A, B>(first, second)
        }

        /// Sequences two effects and keeps the second value.
        pub fn zip_right<$($free: $crate::typeclass::Slot,)* A, B>(
            first: $crate::typeclass::Kind<$token, $s, $r, $w, $e, A>,
            second: $crate::typeclass::Kind<$token, $s, $r, $w, $e, B>,
        ) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, B>
        where
            A: $crate::typeclass::Slot,
            B: $crate::typeclass::Slot,
        {
            $crate::typeclass::zip_right::<$token, $s, $r, $w, $e, A, B>(first, second)
        }

        /// Removes one level of nesting.
        pub fn flatten<$($free: $crate::typeclass::Slot,)* A>(
            ffa: $crate::typeclass::Kind<
                $token, $s, $r, $w, $e,
                $crate::typeclass::Kind<$token, $s, $r, $w, $e, A>,
            >,
        ) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, A>
        where
            A: $crate::typeclass::Slot,
        {
            $crate::typeclass::flatten::<$token, $s, $r, $w, $e, A>(ffa)
        }

        /// Composes two Kleisli arrows left to right.
        pub fn compose_kleisli<$($free: $crate::typeclass::Slot,)* A, B, C, First, Second>(
            first: First,
            second: Second,
        ) -> impl Fn(A) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, C>
        where
            A: $crate::typeclass::Slot,
            B: $crate::typeclass::Slot,
            C: $crate::typeclass::Slot,
            First: Fn(A) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, B> + 'static,
            Second: Fn(B) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, C> + 'static,
        {
            $crate::typeclass::compose_kleisli::<$token, $s, $r, $w, $e, A, B, C, First, Second>(first, second)
        }
    };
}

macro_rules! traversal_combinators {
    ($token:ty, [$s:ty, $r:ty, $w:ty, $e:ty], [$($free:ident),*]) => {
        /// Traverses a non-empty sequence with indices.
        pub fn traverse_non_empty_with_index<$($free: $crate::typeclass::Slot,)* A, B, Func>(
            items: $crate::control::NonEmptyVec<A>,
            function: Func,
        ) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, $crate::control::NonEmptyVec<B>>
        where
            B: $crate::typeclass::Slot,
            Func: FnMut(usize, A) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, B>,
        {
            $crate::typeclass::traverse_non_empty_with_index::<$token, $s, $r, $w, $e, A, B, Func>(items, function)
        }

        /// Traverses a non-empty sequence.
        pub fn traverse_non_empty<$($free: $crate::typeclass::Slot,)* A, B, Func>(
            items: $crate::control::NonEmptyVec<A>,
            function: Func,
        ) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, $crate::control::NonEmptyVec<B>>
        where
            B: $crate::typeclass::Slot,
            Func: FnMut(A) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, B>,
        {
            $crate::typeclass::traverse_non_empty::<$token, $s, $r, $w, $e, A, B, Func>(items, function)
        }

        /// Traverses a vector with indices; empty input succeeds with `vec![]`.
        pub fn traverse_vec_with_index<$($free: $crate::typeclass::Slot,)* A, B, Func>(
            items: Vec<A>,
            function: Func,
        ) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, Vec<B>>
        where
            B: $crate::typeclass::Slot,
            Func: FnMut(usize, A) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, B>,
        {
            $crate::typeclass::traverse_vec_with_index::<$token, $s, $r, $w, $e, A, B, Func>(items, function)
        }

        /// Traverses a vector; empty input succeeds with `vec![]`.
        pub fn traverse_vec<$($free: $crate::typeclass::Slot,)* A, B, Func>(
            items: Vec<A>,
            function: Func,
        ) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, Vec<B>>
        where
            B: $crate::typeclass::Slot,
            Func: FnMut(A) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, B>,
        {
            $crate::typeclass::traverse_vec::<$token, $s, $r, $w, $e, A, B, Func>(items, function)
        }

        /// Turns a vector of effects into an effect of a vector.
        pub fn sequence_vec<$($free: $crate::typeclass::Slot,)* A>(
            items: Vec<$crate::typeclass::Kind<$token, $s, $r, $w, $e, A>>,
        ) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, Vec<A>>
        where
            A: $crate::typeclass::Slot,
        {
            $crate::typeclass::sequence_vec::<$token, $s, $r, $w, $e, A>(items)
        }
    };
}

macro_rules! from_sync_combinators {
    ($token:ty, [$s:ty, $r:ty, $w:ty, $e:ty], [$($free:ident),*]) => {
        /// Embeds a `Sync`.
        pub fn from_sync<$($free: $crate::typeclass::Slot,)* A>(
            sync: $crate::effect::Sync<A>,
        ) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, A>
        where
            A: $crate::typeclass::Slot,
        {
            <$token as $crate::effect::FromSync>::from_sync::<$s, $r, $w, $e, A>(sync)
        }

        /// Emits an info event with `message` each time the effect runs.
        pub fn log<$($free: $crate::typeclass::Slot),*>(
            message: impl Into<String>,
        ) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, ()> {
            $crate::effect::log::<$token, $s, $r, $w, $e>(message)
        }

        /// Emits an error event with `message` each time the effect runs.
        pub fn log_error<$($free: $crate::typeclass::Slot),*>(
            message: impl Into<String>,
        ) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, ()> {
            $crate::effect::log_error::<$token, $s, $r, $w, $e>(message)
        }

        /// Turns a `Sync`-returning function into an effect-returning one.
        pub fn lift_sync<$($free: $crate::typeclass::Slot,)* A, B, Func>(
            function: Func,
        ) -> impl Fn(A) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, B>
        where
            B: $crate::typeclass::Slot,
            Func: Fn(A) -> $crate::effect::Sync<B>,
        {
            $crate::effect::lift_sync::<$token, $s, $r, $w, $e, A, B, Func>(function)
        }

        /// Chains a `Sync`-returning function.
        pub fn flat_map_sync<$($free: $crate::typeclass::Slot,)* A, B, Func>(
            fa: $crate::typeclass::Kind<$token, $s, $r, $w, $e, A>,
            function: Func,
        ) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, B>
        where
            A: $crate::typeclass::Slot,
            B: $crate::typeclass::Slot,
            Func: Fn(A) -> $crate::effect::Sync<B> + 'static,
        {
            $crate::effect::flat_map_sync::<$token, $s, $r, $w, $e, A, B, Func>(fa, function)
        }
    };
}

macro_rules! from_reader_combinators {
    ($token:ty, [$s:ty, $r:ty, $w:ty, $e:ty], [$($free:ident),*]) => {
        /// Embeds a `Reader`.
        pub fn from_reader<$($free: $crate::typeclass::Slot,)* A>(
            reader: $crate::effect::Reader<$r, A>,
        ) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, A>
        where
            A: $crate::typeclass::Slot,
        {
            <$token as $crate::effect::FromReader>::from_reader::<$s, $r, $w, $e, A>(reader)
        }

        /// Reads the whole environment.
        pub fn ask<$($free: $crate::typeclass::Slot),*>() -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, $r> {
            $crate::effect::ask::<$token, $s, $r, $w, $e>()
        }

        /// Reads a value computed from the environment.
        pub fn asks<$($free: $crate::typeclass::Slot,)* A, Func>(
            function: Func,
        ) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, A>
        where
            A: $crate::typeclass::Slot,
            Func: Fn($r) -> A + 'static,
        {
            $crate::effect::asks::<$token, $s, $r, $w, $e, A, Func>(function)
        }

        /// Turns a `Reader`-returning function into an effect-returning one.
        pub fn lift_reader<$($free: $crate::typeclass::Slot,)* A, B, Func>(
            function: Func,
        ) -> impl Fn(A) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, B>
        where
            B: $crate::typeclass::Slot,
            Func: Fn(A) -> $crate::effect::Reader<$r, B>,
        {
            $crate::effect::lift_reader::<$token, $s, $r, $w, $e, A, B, Func>(function)
        }

        /// Chains a `Reader`-returning function.
        pub fn flat_map_reader<$($free: $crate::typeclass::Slot,)* A, B, Func>(
            fa: $crate::typeclass::Kind<$token, $s, $r, $w, $e, A>,
            function: Func,
        ) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, B>
        where
            A: $crate::typeclass::Slot,
            B: $crate::typeclass::Slot,
            Func: Fn(A) -> $crate::effect::Reader<$r, B> + 'static,
        {
            $crate::effect::flat_map_reader::<$token, $s, $r, $w, $e, A, B, Func>(fa, function)
        }
    };
}

macro_rules! from_either_combinators {
    ($token:ty, [$s:ty, $r:ty, $w:ty, $e:ty], [$($free:ident),*]) => {
        /// Embeds an `Either`: `Left` fails, `Right` succeeds.
        pub fn from_either<$($free: $crate::typeclass::Slot,)* A>(
            either: $crate::control::Either<$e, A>,
        ) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, A>
        where
            A: $crate::typeclass::Slot,
        {
            <$token as $crate::typeclass::FromEither>::from_either::<$s, $r, $w, $e, A>(either)
        }

        /// Lifts an `Option`, failing with `on_none()` when empty.
        pub fn from_option<$($free: $crate::typeclass::Slot,)* A, OnNone>(
            option: Option<A>,
            on_none: OnNone,
        ) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, A>
        where
            A: $crate::typeclass::Slot,
            OnNone: FnOnce() -> $e,
        {
            $crate::typeclass::from_option::<$token, $s, $r, $w, $e, A, OnNone>(option, on_none)
        }

        /// Succeeds if `predicate` holds, otherwise fails with `on_false(value)`.
        pub fn from_predicate<$($free: $crate::typeclass::Slot,)* A, Predicate, OnFalse>(
            value: A,
            predicate: Predicate,
            on_false: OnFalse,
        ) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, A>
        where
            A: $crate::typeclass::Slot,
            Predicate: FnOnce(&A) -> bool,
            OnFalse: FnOnce(A) -> $e,
        {
            $crate::typeclass::from_predicate::<$token, $s, $r, $w, $e, A, Predicate, OnFalse>(value, predicate, on_false)
        }

        /// Succeeds with the narrowed value, otherwise fails with
        /// `on_false(rejected)`.
        pub fn from_refinement<$($free: $crate::typeclass::Slot,)* C, B, Refinement, OnFalse>(
            value: C,
            refinement: Refinement,
            on_false: OnFalse,
        ) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, B>
        where
            B: $crate::typeclass::Slot,
            Refinement: FnOnce(C) -> Result<B, C>,
            OnFalse: FnOnce(C) -> $e,
        {
            $crate::typeclass::from_refinement::<$token, $s, $r, $w, $e, C, B, Refinement, OnFalse>(value, refinement, on_false)
        }

        /// Turns an option-returning function into an effect-returning one.
        pub fn from_option_k<$($free: $crate::typeclass::Slot,)* A, B, Func, OnNone>(
            function: Func,
            on_none: OnNone,
        ) -> impl Fn(A) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, B>
        where
            B: $crate::typeclass::Slot,
            Func: Fn(A) -> Option<B>,
            OnNone: Fn() -> $e,
        {
            $crate::typeclass::from_option_k::<$token, $s, $r, $w, $e, A, B, Func, OnNone>(function, on_none)
        }

        /// Turns an either-returning function into an effect-returning one.
        pub fn from_either_k<$($free: $crate::typeclass::Slot,)* A, B, Func>(
            function: Func,
        ) -> impl Fn(A) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, B>
        where
            B: $crate::typeclass::Slot,
            Func: Fn(A) -> $crate::control::Either<$e, B>,
        {
            $crate::typeclass::from_either_k::<$token, $s, $r, $w, $e, A, B, Func>(function)
        }

        /// Chains an option-returning function.
        pub fn flat_map_option_k<$($free: $crate::typeclass::Slot,)* A, B, Func, OnNone>(
            fa: $crate::typeclass::Kind<$token, $s, $r, $w, $e, A>,
            function: Func,
            on_none: OnNone,
        ) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, B>
        where
            A: $crate::typeclass::Slot,
            B: $crate::typeclass::Slot,
            Func: Fn(A) -> Option<B> + 'static,
            OnNone: Fn() -> $e + 'static,
        {
            $crate::typeclass::flat_map_option_k::<$token, $s, $r, $w, $e, A, B, Func, OnNone>(fa, function, on_none)
        }

        /// Chains an either-returning function.
        pub fn flat_map_either_k<$($free: $crate::typeclass::Slot,)* A, B, Func>(
            fa: $crate::typeclass::Kind<$token, $s, $r, $w, $e, A>,
            function: Func,
        ) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, B>
        where
            A: $crate::typeclass::Slot,
            B: $crate::typeclass::Slot,
            Func: Fn(A) -> $crate::control::Either<$e, B> + 'static,
        {
            $crate::typeclass::flat_map_either_k::<$token, $s, $r, $w, $e, A, B, Func>(fa, function)
        }

        /// Keeps a success only if `predicate` holds.
        pub fn filter<$($free: $crate::typeclass::Slot,)* A, Predicate, OnFalse>(
            fa: $crate::typeclass::Kind<$token, $s, $r, $w, $e, A>,
            predicate: Predicate,
            on_false: OnFalse,
        ) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, A>
        where
            A: $crate::typeclass::Slot,
            Predicate: Fn(&A) -> bool + 'static,
            OnFalse: Fn(A) -> $e + 'static,
        {
            $crate::typeclass::filter::<$token, $s, $r, $w, $e, A, Predicate, OnFalse>(fa, predicate, on_false)
        }

        /// Narrows a success through `refinement`.
        pub fn refine<$($free: $crate::typeclass::Slot,)* C, B, Refinement, OnFalse>(
            fc: $crate::typeclass::Kind<$token, $s, $r, $w, $e, C>,
            refinement: Refinement,
            on_false: OnFalse,
        ) -> $crate::typeclass::Kind<$token, $s, $r, $w, $e, B>
        where
            C: $crate::typeclass::Slot,
            B: $crate::typeclass::Slot,
            Refinement: Fn(C) -> Result<B, C> + 'static,
            OnFalse: Fn(C) -> $e + 'static,
        {
            $crate::typeclass::refine::<$token, $s, $r, $w, $e, C, B, Refinement, OnFalse>(fc, refinement, on_false)
        }
    };
}

pub(crate) use apply_combinators;
pub(crate) use from_either_combinators;
pub(crate) use from_reader_combinators;
pub(crate) use from_sync_combinators;
pub(crate) use functor_combinators;
pub(crate) use monad_combinators;
pub(crate) use pointed_combinators;
pub(crate) use traversal_combinators;
