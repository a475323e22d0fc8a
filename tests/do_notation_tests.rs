#![cfg(feature = "transformer")]
//! Do-notation: tuple scopes built with `do_`, `bind_to`, `bind`, `let_` and
//! `bind_right`, and the `eff!` macro over composite stacks.

use kindred::control::Either;
use kindred::eff;
use kindred::effect::{
    OptionLambda, ReaderSyncEither, ReaderSyncLambda, Sync, option, reader_sync, reader_sync_either,
};
use kindred::typeclass::{Identity, IdentityLambda, Pointed, bind, bind_to, do_, let_};
use rstest::rstest;

#[rstest]
fn bind_to_then_bind_yields_both_values() {
    let scope = bind_to::<OptionLambda, (), (), (), (), i32>(OptionLambda::succeed::<(), (), (), (), i32>(1));
    let scope = bind::<OptionLambda, (), (), (), (), (i32,), i32, _>(scope, |_| Some(2));
    assert_eq!(scope, Some((1, 2)));
}

#[rstest]
fn do_starts_an_empty_scope() {
    let start = do_::<IdentityLambda, (), (), (), ()>();
    assert_eq!(start, Identity(()));

    let scope = bind::<IdentityLambda, (), (), (), (), (), &str, _>(start, |_| Identity("first"));
    let scope = let_::<IdentityLambda, (), (), (), (), (&str,), usize, _>(scope, |(text,)| text.len());
    assert_eq!(scope, Identity(("first", 5)));
}

#[rstest]
fn later_bindings_see_earlier_ones() {
    let scope = option::bind(option::bind_to(Some(3)), |(a,)| Some(a * 2));
    let scope = option::let_(scope, |(a, b)| a + b);
    assert_eq!(scope, Some((3, 6, 9)));

    let failed = option::bind(option::bind_to(Some(3)), |_| None::<i32>);
    assert_eq!(option::let_(failed, |(a, b)| a + b), None);
}

#[rstest]
fn reader_sync_scope_reads_the_environment() {
    let program = reader_sync::bind_right(
        reader_sync::bind(reader_sync::bind_to(reader_sync::ask::<u32>()), |(n,)| {
            reader_sync::succeed(n + 1)
        }),
        reader_sync::asks(|n: u32| n * 100),
    );
    assert_eq!(program.run(2).run(), (2, 3, 200));
}

#[rstest]
fn reader_sync_either_scope_stops_at_first_failure() {
    let parse = |text: String| -> ReaderSyncEither<(), String, i32> {
        reader_sync_either::from_either(text.parse::<i32>().map_err(|_| format!("bad {text}")).into())
    };
    let good = reader_sync_either::bind(reader_sync_either::bind_to(parse("4".to_string())), move |_| {
        parse("5".to_string())
    });
    assert_eq!(good.run(()).run(), Either::Right((4, 5)));

    let bad = reader_sync_either::bind(reader_sync_either::bind_to(parse("x".to_string())), move |_| {
        parse("5".to_string())
    });
    assert_eq!(bad.run(()).run(), Either::Left("bad x".to_string()));
}

#[rstest]
fn eff_over_reader_sync() {
    let program = eff! { ReaderSyncLambda[(), u32, (), ()];
        base <= reader_sync::ask::<u32>();
        _ <= reader_sync::log(format!("base is {base}"));
        let doubled = base * 2;
        offset <= reader_sync::from_sync(Sync::new(move || doubled + 1));
        reader_sync::succeed(base + offset)
    };
    assert_eq!(program.run(10).run(), 31);
}
