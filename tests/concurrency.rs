use std::{sync::Arc, thread};

use rosu_catch::{CatchDifficultyAttributes, Difficulty};

use self::common::*;

mod common;

fn mod_combinations() -> [u32; 6] {
    [NM, HD, HR, DT, EZ | HT, HD | HR | DT]
}

fn sequential(map: &rosu_catch::Beatmap) -> Vec<CatchDifficultyAttributes> {
    mod_combinations()
        .into_iter()
        .map(|mods| Difficulty::new().mods(mods).calculate(map).unwrap())
        .collect()
}

#[test]
fn threads_share_a_map() {
    let map = zigzag(300, 120.0);
    let expected = sequential(&map);

    let actual: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = mod_combinations()
            .into_iter()
            .map(|mods| {
                let map = &map;

                scope.spawn(move || Difficulty::new().mods(mods).calculate(map).unwrap())
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    assert_eq!(actual, expected);
}

#[test]
fn threads_on_different_maps() {
    let maps = [mixed(), zigzag(64, 250.0), zigzag(16, 90.0)];

    let expected: Vec<_> = maps.iter().map(sequential).collect();

    let actual: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = maps
            .iter()
            .map(|map| scope.spawn(move || sequential(map)))
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    assert_eq!(actual, expected);
}

#[cfg(feature = "async_tokio")]
#[test]
fn tokio_blocking_pool() {
    let map = Arc::new(mixed());
    let expected = sequential(&map);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();

    let actual: Vec<_> = runtime.block_on(async {
        let handles: Vec<_> = mod_combinations()
            .into_iter()
            .map(|mods| Difficulty::new().mods(mods).calculate_tokio(Arc::clone(&map)))
            .collect();

        let mut attrs = Vec::with_capacity(handles.len());

        for handle in handles {
            attrs.push(handle.await.unwrap().unwrap());
        }

        attrs
    });

    assert_eq!(actual, expected);
}

#[cfg(feature = "async_std")]
#[test]
fn async_std_blocking_pool() {
    let map = Arc::new(mixed());
    let expected = sequential(&map);

    let actual: Vec<_> = async_std::task::block_on(async {
        let mut attrs = Vec::with_capacity(expected.len());

        for mods in mod_combinations() {
            let res = Difficulty::new()
                .mods(mods)
                .calculate_async_std(Arc::clone(&map))
                .await;

            attrs.push(res.unwrap());
        }

        attrs
    });

    assert_eq!(actual, expected);
}

#[cfg(not(any(feature = "async_tokio", feature = "async_std")))]
#[test]
fn shared_through_arc() {
    let map = Arc::new(zigzag(100, 150.0));

    let handles: Vec<_> = mod_combinations()
        .into_iter()
        .map(|mods| {
            let map = Arc::clone(&map);

            thread::spawn(move || Difficulty::new().mods(mods).calculate(&map).unwrap())
        })
        .collect();

    let actual: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    assert_eq!(actual, sequential(&map));
}
