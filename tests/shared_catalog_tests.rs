//! Concurrent first access to the shared catalog
//!
//! The shared catalog must be built exactly once even when its first access
//! is a race. This binary is dedicated to that race: every
//! `Catalog::global()` interaction in it happens inside the one test below.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use typecatalog::registry::register_module;
use typecatalog::{Catalog, ConstructorBuilder, Module, TypeDescriptor};

#[derive(Default)]
struct Beacon;

#[test]
fn test_racing_first_accesses_build_once() {
    const THREADS: usize = 16;

    let scans = Arc::new(AtomicUsize::new(0));
    let counted = Arc::clone(&scans);
    register_module(Module::new("beacons", move || {
        counted.fetch_add(1, Ordering::SeqCst);
        Ok(vec![TypeDescriptor::class::<Beacon>()
            .constructor(ConstructorBuilder::parameterless(Beacon::default))
            .build()])
    }));

    let barrier = Barrier::new(THREADS);
    let catalogs: Vec<&'static Catalog> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    barrier.wait();
                    Catalog::global()
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("catalog access should not panic"))
            .collect()
    });

    // Every thread observed the same instance, and only one build scanned
    let first = catalogs[0];
    assert!(catalogs.iter().all(|&c| std::ptr::eq(c, first)));
    assert!(first.contains::<Beacon>());
    assert_eq!(scans.load(Ordering::SeqCst), 1);
}
