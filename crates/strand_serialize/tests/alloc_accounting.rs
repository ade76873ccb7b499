//! Every allocation made by a serializer session is released by the time
//! the serializer and its outputs are gone.

#![expect(unsafe_code, reason = "Counting allocations requires a GlobalAlloc impl")]
#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

use pretty_assertions::assert_eq;
use strand_serialize::{OptionId, SerializeError, SinkBinding, Statement, Term, Uri, World};

struct Counting;

thread_local! {
    static ALLOCATED: Cell<usize> = const { Cell::new(0) };
    static FREED: Cell<usize> = const { Cell::new(0) };
}

// SAFETY: forwards to the system allocator unchanged.
unsafe impl GlobalAlloc for Counting {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            let _ = ALLOCATED.try_with(|n| n.set(n.get() + layout.size()));
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
        let _ = FREED.try_with(|n| n.set(n.get() + layout.size()));
    }
}

#[global_allocator]
static GLOBAL: Counting = Counting;

/// Bytes allocated and not yet freed on this thread.
fn live() -> usize {
    ALLOCATED.with(Cell::get).wrapping_sub(FREED.with(Cell::get))
}

fn session(world: &World) {
    let statement = Statement::new(
        Term::iri("http://example.org/s"),
        Term::iri("http://example.org/p"),
        Term::typed_literal("1", "http://www.w3.org/2001/XMLSchema#integer"),
    );
    let base = Uri::new("http://example.org/");

    // Full session into memory.
    let mut out = Vec::new();
    let mut serializer = world.new_serializer(None).unwrap();
    serializer.set_string(OptionId::JsonCallback, "callback").unwrap();
    serializer.set_string(OptionId::JsonCallback, "replaced").unwrap();
    serializer.start_to_buffer(&mut out, Some(&base)).unwrap();
    serializer.serialize_statement(&statement).unwrap();
    serializer.end().unwrap();
    drop(serializer);
    assert!(!out.is_empty());
    drop(out);

    // Destroyed mid-session.
    let mut out = Vec::new();
    let mut serializer = world.new_serializer(Some("nt")).unwrap();
    serializer.start_to_buffer(&mut out, Some(&base)).unwrap();
    serializer.serialize_statement(&statement).unwrap();
    serializer.destroy();
    assert!(out.is_empty());

    // Failed sink open and rejected option.
    let mut serializer = world.new_serializer(None).unwrap();
    let missing = std::env::temp_dir().join("strand-missing-dir").join("out.nt");
    assert!(matches!(
        serializer.start(SinkBinding::Path(missing), None),
        Err(SerializeError::SinkOpen { .. })
    ));
    assert!(serializer.set_string(OptionId::RssTriples, "a\0b").is_err());
    drop(serializer);

    // Unknown syntax.
    assert!(world.new_serializer(Some("no-such-syntax")).is_err());
}

#[test]
fn sessions_release_everything() {
    let world = World::new().unwrap();
    // Warm up one-time allocations (tracing callsites, thread locals).
    session(&world);

    let baseline = live();
    for _ in 0..3 {
        session(&world);
    }
    assert_eq!(live(), baseline);
}
