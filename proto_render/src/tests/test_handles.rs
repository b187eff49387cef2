use crate::core::utils::handle::Allocator;

#[test]
fn test_allocated_handles_are_live_and_readable() {
    let mut allocator = Allocator::<u32>::new();

    let first = allocator.allocate(17);
    let second = allocator.allocate(23);

    assert!(allocator.is_live(first));
    assert!(allocator.is_live(second));
    assert_ne!(first, second);
    assert_eq!(*allocator.get(first), 17);
    assert_eq!(*allocator.get(second), 23);
}

#[test]
fn test_freed_handles_are_dead() {
    let mut allocator = Allocator::<&str>::new();

    let handle = allocator.allocate("shader");
    assert!(allocator.is_live(handle));

    allocator.free(handle);
    assert!(!allocator.is_live(handle));
}

#[test]
fn test_reused_slots_invalidate_old_handles() {
    let mut allocator = Allocator::<u32>::new();

    let old = allocator.allocate(1);
    allocator.free(old);

    // The slot is reused but the stale handle stays dead
    let new = allocator.allocate(2);
    assert_eq!(old.index(), new.index());
    assert_ne!(old.generation(), new.generation());
    assert!(!allocator.is_live(old));
    assert!(allocator.is_live(new));
    assert_eq!(*allocator.get(new), 2);
}

#[test]
fn test_get_mut_updates_the_value() {
    let mut allocator = Allocator::<u32>::new();

    let handle = allocator.allocate(1);
    *allocator.get_mut(handle) = 42;
    assert_eq!(*allocator.get(handle), 42);
}
