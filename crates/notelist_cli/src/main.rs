//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `notelist_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use notelist_core::TodoList;

fn main() {
    println!("notelist_core version={}", notelist_core::core_version());

    let mut list = TodoList::new();
    let id = list
        .create_note("groceries", "milk and eggs")
        .expect("demo note should be valid");
    list.create_note("laundry", "before friday")
        .expect("demo note should be valid");
    list.toggle_completed(id).expect("demo note should exist");

    println!(
        "notelist_core demo total={} uncompleted={}",
        list.total_notes(),
        list.uncompleted_count()
    );
}
