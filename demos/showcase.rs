use linklist::LinkedList;

// cargo run --example showcase
//
// RUST_LOG=info makes the list's diagnostic side channel visible on stderr.
fn main() {
    env_logger::init();

    println!("\n=== push_front/back and delete_at ===");
    let mut list = LinkedList::new();
    list.push_back(10);
    list.push_back(20);
    list.push_front(5); // [5, 10, 20]
    println!("{list}");

    list.delete_at(1); // delete 10
    println!("{list}");

    println!("\n=== insert_at and delete_value ===");
    let mut list = LinkedList::new();
    list.push_back(1);
    list.push_back(3);
    list.insert_at(1, 2).unwrap(); // [1, 2, 3]
    println!("{list}");

    list.delete_value(2);
    println!("{list}");

    list.delete_value(42); // not found
    println!("{list}");

    println!("\n=== error handling ===");
    let mut list = LinkedList::new();

    let ok = list.delete_at(0); // empty
    println!("delete_at on empty returned: {ok}");

    match list.insert_at(1, 99) {
        Ok(()) => unreachable!("only index 0 is valid on an empty list"),
        Err(err) => println!("insert_at(1, 99) failed: {err}"),
    }
    list.insert_at(0, 99).unwrap();
    println!("{list}");

    let ok = list.delete_at(5); // out of range on a size-1 list
    println!("delete_at(5) returned: {ok}");
    println!("{list}");
}
