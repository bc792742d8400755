use dynbuf::ByteString;

fn main() {
    let hello = ByteString::from("hello");
    let world = ByteString::from(" world");

    // Every producing operation returns a freshly allocated value
    let greeting = hello.concat(&world);
    assert_eq!(greeting.len(), 11);
    println!("Greeting: {greeting}");

    // Inputs are read-only borrows, still usable afterwards
    assert_eq!(hello, "hello");

    // Hand off a terminated copy to terminator-based consumers
    let raw = greeting.to_nul_terminated();
    assert_eq!(raw.len(), 12);
    assert_eq!(raw.last(), Some(&0));

    println!("Example 2 passed: string assembly works!");
}
