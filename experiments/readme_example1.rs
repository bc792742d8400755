use dynbuf::{DynArray, MIN_CAPACITY};

fn main() -> Result<(), dynbuf::Error> {
    let mut arr = DynArray::new();

    // Push a few elements; the first growth starts from the capacity floor
    for i in 0..3u32 {
        arr.push(i);
    }
    assert_eq!(arr.as_slice(), &[0, 1, 2]);
    assert_eq!(arr.capacity(), MIN_CAPACITY);

    // Reserve ahead of a bulk load; capacity doubles until sufficient
    arr.try_reserve(1000)?;
    assert_eq!(arr.capacity(), MIN_CAPACITY * 4);

    println!("Example 1 passed: array growth works!");
    Ok(())
}
