use bit_array::{layout, BitArrayError, PackedArray};
use bit_units::UnitBuffer;

fn main() {
    println!("=== Packed Array Examples ===\n");

    // Example 1: Storing small integers in byte units
    let _ = example_small_integers();

    // Example 2: Wide units, narrow elements
    let _ = example_wide_units();

    // Example 3: Memory comparison
    example_memory_savings();
}

fn example_small_integers() -> Result<(), BitArrayError> {
    println!("Example 1: Storing RGB color indices (5 bits each)");

    let mut buffer = UnitBuffer::<u8>::for_elements(3, 5);
    let mut colors: PackedArray<u8, u8> =
        PackedArray::new(buffer.as_mut_slice().unwrap(), 3, 5)?;

    // Store palette indices (0-31)
    colors.set(0, 15)?; // Red shade
    colors.set(1, 8)?; // Green shade
    colors.set(2, 23)?; // Blue shade

    println!("  Stored {} colors in {} bytes", colors.len(), colors.as_bytes().len());
    println!("  Color 0: {}", colors.get(0).unwrap());
    println!("  Color 1: {}", colors.get(1).unwrap());
    println!("  Color 2: {}", colors.get(2).unwrap());
    println!();

    Ok(())
}

fn example_wide_units() -> Result<(), BitArrayError> {
    println!("Example 2: 3-bit elements packed into u64 units");

    let mut storage = [0u64; 2];
    let mut array: PackedArray<u64, u32> = PackedArray::new(&mut storage, 22, 3)?;

    array.set(0, 6)?;
    array.set(10, 3)?;

    // element 0 occupies the top three bits of unit 0
    println!("  Unit 0: {:#018X}", array.as_units()[0]);
    println!("  Element 0:  {}", array.read(0));
    println!("  Element 10: {}", array.read(10));
    println!();

    Ok(())
}

fn example_memory_savings() {
    println!("Example 3: Memory savings comparison");

    let count = 10_000;

    // Standard Vec<u32>
    let standard_bytes = count * 4;

    // Packed at 12 bits per element (values 0-4095)
    let packed_bytes = layout::required_bytes(count, 12);

    let savings = 100.0 * (1.0 - (packed_bytes as f64 / standard_bytes as f64));

    println!("  Storing {} 12-bit values:", count);
    println!("  Vec<u32>: {} bytes", standard_bytes);
    println!("  Packed:   {} bytes", packed_bytes);
    println!("  Savings:  {:.1}%", savings);
}
