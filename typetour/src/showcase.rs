//! The primitive-type showcase printed before the interactive section.
//!
//! One labeled line per type category: example value, type name, and size in
//! bytes. Sizes stand in for the address printing of classic versions of this
//! demo; they are opaque per-type facts and keep the output deterministic.

use std::io::Write;
use std::mem::size_of;

/// Print the banner and the showcase lines.
pub fn print(writer: &mut impl Write) -> std::io::Result<()> {
    let is_active: bool = true;
    let greeting: &str = "Welcome to Rust programming!";
    let letter: char = 'A';
    let rocket: char = '🚀';
    let temperature: f32 = 98.6;
    let precision: f64 = 3.14159265359;

    writeln!(writer, "========================================")?;
    writeln!(writer, "   RUST DATA TYPES DEMONSTRATION")?;
    writeln!(writer, "========================================")?;
    writeln!(writer)?;
    writeln!(writer, "📊 PRIMITIVE DATA TYPES IN RUST:")?;
    writeln!(writer, "-------------------------------")?;
    writeln!(
        writer,
        "Boolean (bool): {is_active} ({} byte)",
        size_of::<bool>()
    )?;
    writeln!(
        writer,
        "String slice (&str): {greeting:?} ({} bytes)",
        size_of::<&str>()
    )?;
    writeln!(writer, "i8: {} ({} byte)", i8::MAX, size_of::<i8>())?;
    writeln!(writer, "i16: {} ({} bytes)", i16::MAX, size_of::<i16>())?;
    writeln!(writer, "i32: {} ({} bytes)", i32::MAX, size_of::<i32>())?;
    writeln!(writer, "i64: {} ({} bytes)", i64::MAX, size_of::<i64>())?;
    writeln!(writer, "i128: {} ({} bytes)", i128::MAX, size_of::<i128>())?;
    writeln!(writer, "isize: {} ({} bytes)", 42isize, size_of::<isize>())?;
    writeln!(writer, "u8: {} ({} byte)", u8::MAX, size_of::<u8>())?;
    writeln!(writer, "u16: {} ({} bytes)", u16::MAX, size_of::<u16>())?;
    writeln!(writer, "u32: {} ({} bytes)", u32::MAX, size_of::<u32>())?;
    writeln!(writer, "u64: {} ({} bytes)", u64::MAX, size_of::<u64>())?;
    writeln!(writer, "u128: {} ({} bytes)", u128::MAX, size_of::<u128>())?;
    writeln!(writer, "usize: {} ({} bytes)", 42usize, size_of::<usize>())?;
    writeln!(
        writer,
        "Character (char): {letter:?} ({} bytes)",
        size_of::<char>()
    )?;
    writeln!(
        writer,
        "Character (char): {rocket:?} (U+{:04X}, {} bytes)",
        rocket as u32,
        size_of::<char>()
    )?;
    writeln!(
        writer,
        "Float (f32): {temperature} ({} bytes)",
        size_of::<f32>()
    )?;
    writeln!(
        writer,
        "Float (f64): {precision:.11} ({} bytes)",
        size_of::<f64>()
    )?;
    writeln!(writer)?;
    Ok(())
}
