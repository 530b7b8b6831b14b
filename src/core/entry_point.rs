use crate::core::NumberComponent;
use std::io::Write;

pub const ENTRY_INPUT: i32 = 10;

/// Calls `get_number(10)` on `component` and writes the result line to `out`.
/// Returns the number that was printed.
pub fn run_entry_point<C: NumberComponent + ?Sized, W: Write>(
    component: &C,
    out: &mut W,
) -> std::io::Result<i32> {
    let number = component.get_number(ENTRY_INPUT);
    writeln!(out, "Managed Library - GetNumber({}) = {}", ENTRY_INPUT, number)?;
    Ok(number)
}
