// u8 - u128, i8 - i128, f32, f64, usize, isize, bool, char, ()
mod native_basic;

// &'static str
mod native_str;

// [T; N]
mod native_array;
