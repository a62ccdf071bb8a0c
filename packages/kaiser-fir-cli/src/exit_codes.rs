pub const SUCCESS: i32 = 0;
pub const EXECUTION_ERROR: i32 = 1;
/// Bad arguments or unreadable input data
pub const INPUT_ERROR: i32 = 2;
/// The filter could not be designed or applied
pub const DESIGN_ERROR: i32 = 3;
