pub const DIGITS: [char; 10] = [
    '0' , '1' , '2' , '3' , '4' ,
    '5' , '6' , '7' , '8' , '9' ,
];

pub const RADIX: u8 = 10;

/// Largest magnitude served from the small-value cache.
pub const MAX_CONSTANT: usize = 16;
