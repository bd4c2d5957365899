//! Max-severity depths
//!
//! Largest severity distance, in tenths, that a vector can sit below the
//! exemplar of its equivalence class. Used as the denominator when turning a
//! distance into a proportion of the class.

pub fn eq1(value: u8) -> Option<u8> {
    match value {
        0 => Some(1),
        1 => Some(4),
        2 => Some(5),
        _ => None,
    }
}

pub fn eq2(value: u8) -> Option<u8> {
    match value {
        0 => Some(1),
        1 => Some(2),
        _ => None,
    }
}

pub fn eq3_eq6(eq3: u8, eq6: u8) -> Option<u8> {
    match (eq3, eq6) {
        (0, 0) => Some(7),
        (0, 1) => Some(6),
        (1, 0) => Some(8),
        (1, 1) => Some(8),
        (2, 1) => Some(10),
        _ => None,
    }
}

pub fn eq4(value: u8) -> Option<u8> {
    match value {
        0 => Some(6),
        1 => Some(5),
        2 => Some(4),
        _ => None,
    }
}

pub fn eq5(value: u8) -> Option<u8> {
    match value {
        0..=2 => Some(1),
        _ => None,
    }
}
