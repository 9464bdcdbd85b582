//! Point tables for the 10-year cardiovascular risk estimate (Framingham / ATP III).
//!
//! Every table is a list of `(upper_bound, value)` pairs ordered by bound. A
//! reading falls in the first bracket whose bound is >= the reading; the last
//! bracket of each list is open-ended and carries the type's maximum.

/// Age decade used to index the smoking and cholesterol rows.
pub const AGE_DECADE: [(u32, usize); 5] = [(39, 0), (49, 1), (59, 2), (69, 3), (u32::MAX, 4)];

/// Total cholesterol column: <160, 160-199, 200-239, 240-279, >=280 mg/dL.
pub const TOTAL_CHOLESTEROL_COLUMN: [(u32, usize); 5] =
    [(159, 0), (199, 1), (239, 2), (279, 3), (u32::MAX, 4)];

/// HDL points, shared by both sexes: <40, 40-49, 50-59, >=60 mg/dL.
pub const HDL_POINTS: [(u32, i32); 4] = [(39, 2), (49, 1), (59, 0), (u32::MAX, -1)];

pub struct SexTable {
    /// Base points for ten age sub-brackets
    pub age: [(u32, i32); 10],
    /// Smoker points per age decade
    pub smoker: [i32; 5],
    /// `[age decade][cholesterol column]`
    pub total_cholesterol: [[i32; 5]; 5],
    /// Indexed by `BloodPressureCategory::index`
    pub bp_untreated: [i32; 5],
    pub bp_treated: [i32; 5],
    /// Points total to 10-year risk percentage
    pub percent: [(i32, u8); 14],
}

pub static MALE: SexTable = SexTable {
    age: [
        (34, -9),
        (39, -4),
        (44, 0),
        (49, 3),
        (54, 6),
        (59, 8),
        (64, 10),
        (69, 11),
        (74, 12),
        (u32::MAX, 13),
    ],
    smoker: [8, 5, 3, 1, 1],
    total_cholesterol: [
        [0, 4, 7, 9, 11],
        [0, 3, 5, 6, 8],
        [0, 2, 3, 4, 5],
        [0, 1, 1, 2, 3],
        [0, 0, 0, 1, 1],
    ],
    bp_untreated: [0, 0, 1, 1, 2],
    bp_treated: [0, 1, 2, 2, 3],
    percent: [
        (0, 0),
        (4, 1),
        (6, 2),
        (7, 3),
        (8, 4),
        (9, 5),
        (10, 6),
        (11, 8),
        (12, 10),
        (13, 12),
        (14, 16),
        (15, 20),
        (16, 25),
        (i32::MAX, 30),
    ],
};

pub static FEMALE: SexTable = SexTable {
    age: [
        (34, -7),
        (39, -3),
        (44, 0),
        (49, 3),
        (54, 6),
        (59, 8),
        (64, 10),
        (69, 12),
        (74, 14),
        (u32::MAX, 16),
    ],
    smoker: [9, 7, 4, 2, 1],
    total_cholesterol: [
        [0, 4, 8, 11, 13],
        [0, 3, 6, 8, 10],
        [0, 2, 4, 5, 7],
        [0, 1, 2, 3, 4],
        [0, 1, 1, 2, 2],
    ],
    bp_untreated: [0, 1, 2, 3, 4],
    bp_treated: [0, 3, 4, 5, 6],
    percent: [
        (8, 0),
        (12, 1),
        (14, 2),
        (15, 3),
        (16, 4),
        (17, 5),
        (18, 6),
        (19, 8),
        (20, 11),
        (21, 14),
        (22, 17),
        (23, 22),
        (24, 27),
        (i32::MAX, 30),
    ],
};
