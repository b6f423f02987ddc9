//!
//! Lookup tables
//!
//! Both tables are addressed by the top bits of a normalized mantissa and
//! their exact contents are part of the accuracy contract.
//!

/// `floor((2^31 - 1) / m)` for the normalized mantissas `m = 0x8000 + i * 0x100`,
/// the Q15 reciprocal of mantissas in `[0.5, 1.0)`, indexed by the 7 bits below the MSB.
pub const RECIP_TAB: [u16; 128] = [
    0xffff, 0xfe03, 0xfc0f, 0xfa23, 0xf83e, 0xf660, 0xf489, 0xf2b9,
    0xf0f0, 0xef2e, 0xed73, 0xebbd, 0xea0e, 0xe865, 0xe6c2, 0xe525,
    0xe38e, 0xe1fc, 0xe070, 0xdee9, 0xdd67, 0xdbeb, 0xda74, 0xd901,
    0xd794, 0xd62b, 0xd4c7, 0xd368, 0xd20d, 0xd0b6, 0xcf64, 0xce16,
    0xcccc, 0xcb87, 0xca45, 0xc907, 0xc7ce, 0xc698, 0xc565, 0xc437,
    0xc30c, 0xc1e4, 0xc0c0, 0xbfa0, 0xbe82, 0xbd69, 0xbc52, 0xbb3e,
    0xba2e, 0xb921, 0xb817, 0xb70f, 0xb60b, 0xb509, 0xb40b, 0xb30f,
    0xb216, 0xb11f, 0xb02c, 0xaf3a, 0xae4c, 0xad60, 0xac76, 0xab8f,
    0xaaaa, 0xa9c8, 0xa8e8, 0xa80a, 0xa72f, 0xa655, 0xa57e, 0xa4a9,
    0xa3d7, 0xa306, 0xa237, 0xa16b, 0xa0a0, 0x9fd8, 0x9f11, 0x9e4c,
    0x9d89, 0x9cc8, 0x9c09, 0x9b4c, 0x9a90, 0x99d7, 0x991f, 0x9868,
    0x97b4, 0x9701, 0x964f, 0x95a0, 0x94f2, 0x9445, 0x939a, 0x92f1,
    0x9249, 0x91a2, 0x90fd, 0x905a, 0x8fb8, 0x8f17, 0x8e78, 0x8dda,
    0x8d3d, 0x8ca2, 0x8c08, 0x8b70, 0x8ad8, 0x8a42, 0x89ae, 0x891a,
    0x8888, 0x87f7, 0x8767, 0x86d9, 0x864b, 0x85bf, 0x8534, 0x84a9,
    0x8421, 0x8399, 0x8312, 0x828c, 0x8208, 0x8184, 0x8102, 0x8080,
];

/// Q8 estimates of `1/sqrt(m)` for the 96 buckets `m = [32, 128)` of
/// the 9 top bits of a mantissa with an even exponent.
pub const RSQRT_TAB: [u8; 96] = [
    0xfe, 0xfa, 0xf7, 0xf3, 0xf0, 0xec, 0xe9, 0xe6, 0xe4, 0xe1, 0xde, 0xdc,
    0xd9, 0xd7, 0xd4, 0xd2, 0xd0, 0xce, 0xcc, 0xca, 0xc8, 0xc6, 0xc4, 0xc2,
    0xc1, 0xbf, 0xbd, 0xbc, 0xba, 0xb9, 0xb7, 0xb6, 0xb4, 0xb3, 0xb2, 0xb0,
    0xaf, 0xae, 0xac, 0xab, 0xaa, 0xa9, 0xa8, 0xa7, 0xa6, 0xa5, 0xa3, 0xa2,
    0xa1, 0xa0, 0x9f, 0x9e, 0x9e, 0x9d, 0x9c, 0x9b, 0x9a, 0x99, 0x98, 0x97,
    0x97, 0x96, 0x95, 0x94, 0x93, 0x93, 0x92, 0x91, 0x90, 0x90, 0x8f, 0x8e,
    0x8e, 0x8d, 0x8c, 0x8c, 0x8b, 0x8a, 0x8a, 0x89, 0x89, 0x88, 0x87, 0x87,
    0x86, 0x86, 0x85, 0x84, 0x84, 0x83, 0x83, 0x82, 0x82, 0x81, 0x81, 0x80,
];
