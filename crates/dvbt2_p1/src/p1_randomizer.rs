use crate::p1_carrier_map::P1_TOTAL_CARRIERS;

const P1_RANDOMIZER_SEED: u32 = 0x4E46;
const P1_RANDOMIZER_FEEDBACK: u32 = 0x4000;

/// Creates the ±1 scrambling sequence applied to the differentially encoded P1 carriers.
/// The register shifts right and the XOR of its two lowest bits is both the output and the feedback.
pub fn get_p1_randomizer_sequence() -> [i8; P1_TOTAL_CARRIERS] {
    let mut sequence = [0i8; P1_TOTAL_CARRIERS];
    let mut sr = P1_RANDOMIZER_SEED;
    for value in sequence.iter_mut() {
        let b = (sr ^ (sr >> 1)) & 1;
        *value = if b == 0 { 1 } else { -1 };
        sr >>= 1;
        if b != 0 {
            sr |= P1_RANDOMIZER_FEEDBACK;
        }
    }
    sequence
}
