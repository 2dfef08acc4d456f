//! P1 preamble synthesis and insertion for DVB-T2 frames.
pub mod p1_carrier_map;
pub mod p1_inserter;
pub mod p1_modulation_patterns;
pub mod p1_randomizer;
pub mod p1_symbol;
