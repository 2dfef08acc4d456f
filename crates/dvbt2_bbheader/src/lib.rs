//! Baseband frame generation for DVB-T2 transport stream input.
//!
//! Output is one bit per byte, most significant bit of each field first.
pub mod bbheader_bits;
pub mod bbheader_crc;
pub mod bbheader_fields;
pub mod bbheader_framer;
pub mod bbheader_inband;
